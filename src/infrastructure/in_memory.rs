use crate::domain::outcome::{BackupRecord, StorageStats};
use crate::domain::ports::{BackupStrategy, Provider, RepositoryStorage};
use crate::error::ProviderError;
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// Repository storage backed by a `HashMap`.
///
/// Uses `RefCell` for interior mutability; the whole crate is single-threaded,
/// so no lock is needed. Ideal for tests and migrations between backends.
#[derive(Default)]
pub struct InMemoryStorage {
    repositories: RefCell<HashMap<String, Vec<u8>>>,
}

impl InMemoryStorage {
    /// Creates a new, empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, repo_id: &str) -> bool {
        self.repositories.borrow().contains_key(repo_id)
    }

    pub fn len(&self) -> usize {
        self.repositories.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Provider for InMemoryStorage {
    fn name(&self) -> &str {
        "InMemoryStorage"
    }
}

impl RepositoryStorage for InMemoryStorage {
    fn store_repository(&self, repo_id: &str, repo_data: &[u8]) -> Result<(), ProviderError> {
        debug!(repo_id, bytes = repo_data.len(), "in-memory store");
        self.repositories
            .borrow_mut()
            .insert(repo_id.to_string(), repo_data.to_vec());
        Ok(())
    }

    fn retrieve_repository(&self, repo_id: &str) -> Option<Vec<u8>> {
        self.repositories.borrow().get(repo_id).cloned()
    }

    fn delete_repository(&self, repo_id: &str) -> Result<(), ProviderError> {
        self.repositories.borrow_mut().remove(repo_id);
        Ok(())
    }

    fn storage_stats(&self, repo_id: &str) -> StorageStats {
        let bytes = self
            .repositories
            .borrow()
            .get(repo_id)
            .map_or(0, |data| data.len() as u64);
        StorageStats {
            size_mb: bytes / (1024 * 1024),
            storage_class: Some("MEMORY".to_string()),
            cost_per_month: None,
        }
    }
}

/// Backup strategy that keeps full snapshots in memory, keyed by backup id.
#[derive(Default)]
pub struct SnapshotBackup {
    snapshots: RefCell<HashMap<String, (String, Vec<u8>)>>,
}

impl SnapshotBackup {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Provider for SnapshotBackup {
    fn name(&self) -> &str {
        "SnapshotBackup"
    }
}

impl BackupStrategy for SnapshotBackup {
    fn backup_repository(&self, repo_id: &str, repo_data: &[u8]) -> BackupRecord {
        let backup_id = format!("backup_{}", Uuid::new_v4());
        debug!(repo_id, %backup_id, "snapshot taken");
        self.snapshots.borrow_mut().insert(
            backup_id.clone(),
            (repo_id.to_string(), repo_data.to_vec()),
        );
        BackupRecord {
            backup_id,
            repo_id: repo_id.to_string(),
            size_bytes: repo_data.len(),
        }
    }

    /// Only returns data when the snapshot belongs to `repo_id`.
    fn restore_repository(&self, repo_id: &str, backup_id: &str) -> Option<Vec<u8>> {
        self.snapshots
            .borrow()
            .get(backup_id)
            .filter(|(owner, _)| owner == repo_id)
            .map(|(_, data)| data.clone())
    }
}
