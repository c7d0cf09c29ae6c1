use crate::domain::outcome::{Migration, RepositoryCreated, Restoration};
use crate::domain::ports::{BackupStrategyBox, SharedStorage};
use crate::error::DispatchError;
use tracing::{info, warn};

/// Repository hosting on top of interchangeable storage backends.
pub struct RepositoryService {
    primary_storage: SharedStorage,
    backup_storage: SharedStorage,
    backup_strategy: BackupStrategyBox,
}

impl RepositoryService {
    pub fn new(
        primary_storage: SharedStorage,
        backup_storage: SharedStorage,
        backup_strategy: BackupStrategyBox,
    ) -> Self {
        Self {
            primary_storage,
            backup_storage,
            backup_strategy,
        }
    }

    pub fn primary_storage(&self) -> &str {
        self.primary_storage.name()
    }

    /// Stores the repository in primary storage, snapshots it, then mirrors it
    /// to backup storage. Only the primary write is mandatory.
    pub fn create_repository(
        &self,
        repo_id: &str,
        initial_data: &[u8],
    ) -> Result<RepositoryCreated, DispatchError> {
        self.primary_storage
            .store_repository(repo_id, initial_data)
            .map_err(|e| {
                warn!(repo_id, error = %e, "primary store failed");
                DispatchError::StorageFailed {
                    provider: self.primary_storage.name().to_string(),
                }
            })?;

        let backup = self.backup_strategy.backup_repository(repo_id, initial_data);

        let backup_created = match self.backup_storage.store_repository(repo_id, initial_data) {
            Ok(()) => true,
            Err(e) => {
                warn!(repo_id, error = %e, "backup store failed");
                false
            }
        };

        Ok(RepositoryCreated {
            repo_id: repo_id.to_string(),
            primary_storage: self.primary_storage.name().to_string(),
            backup_storage: self.backup_storage.name().to_string(),
            backup_created,
            backup_id: backup.backup_id,
        })
    }

    /// Copies the repository to `target_storage` and, once the copy succeeded,
    /// makes the target the new primary.
    pub fn migrate_repository_storage(
        &mut self,
        repo_id: &str,
        target_storage: SharedStorage,
    ) -> Result<Migration, DispatchError> {
        let repo_data = self
            .primary_storage
            .retrieve_repository(repo_id)
            .filter(|data| !data.is_empty())
            .ok_or_else(|| DispatchError::NotFound {
                what: format!("Repository {repo_id}"),
            })?;

        target_storage
            .store_repository(repo_id, &repo_data)
            .map_err(|e| {
                warn!(repo_id, error = %e, "migration write failed");
                DispatchError::StorageFailed {
                    provider: target_storage.name().to_string(),
                }
            })?;

        let migrated_from = self.primary_storage.name().to_string();
        self.primary_storage = target_storage;
        info!(repo_id, from = %migrated_from, to = self.primary_storage.name(), "storage migrated");

        Ok(Migration {
            repo_id: repo_id.to_string(),
            migrated_from,
            migrated_to: self.primary_storage.name().to_string(),
            data_size: repo_data.len(),
        })
    }

    /// Restores a snapshot into primary storage.
    pub fn restore_repository(
        &self,
        repo_id: &str,
        backup_id: &str,
    ) -> Result<Restoration, DispatchError> {
        let data = self
            .backup_strategy
            .restore_repository(repo_id, backup_id)
            .ok_or_else(|| DispatchError::NotFound {
                what: format!("Backup {backup_id}"),
            })?;

        self.primary_storage
            .store_repository(repo_id, &data)
            .map_err(|_| DispatchError::StorageFailed {
                provider: self.primary_storage.name().to_string(),
            })?;

        Ok(Restoration {
            repo_id: repo_id.to_string(),
            backup_id: backup_id.to_string(),
            restored_to: self.primary_storage.name().to_string(),
            data_size: data.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::RepositoryStorage;
    use crate::infrastructure::in_memory::{InMemoryStorage, SnapshotBackup};
    use crate::infrastructure::storage::{FilesystemStorage, S3Storage};
    use std::rc::Rc;

    #[test]
    fn test_create_repository_with_backup() {
        let svc = RepositoryService::new(
            Rc::new(FilesystemStorage::new("/repos")),
            Rc::new(S3Storage::new("github-repos", "aws_key", "aws_secret")),
            Box::new(SnapshotBackup::new()),
        );
        let created = svc
            .create_repository("my-awesome-project", b"initial_commit_data")
            .unwrap();
        assert_eq!(created.primary_storage, "FilesystemStorage");
        assert_eq!(created.backup_storage, "S3Storage");
        assert!(created.backup_created);
        assert!(created.backup_id.starts_with("backup_"));
    }

    #[test]
    fn test_backup_store_failure_is_not_fatal() {
        let svc = RepositoryService::new(
            Rc::new(InMemoryStorage::new()),
            Rc::new(S3Storage::new("bucket", "", "")),
            Box::new(SnapshotBackup::new()),
        );
        let created = svc.create_repository("repo", b"data").unwrap();
        assert!(!created.backup_created);
    }

    #[test]
    fn test_primary_store_failure_is_reported() {
        let svc = RepositoryService::new(
            Rc::new(S3Storage::new("bucket", "", "")),
            Rc::new(InMemoryStorage::new()),
            Box::new(SnapshotBackup::new()),
        );
        assert_eq!(
            svc.create_repository("repo", b"data").unwrap_err(),
            DispatchError::StorageFailed {
                provider: "S3Storage".to_string()
            }
        );
    }

    #[test]
    fn test_migration_replaces_primary() {
        let source = Rc::new(InMemoryStorage::new());
        let target = Rc::new(InMemoryStorage::new());
        let mut svc = RepositoryService::new(
            source.clone(),
            Rc::new(FilesystemStorage::new("/backups")),
            Box::new(SnapshotBackup::new()),
        );
        svc.create_repository("repo", b"commit-1").unwrap();

        let migration = svc
            .migrate_repository_storage("repo", target.clone())
            .unwrap();
        assert_eq!(migration.data_size, 8);
        assert_eq!(target.retrieve_repository("repo").unwrap(), b"commit-1");
        assert!(Rc::ptr_eq(
            &(target as SharedStorage),
            &svc.primary_storage
        ));
    }

    #[test]
    fn test_migration_of_unknown_repository_keeps_primary() {
        let mut svc = RepositoryService::new(
            Rc::new(InMemoryStorage::new()),
            Rc::new(InMemoryStorage::new()),
            Box::new(SnapshotBackup::new()),
        );
        let err = svc
            .migrate_repository_storage("ghost", Rc::new(FilesystemStorage::new("/repos")))
            .unwrap_err();
        assert!(matches!(err, DispatchError::NotFound { .. }));
        assert_eq!(svc.primary_storage(), "InMemoryStorage");
    }

    #[test]
    fn test_restore_from_snapshot() {
        let primary = Rc::new(InMemoryStorage::new());
        let svc = RepositoryService::new(
            primary.clone(),
            Rc::new(InMemoryStorage::new()),
            Box::new(SnapshotBackup::new()),
        );
        let created = svc.create_repository("repo", b"v1").unwrap();
        primary.delete_repository("repo").unwrap();

        let restored = svc.restore_repository("repo", &created.backup_id).unwrap();
        assert_eq!(restored.data_size, 2);
        assert!(primary.contains("repo"));
    }
}
