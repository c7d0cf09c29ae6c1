use crate::domain::money::Money;
use crate::domain::outcome::StorageStats;
use crate::domain::ports::{Provider, RepositoryStorage};
use crate::error::ProviderError;
use rust_decimal_macros::dec;
use tracing::info;

/// Simulated local filesystem backend. Every repository "exists".
pub struct FilesystemStorage {
    name: String,
    base_path: String,
}

impl FilesystemStorage {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            name: "FilesystemStorage".to_string(),
            base_path: base_path.into(),
        }
    }
}

impl Provider for FilesystemStorage {
    fn name(&self) -> &str {
        &self.name
    }
}

impl RepositoryStorage for FilesystemStorage {
    fn store_repository(&self, repo_id: &str, repo_data: &[u8]) -> Result<(), ProviderError> {
        info!(
            bytes = repo_data.len(),
            "Filesystem: Storing repo {repo_id} to {}", self.base_path
        );
        Ok(())
    }

    fn retrieve_repository(&self, repo_id: &str) -> Option<Vec<u8>> {
        info!("Filesystem: Retrieving repo {repo_id}");
        Some(b"mock_repo_data".to_vec())
    }

    fn delete_repository(&self, repo_id: &str) -> Result<(), ProviderError> {
        info!("Filesystem: Deleting repo {repo_id}");
        Ok(())
    }

    fn storage_stats(&self, _repo_id: &str) -> StorageStats {
        StorageStats {
            size_mb: 150,
            storage_class: None,
            cost_per_month: None,
        }
    }
}

/// Simulated S3 bucket.
pub struct S3Storage {
    name: String,
    bucket_name: String,
    aws_access_key: String,
    aws_secret: String,
}

impl S3Storage {
    pub fn new(
        bucket_name: impl Into<String>,
        aws_access_key: impl Into<String>,
        aws_secret: impl Into<String>,
    ) -> Self {
        Self {
            name: "S3Storage".to_string(),
            bucket_name: bucket_name.into(),
            aws_access_key: aws_access_key.into(),
            aws_secret: aws_secret.into(),
        }
    }
}

impl Provider for S3Storage {
    fn name(&self) -> &str {
        &self.name
    }
}

impl RepositoryStorage for S3Storage {
    fn store_repository(&self, repo_id: &str, repo_data: &[u8]) -> Result<(), ProviderError> {
        if self.aws_access_key.is_empty() || self.aws_secret.is_empty() {
            return Err(ProviderError::WriteFailed {
                provider: self.name.clone(),
                key: repo_id.to_string(),
            });
        }
        info!(
            bytes = repo_data.len(),
            "S3: Storing repo {repo_id} to bucket {}", self.bucket_name
        );
        Ok(())
    }

    fn retrieve_repository(&self, repo_id: &str) -> Option<Vec<u8>> {
        info!("S3: Retrieving repo {repo_id} from bucket {}", self.bucket_name);
        Some(b"s3_repo_data".to_vec())
    }

    fn delete_repository(&self, repo_id: &str) -> Result<(), ProviderError> {
        info!("S3: Deleting repo {repo_id} from bucket {}", self.bucket_name);
        Ok(())
    }

    fn storage_stats(&self, _repo_id: &str) -> StorageStats {
        StorageStats {
            size_mb: 150,
            storage_class: Some("STANDARD".to_string()),
            cost_per_month: Some(Money::new(dec!(3.45))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_simulation() {
        let fs = FilesystemStorage::new("/repos");
        assert!(fs.store_repository("r", b"data").is_ok());
        assert_eq!(fs.retrieve_repository("r").unwrap(), b"mock_repo_data");
        assert_eq!(fs.storage_stats("r").storage_class, None);
    }

    #[test]
    fn test_s3_requires_credentials_to_write() {
        let s3 = S3Storage::new("bucket", "", "");
        assert!(matches!(
            s3.store_repository("r", b"data"),
            Err(ProviderError::WriteFailed { .. })
        ));

        let s3 = S3Storage::new("bucket", "key", "secret");
        assert!(s3.store_repository("r", b"data").is_ok());
        assert_eq!(
            s3.storage_stats("r").cost_per_month,
            Some(Money::new(dec!(3.45)))
        );
    }
}
