use crate::domain::ports::{Database, Provider};
use crate::error::ProviderError;
use tracing::info;

pub struct SqlDatabase;

impl Provider for SqlDatabase {
    fn name(&self) -> &str {
        "SqlDatabase"
    }
}

impl Database for SqlDatabase {
    fn save(&self, data: &str) -> Result<(), ProviderError> {
        info!("Saving {data} to SQL database");
        Ok(())
    }
}

pub struct MongoDatabase;

impl Provider for MongoDatabase {
    fn name(&self) -> &str {
        "MongoDatabase"
    }
}

impl Database for MongoDatabase {
    fn save(&self, data: &str) -> Result<(), ProviderError> {
        info!("Saving {data} to MongoDB");
        Ok(())
    }
}
