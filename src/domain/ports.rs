//! Capability interfaces owned by the coordinators.
//!
//! Every provider carries an explicit identity tag, set when it is
//! constructed and read through [`Provider::name`]. Coordinators report
//! "which provider served this" from that tag only.

use super::money::{Amount, Money};
use super::outcome::{BackupRecord, PaymentReceipt, RefundReceipt, RiskAssessment, StorageStats};
use super::user::User;
use crate::error::ProviderError;
use rust_decimal::Decimal;
use std::rc::Rc;

pub trait Provider {
    fn name(&self) -> &str;
}

pub trait CdnProvider: Provider {
    fn stream_url(
        &self,
        video_id: &str,
        quality: &str,
        user_location: &str,
    ) -> Result<String, ProviderError>;
    /// Offered qualities, ordered from lowest to best.
    fn available_qualities(&self, video_id: &str) -> Vec<String>;
    fn bandwidth_cost(&self, data_gb: Decimal) -> Money;
    fn is_available_in_region(&self, region: &str) -> bool;
}

pub trait VideoAnalytics: Provider {
    fn track_stream_start(&self, user_id: &str, video_id: &str, quality: &str);
    fn track_buffering_event(&self, user_id: &str, video_id: &str, buffer_time_secs: f64);
}

/// Context forwarded to a payment method alongside the charge.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMetadata {
    pub user_id: String,
    pub ride_type: String,
    pub location: String,
}

pub trait PaymentMethod: Provider {
    fn process_payment(
        &self,
        amount: Amount,
        metadata: &PaymentMetadata,
    ) -> Result<PaymentReceipt, ProviderError>;
    fn refund_payment(
        &self,
        transaction_id: &str,
        amount: Amount,
    ) -> Result<RefundReceipt, ProviderError>;
    fn is_available_in_country(&self, country_code: &str) -> bool;
    fn processing_fee(&self, amount: Amount) -> Money;
}

pub trait FraudDetection: Provider {
    fn check_transaction(&self, user_id: &str, amount: Amount, location: &str) -> RiskAssessment;
}

pub trait RepositoryStorage: Provider {
    fn store_repository(&self, repo_id: &str, repo_data: &[u8]) -> Result<(), ProviderError>;
    fn retrieve_repository(&self, repo_id: &str) -> Option<Vec<u8>>;
    fn delete_repository(&self, repo_id: &str) -> Result<(), ProviderError>;
    fn storage_stats(&self, repo_id: &str) -> StorageStats;
}

pub trait BackupStrategy: Provider {
    fn backup_repository(&self, repo_id: &str, repo_data: &[u8]) -> BackupRecord;
    fn restore_repository(&self, repo_id: &str, backup_id: &str) -> Option<Vec<u8>>;
}

pub trait Database: Provider {
    fn save(&self, data: &str) -> Result<(), ProviderError>;
}

pub trait EmailService: Provider {
    fn send_welcome_email(&self, user: &User) -> Result<(), ProviderError>;
}

/// A checkout channel registered by name with the payment processor.
pub trait PaymentChannel: Provider {
    fn process(&self, amount: Amount) -> String;
}

pub type CdnProviderBox = Box<dyn CdnProvider>;
pub type VideoAnalyticsBox = Box<dyn VideoAnalytics>;
pub type PaymentMethodBox = Box<dyn PaymentMethod>;
pub type FraudDetectionBox = Box<dyn FraudDetection>;
/// Storage is shared: the same backend may serve as backup and later as
/// migration target.
pub type SharedStorage = Rc<dyn RepositoryStorage>;
pub type BackupStrategyBox = Box<dyn BackupStrategy>;
pub type DatabaseBox = Box<dyn Database>;
pub type EmailServiceBox = Box<dyn EmailService>;
pub type PaymentChannelBox = Box<dyn PaymentChannel>;
