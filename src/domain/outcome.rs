//! Ephemeral results returned by coordinator operations.
//!
//! None of these are stored; callers consume them right away (print them,
//! serialize them, assert on them). Every result names the provider that
//! produced it through the provider's identity tag.

use super::money::{Amount, Money};
use crate::error::DispatchError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamSession {
    pub stream_url: String,
    pub quality: String,
    pub cdn_provider: String,
    pub using_backup: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderCost {
    pub provider: String,
    pub cost: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostComparison {
    pub recommended_cdn: String,
    pub cost: Money,
    pub savings: Money,
    pub primary: ProviderCost,
    pub backup: ProviderCost,
}

/// What a single payment method returns after charging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub amount: Amount,
    pub fee: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefundReceipt {
    pub refund_id: String,
    pub transaction_id: String,
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_score: rust_decimal::Decimal,
    pub is_safe: bool,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RidePayment {
    pub transaction_id: String,
    pub amount_charged: Amount,
    pub processing_fee: Money,
    pub payment_method: String,
    pub fraud_check_passed: bool,
    pub risk_score: rust_decimal::Decimal,
    /// Providers tried, in order, including the one that succeeded.
    pub attempts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodQuote {
    pub method: String,
    pub fee: Money,
    pub total_cost: Money,
    pub percentage: rust_decimal::Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheapestMethod {
    pub recommended_method: String,
    pub fee: Money,
    /// Fee difference to the runner-up quote.
    pub savings: Money,
    /// Fee difference to the most expensive quote.
    pub max_savings: Money,
    pub quotes: Vec<MethodQuote>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackupRecord {
    pub backup_id: String,
    pub repo_id: String,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorageStats {
    pub size_mb: u64,
    pub storage_class: Option<String>,
    pub cost_per_month: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryCreated {
    pub repo_id: String,
    pub primary_storage: String,
    pub backup_storage: String,
    pub backup_created: bool,
    pub backup_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Migration {
    pub repo_id: String,
    pub migrated_from: String,
    pub migrated_to: String,
    pub data_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restoration {
    pub repo_id: String,
    pub backup_id: String,
    pub restored_to: String,
    pub data_size: usize,
}

/// Success/failure envelope used when results are reported outward.
///
/// On success the result's fields are flattened next to `success: true`;
/// on failure only the error message is kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    #[serde(flatten)]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<Result<T, DispatchError>> for Outcome<T> {
    fn from(result: Result<T, DispatchError>) -> Self {
        match result {
            Ok(value) => Self {
                success: true,
                result: Some(value),
                error: None,
            },
            Err(e) => Self {
                success: false,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }
}
