use rust_decimal::Decimal;
use thiserror::Error;

/// Failure raised by a single provider.
///
/// Coordinators catch these and move on to the next candidate; they never
/// reach the caller of a coordinator operation directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("{provider} declined the request: {reason}")]
    Declined { provider: String, reason: String },
    #[error("{provider} is unreachable")]
    Unreachable { provider: String },
    #[error("{provider} offers no qualities for video {video_id}")]
    NoOffering { provider: String, video_id: String },
    #[error("{provider} failed to write {key}")]
    WriteFailed { provider: String, key: String },
}

/// Structured negative outcome of a coordinator operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("No provider available in {context}")]
    Unavailable { context: String },
    #[error("All providers failed (tried: {})", attempts.join(", "))]
    Exhausted { attempts: Vec<String> },
    #[error("Transaction flagged as high risk (score {risk_score})")]
    Rejected {
        risk_score: Decimal,
        recommendations: Vec<String>,
    },
    #[error("{what} not found")]
    NotFound { what: String },
    #[error("Failed to store in {provider}")]
    StorageFailed { provider: String },
    #[error("Refund through {provider} failed: {reason}")]
    RefundFailed { provider: String, reason: String },
    #[error("Unsupported payment type: {0}")]
    UnsupportedMethod(String),
}

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolidError>;
