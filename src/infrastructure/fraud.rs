use crate::domain::money::Amount;
use crate::domain::outcome::RiskAssessment;
use crate::domain::ports::{FraudDetection, Provider};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

/// Sift scoring: small charges are low risk, everything from 100 up is
/// medium risk. A transaction is safe while its score stays below the
/// threshold.
pub struct SiftFraudDetection {
    name: String,
    api_key: String,
    threshold: Decimal,
}

impl SiftFraudDetection {
    pub const DEFAULT_THRESHOLD: Decimal = dec!(0.5);
    const LARGE_CHARGE: Decimal = dec!(100);
    const VERIFY_LOCATION_ABOVE: Decimal = dec!(0.3);

    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_threshold(api_key, Self::DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(api_key: impl Into<String>, threshold: Decimal) -> Self {
        Self {
            name: "SiftFraudDetection".to_string(),
            api_key: api_key.into(),
            threshold,
        }
    }

    fn score(&self, amount: Amount) -> Decimal {
        if amount.value() < Self::LARGE_CHARGE {
            dec!(0.15)
        } else {
            dec!(0.35)
        }
    }
}

impl Provider for SiftFraudDetection {
    fn name(&self) -> &str {
        &self.name
    }
}

impl FraudDetection for SiftFraudDetection {
    fn check_transaction(&self, user_id: &str, amount: Amount, location: &str) -> RiskAssessment {
        info!(
            key_set = !self.api_key.is_empty(),
            location, "Sift: Checking fraud for user {user_id}, amount {amount}"
        );
        let risk_score = self.score(amount);
        let recommendations = if risk_score > Self::VERIFY_LOCATION_ABOVE {
            vec!["verify_location".to_string()]
        } else {
            Vec::new()
        };
        RiskAssessment {
            risk_score,
            is_safe: risk_score < self.threshold,
            recommendations,
        }
    }
}
