#![allow(dead_code)]

use rust_decimal::Decimal;
use solid_patterns::domain::money::{Amount, Money};
use solid_patterns::domain::outcome::{PaymentReceipt, RefundReceipt, RiskAssessment};
use solid_patterns::domain::ports::{
    CdnProvider, FraudDetection, PaymentMetadata, PaymentMethod, Provider, VideoAnalytics,
};
use solid_patterns::error::ProviderError;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared, ordered log of calls made on test doubles.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Analytics that records every event instead of sending it.
pub struct RecordingAnalytics {
    pub events: CallLog,
}

impl RecordingAnalytics {
    pub fn new(events: CallLog) -> Self {
        Self { events }
    }
}

impl Provider for RecordingAnalytics {
    fn name(&self) -> &str {
        "RecordingAnalytics"
    }
}

impl VideoAnalytics for RecordingAnalytics {
    fn track_stream_start(&self, user_id: &str, video_id: &str, quality: &str) {
        self.events
            .borrow_mut()
            .push(format!("start:{user_id}:{video_id}:{quality}"));
    }

    fn track_buffering_event(&self, user_id: &str, video_id: &str, buffer_time_secs: f64) {
        self.events
            .borrow_mut()
            .push(format!("buffer:{user_id}:{video_id}:{buffer_time_secs}"));
    }
}

/// A CDN that serves every region but whose calls always fail.
pub struct OfflineCdn {
    pub name: String,
}

impl OfflineCdn {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Provider for OfflineCdn {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CdnProvider for OfflineCdn {
    fn stream_url(&self, _: &str, _: &str, _: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Unreachable {
            provider: self.name.clone(),
        })
    }

    fn available_qualities(&self, _: &str) -> Vec<String> {
        vec!["720p".to_string()]
    }

    fn bandwidth_cost(&self, data_gb: Decimal) -> Money {
        Money::new(data_gb)
    }

    fn is_available_in_region(&self, _: &str) -> bool {
        true
    }
}

/// Payment method that logs each attempt and then succeeds or declines as
/// configured. Available everywhere, no fee.
pub struct ScriptedPayment {
    name: String,
    succeeds: bool,
    attempts: CallLog,
}

impl ScriptedPayment {
    pub fn succeeding(name: &str, attempts: &CallLog) -> Self {
        Self::new(name, true, attempts)
    }

    pub fn failing(name: &str, attempts: &CallLog) -> Self {
        Self::new(name, false, attempts)
    }

    fn new(name: &str, succeeds: bool, attempts: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            succeeds,
            attempts: Rc::clone(attempts),
        }
    }
}

impl Provider for ScriptedPayment {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PaymentMethod for ScriptedPayment {
    fn process_payment(
        &self,
        amount: Amount,
        _: &PaymentMetadata,
    ) -> Result<PaymentReceipt, ProviderError> {
        self.attempts.borrow_mut().push(self.name.clone());
        if self.succeeds {
            Ok(PaymentReceipt {
                transaction_id: format!("{}_tx", self.name),
                amount,
                fee: Money::ZERO,
            })
        } else {
            Err(ProviderError::Declined {
                provider: self.name.clone(),
                reason: "scripted failure".to_string(),
            })
        }
    }

    fn refund_payment(
        &self,
        transaction_id: &str,
        amount: Amount,
    ) -> Result<RefundReceipt, ProviderError> {
        Ok(RefundReceipt {
            refund_id: format!("{}_refund", self.name),
            transaction_id: transaction_id.to_string(),
            amount,
        })
    }

    fn is_available_in_country(&self, _: &str) -> bool {
        true
    }

    fn processing_fee(&self, _: Amount) -> Money {
        Money::ZERO
    }
}

/// Fraud detector returning a fixed score against a fixed threshold.
pub struct FixedRiskFraud {
    pub score: Decimal,
    pub threshold: Decimal,
}

impl Provider for FixedRiskFraud {
    fn name(&self) -> &str {
        "FixedRiskFraud"
    }
}

impl FraudDetection for FixedRiskFraud {
    fn check_transaction(&self, _: &str, _: Amount, _: &str) -> RiskAssessment {
        RiskAssessment {
            risk_score: self.score,
            is_safe: self.score < self.threshold,
            recommendations: vec![],
        }
    }
}
