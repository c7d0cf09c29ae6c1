use crate::domain::money::{Amount, Money};
use crate::domain::outcome::{CheapestMethod, MethodQuote, RefundReceipt, RidePayment};
use crate::domain::ports::{FraudDetectionBox, PaymentMetadata, PaymentMethod, PaymentMethodBox};
use crate::error::DispatchError;
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Charges rides through an ordered list of payment methods, guarded by a
/// fraud check.
pub struct RidePaymentService {
    payment_methods: Vec<PaymentMethodBox>,
    fraud_detector: FraudDetectionBox,
}

impl RidePaymentService {
    pub fn new(payment_methods: Vec<PaymentMethodBox>, fraud_detector: FraudDetectionBox) -> Self {
        Self {
            payment_methods,
            fraud_detector,
        }
    }

    fn available_in(&self, country: &str) -> Vec<&dyn PaymentMethod> {
        self.payment_methods
            .iter()
            .map(|m| m.as_ref())
            .filter(|m| m.is_available_in_country(country))
            .collect()
    }

    /// Processes a ride payment.
    ///
    /// The fraud check runs first and can veto the whole operation. The
    /// methods available in `user_country` are then tried once each, in
    /// rotation starting at `preferred_method_index` (wrapping to the front).
    /// An index past the end of the available list starts at the front.
    pub fn complete_ride_payment(
        &self,
        user_id: &str,
        ride_amount: Amount,
        user_country: &str,
        user_location: &str,
        preferred_method_index: usize,
    ) -> Result<RidePayment, DispatchError> {
        let fraud_check = self
            .fraud_detector
            .check_transaction(user_id, ride_amount, user_location);
        if !fraud_check.is_safe {
            warn!(user_id, risk_score = %fraud_check.risk_score, "payment rejected by fraud check");
            return Err(DispatchError::Rejected {
                risk_score: fraud_check.risk_score,
                recommendations: fraud_check.recommendations,
            });
        }

        let available = self.available_in(user_country);
        if available.is_empty() {
            return Err(DispatchError::Unavailable {
                context: format!("country {user_country}"),
            });
        }

        let start = if preferred_method_index < available.len() {
            preferred_method_index
        } else {
            0
        };
        let metadata = PaymentMetadata {
            user_id: user_id.to_string(),
            ride_type: "standard".to_string(),
            location: user_location.to_string(),
        };

        let mut attempts = Vec::with_capacity(available.len());
        for method in available.iter().cycle().skip(start).take(available.len()) {
            attempts.push(method.name().to_string());
            match method.process_payment(ride_amount, &metadata) {
                Ok(receipt) => {
                    info!(
                        method = method.name(),
                        transaction_id = %receipt.transaction_id,
                        "ride payment completed"
                    );
                    return Ok(RidePayment {
                        transaction_id: receipt.transaction_id,
                        amount_charged: ride_amount,
                        processing_fee: receipt.fee,
                        payment_method: method.name().to_string(),
                        fraud_check_passed: true,
                        risk_score: fraud_check.risk_score,
                        attempts,
                    });
                }
                Err(e) => warn!(method = method.name(), error = %e, "Payment failed"),
            }
        }

        Err(DispatchError::Exhausted { attempts })
    }

    /// Refunds through the method whose identity matches `method_name`.
    pub fn refund_ride_payment(
        &self,
        method_name: &str,
        transaction_id: &str,
        amount: Amount,
    ) -> Result<RefundReceipt, DispatchError> {
        let method = self
            .payment_methods
            .iter()
            .find(|m| m.name() == method_name)
            .ok_or_else(|| DispatchError::UnsupportedMethod(method_name.to_string()))?;

        method.refund_payment(transaction_id, amount).map_err(|e| {
            warn!(method = method_name, error = %e, "refund failed");
            DispatchError::RefundFailed {
                provider: method_name.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Quotes every method available in `country` and recommends the one
    /// with the lowest fee (first listed wins ties).
    pub fn cheapest_payment_method(
        &self,
        amount: Amount,
        country: &str,
    ) -> Result<CheapestMethod, DispatchError> {
        let quotes: Vec<MethodQuote> = self
            .available_in(country)
            .into_iter()
            .map(|method| {
                let fee = method.processing_fee(amount);
                MethodQuote {
                    method: method.name().to_string(),
                    fee,
                    total_cost: Money::from(amount) + fee,
                    percentage: fee.value() / amount.value() * Decimal::ONE_HUNDRED,
                }
            })
            .collect();

        let (recommended_method, fee) = quotes
            .iter()
            .min_by_key(|q| q.fee)
            .map(|q| (q.method.clone(), q.fee))
            .ok_or_else(|| DispatchError::Unavailable {
                context: format!("country {country}"),
            })?;

        let mut fees: Vec<Money> = quotes.iter().map(|q| q.fee).collect();
        fees.sort();
        let runner_up = fees.get(1).copied().unwrap_or(fee);
        let most_expensive = fees.last().copied().unwrap_or(fee);

        Ok(CheapestMethod {
            recommended_method,
            fee,
            savings: runner_up - fee,
            max_savings: most_expensive - fee,
            quotes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fraud::SiftFraudDetection;
    use crate::infrastructure::payment_methods::{ApplePayment, PayPalPayment, StripePayment};
    use rust_decimal_macros::dec;

    fn service() -> RidePaymentService {
        RidePaymentService::new(
            vec![
                Box::new(StripePayment::new("stripe_key")),
                Box::new(PayPalPayment::new("paypal_client", "paypal_secret")),
                Box::new(ApplePayment::new("merchant123")),
            ],
            Box::new(SiftFraudDetection::new("sift_key")),
        )
    }

    #[test]
    fn test_preferred_method_charges_first() {
        let amount = Amount::new(dec!(25.50)).unwrap();
        let payment = service()
            .complete_ride_payment("rider123", amount, "US", "San Francisco", 0)
            .unwrap();
        assert_eq!(payment.payment_method, "StripePayment");
        assert_eq!(payment.processing_fee, Money::new(dec!(1.0395)));
        assert_eq!(payment.attempts, vec!["StripePayment"]);
        assert!(payment.fraud_check_passed);
    }

    #[test]
    fn test_rotation_start_index() {
        let amount = Amount::new(dec!(10)).unwrap();
        let payment = service()
            .complete_ride_payment("u", amount, "US", "NYC", 2)
            .unwrap();
        assert_eq!(payment.payment_method, "ApplePayment");
    }

    #[test]
    fn test_out_of_range_index_starts_at_front() {
        let amount = Amount::new(dec!(10)).unwrap();
        let payment = service()
            .complete_ride_payment("u", amount, "US", "NYC", 7)
            .unwrap();
        assert_eq!(payment.payment_method, "StripePayment");
    }

    #[test]
    fn test_country_filter_applies_before_rotation() {
        // Only PayPal serves Brazil, so index 0 of the available list is PayPal.
        let amount = Amount::new(dec!(10)).unwrap();
        let payment = service()
            .complete_ride_payment("u", amount, "BR", "Rio", 0)
            .unwrap();
        assert_eq!(payment.payment_method, "PayPalPayment");
    }

    #[test]
    fn test_no_method_in_country() {
        let svc = RidePaymentService::new(
            vec![Box::new(StripePayment::new("k"))],
            Box::new(SiftFraudDetection::new("sift_key")),
        );
        let amount = Amount::new(dec!(10)).unwrap();
        assert!(matches!(
            svc.complete_ride_payment("u", amount, "JP", "Tokyo", 0),
            Err(DispatchError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_fraud_guard_rejects_before_any_method() {
        let svc = RidePaymentService::new(
            vec![Box::new(StripePayment::new("k"))],
            Box::new(SiftFraudDetection::with_threshold("k", dec!(0.3))),
        );
        let amount = Amount::new(dec!(150)).unwrap();
        let err = svc
            .complete_ride_payment("u", amount, "US", "NYC", 0)
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::Rejected {
                risk_score: dec!(0.35),
                recommendations: vec!["verify_location".to_string()],
            }
        );
    }

    #[test]
    fn test_cheapest_method_for_one_hundred() {
        let svc = RidePaymentService::new(
            vec![
                Box::new(StripePayment::new("k")),
                Box::new(PayPalPayment::new("i", "s")),
            ],
            Box::new(SiftFraudDetection::new("k")),
        );
        let cheapest = svc
            .cheapest_payment_method(Amount::new(dec!(100)).unwrap(), "US")
            .unwrap();
        assert_eq!(cheapest.recommended_method, "StripePayment");
        assert_eq!(cheapest.fee, Money::new(dec!(3.20)));
        assert_eq!(cheapest.savings, Money::new(dec!(0.29)));
        assert_eq!(cheapest.max_savings, Money::new(dec!(0.29)));
        assert_eq!(cheapest.quotes[0].total_cost, Money::new(dec!(103.20)));
        assert_eq!(cheapest.quotes[1].percentage, dec!(3.49));
    }

    #[test]
    fn test_cheapest_method_reports_runner_up_and_max_savings() {
        let cheapest = service()
            .cheapest_payment_method(Amount::new(dec!(100)).unwrap(), "US")
            .unwrap();
        assert_eq!(cheapest.recommended_method, "ApplePayment");
        assert_eq!(cheapest.fee, Money::new(dec!(2.50)));
        assert_eq!(cheapest.savings, Money::new(dec!(0.70)));
        assert_eq!(cheapest.max_savings, Money::new(dec!(0.99)));
        assert_eq!(cheapest.quotes.len(), 3);
    }

    #[test]
    fn test_refund_through_named_method() {
        let amount = Amount::new(dec!(25.50)).unwrap();
        let refund = service()
            .refund_ride_payment("ApplePayment", "apple_1", amount)
            .unwrap();
        assert!(refund.refund_id.starts_with("apple_refund_"));

        assert!(matches!(
            service().refund_ride_payment("Venmo", "v_1", amount),
            Err(DispatchError::UnsupportedMethod(_))
        ));
    }

    #[test]
    fn test_failed_refund_names_the_method() {
        let svc = RidePaymentService::new(
            vec![Box::new(StripePayment::new(""))],
            Box::new(SiftFraudDetection::new("k")),
        );
        let err = svc
            .refund_ride_payment("StripePayment", "stripe_1", Amount::new(dec!(5)).unwrap())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Refund through StripePayment failed: StripePayment is unreachable"
        );
    }

    #[test]
    fn test_cheapest_at_largest_amount_does_not_overflow() {
        let amount = Amount::new(Amount::MAX).unwrap();
        let cheapest = service().cheapest_payment_method(amount, "US").unwrap();
        assert_eq!(cheapest.recommended_method, "ApplePayment");
        assert_eq!(cheapest.fee, Money::new(dec!(25000000000)));
        assert!(cheapest.quotes.iter().all(|q| q.total_cost > Money::from(amount)));
    }
}
