mod common;

use common::{FixedRiskFraud, ScriptedPayment, call_log};
use rust_decimal_macros::dec;
use solid_patterns::application::payments::RidePaymentService;
use solid_patterns::domain::money::{Amount, Money};
use solid_patterns::error::DispatchError;
use solid_patterns::infrastructure::fraud::SiftFraudDetection;
use solid_patterns::infrastructure::payment_methods::{PayPalPayment, StripePayment};

fn fare(value: rust_decimal::Decimal) -> Amount {
    Amount::new(value).unwrap()
}

#[test]
fn test_each_method_tried_once_until_success() {
    let attempts = call_log();
    let service = RidePaymentService::new(
        vec![
            Box::new(ScriptedPayment::failing("A", &attempts)),
            Box::new(ScriptedPayment::failing("B", &attempts)),
            Box::new(ScriptedPayment::succeeding("C", &attempts)),
        ],
        Box::new(SiftFraudDetection::new("sift_key")),
    );

    let payment = service
        .complete_ride_payment("rider", fare(dec!(20)), "US", "NYC", 0)
        .unwrap();

    assert_eq!(payment.payment_method, "C");
    assert_eq!(payment.attempts, vec!["A", "B", "C"]);
    assert_eq!(*attempts.borrow(), vec!["A", "B", "C"]);
}

#[test]
fn test_rotation_wraps_and_exhausts() {
    let attempts = call_log();
    let service = RidePaymentService::new(
        vec![
            Box::new(ScriptedPayment::failing("A", &attempts)),
            Box::new(ScriptedPayment::failing("B", &attempts)),
            Box::new(ScriptedPayment::failing("C", &attempts)),
        ],
        Box::new(SiftFraudDetection::new("sift_key")),
    );

    let err = service
        .complete_ride_payment("rider", fare(dec!(20)), "US", "NYC", 1)
        .unwrap_err();

    assert_eq!(
        err,
        DispatchError::Exhausted {
            attempts: vec!["B".to_string(), "C".to_string(), "A".to_string()],
        }
    );
    assert_eq!(*attempts.borrow(), vec!["B", "C", "A"]);
}

#[test]
fn test_rejection_happens_before_any_charge() {
    let attempts = call_log();
    let service = RidePaymentService::new(
        vec![Box::new(ScriptedPayment::succeeding("A", &attempts))],
        Box::new(FixedRiskFraud {
            score: dec!(0.9),
            threshold: dec!(0.5),
        }),
    );

    let err = service
        .complete_ride_payment("rider", fare(dec!(20)), "US", "NYC", 0)
        .unwrap_err();

    assert!(matches!(err, DispatchError::Rejected { .. }));
    assert!(attempts.borrow().is_empty());
}

#[test]
fn test_medium_risk_charge_still_proceeds() {
    let service = RidePaymentService::new(
        vec![Box::new(StripePayment::new("stripe_key"))],
        Box::new(SiftFraudDetection::new("sift_key")),
    );

    let payment = service
        .complete_ride_payment("rider", fare(dec!(150)), "US", "NYC", 0)
        .unwrap();

    assert_eq!(payment.risk_score, dec!(0.35));
    assert!(payment.fraud_check_passed);
    assert!(payment.transaction_id.starts_with("stripe_"));
}

#[test]
fn test_cheapest_at_one_hundred_is_exact() {
    let service = RidePaymentService::new(
        vec![
            Box::new(StripePayment::new("stripe_key")),
            Box::new(PayPalPayment::new("client", "secret")),
        ],
        Box::new(SiftFraudDetection::new("sift_key")),
    );

    let cheapest = service
        .cheapest_payment_method(fare(dec!(100)), "US")
        .unwrap();

    assert_eq!(cheapest.recommended_method, "StripePayment");
    assert_eq!(cheapest.fee, Money::new(dec!(3.20)));
    assert_eq!(cheapest.savings, Money::new(dec!(0.29)));
}
