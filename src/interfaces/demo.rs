//! Default wiring of providers into coordinators, plus the full tour used by
//! the `tour` command.

use crate::application::checkout::PaymentProcessor;
use crate::application::payments::RidePaymentService;
use crate::application::repositories::RepositoryService;
use crate::application::streaming::{DEFAULT_QUALITY, VideoStreamingService};
use crate::application::users::{UserReportGenerator, UserRepository, UserService};
use crate::domain::documents::{DocumentReport, process_document_suite};
use crate::domain::money::Amount;
use crate::domain::outcome::{
    CheapestMethod, CostComparison, Migration, Outcome, RepositoryCreated, RidePayment,
    StreamSession,
};
use crate::domain::ports::SharedStorage;
use crate::domain::shapes::{Rectangle, ShapeSummary, Square, summarize};
use crate::domain::workers::{WorkerProfile, crew, describe_worker};
use crate::error::Result;
use crate::infrastructure::analytics::GoogleAnalytics;
use crate::infrastructure::cdn::{AkamaiCdn, CloudFrontCdn};
use crate::infrastructure::channels::{
    ApplePayChannel, BitcoinPayment, CreditCardPayment, EncryptedPayment, PayPalChannel,
};
use crate::infrastructure::databases::SqlDatabase;
use crate::infrastructure::documents::default_processors;
use crate::infrastructure::email::LoggingEmailService;
use crate::infrastructure::fraud::SiftFraudDetection;
use crate::infrastructure::in_memory::SnapshotBackup;
use crate::infrastructure::payment_methods::{ApplePayment, PayPalPayment, StripePayment};
use crate::infrastructure::storage::{FilesystemStorage, S3Storage};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::rc::Rc;

pub fn streaming_service() -> VideoStreamingService {
    VideoStreamingService::new(
        Box::new(AkamaiCdn::new("akamai_key", "us-east")),
        Box::new(CloudFrontCdn::new("aws_key", "aws_secret", "distribution123")),
        Box::new(GoogleAnalytics::new("GA-12345")),
    )
}

pub fn ride_payment_service() -> RidePaymentService {
    RidePaymentService::new(
        vec![
            Box::new(StripePayment::new("stripe_key")),
            Box::new(PayPalPayment::new("paypal_client", "paypal_secret")),
            Box::new(ApplePayment::new("merchant123")),
        ],
        Box::new(SiftFraudDetection::new("sift_key")),
    )
}

/// Returns the service together with the S3 backend, which doubles as the
/// migration target.
pub fn repository_service() -> (RepositoryService, SharedStorage) {
    let s3: SharedStorage = Rc::new(S3Storage::new("github-repos", "aws_key", "aws_secret"));
    let service = RepositoryService::new(
        Rc::new(FilesystemStorage::new("/repos")),
        s3.clone(),
        Box::new(SnapshotBackup::new()),
    );
    (service, s3)
}

pub fn checkout_processor() -> PaymentProcessor {
    let mut processor = PaymentProcessor::new();
    processor.register_payment_method("credit_card", Box::new(CreditCardPayment));
    processor.register_payment_method("paypal", Box::new(PayPalChannel));
    processor.register_payment_method("bitcoin", Box::new(BitcoinPayment));
    processor.register_payment_method("apple_pay", Box::new(ApplePayChannel));
    processor.register_payment_method(
        "secure_credit",
        Box::new(EncryptedPayment::new(Box::new(CreditCardPayment))),
    );
    processor
}

pub fn user_service() -> UserService {
    UserService::new(
        UserRepository::new(Box::new(SqlDatabase)),
        Box::new(LoggingEmailService::new("welcome@example.com")),
    )
}

pub fn worker_profiles() -> Vec<WorkerProfile> {
    crew().iter().map(|w| describe_worker(w.as_ref())).collect()
}

pub fn document_reports() -> Result<Vec<DocumentReport>> {
    default_processors()
        .iter()
        .map(|p| process_document_suite(p.as_ref()))
        .collect()
}

pub fn shape_summaries(width: f64, height: f64, side: f64) -> Result<Vec<ShapeSummary>> {
    let rect = Rectangle::new(width, height)?;
    let square = Square::new(side)?;
    Ok(vec![summarize(&rect), summarize(&square)])
}

#[derive(Debug, Serialize)]
pub struct CheckoutLine {
    pub method: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Runs `method` through the checkout and records the result as one line.
pub fn checkout_line(processor: &PaymentProcessor, method: &str, amount: Amount) -> CheckoutLine {
    match processor.process_payment(method, amount) {
        Ok(confirmation) => CheckoutLine {
            method: method.to_string(),
            success: true,
            confirmation: Some(confirmation),
            error: None,
        },
        Err(e) => CheckoutLine {
            method: method.to_string(),
            success: false,
            confirmation: None,
            error: Some(e.to_string()),
        },
    }
}

#[derive(Debug, Serialize)]
pub struct TourReport {
    pub streaming: Outcome<StreamSession>,
    pub cdn_costs: CostComparison,
    pub ride_payment: Outcome<RidePayment>,
    pub cheapest_payment: Outcome<CheapestMethod>,
    pub repository: Outcome<RepositoryCreated>,
    pub migration: Outcome<Migration>,
    pub checkout: Vec<CheckoutLine>,
    pub user_report: String,
    pub workers: Vec<WorkerProfile>,
    pub documents: Vec<DocumentReport>,
    pub shapes: Vec<ShapeSummary>,
}

/// Runs every demonstration with its default inputs.
pub fn run_tour() -> Result<TourReport> {
    let streaming = streaming_service();
    let payments = ride_payment_service();
    let (mut repositories, s3) = repository_service();
    let checkout = checkout_processor();
    let mut users = user_service();

    let fare = Amount::new(dec!(25.50))?;

    let repository = repositories.create_repository("my-awesome-project", b"initial_commit_data");
    let migration = repositories.migrate_repository_storage("my-awesome-project", s3);

    let mut checkout_lines = Vec::new();
    for (method, amount) in [
        ("credit_card", dec!(100)),
        ("paypal", dec!(50)),
        ("apple_pay", dec!(75)),
        ("secure_credit", dec!(200)),
    ] {
        checkout_lines.push(checkout_line(&checkout, method, Amount::new(amount)?));
    }

    users.register_user("Ada Lovelace", "ada@example.com")?;
    users.register_user("Alan Turing", "alan@example.com")?;

    Ok(TourReport {
        streaming: streaming
            .stream_video("user123", "video456", "US", DEFAULT_QUALITY)
            .into(),
        cdn_costs: streaming.cost_optimized_streaming("video456", dec!(2.5)),
        ride_payment: payments
            .complete_ride_payment("rider123", fare, "US", "San Francisco", 0)
            .into(),
        cheapest_payment: payments.cheapest_payment_method(fare, "US").into(),
        repository: repository.into(),
        migration: migration.into(),
        checkout: checkout_lines,
        user_report: UserReportGenerator::generate_report(users.repository()),
        workers: worker_profiles(),
        documents: document_reports()?,
        shapes: shape_summaries(4.0, 5.0, 3.0)?,
    })
}
