use super::demo;
use crate::application::streaming::DEFAULT_QUALITY;
use crate::application::users::UserReportGenerator;
use crate::domain::money::Amount;
use crate::domain::outcome::Outcome;
use crate::error::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Provider selection and capability dispatch demos",
    long_about = None
)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Write the JSON report to this file instead of stdout
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Stream a video through the primary CDN, failing over to the backup
    Stream {
        #[arg(long, default_value = "user123")]
        user: String,
        #[arg(long, default_value = "video456")]
        video: String,
        /// Region of the viewer (Akamai serves US, EU and ASIA)
        #[arg(long, default_value = "US")]
        location: String,
        #[arg(long, default_value = DEFAULT_QUALITY)]
        quality: String,
    },
    /// Compare bandwidth cost between the primary and backup CDN
    CdnCost {
        #[arg(long, default_value = "video456")]
        video: String,
        #[arg(long, default_value = "2.5")]
        gb: Decimal,
    },
    /// Charge a ride with fraud screening and method rotation
    Pay {
        #[arg(long, default_value = "rider123")]
        user: String,
        #[arg(long, default_value = "25.50")]
        amount: Decimal,
        #[arg(long, default_value = "US")]
        country: String,
        #[arg(long, default_value = "San Francisco")]
        location: String,
        /// Index of the method to try first among those available
        #[arg(long, default_value_t = 0)]
        preferred: usize,
    },
    /// Quote every payment method and recommend the lowest fee
    Cheapest {
        #[arg(long, default_value = "100")]
        amount: Decimal,
        #[arg(long, default_value = "US")]
        country: String,
    },
    /// Create a repository and optionally migrate it to S3
    Repo {
        #[arg(long, default_value = "my-awesome-project")]
        repo_id: String,
        #[arg(long, default_value = "initial_commit_data")]
        data: String,
        #[arg(long)]
        migrate: bool,
    },
    /// Run a payment through the checkout registry
    Checkout {
        #[arg(long, default_value = "credit_card")]
        method: String,
        #[arg(long, default_value = "100")]
        amount: Decimal,
    },
    /// Register a user and print the user report
    Users {
        #[arg(long, default_value = "Ada Lovelace")]
        name: String,
        #[arg(long, default_value = "ada@example.com")]
        email: String,
    },
    /// List the duties each worker supports
    Workers,
    /// Exercise every document processor
    Documents,
    /// Summarize a rectangle and a square
    Shapes {
        #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
        width: f64,
        #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
        height: f64,
        #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
        side: f64,
    },
    /// Run every demo with its defaults
    Tour,
}

impl Command {
    /// Runs the demo and returns its report.
    ///
    /// Negative policy outcomes (no provider, fraud rejection) are part of the
    /// report; only invalid input is returned as an error.
    pub fn run(self) -> Result<Value> {
        let report = match self {
            Command::Stream {
                user,
                video,
                location,
                quality,
            } => {
                let outcome: Outcome<_> = demo::streaming_service()
                    .stream_video(&user, &video, &location, &quality)
                    .into();
                serde_json::to_value(outcome)?
            }
            Command::CdnCost { video, gb } => {
                let comparison = demo::streaming_service().cost_optimized_streaming(&video, gb);
                serde_json::to_value(comparison)?
            }
            Command::Pay {
                user,
                amount,
                country,
                location,
                preferred,
            } => {
                let fare = Amount::new(amount)?;
                let outcome: Outcome<_> = demo::ride_payment_service()
                    .complete_ride_payment(&user, fare, &country, &location, preferred)
                    .into();
                serde_json::to_value(outcome)?
            }
            Command::Cheapest { amount, country } => {
                let outcome: Outcome<_> = demo::ride_payment_service()
                    .cheapest_payment_method(Amount::new(amount)?, &country)
                    .into();
                serde_json::to_value(outcome)?
            }
            Command::Repo {
                repo_id,
                data,
                migrate,
            } => {
                let (mut service, s3) = demo::repository_service();
                let created: Outcome<_> =
                    service.create_repository(&repo_id, data.as_bytes()).into();
                let migration: Option<Outcome<_>> =
                    migrate.then(|| service.migrate_repository_storage(&repo_id, s3).into());
                json!({
                    "created": created,
                    "migration": migration,
                    "primary_storage": service.primary_storage(),
                })
            }
            Command::Checkout { method, amount } => serde_json::to_value(demo::checkout_line(
                &demo::checkout_processor(),
                &method,
                Amount::new(amount)?,
            ))?,
            Command::Users { name, email } => {
                let mut service = demo::user_service();
                let user = service.register_user(name, email)?;
                json!({
                    "registered": user,
                    "report": UserReportGenerator::generate_report(service.repository()),
                })
            }
            Command::Workers => serde_json::to_value(demo::worker_profiles())?,
            Command::Documents => serde_json::to_value(demo::document_reports()?)?,
            Command::Shapes {
                width,
                height,
                side,
            } => serde_json::to_value(demo::shape_summaries(width, height, side)?)?,
            Command::Tour => serde_json::to_value(demo::run_tour()?)?,
        };
        Ok(report)
    }
}
