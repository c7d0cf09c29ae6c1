use clap::Parser;
use miette::{IntoDiagnostic, Result};
use solid_patterns::interfaces::cli::Cli;
use solid_patterns::interfaces::report_writer::ReportWriter;
use std::fs::File;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level; logs stay on stderr
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let report = cli.command.run().into_diagnostic()?;

    match cli.output {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            ReportWriter::new(file).write_report(&report).into_diagnostic()?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            ReportWriter::new(stdout.lock())
                .write_report(&report)
                .into_diagnostic()?;
        }
    }

    Ok(())
}
