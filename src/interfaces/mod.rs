//! Outward surface: command line, default wiring and report output.

pub mod cli;
pub mod demo;
pub mod report_writer;
