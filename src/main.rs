//! Vitatrack report
//!
//! Reads an intake snapshot and prints the daily and weekly report as JSON.

use tracing_subscriber::EnvFilter;

use vitatrack::build_info;
use vitatrack::config::ReportConfig;
use vitatrack::tools::{generate_report, IntakeSnapshot};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vitatrack=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = ReportConfig::from_env()?;
    eprintln!("Snapshot path: {}", config.snapshot_path.display());

    let snapshot = IntakeSnapshot::load(&config.snapshot_path)?;
    let report = generate_report(&snapshot, &config);

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
