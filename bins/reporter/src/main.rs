//! Tally weekly reporter.
//!
//! Loads a household snapshot, settles the week containing the anchor date,
//! and prints the report as JSON on stdout. Logs go to stderr.
//!
//! Usage: tally-report [YYYY-MM-DD]

mod output;

use std::fs;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::{Expense, ExpenseSource, InMemorySource, Person, ReportService, Settler};
use tally_shared::AppConfig;
use tally_shared::config::LogFormat;

use crate::output::ReportOutput;

/// On-disk household snapshot.
#[derive(Debug, Deserialize)]
struct Snapshot {
    roommates: Vec<Person>,
    expenses: Vec<Expense>,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(config.log.format);

    let anchor = match std::env::args().nth(1) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid anchor date {raw:?}, expected YYYY-MM-DD"))?,
        None => Utc::now().date_naive(),
    };

    let source = load_snapshot(&config.data.snapshot_path)?;
    info!(
        path = %config.data.snapshot_path,
        expenses = source.expense_count(),
        "Snapshot loaded"
    );

    let service = ReportService::new(Settler::with_tolerance(config.settlement.tolerance));
    let report = service.weekly_report_from_source(&source, anchor)?;

    let expenses = ReportService::summarize_expenses(
        &source.expenses_between(report.period)?,
        &source.roster()?,
    );

    let output = ReportOutput::new(&report, expenses, config.settlement.display_scale);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tally_core=info,tally_report=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn load_snapshot(path: &str) -> anyhow::Result<InMemorySource> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read snapshot {path}"))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).with_context(|| format!("Malformed snapshot {path}"))?;

    Ok(InMemorySource::new(snapshot.roommates, snapshot.expenses)?)
}
