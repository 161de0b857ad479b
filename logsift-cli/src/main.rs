//! logsift binary entry point.
//!
//! Resolves file paths, runs the analysis pipeline, and reports top-level
//! errors. Missing input files print a message and exit cleanly; genuine
//! configuration or I/O failures map to nonzero exit codes.

mod cli;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logsift_analysis::{export_csv, render_table, Classifier, PatternLoader, TableStyle};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .init();
    tracing::debug!(?cli, "parsed arguments");

    if let Err(err) = run(cli).await {
        eprintln!("[!] {err}");
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if !cli.logfile.exists() {
        println!("[!] Log file not found.");
        return Ok(());
    }

    if !cli.patterns.exists() {
        println!("[!] Pattern file not found: {}", cli.patterns.display());
        return Ok(());
    }

    println!("[*] Loading patterns from: {}", cli.patterns.display());
    let patterns = PatternLoader::load_file(&cli.patterns)
        .await
        .map_err(|e| CliError::Config(e.to_string()))?;

    println!("[*] Analyzing: {}", cli.logfile.display());
    let classifier = Classifier::new(patterns);
    let records = classifier.analyze_file(&cli.logfile).await?;

    if records.is_empty() {
        println!("[!] No events found.");
        return Ok(());
    }

    let style = TableStyle {
        color_enabled: !cli.no_color,
    };
    println!("{}", render_table(&records, cli.show_all, &style));

    if cli.report {
        let reports_dir = Path::new("reports");
        std::fs::create_dir_all(reports_dir)?;
        let report_path = report_path(reports_dir, &cli.logfile);
        export_csv(&records, &report_path)?;
        println!("[+] Report saved to: {}", report_path.display());
    }

    Ok(())
}

/// `<reports_dir>/<logfile-stem>_report.csv`
fn report_path(reports_dir: &Path, logfile: &Path) -> PathBuf {
    let stem = logfile
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "log".to_owned());

    reports_dir.join(format!("{stem}_report.csv"))
}
