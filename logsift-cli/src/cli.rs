//! CLI argument parsing using clap derive API
//!
//! Purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::Parser;

/// Logsift -- classify log lines against labeled regex patterns.
///
/// Reads a log file, classifies every line against the pattern registry,
/// and prints a table of notable events. `--all` includes normal lines;
/// `--report` additionally writes a CSV with every record.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about, long_about = None)]
pub struct Cli {
    /// Path to the log file to analyze.
    pub logfile: PathBuf,

    /// Save a CSV report with all classified records to ./reports/.
    #[arg(short = 'r', long)]
    pub report: bool,

    /// Include all log lines in the console output, even normal ones.
    #[arg(short = 'a', long = "all")]
    pub show_all: bool,

    /// Path to the JSON pattern file.
    #[arg(short = 'p', long, default_value = "patterns/default.json")]
    pub patterns: PathBuf,

    /// Disable color highlighting in the console table.
    #[arg(long)]
    pub no_color: bool,

    /// Diagnostics log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
