//! CLI argument parsing for Demora

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for histogram reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "demora")]
#[command(version)]
#[command(about = "Histogram analyzer for batched JSON timing results", long_about = None)]
pub struct Cli {
    /// Result files to load, each a JSON array of records; concatenated in argument order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Scan a directory for .json result files instead of listing them (ordered by file name)
    #[arg(short = 'd', long = "dir", value_name = "DIR", conflicts_with = "files")]
    pub dir: Option<PathBuf>,

    /// Lower edge of the histogram domain in seconds (must align to the 0.1s bucket step)
    #[arg(long = "min", value_name = "SECONDS", default_value = "0.0")]
    pub min: f64,

    /// Upper edge of the histogram domain in seconds (must align to the 0.1s bucket step)
    #[arg(long = "max", value_name = "SECONDS", default_value = "10.0")]
    pub max: f64,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Render the histogram as an SVG bar chart to the given path
    #[arg(long = "chart", value_name = "FILE")]
    pub chart: Option<PathBuf>,

    /// Include extended statistics (mean, stddev, percentiles) in the report
    #[arg(long = "stats-extended")]
    pub stats_extended: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
