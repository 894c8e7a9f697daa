//! CLI argument parsing for Evaluar

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Label language for console and chart text
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// English labels
    En,
    /// Chinese labels, as printed by the original evaluation run
    Zh,
}

#[derive(Parser, Debug)]
#[command(name = "evaluar")]
#[command(version)]
#[command(about = "Analyze capture-rate experiment results", long_about = None)]
pub struct Cli {
    /// Path to the 3-line results file produced by the measurement run
    #[arg(value_name = "FILE", default_value = "result.txt")]
    pub input: PathBuf,

    /// Directory where chart PNGs are written
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Label language for console and chart text
    #[arg(long = "locale", value_enum, default_value = "en")]
    pub locale: Locale,

    /// Font family for chart text (defaults per locale)
    #[arg(long = "font-family", value_name = "NAME")]
    pub font_family: Option<String>,

    /// Fixed benchmark rate for the one-sample t-test (default: the sample mean)
    #[arg(long = "null-mean", value_name = "RATE")]
    pub null_mean: Option<f64>,

    /// Show extended statistics with percentiles
    #[arg(long = "stats-extended")]
    pub stats_extended: bool,

    /// Skip chart rendering
    #[arg(long = "no-plots")]
    pub no_plots: bool,

    /// Delete the input file after a fully successful run
    #[arg(long = "cleanup")]
    pub cleanup: bool,

    /// Enable debug tracing to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
