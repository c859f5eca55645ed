//! CLI argument definitions for the sales normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use wms_core::DEFAULT_MAPPING_FILE;

#[derive(Parser)]
#[command(
    name = "wms",
    version,
    about = "Marketplace sales normalizer - standardize exports and map SKUs to master SKUs",
    long_about = "Standardize marketplace sales exports and map their SKUs to master SKUs.\n\n\
                  Supports Amazon, Flipkart and Meesho CSV exports. The export format is\n\
                  detected from the header row."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow SKU values to appear in debug/trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Standardize a sales export, map its SKUs and save the result.
    Process(ProcessArgs),

    /// Report which marketplace a sales export comes from.
    Detect(DetectArgs),

    /// List supported marketplace formats.
    Variants,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Sales export to process (.csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the enriched CSV (default: processed_<INPUT> beside the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// SKU mapping table with a `sku,msku` header.
    #[arg(
        long = "mapping",
        short = 'm',
        value_name = "PATH",
        env = "WMS_MAPPING_FILE",
        default_value = DEFAULT_MAPPING_FILE
    )]
    pub mapping: PathBuf,

    /// Print a JSON report instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DetectArgs {
    /// Sales export to inspect (.csv).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
