//! CLI argument definitions for the LDL-C predictor.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ldl-predictor",
    version,
    about = "LDL-C Predictor - Estimate LDL cholesterol from a lipid panel",
    long_about = "Estimate LDL cholesterol from total cholesterol, HDL-C and triglycerides.\n\n\
                  Uses the remote prediction service when reachable and the Friedewald\n\
                  equation otherwise. Results can be exported as a Word (.docx) report."
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow lipid values in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Predict LDL-C for one lipid panel.
    Predict(PredictArgs),

    /// List the LDL-C reference ranges.
    Ranges,

    /// Check whether the remote prediction service is reachable.
    Status(ServiceArgs),
}

/// Options shared by commands that talk to the prediction service.
#[derive(Args)]
pub struct ServiceArgs {
    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prediction service root URL (overrides the config file).
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Total cholesterol in mg/dL.
    #[arg(long = "tc", value_name = "MG_DL", allow_hyphen_values = true)]
    pub tc: String,

    /// HDL cholesterol in mg/dL.
    #[arg(long = "hdl", value_name = "MG_DL", allow_hyphen_values = true)]
    pub hdl: String,

    /// Triglycerides in mg/dL.
    #[arg(long = "tg", value_name = "MG_DL", allow_hyphen_values = true)]
    pub tg: String,

    #[command(flatten)]
    pub service: ServiceArgs,

    /// Skip the remote service and use the Friedewald equation.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Save a Word report of the result.
    #[arg(long = "report")]
    pub report: bool,

    /// Directory for the report (overrides the config file).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
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
