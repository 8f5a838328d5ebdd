//! LDL-C Predictor CLI.

use clap::{ColorChoice, Parser};
use ldl_cli::logging::{LogConfig, LogFormat, init_logging};
use ldl_model::ValidationError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_predict, run_status};
use crate::summary::{
    print_json, print_prediction, print_ranges, print_status, print_validation_errors,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("error: failed to start async runtime: {error}");
            std::process::exit(1);
        }
    };
    let exit_code = match cli.command {
        Command::Predict(args) => match runtime.block_on(run_predict(&args)) {
            Ok(outcome) => {
                if args.json {
                    print_json(&outcome);
                } else {
                    print_prediction(&outcome);
                }
                if outcome.report_failed() { 1 } else { 0 }
            }
            Err(error) => {
                match error.downcast_ref::<ValidationError>() {
                    Some(invalid) => print_validation_errors(invalid),
                    None => eprintln!("error: {error:#}"),
                }
                1
            }
        },
        Command::Ranges => {
            print_ranges();
            0
        }
        Command::Status(args) => match runtime.block_on(run_status(&args)) {
            Ok((settings, status)) => {
                print_status(&settings, &status);
                if status.is_ok() { 0 } else { 1 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
