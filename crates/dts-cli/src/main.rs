//! Data tools CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::error;
use tracing::level_filters::LevelFilter;

use dts_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use dts_cli::commands::{run_bulk_query, run_post_process, run_schemas, run_validate};
use dts_cli::logging::{LogConfig, LogFormat, init_logging};
use dts_cli::summary::{print_validation_summary, print_write_outcome};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Validate(args) => run_validate(args).map(|run| {
            print_validation_summary(&run.summary);
            if let Some(path) = &args.output {
                println!("Annotated table: {}", path.display());
            }
        }),
        Command::BulkQuery(args) => run_bulk_query(args).map(|outcome| {
            println!("Bulk query input file generated");
            print_write_outcome(&outcome);
        }),
        Command::PostProcess(args) => run_post_process(args).map(|outcome| {
            println!("Processing complete");
            print_write_outcome(&outcome);
        }),
        Command::Schemas => {
            run_schemas();
            Ok(())
        }
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(err) => {
            error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            1
        }
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
