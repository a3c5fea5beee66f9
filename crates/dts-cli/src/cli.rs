//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use crate::assignments::parse_assignment;

/// Default file name of a generated bulk query request.
pub const DEFAULT_BULK_QUERY_OUTPUT: &str = "bulk_query_processed.csv";
/// Default file name of a post-processed response.
pub const DEFAULT_POST_OUTPUT: &str = "post_processed_output.csv";

#[derive(Parser)]
#[command(
    name = "data-tools",
    version,
    about = "Validate contact records, build bulk query requests and post-process API responses",
    long_about = "Validate contact records, build bulk query requests and post-process API responses.\n\n\
                  Reads CSV or Excel (first sheet) files with every cell as text\n\
                  and writes UTF-8 CSV."
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

    /// Allow cell values (names, phones, PANs) to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate name, phone, email and PAN columns and print a summary.
    Validate(ValidateArgs),

    /// Build a bulk query request file for one or more target APIs.
    BulkQuery(BulkQueryArgs),

    /// Clean, flatten or decrypt an API response file.
    PostProcess(PostProcessArgs),

    /// List the target API schemas and their required fields.
    Schemas,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// CSV or Excel file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Column holding names.
    #[arg(long = "name-col", value_name = "COLUMN")]
    pub name_col: Option<String>,

    /// Column holding phone numbers.
    #[arg(long = "phone-col", value_name = "COLUMN")]
    pub phone_col: Option<String>,

    /// Column holding email addresses.
    #[arg(long = "email-col", value_name = "COLUMN")]
    pub email_col: Option<String>,

    /// Column holding PANs.
    #[arg(long = "pan-col", value_name = "COLUMN")]
    pub pan_col: Option<String>,

    /// Replace names with their cleaned form in the annotated output.
    #[arg(long = "clean-names")]
    pub clean_names: bool,

    /// Write the annotated table (with Valid_* columns) as CSV.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the summary rows as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct BulkQueryArgs {
    /// CSV or Excel file with the source records.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Target API schema (repeatable).
    #[arg(long = "api", value_name = "SCHEMA", required = true)]
    pub apis: Vec<String>,

    /// Map a required field to a source column (repeatable).
    #[arg(long = "map", value_name = "FIELD=COLUMN", value_parser = parse_assignment)]
    pub maps: Vec<(String, String)>,

    /// JSON object of field to column assignments; --map entries win.
    #[arg(long = "mapping-file", value_name = "PATH")]
    pub mapping_file: Option<PathBuf>,

    /// Output CSV path.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_BULK_QUERY_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct PostProcessArgs {
    /// CSV or Excel response file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Operation to run.
    #[arg(value_enum, value_name = "OPERATION")]
    pub operation: PostOperationArg,

    /// Column to decrypt (decrypt only).
    #[arg(long = "column", value_name = "COLUMN")]
    pub column: Option<String>,

    /// Output CSV path.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_POST_OUTPUT)]
    pub output: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PostOperationArg {
    /// Drop empty and system metadata columns.
    Cleanup,
    /// Flatten PAN based GST search results to pan,gst rows.
    PanToGst,
    /// Flatten phone to RC results to phoneNumber,rcNumber rows.
    PhoneToRc,
    /// Decrypt legacy tokens in one column.
    Decrypt,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_query_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "data-tools",
            "bulk-query",
            "input.csv",
            "--api",
            "phone_to_pan",
            "--api",
            "pan_to_gst",
            "--map",
            "name=Customer Name",
            "--map",
            "pan=PAN",
        ])
        .unwrap();
        let Command::BulkQuery(args) = cli.command else {
            panic!("expected bulk-query");
        };
        assert_eq!(args.apis, vec!["phone_to_pan", "pan_to_gst"]);
        assert_eq!(
            args.maps,
            vec![
                ("name".to_string(), "Customer Name".to_string()),
                ("pan".to_string(), "PAN".to_string())
            ]
        );
        assert_eq!(args.output, PathBuf::from(DEFAULT_BULK_QUERY_OUTPUT));
    }

    #[test]
    fn bulk_query_requires_api() {
        assert!(Cli::try_parse_from(["data-tools", "bulk-query", "input.csv"]).is_err());
    }

    #[test]
    fn malformed_map_rejected() {
        assert!(
            Cli::try_parse_from([
                "data-tools",
                "bulk-query",
                "input.csv",
                "--api",
                "pan_to_gst",
                "--map",
                "pan",
            ])
            .is_err()
        );
    }

    #[test]
    fn post_process_operation_names() {
        let cli = Cli::try_parse_from([
            "data-tools",
            "--log-data",
            "post-process",
            "resp.xlsx",
            "phone-to-rc",
        ])
        .unwrap();
        assert!(cli.log_data);
        let Command::PostProcess(args) = cli.command else {
            panic!("expected post-process");
        };
        assert_eq!(args.operation, PostOperationArg::PhoneToRc);
        assert_eq!(args.output, PathBuf::from(DEFAULT_POST_OUTPUT));
    }
}
