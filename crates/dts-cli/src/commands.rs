use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::{Level, debug, enabled, info, info_span, trace, warn};

use dts_common::{column_names, string_values};
use dts_ingest::{load_table, write_csv};
use dts_map::FieldMapper;
use dts_model::{ColumnChoice, NAME_FIELD, SCHEMAS};
use dts_post::{DECRYPTED_SUFFIX, PostOperation, run_post_operation};
use dts_transform::build_request_table;
use dts_validate::{FieldSelection, ValidatedField, ValidationRun, run_validation};

use crate::assignments::{collect_assignments, load_mapping_file};
use crate::cli::{BulkQueryArgs, PostOperationArg, PostProcessArgs, ValidateArgs};
use crate::logging::redact_value;
use crate::summary::print_schemas;

/// Values logged per field or column at trace level.
const SAMPLE_VALUES: usize = 3;

/// Where a table was written and its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

pub fn run_schemas() {
    print_schemas(SCHEMAS);
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRun> {
    let span = info_span!("validate_file", file = %args.file.display());
    let _guard = span.enter();

    let df = load_input(&args.file)?;
    let selection = selection_from_args(args);
    let run = run_validation(&df, &selection).context("validate columns")?;
    if enabled!(Level::TRACE) {
        log_invalid_samples(&df, &run, &selection);
    }

    if let Some(path) = &args.output {
        write_table(&run.annotated, path)?;
    }
    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&run.summary).context("encode summary")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "summary written");
    }
    Ok(run)
}

pub fn run_bulk_query(args: &BulkQueryArgs) -> Result<WriteOutcome> {
    let span = info_span!("bulk_query", file = %args.file.display());
    let _guard = span.enter();

    let df = load_input(&args.file)?;
    let file_entries = match &args.mapping_file {
        Some(path) => load_mapping_file(path)?,
        None => BTreeMap::new(),
    };
    let assignments = collect_assignments(file_entries, &args.maps);

    let mapper = FieldMapper::new(args.apis.as_slice()).context("select target schemas")?;
    let full_name_mapped = assignments
        .get(NAME_FIELD)
        .is_some_and(ColumnChoice::is_provided);
    for field in mapper.prompt_fields(full_name_mapped) {
        if !assignments.contains_key(field) {
            debug!(field, "no column assigned, field left empty");
        }
    }

    let plan = mapper
        .resolve(&assignments, &column_names(&df))
        .context("resolve column mapping")?;
    let out = build_request_table(&df, &plan).context("build request table")?;
    write_table(&out, &args.output)
}

pub fn run_post_process(args: &PostProcessArgs) -> Result<WriteOutcome> {
    let span = info_span!("post_process", file = %args.file.display());
    let _guard = span.enter();

    let operation = post_operation(args)?;
    let df = load_input(&args.file)?;
    let out = run_post_operation(&df, &operation).with_context(|| format!("{operation}"))?;
    if let PostOperation::Decrypt { column } = &operation
        && enabled!(Level::TRACE)
    {
        let decrypted = format!("{column}{DECRYPTED_SUFFIX}");
        for value in string_values(&out, &decrypted)?
            .iter()
            .flatten()
            .take(SAMPLE_VALUES)
        {
            trace!(column = %decrypted, value = redact_value(value), "decrypted sample");
        }
    }
    write_table(&out, &args.output)
}

/// Map the CLI operation to a library operation.
pub fn post_operation(args: &PostProcessArgs) -> Result<PostOperation> {
    let operation = match args.operation {
        PostOperationArg::Cleanup => PostOperation::MetadataCleanup,
        PostOperationArg::PanToGst => PostOperation::FlattenPanToGst,
        PostOperationArg::PhoneToRc => PostOperation::FlattenPhoneToRc,
        PostOperationArg::Decrypt => {
            let Some(column) = &args.column else {
                bail!("--column is required for decrypt");
            };
            return Ok(PostOperation::Decrypt {
                column: column.clone(),
            });
        }
    };
    if let Some(column) = &args.column {
        warn!(column = %column, "--column only applies to decrypt, ignored");
    }
    Ok(operation)
}

fn selection_from_args(args: &ValidateArgs) -> FieldSelection {
    let chosen = [
        (ValidatedField::Name, &args.name_col),
        (ValidatedField::Phone, &args.phone_col),
        (ValidatedField::Email, &args.email_col),
        (ValidatedField::Pan, &args.pan_col),
    ];
    chosen
        .into_iter()
        .fold(FieldSelection::new(), |selection, (field, column)| {
            match column {
                Some(column) => selection.with(field, ColumnChoice::parse(column)),
                None => selection,
            }
        })
        .with_clean_names(args.clean_names)
}

fn log_invalid_samples(df: &DataFrame, run: &ValidationRun, selection: &FieldSelection) {
    for field in ValidatedField::ALL {
        let Some(column) = selection.choice(field).column() else {
            continue;
        };
        let (Ok(raw), Ok(labels)) = (
            string_values(df, column),
            string_values(&run.annotated, field.annotation_column()),
        ) else {
            continue;
        };
        let invalid = raw
            .iter()
            .zip(&labels)
            .filter(|(_, label)| label.as_deref() == Some("False"))
            .filter_map(|(value, _)| value.as_deref())
            .take(SAMPLE_VALUES);
        for value in invalid {
            trace!(field = field.label(), value = redact_value(value), "invalid value");
        }
    }
}

fn load_input(path: &Path) -> Result<DataFrame> {
    let df = load_table(path).with_context(|| format!("load {}", path.display()))?;
    debug!(rows = df.height(), columns = df.width(), "input loaded");
    Ok(df)
}

fn write_table(df: &DataFrame, path: &Path) -> Result<WriteOutcome> {
    write_csv(df, path).with_context(|| format!("write {}", path.display()))?;
    Ok(WriteOutcome {
        path: path.to_path_buf(),
        rows: df.height(),
        columns: df.width(),
    })
}
