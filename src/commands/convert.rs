//! The convert command: JSONL records in, one CSV row per record out.
//!
//! This is the thin I/O shell around the pure pieces. The reader yields records,
//! each record becomes an [`OutputRow`], and the row writer appends it. The run
//! stops at the first fatal error; rows flushed before that point stay on disk.

use crate::core::{scalar_text, Record};
use crate::errors::ConvertError;
use crate::io::reader::load_jsonl;
use crate::io::writers::{CsvRowWriter, OutputRow};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// Emit a progress event every this many rows
const PROGRESS_INTERVAL: usize = 10_000;

/// Configuration for the convert command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub rows_written: usize,
    pub output: PathBuf,
}

/// Main entry point - convert the input file into the output file.
pub fn run_convert(config: &ConvertConfig) -> Result<ConvertSummary, ConvertError> {
    let _span = info_span!("convert", input = %config.input.display()).entered();

    // Input is opened first so a missing input never truncates the output.
    let records = load_jsonl(&config.input)?;
    let file =
        File::create(&config.output).map_err(|e| ConvertError::output(&config.output, e))?;

    let rows_written = convert_records(records, BufWriter::new(file), &config.output)?;

    info!(
        rows = rows_written,
        output = %config.output.display(),
        "conversion complete"
    );
    Ok(ConvertSummary {
        rows_written,
        output: config.output.clone(),
    })
}

/// Write a header plus one row per record to `sink`, returning the row count.
///
/// `destination` only names the sink in error messages.
pub fn convert_records<I, W>(
    records: I,
    sink: W,
    destination: &Path,
) -> Result<usize, ConvertError>
where
    I: IntoIterator<Item = Result<Record, ConvertError>>,
    W: Write,
{
    let output_error = |e: std::io::Error| ConvertError::output(destination, e);
    let mut writer = CsvRowWriter::new(sink).map_err(output_error)?;

    for record in records {
        let record = record?;
        log_unknown_evidence(&record);

        let row = OutputRow::from_record(&record)?;
        writer.write_row(&row).map_err(output_error)?;

        if writer.rows_written() % PROGRESS_INTERVAL == 0 {
            debug!(rows = writer.rows_written(), "progress");
        }
    }

    writer.finish().map_err(output_error)
}

fn log_unknown_evidence(record: &Record) {
    let unknown: Vec<&str> = record.evidence().unknown_keys().collect();
    if !unknown.is_empty() {
        debug!(
            id = %scalar_text(record.id()),
            ?unknown,
            "ignoring unknown evidence kinds"
        );
    }
}
