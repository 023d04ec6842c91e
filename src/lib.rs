// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod core;
pub mod coverage;
pub mod errors;
pub mod io;
pub mod observability;
pub mod question;

// Re-export commonly used types
pub use crate::core::{
    Evidence, EvidenceKind, EvidencePayload, Provenance, Record, SupportKind, DEFAULT_SPLIT,
};

pub use crate::commands::{convert_records, run_convert, ConvertConfig, ConvertSummary};

pub use crate::coverage::{build_coverage, CoverageSummary, CoverageTotals};

pub use crate::errors::{ConvertError, ErrorCode};

pub use crate::io::{load_jsonl, CsvRowWriter, JsonlReader, OutputRow, HEADER};

pub use crate::question::render_question;
