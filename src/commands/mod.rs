//! CLI command implementations.
//!
//! Available commands:
//! - **convert**: Flatten EviFuncQA JSONL records into a CSV table

pub mod convert;

pub use convert::{convert_records, run_convert, ConvertConfig, ConvertSummary};
