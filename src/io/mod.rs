pub mod reader;
pub mod writers;

// Re-export the pipeline endpoints for convenient access
pub use reader::{load_jsonl, parse_line, JsonlReader};
pub use writers::{CsvRowWriter, OutputRow, HEADER};
