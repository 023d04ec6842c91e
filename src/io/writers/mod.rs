pub mod csv;
pub mod row;

pub use csv::{escape_field, CsvRowWriter, HEADER};
pub use row::{normalized_gold_supports, OutputRow};
