//! Assembly of one output row from one record.

use crate::core::{scalar_text, Record};
use crate::coverage::build_coverage;
use crate::question::render_question;
use serde_json::{Map, Value};

/// One flattened record. Fields are in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub id: String,
    pub entry: String,
    pub split: String,
    pub sequence: String,
    pub question: String,
    pub answer: String,
    pub gold_supports_json: String,
    pub coverage_json: String,
}

impl OutputRow {
    pub fn from_record(record: &Record) -> Result<Self, serde_json::Error> {
        let provenance = record.provenance();

        Ok(Self {
            id: scalar_text(record.id()),
            entry: scalar_text(provenance.entry()),
            split: record.split_name(),
            sequence: provenance.sequence(),
            question: render_question(record),
            answer: record.function_text(),
            gold_supports_json: serde_json::to_string(&normalized_gold_supports(record))?,
            coverage_json: serde_json::to_string(&build_coverage(record))?,
        })
    }

    pub fn cells(&self) -> [&str; 8] {
        [
            &self.id,
            &self.entry,
            &self.split,
            &self.sequence,
            &self.question,
            &self.answer,
            &self.gold_supports_json,
            &self.coverage_json,
        ]
    }
}

/// The record's gold supports with `null` sequences replaced by `[]`.
///
/// Key order is kept as it appeared in the input. A missing or non-object
/// mapping becomes `{}`.
pub fn normalized_gold_supports(record: &Record) -> Map<String, Value> {
    let mut supports = record.gold_supports().cloned().unwrap_or_default();
    for value in supports.values_mut() {
        if value.is_null() {
            *value = Value::Array(Vec::new());
        }
    }
    supports
}
