//! Typed, read-only view over one parsed input record.
//!
//! Records come from a loosely specified dataset, so every accessor treats a
//! missing field and a wrongly shaped field the same way: as absent. Nothing in
//! this module returns an error.

use super::kinds::{EvidenceKind, SupportKind};
use serde_json::{Map, Number, Value};

/// Split name used when a record does not carry one.
pub const DEFAULT_SPLIT: &str = "train";

/// One input record: a JSON object describing a protein and its QA pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Wrap a parsed JSON value. Only objects are records.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<&Value> {
        self.fields.get("id")
    }

    pub fn provenance(&self) -> Provenance<'_> {
        Provenance {
            fields: object_at(&self.fields, "provenance"),
        }
    }

    /// Split name, falling back to [`DEFAULT_SPLIT`] when absent or falsy.
    pub fn split_name(&self) -> String {
        match object_at(&self.fields, "split").and_then(|split| split.get("name")) {
            Some(name) if is_truthy(name) => scalar_text(Some(name)),
            _ => DEFAULT_SPLIT.to_string(),
        }
    }

    /// Evidence mapping at `question.inputs.evidence`.
    pub fn evidence(&self) -> Evidence<'_> {
        let fields = object_at(&self.fields, "question")
            .and_then(|question| object_at(question, "inputs"))
            .and_then(|inputs| object_at(inputs, "evidence"));
        Evidence { fields }
    }

    /// Reference answer text, empty when absent or falsy.
    pub fn function_text(&self) -> String {
        truthy_text(self.answer().and_then(|answer| answer.get("function_text")))
    }

    /// The raw `answer.gold_supports` mapping, if it is an object.
    pub fn gold_supports(&self) -> Option<&Map<String, Value>> {
        self.answer()
            .and_then(|answer| object_at(answer, "gold_supports"))
    }

    /// Number of identifiers recorded for one support kind.
    ///
    /// Absent, `null` and non-list values all count as zero.
    pub fn support_count(&self, kind: SupportKind) -> usize {
        self.gold_supports()
            .and_then(|supports| supports.get(kind.key()))
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    fn answer(&self) -> Option<&Map<String, Value>> {
        object_at(&self.fields, "answer")
    }
}

/// Where the protein came from.
#[derive(Debug, Clone, Copy)]
pub struct Provenance<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Provenance<'a> {
    /// Source organism, when given as a non-empty string.
    pub fn organism(&self) -> Option<&'a str> {
        non_empty_str(self.get("organism"))
    }

    /// Sequence length in residues. Only JSON integers qualify, of any size.
    pub fn length(&self) -> Option<&'a Number> {
        match self.get("length") {
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Some(n),
            _ => None,
        }
    }

    pub fn entry(&self) -> Option<&'a Value> {
        self.get("entry")
    }

    /// Amino-acid sequence, empty when absent or falsy.
    pub fn sequence(&self) -> String {
        truthy_text(self.get("sequence"))
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|fields| fields.get(key))
    }
}

/// The evidence mapping of a record.
#[derive(Debug, Clone, Copy)]
pub struct Evidence<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Evidence<'a> {
    pub fn payload(&self, kind: EvidenceKind) -> EvidencePayload<'a> {
        EvidencePayload::from_value(self.fields.and_then(|fields| fields.get(kind.key())))
    }

    #[cfg(test)]
    pub fn contains(&self, kind: EvidenceKind) -> bool {
        self.fields
            .is_some_and(|fields| fields.contains_key(kind.key()))
    }

    /// Keys present in the mapping that are not a known evidence kind.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &'a str> {
        self.fields
            .into_iter()
            .flat_map(|fields| fields.keys())
            .map(String::as_str)
            .filter(|key| EvidenceKind::from_key(key).is_none())
    }
}

/// Shape of one evidence value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvidencePayload<'a> {
    Absent,
    Text(&'a str),
    List(&'a [Value]),
    Mapping(&'a Map<String, Value>),
    /// Numbers and booleans: present but carrying no countable items
    Other,
}

impl<'a> EvidencePayload<'a> {
    pub fn from_value(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => EvidencePayload::Absent,
            Some(Value::String(text)) => EvidencePayload::Text(text),
            Some(Value::Array(items)) => EvidencePayload::List(items),
            Some(Value::Object(map)) => EvidencePayload::Mapping(map),
            Some(Value::Bool(_) | Value::Number(_)) => EvidencePayload::Other,
        }
    }

    /// How many evidence items this payload holds.
    pub fn item_count(&self) -> usize {
        match self {
            EvidencePayload::Absent | EvidencePayload::Other => 0,
            EvidencePayload::Text(text) => usize::from(!text.trim().is_empty()),
            EvidencePayload::List(items) => items.len(),
            EvidencePayload::Mapping(map) => map.len(),
        }
    }

    /// List elements, or nothing when the payload is not a list.
    pub fn items(&self) -> &'a [Value] {
        match self {
            EvidencePayload::List(items) => items,
            _ => &[],
        }
    }

    /// List elements that are JSON objects, in order.
    pub fn objects(&self) -> impl Iterator<Item = &'a Map<String, Value>> {
        self.items().iter().filter_map(Value::as_object)
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Render a value as a single table cell.
///
/// `null` and absent become an empty cell, strings are taken verbatim, and
/// everything else is written as compact JSON.
pub fn scalar_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Field value when it is a non-empty string. Whitespace-only strings count.
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

fn truthy_text(value: Option<&Value>) -> String {
    match value {
        Some(value) if is_truthy(value) => scalar_text(Some(value)),
        _ => String::new(),
    }
}

fn object_at<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    fields.get(key).and_then(Value::as_object)
}
