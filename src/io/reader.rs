//! Line-delimited JSON record reader.
//!
//! Records are parsed lazily, one line at a time, in file order. Blank lines
//! are skipped. The first malformed line ends the sequence with an error; there
//! is no skip-and-continue mode.

use crate::core::Record;
use crate::errors::ConvertError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Lazy iterator over the records of a JSONL source.
pub struct JsonlReader<R> {
    lines: Lines<R>,
    origin: PathBuf,
    line_number: usize,
    finished: bool,
}

impl JsonlReader<BufReader<File>> {
    /// Open a JSONL file for reading.
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path).map_err(|e| ConvertError::input(path, e))?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> JsonlReader<R> {
    /// Read records from any buffered source. `origin` names it in errors.
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            origin: origin.into(),
            line_number: 0,
            finished: false,
        }
    }

    /// 1-based number of the last line consumed.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = Result<Record, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        for line in self.lines.by_ref() {
            self.line_number += 1;
            let result = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_line(line.trim(), self.line_number, &self.origin),
                Err(e) => Err(ConvertError::input(&self.origin, e)),
            };
            self.finished = result.is_err();
            return Some(result);
        }

        self.finished = true;
        None
    }
}

/// Open `path` and return its records as a lazy sequence.
pub fn load_jsonl(path: &Path) -> Result<JsonlReader<BufReader<File>>, ConvertError> {
    JsonlReader::open(path)
}

/// Parse one non-blank line into a record.
pub fn parse_line(line: &str, line_number: usize, origin: &Path) -> Result<Record, ConvertError> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| ConvertError::malformed_line(origin, line_number, line, e.to_string()))?;

    Record::from_value(value).ok_or_else(|| {
        ConvertError::malformed_line(origin, line_number, line, "expected a JSON object")
    })
}
