//! Comma-separated output with minimal quoting.

use super::row::OutputRow;
use std::borrow::Cow;
use std::io::{self, Write};

/// Column names, in output order.
pub const HEADER: [&str; 8] = [
    "id",
    "entry",
    "split",
    "sequence",
    "question",
    "answer",
    "gold_supports_json",
    "coverage_json",
];

const DELIMITER: char = ',';
const QUOTE: char = '"';
const LINE_TERMINATOR: &str = "\r\n";

/// Sequential CSV writer. The header is written on construction.
pub struct CsvRowWriter<W: Write> {
    writer: W,
    rows: usize,
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(mut writer: W) -> io::Result<Self> {
        write_record(&mut writer, &HEADER)?;
        Ok(Self { writer, rows: 0 })
    }

    pub fn write_row(&mut self, row: &OutputRow) -> io::Result<()> {
        write_record(&mut self.writer, &row.cells())?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far, excluding the header.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush buffered output and return the number of data rows written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        Ok(self.rows)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn write_record<W: Write>(writer: &mut W, fields: &[&str]) -> io::Result<()> {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            write!(writer, "{DELIMITER}")?;
        }
        writer.write_all(escape_field(field).as_bytes())?;
    }
    writer.write_all(LINE_TERMINATOR.as_bytes())
}

/// Quote a field when it contains the delimiter, a quote or a line break.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    let needs_quoting = field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\n' || c == '\r');
    if needs_quoting {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_fields_are_untouched() {
        assert_eq!(escape_field("P0A7B8"), "P0A7B8");
        assert_eq!(escape_field(""), "");
        assert!(matches!(escape_field("MKV"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_special_fields_are_quoted() {
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(escape_field("cr\rhere"), "\"cr\rhere\"");
        assert_eq!(escape_field(r#"{"EC_number":[]}"#), r#""{""EC_number"":[]}""#);
    }

    #[test]
    fn test_header_written_once_on_construction() {
        let writer = CsvRowWriter::new(Vec::new()).unwrap();
        assert_eq!(writer.rows_written(), 0);

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "id,entry,split,sequence,question,answer,gold_supports_json,coverage_json\r\n"
        );
    }

    #[test]
    fn test_rows_are_counted() {
        let row = OutputRow {
            id: "1".into(),
            entry: "P12345".into(),
            split: "train".into(),
            sequence: "MKV".into(),
            question: "Protein from X. Evidence: EC=1.1.1.1 What is its function?".into(),
            answer: "Oxidoreductase, acting on alcohols".into(),
            gold_supports_json: "{}".into(),
            coverage_json: "{}".into(),
        };

        let mut writer = CsvRowWriter::new(Vec::new()).unwrap();
        writer.write_row(&row).unwrap();
        writer.write_row(&row).unwrap();
        assert_eq!(writer.rows_written(), 2);

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<_> = output.split("\r\n").collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            "1,P12345,train,MKV,Protein from X. Evidence: EC=1.1.1.1 What is its function?,\"Oxidoreductase, acting on alcohols\",{},{}"
        );
        assert_eq!(lines[3], "");
    }
}
