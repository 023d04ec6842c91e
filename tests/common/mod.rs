// Test utility module for evifuncqa-csv integration tests
#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A fully populated record resembling a real dataset line.
pub fn sample_record(id: &str) -> Value {
    json!({
        "id": id,
        "provenance": {
            "organism": "Escherichia coli (strain K12)",
            "length": 387,
            "entry": "P0A9Q7",
            "sequence": "MAVTNVAELNALVERVKKAQREYASFTQEQVDKIFRAAALAAADARIPLAKMAVAESGMGIVEDKVIKNHFASEYIYNAYKDEKT"
        },
        "split": {"name": "valid"},
        "question": {"inputs": {"evidence": {
            "EC number": ["1.1.1.1", "1.2.1.10"],
            "Catalytic_Activity_json": [
                {"reaction": "a primary alcohol + NAD(+) = an aldehyde + NADH + H(+)", "rhea_id": "RHEA:10736"}
            ],
            "GO_MF_json": [
                {"go_id": "GO:0004022", "term": "alcohol dehydrogenase (NAD+) activity"},
                {"go_id": "GO:0008774", "term": "acetaldehyde dehydrogenase (acetylating) activity"},
                {"go_id": "GO:0046872", "term": "metal ion binding"},
                {"go_id": "GO:0008270", "term": "zinc ion binding"}
            ],
            "Pathway_json": [{"levels": ["Fermentation", "Ethanol fermentation"]}],
            "Subcellular_location_json": [{"location": "Cytoplasm"}],
            "Cofactor_json": [{"name": "Fe(2+)", "chebi": "CHEBI:29033"}]
        }}},
        "answer": {
            "function_text": "Bifunctional enzyme: \"acetaldehyde\" to ethanol,\nwith CoA-linked step.",
            "gold_supports": {
                "EC_number": ["1.1.1.1", "1.2.1.10"],
                "RHEA_ids": ["RHEA:10736"],
                "GO_MF_ids": ["GO:0004022", "GO:0008774", "GO:0046872", "GO:0008270"],
                "GO_BP_ids": null,
                "Cofactor_chebi": ["CHEBI:29033"],
                "Evidence_codes": ["ECO:0000269"]
            }
        }
    })
}

/// Write one JSON value per line.
pub fn write_jsonl(dir: &Path, name: &str, records: &[Value]) -> PathBuf {
    let lines: Vec<String> = records.iter().map(Value::to_string).collect();
    write_text(dir, name, &lines.join("\n"))
}

pub fn write_text(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

/// Minimal RFC 4180 reader for checking our own output.
pub fn parse_csv(content: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => row.push(std::mem::take(&mut field)),
            ('\r', false) if chars.peek() == Some(&'\n') => {}
            ('\n', false) => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            (c, _) => field.push(c),
        }
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }
    rows
}
