//! Question rendering.
//!
//! Turns a record's provenance and evidence into a single natural-language
//! question. Evidence summaries are appended in a fixed priority order:
//! EC numbers, catalytic activity, GO molecular function, pathway, and
//! subcellular location. Each summary is included only when its extraction
//! yields something; wrongly shaped evidence simply yields nothing.

use crate::core::{non_empty_str, Evidence, EvidenceKind, EvidencePayload, Provenance, Record};
use serde_json::Value;

const ORGANISM_FALLBACK: &str = "unknown organism";
const NO_EVIDENCE: &str = "(no additional evidence provided)";
const QUESTION_SUFFIX: &str = " What is its function?";
const FRAGMENT_SEPARATOR: &str = "; ";
const PATHWAY_SEPARATOR: &str = " → ";

/// Maximum distinct GO molecular-function terms quoted in a question
pub const MAX_GO_TERMS: usize = 3;
/// Maximum subcellular locations quoted in a question
pub const MAX_LOCATIONS: usize = 2;

/// Render the question string for one record.
pub fn render_question(record: &Record) -> String {
    let prefix = render_prefix(&record.provenance());
    let fragments = evidence_fragments(&record.evidence());

    let body = if fragments.is_empty() {
        NO_EVIDENCE.to_string()
    } else {
        fragments.join(FRAGMENT_SEPARATOR)
    };

    format!("{prefix}{body}{QUESTION_SUFFIX}")
}

// Pure function to build "Protein from X (N aa). Evidence: "
fn render_prefix(provenance: &Provenance<'_>) -> String {
    let organism = provenance.organism().unwrap_or(ORGANISM_FALLBACK);
    let mut prefix = format!("Protein from {organism}");
    if let Some(length) = provenance.length() {
        prefix.push_str(&format!(" ({length} aa)"));
    }
    prefix.push_str(". Evidence: ");
    prefix
}

/// Evidence summaries for a record, in priority order.
pub fn evidence_fragments(evidence: &Evidence<'_>) -> Vec<String> {
    [
        ec_fragment(evidence.payload(EvidenceKind::EcNumber)),
        catalysis_fragment(evidence.payload(EvidenceKind::CatalyticActivity)),
        molecular_function_fragment(evidence.payload(EvidenceKind::GoMolecularFunction)),
        pathway_fragment(evidence.payload(EvidenceKind::Pathway)),
        location_fragment(evidence.payload(EvidenceKind::SubcellularLocation)),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn ec_fragment(payload: EvidencePayload<'_>) -> Option<String> {
    let numbers: Vec<&str> = payload.items().iter().filter_map(Value::as_str).collect();
    (!numbers.is_empty()).then(|| format!("EC={}", numbers.join("; ")))
}

fn catalysis_fragment(payload: EvidencePayload<'_>) -> Option<String> {
    first_catalysis(payload).map(|catalysis| match catalysis.rhea_id {
        Some(rhea_id) => format!("Catalysis: '{}' ({rhea_id})", catalysis.reaction),
        None => format!("Catalysis: '{}'", catalysis.reaction),
    })
}

fn molecular_function_fragment(payload: EvidencePayload<'_>) -> Option<String> {
    let terms = first_terms(payload, MAX_GO_TERMS);
    (!terms.is_empty()).then(|| format!("MF: {}", terms.join(", ")))
}

fn pathway_fragment(payload: EvidencePayload<'_>) -> Option<String> {
    first_pathway(payload).map(|pathway| format!("Pathway: {pathway}"))
}

fn location_fragment(payload: EvidencePayload<'_>) -> Option<String> {
    let locations = first_locations(payload, MAX_LOCATIONS).join(", ");
    (!locations.is_empty()).then(|| format!("Location: {locations}"))
}

/// A reaction quoted from catalytic-activity evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalysis<'a> {
    pub reaction: &'a str,
    pub rhea_id: Option<&'a str>,
}

/// First catalytic-activity entry with a non-blank reaction.
///
/// Later entries are never consulted, even when they carry a RHEA id and the
/// first match does not.
pub fn first_catalysis(payload: EvidencePayload<'_>) -> Option<Catalysis<'_>> {
    payload.objects().find_map(|item| {
        let reaction = item
            .get("reaction")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|reaction| !reaction.is_empty())?;
        Some(Catalysis {
            reaction,
            rhea_id: non_empty_str(item.get("rhea_id")),
        })
    })
}

/// Up to `limit` distinct GO terms, preferring the term name over the GO id.
pub fn first_terms(payload: EvidencePayload<'_>, limit: usize) -> Vec<&str> {
    let mut terms: Vec<&str> = Vec::with_capacity(limit);
    for item in payload.objects() {
        if terms.len() >= limit {
            break;
        }
        let term = non_empty_str(item.get("term")).or_else(|| non_empty_str(item.get("go_id")));
        if let Some(term) = term {
            if !terms.contains(&term) {
                terms.push(term);
            }
        }
    }
    terms
}

/// Levels of the first pathway segment, joined with an arrow.
pub fn first_pathway(payload: EvidencePayload<'_>) -> Option<String> {
    let segment = payload.items().first()?.as_object()?;
    let levels: Vec<&str> = segment
        .get("levels")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .collect();
    (!levels.is_empty()).then(|| levels.join(PATHWAY_SEPARATOR))
}

/// Up to `limit` subcellular locations, in order. Blank strings take a slot.
pub fn first_locations(payload: EvidencePayload<'_>, limit: usize) -> Vec<&str> {
    payload
        .objects()
        .filter_map(|item| item.get("location").and_then(Value::as_str))
        .take(limit)
        .collect()
}
