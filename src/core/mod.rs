//! Core data model: the closed kind vocabularies and the defensive record view.

pub mod kinds;
pub mod record;

pub use kinds::{EvidenceKind, SupportKind};
pub use record::{
    is_truthy, non_empty_str, scalar_text, Evidence, EvidencePayload, Provenance, Record,
    DEFAULT_SPLIT,
};
