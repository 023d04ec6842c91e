//! Closed vocabularies for evidence and gold-support categories.
//!
//! Both enums serialize as their wire key, so maps keyed by them come out in
//! declaration order and with the exact names used in the dataset.

use serde::{Serialize, Serializer};
use std::fmt;

/// One of the 16 evidence categories attached to a protein record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvidenceKind {
    /// Gene Ontology molecular function terms
    GoMolecularFunction,
    /// Gene Ontology biological process terms
    GoBiologicalProcess,
    /// Gene Ontology cellular component terms
    GoCellularComponent,
    CatalyticActivity,
    BindingSite,
    Cofactor,
    ActiveSite,
    DnaBinding,
    Pathway,
    SubcellularLocation,
    /// Domain feature table entries
    Domain,
    Motif,
    TopologicalDomain,
    EcNumber,
    UniPathway,
    Reactome,
}

impl EvidenceKind {
    /// All kinds, in the order they appear in coverage summaries.
    pub const ALL: [EvidenceKind; 16] = [
        EvidenceKind::GoMolecularFunction,
        EvidenceKind::GoBiologicalProcess,
        EvidenceKind::GoCellularComponent,
        EvidenceKind::CatalyticActivity,
        EvidenceKind::BindingSite,
        EvidenceKind::Cofactor,
        EvidenceKind::ActiveSite,
        EvidenceKind::DnaBinding,
        EvidenceKind::Pathway,
        EvidenceKind::SubcellularLocation,
        EvidenceKind::Domain,
        EvidenceKind::Motif,
        EvidenceKind::TopologicalDomain,
        EvidenceKind::EcNumber,
        EvidenceKind::UniPathway,
        EvidenceKind::Reactome,
    ];

    /// Key under which this kind appears in the record's evidence mapping.
    pub const fn key(self) -> &'static str {
        match self {
            EvidenceKind::GoMolecularFunction => "GO_MF_json",
            EvidenceKind::GoBiologicalProcess => "GO_BP_json",
            EvidenceKind::GoCellularComponent => "GO_CC_json",
            EvidenceKind::CatalyticActivity => "Catalytic_Activity_json",
            EvidenceKind::BindingSite => "Binding_site_json",
            EvidenceKind::Cofactor => "Cofactor_json",
            EvidenceKind::ActiveSite => "Active_site_json",
            EvidenceKind::DnaBinding => "DNA_binding_json",
            EvidenceKind::Pathway => "Pathway_json",
            EvidenceKind::SubcellularLocation => "Subcellular_location_json",
            EvidenceKind::Domain => "DomainFT_json",
            EvidenceKind::Motif => "Motif_json",
            EvidenceKind::TopologicalDomain => "Topological_domain_json",
            EvidenceKind::EcNumber => "EC number",
            EvidenceKind::UniPathway => "UniPathway_raw",
            EvidenceKind::Reactome => "Reactome_raw",
        }
    }

    /// Look up a kind by its wire key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for EvidenceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// One of the 9 gold-support identifier families used to grade an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SupportKind {
    EcNumber,
    RheaIds,
    GoMolecularFunctionIds,
    GoBiologicalProcessIds,
    GoCellularComponentIds,
    PathwayLevels,
    CofactorChebi,
    CatalyticChebi,
    EvidenceCodes,
}

impl SupportKind {
    pub const ALL: [SupportKind; 9] = [
        SupportKind::EcNumber,
        SupportKind::RheaIds,
        SupportKind::GoMolecularFunctionIds,
        SupportKind::GoBiologicalProcessIds,
        SupportKind::GoCellularComponentIds,
        SupportKind::PathwayLevels,
        SupportKind::CofactorChebi,
        SupportKind::CatalyticChebi,
        SupportKind::EvidenceCodes,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            SupportKind::EcNumber => "EC_number",
            SupportKind::RheaIds => "RHEA_ids",
            SupportKind::GoMolecularFunctionIds => "GO_MF_ids",
            SupportKind::GoBiologicalProcessIds => "GO_BP_ids",
            SupportKind::GoCellularComponentIds => "GO_CC_ids",
            SupportKind::PathwayLevels => "Pathway_levels",
            SupportKind::CofactorChebi => "Cofactor_chebi",
            SupportKind::CatalyticChebi => "Catalytic_chebi",
            SupportKind::EvidenceCodes => "Evidence_codes",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

impl fmt::Display for SupportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for SupportKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
