//! Type definitions for AlphaFold3 job documents.
//!
//! # Format
//!
//! A job document is a single JSON object:
//!
//! ```json
//! {
//!     "name": "job1",
//!     "modelSeeds": [1],
//!     "sequences": [
//!         {"protein": {"id": ["A"], "sequence": "MKTAYIAK"}},
//!         {"ligand": {"id": ["B"], "smiles": "CCO"}}
//!     ],
//!     "dialect": "alphafold3",
//!     "version": 2
//! }
//! ```
//!
//! Each element of `sequences` is an object with exactly one key naming the
//! chain group kind. Polymer chains (`protein`, `dna`, `rna`) carry a
//! `sequence` field; ligands carry either `smiles` or `ccd`.

use serde::{Deserialize, Serialize};

use crate::fasta::{ChainDescriptor, ChainKind};

/// Dialect identifier expected by the AlphaFold3 input pipeline.
pub const DIALECT: &str = "alphafold3";

/// Job document schema version.
pub const DOCUMENT_VERSION: u32 = 2;

/// Default model seed written into every document.
pub const DEFAULT_MODEL_SEED: u32 = 1;

/// A complete AlphaFold3 job document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobDocument {
    /// Job name shown in the AlphaFold3 output.
    pub name: String,
    /// Model seeds; always `[1]` for generated documents.
    pub model_seeds: Vec<u32>,
    /// Chain groups in input order.
    pub sequences: Vec<ChainGroup>,
    /// Always `"alphafold3"`.
    pub dialect: String,
    /// Always `2`.
    pub version: u32,
}

impl JobDocument {
    /// Creates a document with the fixed seed, dialect, and version.
    pub fn new(name: impl Into<String>, sequences: Vec<ChainGroup>) -> Self {
        Self {
            name: name.into(),
            model_seeds: vec![DEFAULT_MODEL_SEED],
            sequences,
            dialect: DIALECT.to_string(),
            version: DOCUMENT_VERSION,
        }
    }
}

/// One element of a document's `sequences` array.
///
/// Serializes as a single-key object, the key naming the chain group kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ChainGroup {
    Protein(ChainEntry),
    Dna(ChainEntry),
    Rna(ChainEntry),
    Ligand(LigandEntry),
}

impl ChainGroup {
    /// Builds a chain group from a decoded segment and its allocated ids.
    ///
    /// Polymer kinds map to their own group; `smiles` and `ccd` both map to
    /// `ligand` and keep the kind as the entry's source key.
    pub fn from_descriptor(descriptor: ChainDescriptor, id: Vec<String>) -> Self {
        match descriptor.kind {
            ChainKind::Protein => ChainGroup::Protein(ChainEntry {
                id,
                sequence: descriptor.content,
            }),
            ChainKind::Dna => ChainGroup::Dna(ChainEntry {
                id,
                sequence: descriptor.content,
            }),
            ChainKind::Rna => ChainGroup::Rna(ChainEntry {
                id,
                sequence: descriptor.content,
            }),
            ChainKind::Smiles => ChainGroup::Ligand(LigandEntry {
                id,
                source: LigandSource::Smiles(descriptor.content),
            }),
            ChainKind::Ccd => ChainGroup::Ligand(LigandEntry {
                id,
                source: LigandSource::Ccd(descriptor.content),
            }),
        }
    }

    /// Human-readable kind label for reports.
    pub fn kind_label(&self) -> &'static str {
        match self {
            ChainGroup::Protein(_) => "protein",
            ChainGroup::Dna(_) => "dna",
            ChainGroup::Rna(_) => "rna",
            ChainGroup::Ligand(entry) => match entry.source {
                LigandSource::Smiles(_) => "ligand (smiles)",
                LigandSource::Ccd(_) => "ligand (ccd)",
            },
        }
    }

    /// Chain identifiers assigned to this group.
    pub fn ids(&self) -> &[String] {
        match self {
            ChainGroup::Protein(entry) | ChainGroup::Dna(entry) | ChainGroup::Rna(entry) => {
                &entry.id
            }
            ChainGroup::Ligand(entry) => &entry.id,
        }
    }

    /// Sequence or ligand definition carried by this group.
    pub fn content(&self) -> &str {
        match self {
            ChainGroup::Protein(entry) | ChainGroup::Dna(entry) | ChainGroup::Rna(entry) => {
                &entry.sequence
            }
            ChainGroup::Ligand(entry) => match &entry.source {
                LigandSource::Smiles(content) | LigandSource::Ccd(content) => content,
            },
        }
    }
}

/// Polymer chain group payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainEntry {
    pub id: Vec<String>,
    pub sequence: String,
}

/// Ligand chain group payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LigandEntry {
    pub id: Vec<String>,
    #[serde(flatten)]
    pub source: LigandSource,
}

/// Where a ligand definition comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LigandSource {
    /// Inline SMILES string.
    Smiles(String),
    /// Chemical Component Dictionary code.
    Ccd(String),
}
