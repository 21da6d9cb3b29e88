//! Type definitions for the multi-entity FASTA input format.
//!
//! The input format extends classic FASTA with typed, replicated chains.
//! Each record is introduced by a `>` header line and carries a body in
//! which `:`-separated segments describe individual molecular chains:
//!
//! ```text
//! >job1
//! MKTAYIAK:dna|ACGT:smiles|CCO|2
//! ```
//!
//! A segment is either a bare amino-acid sequence (implicit protein) or a
//! `tag|content[|count]` triple with tag one of `protein`, `dna`, `rna`,
//! `smiles`, or `ccd`. The optional count replicates the chain into that
//! many identical copies.

use std::num::NonZeroU32;

/// Replica count used when a segment does not specify one.
pub const DEFAULT_COUNT: NonZeroU32 = NonZeroU32::MIN;

// ============================================================================
// Record
// ============================================================================

/// One header block of the input file.
///
/// The header is the text after the `>` marker, kept verbatim (including
/// interior whitespace). The body is the concatenation of all following
/// non-blank lines up to the next marker, joined without separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Header text after the `>` marker.
    pub header: String,

    /// Concatenated body lines.
    pub body: String,
}

impl Record {
    /// Create a record with an empty body.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: String::new(),
        }
    }

    /// The first `:`-separated token of the header, used as the job name.
    ///
    /// Returns `None` only for an empty header (such records are normally
    /// filtered out during parsing).
    pub fn name_token(&self) -> Option<&str> {
        if self.header.is_empty() {
            None
        } else {
            self.header.split(':').next()
        }
    }

    /// The `:`-separated chain segments of the body, in order.
    ///
    /// An empty body yields a single empty segment; downstream decoding
    /// treats it as a zero-length protein chain.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.body.split(':')
    }
}

// ============================================================================
// Chain Descriptors
// ============================================================================

/// Chain kind encoded by a segment tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    /// Amino-acid sequence (also the implicit default for untagged segments).
    Protein,
    /// Deoxyribonucleic acid sequence.
    Dna,
    /// Ribonucleic acid sequence.
    Rna,
    /// Small-molecule ligand given as a SMILES string.
    Smiles,
    /// Ligand given as a Chemical Component Dictionary code.
    Ccd,
}

impl ChainKind {
    /// Parse a chain kind from its lower-cased segment tag.
    ///
    /// Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "protein" => Some(ChainKind::Protein),
            "dna" => Some(ChainKind::Dna),
            "rna" => Some(ChainKind::Rna),
            "smiles" => Some(ChainKind::Smiles),
            "ccd" => Some(ChainKind::Ccd),
            _ => None,
        }
    }

    /// The canonical segment tag for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ChainKind::Protein => "protein",
            ChainKind::Dna => "dna",
            ChainKind::Rna => "rna",
            ChainKind::Smiles => "smiles",
            ChainKind::Ccd => "ccd",
        }
    }

    /// Whether an unparsable replica count falls back to 1 for this kind.
    ///
    /// Protein segments reject bad counts outright; every other kind
    /// silently defaults. The asymmetry is long-standing converter
    /// behavior that downstream pipelines rely on.
    pub fn lenient_count(&self) -> bool {
        !matches!(self, ChainKind::Protein)
    }
}

/// A decoded segment: what kind of chain, its content, and how many copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// The chain kind selected by the segment tag.
    pub kind: ChainKind,

    /// Sequence text, SMILES string, or CCD code depending on `kind`.
    pub content: String,

    /// Number of identical chain copies to emit.
    pub count: NonZeroU32,
}

impl ChainDescriptor {
    /// Create a descriptor with the default replica count of 1.
    pub fn single(kind: ChainKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            count: DEFAULT_COUNT,
        }
    }
}
