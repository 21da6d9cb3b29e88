//! fasta2af3 Library
//!
//! A Rust library for converting multi-entity FASTA files into AlphaFold3
//! job documents. The `fasta` module owns input parsing, `af3` owns
//! document assembly and JSON output.

pub mod af3;
pub mod cli;
pub mod fasta;
pub mod files;

pub use af3::{build_documents, BuildError, ChainGroup, JobDocument};
pub use fasta::{parse_records, ChainDescriptor, ChainKind, Record};
