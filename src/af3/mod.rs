//! AlphaFold3 job document assembly and output.
//!
//! This module turns parsed records into AlphaFold3 job documents and
//! writes them as pretty-printed JSON, one file per job.
//!
//! # Structure
//!
//! - `types` - Job document data model and its serialization shape
//! - `chain_id` - PDB-style chain identifier allocation
//! - `builder` - Record to document assembly
//! - `writer` - JSON formatting and file output

mod builder;
mod chain_id;
mod types;
mod writer;

pub use builder::{build_document, build_documents, BuildError};
pub use chain_id::{chain_id, ChainIdAllocator, ChainIdError, MAX_CHAIN_INDEX};
pub use types::{
    ChainEntry, ChainGroup, JobDocument, LigandEntry, LigandSource, DEFAULT_MODEL_SEED, DIALECT,
    DOCUMENT_VERSION,
};
