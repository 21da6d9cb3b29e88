//! Assembly of job documents from parsed records.
//!
//! One record becomes one [`JobDocument`]: its body segments are decoded in
//! order, each segment draws as many chain identifiers as it has replicas,
//! and the job name is taken from the header's first `:`-separated field.
//!
//! # Errors
//!
//! Assembly is all-or-nothing per input. A protein segment with an
//! unparsable replica count or a record that needs more chains than `ZZ`
//! aborts the whole build; no documents are returned.

use tracing::debug;

use crate::fasta::{segment, Record, SegmentError};

use super::chain_id::{ChainIdAllocator, ChainIdError};
use super::types::{ChainGroup, JobDocument};

use thiserror::Error;

/// Errors from job document assembly.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Segment(#[from] SegmentError),
    #[error(transparent)]
    ChainIds(#[from] ChainIdError),
}

/// Builds one document per record, in input order.
///
/// `name_override` replaces the header-derived job name, but only when it
/// is non-empty and the input holds exactly one record. Multi-record inputs
/// always name jobs from their own headers.
pub fn build_documents(
    records: &[Record],
    name_override: Option<&str>,
) -> Result<Vec<JobDocument>, BuildError> {
    let forced = match name_override {
        Some(name) if !name.is_empty() && records.len() == 1 => Some(name),
        _ => None,
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| build_document(record, index, forced))
        .collect()
}

/// Builds the document for a single record.
///
/// Chain identifiers restart at `A` for every record.
pub fn build_document(
    record: &Record,
    index: usize,
    name_override: Option<&str>,
) -> Result<JobDocument, BuildError> {
    let name = job_name(record, index, name_override);

    let mut allocator = ChainIdAllocator::new();
    let mut sequences = Vec::new();
    for raw in record.segments() {
        let descriptor = segment::decode(raw)?;
        let ids = allocator.allocate(descriptor.count)?;
        sequences.push(ChainGroup::from_descriptor(descriptor, ids));
    }

    debug!(name = %name, chains = sequences.len(), "assembled job document");
    Ok(JobDocument::new(name, sequences))
}

fn job_name(record: &Record, index: usize, name_override: Option<&str>) -> String {
    if let Some(name) = name_override {
        return name.to_string();
    }
    match record.name_token() {
        Some(token) => token.to_string(),
        None => format!("job_{}", index),
    }
}
