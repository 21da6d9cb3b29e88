//! Segment decoder for the `tag|content[|count]` chain encoding.
//!
//! A body segment is classified into a [`ChainDescriptor`] as follows:
//!
//! - No `|` present: the whole segment is a protein sequence, count 1.
//! - `tag|content`: the lower-cased tag selects the chain kind.
//! - `tag|content|count`: a trailing part gives the replica count.
//! - Unrecognized tag: the segment is kept verbatim as protein content,
//!   pipes included. This is a deliberate fallback, not an error.
//!
//! # Errors
//!
//! Replica counts must parse as positive integers. For `protein` segments a
//! bad count is a hard [`SegmentError`]; for all other kinds it silently
//! falls back to 1 (see [`ChainKind::lenient_count`]).

use std::num::NonZeroU32;

use tracing::debug;

use super::types::{ChainDescriptor, ChainKind, DEFAULT_COUNT};

/// Errors produced while decoding a body segment.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    /// A protein segment carried a replica count that is not a positive
    /// integer.
    #[error("invalid replica count {count:?} in segment {segment:?}")]
    InvalidCount {
        segment: String,
        count: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Decode one body segment into a chain descriptor.
///
/// # Errors
///
/// Returns [`SegmentError::InvalidCount`] when a `protein` segment's count
/// part does not parse as a positive integer.
pub fn decode(segment: &str) -> Result<ChainDescriptor, SegmentError> {
    let Some((tag, rest)) = segment.split_once('|') else {
        return Ok(ChainDescriptor::single(ChainKind::Protein, segment));
    };

    let Some(kind) = ChainKind::from_tag(&tag.to_lowercase()) else {
        // Unknown tag: the pipes belong to the content, not the encoding.
        return Ok(ChainDescriptor::single(ChainKind::Protein, segment));
    };

    let (content, count) = match rest.split_once('|') {
        Some((content, count_text)) => (content, parse_count(count_text, kind, segment)?),
        None => (rest, DEFAULT_COUNT),
    };

    Ok(ChainDescriptor {
        kind,
        content: content.to_string(),
        count,
    })
}

/// Parse a replica count, applying the per-kind failure policy.
///
/// This is the single place where the protein/non-protein asymmetry
/// lives: lenient kinds fall back to 1, protein propagates the error.
fn parse_count(text: &str, kind: ChainKind, segment: &str) -> Result<NonZeroU32, SegmentError> {
    match text.trim().parse::<NonZeroU32>() {
        Ok(count) => Ok(count),
        Err(_) if kind.lenient_count() => {
            debug!(segment, count = text, "unparsable replica count, defaulting to 1");
            Ok(DEFAULT_COUNT)
        }
        Err(source) => Err(SegmentError::InvalidCount {
            segment: segment.to_string(),
            count: text.to_string(),
            source,
        }),
    }
}
