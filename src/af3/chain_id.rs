//! PDB-style chain identifier generation.
//!
//! Chains are labelled `A` through `Z`, then `AA`, `AB`, ... `ZZ`, in the
//! order their segments appear in a record. The two-letter scheme caps the
//! identifier space at 702 chains per job; requests past `ZZ` fail with a
//! typed error instead of producing ambiguous labels.

use std::num::NonZeroU32;

use thiserror::Error;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Highest index that still maps to an identifier (`ZZ`).
pub const MAX_CHAIN_INDEX: u32 = 26 * 26 + 25;

/// Errors from chain identifier generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainIdError {
    /// The job needs more chains than `A`..`ZZ` can label.
    #[error("chain identifier space exhausted: index {index} is past ZZ (max {max} chains)", max = MAX_CHAIN_INDEX + 1)]
    SpaceExhausted { index: u32 },
}

/// Maps a zero-based chain index to its identifier.
///
/// `0` maps to `A`, `25` to `Z`, `26` to `AA`, and `701` to `ZZ`.
pub fn chain_id(index: u32) -> Result<String, ChainIdError> {
    if index > MAX_CHAIN_INDEX {
        return Err(ChainIdError::SpaceExhausted { index });
    }

    if index < 26 {
        Ok((ALPHABET[index as usize] as char).to_string())
    } else {
        let first = ALPHABET[(index / 26 - 1) as usize] as char;
        let second = ALPHABET[(index % 26) as usize] as char;
        Ok(format!("{}{}", first, second))
    }
}

/// Hands out consecutive chain identifiers across the segments of one job.
///
/// Replicated segments draw one identifier per replica, so a record like
/// `MKV:dna|ACGT|2` yields `A` for the protein and `B`, `C` for the DNA
/// copies.
#[derive(Debug, Default)]
pub struct ChainIdAllocator {
    next: u32,
}

impl ChainIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates `count` consecutive identifiers.
    ///
    /// On exhaustion the allocator is left unchanged and no identifiers are
    /// handed out.
    pub fn allocate(&mut self, count: NonZeroU32) -> Result<Vec<String>, ChainIdError> {
        let count = count.get();
        let last = self
            .next
            .checked_add(count - 1)
            .ok_or(ChainIdError::SpaceExhausted { index: u32::MAX })?;
        if last > MAX_CHAIN_INDEX {
            return Err(ChainIdError::SpaceExhausted { index: last });
        }

        let ids = (self.next..=last)
            .map(|index| chain_id(index))
            .collect::<Result<Vec<_>, _>>()?;
        self.next = last + 1;
        Ok(ids)
    }
}
