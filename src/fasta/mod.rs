//! Multi-entity FASTA input handling.
//!
//! This module owns everything about the input side of the converter:
//!
//! - [`parse_records`] splits raw text into header/body records
//! - [`segment::decode`] turns one colon-separated body segment into a
//!   typed [`ChainDescriptor`]
//! - [`types`](self) defines the shared vocabulary ([`Record`],
//!   [`ChainKind`], [`ChainDescriptor`])
//!
//! The grammar is deliberately forgiving where the encoding is
//! self-describing (tagged chains with a bad replica count fall back to 1)
//! and strict where it is not (protein counts must parse).

mod reader;
pub mod segment;
mod types;

pub use reader::{parse_records, Records};
pub use segment::SegmentError;
pub use types::{ChainDescriptor, ChainKind, Record, DEFAULT_COUNT};
