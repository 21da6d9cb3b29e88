//! Command handlers for the fasta2af3 CLI.
//!
//! Each submodule handles a specific CLI command.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod convert;
pub mod inspect;

use std::fs;

use anyhow::{bail, Context, Result};

use fasta2af3::af3::{self, JobDocument};
use fasta2af3::fasta;

/// Parse an input file and assemble every job document.
///
/// Shared by `convert` and `inspect` so both fail identically on
/// unreadable input, empty input, and document build errors.
pub fn assemble_documents(input_fasta: &str, name: Option<&str>) -> Result<Vec<JobDocument>> {
    let input = fs::read_to_string(input_fasta)
        .with_context(|| format!("Error reading input file: {}", input_fasta))?;

    let records: Vec<_> = fasta::parse_records(&input).collect();
    if records.is_empty() {
        bail!("No records found in FASTA file.");
    }

    Ok(af3::build_documents(&records, name)?)
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}
