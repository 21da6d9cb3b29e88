//! Inspect command handler
//!
//! Dry-run view of a conversion: assembles every job document exactly like
//! `convert` and prints a report instead of writing files.

use std::path::Path;

use anyhow::Result;

use super::{assemble_documents, truncate_string};

/// Maximum content characters shown per chain group line.
const CONTENT_PREVIEW_LEN: usize = 40;

/// Handle the inspect command.
///
/// Prints one block per job: its name, the file `convert` would write,
/// and one line per chain group with identifiers, kind, and a shortened
/// view of the content.
#[cfg(not(tarpaulin_include))]
pub fn handle(input_fasta: &str) -> Result<()> {
    let documents = assemble_documents(input_fasta, None)?;

    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let artifact = document.output_path(Path::new(""));
        println!("{} -> {}", document.name, artifact.display());
        for group in &document.sequences {
            let line = format!(
                "  {:6} {:15} {}",
                format!("[{}]", group.ids().join(", ")),
                group.kind_label(),
                truncate_string(group.content(), CONTENT_PREVIEW_LEN)
            );
            println!("{}", line.trim_end());
        }
    }

    Ok(())
}
