//! Convert command handler
//!
//! Drives the full pipeline: parse records, assemble job documents, and
//! write one JSON file per job into the output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use super::assemble_documents;

/// Handle the convert command.
///
/// A write failure for one job is reported and that job skipped; the run
/// only fails outright on unreadable input, an unusable output directory,
/// or a document build error.
#[cfg(not(tarpaulin_include))]
pub fn handle(input_fasta: &str, output_dir: &str, name: Option<&str>) -> Result<()> {
    let output_dir = Path::new(output_dir);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Error creating output directory: {}", output_dir.display()))?;

    let documents = assemble_documents(input_fasta, name)?;

    let total = documents.len();
    let mut written = 0;
    for document in &documents {
        let path = document.output_path(output_dir);
        match document.write(&path) {
            Ok(()) => {
                written += 1;
                println!("Generated JSON: {}", path.display());
            }
            Err(e) => {
                warn!(path = %path.display(), "skipping job after write failure");
                println!("Error writing JSON to {}: {:#}", path.display(), e);
            }
        }
    }

    println!(
        "Generated {} of {} job file(s) in {}",
        written,
        total,
        output_dir.display()
    );
    Ok(())
}
