//! Job document JSON writer.
//!
//! Serializes documents with four-space indentation and no trailing
//! newline, matching the formatting the AlphaFold3 input examples use.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::files::filename;

use super::types::JobDocument;

const INDENT: &[u8] = b"    ";

impl JobDocument {
    /// Serialize the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)
            .context("Failed to serialize job document")?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Write the document as JSON to a path.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).with_context(|| format!("Failed to write file: {:?}", path))?;
        Ok(())
    }

    /// Output path for this document inside `dir`.
    ///
    /// The file stem is the sanitized job name, so two jobs whose names
    /// differ only in dropped characters land in the same file.
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", filename::sanitize(&self.name)))
    }
}
