//! Filesystem-facing helpers.

pub mod filename;
