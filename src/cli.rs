//! CLI definitions for fasta2af3
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Version string shown by `--version`.
///
/// Dev builds append the git commit hash emitted by the build script.
/// Official builds (`--features release`) show the clean package version.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("VERGEN_GIT_SHA"));
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles for a consistent CLI appearance.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default()) // Light gray for descriptions
        .valid(AnsiColor::White.on_default()) // Light gray for valid values
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "fasta2af3")]
#[command(about = "Convert multi-entity FASTA files into AlphaFold3 JSON job definitions")]
#[command(
    long_about = "fasta2af3 - Convert multi-entity FASTA files into AlphaFold3 JSON job definitions.

Reads an extended FASTA format where one record describes a whole modelling
job: body segments separated by ':' become protein, DNA, RNA, or ligand
chains, optionally replicated via a count suffix. Every record is written
as one AlphaFold3 job document ready for inference.

QUICK START:
    fasta2af3 convert input.fasta out/     Convert every record to JSON
    fasta2af3 inspect input.fasta          Preview jobs without writing
    fasta2af3 completions bash             Generate shell completions

INPUT FORMAT:
    >job1
    MKTAYIAK:dna|ACGT|2:smiles|CCO

For more information, see: https://github.com/simon/fasta2af3"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a FASTA file into JSON job files
    #[command(long_about = "Convert a multi-entity FASTA file into AlphaFold3 JSON job files.

Every record in the input becomes one job document named after the first
':'-separated field of its header. Documents land in OUTPUT_DIR (created
if missing) as <name>.json, with characters unsafe for filenames stripped
from the name.

Body segments separated by ':' become chains. A segment is either a bare
protein sequence or a tagged 'kind|content|count' form, where kind is one
of protein, dna, rna, smiles, or ccd and the optional count replicates
the chain. Chain identifiers A, B, ... ZZ are assigned in segment order.

EXAMPLES:
    fasta2af3 convert input.fasta out/
    fasta2af3 convert input.fasta out/ --name my-job
    RUST_LOG=debug fasta2af3 convert input.fasta out/")]
    Convert {
        /// Path to the input FASTA file
        #[arg(help = "Path to the input FASTA file")]
        input_fasta: String,
        /// Directory to write the JSON job files to
        #[arg(help = "Directory to save output JSON files (created if missing)")]
        output_dir: String,
        /// Override the job name (single-record inputs only)
        #[arg(
            long,
            short,
            help = "Job name override (applies when the input holds exactly one record)"
        )]
        name: Option<String>,
    },

    /// Preview the jobs a FASTA file would produce
    #[command(long_about = "Preview the jobs a FASTA file would produce without writing anything.

Parses and assembles every record exactly like 'convert', then prints one
report per job: its name, the file it would be written to, and every chain
group with its identifiers, kind, and a shortened view of the content.

EXAMPLE:
    fasta2af3 inspect input.fasta

OUTPUT:
    job1 -> job1.json
      [A]    protein         MKTAYIAK
      [B, C] dna             ACGT")]
    Inspect {
        /// Path to the input FASTA file
        #[arg(help = "Path to the input FASTA file")]
        input_fasta: String,
    },

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script on stdout.

Source the output directly or install it into your shell's completion
directory.

EXAMPLES:
    fasta2af3 completions bash > /etc/bash_completion.d/fasta2af3
    fasta2af3 completions zsh > \"${fpath[1]}/_fasta2af3\"
    fasta2af3 completions fish > ~/.config/fish/completions/fasta2af3.fish")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum, help = "Shell to generate completions for")]
        shell: CompletionShell,
    },
}
