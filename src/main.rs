//! fasta2af3 - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use fasta2af3::cli::{Cli, Commands};

/// Install the tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `warn`. Events go to stderr so stdout
/// stays reserved for the conversion report.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input_fasta,
            output_dir,
            name,
        } => commands::convert::handle(&input_fasta, &output_dir, name.as_deref()),
        Commands::Inspect { input_fasta } => commands::inspect::handle(&input_fasta),
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}
