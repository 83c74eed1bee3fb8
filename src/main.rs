use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;
mod draft;
mod extract;
mod scanner;

#[derive(Parser)]
#[command(name = "plugdoc", version)]
#[command(about = "Generate README drafts for plugin directories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan for plugin entry files and write missing README drafts
    Generate {
        /// Root directory to scan (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },
}

fn main() -> Result<()> {
    // Ambient diagnostics go to tracing; the generation report itself is
    // plain stdout. RUST_LOG overrides the default filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { path } => {
            cli::generate::run(&path)?;
        }
    }

    Ok(())
}
