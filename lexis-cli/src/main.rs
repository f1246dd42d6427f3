mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use lexis_core::{ListFile, Workspace, WorkspaceConfig};
use tracing::debug;

use crate::cli::{Cli, Commands, FileArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));

    match cli.command.unwrap_or(Commands::Extract {
        files: FileArgs::default(),
        stats: false,
    }) {
        Commands::Extract { files, stats } => extract(files.into(), stats),
        Commands::Learn { files } => learn(files.into()),
    }
}

fn extract(config: WorkspaceConfig, print_stats: bool) -> Result<()> {
    let workspace = Workspace::new(&config);
    debug!(input = %workspace.path(ListFile::Input).display(), "starting extraction");

    let (_, stats) = workspace
        .extract()
        .context("vocabulary extraction failed")?;

    if print_stats {
        println!("{stats}");
    }
    Ok(())
}

fn learn(config: WorkspaceConfig) -> Result<()> {
    let workspace = Workspace::new(&config);
    let report = workspace
        .learn()
        .context("merging output into known words failed")?;

    println!(
        "learned {} new word(s), {} known in total",
        report.added, report.known_total
    );
    Ok(())
}
