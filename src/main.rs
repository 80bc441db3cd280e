// Library modules - re-exported for use in binary
use pathmirror::config;
use pathmirror::error;

// Binary-specific modules
mod cli;
mod context;
mod utils;

use cli::args::{parse_cli, Commands};
use cli::commands;
use context::AppContext;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load context
    let ctx = AppContext::new()?.with_overrides(cli.root.clone());

    // Dispatch to command
    match cli.command {
        Commands::Ls(args) => commands::ls::run_ls(args, ctx)?,
        Commands::Tree(args) => commands::tree::run_tree(args, ctx)?,
        Commands::Get(args) => commands::get::run_get(args, ctx)?,
        Commands::Mkdir(args) => commands::mkdir::run_mkdir(args, ctx)?,
        Commands::Rm(args) => commands::rm::run_rm(args, ctx)?,
        Commands::SearchPath(args) => commands::search_path::run_search_path(args, ctx)?,
        Commands::Config(args) => commands::config::run_config(args, ctx)?,
    }

    Ok(())
}
