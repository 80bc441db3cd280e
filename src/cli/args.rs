//! CLI argument definitions and subcommands.

use clap::builder::styling::{AnsiColor, Effects};
use clap::builder::Styles;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use pathmirror::InsertStrategy;
use std::path::PathBuf;

// Configures colored help menu colors (similar to uv)
pub const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "pathmirror")]
#[command(about = "Navigate and edit a directory tree through sanitized keys")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory to mirror
    #[arg(long, global = true, env = "PATHMIRROR_ROOT")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the direct subfolders and files of a folder
    Ls(LsArgs),

    /// Show a folder and everything below it
    Tree(TreeArgs),

    /// Print the absolute path behind a key path
    Get(GetArgs),

    /// Create a directory chain
    Mkdir(MkdirArgs),

    /// Delete a file or a whole folder
    Rm(RmArgs),

    /// Print a PATH-style variable with a folder added to it
    SearchPath(SearchPathArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct LsArgs {
    /// Folder keys separated by '/' (default: the root)
    pub keys: Option<String>,
}

#[derive(Parser)]
pub struct TreeArgs {
    /// Folder keys separated by '/' (default: the root)
    pub keys: Option<String>,

    /// Maximum depth to display
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Show folders only
    #[arg(long)]
    pub folders_only: bool,

    /// Hide the summary line
    #[arg(long)]
    pub no_summary: bool,

    /// Print the subtree as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct GetArgs {
    /// Keys separated by '/', ending at a folder or file key
    pub keys: String,
}

#[derive(Parser)]
pub struct MkdirArgs {
    /// Path segments of the chain to create
    #[arg(required = true)]
    pub segments: Vec<String>,

    /// Folder to create the chain in (keys separated by '/')
    #[arg(long = "in", value_name = "KEYS")]
    pub parent: Option<String>,
}

#[derive(Parser)]
pub struct RmArgs {
    /// Name or key of the file or folder to delete
    pub name: String,

    /// Folder to delete from (keys separated by '/')
    #[arg(long = "in", value_name = "KEYS")]
    pub parent: Option<String>,

    /// Allow deleting a folder together with everything below it
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser)]
pub struct SearchPathArgs {
    /// Folder to add (keys separated by '/', default: the root)
    pub keys: Option<String>,

    /// Variable to extend (default: from config, else PATH)
    #[arg(long)]
    pub var: Option<String>,

    /// Where to add it: insert, insert:N or append
    #[arg(short, long)]
    pub strategy: Option<InsertStrategy>,
}

#[derive(Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Initialize configuration file
    Init,
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
}

/// Split a '/'-separated key path, ignoring empty segments.
pub fn split_keys(keys: Option<&str>) -> Vec<String> {
    keys.map(|k| {
        k.split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Parse CLI with colored styles
pub fn parse_cli() -> Cli {
    let cmd = Cli::command().styles(STYLES).color(clap::ColorChoice::Auto);
    let matches = cmd.get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}
