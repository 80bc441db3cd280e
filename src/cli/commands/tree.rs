//! Tree command - displays a folder and everything below it.

use crate::cli::args::{split_keys, TreeArgs};
use crate::context::AppContext;
use crate::error::{MirrorError, Result};
use pathmirror::render::{render_tree, RenderOptions};

pub fn run_tree(args: TreeArgs, ctx: AppContext) -> Result<()> {
    let pm = ctx.open()?;
    let folder = pm.folder_at(&split_keys(args.keys.as_deref()))?;

    if args.json {
        let json = serde_json::to_string_pretty(folder)
            .map_err(|e| MirrorError::InvalidOption(format!("JSON serialization failed: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    let options = RenderOptions {
        max_depth: args.depth,
        folders_only: args.folders_only,
        no_summary: args.no_summary,
    };
    print!("{}", render_tree(folder, &options));
    Ok(())
}
