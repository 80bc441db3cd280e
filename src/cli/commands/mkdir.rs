use crate::cli::args::{split_keys, MkdirArgs};
use crate::context::AppContext;
use crate::error::Result;
use crate::utils;

pub fn run_mkdir(args: MkdirArgs, ctx: AppContext) -> Result<()> {
    let policy = ctx.config.mirror.on_collision;
    let mut pm = ctx.open()?;
    let parent = pm.folder_at_mut(&split_keys(args.parent.as_deref()))?;
    let created = parent.mkdir_with(&args.segments, policy)?;
    utils::success(&format!("Created {}", created.dir().display()));
    Ok(())
}
