use crate::cli::args::{split_keys, RmArgs};
use crate::context::AppContext;
use crate::error::{MirrorError, Result};
use crate::utils;
use pathmirror::keys::folder_key;

pub fn run_rm(args: RmArgs, ctx: AppContext) -> Result<()> {
    let mut pm = ctx.open()?;
    let parent = pm.folder_at_mut(&split_keys(args.parent.as_deref()))?;

    if parent.subfolders.contains_key(&folder_key(&args.name)) && !args.force {
        utils::warning(&format!(
            "'{}' is a folder: deleting it removes everything below it from disk and cannot be undone",
            args.name
        ));
        return Err(MirrorError::InvalidOption(
            "Refusing to delete a folder without --force".into(),
        ));
    }

    let removed = parent.remove(&args.name)?;
    utils::success(&removed.to_string());
    Ok(())
}
