use crate::cli::args::{split_keys, LsArgs};
use crate::context::AppContext;
use crate::error::Result;

pub fn run_ls(args: LsArgs, ctx: AppContext) -> Result<()> {
    let pm = ctx.open()?;
    let folder = pm.folder_at(&split_keys(args.keys.as_deref()))?;
    print!("{}", folder.ls());
    Ok(())
}
