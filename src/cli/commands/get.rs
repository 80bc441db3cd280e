use crate::cli::args::{split_keys, GetArgs};
use crate::context::AppContext;
use crate::error::Result;

pub fn run_get(args: GetArgs, ctx: AppContext) -> Result<()> {
    let pm = ctx.open()?;
    let entry = pm.resolve(&split_keys(Some(args.keys.as_str())))?;
    println!("{}", entry.path().display());
    Ok(())
}
