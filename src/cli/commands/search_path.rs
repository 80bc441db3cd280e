use crate::cli::args::{split_keys, SearchPathArgs};
use crate::context::AppContext;
use crate::error::Result;
use pathmirror::SearchPath;

pub fn run_search_path(args: SearchPathArgs, ctx: AppContext) -> Result<()> {
    let pm = ctx.open()?;
    let folder = pm.folder_at(&split_keys(args.keys.as_deref()))?;

    let var = args
        .var
        .unwrap_or_else(|| ctx.config.search_path.variable.clone());
    let strategy = args.strategy.unwrap_or(ctx.config.search_path.strategy);

    let mut search_path = SearchPath::from_env(&var);
    let outcome = folder.add_to_search_path(&mut search_path, strategy);
    let value = search_path.to_env_value()?;

    println!("# {}", outcome);
    println!("export {}=\"{}\"", var, value.to_string_lossy());
    Ok(())
}
