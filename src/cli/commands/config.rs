use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::ConfigLoader;
use crate::context::AppContext;
use crate::error::{MirrorError, Result};
use crate::utils;

pub fn run_config(args: ConfigArgs, ctx: AppContext) -> Result<()> {
    match args.action {
        ConfigAction::Init => {
            let path = ConfigLoader::init()?;
            utils::success(&format!("Created config file at {}", path.display()));
        }
        ConfigAction::Show => {
            let content = toml::to_string_pretty(&ctx.config)?;
            println!("{}", content);
            utils::info(&format!("Effective root: {}", ctx.root.display()));
        }
        ConfigAction::Path => {
            let path = ConfigLoader::config_path()
                .ok_or_else(|| MirrorError::Config("Cannot determine config path".into()))?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
