use crate::config::{Config, ConfigLoader};
use crate::error::Result;
use pathmirror::PathManager;
use std::path::PathBuf;

/// Application context that combines configuration, environment variables, and CLI arguments
pub struct AppContext {
    pub config: Config,
    pub root: PathBuf,
}

impl AppContext {
    pub fn new() -> Result<Self> {
        let config = ConfigLoader::load()?;

        // Priority: CLI/ENV (via clap) > config > current directory
        let root = config
            .paths
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self { config, root })
    }

    pub fn with_overrides(mut self, root: Option<PathBuf>) -> Self {
        if let Some(dir) = root {
            self.root = dir;
        }
        self
    }

    /// Load the mirror of the effective root.
    pub fn open(&self) -> Result<PathManager> {
        PathManager::with_options(&self.root, self.config.mirror)
    }
}
