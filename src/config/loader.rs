use crate::config::Config;
use crate::error::{MirrorError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Get the default config directory path
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("PATHMIRROR_CONFIG") {
            let path = PathBuf::from(path);
            return path.parent().map(|p| p.to_path_buf());
        }

        ProjectDirs::from("", "", "pathmirror").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("PATHMIRROR_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Result<Config> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(config: &Config) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| MirrorError::Config("Cannot determine config path".into()))?;
        Self::save_to(config, &path)
    }

    pub fn save_to(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Initialize config file with defaults
    pub fn init() -> Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| MirrorError::Config("Cannot determine config path".into()))?;

        if path.exists() {
            return Err(MirrorError::Config(format!(
                "Config file already exists at {}",
                path.display()
            )));
        }

        Self::save_to(&Config::default(), &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::ReloadMode;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_from(&temp_dir.path().join("none.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/config.toml");

        let mut config = Config::default();
        config.mirror.reload = ReloadMode::Rescan;
        ConfigLoader::save_to(&config, &path).unwrap();

        assert_eq!(ConfigLoader::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[mirror\nreload = ").unwrap();

        assert!(matches!(
            ConfigLoader::load_from(&path),
            Err(MirrorError::TomlParse(_))
        ));
    }
}
