//! Configuration schema for pathmirror.
//!
//! ```toml
//! [paths]
//! root = "/data/project"
//!
//! [mirror]
//! reload = "merge"          # or "rescan"
//! on_collision = "overwrite" # or "error"
//!
//! [search_path]
//! variable = "PATH"
//! strategy = "insert:1"     # "insert", "insert:N" or "append"
//! ```

use crate::manager::MirrorOptions;
use crate::search_path::InsertStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub mirror: MirrorOptions,
    pub search_path: SearchPathConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root loaded when none is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPathConfig {
    /// PATH-style environment variable to extend
    pub variable: String,
    pub strategy: InsertStrategy,
}

impl Default for SearchPathConfig {
    fn default() -> Self {
        Self {
            variable: "PATH".to_string(),
            strategy: InsertStrategy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::{CollisionPolicy, ReloadMode};

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search_path.variable, "PATH");
        assert_eq!(config.search_path.strategy, InsertStrategy::Insert(1));
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [paths]
            root = "/data/project"

            [mirror]
            reload = "rescan"
            on_collision = "error"

            [search_path]
            variable = "PYTHONPATH"
            strategy = "append"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.root, Some(PathBuf::from("/data/project")));
        assert_eq!(config.mirror.reload, ReloadMode::Rescan);
        assert_eq!(config.mirror.on_collision, CollisionPolicy::Error);
        assert_eq!(config.search_path.variable, "PYTHONPATH");
        assert_eq!(config.search_path.strategy, InsertStrategy::Append);
    }

    #[test]
    fn test_invalid_strategy_rejected() {
        let result = toml::from_str::<Config>("[search_path]\nstrategy = \"sideways\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config {
            paths: PathsConfig {
                root: Some(PathBuf::from("/srv")),
            },
            ..Default::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("strategy = \"insert:1\""));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
