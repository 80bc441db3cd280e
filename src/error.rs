use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("'{name}' not found in folder '{}'", folder.display())]
    NotFound { name: String, folder: PathBuf },

    #[error("'{name}' not found in '{}'", folder.display())]
    RemovalNotFound { name: String, folder: PathBuf },

    #[error("Failed to {op} '{}': {source}", path.display())]
    Fs {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Key '{key}' in '{}' is shared by '{first}' and '{second}'", folder.display())]
    KeyCollision {
        key: String,
        folder: PathBuf,
        first: String,
        second: String,
    },

    #[error("Path '{}' escapes folder '{}'", path.display(), folder.display())]
    PathEscapes { path: PathBuf, folder: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MirrorError {
    /// Wrap an I/O failure of a filesystem primitive with the path it touched.
    pub fn fs(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MirrorError::Fs {
            op,
            path: path.into(),
            source,
        }
    }

    /// True for lookup and removal misses.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MirrorError::NotFound { .. } | MirrorError::RemovalNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MirrorError>;
