//! Ordered search-location lists a folder can register itself in.
//!
//! The registry is an explicit collaborator: the mirror never touches
//! process-wide state on its own. [`SearchPath`] is the stock in-memory
//! implementation and can be seeded from, and exported back to, a
//! PATH-style environment variable.

use crate::error::{MirrorError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// An ordered list of search locations.
pub trait SearchPathRegistry {
    fn contains(&self, path: &Path) -> bool;

    /// Insert at `index`; positions past the end append.
    fn insert(&mut self, index: usize, path: PathBuf);

    fn append(&mut self, path: PathBuf);
}

/// Where a new location goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InsertStrategy {
    Insert(usize),
    Append,
}

impl Default for InsertStrategy {
    fn default() -> Self {
        InsertStrategy::Insert(1)
    }
}

impl FromStr for InsertStrategy {
    type Err = MirrorError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "insert" => Ok(InsertStrategy::default()),
            "append" => Ok(InsertStrategy::Append),
            other => {
                if let Some(index) = other.strip_prefix("insert:") {
                    let index = index.trim().parse::<usize>().map_err(|_| {
                        MirrorError::InvalidOption(format!("Invalid insert position in '{}'", s))
                    })?;
                    Ok(InsertStrategy::Insert(index))
                } else {
                    Err(MirrorError::InvalidOption(format!(
                        "Invalid method: {}. Use 'insert', 'insert:N' or 'append'.",
                        s
                    )))
                }
            }
        }
    }
}

impl TryFrom<String> for InsertStrategy {
    type Error = MirrorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<InsertStrategy> for String {
    fn from(strategy: InsertStrategy) -> Self {
        strategy.to_string()
    }
}

impl fmt::Display for InsertStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertStrategy::Insert(index) => write!(f, "insert:{}", index),
            InsertStrategy::Append => write!(f, "append"),
        }
    }
}

/// What happened when a location was registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPathOutcome {
    Inserted { path: PathBuf, index: usize },
    Appended { path: PathBuf },
    AlreadyPresent { path: PathBuf },
}

impl fmt::Display for SearchPathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchPathOutcome::Inserted { path, index } => write!(
                f,
                "Inserted {} at index {} in search path.",
                path.display(),
                index
            ),
            SearchPathOutcome::Appended { path } => {
                write!(f, "Appended {} to search path.", path.display())
            }
            SearchPathOutcome::AlreadyPresent { path } => {
                write!(f, "{} is already in the search path.", path.display())
            }
        }
    }
}

/// Add `path` to `registry` unless it is already listed.
pub fn register<R>(registry: &mut R, path: PathBuf, strategy: InsertStrategy) -> SearchPathOutcome
where
    R: SearchPathRegistry + ?Sized,
{
    if registry.contains(&path) {
        tracing::info!("{} is already in the search path", path.display());
        return SearchPathOutcome::AlreadyPresent { path };
    }

    match strategy {
        InsertStrategy::Insert(index) => {
            registry.insert(index, path.clone());
            tracing::debug!("Inserted {} at index {}", path.display(), index);
            SearchPathOutcome::Inserted { path, index }
        }
        InsertStrategy::Append => {
            registry.append(path.clone());
            tracing::debug!("Appended {}", path.display());
            SearchPathOutcome::Appended { path }
        }
    }
}

/// In-memory search path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a PATH-style variable; unset means empty.
    pub fn from_env(var: &str) -> Self {
        std::env::var_os(var)
            .map(|value| Self::from_env_value(&value))
            .unwrap_or_default()
    }

    pub fn from_env_value(value: &std::ffi::OsStr) -> Self {
        Self {
            entries: std::env::split_paths(value).collect(),
        }
    }

    /// Join back into a PATH-style value.
    pub fn to_env_value(&self) -> Result<OsString> {
        std::env::join_paths(&self.entries)
            .map_err(|e| MirrorError::InvalidOption(format!("Cannot join search path: {}", e)))
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }
}

impl From<Vec<PathBuf>> for SearchPath {
    fn from(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }
}

impl SearchPathRegistry for SearchPath {
    fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    fn insert(&mut self, index: usize, path: PathBuf) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, path);
    }

    fn append(&mut self, path: PathBuf) {
        self.entries.push(path);
    }
}
