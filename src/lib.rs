//! pathmirror: navigate and mutate a directory tree through an in-memory mirror.
//!
//! [`PathManager`] loads a directory recursively into [`Folder`] nodes whose
//! children are addressed by sanitized keys instead of path strings.
//! Creating and deleting entries through a node goes to disk immediately;
//! changes made by other processes show up after [`PathManager::reload`].

pub mod config;
pub mod error;
pub mod folder;
pub mod host;
pub mod keys;
pub mod manager;
pub mod render;
pub mod scan;
pub mod search_path;

// Re-export commonly used types
pub use error::{MirrorError, Result};
pub use folder::{Entry, Folder, Removed};
pub use manager::{CollisionPolicy, MirrorOptions, PathManager, ReloadMode};
pub use search_path::{InsertStrategy, SearchPath, SearchPathOutcome, SearchPathRegistry};
