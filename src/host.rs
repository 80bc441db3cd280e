//! Filesystem primitives the mirror is built on.
//!
//! Every call here is blocking and reports failures as [`MirrorError::Fs`]
//! carrying the path that was touched.

use crate::error::{MirrorError, Result};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Kind of a directory entry, with symlinks followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Create a single directory. Returns `false` when it already existed.
pub fn create_dir(path: &Path) -> Result<bool> {
    match fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!("Created directory {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(e) => Err(MirrorError::fs("create directory", path, e)),
    }
}

/// Delete a directory and everything below it.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|e| MirrorError::fs("remove directory", path, e))?;
    tracing::debug!("Removed directory tree {}", path.display());
    Ok(())
}

pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| MirrorError::fs("remove file", path, e))?;
    tracing::debug!("Removed file {}", path.display());
    Ok(())
}

/// List the directories and regular files directly inside `path`.
///
/// Order is whatever the platform enumeration yields. Entries whose metadata
/// cannot be read (dangling symlinks) and special files are skipped.
pub fn list_dir(path: &Path) -> Result<Vec<HostEntry>> {
    let entries = fs::read_dir(path).map_err(|e| MirrorError::fs("read directory", path, e))?;

    let mut listing = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MirrorError::fs("read directory", path, e))?;
        let entry_path = entry.path();

        let metadata = match fs::metadata(&entry_path) {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry {}: {}", entry_path.display(), e);
                continue;
            }
        };

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            tracing::debug!("Skipping special file {}", entry_path.display());
            continue;
        };

        listing.push(HostEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry_path,
            kind,
        });
    }

    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("new");

        assert!(create_dir(&path).unwrap());
        assert!(!create_dir(&path).unwrap());
        assert!(path.is_dir());
    }

    #[test]
    fn test_create_dir_over_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("taken");
        std::fs::write(&path, "x").unwrap();

        let err = create_dir(&path).unwrap_err();
        assert!(matches!(err, MirrorError::Fs { op: "create directory", .. }));
    }

    #[test]
    fn test_list_dir_kinds() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("sub")).unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let mut listing = list_dir(temp_dir.path()).unwrap();
        listing.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].name, "a.txt");
        assert_eq!(listing[0].kind, EntryKind::File);
        assert_eq!(listing[1].name, "sub");
        assert_eq!(listing[1].kind, EntryKind::Directory);
        assert_eq!(listing[1].path, temp_dir.path().join("sub"));
    }

    #[test]
    fn test_list_dir_missing() {
        let temp_dir = TempDir::new().unwrap();
        let err = list_dir(&temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, MirrorError::Fs { op: "read directory", .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_list_dir_skips_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("nowhere"),
            temp_dir.path().join("dangling"),
        )
        .unwrap();

        assert!(list_dir(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_remove_file_and_tree() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("f"), "f").unwrap();
        let file = temp_dir.path().join("top.txt");
        std::fs::write(&file, "t").unwrap();

        remove_file(&file).unwrap();
        remove_dir_all(&temp_dir.path().join("a")).unwrap();

        assert!(!file.exists());
        assert!(!temp_dir.path().join("a").exists());
        assert!(remove_file(&file).is_err());
    }
}
