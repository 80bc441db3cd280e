//! The root of a mirror: a [`Folder`] bound to the path it was loaded from.

use crate::error::{MirrorError, Result};
use crate::folder::Folder;
use crate::scan;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// How [`PathManager::reload`] combines a fresh scan with the current tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReloadMode {
    /// Overlay the scan on the root's maps. Entries that vanished from disk
    /// and in-memory-only children of the root are kept.
    #[default]
    Merge,
    /// Replace the root's maps with the scan.
    Rescan,
}

/// What a scan does when two raw names in one directory share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Last entry enumerated wins; a warning is logged.
    #[default]
    Overwrite,
    /// Fail the scan with [`MirrorError::KeyCollision`].
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorOptions {
    pub reload: ReloadMode,
    pub on_collision: CollisionPolicy,
}

/// Mirror of the directory tree under `root`.
///
/// Dereferences to the root [`Folder`], so navigation and mutation work on
/// the manager directly.
#[derive(Debug, Clone)]
pub struct PathManager {
    root: PathBuf,
    folder: Folder,
    options: MirrorOptions,
}

impl PathManager {
    /// Load the tree under `root` with default options.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_options(root, MirrorOptions::default())
    }

    /// Load the tree under `root`. A relative root is taken from the current
    /// directory; symlinks are not resolved.
    pub fn with_options(root: impl AsRef<Path>, options: MirrorOptions) -> Result<Self> {
        let root = root.as_ref();
        let root = std::path::absolute(root).map_err(|e| MirrorError::fs("resolve", root, e))?;

        let folder = load(&root, options)?;
        tracing::info!(
            "Loaded {} ({} folders, {} files)",
            root.display(),
            folder.folder_count(),
            folder.file_count()
        );

        Ok(Self {
            root,
            folder,
            options,
        })
    }

    /// Path the manager was built with.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &MirrorOptions {
        &self.options
    }

    /// Scan `root` again and fold the result into the tree.
    ///
    /// The live tree is only touched once the whole scan succeeded.
    pub fn reload(&mut self) -> Result<()> {
        let fresh = load(&self.root, self.options)?;

        match self.options.reload {
            ReloadMode::Merge => {
                self.folder.subfolders.extend(fresh.subfolders);
                self.folder.files.extend(fresh.files);
            }
            ReloadMode::Rescan => {
                self.folder.subfolders = fresh.subfolders;
                self.folder.files = fresh.files;
            }
        }

        tracing::info!("Reloaded {} ({:?})", self.root.display(), self.options.reload);
        Ok(())
    }

    /// [`Folder::mkdir`] on the root, applying the configured collision policy.
    pub fn mkdir<I, S>(&mut self, segments: I) -> Result<&mut Folder>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.folder.mkdir_with(segments, self.options.on_collision)
    }

    /// The root node.
    pub fn tree(&self) -> &Folder {
        &self.folder
    }

    pub fn tree_mut(&mut self) -> &mut Folder {
        &mut self.folder
    }

    pub fn into_tree(self) -> Folder {
        self.folder
    }
}

impl Deref for PathManager {
    type Target = Folder;

    fn deref(&self) -> &Folder {
        &self.folder
    }
}

impl DerefMut for PathManager {
    fn deref_mut(&mut self) -> &mut Folder {
        &mut self.folder
    }
}

fn load(root: &Path, options: MirrorOptions) -> Result<Folder> {
    let mut folder = root_folder(root);
    scan::scan_dir(&mut folder, options.on_collision)?;
    Ok(folder)
}

/// Root node whose `dir()` is `root`.
fn root_folder(root: &Path) -> Folder {
    match (root.file_name(), root.parent()) {
        (Some(name), Some(parent)) => Folder::new(name.to_string_lossy(), parent),
        _ => Folder::detached(root.to_string_lossy()),
    }
}
