//! Folder nodes of the mirror.
//!
//! A [`Folder`] stands for one directory. Children are stored under
//! sanitized keys (see [`crate::keys`]); every mutation goes to disk first and
//! is reflected in the node only once the filesystem call succeeded.

use crate::error::{MirrorError, Result};
use crate::host::{self, EntryKind};
use crate::keys::{folder_key, restore_spaces};
use crate::manager::CollisionPolicy;
use crate::render;
use crate::search_path::{self, InsertStrategy, SearchPathOutcome, SearchPathRegistry};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// In-memory mirror of one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Folder {
    /// Directory name as found on disk.
    pub name: String,
    /// Absolute path of the containing directory, empty when detached.
    pub parent_path: PathBuf,
    pub subfolders: IndexMap<String, Folder>,
    /// File key -> absolute path.
    pub files: IndexMap<String, PathBuf>,
}

/// Result of a lookup: a child folder or the path of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Entry<'a> {
    Folder(&'a Folder),
    File(&'a Path),
}

impl<'a> Entry<'a> {
    pub fn as_folder(&self) -> Option<&'a Folder> {
        match self {
            Entry::Folder(folder) => Some(folder),
            Entry::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&'a Path> {
        match self {
            Entry::File(path) => Some(path),
            Entry::Folder(_) => None,
        }
    }

    /// Absolute path of the folder or file.
    pub fn path(&self) -> PathBuf {
        match self {
            Entry::Folder(folder) => folder.dir(),
            Entry::File(path) => path.to_path_buf(),
        }
    }
}

/// Report of a successful [`Folder::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removed {
    pub kind: EntryKind,
    /// Target name with underscores turned back into spaces.
    pub name: String,
    pub path: PathBuf,
    /// Folder the entry was removed from.
    pub from: PathBuf,
}

impl fmt::Display for Removed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            EntryKind::Directory => "Subfolder",
            EntryKind::File => "File",
        };
        write!(
            f,
            "{} '{}' has been removed from '{}'",
            label,
            self.name,
            self.from.display()
        )
    }
}

impl Folder {
    pub fn new(name: impl Into<String>, parent_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            parent_path: parent_path.into(),
            subfolders: IndexMap::new(),
            files: IndexMap::new(),
        }
    }

    /// A node with no known parent.
    pub fn detached(name: impl Into<String>) -> Self {
        Self::new(name, PathBuf::new())
    }

    /// Full path of this folder.
    pub fn dir(&self) -> PathBuf {
        self.parent_path.join(&self.name)
    }

    /// Look up a child folder or file by key.
    ///
    /// Folders are tried first with underscores restored to spaces, then with
    /// the key as given; files are matched on the key as given.
    pub fn get(&self, item: &str) -> Result<Entry<'_>> {
        if let Some(key) = self.folder_slot(item) {
            return Ok(Entry::Folder(&self.subfolders[&key]));
        }
        if let Some(path) = self.files.get(item) {
            return Ok(Entry::File(path));
        }
        Err(self.not_found(item))
    }

    /// Like [`Folder::get`], restricted to subfolders.
    pub fn folder(&self, item: &str) -> Result<&Folder> {
        match self.folder_slot(item) {
            Some(key) => Ok(&self.subfolders[&key]),
            None => Err(self.not_found(item)),
        }
    }

    pub fn folder_mut(&mut self, item: &str) -> Result<&mut Folder> {
        match self.folder_slot(item) {
            Some(key) => Ok(&mut self.subfolders[&key]),
            None => Err(self.not_found(item)),
        }
    }

    pub fn file(&self, item: &str) -> Result<&Path> {
        self.files
            .get(item)
            .map(PathBuf::as_path)
            .ok_or_else(|| self.not_found(item))
    }

    /// Follow a chain of keys; every key but the last must name a folder.
    /// An empty chain resolves to this folder.
    pub fn resolve<S: AsRef<str>>(&self, keys: &[S]) -> Result<Entry<'_>> {
        let Some((last, init)) = keys.split_last() else {
            return Ok(Entry::Folder(self));
        };
        self.folder_at(init)?.get(last.as_ref())
    }

    pub fn folder_at<S: AsRef<str>>(&self, keys: &[S]) -> Result<&Folder> {
        let mut current = self;
        for key in keys {
            current = current.folder(key.as_ref())?;
        }
        Ok(current)
    }

    pub fn folder_at_mut<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<&mut Folder> {
        let mut current = self;
        for key in keys {
            current = current.folder_mut(key.as_ref())?;
        }
        Ok(current)
    }

    fn folder_slot(&self, item: &str) -> Option<String> {
        let with_spaces = restore_spaces(item);
        if self.subfolders.contains_key(&with_spaces) {
            Some(with_spaces)
        } else if self.subfolders.contains_key(item) {
            Some(item.to_string())
        } else {
            None
        }
    }

    fn not_found(&self, item: &str) -> MirrorError {
        MirrorError::NotFound {
            name: item.to_string(),
            folder: self.dir(),
        }
    }

    /// Human-readable listing of the direct children.
    pub fn ls(&self) -> String {
        render::render_listing(self)
    }

    /// This folder and every folder below it, depth-first.
    pub fn descendants(&self) -> Vec<&Folder> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(folder) = stack.pop() {
            out.push(folder);
            // reversed so children come out in listing order
            stack.extend(folder.subfolders.values().rev());
        }
        out
    }

    /// Number of folders below this one.
    pub fn folder_count(&self) -> usize {
        self.descendants().len() - 1
    }

    /// Number of files in this folder and below.
    pub fn file_count(&self) -> usize {
        self.descendants().iter().map(|f| f.files.len()).sum()
    }

    /// Delete a subfolder (recursively) or a file, on disk and in the mirror.
    ///
    /// Spaces in `target` are matched as underscores. Deleting a folder wipes
    /// its whole subtree from disk and cannot be undone. A miss returns
    /// [`MirrorError::RemovalNotFound`] without touching the disk.
    pub fn remove(&mut self, target: &str) -> Result<Removed> {
        let name = restore_spaces(target);
        let key = folder_key(target);
        let from = self.dir();

        if let Some(child) = self.subfolders.get(&key) {
            let path = child.dir();
            host::remove_dir_all(&path)?;
            self.subfolders.shift_remove(&key);
            tracing::info!("Removed folder {}", path.display());
            return Ok(Removed {
                kind: EntryKind::Directory,
                name,
                path,
                from,
            });
        }

        if let Some(path) = self.files.get(&key).cloned() {
            host::remove_file(&path)?;
            self.files.shift_remove(&key);
            tracing::info!("Removed file {}", path.display());
            return Ok(Removed {
                kind: EntryKind::File,
                name,
                path,
                from,
            });
        }

        Err(MirrorError::RemovalNotFound { name, folder: from })
    }

    /// Create a directory chain below this folder and mirror it.
    ///
    /// Segments are joined, `.` and `..` are resolved lexically, and each
    /// directory is created and linked before moving to the next one, so a
    /// failure leaves disk and mirror agreeing up to the failing segment.
    /// Existing directories are reused. Siblings created out of band are not
    /// picked up. Returns the deepest folder of the chain.
    ///
    /// Uses [`CollisionPolicy::Overwrite`]; see [`Folder::mkdir_with`].
    pub fn mkdir<I, S>(&mut self, segments: I) -> Result<&mut Folder>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        self.mkdir_with(segments, CollisionPolicy::default())
    }

    /// [`Folder::mkdir`] with an explicit policy for a segment whose key is
    /// already held by a node with a different raw name.
    ///
    /// `Overwrite` replaces that node with one for the new directory;
    /// `Error` fails with [`MirrorError::KeyCollision`] before touching disk.
    pub fn mkdir_with<I, S>(&mut self, segments: I, policy: CollisionPolicy) -> Result<&mut Folder>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let base = self.dir();
        let mut joined = base.clone();
        for segment in segments {
            joined.push(segment.as_ref());
        }
        let parts = relative_parts(&base, &joined)?;

        if policy == CollisionPolicy::Error {
            self.check_chain(&parts)?;
        }

        let mut current = self;
        for part in parts {
            let parent = current.dir();
            host::create_dir(&parent.join(&part))?;

            let key = folder_key(&part);
            if let Some(held) = current.subfolders.get(&key).filter(|c| c.name != part) {
                tracing::warn!(
                    "'{}' and '{}' in {} share key '{}'; keeping '{}'",
                    held.name,
                    part,
                    parent.display(),
                    key,
                    part
                );
                current
                    .subfolders
                    .insert(key.clone(), Folder::new(part.clone(), parent.clone()));
            }

            current = current
                .subfolders
                .entry(key)
                .or_insert_with(move || Folder::new(part, parent));
        }
        Ok(current)
    }

    /// Fail if an existing node along `parts` holds a segment's key under
    /// another raw name.
    fn check_chain(&self, parts: &[String]) -> Result<()> {
        let mut current = self;
        for part in parts {
            let key = folder_key(part);
            let Some(child) = current.subfolders.get(&key) else {
                return Ok(());
            };
            if child.name != *part {
                return Err(MirrorError::KeyCollision {
                    key,
                    folder: current.dir(),
                    first: child.name.clone(),
                    second: part.clone(),
                });
            }
            current = child;
        }
        Ok(())
    }

    /// Register this folder's path in a search-location list.
    pub fn add_to_search_path<R>(&self, registry: &mut R, strategy: InsertStrategy) -> SearchPathOutcome
    where
        R: SearchPathRegistry + ?Sized,
    {
        search_path::register(registry, self.dir(), strategy)
    }
}

/// Components of `joined` below `base`, normalized lexically.
fn relative_parts(base: &Path, joined: &Path) -> Result<Vec<String>> {
    let escapes = || MirrorError::PathEscapes {
        path: joined.to_path_buf(),
        folder: base.to_path_buf(),
    };

    let relative = joined.strip_prefix(base).map_err(|_| escapes())?;
    let mut parts: Vec<String> = Vec::new();
    for component in relative.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(escapes());
                }
            }
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::RootDir | Component::Prefix(_) => return Err(escapes()),
        }
    }
    Ok(parts)
}
