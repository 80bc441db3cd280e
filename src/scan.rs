//! Depth-first loading of a directory into a [`Folder`].

use crate::error::{MirrorError, Result};
use crate::folder::Folder;
use crate::host::{self, EntryKind};
use crate::keys::{file_key, folder_key};
use crate::manager::CollisionPolicy;
use std::collections::HashMap;
use std::path::Path;

/// Fill `folder` with everything found below its `dir()`.
///
/// Expects an empty node: keys already present count as collisions only when
/// they were produced by this scan.
pub fn scan_dir(folder: &mut Folder, policy: CollisionPolicy) -> Result<()> {
    let path = folder.dir();
    tracing::debug!("Scanning {}", path.display());

    // key -> raw name, per map
    let mut seen_folders: HashMap<String, String> = HashMap::new();
    let mut seen_files: HashMap<String, String> = HashMap::new();

    for entry in host::list_dir(&path)? {
        match entry.kind {
            EntryKind::Directory => {
                let key = folder_key(&entry.name);
                check_collision(&mut seen_folders, &key, &entry.name, &path, policy)?;

                let mut child = Folder::new(entry.name, path.clone());
                scan_dir(&mut child, policy)?;
                folder.subfolders.insert(key, child);
            }
            EntryKind::File => {
                let key = file_key(&entry.name);
                check_collision(&mut seen_files, &key, &entry.name, &path, policy)?;
                folder.files.insert(key, entry.path);
            }
        }
    }

    Ok(())
}

fn check_collision(
    seen: &mut HashMap<String, String>,
    key: &str,
    raw: &str,
    folder: &Path,
    policy: CollisionPolicy,
) -> Result<()> {
    let Some(first) = seen.insert(key.to_string(), raw.to_string()) else {
        return Ok(());
    };

    match policy {
        CollisionPolicy::Overwrite => {
            tracing::warn!(
                "'{}' and '{}' in {} share key '{}'; keeping '{}'",
                first,
                raw,
                folder.display(),
                key,
                raw
            );
            Ok(())
        }
        CollisionPolicy::Error => Err(MirrorError::KeyCollision {
            key: key.to_string(),
            folder: folder.to_path_buf(),
            first,
            second: raw.to_string(),
        }),
    }
}
