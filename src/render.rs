//! Text rendering of folders: the flat `ls` listing and an ASCII tree.

use crate::folder::Folder;
use std::path::Path;

/// Options for rendering the tree
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Maximum depth to render (None = unlimited)
    pub max_depth: Option<usize>,
    /// Leave files out, folders only
    pub folders_only: bool,
    /// Hide summary line
    pub no_summary: bool,
}

/// Listing of a folder's own path, direct subfolder keys, then file keys.
pub fn render_listing(folder: &Folder) -> String {
    let mut output = format!("Contents of '{}':\n", folder.dir().display());

    if folder.subfolders.is_empty() {
        output.push_str("No subfolders.\n");
    } else {
        output.push_str("Subfolders:\n");
        for key in folder.subfolders.keys() {
            output.push_str(&format!("  [Dir] {}\n", key));
        }
    }

    if folder.files.is_empty() {
        output.push_str("No files.\n");
    } else {
        output.push_str("Files:\n");
        for key in folder.files.keys() {
            output.push_str(&format!("  [File] {}\n", key));
        }
    }

    output
}

/// Render the subtree below `folder` to a string
pub fn render_tree(folder: &Folder, options: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str(&folder.dir().display().to_string());
    output.push('\n');
    render_children(&mut output, folder, "", 0, options);

    if !options.no_summary {
        output.push('\n');
        output.push_str(&format_summary(folder, options));
        output.push('\n');
    }

    output
}

fn render_children(
    output: &mut String,
    folder: &Folder,
    prefix: &str,
    depth: usize,
    options: &RenderOptions,
) {
    if options.max_depth.is_some_and(|max| depth >= max) {
        return;
    }

    let file_count = if options.folders_only {
        0
    } else {
        folder.files.len()
    };
    let total = folder.subfolders.len() + file_count;
    let mut index = 0;

    for (key, child) in &folder.subfolders {
        index += 1;
        let is_last = index == total;
        let connector = if is_last { "└── " } else { "├── " };

        output.push_str(prefix);
        output.push_str(connector);
        if *key == child.name {
            output.push_str(&format!("{}/\n", key));
        } else {
            output.push_str(&format!("{}/ ({})\n", key, child.name));
        }

        let new_prefix = format!("{}{}   ", prefix, if is_last { " " } else { "│" });
        render_children(output, child, &new_prefix, depth + 1, options);
    }

    if options.folders_only {
        return;
    }

    for (key, path) in &folder.files {
        index += 1;
        let connector = if index == total { "└── " } else { "├── " };

        output.push_str(prefix);
        output.push_str(connector);
        match raw_file_name(path) {
            Some(raw) if raw != *key => output.push_str(&format!("{} ({})\n", key, raw)),
            _ => output.push_str(&format!("{}\n", key)),
        }
    }
}

fn raw_file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

fn format_summary(folder: &Folder, options: &RenderOptions) -> String {
    let folders = folder.folder_count();
    let mut parts = vec![plural(folders, "folder", "folders")];
    if !options.folders_only {
        parts.push(plural(folder.file_count(), "file", "files"));
    }
    parts.join(", ")
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, many)
    }
}
