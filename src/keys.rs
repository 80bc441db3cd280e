//! Key derivation for mirror entries.
//!
//! Raw filesystem names are stored under a lossy key so callers can address
//! them as identifiers: spaces become underscores, and for files every dot
//! becomes an underscore too (`report.final.txt` -> `report_final_txt`).

/// Key under which a directory named `raw` is stored.
pub fn folder_key(raw: &str) -> String {
    raw.replace(' ', "_")
}

/// Key under which a file named `raw` is stored.
pub fn file_key(raw: &str) -> String {
    raw.replace('.', "_").replace(' ', "_")
}

/// Lookup form of a key with underscores turned back into spaces.
pub fn restore_spaces(key: &str) -> String {
    key.replace('_', " ")
}
