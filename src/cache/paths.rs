// Cache path utilities.
// Resolves the default snapshot location and filenames for saved detail
// documents.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Base cache directory (~/.cache/temblor on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "temblor").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default path of the feed snapshot file.
pub fn snapshot_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("snapshot.json"))
}

/// Filename for a saved event detail document.
pub fn detail_file_name(event_id: &str) -> String {
    format!("{}.json", sanitize_name(event_id))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
