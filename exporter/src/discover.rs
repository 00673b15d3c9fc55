use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ExportError;

const JSON_EXTENSION: &str = "json";

/// Find the measurement run files at `path`.
///
/// A file is returned as-is, whatever its extension. A directory is searched recursively for
/// `*.json` files, returned in lexicographic path order. A directory without any JSON files
/// gives an empty list, it is up to the caller to decide whether that is an error.
pub fn find_json_files(path: &Path) -> Result<Vec<PathBuf>, ExportError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(ExportError::InputNotFound(path.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file() && is_json(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();

    debug!("Found {} JSON file(s) under {}", files.len(), path.display());

    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == JSON_EXTENSION)
}
