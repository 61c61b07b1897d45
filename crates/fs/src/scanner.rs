use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ScanError;
use crate::record::FileRecord;

/// Enumerate every regular file under `root`.
///
/// `root` may itself be a regular file, in which case the result is that
/// single record. For a directory root, all descendant regular files are
/// collected; sub-directories are descended into but never emitted, and the
/// root itself produces no record. Symbolic links are neither followed nor
/// emitted (following risks cycles; a link is not a regular file), and
/// special files are skipped the same way.
///
/// Traversal is iterative over an explicit directory stack, so arbitrarily
/// deep trees cannot overflow the call stack. The returned order is the
/// stack's visit order: reproducible for a fixed tree, but not otherwise
/// meaningful.
pub fn get_files(root: &Path) -> Result<Vec<FileRecord>, ScanError> {
    let meta = stat_root(root)?;

    let mut records = Vec::new();

    if meta.is_file() {
        records.push(make_record(root.to_path_buf(), &meta)?);
        return Ok(records);
    }
    if !meta.is_dir() {
        // Special file as the root: nothing to emit.
        return Ok(records);
    }

    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = fs::read_dir(&dir).map_err(|e| ScanError::traversal(&dir, e))?;

        for entry_res in entries {
            let entry = entry_res.map_err(|e| ScanError::traversal(&dir, e))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| ScanError::traversal(&path, e))?;

            if file_type.is_dir() {
                stack.push(path);
            } else if file_type.is_file() {
                let meta = entry.metadata().map_err(|e| ScanError::traversal(&path, e))?;
                records.push(make_record(path, &meta)?);
            } else {
                debug!("[scan] skipping non-regular entry {}", path.display());
            }
        }
    }

    Ok(records)
}

/// Stat the scan root. The root argument is resolved if it is a symlink;
/// the no-follow policy applies to entries discovered during traversal.
pub(crate) fn stat_root(root: &Path) -> Result<fs::Metadata, ScanError> {
    match fs::metadata(root) {
        Ok(meta) => Ok(meta),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ScanError::NotFound {
            path: root.to_path_buf(),
        }),
        Err(e) => Err(ScanError::traversal(root, e)),
    }
}

pub(crate) fn make_record(path: PathBuf, meta: &fs::Metadata) -> Result<FileRecord, ScanError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    let modified = meta
        .modified()
        .map_err(|e| ScanError::traversal(&path, e))?;

    Ok(FileRecord {
        name,
        size: meta.len(),
        path,
        modified,
    })
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
