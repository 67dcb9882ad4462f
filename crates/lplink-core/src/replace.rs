//! Literal link replacement inside a single text file.
//!
//! The whole file is read into memory, rewritten, and written back in place.
//! Matching is plain substring matching (no patterns), non-overlapping,
//! scanning left to right.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplaceError {
    #[error("link to replace must not be empty")]
    EmptyPattern,
    #[error("read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Replace every occurrence of `old` in `content` with `new`.
/// Returns the new content and the number of occurrences in the original.
pub fn replace_all(content: &str, old: &str, new: &str) -> (String, usize) {
    if old.is_empty() {
        return (content.to_string(), 0);
    }
    let count = content.matches(old).count();
    if count == 0 {
        return (content.to_string(), 0);
    }
    (content.replace(old, new), count)
}

/// Replace `old` with `new` throughout the file at `path`, overwriting it.
/// Returns how many occurrences were replaced.
pub fn replace_links_in_file(path: &Path, old: &str, new: &str) -> Result<usize, ReplaceError> {
    if old.is_empty() {
        return Err(ReplaceError::EmptyPattern);
    }
    let content = read_text(path)?;
    let (updated, count) = replace_all(&content, old, new);

    fs::write(path, updated).map_err(|source| ReplaceError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), count, "rewrote file");
    Ok(count)
}

/// Count occurrences of `old` in the file at `path` without modifying it.
pub fn count_links_in_file(path: &Path, old: &str) -> Result<usize, ReplaceError> {
    if old.is_empty() {
        return Err(ReplaceError::EmptyPattern);
    }
    let content = read_text(path)?;
    Ok(content.matches(old).count())
}

fn read_text(path: &Path) -> Result<String, ReplaceError> {
    fs::read_to_string(path).map_err(|source| ReplaceError::Read {
        path: path.to_path_buf(),
        source,
    })
}
