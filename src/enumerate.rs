//! Enumeration of candidate source files.
//!
//! Enumeration is print-free; the caller gets the [`SourceKind`] back and
//! does its own reporting.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File suffixes recognized as processable images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Whether the path carries one of the recognized image extensions.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)))
        .unwrap_or(false)
}

/// What the source path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Directory,
    File,
    Missing,
}

/// Lazy, single-pass sequence of candidate files. Re-invoke
/// [`source_files`] to restart enumeration.
pub enum SourceFiles {
    Directory(fs::ReadDir),
    Single(Option<PathBuf>),
}

impl Iterator for SourceFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        match self {
            SourceFiles::Directory(entries) => {
                // Entries that error mid-iteration are skipped.
                for entry in entries.by_ref().flatten() {
                    let path = entry.path();
                    if path.is_file() && has_image_extension(&path) {
                        return Some(path);
                    }
                }
                None
            }
            SourceFiles::Single(path) => path.take(),
        }
    }
}

/// Resolve `path` and lazily yield the image files it designates.
///
/// A directory yields its immediate (non-recursive) entries with a recognized
/// extension, in whatever order the filesystem reports them. A single
/// existing file yields itself only if its extension is recognized. A path
/// that resolves to neither yields nothing; that is not an error. A directory
/// that exists but cannot be opened is an [`Error::Io`].
pub fn source_files(path: &Path) -> Result<(SourceKind, SourceFiles)> {
    if path.is_dir() {
        let entries = fs::read_dir(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok((SourceKind::Directory, SourceFiles::Directory(entries)))
    } else if path.is_file() {
        let single = has_image_extension(path).then(|| path.to_path_buf());
        Ok((SourceKind::File, SourceFiles::Single(single)))
    } else {
        Ok((SourceKind::Missing, SourceFiles::Single(None)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_allow_list() {
        assert!(has_image_extension(Path::new("a.png")));
        assert!(has_image_extension(Path::new("a.JPG")));
        assert!(has_image_extension(Path::new("a.Jpeg")));
        assert!(has_image_extension(Path::new("dir/b.gif")));
        assert!(!has_image_extension(Path::new("a.bmp")));
        assert!(!has_image_extension(Path::new("a.png.txt")));
        assert!(!has_image_extension(Path::new("no_extension")));
    }
}
