//! Per-file step of the batch: decode, composite, write.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::compose::Watermark;
use crate::error::{Error, Result};

/// Where the composited copy of `source_file` goes for the given target.
///
/// The target directory is built from the source file's own directory, so a
/// relative target creates a subdirectory next to the sources and an absolute
/// target is used as-is. The output keeps the source's base filename,
/// original extension included.
pub fn output_path(source_file: &Path, target: &Path) -> PathBuf {
    let dir = match source_file.parent() {
        Some(parent) => parent.join(target),
        None => target.to_path_buf(),
    };
    match source_file.file_name() {
        Some(name) => dir.join(name),
        None => dir,
    }
}

/// Composite the watermark over one source file and write the result.
///
/// The output is always PNG encoded, whatever extension its name carries.
/// The target directory and any missing parents are created on demand; an
/// existing file at the output path is overwritten silently. Returns the
/// written path. The decoded source and the canvas are dropped before the
/// next file is processed.
pub fn process_file(watermark: &Watermark, source_file: &Path, target: &Path) -> Result<PathBuf> {
    let source_image = image::open(source_file).map_err(|source| Error::Decode {
        path: source_file.to_path_buf(),
        source,
    })?;
    let composited = watermark.composite_over(&source_image);

    let target_file = output_path(source_file, target);
    if let Some(dir) = target_file.parent() {
        fs::create_dir_all(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    composited
        .save_with_format(&target_file, ImageFormat::Png)
        .map_err(|source| Error::Write {
            path: target_file.clone(),
            source,
        })?;
    Ok(target_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_relative_target() {
        assert_eq!(
            output_path(Path::new("photos/a.png"), Path::new("out")),
            PathBuf::from("photos/out/a.png")
        );
    }

    #[test]
    fn test_output_path_bare_filename() {
        assert_eq!(
            output_path(Path::new("a.png"), Path::new("out")),
            PathBuf::from("out/a.png")
        );
    }

    #[test]
    fn test_output_path_absolute_target() {
        assert_eq!(
            output_path(Path::new("photos/a.jpg"), Path::new("/tmp/marked")),
            PathBuf::from("/tmp/marked/a.jpg")
        );
    }
}
