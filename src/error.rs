use std::path::PathBuf;

/// Fatal conditions aborting a batch run.
///
/// Argument problems never reach this type, they are rejected by
/// [`crate::args::resolve`] before a run starts. There is no per-file
/// skip-and-continue: the first error stops the remaining batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The watermark or a source file could not be decoded as an image.
    #[error("could not decode image {path:?}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The source directory could not be read, or the target directory could
    /// not be created.
    #[error("io error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A composited image could not be encoded or written out.
    #[error("could not write image {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
