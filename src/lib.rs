pub mod args;
pub mod batch;
pub mod compose;
pub mod enumerate;
pub mod error;

// Export the public components from the modules here.
pub use args::{resolve, Invocation, USAGE};
pub use batch::{output_path, process_file};
pub use compose::Watermark;
pub use enumerate::{source_files, SourceFiles, SourceKind, IMAGE_EXTENSIONS};
pub use error::{Error, Result};
