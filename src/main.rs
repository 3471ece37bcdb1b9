use std::error::Error as _;
use std::path::Path;
use std::process::ExitCode;

use watermark_image::{Invocation, SourceKind, Watermark, USAGE};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match watermark_image::resolve(&args) {
        Invocation::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Invocation::Error(message) => {
            println!("{message}");
            println!("{USAGE}");
            ExitCode::FAILURE
        }
        Invocation::Run {
            watermark,
            source,
            target,
        } => match run(&watermark, &source, &target) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                println!("An error occurred: {err}");
                let mut cause = err.source();
                while let Some(inner) = cause {
                    println!("caused by: {inner}");
                    cause = inner.source();
                }
                ExitCode::FAILURE
            }
        },
    }
}

/// Process the whole batch sequentially, one file at a time. The first
/// failure aborts the remaining files.
fn run(watermark_path: &Path, source_path: &Path, target: &Path) -> watermark_image::Result<()> {
    println!("Watermark file: {}", watermark_path.display());
    let watermark = Watermark::open(watermark_path)?;

    let (kind, files) = watermark_image::source_files(source_path)?;
    match kind {
        SourceKind::Directory => println!("Got a directory as source"),
        SourceKind::File => println!("Got a single file as source"),
        SourceKind::Missing => {}
    }

    for file in files {
        println!("Watermarking started: {}", file.display());
        let written = watermark_image::process_file(&watermark, &file, target)?;
        println!("Target file: {}", written.display());
        println!("File created");
    }
    Ok(())
}
