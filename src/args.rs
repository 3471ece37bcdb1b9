//! Resolves the raw argument list into an invocation plan.
//!
//! This is a pure decision, printing and exit codes stay in the binary so the
//! branch selection can be tested without capturing process output.

use std::path::PathBuf;

/// Usage text, printed for `help`, `?`, an empty argument list, or after an
/// argument error.
pub const USAGE: &str = "Help
watermark_image <WatermarkImagePath> <SourcePath> <TargetPath>";

/// What the process should do, decided from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the usage text and exit successfully.
    Help,
    /// Print the message followed by the usage text, exit with failure.
    Error(String),
    /// Run a batch with the three provided paths.
    Run {
        watermark: PathBuf,
        source: PathBuf,
        target: PathBuf,
    },
}

/// Decide the invocation from the argument list, program name excluded.
///
/// A first argument of `help` (any letter casing) or `?` wins over everything
/// else, the remaining arguments are not consulted. Anything other than
/// exactly three arguments is an error.
pub fn resolve<S: AsRef<str>>(args: &[S]) -> Invocation {
    let first = args.first().map(|s| s.as_ref()).unwrap_or("");
    if first.is_empty() || first.eq_ignore_ascii_case("help") || first == "?" {
        return Invocation::Help;
    }
    if args.len() != 3 {
        return Invocation::Error("invalid number of arguments".to_string());
    }
    Invocation::Run {
        watermark: PathBuf::from(first),
        source: PathBuf::from(args[1].as_ref()),
        target: PathBuf::from(args[2].as_ref()),
    }
}
