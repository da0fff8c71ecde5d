pub mod cli_args;
pub mod command_runner;
pub mod dependency_checker;
pub mod detector;
pub mod grammar;
pub mod processor;
pub mod source;
pub mod stripper;

pub use command_runner::show_unified_diff;
pub use dependency_checker::check_dependencies;
pub use detector::detect;
pub use grammar::{Grammar, LANGUAGES};

pub use cli_args::{CliArgs, Command, CompletionArgs, DecommentArgs};

pub use processor::{ProcessOutcome, ReplaceConfirmer, StripOptions, process_file};
pub use stripper::{Stripped, strip};

use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Unsupported file type: {path}")]
    UnsupportedFileType { path: String },

    #[error("{action} failed for {path}: {source}")]
    Io {
        action: &'static str,
        path: String,
        source: std::io::Error,
    },

    #[error("Could not read the entire file {path}: expected {expected} bytes, got {actual}")]
    ShortRead {
        path: String,
        expected: u64,
        actual: u64,
    },

    #[error("Output path {path} is the input file itself")]
    OutputPathConflict { path: String },

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        CoreError::Io {
            action,
            path: path.display().to_string(),
            source,
        }
    }
}
