use crate::CoreError;
use crate::command_runner::show_unified_diff;
use crate::detector::detect;
use crate::source::{
    DEFAULT_OUTPUT_SUFFIX, read_source, remove_if_exists, sibling_output_path, write_output,
};
use crate::stripper::strip;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOptions {
    pub suffix: String,
    pub show_diff: bool,
    pub assume_yes: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        StripOptions {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            show_diff: true,
            assume_yes: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    NoComments,
    Replaced { path: PathBuf },
    Kept { path: PathBuf },
}

/// Asks whether the stripped copy should take the original's place.
pub trait ReplaceConfirmer {
    fn confirm_replace(&mut self, original: &Path, stripped: &Path) -> anyhow::Result<bool>;
}

impl<F> ReplaceConfirmer for F
where
    F: FnMut(&Path, &Path) -> anyhow::Result<bool>,
{
    fn confirm_replace(&mut self, original: &Path, stripped: &Path) -> anyhow::Result<bool> {
        self(original, stripped)
    }
}

fn copy_permissions(from: &Path, to: &Path) -> Result<(), CoreError> {
    let permissions = fs::metadata(from)
        .map_err(|e| CoreError::io("Read permissions of", from, e))?
        .permissions();
    fs::set_permissions(to, permissions).map_err(|e| CoreError::io("Set permissions on", to, e))
}

/// Best-effort removal of the stripped copy on a failure path.
fn discard_output(output: &Path) {
    if let Err(e) = remove_if_exists(output) {
        tracing::warn!("could not remove {}: {}", output.display(), e);
    }
}

fn write_stripped_copy(original: &Path, output: &Path, content: &[u8]) -> Result<(), CoreError> {
    write_output(output, content)?;
    if let Err(e) = copy_permissions(original, output) {
        discard_output(output);
        return Err(e);
    }
    Ok(())
}

fn replace_original(original: &Path, stripped: &Path) -> Result<(), CoreError> {
    fs::rename(stripped, original).map_err(|e| CoreError::io("Replace", original, e))?;
    tracing::info!(path = %original.display(), "replaced original with stripped file");
    Ok(())
}

/// Strips `path` and, once confirmed, swaps the result in for the original.
///
/// The language is resolved before the file is touched. A failure after the
/// stripped copy is written leaves the original as it was.
pub fn process_file(
    path: &Path,
    options: &StripOptions,
    confirmer: &mut dyn ReplaceConfirmer,
) -> Result<ProcessOutcome, CoreError> {
    let grammar = detect(path).ok_or_else(|| CoreError::UnsupportedFileType {
        path: path.display().to_string(),
    })?;

    let output_path = sibling_output_path(path, &options.suffix);
    if output_path == path {
        return Err(CoreError::OutputPathConflict {
            path: output_path.display().to_string(),
        });
    }

    let content = read_source(path)?;
    let stripped = strip(&content, grammar);

    if !stripped.comments_found {
        if remove_if_exists(&output_path)? {
            tracing::info!(path = %output_path.display(), "removed stale output file");
        }
        return Ok(ProcessOutcome::NoComments);
    }

    write_stripped_copy(path, &output_path, &stripped.output)?;

    if options.show_diff {
        if let Err(e) = show_unified_diff(path, &output_path) {
            tracing::warn!("could not show diff: {:#}", e);
        }
    }

    let confirmed = if options.assume_yes {
        true
    } else {
        match confirmer.confirm_replace(path, &output_path) {
            Ok(answer) => answer,
            Err(e) => {
                discard_output(&output_path);
                return Err(e.into());
            }
        }
    };

    if confirmed {
        replace_original(path, &output_path)?;
        Ok(ProcessOutcome::Replaced {
            path: path.to_path_buf(),
        })
    } else {
        remove_if_exists(&output_path)?;
        tracing::info!(path = %output_path.display(), "discarded stripped output");
        Ok(ProcessOutcome::Kept {
            path: path.to_path_buf(),
        })
    }
}
