use crate::CoreError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_SUFFIX: &str = "_1";

/// Reads the whole file, refusing to continue on a short read.
pub fn read_source(path: &Path) -> Result<Vec<u8>, CoreError> {
    let expected = fs::metadata(path)
        .map_err(|e| CoreError::io("Open", path, e))?
        .len();
    let content = fs::read(path).map_err(|e| CoreError::io("Read", path, e))?;
    if (content.len() as u64) < expected {
        return Err(CoreError::ShortRead {
            path: path.display().to_string(),
            expected,
            actual: content.len() as u64,
        });
    }
    tracing::debug!(path = %path.display(), bytes = content.len(), "read source");
    Ok(content)
}

/// `dir/name.ext` becomes `dir/name{suffix}.ext`; without an extension the
/// suffix is appended.
pub fn sibling_output_path(path: &Path, suffix: &str) -> PathBuf {
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy().into_owned(),
        None => return PathBuf::from(format!("{}{}", path.display(), suffix)),
    };
    let renamed = match name.rfind('.') {
        Some(dot) => format!("{}{}{}", &name[..dot], suffix, &name[dot..]),
        None => format!("{}{}", name, suffix),
    };
    path.with_file_name(renamed)
}

/// Writes `content` next to `path` through a temporary file that is only
/// moved into place once fully written.
pub fn write_output(path: &Path, content: &[u8]) -> Result<(), CoreError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp_file = tempfile::Builder::new()
        .prefix(".decomment_")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .map_err(|e| CoreError::io("Create temp file for", path, e))?;
    temp_file
        .write_all(content)
        .map_err(|e| CoreError::io("Write", path, e))?;
    temp_file
        .persist(path)
        .map_err(|persist_error| CoreError::io("Persist", path, persist_error.error))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote stripped output");
    Ok(())
}

/// Removes `path`, treating an already missing file as success.
pub fn remove_if_exists(path: &Path) -> Result<bool, CoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CoreError::io("Remove", path, e)),
    }
}
