use crate::grammar::{Grammar, LANGUAGES};
use std::path::Path;

/// Suffix of the file name starting at its last `.`, if any.
fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let dot = name.rfind('.')?;
    Some(name[dot..].to_string())
}

pub fn detect(path: impl AsRef<Path>) -> Option<&'static Grammar> {
    let ext = extension_of(path.as_ref())?;
    let found = LANGUAGES
        .iter()
        .find(|g| g.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)));
    match found {
        Some(g) => tracing::debug!(extension = %ext, language = g.name, "detected language"),
        None => tracing::debug!(extension = %ext, "no grammar for extension"),
    }
    found
}
