//! Output naming and writing.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{CliError, Result};

/// Trim a user-supplied title, rejecting one that is empty or whitespace.
pub fn validate_title(raw: &str) -> Result<&str> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CliError::EmptyTitle);
    }
    Ok(title)
}

/// File name for a document: `{prefix}{title}.html` with spaces and path
/// separators in the title replaced by underscores.
pub fn output_file_name(prefix: &str, title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!("{prefix}{stem}.html")
}

/// Destination inside `folder` for a document titled `title`.
pub fn output_path(folder: &Path, prefix: &str, title: &str) -> PathBuf {
    folder.join(output_file_name(prefix, title))
}

/// Write a fully rendered document to `path`.
pub fn write_document(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).map_err(|e| CliError::io(path, e))?;
    info!(path = %path.display(), bytes = html.len(), "Document written");
    Ok(())
}
