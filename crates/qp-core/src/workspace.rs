//! Export folder selection and required-file presence checks.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{CliError, Result};

pub const SPEC_FILE: &str = "spec.json";
pub const METADATA_FILE: &str = "metadata.json";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Files every export folder must contain, in check order.
pub const REQUIRED_FILES: [&str; 3] = [SPEC_FILE, METADATA_FILE, MANIFEST_FILE];

/// Presence of one required file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    pub name: &'static str,
    pub found: bool,
}

/// Result of checking a folder for the required files.
#[derive(Debug, Clone, Serialize)]
pub struct FolderCheck {
    pub folder: PathBuf,
    pub files: Vec<FileStatus>,
}

impl FolderCheck {
    pub fn all_found(&self) -> bool {
        self.files.iter().all(|f| f.found)
    }

    /// Names of the files that are not present.
    pub fn missing(&self) -> Vec<&'static str> {
        self.files
            .iter()
            .filter(|f| !f.found)
            .map(|f| f.name)
            .collect()
    }

    /// One-line status matching the checklist.
    pub fn status_line(&self) -> &'static str {
        if self.all_found() {
            "All required files found."
        } else {
            "Missing one or more required files."
        }
    }
}

/// A folder verified to hold a complete export.
#[derive(Debug, Clone)]
pub struct ExportFolder {
    root: PathBuf,
}

impl ExportFolder {
    /// Check which required files are present, without failing.
    pub fn check(path: &Path) -> FolderCheck {
        let files = REQUIRED_FILES
            .iter()
            .map(|&name| FileStatus {
                name,
                found: path.join(name).is_file(),
            })
            .collect();
        FolderCheck {
            folder: path.to_path_buf(),
            files,
        }
    }

    /// Open a folder, failing on the first missing required file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();
        if !root.is_dir() {
            return Err(CliError::NotADirectory(root));
        }

        let check = Self::check(&root);
        if let Some(name) = check.missing().first() {
            return Err(CliError::MissingFile {
                name: name.to_string(),
                path: root.join(name),
            });
        }

        debug!(folder = %root.display(), "Export folder contains all required files");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file inside the folder.
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
