//! Loading the three export documents from a folder.

use std::path::Path;

use qp_report::{AssetManifest, SpecDocument};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CliError, Result};
use crate::workspace::{ExportFolder, MANIFEST_FILE, METADATA_FILE, SPEC_FILE};

/// The parsed contents of an export folder.
///
/// Every file is read completely and closed before rendering starts.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub spec: SpecDocument,
    /// Not used by the renderer; loaded so that a corrupt file is reported.
    pub metadata: serde_json::Value,
    pub manifest: AssetManifest,
}

impl ExportBundle {
    /// Read and parse `spec.json`, `metadata.json`, and `manifest.json`.
    pub fn load(folder: &ExportFolder) -> Result<Self> {
        let spec = read_json(&folder.file(SPEC_FILE), SPEC_FILE)?;
        let metadata = read_json(&folder.file(METADATA_FILE), METADATA_FILE)?;
        let manifest: AssetManifest = read_json(&folder.file(MANIFEST_FILE), MANIFEST_FILE)?;

        debug!(
            folder = %folder.root().display(),
            assets = manifest.records().len(),
            "Export loaded"
        );
        Ok(Self {
            spec,
            metadata,
            manifest,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path, name: &str) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::MissingFile {
            name: name.to_string(),
            path: path.to_path_buf(),
        },
        _ => CliError::io(path, e),
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        file: name.to_string(),
        source,
    })
}
