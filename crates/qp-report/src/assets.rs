//! Asset filename to URL lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{AssetManifest, AssetRecord};

/// Maps asset filenames from the manifest to the URLs they are served from.
///
/// Built once per render pass and never mutated afterwards. Lookups are
/// total: an unknown filename resolves to the empty string.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    urls: HashMap<String, String>,
}

impl AssetResolver {
    /// Build the lookup from a parsed manifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        Self::from_records(manifest.records())
    }

    /// Build the lookup from records in manifest order.
    ///
    /// When a filename appears more than once the last record wins.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AssetRecord>,
    {
        let mut urls = HashMap::new();
        for record in records {
            if let Some(previous) = urls.insert(record.filename.clone(), record.url.clone()) {
                debug!(
                    filename = %record.filename,
                    previous = %previous,
                    url = %record.url,
                    "Duplicate asset filename, keeping last"
                );
            }
        }
        Self { urls }
    }

    /// URL for `filename`, or `""` if the manifest does not list it.
    pub fn resolve(&self, filename: &str) -> &str {
        self.urls.get(filename).map(String::as_str).unwrap_or("")
    }

    /// Number of distinct filenames.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
