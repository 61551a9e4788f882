//! Typed views of the questionnaire export documents.
//!
//! `spec.json` nests the ordered question list at
//! `scenes[0].scene[0].children`; each child carries a `components` list of
//! which only the first entry is rendered.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ReportError, Result};

/// Top level of `spec.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecDocument {
    #[serde(default)]
    pub scenes: Vec<SceneGroup>,
}

/// One entry of `scenes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneGroup {
    #[serde(default)]
    pub scene: Vec<SceneNode>,
}

/// Root node of a scene; its children are the question entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneNode {
    pub children: Vec<QuestionEntity>,
}

impl SpecDocument {
    /// Parse `spec.json` text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The ordered question sequence.
    pub fn questions(&self) -> Result<&[QuestionEntity]> {
        let group = self
            .scenes
            .first()
            .ok_or_else(|| ReportError::Structure("spec has no scenes[0]".into()))?;
        let node = group
            .scene
            .first()
            .ok_or_else(|| ReportError::Structure("spec has no scenes[0].scene[0]".into()))?;
        Ok(&node.children)
    }
}

/// A question slot. Wraps the component that describes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionEntity {
    #[serde(default)]
    pub components: Vec<Component>,
}

impl QuestionEntity {
    /// Wrap a single component.
    pub fn new(component: Component) -> Self {
        Self {
            components: vec![component],
        }
    }

    /// The component that is rendered. Extra components are ignored.
    pub fn primary(&self, index: usize) -> Result<&Component> {
        self.components.first().ok_or_else(|| {
            ReportError::Structure(format!("question {index} has no components[0]"))
        })
    }
}

/// A typed question payload: the `class` tag plus kind-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Kind tag, e.g. `QuestionnaireImage`.
    #[serde(rename = "class")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Component {
    /// Create a component with no fields.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }

    /// Add a field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Decode the field bag into a kind-specific record.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&Value::Object(self.fields.clone()))
    }
}

/// Top level of `manifest.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub assets: Option<Vec<AssetRecord>>,
}

impl AssetManifest {
    /// Parse `manifest.json` text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a manifest from records.
    pub fn from_records(records: Vec<AssetRecord>) -> Self {
        Self {
            assets: Some(records),
        }
    }

    /// Asset records in manifest order. Absent or null `assets` is empty.
    pub fn records(&self) -> &[AssetRecord] {
        self.assets.as_deref().unwrap_or_default()
    }
}

/// One asset entry: a filename and the URL it is served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub filename: String,
    pub url: String,
}

impl AssetRecord {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
        }
    }
}
