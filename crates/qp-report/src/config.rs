//! Render configuration types.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Complete render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Title used when the caller supplies none.
    #[serde(default)]
    pub title: Option<String>,
    /// Value of the `lang` attribute on the root element.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Extra CSS appended after the built-in stylesheet.
    #[serde(default)]
    pub extra_css: Option<String>,
    /// Minify the generated HTML.
    #[serde(default)]
    pub minify: bool,
    /// Prefix for the output file name.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
}

fn default_schema_version() -> String {
    "1.0.0".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_output_prefix() -> String {
    "printable_".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            title: None,
            lang: default_lang(),
            extra_css: None,
            minify: false,
            output_prefix: default_output_prefix(),
        }
    }
}

impl ReportConfig {
    /// Create a new render configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document language.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Append extra CSS to the stylesheet.
    pub fn with_extra_css(mut self, css: impl Into<String>) -> Self {
        self.extra_css = Some(css.into());
        self
    }

    /// Enable HTML minification.
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Set the output file prefix.
    pub fn with_output_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.output_prefix = prefix.into();
        self
    }

    /// Check values that would produce a broken document or path.
    pub fn validate(&self) -> Result<()> {
        if self.lang.trim().is_empty() {
            return Err(ReportError::InvalidConfig("lang must not be empty".into()));
        }
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(ReportError::InvalidConfig("title must not be blank".into()));
        }
        if self.output_prefix.contains(['/', '\\']) {
            return Err(ReportError::InvalidConfig(format!(
                "output_prefix must not contain path separators: {:?}",
                self.output_prefix
            )));
        }
        Ok(())
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
