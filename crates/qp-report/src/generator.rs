//! Document assembly.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::assets::AssetResolver;
use crate::components::ComponentRegistry;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::model::{AssetManifest, QuestionEntity, SpecDocument};

/// Built-in stylesheet, one rule per line.
const STYLESHEET: &[&str] = &[
    "body { font-family: sans-serif; }",
    ".question { margin-bottom: 2em; }",
    "table { border-collapse: collapse; margin-top: 1em; }",
    "th, td { border: 1px solid #000; padding: 5px; text-align: center; }",
    "td:first-child { max-width: 200px; word-wrap: break-word; white-space: normal; text-align: left; }",
    "@media print { .question { page-break-inside: avoid; } }",
];

/// A rendered questionnaire: the title and one HTML fragment per question,
/// in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub title: String,
    pub lang: String,
    #[serde(default)]
    pub extra_css: Option<String>,
    pub fragments: Vec<String>,
}

impl RenderedDocument {
    /// Number of question fragments.
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Serialize to a complete HTML document.
    pub fn to_html(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.fragments.len() + 16);
        lines.push("<!DOCTYPE html>".to_string());
        lines.push(format!(
            "<html lang='{}'><head><meta charset='UTF-8'><title>{}</title><style>",
            self.lang, self.title
        ));
        lines.extend(STYLESHEET.iter().map(|rule| rule.to_string()));
        if let Some(css) = &self.extra_css {
            lines.push(css.clone());
        }
        lines.push("</style></head><body>".to_string());
        lines.push(format!("<h1>{}</h1><hr>", self.title));
        lines.extend(self.fragments.iter().cloned());
        lines.push("</body></html>".to_string());
        lines.join("\n")
    }
}

/// Assembles printable documents from question sequences.
pub struct ReportGenerator {
    config: ReportConfig,
    registry: ComponentRegistry,
}

impl ReportGenerator {
    /// Create a new generator with configuration and the built-in renderers.
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            registry: ComponentRegistry::builtin(),
        }
    }

    /// Create a generator with default configuration.
    pub fn default_config() -> Self {
        Self::new(ReportConfig::default())
    }

    /// Replace the component registry.
    pub fn with_registry(mut self, registry: ComponentRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Get the component registry.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Title used for the document: `title` when it is not blank, else the
    /// configured title.
    pub fn effective_title<'a>(&'a self, title: &'a str) -> &'a str {
        let title = title.trim();
        if !title.is_empty() {
            return title;
        }
        self.config.title.as_deref().map(str::trim).unwrap_or(title)
    }

    /// Render one fragment per question, in order.
    ///
    /// Fails on the first malformed question rather than skipping it.
    pub fn assemble(
        &self,
        title: &str,
        questions: &[QuestionEntity],
        resolver: &AssetResolver,
    ) -> Result<RenderedDocument> {
        let mut fragments = Vec::with_capacity(questions.len());
        for (index, entity) in questions.iter().enumerate() {
            let component = entity.primary(index)?;
            if entity.components.len() > 1 {
                debug!(
                    index,
                    extra = entity.components.len() - 1,
                    "Ignoring components after the first"
                );
            }
            fragments.push(self.registry.render(index, component, resolver)?);
        }

        Ok(RenderedDocument {
            title: self.effective_title(title).to_string(),
            lang: self.config.lang.clone(),
            extra_css: self.config.extra_css.clone(),
            fragments,
        })
    }

    /// Render a parsed export to HTML text.
    pub fn generate(
        &self,
        title: &str,
        spec: &SpecDocument,
        manifest: &AssetManifest,
    ) -> Result<String> {
        self.config.validate()?;
        let resolver = AssetResolver::from_manifest(manifest);
        debug!(assets = resolver.len(), "Asset lookup built");

        let document = self.assemble(title, spec.questions()?, &resolver)?;
        let html = self.render_html(&document);

        info!(
            questions = document.fragment_count(),
            bytes = html.len(),
            title = %document.title,
            "Printable document generated"
        );
        Ok(html)
    }

    /// Generate from the raw text of `spec.json` and `manifest.json`.
    pub fn generate_from_json(&self, title: &str, spec: &str, manifest: &str) -> Result<String> {
        let spec = SpecDocument::from_json(spec)?;
        let manifest = AssetManifest::from_json(manifest)?;
        self.generate(title, &spec, &manifest)
    }

    fn render_html(&self, document: &RenderedDocument) -> String {
        let html = document.to_html();
        if !self.config.minify {
            return html;
        }
        let cfg = minify_html::Cfg {
            minify_css: true,
            keep_closing_tags: true,
            keep_html_and_head_opening_tags: true,
            ..Default::default()
        };
        String::from_utf8(minify_html::minify(html.as_bytes(), &cfg)).unwrap_or(html)
    }
}
