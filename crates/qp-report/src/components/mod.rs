//! Question component renderers.
//!
//! Each recognized `class` tag maps to a [`RenderFn`] in a
//! [`ComponentRegistry`]. Tags with no entry render a visible
//! "unsupported" placeholder so that every question keeps its slot in the
//! document.

pub mod choice;
pub mod content;
pub mod entry;

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{trace, warn};

use crate::assets::AssetResolver;
use crate::error::{ReportError, Result};
use crate::model::Component;

/// Renders the body of one question from its component and the asset lookup.
///
/// Field decoding errors are returned as-is; the registry attaches the
/// question index and kind.
pub type RenderFn = fn(&Component, &AssetResolver) -> serde_json::Result<String>;

/// Component kinds with a built-in renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Markdown,
    Image,
    Audio,
    CommentBoxEntry,
    Dropdown,
    MultipleChoice,
    Slider,
    DateEntry,
    TimeEntry,
    EmailEntry,
    TextEntry,
    NumberEntry,
    HeightEntry,
    WeightEntry,
    MultipleChoiceGrid,
    RatingScale,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 16] = [
        ComponentKind::Markdown,
        ComponentKind::Image,
        ComponentKind::Audio,
        ComponentKind::CommentBoxEntry,
        ComponentKind::Dropdown,
        ComponentKind::MultipleChoice,
        ComponentKind::Slider,
        ComponentKind::DateEntry,
        ComponentKind::TimeEntry,
        ComponentKind::EmailEntry,
        ComponentKind::TextEntry,
        ComponentKind::NumberEntry,
        ComponentKind::HeightEntry,
        ComponentKind::WeightEntry,
        ComponentKind::MultipleChoiceGrid,
        ComponentKind::RatingScale,
    ];

    /// The `class` tag used in the export.
    pub fn tag(&self) -> &'static str {
        match self {
            ComponentKind::Markdown => "QuestionnaireMarkdown",
            ComponentKind::Image => "QuestionnaireImage",
            ComponentKind::Audio => "QuestionnaireAudio",
            ComponentKind::CommentBoxEntry => "QuestionnaireCommentBoxEntry",
            ComponentKind::Dropdown => "QuestionnaireDropdown",
            ComponentKind::MultipleChoice => "QuestionnaireMultipleChoice",
            ComponentKind::Slider => "QuestionnaireSlider",
            ComponentKind::DateEntry => "QuestionnaireDateEntry",
            ComponentKind::TimeEntry => "QuestionnaireTimeEntry",
            ComponentKind::EmailEntry => "QuestionnaireEmailEntry",
            ComponentKind::TextEntry => "QuestionnaireTextEntry",
            ComponentKind::NumberEntry => "QuestionnaireNumberEntry",
            ComponentKind::HeightEntry => "QuestionnaireHeightEntry",
            ComponentKind::WeightEntry => "QuestionnaireWeightEntry",
            ComponentKind::MultipleChoiceGrid => "QuestionnaireMultipleChoiceGrid",
            ComponentKind::RatingScale => "QuestionnaireRatingScale",
        }
    }

    /// Look up a kind by its `class` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Built-in renderer for this kind.
    pub fn renderer(&self) -> RenderFn {
        match self {
            ComponentKind::Markdown => content::render_markdown,
            ComponentKind::Image => content::render_image,
            ComponentKind::Audio => content::render_audio,
            ComponentKind::Slider => content::render_slider,
            ComponentKind::CommentBoxEntry => entry::render_comment_box,
            ComponentKind::DateEntry => entry::render_date,
            ComponentKind::TimeEntry => entry::render_time,
            ComponentKind::EmailEntry => entry::render_email,
            ComponentKind::TextEntry | ComponentKind::NumberEntry => entry::render_text,
            ComponentKind::HeightEntry => entry::render_height,
            ComponentKind::WeightEntry => entry::render_weight,
            ComponentKind::Dropdown => choice::render_dropdown,
            ComponentKind::MultipleChoice => choice::render_multiple_choice,
            ComponentKind::MultipleChoiceGrid => choice::render_grid,
            ComponentKind::RatingScale => choice::render_rating_scale,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Dispatch table from `class` tag to renderer.
#[derive(Clone)]
pub struct ComponentRegistry {
    renderers: HashMap<String, RenderFn>,
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ComponentRegistry {
    /// A registry with no entries; every component renders as unsupported.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// A registry with every [`ComponentKind`] registered.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for kind in ComponentKind::ALL {
            registry.register(kind.tag(), kind.renderer());
        }
        registry
    }

    /// Add or replace the renderer for `tag`, returning the previous one.
    pub fn register(&mut self, tag: impl Into<String>, render: RenderFn) -> Option<RenderFn> {
        self.renderers.insert(tag.into(), render)
    }

    /// Whether `tag` has a renderer.
    pub fn supports(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Render the fragment for the question at `index`.
    ///
    /// Always yields exactly one `<div class='question'>` fragment on
    /// success. Unknown tags produce the unsupported placeholder.
    pub fn render(
        &self,
        index: usize,
        component: &Component,
        resolver: &AssetResolver,
    ) -> Result<String> {
        let body = match self.renderers.get(&component.kind) {
            Some(render) => {
                trace!(index, kind = %component.kind, "Rendering component");
                render(component, resolver)
                    .map_err(|e| ReportError::component(index, &component.kind, e))?
            }
            None => {
                warn!(index, kind = %component.kind, "Unsupported component kind");
                render_unsupported(&component.kind)
            }
        };
        Ok(format!("<div class='question'>{body}</div>"))
    }
}

/// Placeholder body for a kind with no renderer.
pub fn render_unsupported(kind: &str) -> String {
    format!("<p><i>Unsupported question type: {kind}</i></p>")
}

// ============================================================================
// Shared field records
// ============================================================================

/// Label shown when a component carries no `question_text`.
pub const DEFAULT_QUESTION_TEXT: &str = "Question";

pub(crate) fn default_question_text() -> String {
    DEFAULT_QUESTION_TEXT.to_string()
}

/// Components whose only field is the prompt.
#[derive(Debug, Deserialize)]
pub(crate) struct Prompt {
    #[serde(default = "default_question_text")]
    pub question_text: String,
}

/// An option, row, or column entry.
#[derive(Debug, Deserialize)]
pub(crate) struct Labeled {
    pub label: String,
}

/// Full-width ruled line used for free text.
pub(crate) const BLANK_SLOT: &str =
    "<span style='display:inline-block;border-bottom:1px solid #000;width:300px;'>&nbsp;</span>";

/// Short ruled line used for measurements.
pub(crate) const SHORT_SLOT: &str =
    "<span style='border-bottom:1px solid #000;'>&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;</span>";

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AssetResolver {
        AssetResolver::default()
    }

    #[test]
    fn every_kind_round_trips_its_tag() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ComponentKind::from_tag("Markdown"), None);
    }

    #[test]
    fn builtin_registers_all_kinds() {
        let registry = ComponentRegistry::builtin();
        assert_eq!(registry.tags().len(), ComponentKind::ALL.len());
        assert!(registry.supports("QuestionnaireRatingScale"));
        assert!(!registry.supports("NotARealKind"));
    }

    #[test]
    fn unknown_kind_renders_placeholder() {
        let registry = ComponentRegistry::builtin();
        let html = registry
            .render(0, &Component::new("NotARealKind"), &resolver())
            .unwrap();
        assert_eq!(
            html,
            "<div class='question'><p><i>Unsupported question type: NotARealKind</i></p></div>"
        );
    }

    #[test]
    fn empty_registry_renders_everything_as_unsupported() {
        let registry = ComponentRegistry::empty();
        let html = registry
            .render(0, &Component::new("QuestionnaireSlider"), &resolver())
            .unwrap();
        assert!(html.contains("Unsupported question type: QuestionnaireSlider"));
    }

    #[test]
    fn register_overrides_builtin() {
        fn shout(_: &Component, _: &AssetResolver) -> serde_json::Result<String> {
            Ok("<p>EMAIL</p>".to_string())
        }
        let mut registry = ComponentRegistry::builtin();
        assert!(registry.register("QuestionnaireEmailEntry", shout).is_some());
        let html = registry
            .render(0, &Component::new("QuestionnaireEmailEntry"), &resolver())
            .unwrap();
        assert_eq!(html, "<div class='question'><p>EMAIL</p></div>");
    }

    #[test]
    fn missing_required_field_names_question() {
        let registry = ComponentRegistry::builtin();
        let err = registry
            .render(4, &Component::new("QuestionnaireMarkdown"), &resolver())
            .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("question 4 (QuestionnaireMarkdown)"), "{message}");
        assert!(message.contains("text"), "{message}");
    }

    #[test]
    fn wrong_field_type_is_component_error() {
        let registry = ComponentRegistry::builtin();
        let component = Component::new("QuestionnaireCommentBoxEntry").with_field("rows", "five");
        let err = registry.render(2, &component, &resolver()).unwrap_err();
        assert!(matches!(err, ReportError::Component { index: 2, .. }));
    }
}
