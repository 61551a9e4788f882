//! Free-entry components: each prompt is followed by one or more ruled
//! blank-fill slots.

use serde::Deserialize;

use super::{Prompt, BLANK_SLOT, SHORT_SLOT};
use crate::assets::AssetResolver;
use crate::model::Component;

const DEFAULT_COMMENT_ROWS: usize = 5;

/// Most ruled lines a comment box may ask for; a few pages' worth.
const MAX_COMMENT_ROWS: usize = 200;

const COMMENT_LINE: &str =
    "<br/><span style='display:block;border-bottom:1px solid #000;width:100%;'>&nbsp;</span>";

#[derive(Debug, Deserialize)]
struct CommentBoxFields {
    #[serde(default = "default_comment_rows")]
    rows: usize,
    #[serde(default = "super::default_question_text")]
    question_text: String,
}

fn default_comment_rows() -> usize {
    DEFAULT_COMMENT_ROWS
}

/// Prompt followed by `rows` full-width ruled lines.
pub fn render_comment_box(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    let fields: CommentBoxFields = component.decode()?;
    if fields.rows > MAX_COMMENT_ROWS {
        return Err(serde::de::Error::custom(format!(
            "rows {} exceeds the maximum of {MAX_COMMENT_ROWS}",
            fields.rows
        )));
    }
    Ok(format!(
        "<p>{}</p>{}",
        fields.question_text,
        COMMENT_LINE.repeat(fields.rows)
    ))
}

fn prompt_with_hint(component: &Component, hint: &str) -> serde_json::Result<String> {
    let prompt: Prompt = component.decode()?;
    Ok(format!("<p>{} ({hint})</p>{BLANK_SLOT}", prompt.question_text))
}

pub fn render_date(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    prompt_with_hint(component, "DD/MM/YY")
}

pub fn render_time(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    prompt_with_hint(component, "HH:MM")
}

/// Fixed `Email:` label; the component's fields are not used.
pub fn render_email(_: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    Ok(format!("<p>Email: {BLANK_SLOT}</p>"))
}

/// Text and number entry share the same layout.
pub fn render_text(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    let prompt: Prompt = component.decode()?;
    Ok(format!("<p>{}</p>{BLANK_SLOT}", prompt.question_text))
}

fn measurement(component: &Component, metric: &str, imperial: &str) -> serde_json::Result<String> {
    let prompt: Prompt = component.decode()?;
    Ok(format!(
        "<p>{}</p><p>Metric ({metric}): {SHORT_SLOT}</p><p>Imperial ({imperial}): {SHORT_SLOT}</p>",
        prompt.question_text
    ))
}

pub fn render_height(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    measurement(component, "cm", "ft/in")
}

pub fn render_weight(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    measurement(component, "kg", "st/lb")
}
