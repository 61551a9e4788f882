//! Choice components. Interactive selectors become printable lists,
//! radio markers, tables of checkboxes, or rows of rating glyphs.

use serde::Deserialize;
use serde_json::Value;

use super::{Labeled, Prompt};
use crate::assets::AssetResolver;
use crate::model::Component;

/// Empty box printed in each grid cell.
const GRID_MARKER: &str = "☐";

/// Neutral glyph printed once per rating option.
const RATING_MARKER: &str = "⚪";

#[derive(Debug, Deserialize)]
struct DropdownFields {
    // Absent means no options; present but empty is malformed.
    #[serde(default)]
    question_keys: Option<Vec<QuestionKey>>,
}

#[derive(Debug, Deserialize)]
struct QuestionKey {
    #[serde(default)]
    options: Vec<Labeled>,
}

#[derive(Debug, Deserialize)]
struct OptionsFields {
    #[serde(default)]
    options: Vec<Labeled>,
}

#[derive(Debug, Deserialize)]
struct GridFields {
    #[serde(default)]
    rows: Vec<Labeled>,
    #[serde(default)]
    columns: Vec<Labeled>,
}

#[derive(Debug, Deserialize)]
struct RatingFields {
    // Only the count is printed, so entries are not decoded.
    #[serde(default)]
    options: Vec<Value>,
}

/// Bullet list of `question_keys[0].options`, each with a tick slot.
pub fn render_dropdown(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    let prompt: Prompt = component.decode()?;
    let fields: DropdownFields = component.decode()?;

    let options = match &fields.question_keys {
        None => &[][..],
        Some(keys) => match keys.first() {
            Some(key) => key.options.as_slice(),
            None => return Err(serde::de::Error::custom("question_keys is empty")),
        },
    };

    let mut html = format!("<p>{} (please tick one)</p><ul>", prompt.question_text);
    for option in options {
        html.push_str(&format!("<li>{} ________</li>", option.label));
    }
    html.push_str("</ul>");
    Ok(html)
}

/// One radio marker and label per option.
pub fn render_multiple_choice(
    component: &Component,
    _: &AssetResolver,
) -> serde_json::Result<String> {
    let prompt: Prompt = component.decode()?;
    let fields: OptionsFields = component.decode()?;

    let mut html = format!("<p>{}</p>", prompt.question_text);
    for option in &fields.options {
        html.push_str(&format!(
            "<label><input type='radio'> {}</label><br/>",
            option.label
        ));
    }
    Ok(html)
}

/// Table with a blank corner, one header per column, and one row per
/// `rows` entry holding a marker per column.
pub fn render_grid(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    let prompt: Prompt = component.decode()?;
    let grid: GridFields = component.decode()?;

    let mut html = format!("<p>{}</p><table>", prompt.question_text);

    html.push_str("<tr><th></th>");
    for column in &grid.columns {
        html.push_str(&format!("<th>{}</th>", column.label));
    }
    html.push_str("</tr>");

    let cells = format!("<td>{GRID_MARKER}</td>").repeat(grid.columns.len());
    for row in &grid.rows {
        html.push_str(&format!("<tr><td>{}</td>{cells}</tr>", row.label));
    }

    html.push_str("</table>");
    Ok(html)
}

/// Prompt followed by one marker per option; labels are not shown.
pub fn render_rating_scale(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    let prompt: Prompt = component.decode()?;
    let fields: RatingFields = component.decode()?;

    let markers = vec![RATING_MARKER; fields.options.len()].join(" ");
    Ok(format!("<p>{}</p>{markers}", prompt.question_text))
}
