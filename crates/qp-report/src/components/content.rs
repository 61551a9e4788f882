//! Content components: markdown, media, and the slider.

use serde::Deserialize;

use crate::assets::AssetResolver;
use crate::model::Component;

#[derive(Debug, Deserialize)]
struct MarkdownFields {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ImageFields {
    image: String,
}

#[derive(Debug, Deserialize)]
struct AudioFields {
    #[serde(rename = "audioName")]
    audio_name: String,
}

/// Text block. Newlines become `<br/>`; content is inserted verbatim.
pub fn render_markdown(component: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    let fields: MarkdownFields = component.decode()?;
    Ok(format!("<div>{}</div>", fields.text.replace('\n', "<br/>")))
}

/// Image tag pointing at the manifest URL, empty when unresolved.
pub fn render_image(component: &Component, assets: &AssetResolver) -> serde_json::Result<String> {
    let fields: ImageFields = component.decode()?;
    let src = assets.resolve(&fields.image);
    Ok(format!(
        "<div><img src='{src}' alt='Image' style='max-width:100%;'/></div>"
    ))
}

/// Labeled link to the audio file.
pub fn render_audio(component: &Component, assets: &AssetResolver) -> serde_json::Result<String> {
    let fields: AudioFields = component.decode()?;
    let src = assets.resolve(&fields.audio_name);
    Ok(format!(
        "<p><b>Audio Prompt:</b> <a href='{src}' target='_blank'>{}</a></p>",
        fields.audio_name
    ))
}

/// Fixed instruction, a line to mark, and Min/Max end labels.
pub fn render_slider(_: &Component, _: &AssetResolver) -> serde_json::Result<String> {
    Ok(concat!(
        "<div style='margin-top:1em;margin-bottom:1em;'>",
        "<p>Please indicate your response by drawing a mark on the line below:</p>",
        "<div style='width:50%;border-bottom:2px solid #000;height:1.5em;margin:auto;'></div>",
        "<div style='width:50%;display:flex;justify-content:space-between;margin:auto;'>",
        "<span>Min</span><span>Max</span></div></div>"
    )
    .to_string())
}
