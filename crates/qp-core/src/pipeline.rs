//! One render pass: folder → loaded export → HTML → output file.

use std::path::PathBuf;

use qp_report::{ReportConfig, ReportGenerator};
use serde::Serialize;
use tracing::{info, info_span};

use crate::error::Result;
use crate::export::ExportBundle;
use crate::workspace::ExportFolder;
use crate::writer;

/// Inputs of a render pass.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub folder: PathBuf,
    /// Title from the command line; the config title fills in when absent.
    pub title: Option<String>,
    /// Destination override; defaults to a file in `folder`.
    pub output: Option<PathBuf>,
    pub config: ReportConfig,
}

/// What a completed render pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOutcome {
    pub output: PathBuf,
    pub title: String,
    pub questions: usize,
    pub bytes: usize,
}

/// Run a render pass.
///
/// The title and folder are checked and all input is loaded and rendered
/// before anything is written, so a failed pass leaves no output file.
pub fn run(request: &RenderRequest, run_id: &str) -> Result<RenderOutcome> {
    let _span = info_span!("render", run_id = %run_id).entered();

    request.config.validate()?;
    let generator = ReportGenerator::new(request.config.clone());
    let requested = request.title.as_deref().unwrap_or_default();
    let title = writer::validate_title(generator.effective_title(requested))?;
    if requested.trim().is_empty() {
        info!(title, "Using title from configuration");
    }

    let folder = ExportFolder::open(&request.folder)?;
    let bundle = ExportBundle::load(&folder)?;
    let html = generator.generate(title, &bundle.spec, &bundle.manifest)?;

    let output = match &request.output {
        Some(path) => path.clone(),
        None => writer::output_path(folder.root(), &request.config.output_prefix, title),
    };
    writer::write_document(&output, &html)?;

    let questions = bundle.spec.questions()?.len();
    info!(output = %output.display(), questions, "Render pass complete");

    Ok(RenderOutcome {
        output,
        title: title.to_string(),
        questions,
        bytes: html.len(),
    })
}
