//! Printable HTML renderer for questionnaire exports.
//!
//! Turns the question sequence of an export's `spec.json` into a static
//! HTML document that can be printed and filled in by hand. Media
//! references are resolved through the export's `manifest.json`.
//!
//! # Pipeline
//!
//! - [`AssetResolver`]: asset filename → URL, built once per render
//! - [`ComponentRegistry`]: `class` tag → renderer, with an "unsupported"
//!   fallback for unknown tags
//! - [`ReportGenerator`]: one fragment per question, in order, wrapped in a
//!   fixed preamble and stylesheet
//!
//! Rendering is a pure function of the parsed documents and the title;
//! no file I/O happens here.
//!
//! # Example
//!
//! ```
//! use qp_report::{AssetManifest, ReportGenerator, SpecDocument};
//!
//! let spec = SpecDocument::from_json(
//!     r#"{"scenes":[{"scene":[{"children":[
//!         {"components":[{"class":"QuestionnaireTextEntry","question_text":"Name"}]}
//!     ]}]}]}"#,
//! ).unwrap();
//! let html = ReportGenerator::default_config()
//!     .generate("My Survey", &spec, &AssetManifest::default())
//!     .unwrap();
//! assert!(html.contains("<h1>My Survey</h1>"));
//! assert!(html.contains("<p>Name</p>"));
//! ```

pub mod assets;
pub mod components;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;

pub use assets::AssetResolver;
pub use components::{ComponentKind, ComponentRegistry, RenderFn};
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use generator::{RenderedDocument, ReportGenerator};
pub use model::{AssetManifest, AssetRecord, Component, QuestionEntity, SpecDocument};
