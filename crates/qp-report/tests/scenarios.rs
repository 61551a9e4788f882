//! End-to-end render scenarios over realistic export documents.

use proptest::prelude::*;
use qp_report::{
    AssetManifest, AssetRecord, AssetResolver, Component, QuestionEntity, ReportConfig,
    ReportError, ReportGenerator, SpecDocument,
};
use regex::Regex;
use serde_json::{json, Value};

// ============================================================================
// Helpers
// ============================================================================

fn spec_with(components: Vec<Value>) -> SpecDocument {
    let children: Vec<Value> = components
        .into_iter()
        .map(|c| json!({ "components": [c] }))
        .collect();
    serde_json::from_value(json!({
        "scenes": [{ "scene": [{ "children": children }] }]
    }))
    .expect("spec document")
}

fn manifest() -> AssetManifest {
    AssetManifest::from_records(vec![AssetRecord::new("a.png", "http://x/a.png")])
}

fn render(components: Vec<Value>) -> String {
    ReportGenerator::default_config()
        .generate("Scenario", &spec_with(components), &manifest())
        .expect("render")
}

fn question_count(html: &str) -> usize {
    html.matches("<div class='question'>").count()
}

// ============================================================================
// Asset resolution
// ============================================================================

mod assets {
    use super::*;

    #[test]
    fn image_source_comes_from_manifest() {
        let html = render(vec![json!({"class": "QuestionnaireImage", "image": "a.png"})]);
        assert!(html.contains("<img src='http://x/a.png'"));
    }

    #[test]
    fn missing_image_renders_empty_source() {
        let html = render(vec![json!({"class": "QuestionnaireImage", "image": "missing.png"})]);
        assert!(html.contains("<img src=''"));
    }

    #[test]
    fn manifest_without_assets_still_renders() {
        let html = ReportGenerator::default_config()
            .generate(
                "T",
                &spec_with(vec![json!({"class": "QuestionnaireAudio", "audioName": "a.mp3"})]),
                &AssetManifest::default(),
            )
            .unwrap();
        assert!(html.contains("<a href='' target='_blank'>a.mp3</a>"));
    }
}

// ============================================================================
// Layout
// ============================================================================

mod layout {
    use super::*;

    #[test]
    fn grid_two_rows_three_columns() {
        let html = render(vec![json!({
            "class": "QuestionnaireMultipleChoiceGrid",
            "question_text": "Rate each",
            "rows": [{"label": "Tea"}, {"label": "Coffee"}],
            "columns": [{"label": "Low"}, {"label": "Mid"}, {"label": "High"}]
        })]);

        let table_re = Regex::new(r"<table>(.*)</table>").unwrap();
        let table = &table_re.captures(&html).expect("table")[1];
        let row_re = Regex::new(r"<tr>(.*?)</tr>").unwrap();
        let rows: Vec<&str> = row_re
            .captures_iter(table)
            .map(|c| c.get(1).map_or("", |m| m.as_str()))
            .collect();

        assert_eq!(rows.len(), 3, "header row plus two body rows");
        for row in &rows {
            let cells = row.matches("<th>").count() + row.matches("<td>").count();
            assert_eq!(cells, 4, "row {row:?}");
        }
        assert_eq!(rows[0], "<th></th><th>Low</th><th>Mid</th><th>High</th>");
        assert!(rows[1].starts_with("<td>Tea</td>"));
        assert_eq!(rows[2].matches("☐").count(), 3);
    }

    #[test]
    fn every_builtin_kind_renders_one_fragment() {
        let components = vec![
            json!({"class": "QuestionnaireMarkdown", "text": "Welcome"}),
            json!({"class": "QuestionnaireImage", "image": "a.png"}),
            json!({"class": "QuestionnaireAudio", "audioName": "a.mp3"}),
            json!({"class": "QuestionnaireCommentBoxEntry"}),
            json!({"class": "QuestionnaireDropdown", "question_keys": [{"options": [{"label": "A"}]}]}),
            json!({"class": "QuestionnaireMultipleChoice", "options": [{"label": "Yes"}]}),
            json!({"class": "QuestionnaireSlider"}),
            json!({"class": "QuestionnaireDateEntry"}),
            json!({"class": "QuestionnaireTimeEntry"}),
            json!({"class": "QuestionnaireEmailEntry"}),
            json!({"class": "QuestionnaireTextEntry"}),
            json!({"class": "QuestionnaireNumberEntry"}),
            json!({"class": "QuestionnaireHeightEntry"}),
            json!({"class": "QuestionnaireWeightEntry"}),
            json!({"class": "QuestionnaireMultipleChoiceGrid", "rows": [], "columns": []}),
            json!({"class": "QuestionnaireRatingScale", "options": [1, 2]}),
        ];
        let html = render(components);
        assert_eq!(question_count(&html), 16);
        assert!(!html.contains("Unsupported question type"));
    }

    #[test]
    fn unknown_kind_keeps_its_slot() {
        let html = render(vec![
            json!({"class": "QuestionnaireSlider"}),
            json!({"class": "NotARealKind"}),
            json!({"class": "QuestionnaireEmailEntry"}),
        ]);
        assert_eq!(question_count(&html), 3);
        let unsupported = html.find("Unsupported question type: NotARealKind").unwrap();
        assert!(html.find("Min").unwrap() < unsupported);
        assert!(unsupported < html.find("Email:").unwrap());
    }

    #[test]
    fn empty_question_list_has_only_frame() {
        let html = render(vec![]);
        assert_eq!(question_count(&html), 0);
        assert!(html.contains("<h1>Scenario</h1><hr>\n</body></html>"));
    }
}

// ============================================================================
// Failure policy
// ============================================================================

mod failures {
    use super::*;

    #[test]
    fn malformed_question_fails_whole_render() {
        let err = ReportGenerator::default_config()
            .generate(
                "T",
                &spec_with(vec![
                    json!({"class": "QuestionnaireSlider"}),
                    json!({"class": "QuestionnaireImage"}),
                ]),
                &manifest(),
            )
            .unwrap_err();
        match err {
            ReportError::Component { index, kind, .. } => {
                assert_eq!(index, 1);
                assert_eq!(kind, "QuestionnaireImage");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn oversized_comment_box_is_component_error() {
        let err = ReportGenerator::default_config()
            .generate(
                "T",
                &spec_with(vec![json!({
                    "class": "QuestionnaireCommentBoxEntry",
                    "rows": 1u64 << 60
                })]),
                &manifest(),
            )
            .unwrap_err();
        assert!(
            err.to_string()
                .starts_with("question 0 (QuestionnaireCommentBoxEntry): rows"),
            "{err}"
        );
    }

    #[test]
    fn dropdown_with_empty_keys_is_component_error() {
        let err = ReportGenerator::default_config()
            .generate(
                "T",
                &spec_with(vec![
                    json!({"class": "QuestionnaireSlider"}),
                    json!({"class": "QuestionnaireDropdown", "question_keys": []}),
                ]),
                &manifest(),
            )
            .unwrap_err();
        assert!(matches!(err, ReportError::Component { index: 1, .. }), "{err}");
    }

    #[test]
    fn spec_without_scenes_is_structure_error() {
        let err = ReportGenerator::default_config()
            .generate_from_json("T", r#"{"scenes": []}"#, "{}")
            .unwrap_err();
        assert!(matches!(err, ReportError::Structure(_)));
    }

    #[test]
    fn invalid_json_is_json_error() {
        let err = ReportGenerator::default_config()
            .generate_from_json("T", "{not json", "{}")
            .unwrap_err();
        assert!(matches!(err, ReportError::JsonError(_)));
    }
}

// ============================================================================
// Determinism and invariants
// ============================================================================

#[test]
fn rendering_is_idempotent() {
    let components = vec![
        json!({"class": "QuestionnaireMarkdown", "text": "Line 1\nLine 2"}),
        json!({"class": "QuestionnaireImage", "image": "a.png"}),
        json!({"class": "QuestionnaireRatingScale", "options": [1, 2, 3]}),
    ];
    assert_eq!(render(components.clone()), render(components));
}

#[test]
fn config_extra_css_is_embedded() {
    let generator = ReportGenerator::new(ReportConfig::new().with_extra_css("h1 { font-size: 14pt; }"));
    let html = generator
        .generate("T", &spec_with(vec![]), &manifest())
        .unwrap();
    assert!(html.contains("h1 { font-size: 14pt; }"));
}

const KINDS: &[&str] = &[
    "QuestionnaireSlider",
    "QuestionnaireEmailEntry",
    "QuestionnaireTextEntry",
    "QuestionnaireCommentBoxEntry",
    "QuestionnaireRatingScale",
    "SomethingNew",
];

proptest! {
    #[test]
    fn fragment_count_equals_entity_count(picks in proptest::collection::vec(0..KINDS.len(), 0..40)) {
        let questions: Vec<QuestionEntity> = picks
            .iter()
            .map(|&i| QuestionEntity::new(Component::new(KINDS[i])))
            .collect();
        let doc = ReportGenerator::default_config()
            .assemble("T", &questions, &AssetResolver::default())
            .unwrap();
        prop_assert_eq!(doc.fragment_count(), questions.len());
        prop_assert_eq!(question_count(&doc.to_html()), questions.len());
    }
}
