//! Integration tests for kairo
//!
//! End-to-end file pipeline: load a workflow document from disk, apply the
//! migration, save it, and verify the output file.
mod common;
use common::*;
use kairo::prelude::*;
use std::fs;

#[test]
fn full_pipeline_round_trip() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let input_path = dir.path().join("agt_suporte_gynprog_v5_004.json");
    let output_path = dir.path().join("agt_suporte_gynprog_v5_005.json");

    let input = support_workflow();
    let input_node_count = input.nodes.len();
    let input_version_id = input.version_id.clone();
    save_workflow(&input_path, &input).expect("should write input fixture");

    let document = load_workflow(&input_path).expect("should load");
    let (document, report) = Migration::builder(document)
        .build()
        .apply()
        .expect("should migrate");
    save_workflow(&output_path, &document).expect("should save");

    // The output must reparse as a structurally valid document.
    let reloaded = load_workflow(&output_path).expect("output should reparse");
    let plan = RewirePlan::default();

    assert_eq!(reloaded.nodes.len(), input_node_count + 1);
    assert!(reloaded.node_by_name(&plan.merge_node_name).is_some());
    assert_eq!(reloaded.name, plan.new_workflow_name);
    assert_ne!(reloaded.version_id, input_version_id);

    for source in &plan.sources {
        assert_eq!(
            reloaded.connections[&source.name].main[0][0].node,
            plan.merge_node_name
        );
    }
    assert_eq!(
        reloaded.connections[&plan.merge_node_name].main[0][0].node,
        plan.downstream_node
    );

    assert!(!report.is_empty());
}

#[test]
fn output_file_top_level_keys_match_the_input() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let input_path = dir.path().join("in.json");
    let output_path = dir.path().join("out.json");

    save_workflow(&input_path, &support_workflow()).unwrap();

    let input_value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&input_path).unwrap()).unwrap();

    let document = load_workflow(&input_path).unwrap();
    let (document, _) = Migration::builder(document).build().apply().unwrap();
    save_workflow(&output_path, &document).unwrap();

    let output_value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();

    let input_keys: Vec<&String> = input_value.as_object().unwrap().keys().collect();
    let output_keys: Vec<&String> = output_value.as_object().unwrap().keys().collect();
    assert_eq!(input_keys, output_keys);
}

#[test]
fn output_is_pretty_printed_with_trailing_newline() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("wf.json");

    save_workflow(&path, &sources_only_workflow()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    assert!(text.contains("\n  \"nodes\""));
}

#[test]
fn output_file_preserves_non_ascii_payload() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let input_path = dir.path().join("in.json");
    let output_path = dir.path().join("out.json");

    save_workflow(&input_path, &support_workflow()).unwrap();
    let document = load_workflow(&input_path).unwrap();
    let (document, _) = Migration::builder(document).build().apply().unwrap();
    save_workflow(&output_path, &document).unwrap();

    let text = fs::read_to_string(&output_path).unwrap();
    // PT-BR text from the rewritten prompt template, stored literally.
    assert!(text.contains("Memória do cliente"));
    assert!(text.contains("Você é um agente de suporte"));
}

#[test]
fn default_paths_are_the_fixed_relative_filenames() {
    assert_eq!(DEFAULT_INPUT_PATH, "agt_suporte_gynprog_v5_004.json");
    assert_eq!(DEFAULT_OUTPUT_PATH, "agt_suporte_gynprog_v5_005.json");
}

#[test]
fn loading_a_missing_file_reports_the_path() {
    let err = load_workflow("/nonexistent/workflow.json").expect_err("should fail");
    match err {
        MigrationError::Read { path, .. } => assert!(path.contains("workflow.json")),
        other => panic!("expected Read error, got: {}", other),
    }
}

#[test]
fn loading_invalid_json_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = load_workflow(&path).expect_err("should fail");
    assert!(matches!(err, MigrationError::Parse { .. }));
}
