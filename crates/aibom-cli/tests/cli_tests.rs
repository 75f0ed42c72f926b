use aibom_cli::commands::{self, load_document};
use aibom_cli::{OutputFormat, EXIT_INVALID, EXIT_POLICY_FAILED};
use aibom_model::{Aibom, Dependency};
use aibom_test_utils::{sample_agent_system, SAMPLE_POLICY_JSON};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_doc(dir: &TempDir, name: &str, doc: &Aibom) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, doc.to_json_pretty().unwrap()).unwrap();
    path
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_clean_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(&dir, "bom.json", &sample_agent_system());

    let out = commands::validate(&file, OutputFormat::Text, false).unwrap();

    assert_eq!(out.exit_code, 0);
    assert_eq!(out.output, "✓ AIBOM is valid");
}

#[test]
fn validate_dangling_dependency_exits_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = sample_agent_system();
    doc.dependencies
        .push(Dependency::new("ghost", doc.components[0].id.clone()));
    let file = write_doc(&dir, "bom.json", &doc);

    let out = commands::validate(&file, OutputFormat::Json, false).unwrap();

    assert_eq!(out.exit_code, EXIT_INVALID);
    let value: serde_json::Value = serde_json::from_str(&out.output).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(
        value["errors"][0],
        "Dependency references unknown component: ghost"
    );
}

#[test]
fn strict_fails_on_warnings_only() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(
        dir.path(),
        "bom.json",
        r#"{
            "id": "aibom-strict000001",
            "name": "Strict",
            "components": [ { "id": "m1", "name": "anon", "type": "model" } ]
        }"#,
    );

    let lenient = commands::validate(&file, OutputFormat::Text, false).unwrap();
    let strict = commands::validate(&file, OutputFormat::Text, true).unwrap();

    assert_eq!(lenient.exit_code, 0);
    assert_eq!(strict.exit_code, EXIT_INVALID);
    assert!(strict.output.contains("Model 'anon' missing provider"));
}

#[test]
fn policy_pass_with_low_finding() {
    let dir = tempfile::tempdir().unwrap();
    let bom = write_doc(&dir, "bom.json", &sample_agent_system());
    let policy = write_file(dir.path(), "policy.json", SAMPLE_POLICY_JSON);

    let out = commands::policy(&bom, &policy, OutputFormat::Text).unwrap();

    assert_eq!(out.exit_code, 0);
    assert_eq!(
        out.output,
        "Policy: production\n  ✗ [LOW] AIBOM-006: 2 tools found, max 1 allowed\n  Summary: 0 critical, 0 high, 0 medium, 1 low"
    );
}

#[test]
fn policy_failure_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let bom = write_doc(&dir, "bom.json", &sample_agent_system());
    let policy = write_file(
        dir.path(),
        "policy.yaml",
        "name: no-sql\nrules:\n  - type: deny-tool\n    params:\n      tool_name: exec_sql\n      reason: raw queries\n",
    );

    let out = commands::policy(&bom, &policy, OutputFormat::Json).unwrap();

    assert_eq!(out.exit_code, EXIT_POLICY_FAILED);
    let value: serde_json::Value = serde_json::from_str(&out.output).unwrap();
    assert_eq!(value[0]["high_count"], 1);
    assert_eq!(value[0]["violations"][0]["component"], "exec_sql");
}

#[test]
fn policy_with_unknown_rule_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let bom = write_doc(&dir, "bom.json", &sample_agent_system());
    let policy = write_file(
        dir.path(),
        "policy.json",
        r#"{ "name": "x", "rules": [ { "type": "nonsense" } ] }"#,
    );

    let err = commands::policy(&bom, &policy, OutputFormat::Text).unwrap_err();

    assert!(format!("{err:#}").contains("unknown rule type: nonsense"));
}

#[test]
fn generate_from_yaml_inventory() {
    let dir = tempfile::tempdir().unwrap();
    let inventory = write_file(
        dir.path(),
        "inventory.yaml",
        "name: Gateway\norganization: Acme\nmodels:\n  - name: gpt-4\n    provider: OpenAI\n    version: '2024-01'\ntools:\n  - name: search\n",
    );
    let output = dir.path().join("out.json");

    let out = commands::generate(&inventory, Some(&output)).unwrap();
    let doc = load_document(&output).unwrap();

    assert_eq!(out.exit_code, 0);
    assert!(out.output.contains(&doc.id));
    assert_eq!(doc.name, "Gateway");
    assert_eq!(doc.organization.as_deref(), Some("Acme"));
    assert_eq!(doc.model_count(), 1);
    assert_eq!(doc.tool_count(), 1);
    assert!(doc.components[0].id.starts_with("model-"));
}

#[test]
fn generate_to_stdout_is_a_document() {
    let dir = tempfile::tempdir().unwrap();
    let inventory = write_file(
        dir.path(),
        "inventory.json",
        r#"{ "models": [ { "name": "m" } ] }"#,
    );

    let out = commands::generate(&inventory, None).unwrap();
    let doc = Aibom::from_json(&out.output).unwrap();

    assert_eq!(doc.name, "Generated AIBOM");
    assert_eq!(doc.components.len(), 1);
}

#[test]
fn inspect_shows_counts() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_doc(&dir, "bom.json", &sample_agent_system());

    let out = commands::inspect(&file).unwrap();

    assert!(out.output.starts_with("AIBOM: Agent System"));
    assert!(out.output.contains("Organization: Test"));
    assert!(out.output.contains("Models: 1  Tools: 2  Dependencies: 3"));
    assert!(out.output.contains("  - GPT-4 (high)"));
}

#[test]
fn missing_document_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = commands::inspect(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("reading AIBOM"));
}
