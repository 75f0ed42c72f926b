use aibom_builder::{AibomBuilder, Inventory, ModelDecl, ToolDecl};
use aibom_validator::AibomValidator;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn prop_model_ids_prefixed(names in proptest::collection::vec(".{0,12}", 1..20)) {
        let mut builder = AibomBuilder::new("prop");
        for name in names {
            let id = builder.add_model(ModelDecl::new(name, "provider"));
            prop_assert!(id.starts_with("model-"));
        }
    }
}

#[test]
fn thousand_model_ids_are_distinct() {
    let mut builder = AibomBuilder::new("uniqueness");
    let ids: HashSet<String> = (0..1000)
        .map(|i| builder.add_model(ModelDecl::new(format!("m{i}"), "p")))
        .collect();

    assert_eq!(ids.len(), 1000);
    assert_eq!(builder.component_count(), 1000);
}

#[test]
fn agent_system_end_to_end() {
    let mut builder = AibomBuilder::new("Agent System").with_organization("Test");
    builder.add_model(ModelDecl::new("GPT-4", "OpenAI").with_version("1.0"));
    builder.add_tool(ToolDecl::new("SearchTool").with_provider("Internal"));

    let doc = builder.build();

    assert_eq!(doc.name, "Agent System");
    assert_eq!(doc.components.len(), 2);
    assert_eq!(doc.model_count(), 1);
    assert_eq!(doc.tool_count(), 1);

    let result = AibomValidator::new().validate(&doc);
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn dependencies_between_built_components_validate() {
    let mut builder = AibomBuilder::new("Wired");
    let model = builder.add_model(ModelDecl::new("GPT-4", "OpenAI"));
    let tool = builder.add_tool(ToolDecl::new("search"));
    builder.add_dependency(&tool, &model);

    let result = AibomValidator::new().validate(&builder.build());
    assert!(result.valid);
}

#[test]
fn forward_dependency_resolves_once_declared() {
    let mut builder = AibomBuilder::new("Late");
    builder.add_dependency("not-yet", "also-not-yet");

    let early = AibomValidator::new().validate(&builder.build());
    assert!(!early.valid);
    assert_eq!(early.errors.len(), 2);
}

#[test]
fn inventory_document_without_providers_warns() {
    let inventory = Inventory::from_json(
        r#"{
            "name": "Gateway",
            "models": [{ "name": "gpt-4" }, { "name": "claude", "provider": "anthropic" }],
            "tools": [{ "name": "exec_sql" }]
        }"#,
    )
    .unwrap();

    let doc = AibomBuilder::from_inventory(&inventory);
    let result = AibomValidator::new().validate(&doc);

    assert_eq!(doc.components.len(), 3);
    assert!(result.valid);
    assert_eq!(
        result.warnings,
        vec!["Model 'gpt-4' missing provider".to_string()]
    );
}
