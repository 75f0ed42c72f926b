//! Testing utilities for AIBOM workspace
//!
//! Shared test helpers, fixtures, and proptest strategies.

#![allow(missing_docs)]

use aibom_builder::{AibomBuilder, DataSourceDecl, ModelDecl, ToolDecl};
use aibom_model::{Aibom, Component, ComponentType, Dependency, RiskClassification};
use proptest::prelude::*;

/// Policy used across policy and CLI tests
pub const SAMPLE_POLICY_JSON: &str = r#"{
    "name": "production",
    "description": "Production guardrails",
    "rules": [
        { "type": "deny-model", "severity": "critical", "params": { "model_name": "gpt-3.5", "reason": "deprecated" } },
        { "type": "allowed-providers", "params": { "providers": ["OpenAI", "Anthropic"] } },
        { "type": "require-all-models-versioned", "severity": "medium" },
        { "type": "max-tools", "severity": "low", "params": { "max": 1 } }
    ]
}"#;

/// Raw component, bypassing the builder
pub fn component(id: &str, name: &str, component_type: ComponentType) -> Component {
    Component::new(id, name, component_type)
}

/// Raw document with the given components and edges, bypassing the builder
pub fn document_with(components: Vec<Component>, dependencies: Vec<Dependency>) -> Aibom {
    let mut doc = Aibom::new("aibom-fixture0001", "Fixture");
    doc.components = components;
    doc.dependencies = dependencies;
    doc
}

/// A small agent system: one model, two tools, one data source, wired up
pub fn sample_agent_system() -> Aibom {
    let mut builder = AibomBuilder::new("Agent System").with_organization("Test");
    let model = builder.add_model(
        ModelDecl::new("GPT-4", "OpenAI")
            .with_version("2024-01")
            .with_risk(RiskClassification::High)
            .with_description("Primary reasoning model"),
    );
    let search = builder.add_tool(ToolDecl::new("web_search").with_provider("Internal"));
    let sql = builder.add_tool(ToolDecl::new("exec_sql").with_provider("Internal"));
    let docs = builder.add_data_source(DataSourceDecl::new("docs-index"));
    builder.add_dependency(&model, &search);
    builder.add_dependency(&model, &sql);
    builder.add_dependency(&search, &docs);
    builder.build()
}

pub fn arb_component_type() -> impl Strategy<Value = ComponentType> {
    prop_oneof![
        Just(ComponentType::Model),
        Just(ComponentType::Tool),
        Just(ComponentType::DataSource),
        Just(ComponentType::Policy),
        Just(ComponentType::Processor),
        Just(ComponentType::Framework),
    ]
}

pub fn arb_risk() -> impl Strategy<Value = RiskClassification> {
    prop_oneof![
        Just(RiskClassification::Minimal),
        Just(RiskClassification::Limited),
        Just(RiskClassification::High),
        Just(RiskClassification::Unacceptable),
    ]
}

/// Component with an id drawn from a small alphabet so collisions happen
pub fn arb_component() -> impl Strategy<Value = Component> {
    (
        "[a-c]{0,2}",
        "[a-z]{0,6}",
        arb_component_type(),
        arb_risk(),
        proptest::option::of("[a-z]{0,4}"),
        proptest::option::of("[a-z]{0,4}"),
    )
        .prop_map(|(id, name, ty, risk, provider, description)| {
            let mut c = Component::new(id, name, ty).with_risk(risk);
            c.provider = provider;
            c.description = description;
            c
        })
}

/// Document with arbitrary components and edges over the same id alphabet
pub fn arb_document() -> impl Strategy<Value = Aibom> {
    (
        proptest::collection::vec(arb_component(), 0..8),
        proptest::collection::vec(("[a-c]{0,2}", "[a-c]{0,2}"), 0..6),
    )
        .prop_map(|(components, edges)| {
            let dependencies = edges
                .into_iter()
                .map(|(from, to)| Dependency::new(from, to))
                .collect();
            document_with(components, dependencies)
        })
}
