//! Subcommand implementations
//!
//! Each command returns a [`CommandOutput`]; the binary prints it and
//! exits with its code.

use crate::config::OutputFormat;
use crate::render;
use aibom_builder::{AibomBuilder, Inventory};
use aibom_model::Aibom;
use aibom_policy::{has_failures, PolicyEngine, RuleRegistry};
use aibom_validator::AibomValidator;
use anyhow::{Context, Result};
use std::path::Path;

/// Exit code for an invalid document (or warnings under `--strict`)
pub const EXIT_INVALID: i32 = 1;

/// Exit code when any policy fails
pub const EXIT_POLICY_FAILED: i32 = 2;

/// Text to print and the process exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub output: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(output: String) -> Self {
        Self {
            output,
            exit_code: 0,
        }
    }
}

/// Read a document from a JSON file
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid document
pub fn load_document(path: &Path) -> Result<Aibom> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading AIBOM {}", path.display()))?;
    let doc = Aibom::from_json(&text).with_context(|| format!("parsing AIBOM {}", path.display()))?;
    tracing::debug!(id = %doc.id, components = doc.components.len(), "loaded aibom");
    Ok(doc)
}

/// Build a document from an inventory file
///
/// Writes pretty JSON to `output` when given, otherwise returns it.
///
/// # Errors
/// Returns error if the inventory cannot be loaded or the output written
pub fn generate(inventory: &Path, output: Option<&Path>) -> Result<CommandOutput> {
    let inventory = Inventory::from_path(inventory)
        .with_context(|| format!("loading inventory {}", inventory.display()))?;
    let doc = AibomBuilder::from_inventory(&inventory);
    let json = doc.to_json_pretty().context("serializing AIBOM")?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing AIBOM {}", path.display()))?;
            tracing::info!(id = %doc.id, path = %path.display(), "aibom written");
            Ok(CommandOutput::success(format!(
                "✓ Generated AIBOM {} with {} components: {}",
                doc.id,
                doc.components.len(),
                path.display()
            )))
        }
        None => Ok(CommandOutput::success(json)),
    }
}

/// Validate a document file
///
/// # Errors
/// Returns error if the document cannot be loaded
pub fn validate(file: &Path, format: OutputFormat, strict: bool) -> Result<CommandOutput> {
    let doc = load_document(file)?;
    let result = AibomValidator::new().validate(&doc);
    let output = render::render_validation(&result, format)?;

    let failed = !result.valid || (strict && result.has_warnings());
    Ok(CommandOutput {
        output,
        exit_code: if failed { EXIT_INVALID } else { 0 },
    })
}

/// Evaluate a policy file against a document file
///
/// # Errors
/// Returns error if the document or policy cannot be loaded
pub fn policy(bom: &Path, policy: &Path, format: OutputFormat) -> Result<CommandOutput> {
    let doc = load_document(bom)?;
    let policy = RuleRegistry::with_defaults()
        .load_file(policy)
        .with_context(|| format!("loading policy {}", policy.display()))?;

    let engine = PolicyEngine::new().with_policy(policy);
    let results = engine.evaluate_all(&doc);
    let output = render::render_policy_results(&results, format)?;

    Ok(CommandOutput {
        output,
        exit_code: if has_failures(&results) {
            EXIT_POLICY_FAILED
        } else {
            0
        },
    })
}

/// Summarize a document file
///
/// # Errors
/// Returns error if the document cannot be loaded
pub fn inspect(file: &Path) -> Result<CommandOutput> {
    let doc = load_document(file)?;
    Ok(CommandOutput::success(render::render_inventory(&doc)))
}
