//! Inventory shortcut
//!
//! Builds a document from an upstream inventory of models and tools (for
//! example a gateway's health report). Absent fields default to the empty
//! string. This is a composition over the builder's primitive operations.

use crate::builder::AibomBuilder;
use crate::declaration::{ModelDecl, ToolDecl};
use aibom_model::Aibom;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name given to documents built from an inventory without one
pub const DEFAULT_INVENTORY_NAME: &str = "Generated AIBOM";

fn default_name() -> String {
    DEFAULT_INVENTORY_NAME.to_string()
}

/// Errors loading an inventory
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// IO error reading the inventory file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid inventory json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid inventory yaml: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Upstream description of the models and tools in a system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub models: Vec<InventoryModel>,
    #[serde(default)]
    pub tools: Vec<InventoryTool>,
}

/// Model entry of an inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// Tool entry of an inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTool {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub description: String,
}

impl Inventory {
    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid
    pub fn from_yaml(yaml: &str) -> Result<Self, InventoryError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a file, choosing YAML for `.yaml`/`.yml` and JSON otherwise
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn from_path(path: &Path) -> Result<Self, InventoryError> {
        let text = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml(&text),
            _ => Self::from_json(&text),
        }
    }
}

impl AibomBuilder {
    /// Build a document from an inventory
    ///
    /// Models are added before tools, each in inventory order.
    #[must_use]
    pub fn from_inventory(inventory: &Inventory) -> Aibom {
        let mut builder = AibomBuilder::new(inventory.name.clone())
            .with_organization(inventory.organization.clone());

        for model in &inventory.models {
            builder.add_model(
                ModelDecl::new(model.name.clone(), model.provider.clone())
                    .with_version(model.version.clone())
                    .with_description(model.description.clone()),
            );
        }

        for tool in &inventory.tools {
            builder.add_tool(
                ToolDecl::new(tool.name.clone())
                    .with_provider(tool.provider.clone())
                    .with_description(tool.description.clone()),
            );
        }

        builder.build()
    }
}
