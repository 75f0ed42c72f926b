//! AIBOM Builder
//!
//! Incrementally assembles an [`Aibom`](aibom_model::Aibom) from component
//! declarations and finalizes it into a uniquely identified snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use aibom_builder::{AibomBuilder, ModelDecl, ToolDecl};
//!
//! let mut builder = AibomBuilder::new("Agent System").with_organization("Test");
//! builder.add_model(ModelDecl::new("GPT-4", "OpenAI").with_version("1.0"));
//! builder.add_tool(ToolDecl::new("SearchTool").with_provider("Internal"));
//!
//! let doc = builder.build();
//! assert_eq!(doc.model_count(), 1);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod builder;
mod declaration;
mod inventory;

pub use builder::AibomBuilder;
pub use declaration::{DataSourceDecl, ModelDecl, ToolDecl};
pub use inventory::{
    Inventory, InventoryError, InventoryModel, InventoryTool, DEFAULT_INVENTORY_NAME,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
