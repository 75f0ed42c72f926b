//! Identifier generation
//!
//! Identifiers are `<prefix>-<random hex token>`. Tokens come from random
//! v4 UUIDs so independent builders never need to coordinate to avoid
//! collisions.

use crate::component::ComponentType;
use uuid::Uuid;

/// Prefix of every generated document id
pub const DOCUMENT_PREFIX: &str = "aibom";

/// Hex characters in a component id token
pub const COMPONENT_TOKEN_LEN: usize = 8;

/// Hex characters in a document id token
pub const DOCUMENT_TOKEN_LEN: usize = 12;

/// Generate a component id such as `model-1f2e3d4c`
#[must_use]
pub fn component_id(component_type: ComponentType) -> String {
    format!(
        "{}-{}",
        component_type.id_prefix(),
        random_token(COMPONENT_TOKEN_LEN)
    )
}

/// Generate a document id such as `aibom-0a1b2c3d4e5f`
#[must_use]
pub fn document_id() -> String {
    format!("{DOCUMENT_PREFIX}-{}", random_token(DOCUMENT_TOKEN_LEN))
}

/// Random lowercase hex token of `len` characters (at most 32)
fn random_token(len: usize) -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(len);
    token
}
