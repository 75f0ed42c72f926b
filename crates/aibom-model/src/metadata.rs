//! Free-form metadata
//!
//! Metadata keeps the JSON-like shape of an open key/value bag while
//! restricting values to a closed set of variants.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered metadata map (insertion order is preserved on serialization)
pub type Metadata = IndexMap<String, MetadataValue>;

/// A metadata value: string, number, boolean or nested mapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Number(f64),
    String(String),
    Map(Metadata),
}

impl MetadataValue {
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&Metadata> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for MetadataValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Metadata> for MetadataValue {
    fn from(value: Metadata) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_shape() {
        let mut nested = Metadata::new();
        nested.insert("region".to_string(), "eu-west-1".into());

        let mut metadata = Metadata::new();
        metadata.insert("owner".to_string(), "platform".into());
        metadata.insert("replicas".to_string(), 3_i32.into());
        metadata.insert("audited".to_string(), true.into());
        metadata.insert("deployment".to_string(), nested.into());

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "owner": "platform",
                "replicas": 3.0,
                "audited": true,
                "deployment": { "region": "eu-west-1" }
            })
        );
    }

    #[test]
    fn integers_decode_as_numbers() {
        let value: MetadataValue = serde_json::from_str("42").unwrap();
        assert_eq!(value.as_f64(), Some(42.0));
    }

    #[test]
    fn strings_do_not_coerce() {
        let value: MetadataValue = serde_json::from_str("\"true\"").unwrap();
        assert_eq!(value.as_str(), Some("true"));
        assert_eq!(value.as_bool(), None);
    }

    #[test]
    fn arrays_are_rejected() {
        assert!(serde_json::from_str::<MetadataValue>("[1, 2]").is_err());
    }
}
