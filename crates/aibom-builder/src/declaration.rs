//! Component declarations accepted by [`AibomBuilder`](crate::AibomBuilder)
//!
//! Declarations carry only what the caller knows about an asset. The
//! builder assigns the id and the component type.

use aibom_model::RiskClassification;

/// Declaration of a MODEL component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDecl {
    pub name: String,
    pub provider: String,
    pub version: Option<String>,
    pub risk: RiskClassification,
    pub description: Option<String>,
}

impl ModelDecl {
    /// Declare a model with minimal risk
    #[must_use]
    pub fn new(name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            version: None,
            risk: RiskClassification::Minimal,
            description: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_risk(mut self, risk: RiskClassification) -> Self {
        self.risk = risk;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Declaration of a TOOL component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDecl {
    pub name: String,
    pub provider: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl ToolDecl {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: None,
            version: None,
            description: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Declaration of a DATA_SOURCE component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceDecl {
    pub name: String,
    pub provider: Option<String>,
    pub description: Option<String>,
}

impl DataSourceDecl {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: None,
            description: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
