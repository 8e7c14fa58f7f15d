//! Assertion configuration.
//!
//! Loaded from YAML, built in code, or overridden from the environment:
//!
//! ```yaml
//! multi_match: strict   # first | strict
//! mode: fail_fast       # collect | fail_fast
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reporter::AssertionMode;
use crate::result::DomResult;
use crate::target::MultiMatchPolicy;

/// Environment variable overriding [`AssertConfig::multi_match`]
pub const ENV_MULTI_MATCH: &str = "PROBAR_DOM_MULTI_MATCH";

/// Environment variable overriding [`AssertConfig::mode`]
pub const ENV_MODE: &str = "PROBAR_DOM_MODE";

/// Configuration shared by assertions and result collectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssertConfig {
    /// Policy for single-element predicates on multi-element matches
    pub multi_match: MultiMatchPolicy,
    /// Collector behavior on failure
    pub mode: AssertionMode,
}

impl AssertConfig {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> AssertConfigBuilder {
        AssertConfigBuilder::default()
    }

    /// Parse YAML configuration; missing keys take their defaults
    ///
    /// # Errors
    ///
    /// Returns error if the YAML is malformed or has unknown keys
    pub fn from_yaml_str(yaml: &str) -> DomResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load YAML configuration from a file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> DomResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Defaults with environment overrides applied
    ///
    /// # Errors
    ///
    /// Returns error if an override has an unrecognized value
    pub fn from_env() -> DomResult<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply [`ENV_MULTI_MATCH`] and [`ENV_MODE`] if set
    ///
    /// # Errors
    ///
    /// Returns error if an override has an unrecognized value
    pub fn with_env_overrides(self) -> DomResult<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    ///
    /// # Errors
    ///
    /// Returns error if an override has an unrecognized value
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> DomResult<Self> {
        if let Some(policy) = lookup(ENV_MULTI_MATCH) {
            self.multi_match = policy.parse()?;
        }
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = mode.parse()?;
        }
        Ok(self)
    }

    /// Serialize to YAML
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_yaml(&self) -> DomResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

/// Builder for [`AssertConfig`]
#[derive(Debug, Clone, Default)]
pub struct AssertConfigBuilder {
    config: AssertConfig,
}

impl AssertConfigBuilder {
    /// Set the multi-match policy
    #[must_use]
    pub fn multi_match(mut self, policy: MultiMatchPolicy) -> Self {
        self.config.multi_match = policy;
        self
    }

    /// Shorthand for [`MultiMatchPolicy::Strict`]
    #[must_use]
    pub fn strict(self) -> Self {
        self.multi_match(MultiMatchPolicy::Strict)
    }

    /// Set the collector mode
    #[must_use]
    pub fn mode(mut self, mode: AssertionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> AssertConfig {
        self.config
    }
}
