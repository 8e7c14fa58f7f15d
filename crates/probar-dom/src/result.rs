//! Result and error types for probar-dom.
//!
//! Only programmer errors live here. A failed assertion is never an error:
//! it is an [`AssertionResult`](crate::AssertionResult) with `passed == false`.

use thiserror::Error;

/// Result type for probar-dom operations
pub type DomResult<T> = Result<T, DomAssertError>;

/// Errors that signal misuse of the assertion API
#[derive(Debug, Error)]
pub enum DomAssertError {
    /// Target is not a selector, an element reference or absent
    #[error("Unexpected target: {kind}")]
    InvalidTarget {
        /// What was supplied instead
        kind: String,
    },

    /// Absent target used with an assertion that needs an element
    #[error("Assertion `{assertion}` requires a target element, but the target is absent")]
    MissingTarget {
        /// Canonical assertion name
        assertion: String,
    },

    /// Selector could not be parsed by the DOM
    #[error("Invalid selector `{selector}`: {message}")]
    InvalidSelector {
        /// Selector text
        selector: String,
        /// Parser message
        message: String,
    },

    /// Element does not carry the property the assertion reads
    #[error("Unexpected element type for `{property}`: {element}")]
    UnsupportedProperty {
        /// Property name (e.g. `disabled`)
        property: String,
        /// Description of the element
        element: String,
    },

    /// Regular expression failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Assertion name not found in the name table
    #[error("Unknown assertion: {name}")]
    UnknownAssertion {
        /// Name as supplied
        name: String,
    },

    /// Arguments do not match any recognized call shape
    #[error("Invalid arguments for `{assertion}`: {message}")]
    InvalidArgument {
        /// Canonical assertion name
        assertion: String,
        /// What was wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl DomAssertError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(assertion: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            assertion: assertion.to_string(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error came from the target rather than the arguments
    #[must_use]
    pub const fn is_target_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTarget { .. } | Self::MissingTarget { .. } | Self::InvalidSelector { .. }
        )
    }
}
