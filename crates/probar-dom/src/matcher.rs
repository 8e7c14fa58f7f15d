//! Expected-value matching shared by text, attribute and value assertions.

use std::fmt;

use regex::Regex;
use serde_json::Value;

use crate::result::DomResult;

/// Expected value of an assertion
#[derive(Debug, Clone)]
pub enum MatchSpec {
    /// Exact string equality
    Literal(String),
    /// Regular expression found anywhere in the actual value
    Pattern(Regex),
    /// Any defined value
    Any,
}

impl MatchSpec {
    /// Match a string exactly
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::InvalidPattern`](crate::DomAssertError::InvalidPattern)
    /// if the expression does not compile
    pub fn pattern(source: &str) -> DomResult<Self> {
        Ok(Self::Pattern(Regex::new(source)?))
    }

    /// Wildcard: value must be present
    #[must_use]
    pub const fn any() -> Self {
        Self::Any
    }

    /// Parse the JSON forms `"text"`, `{"any": true}` and `{"pattern": "..."}`.
    ///
    /// Returns `Ok(None)` for any other shape so the caller can report it
    /// against the assertion being parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern does not compile
    pub fn from_json(value: &Value) -> DomResult<Option<Self>> {
        match value {
            Value::String(text) => Ok(Some(Self::literal(text.clone()))),
            Value::Object(map) if map.len() == 1 => match map.iter().next() {
                Some((key, Value::Bool(true))) if key == "any" => Ok(Some(Self::Any)),
                Some((key, Value::String(source))) if key == "pattern" => {
                    Self::pattern(source).map(Some)
                }
                _ => Ok(None),
            },
            _ => Ok(None),
        }
    }

    /// Check an actual value; `None` means the value is absent
    #[must_use]
    pub fn matches(&self, actual: Option<&str>) -> bool {
        let Some(actual) = actual else {
            return false;
        };
        match self {
            Self::Literal(expected) => actual == expected,
            Self::Pattern(re) => re.is_match(actual),
            Self::Any => true,
        }
    }

    /// Check text-like content that is always defined (text, form values).
    ///
    /// Empty content counts as absent for [`MatchSpec::Any`] only.
    #[must_use]
    pub fn matches_content(&self, actual: &str) -> bool {
        if self.is_any() && actual.is_empty() {
            return false;
        }
        self.matches(Some(actual))
    }

    /// Check if this is the wildcard
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    /// The same expectation with literal text whitespace-collapsed
    #[must_use]
    pub fn collapsed(self) -> Self {
        match self {
            Self::Literal(text) => Self::Literal(crate::state::collapse_whitespace(&text)),
            other => other,
        }
    }
}

/// Substring containment; patterns are never accepted here
#[must_use]
pub fn contains(actual: Option<&str>, needle: &str) -> bool {
    actual.is_some_and(|actual| actual.contains(needle))
}

/// JSON-quote a string for actual/expected descriptions
#[must_use]
pub fn json_quote(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

impl PartialEq for MatchSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            (Self::Any, Self::Any) => true,
            _ => false,
        }
    }
}

impl fmt::Display for MatchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "\"{text}\""),
            Self::Pattern(re) => write!(f, "/{}/", re.as_str()),
            Self::Any => write!(f, "any"),
        }
    }
}

impl From<&str> for MatchSpec {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl From<String> for MatchSpec {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<Regex> for MatchSpec {
    fn from(re: Regex) -> Self {
        Self::Pattern(re)
    }
}
