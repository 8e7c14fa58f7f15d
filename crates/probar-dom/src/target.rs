//! Target resolution.
//!
//! A [`Target`] names the element(s) under test. Resolution turns it into the
//! ordered list of matching elements; zero matches is an ordinary outcome,
//! only malformed targets are errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::dom::{describe_element, Dom};
use crate::result::{DomAssertError, DomResult};

/// Description used in messages when there is no target
pub const UNKNOWN_TARGET: &str = "<unknown>";

/// Element(s) an assertion is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<H> {
    /// CSS selector, queried under the assertion root
    Selector(String),
    /// A specific element
    Element(H),
    /// No target (e.g. the result of a lookup that found nothing)
    Absent,
}

impl<H> Target<H> {
    /// Create a selector target
    #[must_use]
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    /// Create an element target
    #[must_use]
    pub const fn element(element: H) -> Self {
        Self::Element(element)
    }

    /// Convert a loosely-typed target.
    ///
    /// Strings become selectors and `null` becomes [`Target::Absent`].
    /// Element references cannot be expressed in JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::InvalidTarget`] for numbers, booleans,
    /// arrays and objects
    pub fn from_json(value: &Value) -> DomResult<Self> {
        match value {
            Value::String(selector) => Ok(Self::Selector(selector.clone())),
            Value::Null => Ok(Self::Absent),
            other => Err(DomAssertError::InvalidTarget {
                kind: format!("{} {other}", json_kind(other)),
            }),
        }
    }

    /// Check if this is [`Target::Absent`]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<H> From<&str> for Target<H> {
    fn from(selector: &str) -> Self {
        Self::selector(selector)
    }
}

impl<H> From<String> for Target<H> {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

impl<H> From<Option<H>> for Target<H> {
    fn from(element: Option<H>) -> Self {
        element.map_or(Self::Absent, Self::Element)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// How single-element predicates treat a selector matching several elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiMatchPolicy {
    /// Use the first match in document order
    #[default]
    First,
    /// Fail the assertion, naming the match count
    Strict,
}

impl std::str::FromStr for MultiMatchPolicy {
    type Err = DomAssertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "strict" => Ok(Self::Strict),
            other => Err(DomAssertError::config(format!(
                "unknown multi-match policy `{other}` (expected `first` or `strict`)"
            ))),
        }
    }
}

/// Outcome of picking one element from a resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<H> {
    /// Nothing matched
    NotFound,
    /// The element to inspect
    One(H),
    /// Several elements matched under [`MultiMatchPolicy::Strict`]
    Ambiguous(usize),
}

/// Elements matched by a target, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<H> {
    elements: Vec<H>,
}

impl<H: Clone> Resolved<H> {
    /// Wrap matched elements
    #[must_use]
    pub const fn new(elements: Vec<H>) -> Self {
        Self { elements }
    }

    /// Matched elements
    #[must_use]
    pub fn elements(&self) -> &[H] {
        &self.elements
    }

    /// Number of matches
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Pick the element a single-element predicate inspects
    #[must_use]
    pub fn select(&self, policy: MultiMatchPolicy) -> Selection<H> {
        match (self.elements.as_slice(), policy) {
            ([], _) => Selection::NotFound,
            ([first, ..], MultiMatchPolicy::First) | ([first], MultiMatchPolicy::Strict) => {
                Selection::One(first.clone())
            }
            (many, MultiMatchPolicy::Strict) => Selection::Ambiguous(many.len()),
        }
    }
}

/// Resolve `target` under `root`.
///
/// [`Target::Absent`] resolves to no elements; callers that need an element
/// reject it before resolving.
///
/// # Errors
///
/// Returns [`DomAssertError::InvalidTarget`] for an empty selector and
/// [`DomAssertError::InvalidSelector`] when the DOM rejects the selector
pub fn resolve<D: Dom>(
    dom: &D,
    target: &Target<D::Handle>,
    root: &D::Handle,
) -> DomResult<Resolved<D::Handle>> {
    let elements = match target {
        Target::Selector(selector) if selector.trim().is_empty() => {
            return Err(DomAssertError::InvalidTarget {
                kind: "empty selector".to_string(),
            });
        }
        Target::Selector(selector) => dom.query_selector_all(root, selector)?,
        Target::Element(element) => vec![element.clone()],
        Target::Absent => Vec::new(),
    };
    trace!(target_kind = ?kind_name(target), matches = elements.len(), "resolved target");
    Ok(Resolved::new(elements))
}

const fn kind_name<H>(target: &Target<H>) -> &'static str {
    match target {
        Target::Selector(_) => "selector",
        Target::Element(_) => "element",
        Target::Absent => "absent",
    }
}

/// Description of the target used in messages
pub fn description<D: Dom>(dom: &D, target: &Target<D::Handle>) -> String {
    match target {
        Target::Selector(selector) => selector.clone(),
        Target::Element(element) => describe_element(dom, element),
        Target::Absent => UNKNOWN_TARGET.to_string(),
    }
}
