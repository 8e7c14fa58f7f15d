//! Probar DOM: assertions about DOM elements for browser tests
//!
//! Resolve a target (a CSS selector or an element reference), read the
//! element's observable state, compare it against an expectation and report
//! a pass/fail result with a readable message.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────────┐   ┌─────────┐   ┌────────────┐
//! │ Target   │──►│ resolve  │──►│ ElementState │──►│ Match   │──►│ ResultSink │
//! │ selector │   │ (Dom)    │   │ snapshot     │   │ Spec    │   │ collector  │
//! └──────────┘   └──────────┘   └──────────────┘   └─────────┘   └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use probar_dom::prelude::*;
//!
//! let doc = MockDocument::parse(r#"<input id="email" value="jane@example.com" required>"#);
//! let mut results = ResultCollector::new();
//! let mut email = assert_dom(&doc, &mut results, "#email");
//! email.is_required(None).unwrap();
//! email.has_value(MatchSpec::pattern("@example\\.com$").unwrap(), None).unwrap();
//! email.call("hasAttribute", &[serde_json::json!("required")]).unwrap();
//! assert!(results.verify().is_ok());
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Assertion engine: typed and dynamic assertion calls
#[allow(clippy::missing_errors_doc, clippy::must_use_candidate)]
mod assertions;

/// Dynamic call parsing
mod call;

/// Assertion configuration (YAML, builder, environment)
mod config;

/// DOM capability trait
mod dom;

/// Logging setup
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

/// Expected-value matching
mod matcher;

/// In-memory DOM for tests and examples
#[cfg(feature = "mock")]
#[allow(clippy::missing_errors_doc, clippy::must_use_candidate)]
pub mod mock;

/// Canonical predicates and aliases
mod predicate;

/// Results and sinks
mod reporter;

mod result;

/// Element state snapshots
mod state;

/// Target resolution
mod target;

pub use assertions::{assert_dom, DomAssertions, ExistsOptions};
pub use call::{AssertionCall, CallArgs};
pub use config::{AssertConfig, AssertConfigBuilder, ENV_MODE, ENV_MULTI_MATCH};
pub use dom::{describe_element, Dom, Rect};
pub use matcher::{contains, json_quote, MatchSpec};
pub use predicate::{PredicateKind, ALIASES};
pub use reporter::{
    AssertionFailures, AssertionMode, AssertionResult, AssertionSummary, ResultCollector,
    ResultSink, TracingSink,
};
pub use result::{DomAssertError, DomResult};
pub use state::{collapse_whitespace, is_visible, ElementState};
pub use target::{
    description, resolve, MultiMatchPolicy, Resolved, Selection, Target, UNKNOWN_TARGET,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::assertions::*;
    pub use super::config::{AssertConfig, AssertConfigBuilder};
    pub use super::dom::{Dom, Rect};
    pub use super::matcher::MatchSpec;
    #[cfg(feature = "mock")]
    pub use super::mock::{MockDocument, NodeId};
    pub use super::predicate::PredicateKind;
    pub use super::reporter::{
        AssertionMode, AssertionResult, ResultCollector, ResultSink, TracingSink,
    };
    pub use super::result::{DomAssertError, DomResult};
    pub use super::target::{MultiMatchPolicy, Target};
}
