//! Assertion results and the sinks that record them.
//!
//! Every assertion call produces exactly one [`AssertionResult`] and hands
//! it to a [`ResultSink`]. [`ResultCollector`] keeps results for later
//! inspection (or panics on the first failure in fail-fast mode), and
//! [`TracingSink`] forwards them to `tracing`.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AssertConfig;
use crate::result::DomResult;

/// Outcome of one assertion call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionResult {
    /// Whether the assertion held
    pub passed: bool,
    /// Description of what was observed
    pub actual: String,
    /// Description of what was expected
    pub expected: String,
    /// Message for the test report
    pub message: String,
}

impl AssertionResult {
    /// Create a result
    #[must_use]
    pub fn new(
        passed: bool,
        actual: impl Into<String>,
        expected: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            passed,
            actual: actual.into(),
            expected: expected.into(),
            message: message.into(),
        }
    }
}

/// Receiver of assertion results (the host test framework)
pub trait ResultSink {
    /// Record one result
    fn push_result(&mut self, result: &AssertionResult);
}

impl ResultSink for Vec<AssertionResult> {
    fn push_result(&mut self, result: &AssertionResult) {
        self.push(result.clone());
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn push_result(&mut self, result: &AssertionResult) {
        (**self).push_result(result);
    }
}

/// What the collector does with a failed result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssertionMode {
    /// Record all results (default)
    #[default]
    Collect,
    /// Panic on the first failure, like a hard assertion
    FailFast,
}

impl std::str::FromStr for AssertionMode {
    type Err = crate::DomAssertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "collect" => Ok(Self::Collect),
            "fail_fast" => Ok(Self::FailFast),
            other => Err(crate::DomAssertError::config(format!(
                "unknown assertion mode `{other}` (expected `collect` or `fail_fast`)"
            ))),
        }
    }
}

/// Summary of recorded results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionSummary {
    /// Results recorded
    pub total: usize,
    /// Results that passed
    pub passed: usize,
    /// Results that failed
    pub failed: usize,
}

/// Error returned by [`ResultCollector::verify`] when anything failed
#[derive(Debug, Clone)]
pub struct AssertionFailures {
    /// Messages of the failed results, in order
    pub failures: Vec<String>,
    /// Number of failed results
    pub count: usize,
}

impl AssertionFailures {
    fn new(failures: &[&AssertionResult]) -> Self {
        Self {
            failures: failures.iter().map(|r| r.message.clone()).collect(),
            count: failures.len(),
        }
    }
}

impl std::fmt::Display for AssertionFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} DOM assertion(s) failed:", self.count)?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {failure}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailures {}

/// In-memory sink
///
/// ## Example
///
/// ```rust
/// use probar_dom::mock::MockDocument;
/// use probar_dom::{assert_dom, ResultCollector};
///
/// let doc = MockDocument::parse("<p>hi</p>");
/// let mut results = ResultCollector::new();
/// assert_dom(&doc, &mut results, "p").exists(None).unwrap();
/// assert_dom(&doc, &mut results, "h1").exists(None).unwrap();
/// assert_eq!(results.summary().failed, 1);
/// assert!(results.verify().is_err());
/// ```
#[derive(Debug, Default)]
pub struct ResultCollector {
    results: Vec<AssertionResult>,
    mode: AssertionMode,
}

impl ResultCollector {
    /// Create a collecting sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a specific mode
    #[must_use]
    pub fn with_mode(mode: AssertionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Create with the mode from a configuration
    #[must_use]
    pub fn from_config(config: &AssertConfig) -> Self {
        Self::with_mode(config.mode)
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> AssertionMode {
        self.mode
    }

    /// All results in order
    #[must_use]
    pub fn results(&self) -> &[AssertionResult] {
        &self.results
    }

    /// Failed results in order
    pub fn failures(&self) -> Vec<&AssertionResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }

    /// Check if every recorded result passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Count of results by outcome
    #[must_use]
    pub fn summary(&self) -> AssertionSummary {
        let failed = self.results.iter().filter(|r| !r.passed).count();
        AssertionSummary {
            total: self.results.len(),
            passed: self.results.len() - failed,
            failed,
        }
    }

    /// Verify all results passed
    ///
    /// # Errors
    ///
    /// Returns the failure messages if any result failed
    pub fn verify(&self) -> Result<(), AssertionFailures> {
        let failures = self.failures();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(AssertionFailures::new(&failures))
        }
    }

    /// Serialize all results as a JSON array
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_json(&self) -> DomResult<String> {
        Ok(serde_json::to_string_pretty(&self.results)?)
    }

    /// Forget all recorded results
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

impl ResultSink for ResultCollector {
    fn push_result(&mut self, result: &AssertionResult) {
        self.results.push(result.clone());
        if self.mode == AssertionMode::FailFast && !result.passed {
            panic!(
                "DOM assertion failed: {}\n  expected: {}\n  actual:   {}",
                result.message, result.expected, result.actual
            );
        }
    }
}

/// Sink that logs each result as a structured `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ResultSink for TracingSink {
    fn push_result(&mut self, result: &AssertionResult) {
        if result.passed {
            info!(assertion = %result.message, "dom assertion passed");
        } else {
            warn!(
                assertion = %result.message,
                expected = %result.expected,
                actual = %result.actual,
                "dom assertion failed"
            );
        }
    }
}
