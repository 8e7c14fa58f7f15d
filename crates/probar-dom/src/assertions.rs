//! DOM assertion engine.
//!
//! Each call runs one linear pipeline: resolve the target, capture the
//! element state, match it against the expectation, then hand the
//! [`AssertionResult`] to the sink and return it. Misuse (bad targets, bad
//! arguments) is returned as [`DomAssertError`] and never reaches the sink.
//!
//! ## Example
//!
//! ```rust
//! use probar_dom::mock::MockDocument;
//! use probar_dom::{assert_dom, ResultCollector};
//!
//! let doc = MockDocument::parse("<h2 id=\"title\">\n  Welcome to <b>QUnit</b>\n</h2>");
//! let mut results = ResultCollector::new();
//! let mut title = assert_dom(&doc, &mut results, "#title");
//! title.exists(None).unwrap();
//! title.has_text("Welcome to QUnit", None).unwrap();
//! title.includes_text("QUnit", Some("mentions the framework")).unwrap();
//! assert!(results.all_passed());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::call::{AssertionCall, CallArgs};
use crate::config::AssertConfig;
use crate::dom::{describe_element, Dom};
use crate::matcher::{contains, json_quote, MatchSpec};
use crate::predicate::PredicateKind;
use crate::reporter::{AssertionResult, ResultSink};
use crate::result::{DomAssertError, DomResult};
use crate::state::ElementState;
use crate::target::{description, resolve, Selection, Target};

/// Options for [`DomAssertions::exists_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExistsOptions {
    /// Exact number of matches required
    pub count: Option<usize>,
}

impl ExistsOptions {
    /// Require exactly `count` matches
    #[must_use]
    pub const fn count(count: usize) -> Self {
        Self { count: Some(count) }
    }
}

/// Assertions about one target, reporting into a sink
pub struct DomAssertions<'a, D: Dom, S: ResultSink + ?Sized> {
    dom: &'a D,
    sink: &'a mut S,
    target: Target<D::Handle>,
    root: D::Handle,
    config: AssertConfig,
}

/// Start asserting on `target`, with selectors scoped under the document root
pub fn assert_dom<'a, D: Dom, S: ResultSink + ?Sized>(
    dom: &'a D,
    sink: &'a mut S,
    target: impl Into<Target<D::Handle>>,
) -> DomAssertions<'a, D, S> {
    DomAssertions::new(dom, sink, target.into())
}

impl<D: Dom, S: ResultSink + ?Sized> fmt::Debug for DomAssertions<'_, D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomAssertions")
            .field("target", &self.target)
            .field("root", &self.root)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn count_phrase(desc: &str, count: usize) -> String {
    match count {
        0 => format!("Element {desc} does not exist"),
        1 => format!("Element {desc} exists once"),
        2 => format!("Element {desc} exists twice"),
        n => format!("Element {desc} exists {n} times"),
    }
}

/// Result of a boolean state predicate (`is checked` / `is not checked`)
fn flag(desc: &str, word: &str, actual: bool, expected: bool) -> AssertionResult {
    let phrase = |on: bool| {
        if on {
            format!("Element {desc} is {word}")
        } else {
            format!("Element {desc} is not {word}")
        }
    };
    let expected_text = phrase(expected);
    AssertionResult::new(actual == expected, phrase(actual), expected_text.clone(), expected_text)
}

/// Result with `expected` doubling as the message
fn stated(passed: bool, actual: String, expected: String) -> AssertionResult {
    AssertionResult::new(passed, actual, expected.clone(), expected)
}

fn attribute_presence(desc: &str, name: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!(
            "Element {desc} has attribute \"{name}\" with value {}",
            json_quote(value)
        ),
        None => format!("Element {desc} does not have attribute \"{name}\""),
    }
}

fn has_attribute(desc: &str, name: &str, spec: &MatchSpec, value: Option<&str>) -> AssertionResult {
    let actual = attribute_presence(desc, name, value);
    let passed = spec.matches(value);
    match spec {
        MatchSpec::Literal(expected) => AssertionResult::new(
            passed,
            actual,
            format!(
                "Element {desc} has attribute \"{name}\" with value {}",
                json_quote(expected)
            ),
            format!("Element {desc} has attribute \"{name}\" with value \"{expected}\""),
        ),
        MatchSpec::Pattern(re) => stated(
            passed,
            actual,
            format!(
                "Element {desc} has attribute \"{name}\" with value matching /{}/",
                re.as_str()
            ),
        ),
        MatchSpec::Any => {
            let expected = format!("Element {desc} has attribute \"{name}\"");
            let actual = if passed {
                expected.clone()
            } else {
                attribute_presence(desc, name, None)
            };
            stated(passed, actual, expected)
        }
    }
}

/// Shared shape of text and value results; `noun` is `text` or `value`
fn content_result(desc: &str, noun: &str, actual: &str, spec: &MatchSpec) -> AssertionResult {
    let passed = spec.matches_content(actual);
    match spec {
        MatchSpec::Literal(expected) => AssertionResult::new(
            passed,
            actual,
            expected.as_str(),
            format!("Element {desc} has {noun} \"{expected}\""),
        ),
        MatchSpec::Pattern(re) => AssertionResult::new(
            passed,
            actual,
            format!("/{}/", re.as_str()),
            format!("Element {desc} has {noun} matching /{}/", re.as_str()),
        ),
        MatchSpec::Any => {
            let expected = format!("Element {desc} has a {noun}");
            let actual = if passed {
                expected.clone()
            } else {
                format!("Element {desc} has no {noun}")
            };
            stated(passed, actual, expected)
        }
    }
}

fn has_text(desc: &str, text: &str, spec: &MatchSpec) -> AssertionResult {
    content_result(desc, "text", text, &spec.clone().collapsed())
}

fn has_value(desc: &str, value: &str, spec: &MatchSpec) -> AssertionResult {
    content_result(desc, "value", value, spec)
}

impl<'a, D: Dom, S: ResultSink + ?Sized> DomAssertions<'a, D, S> {
    /// Create assertions for `target` rooted at the document root
    pub fn new(dom: &'a D, sink: &'a mut S, target: Target<D::Handle>) -> Self {
        Self {
            dom,
            sink,
            target,
            root: dom.root(),
            config: AssertConfig::default(),
        }
    }

    /// Scope selector queries under `root`
    #[must_use]
    pub fn with_root(mut self, root: D::Handle) -> Self {
        self.root = root;
        self
    }

    /// Use a specific configuration
    #[must_use]
    pub fn with_config(mut self, config: AssertConfig) -> Self {
        self.config = config;
        self
    }

    /// The target under test
    pub fn target(&self) -> &Target<D::Handle> {
        &self.target
    }

    /// Description of the target used in messages
    pub fn description(&self) -> String {
        description(self.dom, &self.target)
    }

    /// Evaluate a dynamically named assertion (`"hasText"`, `"lacksClass"`, ...)
    ///
    /// # Errors
    ///
    /// Returns error for unknown names, malformed arguments and invalid
    /// targets
    pub fn call(&mut self, name: &str, args: &[Value]) -> DomResult<AssertionResult> {
        let call = AssertionCall::parse(name, args)?;
        self.evaluate(&call)
    }

    /// Evaluate a normalized call, push its result to the sink and return it
    ///
    /// # Errors
    ///
    /// Returns error for invalid targets, arguments that do not fit the
    /// predicate, and elements lacking a property the predicate reads
    pub fn evaluate(&mut self, call: &AssertionCall) -> DomResult<AssertionResult> {
        let kind = call.kind;
        if self.target.is_absent() && !kind.accepts_absent() {
            return Err(DomAssertError::MissingTarget {
                assertion: kind.name().to_string(),
            });
        }
        let resolved = resolve(self.dom, &self.target, &self.root)?;
        let desc = self.description();

        let (mut result, overridable) = match kind {
            PredicateKind::Exists => (self.exists_result(&desc, resolved.len(), &call.args)?, true),
            PredicateKind::DoesNotExist => {
                self.expect_no_args(kind, &call.args)?;
                let passed = resolved.is_empty();
                let result = stated(
                    passed,
                    count_phrase(&desc, resolved.len()),
                    format!("Element {desc} does not exist"),
                );
                (result, true)
            }
            PredicateKind::IsNotVisible if resolved.is_empty() => {
                self.expect_no_args(kind, &call.args)?;
                let result = stated(
                    true,
                    format!("Element {desc} does not exist"),
                    format!("Element {desc} is not visible"),
                );
                (result, true)
            }
            _ => match resolved.select(self.config.multi_match) {
                Selection::NotFound => (
                    AssertionResult::new(
                        false,
                        format!("Element {desc} does not exist"),
                        format!("Element {desc} exists"),
                        format!("Element {desc} does not exist"),
                    ),
                    false,
                ),
                Selection::Ambiguous(count) => (
                    AssertionResult::new(
                        false,
                        count_phrase(&desc, count),
                        count_phrase(&desc, 1),
                        format!("Element {desc} matches {count} elements, expected exactly one"),
                    ),
                    false,
                ),
                Selection::One(element) => (self.inspect(kind, &call.args, &desc, &element)?, true),
            },
        };

        if let (true, Some(message)) = (overridable, &call.message) {
            result.message.clone_from(message);
        }
        debug!(
            assertion = kind.name(),
            selector = %desc,
            matches = resolved.len(),
            passed = result.passed,
            "evaluated dom assertion"
        );
        self.sink.push_result(&result);
        Ok(result)
    }

    fn expect_no_args(&self, kind: PredicateKind, args: &CallArgs) -> DomResult<()> {
        match args {
            CallArgs::None => Ok(()),
            other => Err(DomAssertError::invalid_argument(
                kind.name(),
                format!("takes no arguments, got {other:?}"),
            )),
        }
    }

    fn exists_result(&self, desc: &str, count: usize, args: &CallArgs) -> DomResult<AssertionResult> {
        match args {
            CallArgs::None => {
                let expected = format!("Element {desc} exists");
                let actual = if count > 0 {
                    expected.clone()
                } else {
                    count_phrase(desc, 0)
                };
                Ok(stated(count > 0, actual, expected))
            }
            CallArgs::Count(wanted) => Ok(stated(
                count == *wanted,
                count_phrase(desc, count),
                count_phrase(desc, *wanted),
            )),
            other => Err(DomAssertError::invalid_argument(
                "exists",
                format!("expected no arguments or a count, got {other:?}"),
            )),
        }
    }

    fn inspect(
        &self,
        kind: PredicateKind,
        args: &CallArgs,
        desc: &str,
        element: &D::Handle,
    ) -> DomResult<AssertionResult> {
        use PredicateKind as K;

        let state = ElementState::capture(self.dom, element);
        let result = match (kind, args) {
            (K::IsChecked | K::IsNotChecked, CallArgs::None) => {
                flag(desc, "checked", state.checked, kind == K::IsChecked)
            }
            (K::IsFocused | K::IsNotFocused, CallArgs::None) => {
                flag(desc, "focused", state.focused, kind == K::IsFocused)
            }
            (K::IsRequired | K::IsNotRequired, CallArgs::None) => {
                flag(desc, "required", state.required, kind == K::IsRequired)
            }
            (K::IsVisible | K::IsNotVisible, CallArgs::None) => {
                flag(desc, "visible", state.visible, kind == K::IsVisible)
            }
            (K::IsDisabled | K::IsNotDisabled, CallArgs::None) => {
                let disabled = state
                    .disabled
                    .ok_or_else(|| DomAssertError::UnsupportedProperty {
                        property: "disabled".to_string(),
                        element: describe_element(self.dom, element),
                    })?;
                flag(desc, "disabled", disabled, kind == K::IsDisabled)
            }
            (K::HasAttribute, CallArgs::Name(name)) => {
                has_attribute(desc, name, &MatchSpec::Any, state.attribute(name))
            }
            (K::HasAttribute, CallArgs::Attribute { name, spec }) => {
                has_attribute(desc, name, spec, state.attribute(name))
            }
            (K::DoesNotHaveAttribute, CallArgs::Name(name)) => {
                let value = state.attribute(name);
                stated(
                    value.is_none(),
                    attribute_presence(desc, name, value),
                    format!("Element {desc} does not have attribute \"{name}\""),
                )
            }
            (K::HasClass, CallArgs::Name(class)) => AssertionResult::new(
                state.has_class(class),
                state.attribute("class").unwrap_or_default(),
                class.as_str(),
                format!("Element {desc} has CSS class \"{class}\""),
            ),
            (K::DoesNotHaveClass, CallArgs::Name(class)) => AssertionResult::new(
                !state.has_class(class),
                state.attribute("class").unwrap_or_default(),
                format!("not: {class}"),
                format!("Element {desc} does not have CSS class \"{class}\""),
            ),
            (K::HasText, CallArgs::Spec(spec)) => has_text(desc, &state.text, spec),
            (K::HasAnyText, CallArgs::None) => has_text(desc, &state.text, &MatchSpec::Any),
            (K::IncludesText, CallArgs::Substring(needle)) => AssertionResult::new(
                contains(Some(state.text.as_str()), needle),
                state.text.as_str(),
                needle.as_str(),
                format!("Element {desc} has text containing \"{needle}\""),
            ),
            (K::DoesNotIncludeText, CallArgs::Substring(needle)) => {
                let message = format!("Element {desc} does not include text \"{needle}\"");
                AssertionResult::new(
                    !contains(Some(state.text.as_str()), needle),
                    state.text.as_str(),
                    message.as_str(),
                    message.as_str(),
                )
            }
            (K::HasValue, CallArgs::Spec(spec)) => has_value(desc, &state.value, spec),
            (K::HasAnyValue, CallArgs::None) => has_value(desc, &state.value, &MatchSpec::Any),
            (K::HasNoValue, CallArgs::None) => {
                let actual = if state.value.is_empty() {
                    format!("Element {desc} has no value")
                } else {
                    format!("Element {desc} has value {}", json_quote(&state.value))
                };
                stated(
                    state.value.is_empty(),
                    actual,
                    format!("Element {desc} has no value"),
                )
            }
            (K::HasStyle, CallArgs::Styles(styles)) => self.style_result(desc, element, styles)?,
            (kind, other) => {
                return Err(DomAssertError::invalid_argument(
                    kind.name(),
                    format!("arguments do not fit the assertion: {other:?}"),
                ))
            }
        };
        Ok(result)
    }

    fn style_result(
        &self,
        desc: &str,
        element: &D::Handle,
        styles: &BTreeMap<String, String>,
    ) -> DomResult<AssertionResult> {
        if styles.is_empty() {
            return Err(DomAssertError::invalid_argument("hasStyle", "no styles given"));
        }
        // unknown properties serialize as null and never match
        let actual: BTreeMap<&str, Option<String>> = styles
            .keys()
            .map(|property| (property.as_str(), self.dom.computed_style(element, property)))
            .collect();
        let passed = styles.iter().all(|(property, expected)| {
            actual.get(property.as_str()).and_then(Option::as_deref) == Some(expected.as_str())
        });
        let expected = serde_json::to_string(styles)?;
        Ok(AssertionResult::new(
            passed,
            serde_json::to_string(&actual)?,
            expected.as_str(),
            format!("Element {desc} has style {expected}"),
        ))
    }

    fn run(
        &mut self,
        kind: PredicateKind,
        args: CallArgs,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.evaluate(&AssertionCall::new(kind, args).with_message(message))
    }

    // ---- existence ----

    /// Target matches at least one element
    pub fn exists(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::Exists, CallArgs::None, message)
    }

    /// Target matches, optionally exactly `options.count` times
    pub fn exists_with(
        &mut self,
        options: ExistsOptions,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        let args = options.count.map_or(CallArgs::None, CallArgs::Count);
        self.run(PredicateKind::Exists, args, message)
    }

    /// Target matches nothing
    pub fn does_not_exist(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::DoesNotExist, CallArgs::None, message)
    }

    // ---- state ----

    /// `checked` is true
    pub fn is_checked(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsChecked, CallArgs::None, message)
    }

    /// `checked` is false
    pub fn is_not_checked(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsNotChecked, CallArgs::None, message)
    }

    /// Element is the document's active element
    pub fn is_focused(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsFocused, CallArgs::None, message)
    }

    /// Element is not the document's active element
    pub fn is_not_focused(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsNotFocused, CallArgs::None, message)
    }

    /// `required` is true
    pub fn is_required(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsRequired, CallArgs::None, message)
    }

    /// `required` is false
    pub fn is_not_required(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsNotRequired, CallArgs::None, message)
    }

    /// `disabled` is true; errors for elements without the property
    pub fn is_disabled(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsDisabled, CallArgs::None, message)
    }

    /// `disabled` is false; errors for elements without the property
    pub fn is_not_disabled(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsNotDisabled, CallArgs::None, message)
    }

    /// Element is rendered with a non-empty box
    pub fn is_visible(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsVisible, CallArgs::None, message)
    }

    /// Element is not rendered, or does not exist
    pub fn is_not_visible(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::IsNotVisible, CallArgs::None, message)
    }

    // ---- attributes and classes ----

    /// Attribute is present, whatever its value
    pub fn has_attribute(&mut self, name: &str, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::HasAttribute, CallArgs::Name(name.to_string()), message)
    }

    /// Attribute value matches `spec`
    pub fn has_attribute_value(
        &mut self,
        name: &str,
        spec: impl Into<MatchSpec>,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        let args = CallArgs::Attribute {
            name: name.to_string(),
            spec: spec.into(),
        };
        self.run(PredicateKind::HasAttribute, args, message)
    }

    /// Attribute is absent
    pub fn does_not_have_attribute(
        &mut self,
        name: &str,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.run(
            PredicateKind::DoesNotHaveAttribute,
            CallArgs::Name(name.to_string()),
            message,
        )
    }

    /// Alias of [`Self::does_not_have_attribute`]
    pub fn has_no_attribute(&mut self, name: &str, message: Option<&str>) -> DomResult<AssertionResult> {
        self.does_not_have_attribute(name, message)
    }

    /// Alias of [`Self::does_not_have_attribute`]
    pub fn lacks_attribute(&mut self, name: &str, message: Option<&str>) -> DomResult<AssertionResult> {
        self.does_not_have_attribute(name, message)
    }

    /// Class list contains `class`
    pub fn has_class(&mut self, class: &str, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::HasClass, CallArgs::Name(class.to_string()), message)
    }

    /// Class list does not contain `class`
    pub fn does_not_have_class(
        &mut self,
        class: &str,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.run(
            PredicateKind::DoesNotHaveClass,
            CallArgs::Name(class.to_string()),
            message,
        )
    }

    /// Alias of [`Self::does_not_have_class`]
    pub fn has_no_class(&mut self, class: &str, message: Option<&str>) -> DomResult<AssertionResult> {
        self.does_not_have_class(class, message)
    }

    /// Alias of [`Self::does_not_have_class`]
    pub fn lacks_class(&mut self, class: &str, message: Option<&str>) -> DomResult<AssertionResult> {
        self.does_not_have_class(class, message)
    }

    // ---- text ----

    /// Normalized text matches `spec`; literal text is whitespace-collapsed too
    pub fn has_text(
        &mut self,
        spec: impl Into<MatchSpec>,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.run(PredicateKind::HasText, CallArgs::Spec(spec.into()), message)
    }

    /// Alias of [`Self::has_text`]
    pub fn matches_text(
        &mut self,
        spec: impl Into<MatchSpec>,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.has_text(spec, message)
    }

    /// Normalized text is not empty
    pub fn has_any_text(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::HasAnyText, CallArgs::None, message)
    }

    /// Normalized text contains `text` verbatim
    pub fn includes_text(&mut self, text: &str, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(
            PredicateKind::IncludesText,
            CallArgs::Substring(text.to_string()),
            message,
        )
    }

    /// Alias of [`Self::includes_text`]
    pub fn contains_text(&mut self, text: &str, message: Option<&str>) -> DomResult<AssertionResult> {
        self.includes_text(text, message)
    }

    /// Alias of [`Self::includes_text`]
    pub fn has_text_containing(
        &mut self,
        text: &str,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.includes_text(text, message)
    }

    /// Normalized text does not contain `text`
    pub fn does_not_include_text(
        &mut self,
        text: &str,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.run(
            PredicateKind::DoesNotIncludeText,
            CallArgs::Substring(text.to_string()),
            message,
        )
    }

    /// Alias of [`Self::does_not_include_text`]
    pub fn does_not_contain_text(
        &mut self,
        text: &str,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.does_not_include_text(text, message)
    }

    /// Alias of [`Self::does_not_include_text`]
    pub fn does_not_have_text_containing(
        &mut self,
        text: &str,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.does_not_include_text(text, message)
    }

    // ---- value ----

    /// Current value matches `spec`; [`MatchSpec::Any`] requires a non-empty value
    pub fn has_value(
        &mut self,
        spec: impl Into<MatchSpec>,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        self.run(PredicateKind::HasValue, CallArgs::Spec(spec.into()), message)
    }

    /// Current value is not empty
    pub fn has_any_value(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::HasAnyValue, CallArgs::None, message)
    }

    /// Current value is empty
    pub fn has_no_value(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.run(PredicateKind::HasNoValue, CallArgs::None, message)
    }

    /// Alias of [`Self::has_no_value`]
    pub fn lacks_value(&mut self, message: Option<&str>) -> DomResult<AssertionResult> {
        self.has_no_value(message)
    }

    // ---- style ----

    /// Computed style `property` equals `value`
    pub fn has_style(
        &mut self,
        property: &str,
        value: &str,
        message: Option<&str>,
    ) -> DomResult<AssertionResult> {
        let styles = BTreeMap::from([(property.to_string(), value.to_string())]);
        self.run(PredicateKind::HasStyle, CallArgs::Styles(styles), message)
    }

    /// Every listed computed style equals its expected value
    pub fn has_styles<K, V>(
        &mut self,
        styles: impl IntoIterator<Item = (K, V)>,
        message: Option<&str>,
    ) -> DomResult<AssertionResult>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let styles = styles
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.run(PredicateKind::HasStyle, CallArgs::Styles(styles), message)
    }
}
