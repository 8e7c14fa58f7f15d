//! Dynamic assertion calls.
//!
//! The dynamic API takes an assertion name and a JSON argument list whose
//! shape depends on the assertion (`exists({count: 2}, "msg")` vs
//! `exists("msg")`, `hasStyle("color", "red")` vs `hasStyle({...})`).
//! [`AssertionCall::parse`] normalizes these once so evaluation never
//! inspects raw arguments.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::matcher::MatchSpec;
use crate::predicate::PredicateKind;
use crate::result::{DomAssertError, DomResult};

/// Predicate-specific arguments
#[derive(Debug, Clone, PartialEq)]
pub enum CallArgs {
    /// No arguments besides the message
    None,
    /// `exists({count})`
    Count(usize),
    /// Attribute or class name
    Name(String),
    /// `hasAttribute(name, spec)`
    Attribute {
        /// Attribute name
        name: String,
        /// Expected value
        spec: MatchSpec,
    },
    /// Expected text or value
    Spec(MatchSpec),
    /// Substring for the text containment predicates
    Substring(String),
    /// Expected computed styles
    Styles(BTreeMap<String, String>),
}

/// A normalized assertion call
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionCall {
    /// Canonical predicate
    pub kind: PredicateKind,
    /// Arguments
    pub args: CallArgs,
    /// Custom message replacing the generated one
    pub message: Option<String>,
}

impl AssertionCall {
    /// Create a call
    #[must_use]
    pub fn new(kind: PredicateKind, args: CallArgs) -> Self {
        Self {
            kind,
            args,
            message: None,
        }
    }

    /// Set the custom message
    #[must_use]
    pub fn with_message(mut self, message: Option<&str>) -> Self {
        self.message = message.map(str::to_string);
        self
    }

    /// Parse a call by name (canonical or alias) and JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns [`DomAssertError::UnknownAssertion`] for unrecognized names,
    /// [`DomAssertError::InvalidArgument`] for malformed arguments and
    /// [`DomAssertError::InvalidPattern`] for patterns that do not compile
    pub fn parse(name: &str, args: &[Value]) -> DomResult<Self> {
        let kind = PredicateKind::from_name(name).ok_or_else(|| {
            DomAssertError::UnknownAssertion {
                name: name.to_string(),
            }
        })?;
        let mut reader = ArgReader {
            kind,
            args,
            pos: 0,
        };

        let call_args = match kind {
            PredicateKind::Exists => match reader.peek() {
                Some(Value::Object(options)) => {
                    reader.pos += 1;
                    CallArgs::Count(reader.count_option(options)?)
                }
                _ => CallArgs::None,
            },
            PredicateKind::DoesNotExist
            | PredicateKind::IsChecked
            | PredicateKind::IsNotChecked
            | PredicateKind::IsFocused
            | PredicateKind::IsNotFocused
            | PredicateKind::IsRequired
            | PredicateKind::IsNotRequired
            | PredicateKind::IsDisabled
            | PredicateKind::IsNotDisabled
            | PredicateKind::IsVisible
            | PredicateKind::IsNotVisible
            | PredicateKind::HasAnyText
            | PredicateKind::HasAnyValue
            | PredicateKind::HasNoValue => CallArgs::None,
            PredicateKind::HasAttribute => {
                let name = reader.required_string("attribute name")?;
                match reader.optional_spec()? {
                    Some(spec) => CallArgs::Attribute { name, spec },
                    None => CallArgs::Name(name),
                }
            }
            PredicateKind::DoesNotHaveAttribute => {
                CallArgs::Name(reader.required_string("attribute name")?)
            }
            PredicateKind::HasClass | PredicateKind::DoesNotHaveClass => {
                CallArgs::Name(reader.required_string("class name")?)
            }
            PredicateKind::HasText | PredicateKind::HasValue => {
                CallArgs::Spec(reader.optional_spec()?.unwrap_or(MatchSpec::Any))
            }
            PredicateKind::IncludesText | PredicateKind::DoesNotIncludeText => {
                CallArgs::Substring(reader.required_string("text")?)
            }
            PredicateKind::HasStyle => match reader.peek() {
                Some(Value::Object(styles)) => {
                    reader.pos += 1;
                    CallArgs::Styles(reader.style_map(styles)?)
                }
                _ => {
                    let property = reader.required_string("style property")?;
                    let value = reader.required_style_value()?;
                    CallArgs::Styles(BTreeMap::from([(property, value)]))
                }
            },
        };

        let message = reader.message()?;
        reader.finish()?;
        Ok(Self {
            kind,
            args: call_args,
            message,
        })
    }
}

struct ArgReader<'a> {
    kind: PredicateKind,
    args: &'a [Value],
    pos: usize,
}

impl<'a> ArgReader<'a> {
    fn error(&self, message: impl Into<String>) -> DomAssertError {
        DomAssertError::invalid_argument(self.kind.name(), message)
    }

    fn peek(&self) -> Option<&'a Value> {
        self.args.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Value> {
        let value = self.args.get(self.pos)?;
        self.pos += 1;
        Some(value)
    }

    fn required_string(&mut self, what: &str) -> DomResult<String> {
        match self.next() {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(self.error(format!("{what} must be a string, got {other}"))),
            None => Err(self.error(format!("missing {what}"))),
        }
    }

    /// Spec argument; `null` or a missing argument means "not given"
    fn optional_spec(&mut self) -> DomResult<Option<MatchSpec>> {
        match self.peek() {
            None => Ok(None),
            Some(Value::Null) => {
                self.pos += 1;
                Ok(None)
            }
            Some(value) => {
                let spec = MatchSpec::from_json(value)?.ok_or_else(|| {
                    self.error(format!(
                        "expected a string, {{\"any\": true}} or {{\"pattern\": ...}}, got {value}"
                    ))
                })?;
                self.pos += 1;
                Ok(Some(spec))
            }
        }
    }

    fn count_option(&self, options: &serde_json::Map<String, Value>) -> DomResult<usize> {
        if let Some(key) = options.keys().find(|key| *key != "count") {
            return Err(self.error(format!("unknown option `{key}`")));
        }
        let count = options
            .get("count")
            .ok_or_else(|| self.error("options object requires `count`"))?;
        count
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| self.error(format!("count must be a non-negative integer, got {count}")))
    }

    fn style_value(&self, property: &str, value: &Value) -> DomResult<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(self.error(format!(
                "style `{property}` must be a string or number, got {other}"
            ))),
        }
    }

    fn required_style_value(&mut self) -> DomResult<String> {
        let value = self.next().ok_or_else(|| self.error("missing style value"))?;
        self.style_value("value", value)
    }

    fn style_map(&self, styles: &serde_json::Map<String, Value>) -> DomResult<BTreeMap<String, String>> {
        if styles.is_empty() {
            return Err(self.error("style object is empty"));
        }
        styles
            .iter()
            .map(|(property, value)| Ok((property.clone(), self.style_value(property, value)?)))
            .collect()
    }

    fn message(&mut self) -> DomResult<Option<String>> {
        match self.peek() {
            None => Ok(None),
            Some(Value::Null) => {
                self.pos += 1;
                Ok(None)
            }
            Some(Value::String(message)) => {
                self.pos += 1;
                Ok(Some(message.clone()))
            }
            Some(other) => Err(self.error(format!("message must be a string, got {other}"))),
        }
    }

    fn finish(&self) -> DomResult<()> {
        if self.pos < self.args.len() {
            return Err(self.error(format!(
                "expected at most {} argument(s), got {}",
                self.pos,
                self.args.len()
            )));
        }
        Ok(())
    }
}
