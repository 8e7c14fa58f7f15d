//! Element state snapshots.
//!
//! [`ElementState`] is captured fresh for every assertion; nothing here
//! caches DOM reads.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::dom::Dom;

/// Observable facts about one element at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementState {
    /// Rendered with a non-zero box (see [`is_visible`])
    pub visible: bool,
    /// `checked` property
    pub checked: bool,
    /// `disabled` property, `None` when the element has none
    pub disabled: Option<bool>,
    /// `required` property
    pub required: bool,
    /// Element is the document's active element
    pub focused: bool,
    /// Attribute name to value
    pub attributes: BTreeMap<String, String>,
    /// Class tokens
    pub classes: BTreeSet<String>,
    /// Normalized text content (see [`collapse_whitespace`])
    pub text: String,
    /// Current value, empty when the element has none
    pub value: String,
}

impl ElementState {
    /// Read the state of `element`
    pub fn capture<D: Dom>(dom: &D, element: &D::Handle) -> Self {
        let attributes = dom
            .attribute_names(element)
            .into_iter()
            .filter_map(|name| {
                let value = dom.attribute(element, &name)?;
                Some((name, value))
            })
            .collect();
        Self {
            visible: is_visible(dom, element),
            checked: dom.checked(element),
            disabled: dom.disabled(element),
            required: dom.required(element),
            focused: dom.active_element().as_ref() == Some(element),
            attributes,
            classes: dom.class_list(element).into_iter().collect(),
            text: collapse_whitespace(&dom.text_content(element)),
            value: dom.value(element).unwrap_or_default(),
        }
    }

    /// Attribute value if present
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Class membership (exact token match)
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Visibility as jQuery defines it: connected, and either a non-empty
/// offset box or at least one client rect with area.
pub fn is_visible<D: Dom>(dom: &D, element: &D::Handle) -> bool {
    if !dom.is_connected(element) {
        return false;
    }
    let (width, height) = dom.offset_size(element);
    (width > 0.0 && height > 0.0) || dom.client_rects(element).iter().any(|r| r.has_area())
}

/// Collapse runs of ASCII whitespace to one space and trim.
///
/// U+00A0 and other Unicode spaces are kept as-is.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod normalize_tests {
        use super::*;

        #[test]
        fn test_collapse_and_trim() {
            assert_eq!(collapse_whitespace("\n  Welcome to QUnit\n"), "Welcome to QUnit");
            assert_eq!(collapse_whitespace("a\t\tb \r\n c"), "a b c");
            assert_eq!(collapse_whitespace("   "), "");
        }

        #[test]
        fn test_nbsp_is_not_whitespace() {
            assert_eq!(collapse_whitespace(" a\u{a0}\u{a0}b "), "a\u{a0}\u{a0}b");
        }
    }

    #[cfg(feature = "mock")]
    mod capture_tests {
        use super::*;
        use crate::dom::Rect;
        use crate::mock::MockDocument;

        #[test]
        fn test_capture_form_control() {
            let mut doc = MockDocument::parse(
                r#"<input id="a" class="x y" type="checkbox" checked required value="v">"#,
            );
            let input = doc.first("#a").unwrap();
            doc.focus(Some(input));
            let state = ElementState::capture(&doc, &input);
            assert!(state.visible);
            assert!(state.checked);
            assert!(state.required);
            assert!(state.focused);
            assert_eq!(state.disabled, Some(false));
            assert_eq!(state.attribute("type"), Some("checkbox"));
            assert_eq!(state.attribute("required"), Some(""));
            assert!(state.has_class("y"));
            assert!(!state.has_class("x y"));
            assert_eq!(state.value, "v");
        }

        #[test]
        fn test_capture_text_is_normalized() {
            let doc = MockDocument::parse("<h2>\n  Welcome to <b>QUnit</b>\n</h2>");
            let h2 = doc.first("h2").unwrap();
            let state = ElementState::capture(&doc, &h2);
            assert_eq!(state.text, "Welcome to QUnit");
            assert_eq!(state.value, "");
            assert_eq!(state.disabled, None);
            assert!(!state.focused);
        }

        #[test]
        fn test_visibility_rules() {
            let mut doc = MockDocument::parse(
                r#"<div id="box"></div><div id="flat"></div><span id="wrapped"></span>"#,
            );
            let flat = doc.first("#flat").unwrap();
            doc.set_layout(flat, (100.0, 0.0), vec![Rect::sized(100.0, 0.0)]);
            let wrapped = doc.first("#wrapped").unwrap();
            // inline element split across lines: no offset box, but rects have area
            doc.set_layout(wrapped, (0.0, 0.0), vec![Rect::sized(0.0, 0.0), Rect::sized(40.0, 16.0)]);

            assert!(is_visible(&doc, &doc.first("#box").unwrap()));
            assert!(!is_visible(&doc, &flat));
            assert!(is_visible(&doc, &wrapped));

            let detached = doc.first("#box").unwrap();
            doc.detach(detached);
            assert!(!is_visible(&doc, &detached));
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_collapse_is_idempotent(text in "[ a-z\t\n\u{a0}]{0,40}") {
                let once = collapse_whitespace(&text);
                prop_assert_eq!(collapse_whitespace(&once), once.clone());
            }

            #[test]
            fn prop_collapsed_has_no_edge_or_double_spaces(text in "[ a-z\t\n]{0,40}") {
                let collapsed = collapse_whitespace(&text);
                prop_assert!(!collapsed.starts_with(' '));
                prop_assert!(!collapsed.ends_with(' '));
                prop_assert!(!collapsed.contains("  "));
                prop_assert!(!collapsed.contains('\n'));
            }
        }
    }
}
