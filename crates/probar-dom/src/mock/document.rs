//! In-memory document implementing [`Dom`].
//!
//! Markup is parsed by html5ever (through `scraper`) and selectors are
//! matched by `scraper::Selector`. The parsed tree only holds markup; the
//! state a page changes at runtime (control values, checkedness, focus,
//! layout) lives in side tables keyed by [`NodeId`].
//!
//! Layout is synthetic: a connected element that is not hidden (via the
//! `hidden` attribute or an inline `display: none` on itself or an ancestor)
//! gets [`DEFAULT_BOX`], unless a layout was set explicitly with
//! [`MockDocument::set_layout`].

use std::collections::HashMap;

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

use crate::dom::{Dom, Rect};
use crate::result::{DomAssertError, DomResult};

/// Box given to rendered elements without an explicit layout
pub const DEFAULT_BOX: Rect = Rect::new(0.0, 0.0, 100.0, 18.0);

/// Elements that carry a `disabled` property
const DISABLEABLE: &[&str] = &[
    "button", "fieldset", "input", "optgroup", "option", "select", "textarea",
];

/// Elements that carry a `required` property
const REQUIRABLE: &[&str] = &["input", "select", "textarea"];

/// Tag reported for handles that do not name an element of this document
const UNKNOWN_TAG: &str = "#unknown";

/// Node identifier within a [`MockDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(ego_tree::NodeId);

#[derive(Debug, Clone)]
struct Layout {
    offset: (f64, f64),
    rects: Vec<Rect>,
}

/// Runtime state that diverges from the markup
#[derive(Debug, Clone, Default)]
struct ControlState {
    /// Dirty value; `None` means "derive from markup"
    value: Option<String>,
    /// Checkedness; `None` means "the `checked` attribute"
    checked: Option<bool>,
    layout: Option<Layout>,
}

/// Parsed HTML fragment plus runtime state
#[derive(Debug, Clone)]
pub struct MockDocument {
    html: Html,
    root: ego_tree::NodeId,
    controls: HashMap<NodeId, ControlState>,
    active: Option<NodeId>,
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDocument {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::parse("")
    }

    /// Create a document from an HTML fragment.
    ///
    /// Parsing never fails; malformed markup is recovered the way a browser
    /// recovers it.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_fragment(markup);
        let root = html.root_element().id();
        Self {
            html,
            root,
            controls: HashMap::new(),
            active: None,
        }
    }

    /// The element every query is scoped under by default
    #[must_use]
    pub const fn document(&self) -> NodeId {
        NodeId(self.root)
    }

    /// Parse `markup` and append it under `parent`; unknown parents are ignored
    pub fn append_html(&mut self, parent: NodeId, markup: &str) {
        if self.element(parent).is_none() {
            return;
        }
        let fragment = Html::parse_fragment(markup);
        for child in fragment.root_element().children() {
            self.graft(parent.0, child);
        }
    }

    fn graft(&mut self, parent: ego_tree::NodeId, source: NodeRef<'_, Node>) {
        let Some(mut parent) = self.html.tree.get_mut(parent) else {
            return;
        };
        let id = parent.append(source.value().clone()).id();
        for child in source.children() {
            self.graft(id, child);
        }
    }

    /// Remove `node` from its parent; the node stays usable as a reference.
    ///
    /// The document element itself cannot be detached.
    pub fn detach(&mut self, node: NodeId) {
        if node.0 == self.root {
            return;
        }
        if let Some(mut node) = self.html.tree.get_mut(node.0) {
            node.detach();
        }
        if self.active.is_some_and(|active| !self.is_connected(&active)) {
            self.active = None;
        }
    }

    fn element(&self, node: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(node.0).and_then(ElementRef::wrap)
    }

    fn control_mut(&mut self, node: NodeId) -> Option<&mut ControlState> {
        self.element(node)?;
        Some(self.controls.entry(node).or_default())
    }

    /// Set the current value of a form control
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(control) = self.control_mut(node) {
            control.value = Some(value.to_string());
        }
    }

    /// Set the checked state of an input
    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if let Some(control) = self.control_mut(node) {
            control.checked = Some(checked);
        }
    }

    /// Focus an element (or clear focus with `None`)
    pub fn focus(&mut self, node: Option<NodeId>) {
        self.active = node.filter(|n| self.element(*n).is_some() && self.is_connected(n));
    }

    /// Override the rendered box and client rects of an element
    pub fn set_layout(&mut self, node: NodeId, offset: (f64, f64), rects: Vec<Rect>) {
        if let Some(control) = self.control_mut(node) {
            control.layout = Some(Layout { offset, rects });
        }
    }

    /// All elements under the document matching `selector`
    ///
    /// Invalid selectors yield an empty list; use [`Dom::query_selector_all`]
    /// to observe parse errors.
    #[must_use]
    pub fn all(&self, selector: &str) -> Vec<NodeId> {
        self.query_selector_all(&self.document(), selector)
            .unwrap_or_default()
    }

    /// First element under the document matching `selector`
    #[must_use]
    pub fn first(&self, selector: &str) -> Option<NodeId> {
        self.all(selector).into_iter().next()
    }

    fn is_hidden(&self, element: ElementRef<'_>) -> bool {
        std::iter::once(*element)
            .chain(element.ancestors())
            .filter_map(ElementRef::wrap)
            .any(|el| {
                el.value().attr("hidden").is_some()
                    || inline_style(el, "display").as_deref() == Some("none")
            })
    }

    fn layout(&self, node: NodeId) -> Layout {
        let collapsed = Layout {
            offset: (0.0, 0.0),
            rects: Vec::new(),
        };
        let Some(element) = self.element(node) else {
            return collapsed;
        };
        if !self.is_connected(&node) || self.is_hidden(element) {
            return collapsed;
        }
        self.controls
            .get(&node)
            .and_then(|control| control.layout.clone())
            .unwrap_or(Layout {
                offset: (DEFAULT_BOX.width, DEFAULT_BOX.height),
                rects: vec![DEFAULT_BOX],
            })
    }

    fn default_value(&self, element: ElementRef<'_>) -> Option<String> {
        let attr = |name| element.value().attr(name);
        match element.value().name() {
            "input" | "button" | "data" | "li" | "meter" | "progress" | "param" => {
                Some(attr("value").unwrap_or_default().to_string())
            }
            "option" => Some(
                attr("value").map_or_else(|| element.text().collect(), str::to_string),
            ),
            "textarea" => Some(element.text().collect()),
            "select" => {
                let options: Vec<ElementRef<'_>> = element
                    .descendent_elements()
                    .filter(|el| el.value().name() == "option")
                    .collect();
                let chosen = options
                    .iter()
                    .find(|option| option.value().attr("selected").is_some())
                    .or_else(|| options.first());
                Some(
                    chosen
                        .and_then(|option| self.value(&NodeId(option.id())))
                        .unwrap_or_default(),
                )
            }
            _ => None,
        }
    }
}

/// Value of a property declared in the element's inline `style` attribute
fn inline_style(element: ElementRef<'_>, property: &str) -> Option<String> {
    let style = element.value().attr("style")?;
    let wanted = to_kebab_case(property);
    style.split(';').find_map(|declaration| {
        let (name, value) = declaration.split_once(':')?;
        name.trim().eq_ignore_ascii_case(&wanted).then(|| value.trim().to_string())
    })
}

/// `backgroundColor` -> `background-color`; kebab-case passes through
fn to_kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl Dom for MockDocument {
    type Handle = NodeId;

    fn root(&self) -> NodeId {
        self.document()
    }

    fn query_selector_all(&self, root: &NodeId, selector: &str) -> DomResult<Vec<NodeId>> {
        let parsed = Selector::parse(selector).map_err(|e| DomAssertError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
        let Some(scope) = self.element(*root) else {
            return Ok(Vec::new());
        };
        Ok(scope.select(&parsed).map(|el| NodeId(el.id())).collect())
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.element(*element)
            .map_or_else(|| UNKNOWN_TAG.to_string(), |el| el.value().name().to_string())
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        self.element(*element)?
            .value()
            .attr(&name)
            .map(str::to_string)
    }

    fn attribute_names(&self, element: &NodeId) -> Vec<String> {
        self.element(*element)
            .map(|el| el.value().attrs().map(|(name, _)| name.to_string()).collect())
            .unwrap_or_default()
    }

    fn text_content(&self, element: &NodeId) -> String {
        self.element(*element)
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }

    fn value(&self, element: &NodeId) -> Option<String> {
        let el = self.element(*element)?;
        match self.controls.get(element).and_then(|c| c.value.clone()) {
            Some(value) => Some(value),
            None => self.default_value(el),
        }
    }

    fn checked(&self, element: &NodeId) -> bool {
        let Some(el) = self.element(*element) else {
            return false;
        };
        el.value().name() == "input"
            && self
                .controls
                .get(element)
                .and_then(|c| c.checked)
                .unwrap_or_else(|| el.value().attr("checked").is_some())
    }

    fn disabled(&self, element: &NodeId) -> Option<bool> {
        let el = self.element(*element)?;
        DISABLEABLE
            .contains(&el.value().name())
            .then(|| el.value().attr("disabled").is_some())
    }

    fn required(&self, element: &NodeId) -> bool {
        self.element(*element).is_some_and(|el| {
            REQUIRABLE.contains(&el.value().name()) && el.value().attr("required").is_some()
        })
    }

    fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    fn is_connected(&self, element: &NodeId) -> bool {
        self.html.tree.get(element.0).is_some_and(|node| {
            node.id() == self.root || node.ancestors().any(|a| a.id() == self.root)
        })
    }

    fn offset_size(&self, element: &NodeId) -> (f64, f64) {
        self.layout(*element).offset
    }

    fn client_rects(&self, element: &NodeId) -> Vec<Rect> {
        self.layout(*element).rects
    }

    fn computed_style(&self, element: &NodeId, property: &str) -> Option<String> {
        let el = self.element(*element)?;
        if let Some(value) = inline_style(el, property) {
            return Some(value);
        }
        (to_kebab_case(property) == "display").then(|| {
            if self.is_hidden(el) {
                "none".to_string()
            } else {
                "block".to_string()
            }
        })
    }
}
