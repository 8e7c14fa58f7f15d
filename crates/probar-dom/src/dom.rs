//! DOM capability consumed by the assertion engine.
//!
//! The engine never walks a document itself. Querying and property reads go
//! through [`Dom`], so the same assertions run against a real browser bridge
//! or the in-memory [`MockDocument`](crate::mock::MockDocument).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::result::DomResult;

/// A rectangle in CSS pixels (bounding box or client rect)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin
    #[must_use]
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// True when both sides are non-zero
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }
}

/// Read access to a document.
///
/// `Handle` identifies an element. Two handles compare equal iff they refer
/// to the same node.
pub trait Dom {
    /// Element reference
    type Handle: Clone + PartialEq + Debug;

    /// The element selectors are scoped under by default
    fn root(&self) -> Self::Handle;

    /// All elements under `root` matching `selector`, in document order.
    ///
    /// An empty vector is a normal outcome. Only syntax errors are `Err`.
    fn query_selector_all(&self, root: &Self::Handle, selector: &str)
        -> DomResult<Vec<Self::Handle>>;

    /// Lower-case tag name
    fn tag_name(&self, element: &Self::Handle) -> String;

    /// Attribute value, `None` when the attribute is not present
    fn attribute(&self, element: &Self::Handle, name: &str) -> Option<String>;

    /// Names of all attributes present on the element
    fn attribute_names(&self, element: &Self::Handle) -> Vec<String>;

    /// Class list tokens in attribute order
    fn class_list(&self, element: &Self::Handle) -> Vec<String> {
        self.attribute(element, "class")
            .map(|classes| {
                classes
                    .split_ascii_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Raw `textContent` of the element and its descendants
    fn text_content(&self, element: &Self::Handle) -> String;

    /// Current `value` of input-like elements, `None` for other elements
    fn value(&self, element: &Self::Handle) -> Option<String>;

    /// `checked` state (false for elements that cannot be checked)
    fn checked(&self, element: &Self::Handle) -> bool;

    /// `disabled` state, `None` for elements without a disabled property
    fn disabled(&self, element: &Self::Handle) -> Option<bool>;

    /// `required` state
    fn required(&self, element: &Self::Handle) -> bool;

    /// Currently focused element of the document
    fn active_element(&self) -> Option<Self::Handle>;

    /// Whether the element is attached to the document
    fn is_connected(&self, element: &Self::Handle) -> bool;

    /// `offsetWidth` x `offsetHeight` of the rendered box
    fn offset_size(&self, element: &Self::Handle) -> (f64, f64);

    /// Client rectangles of the element's boxes
    fn client_rects(&self, element: &Self::Handle) -> Vec<Rect>;

    /// Computed style value for a property (camelCase or kebab-case)
    fn computed_style(&self, element: &Self::Handle, property: &str) -> Option<String>;
}

/// Human-readable description of an element: `tag#id.class1.class2`
pub fn describe_element<D: Dom>(dom: &D, element: &D::Handle) -> String {
    let mut description = dom.tag_name(element);
    if let Some(id) = dom.attribute(element, "id").filter(|id| !id.is_empty()) {
        description.push('#');
        description.push_str(&id);
    }
    for class in dom.class_list(element) {
        description.push('.');
        description.push_str(&class);
    }
    description
}
