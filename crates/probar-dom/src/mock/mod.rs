//! In-memory DOM for testing assertions without a browser.
//!
//! [`MockDocument`] parses an HTML fragment with `scraper` and implements
//! [`Dom`](crate::dom::Dom) over it: CSS selector queries, form-control
//! state, focus and a synthetic layout. State pseudo-classes such as
//! `:checked` are not selectors here; assert them with the state checks.
//!
//! ## Example
//!
//! ```rust
//! use probar_dom::mock::MockDocument;
//! use probar_dom::Dom;
//!
//! let doc = MockDocument::parse(r#"<h2 id="title">Welcome</h2>"#);
//! let title = doc.first("#title").unwrap();
//! assert_eq!(doc.text_content(&title), "Welcome");
//! ```

mod document;

pub use document::{MockDocument, NodeId, DEFAULT_BOX};
