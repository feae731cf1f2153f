//! Generic XML elements whose tag names are chosen at runtime.
//!
//! ```
//! use tagic::xml;
//!
//! let doc = xml::document("feed").children(xml::element("entry").attr("id", "1"));
//! assert_eq!(
//!     doc.render().unwrap(),
//!     "<?xml version='1.0' encoding='UTF-8' ?>\n<feed><entry id=\"1\" /></feed>"
//! );
//! ```

use std::borrow::Cow;

use crate::node::Node;
use crate::tag::TagDescriptor;

/// Descriptor shared by every XML element; unnamed elements render as `<XML />`
pub static XML: TagDescriptor = TagDescriptor::plain(Some("XML"));

/// An XML element named `name`.
pub fn element(name: impl Into<Cow<'static, str>>) -> Node {
    Node::named(&XML, name)
}

/// An XML element that is written with a leading XML declaration.
pub fn document(name: impl Into<Cow<'static, str>>) -> Node {
    element(name).root(true)
}
