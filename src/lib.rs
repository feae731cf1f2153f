//! tagic: declarative HTML, XHTML and XML construction
//!
//! This crate provides functionality to:
//! - Build element trees from attribute-bearing nodes
//! - Render them compactly or indented
//! - Enforce void and raw-content element rules while rendering
//! - Switch boolean attributes to strict XHTML form
//!
//! # Examples
//! ```
//! use tagic::html::{br, div, p, span};
//! use tagic::{children, Result};
//!
//! fn example() -> Result<()> {
//!     let tree = div().id("foo").children(p().children(children![
//!         "some text",
//!         br(),
//!         span().children("more"),
//!     ]));
//!     assert_eq!(
//!         tree.render()?,
//!         r#"<div id="foo"><p>some text<br /><span>more</span></p></div>"#
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod attr;
pub mod config;
pub mod error;
pub mod html;
pub mod node;
pub mod render;
pub mod tag;
pub mod xml;

// Re-exports
pub use attr::{AttrValue, Attributes};
pub use config::RenderConfig;
pub use error::{Error, ErrorKind, Result};
pub use node::{Arg, Child, Children, IntoChild, IntoChildren, Node, RawText};
pub use render::{Renderer, Style};
pub use tag::{FieldSpec, TagDescriptor};
