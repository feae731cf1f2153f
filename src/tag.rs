//! Static per-tag descriptors consumed by the render pipeline.

use std::borrow::Cow;

use crate::node::{IntoChildren, Node};

/// A typed attribute slot declared by a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as written by callers, e.g. `class_` or `accept_charset`
    pub field: &'static str,
    /// Explicit rendered name, bypassing the underscore rules
    pub rename: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(field: &'static str) -> Self {
        Self {
            field,
            rename: None,
        }
    }

    pub const fn renamed(field: &'static str, attr: &'static str) -> Self {
        Self {
            field,
            rename: Some(attr),
        }
    }

    /// The attribute name written to the output.
    pub fn attr_name(&self) -> Cow<'static, str> {
        match self.rename {
            Some(name) => Cow::Borrowed(name),
            None => attribute_name(self.field),
        }
    }

    /// Whether `name` addresses this field, either by field or rendered name.
    pub fn matches(&self, name: &str) -> bool {
        self.field == name || self.attr_name() == name
    }
}

/// Transform a field name into an attribute name.
///
/// A trailing underscore is dropped (`class_` -> `class`) and the remaining
/// underscores become hyphens (`accept_charset` -> `accept-charset`).
pub fn attribute_name(field: &'static str) -> Cow<'static, str> {
    let trimmed = field.strip_suffix('_').unwrap_or(field);
    if trimmed.contains('_') {
        Cow::Owned(trimmed.replace('_', "-"))
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Everything the renderer needs to know about a kind of element.
#[derive(Debug, PartialEq, Eq)]
pub struct TagDescriptor {
    /// Fixed tag name; `None` for tags named at runtime
    pub name: Option<&'static str>,
    /// Attributes shared by a whole family of tags, rendered first
    pub globals: &'static [FieldSpec],
    /// Tag-specific attributes
    pub fields: &'static [FieldSpec],
    /// The element may never have content
    pub void: bool,
    /// The element body is text only
    pub raw_content: bool,
    /// Render an empty element as `<tag></tag>` instead of `<tag />`
    pub expand_empty: bool,
    /// Prefix the outermost element with an HTML document type declaration
    pub doctype: bool,
}

impl TagDescriptor {
    /// A descriptor with no fields and no special element behaviour.
    pub const fn plain(name: Option<&'static str>) -> Self {
        Self {
            name,
            globals: &[],
            fields: &[],
            void: false,
            raw_content: false,
            expand_empty: false,
            doctype: false,
        }
    }

    /// Typed fields in render order.
    pub fn all_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.globals.iter().chain(self.fields.iter())
    }

    /// Index of the typed field addressed by `name`.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.all_fields().position(|spec| spec.matches(name))
    }

    pub fn field_count(&self) -> usize {
        self.globals.len() + self.fields.len()
    }

    /// An empty node of this kind.
    pub fn node(&'static self) -> Node {
        Node::new(self)
    }

    /// A node of this kind holding `children`.
    pub fn with(&'static self, children: impl IntoChildren) -> Node {
        Node::new(self).children(children)
    }
}
