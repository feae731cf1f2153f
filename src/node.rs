//! The markup tree: nodes, their children, and the ways to build them.

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, instrument};

use crate::attr::{merge_class_tokens, remove_class_tokens, AttrValue, Attributes, ClassRemoval};
use crate::config::RenderConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::render::{Renderer, Style};
use crate::tag::TagDescriptor;

/// Tag name used when neither the descriptor nor the instance provides one
pub const FALLBACK_TAG_NAME: &str = "node";

/// Text that is written verbatim, without escaping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RawText(String);

impl RawText {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in a node's child list
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    /// Escaped on render
    Text(String),
    Raw(RawText),
    Element(Box<Node>),
}

/// Conversion into a single, possibly absent, child.
pub trait IntoChild {
    fn into_child(self) -> Option<Child>;
}

/// Conversion into a complete child list for [`Node::children`].
pub trait IntoChildren {
    fn into_children(self) -> Vec<Child>;
}

impl IntoChild for Child {
    fn into_child(self) -> Option<Child> {
        Some(self)
    }
}

impl IntoChild for Node {
    fn into_child(self) -> Option<Child> {
        Some(Child::Element(Box::new(self)))
    }
}

impl IntoChild for RawText {
    fn into_child(self) -> Option<Child> {
        Some(Child::Raw(self))
    }
}

impl IntoChild for &str {
    fn into_child(self) -> Option<Child> {
        Some(Child::Text(self.to_string()))
    }
}

impl IntoChild for String {
    fn into_child(self) -> Option<Child> {
        Some(Child::Text(self))
    }
}

impl IntoChild for &String {
    fn into_child(self) -> Option<Child> {
        Some(Child::Text(self.clone()))
    }
}

impl<T: IntoChild> IntoChild for Option<T> {
    fn into_child(self) -> Option<Child> {
        self.and_then(IntoChild::into_child)
    }
}

macro_rules! single_child {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoChildren for $ty {
                fn into_children(self) -> Vec<Child> {
                    self.into_child().into_iter().collect()
                }
            }
        )*
    };
}

single_child!(Child, Node, RawText, &str, String, &String);

/// `None` clears the children; `Some(child)` is a one-element list.
impl<T: IntoChild> IntoChildren for Option<T> {
    fn into_children(self) -> Vec<Child> {
        self.into_child().into_iter().collect()
    }
}

impl<T: IntoChild> IntoChildren for Vec<T> {
    fn into_children(self) -> Vec<Child> {
        self.into_iter().filter_map(IntoChild::into_child).collect()
    }
}

impl<T: IntoChild, const N: usize> IntoChildren for [T; N] {
    fn into_children(self) -> Vec<Child> {
        self.into_iter().filter_map(IntoChild::into_child).collect()
    }
}

impl<T: IntoChild> FromIterator<T> for Children {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(IntoChild::into_child).collect())
    }
}

/// A child list collected from an iterator, with absent entries dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Children(Vec<Child>);

impl IntoChildren for Children {
    fn into_children(self) -> Vec<Child> {
        self.0
    }
}

/// Build a child list from values of different kinds.
///
/// ```
/// use tagic::{children, html, RawText};
///
/// let list = html::ul().children(children![
///     html::li().children("one"),
///     None::<&str>,
///     RawText::new("<li>two</li>"),
/// ]);
/// assert_eq!(list.render().unwrap(), "<ul><li>one</li><li>two</li></ul>");
/// ```
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {
        {
            let list: ::std::vec::Vec<::std::option::Option<$crate::Child>> =
                ::std::vec![$($crate::IntoChild::into_child($child)),*];
            list
        }
    };
}

/// One argument of the dynamic constructor [`Node::from_args`]
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Attr(String, Option<AttrValue>),
    Data(String, AttrValue),
    Aria(String, AttrValue),
    /// Runtime tag name, see [`Node::named`]
    Name(Cow<'static, str>),
    /// Document root flag, see [`Node::root`]
    Root(bool),
    /// Children given by keyword
    Children(Vec<Child>),
    /// Content given positionally; always rejected
    Content(Option<Child>),
}

impl Arg {
    pub fn attr(name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self::Attr(name.into(), Some(value.into()))
    }

    pub fn data(key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self::Data(key.into(), value.into())
    }

    pub fn aria(key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self::Aria(key.into(), value.into())
    }

    pub fn name(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Name(name.into())
    }

    pub fn children(children: impl IntoChildren) -> Self {
        Self::Children(children.into_children())
    }

    pub fn content(content: impl IntoChild) -> Self {
        Self::Content(content.into_child())
    }
}

/// An element in the markup tree.
///
/// A node owns its attributes and children. Rendering never modifies it, so one
/// tree can be rendered any number of times with different configurations.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    tag: &'static TagDescriptor,
    name: Option<Cow<'static, str>>,
    root: bool,
    attributes: Attributes,
    children: Vec<Child>,
}

impl Node {
    pub fn new(tag: &'static TagDescriptor) -> Self {
        Self {
            tag,
            name: None,
            root: false,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// A node whose tag name is chosen at runtime.
    ///
    /// An empty `name` falls back to the descriptor's name.
    pub fn named(tag: &'static TagDescriptor, name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        let mut node = Self::new(tag);
        node.name = (!name.is_empty()).then_some(name);
        node
    }

    /// Build a node from attribute-style arguments.
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::PositionalContent`] if any argument is positional
    /// content; content must be passed through [`Arg::Children`].
    pub fn from_args(
        tag: &'static TagDescriptor,
        args: impl IntoIterator<Item = Arg>,
    ) -> Result<Self> {
        let mut node = Self::new(tag);
        for arg in args {
            match arg {
                Arg::Attr(name, value) => node.set_attr(&name, value),
                Arg::Data(key, value) => node.attributes.set_data(key, value),
                Arg::Aria(key, value) => node.attributes.set_aria(key, value),
                Arg::Name(name) => node.name = (!name.is_empty()).then_some(name),
                Arg::Root(root) => node.root = root,
                Arg::Children(children) => node.children = children,
                Arg::Content(_) => {
                    debug!(tag = node.tag_name(), "rejecting positional content");
                    return Err(Error::new(ErrorKind::PositionalContent {
                        tag: node.tag_name().to_string(),
                    }));
                }
            }
        }
        Ok(node)
    }

    pub fn tag_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.tag.name)
            .unwrap_or(FALLBACK_TAG_NAME)
    }

    pub fn descriptor(&self) -> &'static TagDescriptor {
        self.tag
    }

    /// Flag this node as a document root, which prefixes it with an XML declaration.
    pub fn root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }

    pub fn is_root(&self) -> bool {
        self.root
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, Some(value.into()));
        self
    }

    /// Like [`Node::attr`]; `None` leaves the attribute unset.
    pub fn maybe_attr<V: Into<AttrValue>>(mut self, name: &str, value: Option<V>) -> Self {
        self.set_attr(name, value.map(Into::into));
        self
    }

    pub fn set_attr(&mut self, name: &str, value: Option<AttrValue>) {
        self.attributes.set(self.tag, name, value);
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(self.tag, name)
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.set_attr(name, None);
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set_data(key, value.into());
        self
    }

    pub fn aria(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set_aria(key, value.into());
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id.into())
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class.into())
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.attr("title", title.into())
    }

    /// Replace the children; absent entries are dropped.
    pub fn children(mut self, children: impl IntoChildren) -> Self {
        self.set_children(children);
        self
    }

    pub fn set_children(&mut self, children: impl IntoChildren) {
        self.children = children.into_children();
    }

    pub fn push_child(&mut self, child: impl IntoChild) {
        if let Some(child) = child.into_child() {
            self.children.push(child);
        }
    }

    pub fn child_nodes(&self) -> &[Child] {
        &self.children
    }

    /// Add class names, keeping each token once in first-seen order.
    pub fn add_class(&mut self, names: &[&str]) -> &mut Self {
        let merged = merge_class_tokens(self.get_attr("class"), names);
        self.set_attr("class", merged.map(AttrValue::Str));
        self
    }

    /// Remove class names; the attribute disappears once no names are left.
    pub fn remove_class(&mut self, names: &[&str]) -> &mut Self {
        match remove_class_tokens(self.get_attr("class"), names) {
            ClassRemoval::Unchanged => {}
            ClassRemoval::Remaining(class) => self.set_attr("class", Some(AttrValue::Str(class))),
            ClassRemoval::Emptied => self.remove_attr("class"),
        }
        self
    }

    /// Render without added whitespace, using the global configuration.
    pub fn render(&self) -> Result<String> {
        self.render_with(&RenderConfig::global(), Style::Compact)
    }

    /// Render with newlines and indentation, using the global configuration.
    pub fn render_pretty(&self) -> Result<String> {
        self.render_with(&RenderConfig::global(), Style::Pretty)
    }

    #[instrument(
        level = "debug",
        skip_all,
        fields(tag = self.tag_name(), style = ?style)
    )]
    pub fn render_with(&self, config: &RenderConfig, style: Style) -> Result<String> {
        Renderer::new(config, style).render(self)
    }
}

/// Compact rendering with the global configuration.
///
/// Fails like [`Node::render`] when the tree breaks an element content rule.
impl TryFrom<&Node> for String {
    type Error = Error;

    fn try_from(node: &Node) -> Result<Self> {
        node.render()
    }
}

/// Children are dropped from a work list so that deep trees do not recurse.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Child::Element(mut node) = child {
                pending.append(&mut node.children);
            }
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Self::Element(Box::new(node))
    }
}

impl From<RawText> for Child {
    fn from(raw: RawText) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
