//! The serialization pipeline shared by every node kind.

mod escape;

pub use self::escape::escape_text;

use tracing::{debug, trace, warn};

use crate::attr::AttrValue;
use crate::config::RenderConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::node::{Child, Node};

pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8' ?>\n";
pub const HTML_DOCTYPE: &str = "<!DOCTYPE html>\n";
pub const XHTML_PROLOG: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n",
    "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.1//EN\" ",
    "\"http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd\">\n",
);

/// Output layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// No inserted whitespace
    #[default]
    Compact,
    /// One element or text per line, indented by depth
    Pretty,
}

/// Writes one tree into a string under a fixed configuration.
#[derive(Debug)]
pub struct Renderer<'c> {
    config: &'c RenderConfig,
    style: Style,
    out: String,
}

impl<'c> Renderer<'c> {
    pub fn new(config: &'c RenderConfig, style: Style) -> Self {
        Self {
            config,
            style,
            out: String::new(),
        }
    }

    /// Render `node` as the outermost element, including its document prolog.
    pub fn render(mut self, node: &Node) -> Result<String> {
        self.config.validate()?;
        debug!(
            tag = node.tag_name(),
            style = ?self.style,
            strict_xhtml = self.config.strict_xhtml,
            "rendering markup tree"
        );

        let prolog = self.prolog(node);
        self.out.push_str(prolog);
        self.write_node(node, 0)?;
        Ok(self.out)
    }

    fn prolog(&self, node: &Node) -> &'static str {
        if node.descriptor().doctype {
            if self.config.strict_xhtml {
                XHTML_PROLOG
            } else {
                HTML_DOCTYPE
            }
        } else if node.is_root() {
            XML_DECLARATION
        } else {
            ""
        }
    }

    fn pretty(&self) -> bool {
        self.style == Style::Pretty
    }

    fn newline(&mut self) {
        if self.pretty() {
            self.out.push('\n');
        }
    }

    fn indent(&mut self, depth: usize) {
        if self.pretty() {
            let width = depth.saturating_mul(self.config.indent_spaces);
            self.out.extend(std::iter::repeat_n(' ', width));
        }
    }

    fn write_node(&mut self, node: &Node, depth: usize) -> Result<()> {
        let name = node.tag_name();
        if depth >= self.config.max_depth {
            return Err(Error::new(ErrorKind::MaxDepthExceeded {
                max: self.config.max_depth,
            })
            .within(name));
        }
        validate_content(node).map_err(|err| err.within(name))?;
        trace!(tag = name, depth, "writing element");

        let tag = node.descriptor();
        let empty_body;
        let children = if node.child_nodes().is_empty() && tag.expand_empty && !tag.void {
            empty_body = Child::Text(String::new());
            std::slice::from_ref(&empty_body)
        } else {
            node.child_nodes()
        };

        self.indent(depth);
        self.out.push('<');
        self.out.push_str(name);
        self.write_attributes(node);

        if children.is_empty() {
            self.out.push_str(" />");
            self.newline();
            return Ok(());
        }

        self.out.push('>');
        self.newline();
        for child in children {
            match child {
                Child::Text(text) => {
                    self.indent(depth + 1);
                    self.out.push_str(&escape_text(text));
                    self.newline();
                }
                Child::Raw(raw) => {
                    self.out.push_str(raw.as_str());
                    self.newline();
                }
                Child::Element(element) => {
                    self.write_node(element, depth + 1)
                        .map_err(|err| err.within(name))?;
                }
            }
        }

        self.indent(depth);
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
        self.newline();
        Ok(())
    }

    fn write_attributes(&mut self, node: &Node) {
        for (name, value) in node.attributes().iter(node.descriptor()) {
            match value {
                AttrValue::Bool(false) => {}
                AttrValue::Bool(true) => {
                    self.out.push(' ');
                    self.out.push_str(&name);
                    if self.config.strict_xhtml {
                        self.out.push_str("=\"");
                        self.out.push_str(&name);
                        self.out.push('"');
                    }
                }
                AttrValue::Str(value) => {
                    self.out.push(' ');
                    self.out.push_str(&name);
                    self.out.push_str("=\"");
                    if self.config.escape_attributes {
                        self.out.push_str(&escape_text(value));
                    } else {
                        self.out.push_str(value);
                    }
                    self.out.push('"');
                }
            }
        }
    }
}

/// Check the void and raw-content rules of the node's descriptor.
fn validate_content(node: &Node) -> Result<()> {
    let tag = node.descriptor();
    let children = node.child_nodes();

    if tag.void && !children.is_empty() {
        warn!(tag = node.tag_name(), "void element has content");
        return Err(Error::new(ErrorKind::VoidElementContent {
            tag: node.tag_name().to_string(),
        }));
    }

    if tag.raw_content {
        let nested = children.iter().find_map(|child| match child {
            Child::Element(element) => Some(element),
            Child::Text(_) | Child::Raw(_) => None,
        });
        if let Some(element) = nested {
            warn!(
                tag = node.tag_name(),
                child = element.tag_name(),
                "raw-content element has an element child"
            );
            return Err(Error::new(ErrorKind::InvalidRawContentChild {
                tag: node.tag_name().to_string(),
                child: element.tag_name().to_string(),
            }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RawText;
    use crate::tag::{FieldSpec, TagDescriptor};

    static ITEM: TagDescriptor = TagDescriptor::plain(Some("item"));
    static LINE: TagDescriptor = TagDescriptor {
        void: true,
        ..TagDescriptor::plain(Some("line"))
    };
    static CODE: TagDescriptor = TagDescriptor {
        raw_content: true,
        expand_empty: true,
        ..TagDescriptor::plain(Some("code"))
    };
    static PANEL: TagDescriptor = TagDescriptor {
        globals: &[FieldSpec::new("hidden"), FieldSpec::new("id")],
        expand_empty: true,
        ..TagDescriptor::plain(Some("panel"))
    };

    fn compact(node: &Node) -> Result<String> {
        node.render_with(&RenderConfig::default(), Style::Compact)
    }

    fn pretty(node: &Node) -> Result<String> {
        node.render_with(&RenderConfig::default(), Style::Pretty)
    }

    #[test]
    fn test_empty_element_self_closes() {
        assert_eq!(compact(&Node::new(&ITEM)).unwrap(), "<item />");
        assert_eq!(pretty(&Node::new(&ITEM)).unwrap(), "<item />\n");
    }

    #[test]
    fn test_expanding_element_gets_empty_body() {
        let node = Node::new(&PANEL).attr("hidden", true);
        assert_eq!(compact(&node).unwrap(), "<panel hidden></panel>");
        assert_eq!(pretty(&node).unwrap(), "<panel hidden>\n  \n</panel>\n");
    }

    #[test]
    fn test_text_is_escaped() {
        let node = Node::new(&ITEM).children("<p>XY&Z</p>");
        assert_eq!(
            compact(&node).unwrap(),
            "<item>&lt;p&gt;XY&amp;Z&lt;/p&gt;</item>"
        );
    }

    #[test]
    fn test_raw_text_passes_through() {
        let node = Node::new(&ITEM).children(RawText::new("<p>XY&amp;Z</p>"));
        assert_eq!(compact(&node).unwrap(), "<item><p>XY&amp;Z</p></item>");
        assert_eq!(pretty(&node).unwrap(), "<item>\n<p>XY&amp;Z</p>\n</item>\n");
    }

    #[test]
    fn test_void_element_rejects_empty_string() {
        let err = compact(&Node::new(&LINE).children("")).unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::VoidElementContent {
                tag: "line".to_string()
            }
        );
        assert_eq!(
            compact(&Node::new(&LINE).children(None::<&str>)).unwrap(),
            "<line />"
        );
    }

    #[test]
    fn test_raw_content_concatenates_text() {
        let node = Node::new(&CODE).children(crate::children!["a<", RawText::new("b()")]);
        assert_eq!(compact(&node).unwrap(), "<code>a&lt;b()</code>");
        assert_eq!(compact(&Node::new(&CODE)).unwrap(), "<code></code>");
    }

    #[test]
    fn test_raw_content_rejects_elements() {
        let node = Node::new(&ITEM).children(Node::new(&CODE).children(Node::new(&ITEM)));
        let err = compact(&node).unwrap_err();
        assert!(err.kind().is_content());
        assert_eq!(err.path(), vec!["item", "code"]);
    }

    #[test]
    fn test_error_path_points_at_failing_element() {
        let line = Node::new(&LINE).children("x");
        let tree = Node::new(&PANEL).children(Node::new(&ITEM).children(line));
        let err = compact(&tree).unwrap_err();
        assert_eq!(err.path(), vec!["panel", "item", "line"]);
    }

    #[test]
    fn test_boolean_attributes() {
        let node = Node::new(&PANEL)
            .attr("hidden", true)
            .attr("id", false)
            .attr("open", true);
        assert_eq!(compact(&node).unwrap(), "<panel hidden open></panel>");

        let strict = RenderConfig::default().with_strict_xhtml(true);
        assert_eq!(
            node.render_with(&strict, Style::Compact).unwrap(),
            r#"<panel hidden="hidden" open="open"></panel>"#
        );
    }

    #[test]
    fn test_attribute_values_verbatim_unless_opted_in() {
        let node = Node::new(&ITEM).attr("title", r#"a "b" & c"#);
        assert_eq!(compact(&node).unwrap(), r#"<item title="a "b" & c" />"#);

        let escaping = RenderConfig::default().with_escape_attributes(true);
        assert_eq!(
            node.render_with(&escaping, Style::Compact).unwrap(),
            r#"<item title="a &quot;b&quot; &amp; c" />"#
        );
    }

    #[test]
    fn test_prologs() {
        let xml = Node::named(&ITEM, "root").root(true);
        assert_eq!(
            compact(&xml).unwrap(),
            "<?xml version='1.0' encoding='UTF-8' ?>\n<root />"
        );

        let nested = Node::new(&PANEL).children(Node::new(&ITEM).root(true));
        assert_eq!(compact(&nested).unwrap(), "<panel><item /></panel>");
    }

    #[test]
    fn test_depth_limit() {
        let mut tree = Node::new(&ITEM);
        for _ in 0..10 {
            tree = Node::new(&ITEM).children(tree);
        }
        let shallow = RenderConfig::default().with_max_depth(5);
        let err = tree.render_with(&shallow, Style::Compact).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MaxDepthExceeded { max: 5 });

        let deep = RenderConfig::default().with_max_depth(11);
        assert!(tree.render_with(&deep, Style::Compact).is_ok());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RenderConfig::default().with_indent(0);
        let err = Node::new(&ITEM).render_with(&config, Style::Pretty).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidIndent);
    }

    #[test]
    fn test_pretty_indents_by_depth() {
        let tree = Node::new(&ITEM).children(crate::children![
            "first",
            Node::new(&LINE),
            Node::new(&ITEM).children("nested"),
        ]);
        let config = RenderConfig::default().with_indent(4);
        assert_eq!(
            tree.render_with(&config, Style::Pretty).unwrap(),
            "<item>\n    first\n    <line />\n    <item>\n        nested\n    </item>\n</item>\n"
        );
    }
}
