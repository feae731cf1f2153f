#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use tagic::{html, xml, Child, Node, RawText, RenderConfig, Style};

// Text never starts with a space and never holds a newline, so stripping the
// indentation of pretty output cannot eat into it.
fn text_strategy() -> impl Strategy<Value = String> {
    "([a-zA-Z0-9<>&\"'][a-zA-Z0-9 <>&\"']{0,12})?"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,6}"
}

fn attr_strategy() -> impl Strategy<Value = Vec<(String, Option<String>)>> {
    vec(
        ("[a-z]{1,6}", proptest::option::of("[a-zA-Z0-9 ]{0,8}")),
        0..3,
    )
}

fn leaf_strategy() -> impl Strategy<Value = Option<Child>> {
    prop_oneof![
        text_strategy().prop_map(|t| Some(Child::Text(t))),
        text_strategy().prop_map(|t| Some(Child::Raw(RawText::new(t)))),
        Just(None),
    ]
}

fn tree_strategy() -> impl Strategy<Value = Node> {
    let leaf = (name_strategy(), attr_strategy(), vec(leaf_strategy(), 0..3))
        .prop_map(|(name, attrs, children)| build(name, attrs, children));
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            name_strategy(),
            attr_strategy(),
            vec(
                prop_oneof![
                    leaf_strategy(),
                    inner.prop_map(|node| Some(Child::from(node))),
                ],
                0..4,
            ),
        )
            .prop_map(|(name, attrs, children)| build(name, attrs, children))
    })
}

fn build(
    name: String,
    attrs: Vec<(String, Option<String>)>,
    children: Vec<Option<Child>>,
) -> Node {
    let mut node = xml::element(name);
    for (key, value) in attrs {
        node = match value {
            Some(value) => node.attr(&key, value),
            None => node.attr(&key, true),
        };
    }
    node.children(children)
}

fn strip_indentation(pretty: &str) -> String {
    pretty
        .split('\n')
        .map(|line| line.trim_start_matches(' '))
        .collect()
}

fn config() -> RenderConfig {
    RenderConfig::default()
}

proptest! {
    #[test]
    fn test_compact_has_no_newlines(tree in tree_strategy()) {
        let compact = tree.render_with(&config(), Style::Compact).unwrap();
        prop_assert!(!compact.contains('\n'));
    }

    #[test]
    fn test_pretty_matches_compact_without_indentation(
        tree in tree_strategy(),
        indent in 1usize..6,
    ) {
        let compact = tree.render_with(&config(), Style::Compact).unwrap();
        let pretty = tree
            .render_with(&config().with_indent(indent), Style::Pretty)
            .unwrap();
        prop_assert_eq!(strip_indentation(&pretty), compact);
    }

    #[test]
    fn test_rendering_is_pure(tree in tree_strategy()) {
        let before = tree.clone();
        let first = tree.render_with(&config(), Style::Pretty).unwrap();
        let second = tree.render_with(&config(), Style::Pretty).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(tree, before);
    }

    #[test]
    fn test_absent_children_never_render(
        texts in vec(proptest::option::of("[a-z]{1,5}"), 0..6),
    ) {
        let present: Vec<String> = texts.iter().flatten().cloned().collect();
        let with_absent = html::div().children(texts);
        let without = html::div().children(present);
        prop_assert_eq!(
            with_absent.render_with(&config(), Style::Pretty).unwrap(),
            without.render_with(&config(), Style::Pretty).unwrap()
        );
    }

    #[test]
    fn test_add_class_is_idempotent(names in vec("[a-z]{1,4}( [a-z]{1,4})?", 0..5)) {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut once = html::span();
        once.add_class(&names);
        let mut twice = once.clone();
        twice.add_class(&names);
        prop_assert_eq!(once.get_attr("class"), twice.get_attr("class"));
    }

    #[test]
    fn test_remove_missing_class_is_noop(
        existing in "[a-m]{1,4}( [a-m]{1,4}){0,3}",
        missing in "[n-z]{1,4}",
    ) {
        let mut node = html::span().class(existing.clone());
        node.remove_class(&[missing.as_str()]);
        prop_assert_eq!(node.get_attr("class"), Some(&tagic::AttrValue::Str(existing)));
    }
}
