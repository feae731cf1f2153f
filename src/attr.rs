//! Attribute values and the per-node attribute set.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::tag::TagDescriptor;

pub const DATA_PREFIX: &str = "data-";
pub const ARIA_PREFIX: &str = "aria-";

/// Value of a single attribute
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    Str(String),
    /// `true` renders as a bare attribute, `false` is omitted
    Bool(bool),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Attributes of one node, grouped by where they render.
///
/// Typed slots are addressed through the node's [`TagDescriptor`]; anything the
/// descriptor does not declare lands in the free-form map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    typed: Vec<Option<AttrValue>>,
    extra: IndexMap<String, AttrValue>,
    data: IndexMap<String, AttrValue>,
    aria: IndexMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or, with `None`, clear the attribute `name`.
    pub fn set(&mut self, tag: &TagDescriptor, name: &str, value: Option<AttrValue>) {
        match tag.field_index(name) {
            Some(index) => {
                if self.typed.len() <= index {
                    self.typed.resize(index + 1, None);
                }
                if let Some(slot) = self.typed.get_mut(index) {
                    *slot = value;
                }
            }
            None => match value {
                Some(value) => {
                    self.extra.insert(name.to_string(), value);
                }
                None => {
                    self.extra.shift_remove(name);
                }
            },
        }
    }

    pub fn get(&self, tag: &TagDescriptor, name: &str) -> Option<&AttrValue> {
        match tag.field_index(name) {
            Some(index) => self.typed.get(index).and_then(Option::as_ref),
            None => self.extra.get(name),
        }
    }

    /// Set a `data-*` attribute; `key` is given without the prefix.
    pub fn set_data(&mut self, key: impl Into<String>, value: AttrValue) {
        self.data.insert(key.into(), value);
    }

    /// Set an `aria-*` attribute; `key` is given without the prefix.
    pub fn set_aria(&mut self, key: impl Into<String>, value: AttrValue) {
        self.aria.insert(key.into(), value);
    }

    /// All attributes in render order: typed fields, free-form, `data-*`, `aria-*`.
    pub fn iter<'a>(
        &'a self,
        tag: &'a TagDescriptor,
    ) -> impl Iterator<Item = (Cow<'a, str>, &'a AttrValue)> + 'a {
        let typed = tag
            .all_fields()
            .zip(self.typed.iter())
            .filter_map(|(spec, value)| Some((spec.attr_name(), value.as_ref()?)));
        let extra = self
            .extra
            .iter()
            .map(|(name, value)| (Cow::Borrowed(name.as_str()), value));
        let data = self
            .data
            .iter()
            .map(|(key, value)| (prefixed(DATA_PREFIX, key), value));
        let aria = self
            .aria
            .iter()
            .map(|(key, value)| (prefixed(ARIA_PREFIX, key), value));
        typed.chain(extra).chain(data).chain(aria)
    }

    pub fn is_empty(&self) -> bool {
        self.typed.iter().all(Option::is_none)
            && self.extra.is_empty()
            && self.data.is_empty()
            && self.aria.is_empty()
    }
}

fn prefixed<'a>(prefix: &str, key: &str) -> Cow<'a, str> {
    Cow::Owned(format!("{prefix}{key}"))
}

fn push_unique<'a>(tokens: &mut Vec<&'a str>, token: &'a str) {
    if !tokens.contains(&token) {
        tokens.push(token);
    }
}

/// Merge `names` into a class list, dropping duplicates and keeping first-seen order.
pub(crate) fn merge_class_tokens(current: Option<&AttrValue>, names: &[&str]) -> Option<String> {
    let mut tokens = Vec::new();
    if let Some(existing) = current.and_then(AttrValue::as_str) {
        existing
            .split_whitespace()
            .for_each(|token| push_unique(&mut tokens, token));
    }
    names
        .iter()
        .flat_map(|name| name.split_whitespace())
        .for_each(|token| push_unique(&mut tokens, token));

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

/// Outcome of removing tokens from a class list
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ClassRemoval {
    /// Nothing matched; the attribute stays as it was
    Unchanged,
    Remaining(String),
    Emptied,
}

pub(crate) fn remove_class_tokens(current: Option<&AttrValue>, names: &[&str]) -> ClassRemoval {
    let Some(existing) = current.and_then(AttrValue::as_str) else {
        return ClassRemoval::Unchanged;
    };
    let doomed: Vec<&str> = names
        .iter()
        .flat_map(|name| name.split_whitespace())
        .collect();
    if !existing
        .split_whitespace()
        .any(|token| doomed.contains(&token))
    {
        return ClassRemoval::Unchanged;
    }

    let kept: Vec<&str> = existing
        .split_whitespace()
        .filter(|token| !doomed.contains(token))
        .collect();
    if kept.is_empty() {
        ClassRemoval::Emptied
    } else {
        ClassRemoval::Remaining(kept.join(" "))
    }
}
