//! Attribute mappings.

use rustc_hash::FxHashMap;

use crate::event::handler_fn;

/// The attributes read back from an element, keyed by attribute name.
pub type AttrMap = FxHashMap<String, String>;

/// The value of one entry in an `Attrs` mapping.
#[derive(Clone)]
pub enum AttrValue {
    /// Set the attribute to this string.
    Value(String),
    /// Register this function as a listener of the event named by the key.
    Handler(js_sys::Function),
    /// Remove the attribute.
    Remove,
}

impl std::fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(x) => write!(f, "{:?}", x),
            Self::Handler(_) => write!(f, "[Handler]"),
            Self::Remove => write!(f, "[Remove]"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Value(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Value(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        Self::Value(s.clone())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Remove,
        }
    }
}

impl From<js_sys::Function> for AttrValue {
    fn from(f: js_sys::Function) -> Self {
        Self::Handler(f)
    }
}

/// What applying one `Attrs` entry does to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttrAction {
    SetId,
    SetClass,
    Listen,
    Remove,
    Set,
}

impl AttrAction {
    pub(crate) fn classify(key: &str, value: &AttrValue) -> Self {
        match (key, value) {
            ("id", _) => Self::SetId,
            ("class", _) => Self::SetClass,
            (_, AttrValue::Handler(_)) => Self::Listen,
            (_, AttrValue::Remove) => Self::Remove,
            (_, AttrValue::Value(_)) => Self::Set,
        }
    }
}

/// An ordered attribute mapping.
///
/// Besides plain attributes, it can carry event handlers and attribute removals,
/// and the `id` and `class` keys go to the dedicated setters.
///
/// ```rust,no_run
/// use dom_builder::prelude::*;
///
/// let elem = button(args![
///     Attrs::new()
///         .set("id", "submit")
///         .set("type", "button")
///         .on("click", |_ev| {}),
///     "Submit",
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
}

impl Attrs {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry.
    ///
    /// A `None` value (through `Option`) means removal.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Add an entry that removes the attribute.
    pub fn remove(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), AttrValue::Remove));
        self
    }

    /// Add an event handler entry.
    pub fn on(mut self, event: impl Into<String>, f: impl 'static + FnMut(web_sys::Event)) -> Self {
        self.entries
            .push((event.into(), AttrValue::Handler(handler_fn(f))));
        self
    }

    /// Add an event handler entry with an existing JS function.
    pub fn on_js(mut self, event: impl Into<String>, f: js_sys::Function) -> Self {
        self.entries.push((event.into(), AttrValue::Handler(f)));
        self
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is no entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Attrs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Attrs {
    type Item = (String, AttrValue);
    type IntoIter = std::vec::IntoIter<(String, AttrValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// `id` and `class` only appear when non-empty; the live attribute list comes after
pub(crate) fn collect_attrs(
    id: String,
    class: String,
    live: impl IntoIterator<Item = (String, String)>,
) -> AttrMap {
    let mut ret = AttrMap::default();
    if !id.is_empty() {
        ret.insert("id".to_string(), id);
    }
    if !class.is_empty() {
        ret.insert("class".to_string(), class);
    }
    ret.extend(live);
    ret
}
