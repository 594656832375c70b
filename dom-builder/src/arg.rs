//! Constructor and `append` arguments.

use crate::{attr::Attrs, base_element::Element};

/// One argument of an element constructor.
///
/// A constructor accepts any mix of these, in any order.
#[derive(Debug)]
pub enum ElementArg {
    /// Append a text node (nothing happens if it is empty).
    Text(String),
    /// Append an existing DOM node.
    Node(web_sys::Node),
    /// Append the element of another builder.
    Element(Element),
    /// Apply an attribute mapping.
    Attrs(Attrs),
}

impl From<&str> for ElementArg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ElementArg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for ElementArg {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<Element> for ElementArg {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

impl From<web_sys::Node> for ElementArg {
    fn from(n: web_sys::Node) -> Self {
        Self::Node(n)
    }
}

impl From<web_sys::Element> for ElementArg {
    fn from(n: web_sys::Element) -> Self {
        Self::Node(n.into())
    }
}

impl From<web_sys::HtmlElement> for ElementArg {
    fn from(n: web_sys::HtmlElement) -> Self {
        Self::Node(n.into())
    }
}

impl From<web_sys::Text> for ElementArg {
    fn from(n: web_sys::Text) -> Self {
        Self::Node(n.into())
    }
}

impl From<Attrs> for ElementArg {
    fn from(a: Attrs) -> Self {
        Self::Attrs(a)
    }
}

/// Build a `Vec<ElementArg>` from arguments of different types.
///
/// ```rust,no_run
/// use dom_builder::prelude::*;
///
/// let elem = div(args![
///     p(["hello"]),
///     span(args![Attrs::new().set("id", "s1"), "world"]),
/// ]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::ElementArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::ElementArg::from($arg)),+]
    };
}
