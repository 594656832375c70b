/// A single non-breaking space.
pub const NBSP: &str = "\u{a0}";

/// Create a text node.
pub fn text_node(content: &str) -> web_sys::Text {
    crate::DOCUMENT.with(|document| document.create_text_node(content))
}

/// Create a text node containing a single non-breaking space.
///
/// The result is a plain DOM node, so it can be used as an element argument directly.
pub fn nbsp() -> web_sys::Text {
    text_node(NBSP)
}
