//! dom-builder: build DOM trees imperatively from rust wasm
//!
//! Each `Element` wraps one DOM element.
//! It sets id, class, attributes and event handlers, and appends text and children.
//!
//! ### Quick Start
//!
//! ```rust,no_run
//! use dom_builder::prelude::*;
//!
//! fn build_page() {
//!     // find the mount point in the page
//!     let Some(app) = query("#app") else {
//!         return;
//!     };
//!     // element factories accept a list of arguments:
//!     // text, other elements, DOM nodes, and attribute mappings
//!     app.append(args![
//!         div(args![
//!             p(args!["This", nbsp(), b(["is"]), nbsp(), "a test"]),
//!             button(args![
//!                 Attrs::new().on("click", |_ev| log::info!("clicked")),
//!                 "Click me",
//!             ]),
//!         ]),
//!     ]);
//! }
//! ```
//!
//! The builder never throws:
//! a DOM error is logged through the `log` crate and the operation is skipped.
//! Use the `try_*` methods to get the `Error` instead.

pub mod arg;
pub mod attr;
pub mod base_element;
pub mod element;
pub mod error;
pub mod event;
pub mod text_node;

pub use arg::ElementArg;
pub use attr::{AttrMap, AttrValue, Attrs};
pub use base_element::Element;
pub use error::Error;
pub use event::handler_fn;
pub use text_node::{nbsp, text_node, NBSP};

/// The types that should usually be imported.
///
/// Usually, `use dom_builder::prelude::*;` is enough to build a tree.
pub mod prelude {
    pub use crate::args;
    pub use crate::element::*;
    pub use crate::{nbsp, query, query_all, text_node};
    pub use crate::{AttrValue, Attrs, Element, ElementArg, Error};
}

thread_local! {
    pub(crate) static WINDOW: web_sys::Window = web_sys::window().expect("Cannot use DOM builder outside web page environment");
    pub(crate) static DOCUMENT: web_sys::Document = {
        WINDOW.with(|window| {
            window.document().expect("Cannot use DOM builder when document is not ready")
        })
    };
}

/// Find the first element in the document matching the selector.
///
/// An invalid selector is logged and finds nothing.
pub fn query(selector: &str) -> Option<Element> {
    try_query(selector).unwrap_or_else(|err| {
        error::log_error(&err);
        None
    })
}

/// Find the first element in the document matching the selector, or return the selector error.
pub fn try_query(selector: &str) -> Result<Option<Element>, Error> {
    let found = DOCUMENT
        .with(|document| document.query_selector(selector))
        .map_err(|err| Error::selector(selector, &err))?;
    Ok(found.map(Element::from))
}

/// Find all elements in the document matching the selector, in document order.
///
/// An invalid selector is logged and finds nothing.
pub fn query_all(selector: &str) -> Vec<Element> {
    try_query_all(selector).unwrap_or_else(|err| {
        error::log_error(&err);
        Vec::new()
    })
}

/// Find all elements in the document matching the selector, or return the selector error.
pub fn try_query_all(selector: &str) -> Result<Vec<Element>, Error> {
    let list = DOCUMENT
        .with(|document| document.query_selector_all(selector))
        .map_err(|err| Error::selector(selector, &err))?;
    Ok(base_element::wrap_node_list(&list))
}
