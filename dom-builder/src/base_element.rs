use wasm_bindgen::{prelude::*, JsCast};

use crate::{
    arg::ElementArg,
    attr::{collect_attrs, AttrAction, AttrMap, AttrValue, Attrs},
    error::{log_error, Error},
    event::{handler_fn, HandlerRegistry},
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = document, js_name = createElement)]
    fn document_create_element(tag_name: &str) -> web_sys::Element;
}

/// A builder around one DOM element.
///
/// Every setter consumes the builder and returns it, so calls can be chained
/// and the result can be passed directly as an argument of another element.
/// The setters never fail:
/// when the DOM rejects an operation, the error is logged and the operation is skipped.
/// Each setter has a `try_*` counterpart that returns the `Error` instead.
/// The `try_*` methods borrow the builder,
/// so it stays usable (and keeps tracking its handlers) after an error.
///
/// Dropping the builder does not remove the element from the document,
/// and the event handlers registered through it keep working.
pub struct Element {
    elem: web_sys::Element,
    handlers: HandlerRegistry<js_sys::Function>,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.elem.tag_name().to_lowercase())
    }
}

impl From<web_sys::Element> for Element {
    fn from(elem: web_sys::Element) -> Self {
        Self {
            elem,
            handlers: HandlerRegistry::default(),
        }
    }
}

impl From<Element> for web_sys::Element {
    fn from(e: Element) -> Self {
        e.elem
    }
}

impl From<Element> for web_sys::Node {
    fn from(e: Element) -> Self {
        e.elem.into()
    }
}

impl Element {
    /// Create a new element with the tag name, then apply `args` in order.
    ///
    /// Fails when the tag name is not accepted by `document.createElement`.
    pub fn new<I>(tag: &str, args: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<ElementArg>,
    {
        let elem = crate::DOCUMENT
            .with(|document| document.create_element(tag))
            .map_err(|err| Error::tag_name(tag, &err))?;
        Ok(Self::wrap(elem, args))
    }

    /// Same as `new` but an invalid tag name is a JS exception.
    ///
    /// Only used with the tag names of the element factories.
    pub(crate) fn with_known_tag<I>(tag: &'static str, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ElementArg>,
    {
        Self::wrap(document_create_element(tag), args)
    }

    /// Wrap an existing DOM element, then apply `args` in order.
    ///
    /// The builder starts with no tracked event handlers,
    /// even if the element already has some listeners.
    pub fn wrap<I>(elem: web_sys::Element, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ElementArg>,
    {
        Self::from(elem).append(args)
    }

    /// Get the underlying DOM element.
    #[inline]
    pub fn el(&self) -> &web_sys::Element {
        &self.elem
    }

    /// Get the underlying DOM element and drop the builder.
    #[inline]
    pub fn into_el(self) -> web_sys::Element {
        self.elem
    }

    /// Get the element id.
    pub fn id(&self) -> String {
        self.elem.id()
    }

    /// Set the element id (nothing happens if it is empty).
    pub fn set_id(mut self, id: &str) -> Self {
        self.assign_id(id);
        self
    }

    /// Get the whole `class` string.
    pub fn class(&self) -> String {
        self.elem.class_name()
    }

    /// Replace the whole `class` string (nothing happens if it is empty).
    pub fn set_class(mut self, class: &str) -> Self {
        self.assign_class(class);
        self
    }

    /// Get an attribute.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.elem.get_attribute(name)
    }

    /// Get all attributes, read from the element.
    ///
    /// `id` and `class` are only included when they are not empty.
    pub fn attrs(&self) -> AttrMap {
        let names = self.elem.get_attribute_names();
        let live = names
            .iter()
            .filter_map(|name| {
                let name = name.as_string()?;
                let value = self.elem.get_attribute(&name)?;
                Some((name, value))
            });
        collect_attrs(self.id(), self.class(), live)
    }

    /// Apply one attribute entry.
    pub fn set_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        if let Err(err) = self.assign_attr(name, value.into()) {
            log_error(&err);
        }
        self
    }

    /// Apply one attribute entry, or return the DOM error.
    pub fn try_set_attr(
        &mut self,
        name: &str,
        value: impl Into<AttrValue>,
    ) -> Result<&mut Self, Error> {
        self.assign_attr(name, value.into())?;
        Ok(self)
    }

    /// Remove an attribute.
    ///
    /// Unlike a removal entry in an `Attrs` mapping, this also works for `id` and `class`.
    pub fn remove_attr(self, name: &str) -> Self {
        if let Err(err) = self.elem.remove_attribute(name) {
            log_error(&Error::attribute_name(name, &err));
        }
        self
    }

    /// Apply all entries of an attribute mapping in order.
    ///
    /// A rejected entry is logged and skipped, and the rest are still applied.
    pub fn set_attrs(mut self, attrs: Attrs) -> Self {
        self.assign_attrs_logged(attrs);
        self
    }

    /// Apply all entries of an attribute mapping in order, stopping at the first DOM error.
    ///
    /// The entries before the failing one stay applied.
    pub fn try_set_attrs(&mut self, attrs: Attrs) -> Result<&mut Self, Error> {
        for (name, value) in attrs {
            self.assign_attr(&name, value)?;
        }
        Ok(self)
    }

    /// Append a text node (nothing happens if it is empty).
    pub fn text(mut self, value: &str) -> Self {
        if let Err(err) = self.push_text(value) {
            log_error(&err);
        }
        self
    }

    /// Append children in order.
    ///
    /// Text becomes text nodes, builders are unwrapped to their DOM elements,
    /// and attribute mappings are applied as with `set_attrs`.
    pub fn append<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ElementArg>,
    {
        for child in children {
            let arg: ElementArg = child.into();
            match arg {
                ElementArg::Attrs(attrs) => self.assign_attrs_logged(attrs),
                arg => {
                    if let Err(err) = self.push_arg(arg) {
                        log_error(&err);
                    }
                }
            }
        }
        self
    }

    /// Append one child.
    pub fn append_child(self, child: impl Into<ElementArg>) -> Self {
        self.append(std::iter::once(child))
    }

    /// Append children in order, stopping at the first DOM error.
    ///
    /// The children before the failing one stay appended.
    pub fn try_append<I>(&mut self, children: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator,
        I::Item: Into<ElementArg>,
    {
        for child in children {
            self.push_arg(child.into())?;
        }
        Ok(self)
    }

    /// Add an event handler.
    ///
    /// The handler is tracked so that `off` can remove it later.
    pub fn on(self, event: &str, f: impl 'static + FnMut(web_sys::Event)) -> Self {
        self.on_js(event, handler_fn(f))
    }

    /// Add an existing JS function as an event handler.
    pub fn on_js(mut self, event: &str, f: js_sys::Function) -> Self {
        if let Err(err) = self.listen(event, f) {
            log_error(&err);
        }
        self
    }

    /// Add an event handler, or return the DOM error.
    pub fn try_on(
        &mut self,
        event: &str,
        f: impl 'static + FnMut(web_sys::Event),
    ) -> Result<&mut Self, Error> {
        self.listen(event, handler_fn(f))?;
        Ok(self)
    }

    /// Remove all event handlers added through this builder for the event.
    ///
    /// Listeners added in other ways are not touched.
    pub fn off(mut self, event: &str) -> Self {
        let list = self.handlers.take(event);
        log::debug!("Removing {} {:?} handler(s) from {:?}", list.len(), event, self);
        for f in list.iter() {
            if let Err(err) = self.elem.remove_event_listener_with_callback(event, f) {
                log_error(&Error::backend(&err));
            }
        }
        self
    }

    /// The number of handlers tracked for the event.
    pub fn handler_count(&self, event: &str) -> usize {
        self.handlers.handlers(event).len()
    }

    /// Find the first descendant matching the selector.
    ///
    /// An invalid selector is logged and finds nothing.
    pub fn query(&self, selector: &str) -> Option<Element> {
        self.try_query(selector).unwrap_or_else(|err| {
            log_error(&err);
            None
        })
    }

    /// Find the first descendant matching the selector, or return the selector error.
    pub fn try_query(&self, selector: &str) -> Result<Option<Element>, Error> {
        let found = self
            .elem
            .query_selector(selector)
            .map_err(|err| Error::selector(selector, &err))?;
        Ok(found.map(Element::from))
    }

    /// Find all descendants matching the selector, in document order.
    ///
    /// An invalid selector is logged and finds nothing.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        self.try_query_all(selector).unwrap_or_else(|err| {
            log_error(&err);
            Vec::new()
        })
    }

    /// Find all descendants matching the selector, or return the selector error.
    pub fn try_query_all(&self, selector: &str) -> Result<Vec<Element>, Error> {
        let list = self
            .elem
            .query_selector_all(selector)
            .map_err(|err| Error::selector(selector, &err))?;
        Ok(wrap_node_list(&list))
    }

    /// Get the serialized HTML of the children.
    pub fn inner_html(&self) -> String {
        self.elem.inner_html()
    }

    /// Get the serialized HTML of the element itself.
    pub fn outer_html(&self) -> String {
        self.elem.outer_html()
    }

    fn assign_id(&mut self, id: &str) {
        if !id.is_empty() {
            self.elem.set_id(id);
        }
    }

    fn assign_class(&mut self, class: &str) {
        if !class.is_empty() {
            self.elem.set_class_name(class);
        }
    }

    fn assign_attr(&mut self, name: &str, value: AttrValue) -> Result<(), Error> {
        match (AttrAction::classify(name, &value), value) {
            (AttrAction::SetId, AttrValue::Value(v)) => self.assign_id(&v),
            (AttrAction::SetClass, AttrValue::Value(v)) => self.assign_class(&v),
            (AttrAction::Listen, AttrValue::Handler(f)) => self.listen(name, f)?,
            (AttrAction::Remove, _) => self
                .elem
                .remove_attribute(name)
                .map_err(|err| Error::attribute_name(name, &err))?,
            (AttrAction::Set, AttrValue::Value(v)) => self
                .elem
                .set_attribute(name, &v)
                .map_err(|err| Error::attribute_name(name, &err))?,
            // a removal or a handler under `id` or `class` is ignored
            _ => {}
        }
        Ok(())
    }

    fn assign_attrs_logged(&mut self, attrs: Attrs) {
        for (name, value) in attrs {
            if let Err(err) = self.assign_attr(&name, value) {
                log_error(&err);
            }
        }
    }

    fn listen(&mut self, event: &str, f: js_sys::Function) -> Result<(), Error> {
        self.elem
            .add_event_listener_with_callback(event, &f)
            .map_err(|err| Error::backend(&err))?;
        log::trace!("Added a {:?} handler to {:?}", event, self);
        self.handlers.register(event, f);
        Ok(())
    }

    fn push_text(&mut self, value: &str) -> Result<(), Error> {
        if value.is_empty() {
            return Ok(());
        }
        let node = crate::text_node::text_node(value);
        self.elem
            .append_child(&node)
            .map_err(|err| Error::backend(&err))?;
        Ok(())
    }

    fn push_arg(&mut self, arg: ElementArg) -> Result<(), Error> {
        match arg {
            ElementArg::Text(s) => self.push_text(&s)?,
            ElementArg::Node(n) => {
                self.elem
                    .append_child(&n)
                    .map_err(|err| Error::backend(&err))?;
            }
            ElementArg::Element(e) => {
                self.elem
                    .append_child(e.el())
                    .map_err(|err| Error::backend(&err))?;
            }
            ElementArg::Attrs(attrs) => {
                for (name, value) in attrs {
                    self.assign_attr(&name, value)?;
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn wrap_node_list(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(Element::from)
        .collect()
}
