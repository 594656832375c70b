//! Event handler bookkeeping.
//!
//! Handlers are turned into JS functions that belong to the JS garbage collector,
//! so a listener keeps working after the `Element` that registered it is dropped.
//! The registry only remembers what was registered, so that `off` can remove it again.

use rustc_hash::FxHashMap;
use wasm_bindgen::{closure::Closure, JsCast};

/// Convert a rust closure into a JS function that can be used as an event listener.
pub fn handler_fn(f: impl 'static + FnMut(web_sys::Event)) -> js_sys::Function {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
    cb.into_js_value().unchecked_into()
}

/// The handlers registered for each event name, in registration order.
#[derive(Debug)]
pub(crate) struct HandlerRegistry<H> {
    map: FxHashMap<String, Vec<H>>,
}

impl<H> Default for HandlerRegistry<H> {
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

impl<H> HandlerRegistry<H> {
    pub(crate) fn register(&mut self, event: &str, handler: H) {
        match self.map.get_mut(event) {
            Some(list) => list.push(handler),
            None => {
                self.map.insert(event.to_string(), vec![handler]);
            }
        }
    }

    /// Remove the entry of `event` and return its handlers.
    pub(crate) fn take(&mut self, event: &str) -> Vec<H> {
        self.map.remove(event).unwrap_or_default()
    }

    pub(crate) fn handlers(&self, event: &str) -> &[H] {
        self.map.get(event).map(|x| x.as_slice()).unwrap_or(&[])
    }
}
