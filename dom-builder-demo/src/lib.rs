// import WASM support
use wasm_bindgen::prelude::*;
// import the builder, the element factories and the query helpers
use dom_builder::prelude::*;

fn alert(msg: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(msg).is_err() {
            log::warn!("Cannot show alert {:?}", msg);
        }
    }
}

// the page content
fn content() -> Element {
    div(args![
        // an attribute mapping can carry event handlers
        p(args![
            Attrs::new().on("click", |_| alert("hello")),
            "This is a test",
        ]),
        // text, DOM nodes and other elements can be mixed in any order
        p(args!["This", nbsp(), b(["is"]), nbsp(), "another test"]),
        button(args![
            Attrs::new().on("click", |ev| log::info!("{:?} on the button", ev.type_())),
            "Click me",
        ]),
    ])
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).unwrap();

    // the page should contain an `#app` element to hold the content
    match query("#app") {
        Some(app) => {
            app.append_child(content());
        }
        None => log::error!("Cannot find the #app element"),
    }
}
