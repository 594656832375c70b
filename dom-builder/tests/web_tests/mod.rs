use std::{cell::Cell, rc::Rc, sync::Once};

pub mod attr;

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Trace).unwrap();
    });
}

pub fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

// attach under `<body>` so that document-wide queries can find it
pub fn mount(elem: &web_sys::Element) {
    document().body().unwrap().append_child(elem).unwrap();
}

pub fn unmount(elem: &web_sys::Element) {
    elem.remove();
}

pub fn simulate_event(target: &web_sys::EventTarget, ty: &str, bubbles: bool) {
    let event_init = web_sys::EventInit::new();
    event_init.set_bubbles(bubbles);
    let ev = web_sys::Event::new_with_event_init_dict(ty, &event_init).unwrap();
    target.dispatch_event(&ev).unwrap();
}

pub fn counter() -> (Rc<Cell<u32>>, impl 'static + FnMut(web_sys::Event)) {
    let count = Rc::new(Cell::new(0));
    let count2 = count.clone();
    (count, move |_| count2.set(count2.get() + 1))
}
