use wasm_bindgen_test::*;

use dom_builder::{handler_fn, prelude::*};

use super::*;

#[wasm_bindgen_test]
fn set_and_read_attrs() {
    init();
    let elem = div(args![]).set_attrs(Attrs::new().set("a", "1").set("b", "2"));
    let attrs = elem.attrs();
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs["a"], "1");
    assert_eq!(attrs["b"], "2");
    assert!(!attrs.contains_key("id"));
    assert!(!attrs.contains_key("class"));
}

#[wasm_bindgen_test]
fn attrs_include_id_and_class() {
    init();
    let elem = div(args![Attrs::new()
        .set("id", "x")
        .set("class", "y")
        .set("data-k", "v")]);
    let attrs = elem.attrs();
    assert_eq!(attrs.len(), 3);
    assert_eq!(attrs["id"], "x");
    assert_eq!(attrs["class"], "y");
    assert_eq!(attrs["data-k"], "v");
    assert_eq!(elem.id(), "x");
    assert_eq!(elem.class(), "y");
}

#[wasm_bindgen_test]
fn remove_attrs() {
    init();
    let elem = div(args![]).set_attrs(Attrs::new().set("a", "1").set("b", "2"));
    let elem = elem.set_attrs(Attrs::new().remove("a"));
    assert!(!elem.attrs().contains_key("a"));
    assert_eq!(elem.attr("b").as_deref(), Some("2"));
    let elem = elem.set_attr("b", None::<&str>);
    assert!(elem.attrs().is_empty());
    let elem = elem.set_attr("c", "3").remove_attr("c").remove_attr("not-exists");
    assert!(elem.attrs().is_empty());
}

#[wasm_bindgen_test]
fn removing_id_through_attrs_is_ignored() {
    init();
    let elem = div(args![])
        .set_id("x")
        .set_class("y")
        .set_attrs(Attrs::new().remove("id").set("class", ""));
    assert_eq!(elem.id(), "x");
    assert_eq!(elem.class(), "y");
}

#[wasm_bindgen_test]
fn values_are_set_verbatim() {
    init();
    let value = String::from("  spaced <value> ");
    let elem = div(args![]).set_attr("title", &value);
    assert_eq!(elem.attr("title"), Some(value));
    let elem = elem.set_attr("title", "");
    assert_eq!(elem.attr("title").as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn handler_entry_does_not_stop_later_entries() {
    init();
    let (count, f) = counter();
    let elem = button(args![
        Attrs::new()
            .set("a", "1")
            .on("click", f)
            .set("title", "t"),
        "Click me",
    ]);
    assert_eq!(elem.attr("a").as_deref(), Some("1"));
    assert_eq!(elem.attr("title").as_deref(), Some("t"));
    assert!(!elem.attrs().contains_key("click"));
    assert_eq!(elem.handler_count("click"), 1);
    simulate_event(elem.el(), "click", true);
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
fn invalid_attribute_name() {
    init();
    let mut elem = div(args![]).set_attrs(Attrs::new().set("bad name", "x").set("good", "y"));
    assert_eq!(elem.attrs().len(), 1);
    assert_eq!(elem.attr("good").as_deref(), Some("y"));
    match elem.try_set_attr("bad name", "x") {
        Err(Error::InvalidAttributeName { name, .. }) => assert_eq!(name, "bad name"),
        x => panic!("unexpected result {:?}", x),
    }
    let mut elem = div(args![]);
    let ret = elem.try_set_attrs(Attrs::new().set("a", "1").set("bad name", "x"));
    assert!(matches!(ret, Err(Error::InvalidAttributeName { .. })));
    // entries before the failing one stay applied
    assert_eq!(elem.attr("a").as_deref(), Some("1"));
}

#[wasm_bindgen_test]
fn failed_set_attrs_keeps_tracked_handlers() {
    init();
    let (count, f) = counter();
    let mut elem = button(args![]);
    let ret = elem.try_set_attrs(Attrs::new().on("click", f).set("bad name", "x"));
    assert!(matches!(ret, Err(Error::InvalidAttributeName { .. })));
    assert_eq!(elem.handler_count("click"), 1);
    simulate_event(elem.el(), "click", false);
    assert_eq!(count.get(), 1);
    let elem = elem.off("click");
    assert_eq!(elem.handler_count("click"), 0);
    simulate_event(elem.el(), "click", false);
    assert_eq!(count.get(), 1);
}

#[wasm_bindgen_test]
fn handler_under_id_or_class_is_not_a_listener() {
    init();
    let (count, f) = counter();
    let (count2, f2) = counter();
    let elem = div(args![Attrs::new()
        .set("id", handler_fn(f))
        .set("class", handler_fn(f2))
        .set("title", "t")]);
    assert_eq!(elem.handler_count("id"), 0);
    assert_eq!(elem.handler_count("class"), 0);
    assert_eq!(elem.id(), "");
    assert_eq!(elem.class(), "");
    assert_eq!(elem.attr("title").as_deref(), Some("t"));
    simulate_event(elem.el(), "id", false);
    simulate_event(elem.el(), "class", false);
    assert_eq!(count.get(), 0);
    assert_eq!(count2.get(), 0);
}

#[wasm_bindgen_test]
fn attrs_from_pairs() {
    init();
    let attrs: Attrs = vec![("id", "p1"), ("lang", "en")].into_iter().collect();
    let elem = p(args![attrs, "text"]);
    assert_eq!(elem.outer_html(), r#"<p id="p1" lang="en">text</p>"#);
}

#[wasm_bindgen_test]
fn remove_attr_works_for_id() {
    init();
    let elem = div(args![]).set_id("x").set_class("y");
    let elem = elem.remove_attr("id").remove_attr("class");
    assert_eq!(elem.id(), "");
    assert_eq!(elem.class(), "");
    assert!(elem.attrs().is_empty());
}
