#![allow(clippy::unwrap_used, reason = "catalog lookups in tests are known to succeed")]

use css_inline_style::{InlineStyle, PropertyCatalog, StyleOwner};
use css_style_attr::{parse_style_attribute_into_map, to_dashed};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

/// Owner that counts update requests.
#[derive(Clone, Default)]
struct Counter(Rc<Cell<u32>>);

impl Counter {
    fn count(&self) -> u32 {
        self.0.get()
    }
}

impl StyleOwner for Counter {
    fn perform_update(&self) {
        self.0.set(self.0.get() + 1);
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn style_with(names: &[&str]) -> (InlineStyle<Counter>, Counter) {
    init_logging();
    let counter = Counter::default();
    let catalog = Arc::new(PropertyCatalog::new(names.iter().copied()));
    (InlineStyle::new(counter.clone(), catalog), counter)
}

#[test]
fn color_then_replace_with_background() {
    let (mut style, _) = style_with(&["color", "backgroundColor"]);
    style.set_by_name("color", "red").unwrap();
    assert_eq!(style.css_text(), "color: red;");

    style.set_css_text("background-color: blue;");
    assert_eq!(style.get_by_name("color").unwrap(), "");
    assert_eq!(style.css_text(), "background-color: blue;");
}

#[test]
fn every_standard_property_reads_back_and_serializes() {
    init_logging();
    let mut style = InlineStyle::new(Counter::default(), PropertyCatalog::standard());
    let names: Vec<String> = style.catalog().iter().map(|(_, name)| name.to_owned()).collect();
    for name in &names {
        style.set_by_name(name, "inherit").unwrap();
        let dashed = to_dashed(name);
        assert_eq!(style.get_property_value(&dashed), "inherit");
        assert!(style.css_text().contains(&format!("{dashed}: inherit;")));
    }
    assert_eq!(style.len(), names.len());
}

#[test]
fn repeated_assignment_notifies_once() {
    let (mut style, counter) = style_with(&["width"]);
    style.set_by_name("width", "10px").unwrap();
    style.set_by_name("width", "10px").unwrap();
    style.set_property("width", "10px");
    assert_eq!(counter.count(), 1);
}

#[test]
fn reparsing_serialized_text_gives_same_declarations() {
    let (mut style, _) = style_with(&["color", "marginTop", "zIndex", "fontFamily"]);
    let source = "margin-top:4px;  color : red ;z-index: 2; font-family: a, b";
    style.set_css_text(source);
    let normalized = style.css_text();
    assert_eq!(
        normalized,
        "margin-top: 4px;color: red;z-index: 2;font-family: a, b;"
    );
    assert_eq!(
        parse_style_attribute_into_map(&normalized),
        parse_style_attribute_into_map(source)
    );

    style.set_css_text(&normalized);
    assert_eq!(style.css_text(), normalized);
}

#[test]
fn remove_returns_previous_value() {
    let (mut style, counter) = style_with(&["color", "opacity"]);
    style.set_property("opacity", "0.5");
    assert_eq!(style.remove_property("opacity"), "0.5");
    assert_eq!(style.get_property_value("opacity"), "");
    assert_eq!(counter.count(), 2);

    assert_eq!(style.remove_property("color"), "");
    assert_eq!(style.remove_property("opacity"), "");
    assert_eq!(counter.count(), 2);
}

#[test]
fn empty_css_text_clears_everything() {
    let (mut style, _) = style_with(&["color", "backgroundColor", "display"]);
    style.set_property("color", "red");
    style.set_property("background-color", "blue");
    style.set_property("display", "flex");

    style.set_css_text("");
    assert_eq!(style.css_text(), "");
    assert!(style.is_empty());
    for name in ["color", "background-color", "display"] {
        assert_eq!(style.get_property_value(name), "");
    }
}

#[test]
fn malformed_rules_are_skipped() {
    let (mut style, _) = style_with(&["color", "background"]);
    style.set_css_text("color red; background: blue;");
    assert_eq!(style.get_property_value("color"), "");
    assert_eq!(style.get_property_value("background"), "blue");
    assert_eq!(style.css_text(), "background: blue;");
}

#[test]
fn css_text_write_is_a_full_replace() {
    let (mut style, counter) = style_with(&["color", "width"]);
    style.set_css_text("color: red; width: 1px");
    assert_eq!(counter.count(), 2);

    // clears both, then sets color again
    style.set_css_text("color: red");
    assert_eq!(style.css_text(), "color: red;");
    assert_eq!(counter.count(), 5);
}

#[test]
fn unknown_properties_in_css_text_are_dropped() {
    let (mut style, counter) = style_with(&["color"]);
    style.set_css_text("colour: red; color: green; -webkit-thing: 1");
    assert_eq!(style.css_text(), "color: green;");
    assert_eq!(counter.count(), 1);
}

#[test]
fn unicode_padding_around_rules_is_trimmed() {
    let (mut style, _) = style_with(&["color", "width"]);
    style.set_css_text("color:\u{00A0}red\u{00A0};\u{000B}width: 1px");
    assert_eq!(style.get_property_value("color"), "red");
    assert_eq!(style.get_property_value("width"), "1px");
    assert_eq!(style.css_text(), "color: red;width: 1px;");
}
