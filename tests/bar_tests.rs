//! Tests for rendering formats against a bar.
//!
//! This file covers the bar builder, the render and debug output of every
//! token kind, and the diagnostic emitted for unresolved custom verbs.

use tallybar::{BarBuilder, BarConfig, Error, Glyphs, ProgressState};

mod common;
use common::helpers::*;

#[test]
fn test_builder_defaults() {
    let bar = BarBuilder::new().build().unwrap();
    assert_eq!(bar.config(), &BarConfig::default());
    assert_eq!(bar.total(), 100);
    assert_eq!(bar.width(), 40);
    assert_eq!(bar.glyphs(), &Glyphs::classic());
    assert_eq!(bar.format().source(), BarConfig::FORMAT_DEFAULT);
}

#[test]
fn test_builder_rejects_empty_verb() {
    let result = BarBuilder::new().custom_verb("").build();
    assert!(matches!(result, Err(Error::InvalidVerb(_))));
}

#[test]
fn test_builder_accepts_shadowed_verb() {
    let bar = BarBuilder::new().format(":bar").custom_verb("bar").build();
    assert!(bar.is_ok());
}

#[test]
fn test_bar_empty_has_no_complete_glyphs() {
    let bar = create_test_bar(10, ":bar", NO_VERBS);
    let out = bar.render();
    assert_eq!(out.matches('=').count(), 0);
    assert_eq!(out, "[>----------]");
}

#[test]
fn test_bar_full() {
    let mut bar = create_test_bar(10, ":bar", NO_VERBS);
    bar.set_position(10);
    let out = bar.render();
    assert_eq!(out.matches('=').count(), TEST_WIDTH - 1);
    assert_eq!(out.matches('-').count(), 0);
    assert_eq!(out, "[=========>]");
}

#[test]
fn test_bar_with_line_glyphs() {
    let mut bar = BarBuilder::new()
        .total(4)
        .width(4)
        .glyphs(Glyphs::line())
        .format(":bar")
        .build()
        .unwrap();
    bar.set_position(2);
    assert_eq!(bar.render(), "━╾──");
}

#[test]
fn test_percent_rounding() {
    let mut bar = create_test_bar(10000, ":percent", NO_VERBS);
    bar.set_position(2567);
    assert_eq!(bar.render(), "25.7%");
}

#[test]
fn test_rate_and_eta() {
    let mut bar = create_test_bar(100, ":rate/s eta :eta", NO_VERBS);
    advance(&mut bar, 50, 10);
    assert_eq!(bar.render(), "5.0/s eta 10 seconds");
}

#[test]
fn test_custom_verb_resolves() {
    let mut bar = create_test_bar(10, ":foo", &["foo"]);
    bar.set_value("foo", 42);

    let (out, logs) = capture_warnings(|| bar.render());
    assert_eq!(out, "42");
    assert!(logs.is_empty());
}

#[test]
fn test_custom_verb_unresolved_emits_diagnostic() {
    let bar = create_test_bar(10, ":foo :bar", &["foo"]);

    let (out, logs) = capture_warnings(|| bar.render());
    assert_eq!(out, "foo [>----------]");
    assert!(logs.contains("WARN"));
    assert!(logs.contains("unresolved custom verb"));
    assert!(logs.contains("foo"));
}

#[test]
fn test_render_is_deterministic() {
    let mut bar = create_test_bar(8, "[:name] :bar :percent", &["name"]);
    bar.set_value("name", "job");
    advance(&mut bar, 3, 2);
    assert_eq!(bar.render(), bar.render());
    assert_eq!(bar.render(), "[job] [==>-------] 37.5%");
}

#[test]
fn test_debug_output() {
    let mut bar = create_test_bar(10, ":bar :percent :foo x", &["foo"]);
    bar.set_value("foo", "v");
    bar.set_position(3);
    assert_eq!(
        bar.debug(),
        "<bar progress=3 total=10> <percent \"30.0%\"> <custom verb=\"foo\" value=\"v\"> <literal \"x\">"
    );
}

#[test]
fn test_unmatched_action_renders_verbatim() {
    let bar = create_test_bar(10, "::bar :nope", NO_VERBS);
    assert_eq!(bar.render(), "::bar :nope");
}
