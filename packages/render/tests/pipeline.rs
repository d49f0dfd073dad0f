//! A page rendered from records saved through the store.

use blockplus_option_store::InMemoryOptionStore;
use blockplus_records::{BlockRule, Pattern, RawInput, RecordStore, SettingsStore, Snippet};
use blockplus_render::{CleanupPlan, Site};
use serde_json::{json, Value};

fn input(value: Value) -> RawInput {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

fn seeded_store() -> InMemoryOptionStore {
    let mut store = InMemoryOptionStore::new();
    store
        .save_input::<Pattern>(&input(json!({
            "title": "CTA Box",
            "content": "<!-- wp:heading --><h2 class=\"wp-block-heading\">Ready?</h2><!-- /wp:heading --><!-- wp:button --><a class=\"wp-block-button__link\">Go</a><!-- /wp:button -->",
            "enabled": true,
        })))
        .unwrap();
    store
        .save_input::<BlockRule>(&input(json!({
            "block_type": "core/button",
            "css": ".wp-block-button__link { color: red; }",
            "js": "let clicks = 0;",
            "enabled": "1",
        })))
        .unwrap();
    store
        .save_input::<BlockRule>(&input(json!({
            "block_type": "core/image",
            "css": "img { border: 0; }",
            "enabled": "1",
        })))
        .unwrap();
    store
        .save_input::<Snippet>(&input(json!({
            "name": "Analytics",
            "type": "js",
            "code": "let clicks = 1;",
            "scope": ["frontend"],
            "enabled": "on",
        })))
        .unwrap();
    store
        .save_settings(&input(json!({
            "remove_block_classes": ["wp-block-heading"],
            "clean_head": "1",
        })))
        .unwrap();
    store
}

#[test]
fn renders_embedded_pattern_with_rules_and_snippets() {
    let mut store = seeded_store();
    let site = Site::load(&mut store).unwrap();

    let page = site.render_page("<p>Intro</p>\n[blockplus_pattern slug=\"cta-box\"]");

    assert_eq!(
        page.body,
        "<p>Intro</p>\n<h2>Ready?</h2><a class=\"wp-block-button__link\">Go</a>"
    );
    assert!(page.block_types.contains("core/button"));
    assert!(page.head.contains("/* Block: core/button */"));
    assert!(!page.head.contains("img { border: 0; }"));

    // Rule and snippet scripts are separately scoped.
    assert_eq!(page.footer.matches("(function() {").count(), 2);
    assert!(page.footer.contains("/* Snippet: Analytics */\nlet clicks = 1;"));
}

#[test]
fn disabled_pattern_renders_nothing() {
    let mut store = seeded_store();
    let id = store.list::<Pattern>().unwrap().iter().next().unwrap().id.clone();
    assert_eq!(store.toggle::<Pattern>(&id).unwrap(), Some(false));

    let site = Site::load(&mut store).unwrap();
    let page = site.render_page(&format!("<p>a</p>[blockplus_pattern id=\"{}\"]", id));
    assert_eq!(page.body, "<p>a</p>");
    assert_eq!(site.render_pattern(&id), "");
    assert_eq!(site.render_pattern("cta-box"), "");
}

#[test]
fn cleanup_plan_follows_settings() {
    let mut store = seeded_store();
    let plan: CleanupPlan = Site::load(&mut store).unwrap().cleanup_plan();
    assert_eq!(plan.strip_classes, vec!["wp-block-heading"]);
    assert_eq!(plan.remove_actions.len(), 7);
    assert!(plan.dequeue_styles.is_empty());
}

#[test]
fn editor_assets_register_patterns() {
    let mut store = seeded_store();
    let assets = Site::load(&mut store).unwrap().editor_assets();
    assert_eq!(assets.patterns[0].name, "blockplus/cta-box");
    // Frontend-only rules and snippets stay out of the editor.
    assert!(assets.inline_styles.is_empty());
    assert!(assets.inline_scripts.is_empty());
}
