//! The payload handed to the block editor when it loads.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

use blockplus_records::{
    BlockRule, CodeKind, CodeScope, EditorSettings, Pattern, Records, Snippet, Variation,
    VariationScope, WidthUnit, WordCountPosition,
};

use crate::matcher::{collect_for_editor, collect_snippets, concat};

/// Handle every editor inline style and script is attached to.
pub const EDITOR_HANDLE: &str = "blockplus-editor";
pub const CSS_FILE_HANDLE: &str = "blockplus-custom-css-file";
pub const JS_FILE_HANDLE: &str = "blockplus-custom-js-file";

pub const PATTERN_CATEGORY: &str = "blockplus-custom";
pub const PATTERN_CATEGORY_LABEL: &str = "Block Editor+ Patterns";
pub const PATTERN_NAMESPACE: &str = "blockplus";

/// Editor settings as the editor script reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    pub editor_width: Option<u32>,
    pub editor_width_unit: WidthUnit,
    pub word_count_enabled: bool,
    pub word_count_position: WordCountPosition,
    pub disable_fullscreen: bool,
    pub focus_mode: bool,
    pub typewriter_mode: bool,
}

impl From<&EditorSettings> for EditorConfig {
    fn from(settings: &EditorSettings) -> Self {
        EditorConfig {
            editor_width: settings.editor_width,
            editor_width_unit: settings.editor_width_unit,
            word_count_enabled: settings.word_count_enabled,
            word_count_position: settings.word_count_position,
            disable_fullscreen: settings.disable_fullscreen,
            focus_mode: settings.focus_mode,
            typewriter_mode: settings.typewriter_mode,
        }
    }
}

/// Code attached inline to a registered asset handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineCode {
    pub handle: &'static str,
    pub code: String,
}

/// An external stylesheet or script to enqueue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAsset {
    pub handle: &'static str,
    pub kind: CodeKind,
    pub url: String,
    pub deps: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRegistration {
    pub name: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub viewport_width: i64,
    pub block_types: Vec<String>,
}

impl From<&Pattern> for PatternRegistration {
    fn from(pattern: &Pattern) -> Self {
        let mut categories = vec![PATTERN_CATEGORY.to_string()];
        categories.extend(pattern.categories.iter().cloned());
        PatternRegistration {
            name: format!("{}/{}", PATTERN_NAMESPACE, pattern.slug),
            title: pattern.title.clone(),
            description: pattern.description.clone(),
            content: pattern.content.clone(),
            categories,
            keywords: pattern.keywords.iter().cloned().collect(),
            viewport_width: pattern.viewport_width,
            block_types: pattern.block_types.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationRegistration {
    pub block_type: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub scope: BTreeSet<VariationScope>,
    pub attributes: Map<String, Value>,
    pub inner_blocks: Vec<Value>,
    pub keywords: Vec<String>,
}

impl From<&Variation> for VariationRegistration {
    fn from(variation: &Variation) -> Self {
        VariationRegistration {
            block_type: variation.block_type.clone(),
            name: variation.name.clone(),
            title: variation.title.clone(),
            description: variation.description.clone(),
            icon: variation.icon.clone(),
            category: variation.category.clone(),
            scope: variation.scope.clone(),
            attributes: variation.attributes.clone(),
            inner_blocks: variation.inner_blocks.clone(),
            keywords: variation.keywords.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCategory {
    pub name: &'static str,
    pub label: &'static str,
}

/// Everything the editor needs at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorAssets {
    pub settings: EditorConfig,
    pub inline_styles: Vec<InlineCode>,
    pub inline_scripts: Vec<InlineCode>,
    pub files: Vec<FileAsset>,
    pub pattern_category: PatternCategory,
    pub patterns: Vec<PatternRegistration>,
    pub variations: Vec<VariationRegistration>,
}

impl EditorAssets {
    /// Inline code order: settings code, then editor block rules as one
    /// body, then each editor snippet on its own.
    pub fn build(
        settings: &EditorSettings,
        rules: &Records<BlockRule>,
        snippets: &Records<Snippet>,
        patterns: &Records<Pattern>,
        variations: &Records<Variation>,
    ) -> EditorAssets {
        let inline = |settings_code: &str, kind: CodeKind| {
            let rule_code = concat(&collect_for_editor(rules, kind));
            let snippet_code = collect_snippets(snippets, CodeScope::Editor, kind)
                .into_iter()
                .map(|matched| matched.body.to_string());

            [settings_code.to_string(), rule_code]
                .into_iter()
                .chain(snippet_code)
                .filter(|code| !code.is_empty())
                .map(|code| InlineCode {
                    handle: EDITOR_HANDLE,
                    code,
                })
                .collect::<Vec<_>>()
        };

        let mut files = Vec::new();
        if !settings.custom_css_file.is_empty() {
            files.push(FileAsset {
                handle: CSS_FILE_HANDLE,
                kind: CodeKind::Css,
                url: settings.custom_css_file.clone(),
                deps: vec![EDITOR_HANDLE],
            });
        }
        if !settings.custom_js_file.is_empty() {
            files.push(FileAsset {
                handle: JS_FILE_HANDLE,
                kind: CodeKind::Js,
                url: settings.custom_js_file.clone(),
                deps: vec![EDITOR_HANDLE],
            });
        }

        EditorAssets {
            settings: EditorConfig::from(settings),
            inline_styles: inline(&settings.custom_css_inline, CodeKind::Css),
            inline_scripts: inline(&settings.custom_js_inline, CodeKind::Js),
            files,
            pattern_category: PatternCategory {
                name: PATTERN_CATEGORY,
                label: PATTERN_CATEGORY_LABEL,
            },
            patterns: patterns.enabled().map(PatternRegistration::from).collect(),
            variations: variations
                .enabled()
                .map(VariationRegistration::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn settings_serialize_camel_case() {
        let settings = EditorSettings {
            editor_width: Some(960),
            editor_width_unit: WidthUnit::Percent,
            ..EditorSettings::default()
        };
        let value = serde_json::to_value(EditorConfig::from(&settings)).unwrap();
        assert_eq!(value["editorWidth"], json!(960));
        assert_eq!(value["editorWidthUnit"], json!("%"));
        assert_eq!(value["wordCountEnabled"], json!(true));
        assert_eq!(value["wordCountPosition"], json!("top"));
    }

    #[test]
    fn collects_inline_code_and_files() {
        let settings = EditorSettings {
            custom_css_inline: ".editor{}".to_string(),
            custom_js_file: "https://cdn.example.com/a.js".to_string(),
            ..EditorSettings::default()
        };
        let rules: Records<BlockRule> = [BlockRule {
            id: "r1".to_string(),
            block_type: "core/quote".to_string(),
            css: ".q{}".to_string(),
            scope: BTreeSet::from([CodeScope::Editor]),
            enabled: true,
            ..BlockRule::default()
        }]
        .into_iter()
        .collect();
        let snippets: Records<Snippet> = [Snippet {
            id: "s1".to_string(),
            name: "Ed".to_string(),
            code: ".s{}".to_string(),
            enabled: true,
            ..Snippet::default()
        }]
        .into_iter()
        .collect();

        let assets = EditorAssets::build(&settings, &rules, &snippets, &Records::new(), &Records::new());
        let styles: Vec<&str> = assets.inline_styles.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(styles, vec![".editor{}", "\n/* Block: core/quote */\n.q{}", ".s{}"]);
        assert!(assets.inline_scripts.is_empty());
        assert_eq!(assets.files.len(), 1);
        assert_eq!(assets.files[0].handle, JS_FILE_HANDLE);
    }

    #[test]
    fn registers_enabled_patterns_and_variations() {
        let patterns: Records<Pattern> = [
            Pattern {
                id: "p1".to_string(),
                slug: "hero".to_string(),
                title: "Hero".to_string(),
                categories: BTreeSet::from(["featured".to_string()]),
                enabled: true,
                ..Pattern::default()
            },
            Pattern {
                id: "p2".to_string(),
                slug: "draft".to_string(),
                ..Pattern::default()
            },
        ]
        .into_iter()
        .collect();
        let variations: Records<Variation> = [Variation {
            id: "v1".to_string(),
            name: "wide-quote".to_string(),
            block_type: "core/quote".to_string(),
            enabled: true,
            ..Variation::default()
        }]
        .into_iter()
        .collect();

        let assets = EditorAssets::build(
            &EditorSettings::default(),
            &Records::new(),
            &Records::new(),
            &patterns,
            &variations,
        );
        assert_eq!(assets.patterns.len(), 1);
        assert_eq!(assets.patterns[0].name, "blockplus/hero");
        assert_eq!(assets.patterns[0].categories, vec!["blockplus-custom", "featured"]);
        assert_eq!(assets.patterns[0].viewport_width, 1200);

        let value = serde_json::to_value(&assets.variations[0]).unwrap();
        assert_eq!(value["blockType"], json!("core/quote"));
        assert_eq!(value["scope"], json!(["inserter"]));
    }
}
