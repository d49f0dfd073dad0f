//! Global settings: one versioned record read at render time.

use serde::{Deserialize, Serialize};

use crate::input::{
    choice_field, int_field, is_truthy, list_field, sanitize_url, strip_all_tags,
    textarea_field, verbatim_field,
};
use crate::{Choice, RawInput};

pub const SETTINGS_OPTION: &str = "blockplus_settings";

/// Bumped whenever the stored settings layout changes.
pub const SETTINGS_VERSION: u32 = 1;

/// Core block classes an operator may strip from frontend markup, with labels.
pub const BLOCK_CLASS_CATALOG: &[(&str, &str)] = &[
    ("wp-block-paragraph", "Paragraph"),
    ("wp-block-heading", "Heading"),
    ("wp-block-list", "List"),
    ("wp-block-quote", "Quote"),
    ("wp-block-pullquote", "Pullquote"),
    ("wp-block-code", "Code"),
    ("wp-block-preformatted", "Preformatted"),
    ("wp-block-verse", "Verse"),
    ("wp-block-image", "Image"),
    ("wp-block-gallery", "Gallery"),
    ("wp-block-audio", "Audio"),
    ("wp-block-video", "Video"),
    ("wp-block-cover", "Cover"),
    ("wp-block-file", "File"),
    ("wp-block-media-text", "Media & Text"),
    ("wp-block-buttons", "Buttons"),
    ("wp-block-button", "Button"),
    ("wp-block-columns", "Columns"),
    ("wp-block-column", "Column"),
    ("wp-block-group", "Group"),
    ("wp-block-row", "Row"),
    ("wp-block-stack", "Stack"),
    ("wp-block-separator", "Separator"),
    ("wp-block-spacer", "Spacer"),
    ("wp-block-table", "Table"),
    ("wp-block-search", "Search"),
    ("wp-block-archives", "Archives"),
    ("wp-block-categories", "Categories"),
    ("wp-block-latest-posts", "Latest Posts"),
    ("wp-block-calendar", "Calendar"),
    ("wp-block-tag-cloud", "Tag Cloud"),
    ("wp-block-social-links", "Social Icons"),
    ("wp-block-navigation", "Navigation"),
    ("wp-block-site-logo", "Site Logo"),
    ("wp-block-site-title", "Site Title"),
    ("wp-block-site-tagline", "Site Tagline"),
    ("wp-block-post-title", "Post Title"),
    ("wp-block-post-content", "Post Content"),
    ("wp-block-post-excerpt", "Post Excerpt"),
    ("wp-block-post-featured-image", "Featured Image"),
    ("wp-block-post-date", "Post Date"),
    ("wp-block-post-author", "Post Author"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthUnit {
    #[default]
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "vw")]
    Vw,
}

impl Choice for WidthUnit {
    const ALL: &'static [Self] = &[WidthUnit::Px, WidthUnit::Percent, WidthUnit::Vw];

    fn as_str(&self) -> &'static str {
        match self {
            WidthUnit::Px => "px",
            WidthUnit::Percent => "%",
            WidthUnit::Vw => "vw",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCountPosition {
    #[default]
    Top,
    Bottom,
}

impl Choice for WordCountPosition {
    const ALL: &'static [Self] = &[WordCountPosition::Top, WordCountPosition::Bottom];

    fn as_str(&self) -> &'static str {
        match self {
            WordCountPosition::Top => "top",
            WordCountPosition::Bottom => "bottom",
        }
    }
}

/// Settings consumed by the editor script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Content column width; `None` keeps the editor's own width.
    pub editor_width: Option<u32>,
    pub editor_width_unit: WidthUnit,
    pub word_count_enabled: bool,
    pub word_count_position: WordCountPosition,
    pub focus_mode: bool,
    pub typewriter_mode: bool,
    pub disable_fullscreen: bool,
    pub custom_css_inline: String,
    pub custom_css_file: String,
    pub custom_js_inline: String,
    pub custom_js_file: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            editor_width: None,
            editor_width_unit: WidthUnit::Px,
            word_count_enabled: true,
            word_count_position: WordCountPosition::Top,
            focus_mode: false,
            typewriter_mode: false,
            disable_fullscreen: false,
            custom_css_inline: String::new(),
            custom_css_file: String::new(),
            custom_js_inline: String::new(),
            custom_js_file: String::new(),
        }
    }
}

/// Frontend cleanup toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendSettings {
    /// Selections from [`BLOCK_CLASS_CATALOG`].
    pub remove_block_classes: Vec<String>,
    /// Freeform class names, one per line.
    pub custom_classes_to_remove: String,
    pub remove_block_library: bool,
    pub remove_global_styles: bool,
    pub remove_duotone_svg: bool,
    pub lazy_load_images: bool,
    pub defer_block_styles: bool,
    pub clean_head: bool,
    pub remove_emoji_scripts: bool,
    pub remove_embed_script: bool,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            remove_block_classes: Vec::new(),
            custom_classes_to_remove: String::new(),
            remove_block_library: false,
            remove_global_styles: false,
            remove_duotone_svg: false,
            lazy_load_images: true,
            defer_block_styles: false,
            clean_head: false,
            remove_emoji_scripts: false,
            remove_embed_script: false,
        }
    }
}

impl FrontendSettings {
    /// Every class to strip: catalog selections, then the freeform list.
    /// Blank lines and repeats are dropped.
    pub fn classes_to_remove(&self) -> Vec<String> {
        let mut classes: Vec<String> = Vec::new();
        let freeform = self.custom_classes_to_remove.lines();
        for class in self.remove_block_classes.iter().map(String::as_str).chain(freeform) {
            let class = class.trim();
            if !class.is_empty() && !classes.iter().any(|seen| seen == class) {
                classes.push(class.to_string());
            }
        }
        classes
    }
}

/// The global settings record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub version: u32,
    pub editor: EditorSettings,
    pub frontend: FrontendSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            editor: EditorSettings::default(),
            frontend: FrontendSettings::default(),
        }
    }
}

impl Settings {
    /// Build settings from flat form input. Settings never fail validation.
    ///
    /// Checkboxes follow truthiness, so an absent checkbox is off: a form
    /// leaves unchecked boxes out of the request.
    pub fn sanitize(input: &RawInput) -> Settings {
        let editor_width = match int_field(input.get("editor_width"), -1) {
            width if width > 0 => u32::try_from(width).ok(),
            _ => None,
        };

        let editor = EditorSettings {
            editor_width,
            editor_width_unit: choice_field(input.get("editor_width_unit"), WidthUnit::Px),
            word_count_enabled: is_truthy(input.get("word_count_enabled")),
            word_count_position: choice_field(
                input.get("word_count_position"),
                WordCountPosition::Top,
            ),
            focus_mode: is_truthy(input.get("focus_mode")),
            typewriter_mode: is_truthy(input.get("typewriter_mode")),
            disable_fullscreen: is_truthy(input.get("disable_fullscreen")),
            custom_css_inline: verbatim_field(input.get("custom_css_inline"))
                .map(|css| strip_all_tags(&css))
                .unwrap_or_default(),
            custom_css_file: verbatim_field(input.get("custom_css_file"))
                .map(|url| sanitize_url(&url))
                .unwrap_or_default(),
            custom_js_inline: verbatim_field(input.get("custom_js_inline")).unwrap_or_default(),
            custom_js_file: verbatim_field(input.get("custom_js_file"))
                .map(|url| sanitize_url(&url))
                .unwrap_or_default(),
        };

        let frontend = FrontendSettings {
            remove_block_classes: list_field(input.get("remove_block_classes"))
                .unwrap_or_default()
                .into_iter()
                .filter(|class| BLOCK_CLASS_CATALOG.iter().any(|(known, _)| *known == class.as_str()))
                .collect(),
            custom_classes_to_remove: textarea_field(input.get("custom_classes_to_remove"))
                .unwrap_or_default(),
            remove_block_library: is_truthy(input.get("remove_block_library")),
            remove_global_styles: is_truthy(input.get("remove_global_styles")),
            remove_duotone_svg: is_truthy(input.get("remove_duotone_svg")),
            lazy_load_images: is_truthy(input.get("lazy_load_images")),
            defer_block_styles: is_truthy(input.get("defer_block_styles")),
            clean_head: is_truthy(input.get("clean_head")),
            remove_emoji_scripts: is_truthy(input.get("remove_emoji_scripts")),
            remove_embed_script: is_truthy(input.get("remove_embed_script")),
        };

        Settings {
            version: SETTINGS_VERSION,
            editor,
            frontend,
        }
    }
}
