//! Turning stored records into output.
//!
//! On the frontend a [`Site`] renders one document at a time:
//!
//! 1. parse the body and scan it for block types, once
//! 2. render blocks, stripping configured classes from each
//! 3. expand `[blockplus_pattern ...]` placeholders ([`PatternRenderer`])
//! 4. strip configured classes from the whole body
//! 5. collect block rules for the types found, plus global snippets, into a
//!    head `<style>` and a footer `<script>` ([`frontend_injection`])
//!
//! In the editor, [`EditorAssets`] describes the settings, inline code,
//! files, patterns and variations to register.
//!
//! # Example
//!
//! ```rust
//! use blockplus_records::{BlockRule, Records};
//! use blockplus_render::Site;
//!
//! let mut site = Site::default();
//! site.block_rules = Records::from_iter([BlockRule {
//!     id: "rule".to_string(),
//!     block_type: "core/quote".to_string(),
//!     css: "blockquote { margin: 0; }".to_string(),
//!     enabled: true,
//!     ..BlockRule::default()
//! }]);
//!
//! let page = site.render_page("<!-- wp:quote --><blockquote>Hi</blockquote><!-- /wp:quote -->");
//! assert_eq!(page.body, "<blockquote>Hi</blockquote>");
//! assert!(page.head.starts_with("<style id=\"blockplus-per-block-css\">"));
//! ```

mod cleanup;
mod editor;
mod inject;
pub mod matcher;
mod patterns;
mod site;

pub use cleanup::{CleanupPlan, HookRemoval};
pub use editor::{
    EditorAssets, EditorConfig, FileAsset, InlineCode, PatternCategory, PatternRegistration,
    VariationRegistration, EDITOR_HANDLE, PATTERN_CATEGORY,
};
pub use inject::{
    frontend_injection, script_tag, style_tag, Injection, PER_BLOCK_CSS_ID, PER_BLOCK_JS_ID,
    SNIPPET_CSS_ID, SNIPPET_JS_ID,
};
pub use patterns::{PatternRef, PatternRenderer};
pub use site::{RenderedPage, Site};
