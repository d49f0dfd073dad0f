//! Everything one request needs, loaded once and rendered against.

use blockplus_blocks::{has_blocks, parse, strip_classes, Block, BlockTypes, ClassStripper, Renderer};
use blockplus_option_store::OptionStore;
use blockplus_records::{
    BlockRule, Error, Pattern, RecordStore, Records, Settings, SettingsStore, Snippet, Variation,
};

use crate::cleanup::CleanupPlan;
use crate::editor::EditorAssets;
use crate::inject::{frontend_injection, Injection};
use crate::patterns::PatternRenderer;

/// A rendered document body plus the code injected around it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub head: String,
    pub body: String,
    pub footer: String,
    /// Block types found in the body and in every pattern it embeds.
    pub block_types: BlockTypes,
}

/// A snapshot of the stored records and settings.
///
/// Built once per request; rendering never touches the store.
#[derive(Debug, Clone, Default)]
pub struct Site {
    pub patterns: Records<Pattern>,
    pub block_rules: Records<BlockRule>,
    pub snippets: Records<Snippet>,
    pub variations: Records<Variation>,
    pub settings: Settings,
}

impl Site {
    pub fn load<S: OptionStore + ?Sized>(store: &mut S) -> Result<Site, Error> {
        Ok(Site {
            patterns: store.list()?,
            block_rules: store.list()?,
            snippets: store.list()?,
            variations: store.list()?,
            settings: store.load_settings()?,
        })
    }

    fn class_stripper(&self) -> ClassStripper {
        ClassStripper::new(self.settings.frontend.classes_to_remove())
    }

    /// Render a document for the frontend.
    ///
    /// The body is parsed and scanned once. Each block passes through the
    /// class filter as it renders, pattern placeholders are expanded, the
    /// full body is class-stripped again, and code for the block types
    /// found is injected into head and footer.
    pub fn render_page(&self, content: &str) -> RenderedPage {
        let stripper = self.class_stripper();
        let mut renderer = Renderer::new();
        if !stripper.is_empty() {
            renderer.add_filter(stripper.clone());
        }

        let blocks = if has_blocks(content) {
            parse(content)
        } else {
            vec![Block::freeform(content)]
        };
        let mut present = BlockTypes::new();
        present.add_blocks(&blocks);

        let body = renderer.render(&blocks);
        let body = PatternRenderer::new(&self.patterns).expand(&body, &renderer, &mut present);
        let body = if stripper.is_empty() {
            body
        } else {
            stripper.strip(&body)
        };

        let Injection { head, footer } =
            frontend_injection(&self.block_rules, &self.snippets, &present);
        RenderedPage {
            head,
            body,
            footer,
            block_types: present,
        }
    }

    /// Render one pattern by id or slug, as a placeholder would.
    pub fn render_pattern(&self, identifier: &str) -> String {
        let patterns = PatternRenderer::new(&self.patterns);
        let renderer = Renderer::new();
        let html = patterns.render(patterns.resolve(identifier), &renderer, &mut BlockTypes::new());
        strip_classes(&html, &self.settings.frontend.classes_to_remove())
    }

    pub fn editor_assets(&self) -> EditorAssets {
        EditorAssets::build(
            &self.settings.editor,
            &self.block_rules,
            &self.snippets,
            &self.patterns,
            &self.variations,
        )
    }

    pub fn cleanup_plan(&self) -> CleanupPlan {
        CleanupPlan::from_settings(&self.settings.frontend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockplus_records::CodeScope;
    use std::collections::BTreeSet;

    fn site() -> Site {
        let mut site = Site::default();
        site.patterns = [Pattern {
            id: "pattern_1".to_string(),
            slug: "cta-box".to_string(),
            content: "<!-- wp:buttons --><div class=\"wp-block-buttons\">Go</div><!-- /wp:buttons -->".to_string(),
            enabled: true,
            ..Pattern::default()
        }]
        .into_iter()
        .collect();
        site.block_rules = [
            BlockRule {
                id: "r1".to_string(),
                block_type: "core/buttons".to_string(),
                css: ".b{}".to_string(),
                enabled: true,
                ..BlockRule::default()
            },
            BlockRule {
                id: "r2".to_string(),
                block_type: "core/quote".to_string(),
                js: "q();".to_string(),
                scope: BTreeSet::from([CodeScope::Frontend, CodeScope::Editor]),
                enabled: true,
                ..BlockRule::default()
            },
        ]
        .into_iter()
        .collect();
        site
    }

    #[test]
    fn plain_content_passes_through() {
        let page = site().render_page("<p>Hello</p>");
        assert_eq!(page.body, "<p>Hello</p>");
        assert!(page.block_types.is_empty());
        assert!(page.head.is_empty());
        assert!(page.footer.is_empty());
    }

    #[test]
    fn embedded_pattern_blocks_activate_rules() {
        let page = site().render_page(
            "<!-- wp:paragraph --><p>Hi</p><!-- /wp:paragraph -->[blockplus_pattern slug=\"cta-box\"]",
        );
        assert_eq!(page.body, "<p>Hi</p><div class=\"wp-block-buttons\">Go</div>");
        assert!(page.block_types.contains("core/buttons"));
        assert!(page.head.contains("/* Block: core/buttons */\n.b{}"));
        assert!(page.footer.is_empty());
    }

    #[test]
    fn strips_configured_classes() {
        let mut site = site();
        site.settings.frontend.remove_block_classes = vec!["wp-block-buttons".to_string()];
        site.settings.frontend.custom_classes_to_remove = "lead".to_string();

        let page = site.render_page(
            "<!-- wp:paragraph --><p class=\"lead x\">Hi</p><!-- /wp:paragraph -->\n<div class=\"lead\">raw</div>[blockplus_pattern id=\"pattern_1\"]",
        );
        assert_eq!(page.body, "<p class=\"x\">Hi</p>\n<div>raw</div><div>Go</div>");
        assert_eq!(site.render_pattern("cta-box"), "<div>Go</div>");
    }

    #[test]
    fn quote_rule_runs_only_with_quote_present() {
        let site = site();
        let page = site.render_page("<!-- wp:quote --><blockquote>q</blockquote><!-- /wp:quote -->");
        assert!(page.head.is_empty());
        assert!(page.footer.contains("q();"));
    }
}
