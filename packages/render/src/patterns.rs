//! Pattern lookup, rendering and placeholder expansion.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use blockplus_blocks::{has_blocks, parse, BlockTypes, Renderer};
use blockplus_records::{Pattern, Records};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\[blockplus_pattern(?P<attrs>[^\]]*)\]").unwrap();
    static ref PLACEHOLDER_ATTR: Regex =
        Regex::new(r#"(?P<key>[a-z_]+)\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\s"']+))"#)
            .unwrap();
}

/// How a placeholder names its pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternRef {
    Id(String),
    Slug(String),
}

impl PatternRef {
    /// Read the `id` or `slug` attribute of a placeholder's attribute text.
    /// A non-empty `id` wins over `slug`.
    pub fn from_attrs(attrs: &str) -> Option<PatternRef> {
        let mut id = None;
        let mut slug = None;
        for caps in PLACEHOLDER_ATTR.captures_iter(attrs) {
            let value = ["dq", "sq", "bare"]
                .iter()
                .find_map(|group| caps.name(group))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            match &caps["key"] {
                "id" => id = Some(value),
                "slug" => slug = Some(value),
                _ => {}
            }
        }
        match (id, slug) {
            (Some(id), _) if !id.is_empty() => Some(PatternRef::Id(id)),
            (_, Some(slug)) if !slug.is_empty() => Some(PatternRef::Slug(slug)),
            _ => None,
        }
    }
}

/// Read access to stored patterns for rendering.
pub struct PatternRenderer<'p> {
    patterns: &'p Records<Pattern>,
}

impl<'p> PatternRenderer<'p> {
    pub fn new(patterns: &'p Records<Pattern>) -> Self {
        PatternRenderer { patterns }
    }

    /// Find a pattern by id, falling back to a scan of slugs.
    pub fn resolve(&self, identifier: &str) -> Option<&'p Pattern> {
        self.patterns
            .get(identifier)
            .or_else(|| self.find_slug(identifier))
    }

    pub fn resolve_ref(&self, reference: &PatternRef) -> Option<&'p Pattern> {
        match reference {
            PatternRef::Id(id) => self.patterns.get(id),
            PatternRef::Slug(slug) => self.find_slug(slug),
        }
    }

    fn find_slug(&self, slug: &str) -> Option<&'p Pattern> {
        self.patterns.iter().find(|pattern| pattern.slug == slug)
    }

    /// Render a pattern's blocks in document order.
    ///
    /// Absent and disabled patterns render as the empty string. Block types
    /// found in the pattern are added to `present`.
    pub fn render(
        &self,
        pattern: Option<&Pattern>,
        renderer: &Renderer<'_>,
        present: &mut BlockTypes,
    ) -> String {
        let Some(pattern) = pattern.filter(|pattern| pattern.enabled) else {
            return String::new();
        };
        if !has_blocks(&pattern.content) {
            return pattern.content.clone();
        }
        let blocks = parse(&pattern.content);
        present.add_blocks(&blocks);
        renderer.render(&blocks)
    }

    /// Replace every `[blockplus_pattern ...]` placeholder in `html` with
    /// the rendered pattern.
    ///
    /// Expansion is a single pass: placeholders inside a pattern's own
    /// content are left as written.
    pub fn expand(&self, html: &str, renderer: &Renderer<'_>, present: &mut BlockTypes) -> String {
        PLACEHOLDER
            .replace_all(html, |caps: &Captures<'_>| {
                let reference = PatternRef::from_attrs(&caps["attrs"]);
                let pattern = reference.as_ref().and_then(|r| self.resolve_ref(r));
                if pattern.is_none() {
                    log::debug!("No pattern for placeholder {}", &caps[0]);
                }
                self.render(pattern, renderer, present)
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(id: &str, slug: &str, content: &str, enabled: bool) -> Pattern {
        Pattern {
            id: id.to_string(),
            slug: slug.to_string(),
            title: slug.to_string(),
            content: content.to_string(),
            enabled,
            ..Pattern::default()
        }
    }

    const CTA: &str = "<!-- wp:heading --><h2>Join</h2><!-- /wp:heading -->\n\n<!-- wp:buttons --><div class=\"wp-block-buttons\"><!-- wp:button /--></div><!-- /wp:buttons -->";

    fn store() -> Records<Pattern> {
        vec![
            pattern("pattern_1", "cta-box", CTA, true),
            pattern("pattern_2", "off", "<!-- wp:spacer /-->", false),
            pattern("cta-box-id", "other", "<p>by id</p>", true),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn reads_placeholder_attributes() {
        assert_eq!(
            PatternRef::from_attrs(r#" slug="cta-box""#),
            Some(PatternRef::Slug("cta-box".to_string()))
        );
        assert_eq!(
            PatternRef::from_attrs(r#" slug='a' id="pattern_1""#),
            Some(PatternRef::Id("pattern_1".to_string()))
        );
        assert_eq!(
            PatternRef::from_attrs(r#" id="" slug=b"#),
            Some(PatternRef::Slug("b".to_string()))
        );
        assert_eq!(PatternRef::from_attrs(""), None);
    }

    #[test]
    fn resolves_by_id_then_slug() {
        let patterns = store();
        let renderer = PatternRenderer::new(&patterns);
        assert_eq!(renderer.resolve("cta-box").unwrap().id, "pattern_1");
        assert_eq!(renderer.resolve("pattern_2").unwrap().slug, "off");
        assert_eq!(renderer.resolve("cta-box-id").unwrap().slug, "other");
        assert!(renderer.resolve("missing").is_none());
    }

    #[test]
    fn renders_blocks_in_source_order() {
        let patterns = store();
        let renderer = PatternRenderer::new(&patterns);
        let mut present = BlockTypes::new();
        let html = renderer.render(renderer.resolve("cta-box"), &Renderer::new(), &mut present);
        assert_eq!(html, "<h2>Join</h2>\n\n<div class=\"wp-block-buttons\"></div>");
        assert!(present.contains("core/button"));
    }

    #[test]
    fn disabled_and_missing_render_empty() {
        let patterns = store();
        let renderer = PatternRenderer::new(&patterns);
        let mut present = BlockTypes::new();
        assert_eq!(renderer.render(renderer.resolve("off"), &Renderer::new(), &mut present), "");
        assert_eq!(renderer.render(None, &Renderer::new(), &mut present), "");
        assert!(present.is_empty());
    }

    #[test]
    fn expands_placeholders_once() {
        let mut patterns = store();
        patterns.upsert(pattern(
            "pattern_3",
            "nested",
            "<p>[blockplus_pattern slug=\"cta-box\"]</p>",
            true,
        ));
        let renderer = PatternRenderer::new(&patterns);
        let mut present = BlockTypes::new();
        let html = renderer.expand(
            "<div>[blockplus_pattern id=\"cta-box-id\"]</div>[blockplus_pattern slug=\"nested\"][blockplus_pattern slug=\"nope\"]",
            &Renderer::new(),
            &mut present,
        );
        assert_eq!(
            html,
            "<div><p>by id</p></div><p>[blockplus_pattern slug=\"cta-box\"]</p>"
        );
    }
}
