//! Turning matched code into head and footer markup.

use blockplus_blocks::BlockTypes;
use blockplus_records::{BlockRule, CodeKind, CodeScope, Records, Snippet};

use crate::matcher::{collect, collect_snippets, concat};

pub const PER_BLOCK_CSS_ID: &str = "blockplus-per-block-css";
pub const PER_BLOCK_JS_ID: &str = "blockplus-per-block-js";
pub const SNIPPET_CSS_ID: &str = "blockplus-frontend-custom-css";
pub const SNIPPET_JS_ID: &str = "blockplus-frontend-custom-js";

/// A `<style>` element, or `None` for an empty body.
pub fn style_tag(id: &str, css: &str) -> Option<String> {
    if css.is_empty() {
        return None;
    }
    Some(format!("<style id=\"{}\">{}</style>\n", id, css))
}

/// A `<script>` element running `js` inside its own function scope, or
/// `None` for an empty body.
pub fn script_tag(id: &str, js: &str) -> Option<String> {
    if js.is_empty() {
        return None;
    }
    Some(format!(
        "<script id=\"{}\">\n(function() {{\n{}\n}})();\n</script>\n",
        id, js
    ))
}

/// Markup to add to a rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Injection {
    /// Goes at the end of `<head>`.
    pub head: String,
    /// Goes before `</body>`.
    pub footer: String,
}

impl Injection {
    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.footer.is_empty()
    }
}

/// Frontend code for a page containing `present`.
///
/// Block rules are gated on `present`; frontend snippets always apply.
pub fn frontend_injection(
    rules: &Records<BlockRule>,
    snippets: &Records<Snippet>,
    present: &BlockTypes,
) -> Injection {
    let scope = CodeScope::Frontend;
    let head: String = [
        style_tag(PER_BLOCK_CSS_ID, &concat(&collect(rules, present, scope, CodeKind::Css))),
        style_tag(SNIPPET_CSS_ID, &concat(&collect_snippets(snippets, scope, CodeKind::Css))),
    ]
    .into_iter()
    .flatten()
    .collect();

    let footer: String = [
        script_tag(PER_BLOCK_JS_ID, &concat(&collect(rules, present, scope, CodeKind::Js))),
        script_tag(SNIPPET_JS_ID, &concat(&collect_snippets(snippets, scope, CodeKind::Js))),
    ]
    .into_iter()
    .flatten()
    .collect();

    log::debug!(
        "Injecting {} head bytes and {} footer bytes for {} block types",
        head.len(),
        footer.len(),
        present.len()
    );
    Injection { head, footer }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn quote_rule() -> BlockRule {
        BlockRule {
            id: "r1".to_string(),
            block_type: "core/quote".to_string(),
            css: ".q{}".to_string(),
            js: "var x = 1;".to_string(),
            enabled: true,
            ..BlockRule::default()
        }
    }

    #[test]
    fn empty_bodies_emit_nothing() {
        assert_eq!(style_tag("a", ""), None);
        assert_eq!(script_tag("a", ""), None);
    }

    #[test]
    fn script_is_wrapped_in_function_scope() {
        assert_eq!(
            script_tag("x", "var a = 1;").unwrap(),
            "<script id=\"x\">\n(function() {\nvar a = 1;\n})();\n</script>\n"
        );
    }

    #[test]
    fn no_match_means_no_tags() {
        let rules: Records<BlockRule> = [quote_rule()].into_iter().collect();
        let present: BlockTypes = ["core/paragraph"].into_iter().collect();
        let injection = frontend_injection(&rules, &Records::new(), &present);
        assert!(injection.is_empty());
    }

    #[test]
    fn rules_and_snippets_land_in_head_and_footer() {
        let rules: Records<BlockRule> = [quote_rule()].into_iter().collect();
        let snippets: Records<Snippet> = [Snippet {
            id: "s1".to_string(),
            name: "Base".to_string(),
            code: "body{}".to_string(),
            scope: BTreeSet::from([CodeScope::Frontend]),
            enabled: true,
            ..Snippet::default()
        }]
        .into_iter()
        .collect();
        let present: BlockTypes = ["core/quote"].into_iter().collect();

        let injection = frontend_injection(&rules, &snippets, &present);
        assert_eq!(
            injection.head,
            "<style id=\"blockplus-per-block-css\">\n/* Block: core/quote */\n.q{}</style>\n\
             <style id=\"blockplus-frontend-custom-css\">\n/* Snippet: Base */\nbody{}</style>\n"
        );
        assert_eq!(
            injection.footer,
            "<script id=\"blockplus-per-block-js\">\n(function() {\n\n/* Block: core/quote */\nvar x = 1;\n})();\n</script>\n"
        );
    }
}
