//! Selecting the rule and snippet bodies that apply to a render.

use std::fmt;

use blockplus_blocks::BlockTypes;
use blockplus_records::{BlockRule, CodeKind, CodeScope, Records, Snippet};

/// Where a matched body came from, used for its provenance comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin<'r> {
    /// A block rule, identified by the block type it targets.
    Block(&'r str),
    /// A global snippet, identified by its name.
    Snippet(&'r str),
}

impl fmt::Display for Origin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Block(block_type) => write!(f, "/* Block: {} */", block_type),
            Origin::Snippet(name) => write!(f, "/* Snippet: {} */", name),
        }
    }
}

/// One code body selected for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matched<'r> {
    pub origin: Origin<'r>,
    pub body: &'r str,
}

/// Enabled block rules for `scope` whose block type is in `present`, in
/// store order. Rules with an empty body for `kind` are skipped.
pub fn collect<'r>(
    rules: &'r Records<BlockRule>,
    present: &BlockTypes,
    scope: CodeScope,
    kind: CodeKind,
) -> Vec<Matched<'r>> {
    rules
        .enabled()
        .filter(|rule| rule.applies_in(scope))
        .filter(|rule| present.contains(&rule.block_type))
        .filter_map(|rule| rule_body(rule, kind))
        .collect()
}

/// Enabled editor-scoped block rules, regardless of block presence.
///
/// The editor loads before any content exists, so editor rules are not
/// gated on the document.
pub fn collect_for_editor(rules: &Records<BlockRule>, kind: CodeKind) -> Vec<Matched<'_>> {
    rules
        .enabled()
        .filter(|rule| rule.applies_in(CodeScope::Editor))
        .filter_map(|rule| rule_body(rule, kind))
        .collect()
}

fn rule_body(rule: &BlockRule, kind: CodeKind) -> Option<Matched<'_>> {
    let body = rule.code(kind);
    if body.is_empty() {
        return None;
    }
    Some(Matched {
        origin: Origin::Block(&rule.block_type),
        body,
    })
}

/// Enabled snippets of `kind` for `scope`, in store order.
pub fn collect_snippets(
    snippets: &Records<Snippet>,
    scope: CodeScope,
    kind: CodeKind,
) -> Vec<Matched<'_>> {
    snippets
        .enabled()
        .filter(|snippet| snippet.kind == kind && snippet.applies_in(scope))
        .filter(|snippet| !snippet.code.is_empty())
        .map(|snippet| Matched {
            origin: Origin::Snippet(&snippet.name),
            body: &snippet.code,
        })
        .collect()
}

/// Join matched bodies, each preceded by its provenance comment.
///
/// Empty input gives an empty string.
pub fn concat(matched: &[Matched<'_>]) -> String {
    let mut out = String::new();
    for item in matched {
        out.push('\n');
        out.push_str(&item.origin.to_string());
        out.push('\n');
        out.push_str(item.body);
    }
    out
}
