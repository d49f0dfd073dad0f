use std::borrow::Cow;
use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::block::Block;
use crate::render::BlockFilter;

lazy_static! {
    static ref CLASS_ATTR: Regex =
        Regex::new(r#"(?i)(?P<lead>\s+)class\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)')"#).unwrap();
}

fn rewrite_attr(html: &str, caps: &Captures<'_>, remove: &BTreeSet<&str>) -> String {
    let (value, quote) = match (caps.name("dq"), caps.name("sq")) {
        (Some(value), _) => (value.as_str(), '"'),
        (None, Some(value)) => (value.as_str(), '\''),
        (None, None) => return caps[0].to_string(),
    };

    let tokens: Vec<&str> = value.split_whitespace().collect();
    let kept: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|token| !remove.contains(token))
        .collect();

    if kept.len() == tokens.len() {
        return caps[0].to_string();
    }
    if kept.is_empty() {
        // The next attribute may be glued to this one; keep it separated.
        let end = caps.get(0).map_or(html.len(), |m| m.end());
        return match html[end..].chars().next() {
            Some(next) if !(next.is_whitespace() || next == '>' || next == '/') => {
                " ".to_string()
            }
            _ => String::new(),
        };
    }
    format!(
        "{}class={quote}{}{quote}",
        &caps["lead"],
        kept.join(" "),
        quote = quote
    )
}

/// Remove whole class tokens from every `class` attribute in `html`.
///
/// Attributes that lose a token are rewritten with single spaces between
/// the remaining tokens; attributes left empty are removed along with the
/// whitespace before them. Attributes that lose nothing are left byte for
/// byte, so applying the same removal twice changes nothing.
pub fn strip_classes<S: AsRef<str>>(html: &str, classes: &[S]) -> String {
    let remove: BTreeSet<&str> = classes
        .iter()
        .map(|class| class.as_ref().trim())
        .filter(|class| !class.is_empty())
        .collect();
    strip_set(html, &remove).into_owned()
}

fn strip_set<'h>(html: &'h str, remove: &BTreeSet<&str>) -> Cow<'h, str> {
    if remove.is_empty() {
        return Cow::Borrowed(html);
    }
    let mut current =
        CLASS_ATTR.replace_all(html, |caps: &Captures<'_>| rewrite_attr(html, caps, remove));
    // A removed attribute can expose a following one that had no whitespace
    // before it, so repeat until nothing changes.
    while current.as_ref() != html {
        let next = strip_pass(&current, remove);
        if next == current.as_ref() {
            break;
        }
        current = Cow::Owned(next);
    }
    current
}

fn strip_pass(html: &str, remove: &BTreeSet<&str>) -> String {
    CLASS_ATTR
        .replace_all(html, |caps: &Captures<'_>| rewrite_attr(html, caps, remove))
        .into_owned()
}

/// Block filter removing a fixed set of classes from each rendered block.
#[derive(Debug, Clone, Default)]
pub struct ClassStripper {
    classes: BTreeSet<String>,
}

impl ClassStripper {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassStripper {
            classes: classes
                .into_iter()
                .map(Into::into)
                .map(|class: String| class.trim().to_string())
                .filter(|class| !class.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn strip(&self, html: &str) -> String {
        let remove: BTreeSet<&str> = self.classes.iter().map(String::as_str).collect();
        strip_set(html, &remove).into_owned()
    }
}

impl BlockFilter for ClassStripper {
    fn render_block(&self, _block: &Block, html: String) -> String {
        if self.is_empty() {
            return html;
        }
        self.strip(&html)
    }
}
