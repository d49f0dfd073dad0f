//! Record kinds and the small closed vocabularies records use.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{RawInput, Records, ValidationError};

/// The four kinds of stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Pattern,
    BlockRule,
    Snippet,
    Variation,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Pattern,
        RecordKind::BlockRule,
        RecordKind::Snippet,
        RecordKind::Variation,
    ];

    /// Name of the option holding every record of this kind.
    pub fn option_name(&self) -> &'static str {
        match self {
            RecordKind::Pattern => "blockplus_patterns",
            RecordKind::BlockRule => "blockplus_block_rules",
            RecordKind::Snippet => "blockplus_snippets",
            RecordKind::Variation => "blockplus_variations",
        }
    }

    /// Prefix for generated ids.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RecordKind::Pattern => "pattern_",
            RecordKind::BlockRule => "block_rule_",
            RecordKind::Snippet => "snippet_",
            RecordKind::Variation => "variation_",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Pattern => "pattern",
            RecordKind::BlockRule => "block_rule",
            RecordKind::Snippet => "snippet",
            RecordKind::Variation => "variation",
        }
    }

    /// Human label, as used in operator-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Pattern => "pattern",
            RecordKind::BlockRule => "block rule",
            RecordKind::Snippet => "snippet",
            RecordKind::Variation => "variation",
        }
    }

    /// [`label`](Self::label) capitalized, for the start of a message.
    pub fn title(&self) -> &'static str {
        match self {
            RecordKind::Pattern => "Pattern",
            RecordKind::BlockRule => "Block rule",
            RecordKind::Snippet => "Snippet",
            RecordKind::Variation => "Variation",
        }
    }

    /// Generate a fresh id for a record of this kind.
    pub fn generate_id(&self) -> String {
        format!("{}{}", self.id_prefix(), uuid::Uuid::new_v4())
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pattern" | "patterns" => Ok(RecordKind::Pattern),
            "block_rule" | "block-rule" | "block_rules" | "block-rules" | "rule" | "rules" => {
                Ok(RecordKind::BlockRule)
            }
            "snippet" | "snippets" => Ok(RecordKind::Snippet),
            "variation" | "variations" => Ok(RecordKind::Variation),
            other => Err(format!("unknown record kind: {}", other)),
        }
    }
}

/// A stored record.
///
/// Implementors are plain data; the store handles persistence and the
/// sanitizer is the only way to build one from operator input.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const KIND: RecordKind;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Build a record from raw form input.
    ///
    /// Fields degrade to their defaults; only an empty required field fails.
    fn sanitize(input: &RawInput) -> Result<Self, ValidationError>;

    /// Adjust the record against the records already stored, right before it
    /// is written. `existing` may contain a previous version with the same id.
    fn prepare_save(&mut self, _existing: &Records<Self>, _now: DateTime<Utc>) {}

    /// The placeholder that embeds this record in a document, for kinds
    /// that can be embedded.
    fn embed_placeholder(&self) -> Option<String> {
        None
    }
}

/// A closed set of string values with a canonical spelling each.
pub trait Choice: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.as_str() == value)
    }
}

/// Which language a code body is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    #[default]
    Css,
    Js,
}

impl Choice for CodeKind {
    const ALL: &'static [Self] = &[CodeKind::Css, CodeKind::Js];

    fn as_str(&self) -> &'static str {
        match self {
            CodeKind::Css => "css",
            CodeKind::Js => "js",
        }
    }
}

/// Where a rule or snippet runs: the editing surface or published output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeScope {
    Editor,
    Frontend,
}

impl Choice for CodeScope {
    const ALL: &'static [Self] = &[CodeScope::Editor, CodeScope::Frontend];

    fn as_str(&self) -> &'static str {
        match self {
            CodeScope::Editor => "editor",
            CodeScope::Frontend => "frontend",
        }
    }
}

impl fmt::Display for CodeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Choice::as_str(self))
    }
}

/// Where a block variation shows up in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationScope {
    Inserter,
    Block,
    Transform,
}

impl Choice for VariationScope {
    const ALL: &'static [Self] = &[
        VariationScope::Inserter,
        VariationScope::Block,
        VariationScope::Transform,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            VariationScope::Inserter => "inserter",
            VariationScope::Block => "block",
            VariationScope::Transform => "transform",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.as_str().parse::<RecordKind>().unwrap(), kind);
        }
        assert_eq!("block-rule".parse::<RecordKind>().unwrap(), RecordKind::BlockRule);
        assert!("widget".parse::<RecordKind>().is_err());
    }

    #[test]
    fn option_names_are_distinct() {
        let mut names: Vec<_> = RecordKind::ALL.iter().map(|k| k.option_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn titles_capitalize_labels() {
        for kind in RecordKind::ALL {
            let mut label = kind.label().chars();
            let first = label.next().unwrap().to_ascii_uppercase();
            assert_eq!(kind.title(), format!("{}{}", first, label.as_str()));
        }
    }

    #[test]
    fn generated_ids_carry_prefix() {
        let id = RecordKind::BlockRule.generate_id();
        assert!(id.starts_with("block_rule_"));
        assert_ne!(id, RecordKind::BlockRule.generate_id());
    }

    #[test]
    fn choice_parse() {
        assert_eq!(CodeKind::parse("js"), Some(CodeKind::Js));
        assert_eq!(CodeKind::parse("JS"), None);
        assert_eq!(CodeScope::parse("frontend"), Some(CodeScope::Frontend));
        assert_eq!(VariationScope::parse("transform"), Some(VariationScope::Transform));
        assert_eq!(VariationScope::parse("sidebar"), None);
    }
}
