use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::block_rule::DEFAULT_PRIORITY;
use crate::input::{
    choice_field, choice_set_field, id_field, int_field, is_truthy, strip_all_tags, text_field,
    verbatim_field,
};
use crate::{CodeKind, CodeScope, RawInput, Record, RecordKind, ValidationError};

/// Globally applied CSS or JS, not tied to any block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snippet {
    pub id: String,
    pub name: String,
    pub kind: CodeKind,
    /// CSS bodies are stripped of markup on save; JS bodies are stored as-is.
    pub code: String,
    pub scope: BTreeSet<CodeScope>,
    pub enabled: bool,
    pub priority: i64,
}

impl Default for Snippet {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            kind: CodeKind::Css,
            code: String::new(),
            scope: BTreeSet::from([CodeScope::Editor]),
            enabled: false,
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl Snippet {
    pub fn applies_in(&self, scope: CodeScope) -> bool {
        self.scope.contains(&scope)
    }
}

impl Record for Snippet {
    const KIND: RecordKind = RecordKind::Snippet;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn sanitize(input: &RawInput) -> Result<Self, ValidationError> {
        let kind = choice_field(input.get("kind").or_else(|| input.get("type")), CodeKind::Css);
        let code = verbatim_field(input.get("code")).unwrap_or_default();

        Ok(Snippet {
            id: id_field(input.get("id"), || RecordKind::Snippet.generate_id()),
            name: text_field(input.get("name")).unwrap_or_else(|| "Untitled Snippet".to_string()),
            kind,
            code: match kind {
                CodeKind::Css => strip_all_tags(&code),
                CodeKind::Js => code,
            },
            scope: choice_set_field(input.get("scope"), &[CodeScope::Editor]),
            enabled: is_truthy(input.get("enabled")),
            priority: int_field(input.get("priority"), DEFAULT_PRIORITY),
        })
    }
}
