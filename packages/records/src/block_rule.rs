use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::input::{
    choice_set_field, id_field, int_field, is_truthy, strip_all_tags, text_field, verbatim_field,
};
use crate::{CodeKind, CodeScope, RawInput, Record, RecordKind, ValidationError};

pub const DEFAULT_PRIORITY: i64 = 10;

/// CSS/JS that is emitted only when `block_type` appears in the document.
///
/// Several rules may target the same block type; all matching ones apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockRule {
    pub id: String,
    pub name: String,
    /// Namespaced block name, e.g. `core/quote`. Not checked against any
    /// registry.
    pub block_type: String,
    pub css: String,
    /// Emitted verbatim.
    pub js: String,
    pub scope: BTreeSet<CodeScope>,
    pub enabled: bool,
    /// Stored, but output follows insertion order.
    pub priority: i64,
}

impl Default for BlockRule {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            block_type: String::new(),
            css: String::new(),
            js: String::new(),
            scope: BTreeSet::from([CodeScope::Frontend]),
            enabled: false,
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl BlockRule {
    pub fn code(&self, kind: CodeKind) -> &str {
        match kind {
            CodeKind::Css => &self.css,
            CodeKind::Js => &self.js,
        }
    }

    pub fn applies_in(&self, scope: CodeScope) -> bool {
        self.scope.contains(&scope)
    }
}

impl Record for BlockRule {
    const KIND: RecordKind = RecordKind::BlockRule;

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
        let block_type = text_field(input.get("block_type")).unwrap_or_default();
        if block_type.is_empty() {
            return Err(ValidationError::new("block_type", "Block type is required."));
        }

        Ok(BlockRule {
            id: id_field(input.get("id"), || RecordKind::BlockRule.generate_id()),
            name: text_field(input.get("name")).unwrap_or_else(|| "Untitled Rule".to_string()),
            block_type,
            css: verbatim_field(input.get("css"))
                .map(|css| strip_all_tags(&css))
                .unwrap_or_default(),
            js: verbatim_field(input.get("js")).unwrap_or_default(),
            scope: choice_set_field(input.get("scope"), &[CodeScope::Frontend]),
            enabled: is_truthy(input.get("enabled")),
            priority: int_field(input.get("priority"), DEFAULT_PRIORITY),
        })
    }
}
