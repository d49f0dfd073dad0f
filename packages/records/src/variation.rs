use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::input::{
    choice_set_field, id_field, is_truthy, json_array_field, json_object_field, keywords_field,
    text_field, textarea_field,
};
use crate::{RawInput, Record, RecordKind, ValidationError, VariationScope};

/// A named preset of an existing block type, registered with the editor's
/// variation system while enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variation {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub block_type: String,
    pub icon: String,
    pub category: String,
    pub scope: BTreeSet<VariationScope>,
    pub attributes: Map<String, Value>,
    pub inner_blocks: Vec<Value>,
    pub keywords: BTreeSet<String>,
    pub enabled: bool,
}

impl Default for Variation {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            title: String::new(),
            description: String::new(),
            block_type: String::new(),
            icon: "block-default".to_string(),
            category: "common".to_string(),
            scope: BTreeSet::from([VariationScope::Inserter]),
            attributes: Map::new(),
            inner_blocks: Vec::new(),
            keywords: BTreeSet::new(),
            enabled: false,
        }
    }
}

impl Record for Variation {
    const KIND: RecordKind = RecordKind::Variation;

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
        let name = text_field(input.get("name")).unwrap_or_default();
        let block_type = text_field(input.get("block_type").or_else(|| input.get("blockType")))
            .unwrap_or_default();

        if name.is_empty() || block_type.is_empty() {
            return Err(ValidationError::new(
                if name.is_empty() { "name" } else { "block_type" },
                "Name and block type are required.",
            ));
        }

        let defaults = Variation::default();
        Ok(Variation {
            id: id_field(input.get("id"), || RecordKind::Variation.generate_id()),
            name,
            title: text_field(input.get("title")).unwrap_or_default(),
            description: textarea_field(input.get("description")).unwrap_or_default(),
            block_type,
            icon: text_field(input.get("icon"))
                .filter(|icon| !icon.is_empty())
                .unwrap_or(defaults.icon),
            category: text_field(input.get("category"))
                .filter(|category| !category.is_empty())
                .unwrap_or(defaults.category),
            scope: choice_set_field(input.get("scope"), &[VariationScope::Inserter]),
            attributes: json_object_field(input.get("attributes")),
            inner_blocks: json_array_field(
                input.get("inner_blocks").or_else(|| input.get("innerBlocks")),
            ),
            keywords: keywords_field(input.get("keywords")),
            enabled: is_truthy(input.get("enabled").or_else(|| input.get("isActive"))),
        })
    }
}
