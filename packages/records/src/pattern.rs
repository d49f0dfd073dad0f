use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::{
    id_field, int_field, is_truthy, keywords_field, list_field, raw_string, strip_script_elements,
    text_field, textarea_field,
};
use crate::slug::{slugify, unique_slug};
use crate::{RawInput, Record, RecordKind, Records, ValidationError};

pub const DEFAULT_VIEWPORT_WIDTH: i64 = 1200;

/// A reusable bundle of block markup, insertable by slug or id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pattern {
    pub id: String,
    /// Unique across all patterns.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Serialized block markup.
    pub content: String,
    pub categories: BTreeSet<String>,
    pub keywords: BTreeSet<String>,
    /// Block types this pattern is offered for; empty means any.
    pub block_types: BTreeSet<String>,
    pub viewport_width: i64,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Default for Pattern {
    fn default() -> Self {
        Self {
            id: String::new(),
            slug: String::new(),
            title: String::new(),
            description: String::new(),
            content: String::new(),
            categories: BTreeSet::new(),
            keywords: BTreeSet::new(),
            block_types: BTreeSet::new(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            enabled: false,
            created_at: DateTime::<Utc>::default(),
            modified_at: DateTime::<Utc>::default(),
        }
    }
}

impl Pattern {
    /// The placeholder that embeds this pattern in a document.
    pub fn placeholder(&self) -> String {
        format!("[blockplus_pattern slug=\"{}\"]", self.slug)
    }

    /// A disabled copy with a fresh id, a "(Copy)" title and a free
    /// `<slug>-copy` slug.
    pub fn duplicate(&self, existing: &Records<Pattern>, now: DateTime<Utc>) -> Pattern {
        Pattern {
            id: RecordKind::Pattern.generate_id(),
            slug: unique_slug(existing, &format!("{}-copy", self.slug), None),
            title: format!("{} (Copy)", self.title),
            enabled: false,
            created_at: now,
            modified_at: now,
            ..self.clone()
        }
    }
}

impl Record for Pattern {
    const KIND: RecordKind = RecordKind::Pattern;

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
        let title = text_field(input.get("title")).unwrap_or_else(|| "Untitled Pattern".to_string());
        let content = raw_string_field(input, "content")
            .map(|content| strip_script_elements(&content))
            .unwrap_or_default();

        if title.is_empty() || content.trim().is_empty() {
            return Err(ValidationError::new(
                if title.is_empty() { "title" } else { "content" },
                "Title and content are required.",
            ));
        }

        let slug = ["slug", "title"]
            .iter()
            .filter_map(|field| text_field(input.get(*field)))
            .map(|candidate| slugify(&candidate))
            .find(|candidate| !candidate.is_empty())
            .unwrap_or_else(|| "pattern".to_string());

        Ok(Pattern {
            id: id_field(input.get("id"), || RecordKind::Pattern.generate_id()),
            slug,
            title,
            description: textarea_field(input.get("description")).unwrap_or_default(),
            content,
            categories: list_field(input.get("categories")).unwrap_or_default().into_iter().collect(),
            keywords: keywords_field(input.get("keywords")),
            block_types: list_field(input.get("block_types")).unwrap_or_default().into_iter().collect(),
            viewport_width: int_field(input.get("viewport_width"), DEFAULT_VIEWPORT_WIDTH),
            enabled: is_truthy(input.get("enabled")),
            created_at: DateTime::<Utc>::default(),
            modified_at: DateTime::<Utc>::default(),
        })
    }

    fn prepare_save(&mut self, existing: &Records<Self>, now: DateTime<Utc>) {
        self.slug = unique_slug(existing, &self.slug, Some(&self.id));
        self.created_at = existing
            .get(&self.id)
            .map(|previous| previous.created_at)
            .unwrap_or(now);
        self.modified_at = now;
    }

    fn embed_placeholder(&self) -> Option<String> {
        Some(self.placeholder())
    }
}

fn raw_string_field(input: &RawInput, field: &str) -> Option<String> {
    input.get(field).and_then(raw_string)
}
