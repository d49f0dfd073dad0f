use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::parser::{has_blocks, parse};

/// The distinct block types present in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockTypes(BTreeSet<String>);

impl BlockTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, block_type: &str) -> bool {
        self.0.contains(block_type)
    }

    pub fn insert(&mut self, block_type: impl Into<String>) -> bool {
        self.0.insert(block_type.into())
    }

    /// Add every named block in `blocks`, descending into inner blocks.
    pub fn add_blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            if let Some(name) = block.name.as_deref().filter(|name| !name.is_empty()) {
                if !self.0.contains(name) {
                    self.0.insert(name.to_string());
                }
            }
            self.add_blocks(&block.inner_blocks);
        }
    }

    pub fn extend(&mut self, other: BlockTypes) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for BlockTypes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        BlockTypes(iter.into_iter().map(Into::into).collect())
    }
}

/// Collect the set of block types in a parsed tree.
pub fn scan(blocks: &[Block]) -> BlockTypes {
    let mut present = BlockTypes::new();
    present.add_blocks(blocks);
    present
}

/// Parse `content` and collect its block types.
pub fn scan_content(content: &str) -> BlockTypes {
    if !has_blocks(content) {
        return BlockTypes::new();
    }
    scan(&parse(content))
}
