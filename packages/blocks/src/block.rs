use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One piece of a block's inner content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Chunk {
    /// Literal HTML.
    Html(String),
    /// Where the next inner block renders. Serialized as `null`.
    Block(()),
}

/// A node in a parsed document.
///
/// Named nodes are blocks; unnamed ("freeform") nodes hold HTML found
/// outside any block delimiter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    /// Fully qualified block type, e.g. `core/paragraph`.
    pub name: Option<String>,
    pub attrs: Map<String, Value>,
    pub inner_blocks: Vec<Block>,
    /// The block's own HTML, without inner blocks.
    pub inner_html: String,
    /// `inner_html` split around inner block positions.
    pub inner_content: Vec<Chunk>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: Some(name.into()),
            ..Block::default()
        }
    }

    /// An unnamed node holding raw HTML.
    pub fn freeform(html: impl Into<String>) -> Self {
        let html = html.into();
        Block {
            name: None,
            attrs: Map::new(),
            inner_blocks: Vec::new(),
            inner_content: vec![Chunk::Html(html.clone())],
            inner_html: html,
        }
    }

    pub fn with_attrs(mut self, attrs: Map<String, Value>) -> Self {
        self.attrs = attrs;
        self
    }

    /// Append literal HTML to this block's own content.
    pub fn push_html(&mut self, html: &str) {
        if html.is_empty() {
            return;
        }
        self.inner_html.push_str(html);
        self.inner_content.push(Chunk::Html(html.to_string()));
    }

    /// Append an inner block at the current position.
    pub fn push_block(&mut self, block: Block) {
        self.inner_blocks.push(block);
        self.inner_content.push(Chunk::Block(()));
    }

    pub fn with_html(mut self, html: &str) -> Self {
        self.push_html(html);
        self
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.push_block(block);
        self
    }

    pub fn is_freeform(&self) -> bool {
        self.name.is_none()
    }
}
