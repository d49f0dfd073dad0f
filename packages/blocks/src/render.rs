use crate::block::{Block, Chunk};

/// A hook run on every rendered named block.
///
/// Receives the block and its rendered HTML (inner blocks included) and
/// returns the HTML to use in its place.
pub trait BlockFilter {
    fn render_block(&self, block: &Block, html: String) -> String;
}

impl<F> BlockFilter for F
where
    F: Fn(&Block, String) -> String,
{
    fn render_block(&self, block: &Block, html: String) -> String {
        self(block, html)
    }
}

/// Renders block trees back to HTML.
///
/// Static rendering: each block's own HTML with its inner blocks rendered
/// in place. Filters run in registration order, innermost blocks first.
#[derive(Default)]
pub struct Renderer<'a> {
    filters: Vec<Box<dyn BlockFilter + 'a>>,
}

impl<'a> Renderer<'a> {
    pub fn new() -> Self {
        Renderer {
            filters: Vec::new(),
        }
    }

    pub fn with_filter(mut self, filter: impl BlockFilter + 'a) -> Self {
        self.add_filter(filter);
        self
    }

    pub fn add_filter(&mut self, filter: impl BlockFilter + 'a) {
        self.filters.push(Box::new(filter));
    }

    /// Render top-level blocks in document order, without separators.
    pub fn render(&self, blocks: &[Block]) -> String {
        blocks.iter().map(|block| self.render_block(block)).collect()
    }

    pub fn render_block(&self, block: &Block) -> String {
        let mut html = String::with_capacity(block.inner_html.len());
        let mut inner = block.inner_blocks.iter();
        for chunk in &block.inner_content {
            match chunk {
                Chunk::Html(text) => html.push_str(text),
                Chunk::Block(()) => match inner.next() {
                    Some(child) => html.push_str(&self.render_block(child)),
                    None => log::warn!(
                        "Block {} has more placeholders than inner blocks",
                        block.name.as_deref().unwrap_or("(freeform)")
                    ),
                },
            }
        }

        if block.is_freeform() {
            return html;
        }
        self.filters
            .iter()
            .fold(html, |html, filter| filter.render_block(block, html))
    }
}
