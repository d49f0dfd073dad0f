//! Block documents: parsing, scanning and rendering serialized block markup.
//!
//! A document is HTML interleaved with block delimiters:
//!
//! ```text
//! <!-- wp:columns -->
//! <div class="wp-block-columns"><!-- wp:column -->...<!-- /wp:column --></div>
//! <!-- /wp:columns -->
//! ```
//!
//! - [`parse`]: markup -> tree of [`Block`]s
//! - [`scan`]: tree -> the set of block types present ([`BlockTypes`])
//! - [`Renderer`]: tree -> HTML, with per-block [`BlockFilter`]s
//! - [`strip_classes`]: whole-token class removal on raw markup
//!
//! # Example
//!
//! ```rust
//! use blockplus_blocks::{parse, scan};
//!
//! let blocks = parse("<!-- wp:quote --><blockquote><!-- wp:paragraph --><p>Hi</p><!-- /wp:paragraph --></blockquote><!-- /wp:quote -->");
//! let present = scan(&blocks);
//! assert!(present.contains("core/quote"));
//! assert!(present.contains("core/paragraph"));
//! ```

mod block;
mod classes;
mod parser;
mod render;
mod scan;

pub use block::{Block, Chunk};
pub use classes::{strip_classes, ClassStripper};
pub use parser::{has_blocks, parse};
pub use render::{BlockFilter, Renderer};
pub use scan::{scan, scan_content, BlockTypes};
