//! blockplus: content add-ons for a block editor.
//!
//! Re-exports the layered crates:
//! - [`option_store`]: named JSON options, in memory or on disk
//! - [`records`]: patterns, block rules, snippets, variations, settings
//! - [`blocks`]: block markup parsing, scanning, rendering, class stripping
//! - [`render`]: per-request rendering and editor assets
//! - [`admin`]: authorized admin actions
//!
//! # Example
//!
//! ```rust
//! use blockplus::admin::{AdminApi, Operator, Request, Resource, Session};
//! use blockplus::option_store::InMemoryOptionStore;
//! use blockplus::records::RecordKind;
//! use blockplus::render::Site;
//!
//! let session = Session::start(Operator::administrator("admin"));
//! let mut api = AdminApi::new(InMemoryOptionStore::new());
//! let token = session.token(Resource::Record(RecordKind::Pattern)).to_string();
//!
//! api.handle(&session, &Request::new("save_pattern", token)
//!     .with("title", "Signup")
//!     .with("content", "<!-- wp:paragraph --><p>Join us</p><!-- /wp:paragraph -->")
//!     .with("enabled", "1"));
//!
//! let site = Site::load(api.store()).unwrap();
//! let page = site.render_page("[blockplus_pattern slug=\"signup\"]");
//! assert_eq!(page.body, "<p>Join us</p>");
//! ```

pub use blockplus_admin as admin;
pub use blockplus_blocks as blocks;
pub use blockplus_option_store as option_store;
pub use blockplus_records as records;
pub use blockplus_render as render;
