//! blockplus records: the data the add-on manages.
//!
//! Four record kinds live in the option store, each as one map of
//! id -> record kept in insertion order:
//! - [`Pattern`]: reusable block markup addressable by slug or id
//! - [`BlockRule`]: CSS/JS activated by the presence of one block type
//! - [`Snippet`]: CSS/JS applied globally
//! - [`Variation`]: a preset registered with the editor's variation system
//!
//! Plus one [`Settings`] record for global configuration.
//!
//! Every write goes through the sanitizer ([`Record::sanitize`]), which turns
//! loosely-typed form input into a typed record or a [`ValidationError`].
//! Reads and writes go through the [`RecordStore`] extension trait, which is
//! implemented for every [`OptionStore`](blockplus_option_store::OptionStore).
//!
//! # Example
//!
//! ```rust
//! use blockplus_option_store::InMemoryOptionStore;
//! use blockplus_records::{BlockRule, RawInput, RecordStore};
//! use serde_json::json;
//!
//! let mut store = InMemoryOptionStore::new();
//! let input: RawInput = serde_json::from_value(json!({
//!     "block_type": "core/quote",
//!     "css": ".wp-block-quote { border: 0; }",
//!     "enabled": "1",
//! })).unwrap();
//!
//! let rule: BlockRule = store.save_input(&input).unwrap();
//! assert!(rule.enabled);
//! assert_eq!(store.list::<BlockRule>().unwrap().len(), 1);
//! ```

mod block_rule;
mod error;
pub mod input;
mod kind;
mod pattern;
mod records;
mod settings;
pub mod slug;
mod snippet;
mod store;
mod variation;

pub use block_rule::BlockRule;
pub use error::{Error, ValidationError};
pub use input::RawInput;
pub use kind::{Choice, CodeKind, CodeScope, Record, RecordKind, VariationScope};
pub use pattern::Pattern;
pub use records::Records;
pub use settings::{
    EditorSettings, FrontendSettings, Settings, WidthUnit, WordCountPosition,
    BLOCK_CLASS_CATALOG, SETTINGS_OPTION, SETTINGS_VERSION,
};
pub use snippet::Snippet;
pub use store::{RecordStore, SettingsStore};
pub use variation::Variation;
