//! Option store: the persistence layer underneath every blockplus record.
//!
//! An option is a named JSON document. Records, settings and everything else
//! the system keeps between requests live in a handful of options, each of
//! which is read and written as a whole:
//! - `OptionReader`: read one option by name
//! - `OptionWriter`: replace or delete one option by name
//! - `OptionStore`: both, blanket-implemented
//!
//! Backends only promise atomic reads and writes of a single option. Nothing
//! here coordinates writes across options.
//!
//! # Example
//!
//! ```rust
//! use blockplus_option_store::{InMemoryOptionStore, OptionReader, OptionWriter};
//! use serde_json::json;
//!
//! let mut store = InMemoryOptionStore::new();
//! store.update_option("blockplus_settings", json!({"version": 1})).unwrap();
//!
//! let value = store.get_option("blockplus_settings").unwrap();
//! assert_eq!(value, Some(json!({"version": 1})));
//! ```

mod error;
mod in_memory;
mod local_disk;
mod traits;

pub use error::Error;
pub use in_memory::InMemoryOptionStore;
pub use local_disk::JsonFileOptionStore;
pub use traits::{validate_name, OptionReader, OptionStore, OptionWriter};
