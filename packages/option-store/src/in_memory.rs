//! In-memory option store.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{validate_name, Error, OptionReader, OptionWriter};

/// An option store that keeps every option in a map.
///
/// Useful for tests and for hosts that load and flush options themselves.
#[derive(Debug, Default, Clone)]
pub struct InMemoryOptionStore {
    options: BTreeMap<String, Value>,
}

impl InMemoryOptionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial options.
    pub fn with_options(options: BTreeMap<String, Value>) -> Self {
        Self { options }
    }

    /// Names of every stored option, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl OptionReader for InMemoryOptionStore {
    fn get_option(&mut self, name: &str) -> Result<Option<Value>, Error> {
        validate_name(name)?;
        Ok(self.options.get(name).cloned())
    }
}

impl OptionWriter for InMemoryOptionStore {
    fn update_option(&mut self, name: &str, value: Value) -> Result<(), Error> {
        validate_name(name)?;
        self.options.insert(name.to_string(), value);
        Ok(())
    }

    fn delete_option(&mut self, name: &str) -> Result<bool, Error> {
        validate_name(name)?;
        Ok(self.options.remove(name).is_some())
    }
}
