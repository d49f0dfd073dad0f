//! Core traits: OptionReader, OptionWriter.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::Error;

/// Read whole options by name.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn OptionReader>`.
pub trait OptionReader {
    /// Read an option.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - The option has never been written (or was deleted).
    /// * `Ok(Some(value))` - The stored document.
    /// * `Err(Error)` - The backend failed.
    fn get_option(&mut self, name: &str) -> Result<Option<Value>, Error>;
}

/// Replace or delete whole options by name.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn OptionWriter>`.
pub trait OptionWriter {
    /// Replace the stored document for `name`.
    fn update_option(&mut self, name: &str, value: Value) -> Result<(), Error>;

    /// Delete an option. Returns whether anything was stored under `name`.
    fn delete_option(&mut self, name: &str) -> Result<bool, Error>;
}

/// Combined read/write access to options.
pub trait OptionStore: OptionReader + OptionWriter {}
impl<T: OptionReader + OptionWriter + ?Sized> OptionStore for T {}

impl<T: OptionReader + ?Sized> OptionReader for &mut T {
    fn get_option(&mut self, name: &str) -> Result<Option<Value>, Error> {
        (**self).get_option(name)
    }
}

impl<T: OptionWriter + ?Sized> OptionWriter for &mut T {
    fn update_option(&mut self, name: &str, value: Value) -> Result<(), Error> {
        (**self).update_option(name, value)
    }

    fn delete_option(&mut self, name: &str) -> Result<bool, Error> {
        (**self).delete_option(name)
    }
}

impl<T: OptionReader + ?Sized> OptionReader for Box<T> {
    fn get_option(&mut self, name: &str) -> Result<Option<Value>, Error> {
        (**self).get_option(name)
    }
}

impl<T: OptionWriter + ?Sized> OptionWriter for Box<T> {
    fn update_option(&mut self, name: &str, value: Value) -> Result<(), Error> {
        (**self).update_option(name, value)
    }

    fn delete_option(&mut self, name: &str) -> Result<bool, Error> {
        (**self).delete_option(name)
    }
}

/// Check that `name` is usable as an option name.
///
/// Names are lowercase ASCII letters, digits and underscores. The file
/// backend maps names directly onto file names, so nothing else is allowed.
pub fn validate_name(name: &str) -> Result<(), Error> {
    lazy_static! {
        static ref OPTION_NAME: Regex = Regex::new(r"^[a-z0-9_]+$").unwrap();
    }

    if OPTION_NAME.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidName {
            name: name.to_string(),
            message: "option names must match [a-z0-9_]+".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryOptionStore;
    use serde_json::json;

    #[test]
    fn valid_names() {
        assert!(validate_name("blockplus_patterns").is_ok());
        assert!(validate_name("abc123").is_ok());
    }

    #[test]
    fn invalid_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("Upper").is_err());
        assert!(validate_name("../escape").is_err());
        assert!(validate_name("with-dash").is_err());
    }

    fn write_through(store: &mut dyn OptionStore) {
        store.update_option("through_dyn", json!(true)).unwrap();
    }

    #[test]
    fn dyn_and_ref_forwarding() {
        let mut store = InMemoryOptionStore::new();
        write_through(&mut store);

        let by_ref = &mut store;
        assert_eq!(by_ref.get_option("through_dyn").unwrap(), Some(json!(true)));

        let mut boxed: Box<dyn OptionStore> = Box::new(InMemoryOptionStore::new());
        boxed.update_option("boxed", json!(1)).unwrap();
        assert_eq!(boxed.get_option("boxed").unwrap(), Some(json!(1)));
        assert!(boxed.delete_option("boxed").unwrap());
    }
}
