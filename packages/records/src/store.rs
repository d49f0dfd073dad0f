//! Typed record access on top of any option store.

use chrono::Utc;
use serde_json::Value;

use blockplus_option_store::OptionStore;

use crate::{Error, Pattern, RawInput, Record, RecordKind, Records, Settings, SETTINGS_OPTION};

/// Extension trait for typed record reads and writes.
///
/// Implemented for every [`OptionStore`]. Each mutating call is one
/// independent read-modify-write of the option holding that record kind;
/// concurrent writers get last-writer-wins.
///
/// # Example
///
/// ```rust
/// use blockplus_option_store::InMemoryOptionStore;
/// use blockplus_records::{RecordStore, Snippet};
///
/// let mut store = InMemoryOptionStore::new();
/// assert_eq!(store.toggle::<Snippet>("snippet_missing").unwrap(), None);
/// ```
pub trait RecordStore: OptionStore {
    /// Every record of kind `R`, in insertion order.
    fn list<R: Record>(&mut self) -> Result<Records<R>, Error> {
        let kind = R::KIND;
        match self.get_option(kind.option_name())? {
            None => Ok(Records::new()),
            Some(value) => serde_json::from_value(value).map_err(|error| Error::decode(kind, error)),
        }
    }

    fn get<R: Record>(&mut self, id: &str) -> Result<Option<R>, Error> {
        Ok(self.list::<R>()?.remove(id))
    }

    /// Insert `record`, or overwrite the record with the same id.
    ///
    /// Returns the record as stored, after [`Record::prepare_save`].
    fn save<R: Record>(&mut self, mut record: R) -> Result<R, Error> {
        let mut records = self.list::<R>()?;
        record.prepare_save(&records, Utc::now());
        let replaced = records.upsert(record.clone()).is_some();
        self.write_records(&records)?;

        log::info!(
            "{} {} {}",
            if replaced { "Updated" } else { "Created" },
            R::KIND.label(),
            record.id()
        );
        Ok(record)
    }

    /// Sanitize raw input into a record and save it.
    ///
    /// Nothing is written when sanitization fails.
    fn save_input<R: Record>(&mut self, input: &RawInput) -> Result<R, Error> {
        let record = R::sanitize(input)?;
        self.save(record)
    }

    /// Delete by id. Returns `false` when no such record exists.
    fn delete<R: Record>(&mut self, id: &str) -> Result<bool, Error> {
        let mut records = self.list::<R>()?;
        if records.remove(id).is_none() {
            return Ok(false);
        }
        self.write_records(&records)?;
        log::info!("Deleted {} {}", R::KIND.label(), id);
        Ok(true)
    }

    /// Flip `enabled` in place. Returns the new state, or `None` when no such
    /// record exists (nothing is written in that case).
    fn toggle<R: Record>(&mut self, id: &str) -> Result<Option<bool>, Error> {
        let mut records = self.list::<R>()?;
        let Some(record) = records.get_mut(id) else {
            return Ok(None);
        };

        let enabled = !record.is_enabled();
        record.set_enabled(enabled);
        self.write_records(&records)?;
        log::info!("Toggled {} {} to {}", R::KIND.label(), id, enabled);
        Ok(Some(enabled))
    }

    /// Copy a pattern under a fresh id and slug, disabled.
    fn duplicate_pattern(&mut self, id: &str) -> Result<Option<Pattern>, Error> {
        let mut patterns = self.list::<Pattern>()?;
        let Some(original) = patterns.get(id) else {
            return Ok(None);
        };

        let copy = original.duplicate(&patterns, Utc::now());
        patterns.upsert(copy.clone());
        self.write_records(&patterns)?;
        log::info!("Duplicated pattern {} as {}", id, copy.id);
        Ok(Some(copy))
    }

    fn write_records<R: Record>(&mut self, records: &Records<R>) -> Result<(), Error> {
        let kind = R::KIND;
        let value = serde_json::to_value(records).map_err(|error| Error::encode(kind, error))?;
        self.update_option(kind.option_name(), value)?;
        Ok(())
    }
}

impl<S: OptionStore + ?Sized> RecordStore for S {}

/// Extension trait for the global settings record.
pub trait SettingsStore: OptionStore {
    /// The stored settings, or defaults when none were saved.
    ///
    /// A stored document that no longer decodes is logged and replaced by
    /// defaults rather than failing the render.
    fn load_settings(&mut self) -> Result<Settings, Error> {
        match self.get_option(SETTINGS_OPTION)? {
            None | Some(Value::Null) => Ok(Settings::default()),
            Some(value) => match serde_json::from_value(value) {
                Ok(settings) => Ok(settings),
                Err(error) => {
                    log::warn!("Stored settings could not be decoded, using defaults: {}", error);
                    Ok(Settings::default())
                }
            },
        }
    }

    /// Sanitize and store settings from raw input.
    fn save_settings(&mut self, input: &RawInput) -> Result<Settings, Error> {
        let settings = Settings::sanitize(input);
        let value = serde_json::to_value(&settings).map_err(|error| Error::Encode {
            kind: "settings".to_string(),
            error,
        })?;
        self.update_option(SETTINGS_OPTION, value)?;
        log::info!("Saved settings (version {})", settings.version);
        Ok(settings)
    }

    /// Remove every option this system owns.
    fn uninstall(&mut self) -> Result<(), Error> {
        for kind in RecordKind::ALL {
            self.delete_option(kind.option_name())?;
        }
        self.delete_option(SETTINGS_OPTION)?;
        log::info!("Removed all stored records and settings");
        Ok(())
    }
}

impl<S: OptionStore + ?Sized> SettingsStore for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockRule, Snippet, Variation};
    use blockplus_option_store::{InMemoryOptionStore, OptionReader, OptionWriter};
    use serde_json::json;

    fn input(value: Value) -> RawInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn save_then_get_round_trips_coerced_fields() {
        let mut store = InMemoryOptionStore::new();
        let saved: BlockRule = store
            .save_input(&input(json!({
                "id": "rule_one",
                "block_type": "core/quote",
                "enabled": "1",
                "scope": ["nowhere"],
            })))
            .unwrap();

        let fetched = store.get::<BlockRule>("rule_one").unwrap().unwrap();
        assert_eq!(fetched, saved);
        assert!(fetched.enabled);
        assert!(fetched.scope.is_empty());
    }

    #[test]
    fn invalid_input_writes_nothing() {
        let mut store = InMemoryOptionStore::new();
        let result = store.save_input::<Variation>(&input(json!({"name": "x"})));
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn toggle_flips_and_reports_missing() {
        let mut store = InMemoryOptionStore::new();
        store
            .save_input::<Snippet>(&input(json!({"id": "s1", "enabled": false})))
            .unwrap();

        assert_eq!(store.toggle::<Snippet>("s1").unwrap(), Some(true));
        assert_eq!(store.toggle::<Snippet>("s1").unwrap(), Some(false));

        let before = store.get_option(RecordKind::Snippet.option_name()).unwrap();
        assert_eq!(store.toggle::<Snippet>("missing").unwrap(), None);
        let after = store.get_option(RecordKind::Snippet.option_name()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn delete_reports_missing() {
        let mut store = InMemoryOptionStore::new();
        store
            .save_input::<Snippet>(&input(json!({"id": "s1"})))
            .unwrap();
        assert!(store.delete::<Snippet>("s1").unwrap());
        assert!(!store.delete::<Snippet>("s1").unwrap());
        assert!(store.list::<Snippet>().unwrap().is_empty());
    }

    #[test]
    fn saving_same_title_twice_disambiguates() {
        let mut store = InMemoryOptionStore::new();
        let first: Pattern = store
            .save_input(&input(json!({"title": "Hero", "content": "<p>a</p>"})))
            .unwrap();
        let second: Pattern = store
            .save_input(&input(json!({"title": "Hero", "content": "<p>b</p>"})))
            .unwrap();

        assert_eq!(first.slug, "hero");
        assert_eq!(second.slug, "hero-1");
    }

    #[test]
    fn resaving_preserves_created_at() {
        let mut store = InMemoryOptionStore::new();
        let first: Pattern = store
            .save_input(&input(json!({"id": "p1", "title": "Hero", "content": "<p>a</p>"})))
            .unwrap();
        let second: Pattern = store
            .save_input(&input(json!({"id": "p1", "title": "Hero", "content": "<p>b</p>"})))
            .unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert!(second.modified_at >= first.modified_at);
        assert_eq!(second.slug, "hero");
        assert_eq!(store.list::<Pattern>().unwrap().len(), 1);
    }

    #[test]
    fn duplicate_generates_copy_slugs() {
        let mut store = InMemoryOptionStore::new();
        let hero: Pattern = store
            .save_input(&input(json!({"title": "Hero", "content": "<p>a</p>", "enabled": 1})))
            .unwrap();

        let copy = store.duplicate_pattern(&hero.id).unwrap().unwrap();
        assert_eq!(copy.slug, "hero-copy");
        assert!(!copy.enabled);

        let again = store.duplicate_pattern(&hero.id).unwrap().unwrap();
        assert_eq!(again.slug, "hero-copy-1");

        assert!(store.duplicate_pattern("nope").unwrap().is_none());
        assert_eq!(store.list::<Pattern>().unwrap().len(), 3);
    }

    #[test]
    fn corrupt_records_are_a_decode_error() {
        let mut store = InMemoryOptionStore::new();
        store
            .update_option(RecordKind::BlockRule.option_name(), json!("garbage"))
            .unwrap();
        assert!(matches!(
            store.list::<BlockRule>(),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn settings_default_then_saved() {
        let mut store = InMemoryOptionStore::new();
        assert_eq!(store.load_settings().unwrap(), Settings::default());

        store
            .save_settings(&input(json!({"focus_mode": "1"})))
            .unwrap();
        assert!(store.load_settings().unwrap().editor.focus_mode);
    }

    #[test]
    fn undecodable_settings_fall_back_to_defaults() {
        let mut store = InMemoryOptionStore::new();
        store.update_option(SETTINGS_OPTION, json!([1, 2, 3])).unwrap();
        assert_eq!(store.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn uninstall_removes_everything() {
        let mut store = InMemoryOptionStore::new();
        store
            .save_input::<Snippet>(&input(json!({"id": "s1"})))
            .unwrap();
        store.save_settings(&RawInput::new()).unwrap();

        store.uninstall().unwrap();
        assert!(store.is_empty());
    }
}
