//! Insertion-ordered id -> record maps.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Record;

/// Every stored record of one kind, keyed by id, in insertion order.
///
/// Serializes as a JSON object `{id: record, ...}`. Replacing an existing id
/// keeps its position; new ids are appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Records<R> {
    items: Vec<R>,
}

impl<R> Default for Records<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R: Record> Records<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.items.iter()
    }

    /// Records with `enabled == true`, in insertion order.
    pub fn enabled(&self) -> impl Iterator<Item = &R> {
        self.items.iter().filter(|record| record.is_enabled())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|record| record.id())
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|record| record.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut R> {
        self.items.iter_mut().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Insert a record, overwriting any record with the same id in place.
    ///
    /// Returns the record that was replaced, if any.
    pub fn upsert(&mut self, record: R) -> Option<R> {
        match self.get_mut(record.id()) {
            Some(slot) => Some(std::mem::replace(slot, record)),
            None => {
                self.items.push(record);
                None
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<R> {
        let index = self.items.iter().position(|record| record.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn into_vec(self) -> Vec<R> {
        self.items
    }
}

impl<R: Record> FromIterator<R> for Records<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut records = Records::new();
        for record in iter {
            records.upsert(record);
        }
        records
    }
}

impl<'a, R> IntoIterator for &'a Records<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<R: Record> Serialize for Records<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for record in &self.items {
            map.serialize_entry(record.id(), record)?;
        }
        map.end()
    }
}

impl<'de, R: Record> Deserialize<'de> for Records<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordsVisitor(PhantomData))
    }
}

struct RecordsVisitor<R>(PhantomData<R>);

impl<'de, R: Record> Visitor<'de> for RecordsVisitor<R> {
    type Value = Records<R>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of id to record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut records = Records::new();
        while let Some((key, mut record)) = access.next_entry::<String, R>()? {
            if record.id().is_empty() {
                record.set_id(key);
            }
            records.upsert(record);
        }
        Ok(records)
    }

    // An empty store is sometimes written as `[]`.
    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut records = Records::new();
        while let Some(record) = access.next_element::<R>()? {
            records.upsert(record);
        }
        Ok(records)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Records::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Snippet;
    use serde_json::json;

    fn snippet(id: &str, name: &str) -> Snippet {
        Snippet {
            id: id.to_string(),
            name: name.to_string(),
            ..Snippet::default()
        }
    }

    #[test]
    fn upsert_keeps_position_of_existing_ids() {
        let mut records = Records::new();
        records.upsert(snippet("a", "first"));
        records.upsert(snippet("b", "second"));
        let replaced = records.upsert(snippet("a", "updated"));

        assert_eq!(replaced.map(|s| s.name), Some("first".to_string()));
        assert_eq!(records.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(records.get("a").unwrap().name, "updated");
    }

    #[test]
    fn remove_returns_record() {
        let mut records: Records<Snippet> =
            vec![snippet("a", "x"), snippet("b", "y")].into_iter().collect();
        assert!(records.remove("a").is_some());
        assert!(records.remove("a").is_none());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let records: Records<Snippet> =
            vec![snippet("zeta", "z"), snippet("alpha", "a")].into_iter().collect();
        let value = serde_json::to_value(&records).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);

        let back: Records<Snippet> = serde_json::from_value(value).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn missing_id_taken_from_key() {
        let value = json!({"snippet_1": {"name": "No id", "kind": "js"}});
        let records: Records<Snippet> = serde_json::from_value(value).unwrap();
        assert_eq!(records.get("snippet_1").unwrap().name, "No id");
    }

    #[test]
    fn empty_array_and_null_decode_as_empty() {
        let from_array: Records<Snippet> = serde_json::from_value(json!([])).unwrap();
        assert!(from_array.is_empty());
        let from_null: Records<Snippet> = serde_json::from_value(json!(null)).unwrap();
        assert!(from_null.is_empty());
    }
}
