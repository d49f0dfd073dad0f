//! Both backends behave the same through the trait objects.

use blockplus_option_store::{InMemoryOptionStore, JsonFileOptionStore, OptionStore};
use serde_json::json;

fn exercise(store: &mut dyn OptionStore) {
    assert_eq!(store.get_option("blockplus_patterns").unwrap(), None);

    store
        .update_option("blockplus_patterns", json!({"b": 1, "a": 2}))
        .unwrap();
    let value = store.get_option("blockplus_patterns").unwrap().unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a"]);

    assert!(store.delete_option("blockplus_patterns").unwrap());
    assert!(!store.delete_option("blockplus_patterns").unwrap());
    assert!(store.get_option("Bad-Name").is_err());
}

#[test]
fn in_memory_backend() {
    let mut store = InMemoryOptionStore::new();
    exercise(&mut store);
}

#[test]
fn json_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let mut store: Box<dyn OptionStore> = Box::new(JsonFileOptionStore::create(dir.path().to_path_buf()).unwrap());
    exercise(store.as_mut());
}
