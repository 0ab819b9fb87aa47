use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    assert_eq!(store.get("theme"), Ok(None));

    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));

    store.set("theme", "light").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("light".to_owned())));
}

#[test]
fn memory_store_remove_clears_slot() {
    let store = MemoryStore::default();
    store.set("theme", "dark").unwrap();
    store.remove("theme").unwrap();
    assert_eq!(store.get("theme"), Ok(None));

    // Removing an absent key is not an error.
    assert_eq!(store.remove("theme"), Ok(()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_off_browser() {
    assert!(!BrowserStorage::is_available());
    assert_eq!(BrowserStorage.get("theme"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.set("theme", "dark"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.remove("theme"), Err(StorageError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn open_preferences_falls_back_to_memory() {
    let store = open_preferences();
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
}

#[test]
fn storage_error_messages_name_the_failure() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage is unavailable");
    assert_eq!(StorageError::Write("quota".into()).to_string(), "storage write failed: quota");
}
