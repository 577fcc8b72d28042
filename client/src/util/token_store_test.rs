use super::*;

#[test]
fn memory_store_set_get_clear() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.get(), None);
    store.set("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemoryTokenStore::with_token("t1");
    let other = store.clone();
    other.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn clear_is_idempotent() {
    let store = MemoryTokenStore::default();
    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_is_empty_outside_browser() {
    let store = LocalTokenStore::default();
    store.set("abc");
    assert_eq!(store.get(), None);
    store.clear();
}
