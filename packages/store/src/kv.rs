//! Key-value storage interface.
//!
//! Everything the browser persists goes through [`KeyValueStore`], so session,
//! history and theme logic can be exercised against [`crate::MemoryStore`] in
//! tests and against [`crate::LocalStore`] in the browser.

/// Synchronous string key-value store with local-storage semantics.
///
/// Implementations swallow backend failures: a read that cannot be served
/// returns `None`, a write that cannot be served is dropped.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Read a JSON value, treating missing and malformed data alike.
pub(crate) fn get_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore + ?Sized,
    T: serde::de::DeserializeOwned,
{
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

pub(crate) fn set_json<S, T>(store: &S, key: &str, value: &T)
where
    S: KeyValueStore + ?Sized,
    T: serde::Serialize,
{
    if let Ok(raw) = serde_json::to_string(value) {
        store.set(key, &raw);
    }
}
