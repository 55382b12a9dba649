//! Persisted sign-in state: the [`SessionUser`] blob and its bearer token.

use crate::kv::{get_json, set_json, KeyValueStore};
use crate::models::SessionUser;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

/// Session persistence over any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The remembered user, if the stored blob is present and well formed.
    pub fn load(&self) -> Option<SessionUser> {
        get_json(&self.store, USER_KEY)
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn save(&self, user: &SessionUser, token: &str) {
        set_json(&self.store, USER_KEY, user);
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::MemoryStore;

    fn admin() -> SessionUser {
        SessionUser {
            id: "1".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone());
        assert!(session.load().is_none());
        assert!(session.token().is_none());

        session.save(&admin(), "abc.def.ghi");
        assert_eq!(session.load(), Some(admin()));
        assert_eq!(session.token().as_deref(), Some("abc.def.ghi"));

        // Stored as plain JSON under the well-known key
        let raw = store.get(USER_KEY).unwrap();
        assert!(raw.contains("\"role\":\"admin\""));

        session.clear();
        assert!(session.load().is_none());
        assert!(session.token().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_blob_reads_as_signed_out() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "{not json");
        let session = SessionStore::new(store);
        assert!(session.load().is_none());
    }
}
