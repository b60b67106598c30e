//! Session Store
//!
//! The session lives under a single key as JSON. Controllers get the store
//! injected so they run without a browser; the frontend supplies a
//! `localStorage` implementation, tests use [`MemorySessionStore`].

use std::cell::RefCell;

use crate::domain::Session;
use crate::error::StoreError;

/// Storage key holding the session JSON
pub const SESSION_KEY: &str = "currentUser";

/// Persistent session slot
pub trait SessionStore {
    /// Stored record; absent or unparsable means logged out
    fn get(&self) -> Option<Session>;

    fn set(&self, session: &Session) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;

    /// Whether a record with a token is present
    fn is_authenticated(&self) -> bool {
        self.get().is_some_and(|session| session.is_authenticated())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self) -> Option<Session> {
        (**self).get()
    }

    fn set(&self, session: &Session) -> Result<(), StoreError> {
        (**self).set(session)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Serialize a session the way it is stored
pub fn encode(session: &Session) -> Result<String, StoreError> {
    serde_json::to_string(session).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Parse a stored value; `null` and malformed JSON are both "no session"
pub fn decode(raw: &str) -> Option<Session> {
    match serde_json::from_str::<Option<Session>>(raw) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("[SESSION] Ignoring unreadable {} record: {}", SESSION_KEY, e);
            None
        }
    }
}

/// In-memory store holding the raw JSON, like the browser does
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored value
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.raw.borrow().as_deref().and_then(decode)
    }

    fn set(&self, session: &Session) -> Result<(), StoreError> {
        *self.raw.borrow_mut() = Some(encode(session)?);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.raw.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;

    #[test]
    fn test_round_trip() {
        let store = MemorySessionStore::new();
        let session = Session::new(UserId::Number(42), "abc.def.ghi");

        store.set(&session).unwrap();
        assert_eq!(store.get(), Some(session));
        assert!(store.is_authenticated());
        assert_eq!(store.raw().as_deref(), Some(r#"{"user_id":42,"access_token":"abc.def.ghi"}"#));
    }

    #[test]
    fn test_clear_removes_record() {
        let store = MemorySessionStore::new();
        store.set(&Session::new(UserId::Number(1), "t")).unwrap();
        store.clear().unwrap();

        assert_eq!(store.raw(), None);
        assert_eq!(store.get(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_unreadable_record_is_logged_out() {
        assert_eq!(MemorySessionStore::with_raw("{not json").get(), None);
        assert_eq!(MemorySessionStore::with_raw("null").get(), None);
        assert_eq!(MemorySessionStore::with_raw(r#""token""#).get(), None);
    }

    #[test]
    fn test_tokenless_record_is_present_but_not_authenticated() {
        let store = MemorySessionStore::with_raw(r#"{"user_id": 3}"#);
        assert!(store.get().is_some());
        assert!(!store.is_authenticated());
    }
}
