//! Session Storage
//!
//! `localStorage` implementation of the session store.

use storefront_core::session::{self, SessionStore, SESSION_KEY};
use storefront_core::{Session, StoreError};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn get(&self) -> Option<Session> {
        let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
        session::decode(&raw)
    }

    fn set(&self, session: &Session) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        let raw = session::encode(session)?;
        storage
            .set_item(SESSION_KEY, &raw)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .remove_item(SESSION_KEY)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
