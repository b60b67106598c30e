//! Session Badge
//!
//! The Login/Logout button in the catalog header.

use crate::error::StoreError;
use crate::i18n::Message;
use crate::routes::Route;
use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBadge {
    pub logged_in: bool,
}

impl SessionBadge {
    pub fn read<S: SessionStore>(store: &S) -> Self {
        Self {
            logged_in: store.is_authenticated(),
        }
    }

    pub fn label(self) -> Message {
        if self.logged_in {
            Message::Logout
        } else {
            Message::Login
        }
    }

    pub fn css_class(self) -> &'static str {
        if self.logged_in {
            "auth-btn logout"
        } else {
            "auth-btn"
        }
    }

    /// Logs out when signed in; the login page is the destination either way
    pub fn click<S: SessionStore>(self, store: &S) -> Result<Route, StoreError> {
        if self.logged_in {
            store.clear()?;
            log::info!("[SESSION] Logged out");
        }
        Ok(Route::Login)
    }
}
