//! Session Entity
//!
//! The login response, kept in browser storage until logout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User identifier as issued by the auth service (number or string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// Persisted session record
///
/// Stored records may be partial; only a non-empty token counts as signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub access_token: String,
}

impl Session {
    pub fn new(user_id: UserId, access_token: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            access_token: access_token.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }
}
