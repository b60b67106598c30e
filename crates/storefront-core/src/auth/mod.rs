//! Authentication Pages
//!
//! Login and registration commands plus the catalog's login/logout badge.
//! Each command validates locally, calls the gateway, and returns a
//! [`SubmitOutcome`] the page renders; none of them can fail outright.

mod badge;
mod login;
mod register;

pub use badge::SessionBadge;
pub use login::LoginController;
pub use register::RegistrationController;

use crate::routes::Route;

/// Result of submitting a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected before any request; shown inline
    Invalid(String),
    /// The gateway refused or could not be reached
    Failed(String),
    /// Show `message` (if any) and navigate to `redirect` after `delay_ms`
    Success {
        message: Option<String>,
        redirect: Route,
        delay_ms: u32,
    },
}

impl SubmitOutcome {
    /// Error text to display, if this is a failure of either kind
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Invalid(msg) | SubmitOutcome::Failed(msg) => Some(msg),
            SubmitOutcome::Success { .. } => None,
        }
    }
}
