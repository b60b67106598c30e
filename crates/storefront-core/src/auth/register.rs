//! Registration Command

use crate::error::ApiError;
use crate::gateway::{GatewayClient, HttpTransport};
use crate::i18n::{Language, Message};
use crate::routes::Route;
use crate::session::SessionStore;
use crate::validation::RegistrationForm;

use super::SubmitOutcome;

pub struct RegistrationController<T, S> {
    client: GatewayClient<T>,
    store: S,
    lang: Language,
    redirect_delay_ms: u32,
}

impl<T: HttpTransport, S: SessionStore> RegistrationController<T, S> {
    pub fn new(client: GatewayClient<T>, store: S, lang: Language, redirect_delay_ms: u32) -> Self {
        Self {
            client,
            store,
            lang,
            redirect_delay_ms,
        }
    }

    /// Any stored session record sends the visitor to the catalog
    pub fn guard(&self) -> Option<Route> {
        self.store.get().map(|_| Route::Catalog)
    }

    /// Only email and password are sent; name and phone stay local
    pub async fn submit(&self, form: &RegistrationForm) -> SubmitOutcome {
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(rule) => return SubmitOutcome::Invalid(rule.message().text(self.lang).to_string()),
        };

        match self.client.register(&credentials).await {
            Ok(()) => {
                log::info!("[REGISTER] Account created for {}", credentials.email);
                SubmitOutcome::Success {
                    message: Some(Message::RegistrationSucceeded.text(self.lang).to_string()),
                    redirect: Route::Login,
                    delay_ms: self.redirect_delay_ms,
                }
            }
            Err(e) => SubmitOutcome::Failed(self.failure_message(&e)),
        }
    }

    fn failure_message(&self, err: &ApiError) -> String {
        if err.is_transport() {
            log::error!("[REGISTER] Registration error: {}", err);
            return Message::RegistrationUnreachable.text(self.lang).to_string();
        }
        log::warn!("[REGISTER] Registration rejected: {}", err);
        err.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| Message::RegistrationFailed.text(self.lang).to_string())
    }
}
