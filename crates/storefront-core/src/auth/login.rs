//! Login Command

use crate::error::ApiError;
use crate::gateway::{GatewayClient, HttpTransport};
use crate::i18n::{Language, Message};
use crate::routes::Route;
use crate::session::SessionStore;
use crate::validation::LoginForm;

use super::SubmitOutcome;

pub struct LoginController<T, S> {
    client: GatewayClient<T>,
    store: S,
    lang: Language,
}

impl<T: HttpTransport, S: SessionStore> LoginController<T, S> {
    pub fn new(client: GatewayClient<T>, store: S, lang: Language) -> Self {
        Self { client, store, lang }
    }

    /// Where to send a visitor who is already signed in
    pub fn guard(&self) -> Option<Route> {
        self.store.is_authenticated().then_some(Route::Catalog)
    }

    pub async fn submit(&self, form: &LoginForm) -> SubmitOutcome {
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(rule) => return SubmitOutcome::Invalid(rule.message().text(self.lang).to_string()),
        };

        let session = match self.client.login(&credentials).await {
            Ok(session) => session,
            Err(e) => return SubmitOutcome::Failed(self.failure_message(&e)),
        };

        if let Err(e) = self.store.set(&session) {
            log::error!("[LOGIN] Could not persist session: {}", e);
            return SubmitOutcome::Failed(Message::LoginFailed.text(self.lang).to_string());
        }

        log::info!("[LOGIN] Signed in as user {:?}", session.user_id.as_ref().map(ToString::to_string));
        SubmitOutcome::Success {
            message: None,
            redirect: Route::Catalog,
            delay_ms: 0,
        }
    }

    fn failure_message(&self, err: &ApiError) -> String {
        if err.is_transport() {
            log::error!("[LOGIN] Login error: {}", err);
            return Message::LoginUnreachable.text(self.lang).to_string();
        }
        log::warn!("[LOGIN] Login rejected: {}", err);
        err.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| Message::LoginFailed.text(self.lang).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Session, UserId};
    use crate::session::MemorySessionStore;
    use crate::test_support::FakeTransport;

    fn controller<'a>(
        transport: &'a FakeTransport,
        store: &'a MemorySessionStore,
    ) -> LoginController<&'a FakeTransport, &'a MemorySessionStore> {
        LoginController::new(GatewayClient::new(transport, "/api"), store, Language::En)
    }

    #[tokio::test]
    async fn test_empty_password_sends_nothing() {
        let transport = FakeTransport::new();
        let store = MemorySessionStore::new();

        let outcome = controller(&transport, &store)
            .submit(&LoginForm::new("user@example.com", ""))
            .await;

        assert_eq!(outcome, SubmitOutcome::Invalid("Please fill in all fields".into()));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_bad_email_sends_nothing() {
        let transport = FakeTransport::new();
        let store = MemorySessionStore::new();

        let outcome = controller(&transport, &store)
            .submit(&LoginForm::new("user.example.com", "secret"))
            .await;

        assert_eq!(outcome.error(), Some("Please enter a valid email address"));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_success_persists_session_and_redirects() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"user_id": 17, "access_token": "jwt-token"}"#);
        let store = MemorySessionStore::new();

        let outcome = controller(&transport, &store)
            .submit(&LoginForm::new("user@example.com", "secret"))
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Success { message: None, redirect: Route::Catalog, delay_ms: 0 }
        );
        assert_eq!(store.get(), Some(Session::new(UserId::Number(17), "jwt-token")));
    }

    #[tokio::test]
    async fn test_server_message_shown_verbatim() {
        let transport = FakeTransport::new();
        transport.respond(401, r#"{"error": "Invalid email or password"}"#);
        let store = MemorySessionStore::new();

        let outcome = controller(&transport, &store)
            .submit(&LoginForm::new("user@example.com", "wrong"))
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed("Invalid email or password".into()));
        assert_eq!(store.get(), None);
    }

    #[tokio::test]
    async fn test_generic_message_without_body() {
        let transport = FakeTransport::new();
        transport.respond(502, "Bad Gateway");
        let store = MemorySessionStore::new();

        let outcome = controller(&transport, &store)
            .submit(&LoginForm::new("user@example.com", "secret"))
            .await;

        assert_eq!(outcome.error(), Some("Login failed"));
    }

    #[tokio::test]
    async fn test_network_failure_message() {
        let transport = FakeTransport::new();
        transport.fail("connection refused");
        let store = MemorySessionStore::new();

        let outcome = controller(&transport, &store)
            .submit(&LoginForm::new("user@example.com", "secret"))
            .await;

        assert_eq!(outcome.error(), Some("Cannot reach the server. Please try again."));
    }

    #[test]
    fn test_guard_redirects_signed_in_visitor() {
        let transport = FakeTransport::new();
        let store = MemorySessionStore::new();
        assert_eq!(controller(&transport, &store).guard(), None);

        store.set(&Session::new(UserId::Text("u1".into()), "tok")).unwrap();
        assert_eq!(controller(&transport, &store).guard(), Some(Route::Catalog));
    }
}
