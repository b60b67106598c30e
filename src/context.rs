//! Storefront Context
//!
//! Configuration and command factories provided via Leptos Context API.

use leptos::prelude::*;
use storefront_core::{
    CatalogController, GatewayClient, Language, LoginController, Message, RegistrationController,
    StorefrontConfig,
};

use crate::commands::{GlooTransport, LocalStorageSessionStore};

/// App-wide settings; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    config: StoredValue<StorefrontConfig>,
    /// UI language for every message
    pub lang: Language,
}

impl StorefrontContext {
    pub fn new(config: StorefrontConfig) -> Self {
        let lang = config.language;
        Self {
            config: StoredValue::new(config),
            lang,
        }
    }

    /// Localized text
    pub fn t(&self, message: Message) -> &'static str {
        message.text(self.lang)
    }

    pub fn error_highlight_ms(&self) -> u32 {
        self.config.with_value(|config| config.error_highlight_ms)
    }

    pub fn sessions(&self) -> LocalStorageSessionStore {
        LocalStorageSessionStore
    }

    fn gateway(&self) -> GatewayClient<GlooTransport> {
        let base = self.config.with_value(|config| config.api_base.clone());
        GatewayClient::new(GlooTransport, base)
    }

    pub fn catalog(&self) -> CatalogController<GlooTransport> {
        let per_page = self.config.with_value(|config| config.per_page);
        CatalogController::new(self.gateway(), per_page, self.lang)
    }

    pub fn login(&self) -> LoginController<GlooTransport, LocalStorageSessionStore> {
        LoginController::new(self.gateway(), self.sessions(), self.lang)
    }

    pub fn registration(&self) -> RegistrationController<GlooTransport, LocalStorageSessionStore> {
        let delay = self.config.with_value(|config| config.redirect_delay_ms);
        RegistrationController::new(self.gateway(), self.sessions(), self.lang, delay)
    }
}

/// Get the storefront context (provided by `App`)
pub fn use_storefront() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}
