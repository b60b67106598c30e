//! Storefront Configuration
//!
//! Values fixed at build time. `STOREFRONT_API_BASE` and `STOREFRONT_LANG`
//! override the defaults when set in the build environment.

use crate::i18n::Language;

/// Gateway prefix every API path is appended to
pub const DEFAULT_API_BASE: &str = "/api";

/// Products requested per catalog page
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Delay between the registration success message and the redirect
pub const DEFAULT_REDIRECT_DELAY_MS: u32 = 2000;

/// How long login inputs stay marked invalid after an error
pub const DEFAULT_ERROR_HIGHLIGHT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub api_base: String,
    pub per_page: u32,
    pub redirect_delay_ms: u32,
    pub error_highlight_ms: u32,
    pub language: Language,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            error_highlight_ms: DEFAULT_ERROR_HIGHLIGHT_MS,
            language: Language::default(),
        }
    }
}

impl StorefrontConfig {
    /// Defaults, with overrides captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("STOREFRONT_API_BASE"), option_env!("STOREFRONT_LANG"))
    }

    pub fn from_overrides(api_base: Option<&str>, lang: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(code) = lang {
            config.language = Language::from_code(code);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.per_page, 12);
        assert_eq!(config.redirect_delay_ms, 2000);
        assert_eq!(config.language, Language::Ar);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_overrides(Some("https://shop.example/api/"), Some("en"));
        assert_eq!(config.api_base, "https://shop.example/api");
        assert_eq!(config.language, Language::En);

        let blank = StorefrontConfig::from_overrides(Some("  "), None);
        assert_eq!(blank.api_base, "/api");
    }
}
