//! Application configuration
//!
//! Compile-time defaults plus user preferences resolved at startup.
//! Precedence: `?lang=` / `?theme=` query parameters, then localStorage, then defaults.

use crate::shared::theme::Theme;
use contracts::enums::language::Lang;
use serde::Deserialize;

/// How long the "copied" acknowledgment stays visible after a clipboard copy.
pub const COPY_ACK_WINDOW_MS: u32 = 2000;

pub const LANG_STORAGE_KEY: &str = "app-lang";
pub const THEME_STORAGE_KEY: &str = "app-theme";

#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    lang: Option<String>,
    theme: Option<String>,
}

/// Startup preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub lang: Lang,
    pub theme: Theme,
}

impl AppConfig {
    /// Read preferences from the current URL and localStorage.
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::resolve(
            &search,
            read_storage(LANG_STORAGE_KEY),
            read_storage(THEME_STORAGE_KEY),
        )
    }

    fn resolve(search: &str, stored_lang: Option<String>, stored_theme: Option<String>) -> Self {
        let query: QueryParams =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        let lang = query
            .lang
            .as_deref()
            .and_then(Lang::from_code)
            .or_else(|| stored_lang.as_deref().and_then(Lang::from_code))
            .unwrap_or_default();

        let theme = query
            .theme
            .or(stored_theme)
            .map(|s| Theme::from_str(&s))
            .unwrap_or_default();

        Self { lang, theme }
    }
}

/// Read a value from localStorage
pub fn read_storage(key: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Save a value to localStorage
pub fn write_storage(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to persist '{}' to localStorage", key);
        }
    }
}
