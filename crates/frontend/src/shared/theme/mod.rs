//! Theme management module for the application.
//!
//! Provides a context-based theme system with light and dark themes.
//! The active theme is published to CSS as custom properties on `<body>`,
//! which the component stylesheets read (`var(--text300)` etc).
//! Theme preference is persisted in localStorage.

use crate::shared::config::{write_storage, THEME_STORAGE_KEY};
use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors and fonts a theme supplies to components.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemeTokens {
    pub text: &'static str,
    pub text300: &'static str,
    pub background: &'static str,
    pub edn_background: &'static str,
    pub primary: &'static str,
    pub primary100: &'static str,
    pub border: &'static str,
    pub font_monospace: &'static str,
}

const MONOSPACE: &str = "'SFMono-Regular', Consolas, 'Liberation Mono', Menlo, Courier, monospace";

impl Theme {
    /// Returns the theme name as a string (used for data attribute and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Parse theme from string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Returns all available themes.
    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }

    pub fn tokens(&self) -> ThemeTokens {
        match self {
            Theme::Light => ThemeTokens {
                text: "#333333",
                text300: "#4c4c4c",
                background: "#ffffff",
                edn_background: "#f7f7f7",
                primary: "#1c1ce1",
                primary100: "#e8e8ff",
                border: "#e5e5e5",
                font_monospace: MONOSPACE,
            },
            Theme::Dark => ThemeTokens {
                text: "#f2f2f2",
                text300: "#b2b2b2",
                background: "#222222",
                edn_background: "#191919",
                primary: "#ff7324",
                primary100: "#3d2a1f",
                border: "#575757",
                font_monospace: MONOSPACE,
            },
        }
    }

    /// CSS custom property declarations for this theme.
    pub fn css_variables(&self) -> String {
        let t = self.tokens();
        format!(
            "--text: {}; --text300: {}; --background: {}; --edn-background: {}; \
             --primary: {}; --primary100: {}; --border: {}; --font-monospace: {};",
            t.text,
            t.text300,
            t.background,
            t.edn_background,
            t.primary,
            t.primary100,
            t.border,
            t.font_monospace,
        )
    }
}

/// Apply theme to the document body.
fn apply_theme(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(err) = body.set_attribute("data-theme", theme.as_str()) {
        log::warn!("Failed to set data-theme: {:?}", err);
    }
    if let Err(err) = body.set_attribute("style", &theme.css_variables()) {
        log::warn!("Failed to apply theme variables: {:?}", err);
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        log::debug!("Theme changed to {}", theme.as_str());
        self.theme.set(theme);
        write_storage(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// Theme resolved from configuration
    initial: Theme,
    children: Children,
) -> impl IntoView {
    let theme = RwSignal::new(initial);

    Effect::new(move |_| apply_theme(theme.get()));

    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Theme selector dropdown component.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <select
            class="toolbar-select"
            on:change=move |ev| ctx.set_theme(Theme::from_str(&event_target_value(&ev)))
        >
            {Theme::all().into_iter().map(|theme| {
                view! {
                    <option
                        value=theme.as_str()
                        selected=move || ctx.theme.get() == theme
                    >
                        {theme.display_name()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
