use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::i18n::I18nProvider;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!(
        "Starting with lang={} theme={}",
        config.lang.code(),
        config.theme.as_str()
    );

    view! {
        <ThemeProvider initial=config.theme>
            <I18nProvider initial=config.lang>
                <AppRoutes />
            </I18nProvider>
        </ThemeProvider>
    }
}
