//! Utilities for date and time formatting
//!
//! Provides consistent, locale-aware date formatting across the application
use chrono::Locale;
use contracts::domain::a001_tutorial::aggregate::parse_published;
use contracts::enums::language::Lang;

/// chrono locale used to render dates for an interface language
pub fn chrono_locale(lang: Lang) -> Locale {
    match lang {
        Lang::En => Locale::en_US,
        Lang::Ru => Locale::ru_RU,
        Lang::De => Locale::de_DE,
        Lang::Es => Locale::es_ES,
        Lang::Fr => Locale::fr_FR,
    }
}

/// Long date pattern for an interface language
fn long_date_pattern(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "%B %-d, %Y",
        Lang::Ru => "%-d %B %Y г.",
        Lang::De => "%-d. %B %Y",
        Lang::Es => "%-d de %B de %Y",
        Lang::Fr => "%-d %B %Y",
    }
}

/// Format a raw timestamp as a long date in the given language
/// Example: (En, "2020-04-13") -> "April 13, 2020"
/// Unparsable input is returned unchanged.
pub fn get_locale_timestamp(lang: Lang, raw: &str) -> String {
    match parse_published(raw) {
        Some(date) => date
            .format_localized(long_date_pattern(lang), chrono_locale(lang))
            .to_string(),
        None => raw.to_string(),
    }
}
