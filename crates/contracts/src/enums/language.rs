use serde::{Deserialize, Serialize};

/// Язык интерфейса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ru,
    De,
    Es,
    Fr,
}

impl Lang {
    /// BCP-47 код языка
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ru => "ru",
            Lang::De => "de",
            Lang::Es => "es",
            Lang::Fr => "fr",
        }
    }

    /// Название языка на самом языке (для переключателя)
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Ru => "Русский",
            Lang::De => "Deutsch",
            Lang::Es => "Español",
            Lang::Fr => "Français",
        }
    }

    pub fn all() -> [Lang; 5] {
        [Lang::En, Lang::Ru, Lang::De, Lang::Es, Lang::Fr]
    }

    /// Парсинг из кода; региональные варианты ("ru-RU", "en_GB") сводятся к языку.
    /// Неизвестный код -> `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or(code)
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Lang::En),
            "ru" => Some(Lang::Ru),
            "de" => Some(Lang::De),
            "es" => Some(Lang::Es),
            "fr" => Some(Lang::Fr),
            _ => None,
        }
    }

    /// Как `from_code`, но с откатом на язык по умолчанию
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Lang::from_code("ru"), Some(Lang::Ru));
        assert_eq!(Lang::from_code("ru-RU"), Some(Lang::Ru));
        assert_eq!(Lang::from_code("en_GB"), Some(Lang::En));
        assert_eq!(Lang::from_code("DE"), Some(Lang::De));
        assert_eq!(Lang::from_code("zh"), None);
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(Lang::from_code_or_default("xx"), Lang::En);
        assert_eq!(Lang::from_code_or_default(""), Lang::En);
        assert_eq!(Lang::from_code_or_default("fr"), Lang::Fr);
    }

    #[test]
    fn test_codes_are_unique() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
    }
}
