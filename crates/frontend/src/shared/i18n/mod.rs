//! Interface translations
//!
//! The set of translatable strings is closed: every string the UI shows is a
//! [`TranslationKey`] variant, so a lookup can never miss at runtime.
//! Languages without an entry for a key fall back to English.

mod translations;

use crate::shared::config::{write_storage, LANG_STORAGE_KEY};
use contracts::enums::language::Lang;
use contracts::enums::skill_level::SkillLevel;
use leptos::prelude::*;

/// Identifier of a translated interface string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    PageTutorialBeginner,
    PageTutorialIntermediate,
    PageTutorialAdvanced,
    TutorialMetadataMinuteRead,
    TutorialMetadataTipAuthor,
    Copied,
}

impl TranslationKey {
    /// Message id as used in the translation catalogues.
    pub fn id(&self) -> &'static str {
        match self {
            TranslationKey::PageTutorialBeginner => "page-tutorial-BEGINNER",
            TranslationKey::PageTutorialIntermediate => "page-tutorial-INTERMEDIATE",
            TranslationKey::PageTutorialAdvanced => "page-tutorial-ADVANCED",
            TranslationKey::TutorialMetadataMinuteRead => "comp-tutorial-metadata-minute-read",
            TranslationKey::TutorialMetadataTipAuthor => "comp-tutorial-metadata-tip-author",
            TranslationKey::Copied => "copied",
        }
    }

    pub fn all() -> [TranslationKey; 6] {
        [
            TranslationKey::PageTutorialBeginner,
            TranslationKey::PageTutorialIntermediate,
            TranslationKey::PageTutorialAdvanced,
            TranslationKey::TutorialMetadataMinuteRead,
            TranslationKey::TutorialMetadataTipAuthor,
            TranslationKey::Copied,
        ]
    }
}

impl From<SkillLevel> for TranslationKey {
    fn from(skill: SkillLevel) -> Self {
        match skill {
            SkillLevel::Beginner => TranslationKey::PageTutorialBeginner,
            SkillLevel::Intermediate => TranslationKey::PageTutorialIntermediate,
            SkillLevel::Advanced => TranslationKey::PageTutorialAdvanced,
        }
    }
}

/// Look up `key` for `lang`, falling back to English.
pub fn translate(lang: Lang, key: TranslationKey) -> &'static str {
    translations::lookup(lang, key).unwrap_or_else(|| {
        if lang != Lang::En {
            log::debug!("No '{}' translation for {}", lang.code(), key.id());
        }
        translations::english(key)
    })
}

/// Active interface language, shared through context.
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub lang: RwSignal<Lang>,
}

impl I18nContext {
    /// Switch the language and persist the choice.
    pub fn set_lang(&self, lang: Lang) {
        log::debug!("Interface language changed to {}", lang.code());
        self.lang.set(lang);
        write_storage(LANG_STORAGE_KEY, lang.code());
    }
}

#[component]
pub fn I18nProvider(
    /// Language resolved from configuration
    initial: Lang,
    children: Children,
) -> impl IntoView {
    let lang = RwSignal::new(initial);

    Effect::new(move |_| {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            if let Err(err) = root.set_attribute("lang", lang.get().code()) {
                log::warn!("Failed to set document lang: {:?}", err);
            }
        }
    });

    provide_context(I18nContext { lang });

    children()
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}

/// Language switcher
#[component]
pub fn LanguageSelect() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <select
            class="toolbar-select"
            on:change=move |ev| i18n.set_lang(Lang::from_code_or_default(&event_target_value(&ev)))
        >
            {Lang::all().into_iter().map(|lang| {
                view! {
                    <option value=lang.code() selected=move || i18n.lang.get() == lang>
                        {lang.native_name()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_keys() {
        assert_eq!(
            TranslationKey::from(SkillLevel::Beginner).id(),
            "page-tutorial-BEGINNER"
        );
        assert_eq!(
            TranslationKey::from(SkillLevel::Intermediate).id(),
            "page-tutorial-INTERMEDIATE"
        );
        assert_eq!(
            TranslationKey::from(SkillLevel::Advanced).id(),
            "page-tutorial-ADVANCED"
        );
    }

    #[test]
    fn test_skill_key_matches_uppercased_code() {
        for skill in SkillLevel::all() {
            let expected = format!("page-tutorial-{}", skill.code().to_uppercase());
            assert_eq!(TranslationKey::from(skill).id(), expected);
        }
    }

    #[test]
    fn test_english_strings() {
        assert_eq!(translate(Lang::En, TranslationKey::PageTutorialBeginner), "Beginner");
        assert_eq!(translate(Lang::En, TranslationKey::TutorialMetadataMinuteRead), "minute read");
        assert_eq!(translate(Lang::En, TranslationKey::TutorialMetadataTipAuthor), "Tip author");
        assert_eq!(translate(Lang::En, TranslationKey::Copied), "Copied");
    }

    #[test]
    fn test_every_language_has_a_string_for_every_key() {
        for lang in Lang::all() {
            for key in TranslationKey::all() {
                assert!(!translate(lang, key).is_empty(), "{:?} {:?}", lang, key);
            }
        }
    }

    #[test]
    fn test_translated_languages_differ_from_english() {
        assert_eq!(translate(Lang::Ru, TranslationKey::Copied), "Скопировано");
        assert_ne!(
            translate(Lang::De, TranslationKey::PageTutorialAdvanced),
            translate(Lang::En, TranslationKey::PageTutorialAdvanced)
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = TranslationKey::all().iter().map(|k| k.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TranslationKey::all().len());
    }
}
