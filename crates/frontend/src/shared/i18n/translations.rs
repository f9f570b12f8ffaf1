use super::TranslationKey;
use contracts::enums::language::Lang;

pub(super) fn english(key: TranslationKey) -> &'static str {
    match key {
        TranslationKey::PageTutorialBeginner => "Beginner",
        TranslationKey::PageTutorialIntermediate => "Intermediate",
        TranslationKey::PageTutorialAdvanced => "Advanced",
        TranslationKey::TutorialMetadataMinuteRead => "minute read",
        TranslationKey::TutorialMetadataTipAuthor => "Tip author",
        TranslationKey::Copied => "Copied",
    }
}

/// Non-English catalogues. `None` means "use English".
pub(super) fn lookup(lang: Lang, key: TranslationKey) -> Option<&'static str> {
    use TranslationKey::*;

    let s = match (lang, key) {
        (Lang::En, _) => return None,

        (Lang::Ru, PageTutorialBeginner) => "Начальный",
        (Lang::Ru, PageTutorialIntermediate) => "Средний",
        (Lang::Ru, PageTutorialAdvanced) => "Продвинутый",
        (Lang::Ru, TutorialMetadataMinuteRead) => "мин. чтения",
        (Lang::Ru, TutorialMetadataTipAuthor) => "Поддержать автора",
        (Lang::Ru, Copied) => "Скопировано",

        (Lang::De, PageTutorialBeginner) => "Anfänger",
        (Lang::De, PageTutorialIntermediate) => "Mittelstufe",
        (Lang::De, PageTutorialAdvanced) => "Fortgeschritten",
        (Lang::De, TutorialMetadataMinuteRead) => "Minuten Lesezeit",
        (Lang::De, TutorialMetadataTipAuthor) => "Trinkgeld an Autor",
        (Lang::De, Copied) => "Kopiert",

        (Lang::Es, PageTutorialBeginner) => "Principiante",
        (Lang::Es, PageTutorialIntermediate) => "Intermedio",
        (Lang::Es, PageTutorialAdvanced) => "Avanzado",
        (Lang::Es, TutorialMetadataMinuteRead) => "minutos de lectura",
        (Lang::Es, TutorialMetadataTipAuthor) => "Propina al autor",
        (Lang::Es, Copied) => "Copiado",

        (Lang::Fr, PageTutorialBeginner) => "Débutant",
        (Lang::Fr, PageTutorialIntermediate) => "Intermédiaire",
        (Lang::Fr, PageTutorialAdvanced) => "Avancé",
        (Lang::Fr, TutorialMetadataMinuteRead) => "minutes de lecture",
        (Lang::Fr, TutorialMetadataTipAuthor) => "Pourboire à l'auteur",
        (Lang::Fr, Copied) => "Copié",
    };
    Some(s)
}
