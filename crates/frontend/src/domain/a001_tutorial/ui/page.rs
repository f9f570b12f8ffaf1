use super::metadata::TutorialMetadata;
use crate::shared::i18n::LanguageSelect;
use crate::shared::theme::ThemeSelect;
use contracts::domain::a001_tutorial::aggregate::TutorialRecord;
use leptos::prelude::*;

/// Article header area: preference toolbar and the metadata strip
#[component]
pub fn TutorialPage(tutorial: TutorialRecord) -> impl IntoView {
    view! {
        <div class="tutorial-page">
            <div class="tutorial-page__toolbar">
                <LanguageSelect />
                <ThemeSelect />
            </div>
            <TutorialMetadata tutorial=tutorial />
        </div>
    }
}
