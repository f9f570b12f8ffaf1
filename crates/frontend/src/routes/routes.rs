use crate::domain::a001_tutorial::ui::page::TutorialPage;
use crate::domain::a001_tutorial::SAMPLE_TUTORIAL_JSON;
use contracts::domain::a001_tutorial::aggregate::TutorialRecord;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let tutorial = match TutorialRecord::from_json(SAMPLE_TUTORIAL_JSON) {
        Ok(record) => Some(record),
        Err(err) => {
            log::error!("Failed to load tutorial: {:#}", err);
            None
        }
    };

    match tutorial {
        Some(tutorial) => view! { <TutorialPage tutorial=tutorial /> }.into_any(),
        None => view! { <div class="error">"Tutorial unavailable"</div> }.into_any(),
    }
}
