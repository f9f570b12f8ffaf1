use super::view_model::TutorialMetadataViewModel;
use crate::shared::clipboard::CopyToClipboard;
use crate::shared::components::tutorial_tags::TutorialTags;
use crate::shared::components::ui::{Link, Pill};
use crate::shared::emoji::Emoji;
use crate::shared::i18n::use_i18n;
use contracts::domain::a001_tutorial::aggregate::TutorialRecord;
use leptos::prelude::*;

/// Metadata strip under a tutorial: tags and skill, author/source/date/reading
/// time, and an optional tip address that copies on click.
#[component]
pub fn TutorialMetadata(tutorial: TutorialRecord) -> impl IntoView {
    let i18n = use_i18n();
    let vm = TutorialMetadataViewModel::from_record(&tutorial);
    let tags = vm.tags.clone();
    let skill_class = vm.skill_class();

    let author = vm.author.clone().map(|author| {
        view! {
            <div class="tutorial-metadata__data">
                <Emoji text=":writing_hand:" size=1.0 mr=0.5 />
                {author}
            </div>
        }
    });

    let source = vm.source.clone().map(|source| {
        view! {
            <div class="tutorial-metadata__data">
                <Emoji text=":books:" size=1.0 mr=0.5 />
                <Link to=source.url>{source.label}</Link>
            </div>
        }
    });

    let published = vm.published.is_some().then(|| {
        let vm = vm.clone();
        view! {
            <div class="tutorial-metadata__data">
                <Emoji text=":calendar:" size=1.0 mr=0.5 />
                {move || vm.published_label(i18n.lang.get())}
            </div>
        }
    });

    let address = vm.address.clone().map(|copy_text| {
        let vm = vm.clone();
        view! {
            <div class="tutorial-metadata__address">
                <CopyToClipboard text=copy_text let:state>
                    <span class="fake-link">
                        <div class="tutorial-metadata__code">
                            {
                                let vm = vm.clone();
                                move || vm.address_label(i18n.lang.get(), state).map(|label| {
                                    let copied = label.copied.is_some();
                                    view! {
                                        {label.text()}
                                        {copied.then(|| view! {
                                            <Emoji text=":white_check_mark:" size=1.0 ml=0.5 mr=0.5 />
                                        })}
                                    }
                                })
                            }
                        </div>
                    </span>
                </CopyToClipboard>
            </div>
        }
    });

    let skill_vm = vm.clone();
    let reading_vm = vm.clone();

    view! {
        <div class="tutorial-metadata">
            <div class="tutorial-metadata__tags">
                <div class="tutorial-metadata__pills">
                    <TutorialTags tags=tags />
                </div>
                <Pill is_secondary=true class=skill_class>
                    {move || skill_vm.skill_label(i18n.lang.get())}
                </Pill>
            </div>
            <div class="tutorial-metadata__row">
                {author}
                {source}
                {published}
                <div class="tutorial-metadata__data">
                    <Emoji text=":stopwatch:" size=1.0 mr=0.5 />
                    {move || reading_vm.reading_time_label(i18n.lang.get())}
                </div>
            </div>
            <div class="tutorial-metadata__row">
                {address}
            </div>
        </div>
    }
}
