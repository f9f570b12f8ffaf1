use crate::shared::components::ui::Pill;
use leptos::prelude::*;

const TAG_COLORS: [&str; 5] = ["tag-blue", "tag-orange", "tag-green", "tag-red", "tag-turquoise"];

/// Color modifier for a tag; the same tag always gets the same color
pub fn tag_color(tag: &str) -> &'static str {
    TAG_COLORS[tag.chars().count() % TAG_COLORS.len()]
}

/// One pill per tag, in input order
#[component]
pub fn TutorialTags(tags: Vec<String>) -> impl IntoView {
    tags.into_iter()
        .map(|tag| {
            view! {
                <Pill color=tag_color(&tag) class="tutorial-tag">
                    {tag}
                </Pill>
            }
        })
        .collect_view()
}
