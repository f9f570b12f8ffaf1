use leptos::prelude::*;

/// Rounded label, used for tags and skill level
#[component]
pub fn Pill(
    /// Outlined variant instead of filled
    #[prop(optional)]
    is_secondary: bool,
    /// Color modifier, e.g. "tag-blue"
    #[prop(optional, into)]
    color: MaybeProp<String>,
    /// Pill content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = if is_secondary {
        "pill--secondary"
    } else {
        "pill--primary"
    };

    let color_class = move || {
        color
            .get()
            .filter(|c| !c.is_empty())
            .map(|c| format!("pill--{}", c))
            .unwrap_or_default()
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("pill {} {} {}", variant_class, color_class(), additional_class())>
            {children()}
        </span>
    }
}
