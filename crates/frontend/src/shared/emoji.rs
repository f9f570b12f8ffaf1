use leptos::prelude::*;

/// Glyph for a `:shortcode:`, if known
pub fn glyph(shortcode: &str) -> Option<&'static str> {
    let glyph = match shortcode.trim_matches(':') {
        "writing_hand" => "\u{270D}\u{FE0F}",
        "books" => "\u{1F4DA}",
        "calendar" => "\u{1F4C6}",
        "stopwatch" => "\u{23F1}\u{FE0F}",
        "white_check_mark" => "\u{2705}",
        _ => return None,
    };
    Some(glyph)
}

fn emoji_style(size: f64, ml: Option<f64>, mr: Option<f64>) -> String {
    let mut style = format!("font-size: {}em;", size);
    if let Some(ml) = ml {
        style.push_str(&format!(" margin-left: {}em;", ml));
    }
    if let Some(mr) = mr {
        style.push_str(&format!(" margin-right: {}em;", mr));
    }
    style
}

/// Inline emoji rendered from a `:shortcode:`; unknown codes render as text
#[component]
pub fn Emoji(
    #[prop(into)] text: String,
    /// Size in em
    #[prop(optional)]
    size: Option<f64>,
    /// Left margin in em
    #[prop(optional)]
    ml: Option<f64>,
    /// Right margin in em
    #[prop(optional)]
    mr: Option<f64>,
) -> impl IntoView {
    let label = text.trim_matches(':').replace('_', " ");
    let content = glyph(&text).map(str::to_string).unwrap_or(text);

    view! {
        <span
            class="emoji"
            role="img"
            aria-label=label
            style=emoji_style(size.unwrap_or(1.0), ml, mr)
        >
            {content}
        </span>
    }
}
