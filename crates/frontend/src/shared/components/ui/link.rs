use leptos::prelude::*;

/// Whether a link target leaves the site
pub fn is_external(to: &str) -> bool {
    to.starts_with("http://") || to.starts_with("https://") || to.starts_with("//")
}

/// Hyperlink; external targets open in a new tab
#[component]
pub fn Link(
    #[prop(into)] to: String,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let external = is_external(&to);
    let classes = move || {
        let base = if external { "link link--external" } else { "link" };
        format!("{} {}", base, class.get().unwrap_or_default())
    };

    view! {
        <a
            href=to
            class=classes
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external() {
        assert!(is_external("https://example.com/post"));
        assert!(is_external("http://example.com"));
        assert!(is_external("//cdn.example.com"));
        assert!(!is_external("/en/developers/tutorials/"));
        assert!(!is_external("#section"));
    }
}
