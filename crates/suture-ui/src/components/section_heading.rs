//! Section Heading Component
//!
//! Numbered section title: `(02)` marker with a hairline rule, large serif title and an
//! optional mono subtitle.

use dioxus::prelude::*;

use super::button::with_extra_class;

/// Properties for the SectionHeading component
#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    /// Section number, e.g. "02"
    pub number: String,
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    /// Light text for dark sections
    #[props(default = false)]
    pub light: bool,
}

#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    let tone = if props.light { "section-heading light" } else { "section-heading" };
    let full_class = with_extra_class(tone, props.class.as_deref());

    rsx! {
        div { class: "{full_class}",
            div { class: "section-heading__marker",
                span { class: "section-heading__number", "({props.number})" }
                div { class: "section-heading__rule" }
            }
            h2 { class: "section-heading__title", "{props.title}" }
            if let Some(subtitle) = &props.subtitle {
                p { class: "section-heading__subtitle", "{subtitle}" }
            }
        }
    }
}
