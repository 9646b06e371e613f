//! Page-level watermark that drifts up and fades as the page scrolls.

use dioxus::prelude::*;
use suture_core::motion::{ScrollOffset, Transform};

use crate::context::{use_scroll_progress, use_transform};

#[component]
pub fn ParallaxBackground() -> Element {
    let progress = use_scroll_progress(ScrollOffset::Document);
    let y = use_transform(progress, Transform::new(vec![0.0, 1.0], vec![0.0, -200.0]));
    let opacity = use_transform(progress, Transform::new(vec![0.0, 0.2], vec![0.1, 0.0]));

    rsx! {
        div { class: "parallax-bg",
            div { style: "transform: translateY({y}px); opacity: {opacity};",
                h1 { class: "parallax-bg__word", "SUTURE" }
            }
        }
    }
}
