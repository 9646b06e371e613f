//! Hero Section
//!
//! A full-height opening frame. The background image arrives in six vertical
//! slices, the wordmark rises in after them, and the whole section recedes
//! (shrinks, dims, blurs) over the first 500 px of scroll.

use dioxus::prelude::*;
use suture_core::motion::{Ease, Reveal, SlicedReveal, Transform};
use suture_ui::use_elapsed;

use crate::context::{use_scroll_y, use_transform};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1536924430914-91f9e2041b83?q=80&w=2788&auto=format&fit=crop";

const TITLE: Reveal = Reveal {
    delay: 0.5,
    duration: 1.2,
    ease: Ease::EaseOut,
};
const TAGLINE: Reveal = Reveal {
    delay: 1.2,
    duration: 1.0,
    ease: Ease::Linear,
};
const ARROW: Reveal = Reveal {
    delay: 2.0,
    duration: 0.3,
    ease: Ease::Linear,
};

#[component]
pub fn Hero() -> Element {
    let scroll_y = use_scroll_y();
    let scale = use_transform(scroll_y, Transform::new(vec![0.0, 500.0], vec![1.0, 0.95]));
    let opacity = use_transform(scroll_y, Transform::new(vec![0.0, 400.0], vec![1.0, 0.5]));
    let y = use_transform(scroll_y, Transform::new(vec![0.0, 500.0], vec![0.0, 100.0]));
    let filter = use_transform(
        scroll_y,
        Transform::css(
            vec![0.0, 500.0],
            &["brightness(1) blur(0px)", "brightness(0.6) blur(10px)"],
        ),
    );

    let sliced = SlicedReveal::HERO;
    let elapsed = use_elapsed(sliced.total_duration().max(ARROW.end()));
    let t = elapsed();

    let title = TITLE.progress(t);
    let title_y = 100.0 * (1.0 - title);
    let tagline = TAGLINE.progress(t);
    let arrow = ARROW.progress(t);
    let slices: Vec<(f64, f64)> = (0..sliced.slices)
        .map(|i| (sliced.offset_percent(i, t), sliced.image_shift_vw(i)))
        .collect();

    rsx! {
        section {
            class: "hero",
            style: "transform: translateY({y}px) scale({scale}); opacity: {opacity}; filter: {filter};",

            div { class: "hero__slices",
                for (i, (offset, shift)) in slices.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "hero__slice",
                        style: "transform: translateY({offset}%);",
                        div {
                            class: "hero__slice-image",
                            style: "left: {shift}vw;",
                            img { src: HERO_IMAGE, alt: "Hero Background" }
                            div { class: "hero__slice-shade" }
                        }
                    }
                }
            }

            div { class: "hero__content",
                h1 {
                    class: "hero__title",
                    style: "transform: translateY({title_y}px); opacity: {title};",
                    "SUTURE"
                }
                div { class: "hero__tagline", style: "opacity: {tagline};",
                    span { "Est. 2024" }
                    span { "Editorial Glass" }
                    span { "System 01" }
                }
            }

            div { class: "hero__arrow", style: "opacity: {arrow};",
                svg {
                    width: "24",
                    height: "24",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1.5",
                    path { d: "M12 5v14M19 12l-7 7-7-7" }
                }
            }
        }
    }
}
