//! Year-end sale banner.
//!
//! Tracks the section from the moment its top enters the viewport until its
//! bottom leaves, driving a parallax background, a counter-scrolling ticker
//! and a fade in / hold / fade out of the content card.

use dioxus::prelude::*;
use suture_core::motion::{ScrollOffset, Transform};
use suture_ui::{ButtonVariant, MagneticButton};

use crate::context::{use_scroll_progress, use_transform};

pub const SALE_TARGET: &str = "sale";

const SALE_IMAGE: &str = "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=2864&auto=format&fit=crop";

#[component]
pub fn SaleBanner() -> Element {
    let progress = use_scroll_progress(ScrollOffset::passing(SALE_TARGET));
    let bg_y = use_transform(progress, Transform::css(vec![0.0, 1.0], &["-20%", "20%"]));
    let text_x = use_transform(progress, Transform::css(vec![0.0, 1.0], &["10%", "-10%"]));
    let opacity = use_transform(
        progress,
        Transform::new(vec![0.0, 0.2, 0.8, 1.0], vec![0.0, 1.0, 1.0, 0.0]),
    );

    rsx! {
        section { class: "sale", "data-scroll-target": SALE_TARGET,
            div { class: "sale__bg", style: "transform: translateY({bg_y});",
                img { src: SALE_IMAGE, alt: "Sale Background" }
                div { class: "sale__bg-shade" }
            }

            div { class: "sale__ticker-layer",
                div { class: "sale__ticker", style: "transform: translateX({text_x});",
                    "PURGE SYSTEM PURGE SYSTEM"
                }
            }

            div { class: "sale__content", style: "opacity: {opacity};",
                span { class: "sale__alert", "Alert: Clearance Protocol" }
                h2 { class: "sale__title",
                    "YEAR END"
                    br {}
                    "ARCHIVE"
                }
                p { class: "sale__copy",
                    "Authorized liquidation of FW23 prototypes and surplus shell units. "
                    "Discounts calculated by wear-cycle algorithms."
                }
                div { class: "sale__discount", "UP TO 50% OFF" }
                MagneticButton { class: ButtonVariant::Alert.class().to_string(),
                    "Access Sale"
                    span { "\u{2192}" }
                }
            }
        }
    }
}
