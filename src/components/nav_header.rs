//! Navigation Header Component
//!
//! Fixed, blend-mode header: brand mark on the left, inert section links,
//! the cart orb with its entry count, and an inert menu orb.

use dioxus::prelude::*;
use suture_core::motion::{Ease, Reveal};
use suture_ui::{use_elapsed, MagneticButton};

/// Header slides down from above on first paint.
const ENTRANCE: Reveal = Reveal {
    delay: 0.0,
    duration: 1.0,
    ease: Ease::SIGNATURE,
};

/// Badge text for the cart orb, `None` hides the badge.
pub fn cart_badge(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

#[derive(Props, Clone, PartialEq)]
pub struct NavigationProps {
    /// Number of entries in the cart
    pub cart_count: usize,
    pub on_open_cart: EventHandler<()>,
}

/// Navigation component
///
/// Left: "NEON-SUTURE" wordmark.
/// Right: Collection / Archives links, cart orb with badge, menu orb.
#[component]
pub fn Navigation(props: NavigationProps) -> Element {
    let elapsed = use_elapsed(ENTRANCE.end());
    let p = ENTRANCE.progress(elapsed());
    let y = -100.0 * (1.0 - p);
    let badge = cart_badge(props.cart_count);

    rsx! {
        nav {
            class: "nav",
            style: "transform: translateY({y}px); opacity: {p};",

            div { class: "nav__brand", "NEON-SUTURE" }

            div { class: "nav__links",
                MagneticButton { class: "nav__link".to_string(), "Collection" }
                MagneticButton { class: "nav__link".to_string(), "Archives" }

                MagneticButton {
                    aria_label: "Open cart".to_string(),
                    onclick: move |_| props.on_open_cart.call(()),
                    div { class: "nav__orb",
                        // shopping bag glyph
                        svg {
                            width: "18",
                            height: "18",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "1.5",
                            path { d: "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z" }
                            path { d: "M3 6h18" }
                            path { d: "M16 10a4 4 0 0 1-8 0" }
                        }
                        if let Some(count) = badge {
                            div { class: "nav__badge", "{count}" }
                        }
                    }
                }

                MagneticButton { aria_label: "Menu".to_string(),
                    div { class: "nav__orb",
                        svg {
                            width: "20",
                            height: "20",
                            view_box: "0 0 24 24",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "1.5",
                            path { d: "M4 6h16M4 12h16M4 18h16" }
                        }
                    }
                }
            }
        }
    }
}
