//! Lookbook
//!
//! A dense four-column campaign grid. Each card breathes with its own
//! scroll progress (slightly smaller entering and leaving, full size when
//! centred) while a glare streak sweeps across it. Clicking opens the
//! product overlay.

use std::sync::Arc;

use dioxus::prelude::*;
use suture_core::motion::{ScrollOffset, Transform};
use suture_core::{LookbookItem, Product};
use suture_ui::SectionHeading;

use crate::context::{scroll_target, use_catalog, use_scroll_progress, use_transform};

#[component]
pub fn Lookbook(on_select: EventHandler<Arc<Product>>) -> Element {
    let catalog = use_catalog();

    rsx! {
        section { class: "lookbook",
            div { class: "lookbook__inner",
                div { class: "lookbook__header",
                    div {
                        h2 { class: "lookbook__title", "SUTURE CAMPAIGN" }
                        p { class: "lookbook__kicker", "FW24 // SYSTEM SIMULATIONS" }
                    }
                    SectionHeading {
                        number: "04",
                        title: "VISUAL DATA",
                        subtitle: "The ghost in the machine.".to_string(),
                        light: true,
                    }
                }

                div { class: "lookbook__grid",
                    for item in catalog.lookbook.iter() {
                        LensCard { key: "{item.product.id}", item: item.clone(), on_select }
                    }
                }
            }
        }
    }
}

#[component]
fn LensCard(item: LookbookItem, on_select: EventHandler<Arc<Product>>) -> Element {
    let target = scroll_target("lens", item.product.id.as_str());
    let progress = use_scroll_progress(ScrollOffset::passing(target.clone()));
    let scale = use_transform(
        progress,
        Transform::new(vec![0.0, 0.5, 1.0], vec![0.95, 1.0, 0.95]),
    );
    let glare_top = use_transform(progress, Transform::css(vec![0.0, 1.0], &["-100%", "200%"]));
    let glare_opacity = use_transform(progress, Transform::new(vec![0.4, 0.6], vec![0.3, 0.0]));

    let product = item.product.clone();
    let chosen = product.clone();
    let margin = item.offset_css();

    rsx! {
        div {
            class: "lens-card",
            style: "margin-top: {margin};",
            "data-scroll-target": "{target}",

            div {
                class: "lens-card__frame",
                style: "transform: scale({scale});",
                onclick: move |_| on_select.call(chosen.clone()),

                img { src: "{product.image}", alt: "{product.name}" }

                div {
                    class: "lens-card__glare",
                    style: "top: {glare_top}; opacity: {glare_opacity};",
                }

                div { class: "lens-card__overlay",
                    div { class: "lens-card__details",
                        div { class: "lens-card__row",
                            h3 { class: "lens-card__name", "{product.name}" }
                            span { class: "lens-card__price", "{product.price}" }
                        }
                        p { class: "lens-card__description", "{product.description}" }
                        span { class: "lens-card__cta", "VIEW ITEM" }
                    }
                }

                div { class: "lens-card__micro",
                    div { class: "lens-card__dot" }
                    div { class: "lens-card__dot", style: "opacity: 0.4;" }
                }
                div { class: "lens-card__ref", "REF_{product.id} // RAW" }
            }
        }
    }
}
