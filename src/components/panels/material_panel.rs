//! Material Science panel
//!
//! Split layout on a white ground: a sticky specimen frame on the left and
//! one scrolling entry per material on the right. Whichever entry crosses
//! the viewport's centre line becomes active and swaps the specimen image.
//! A red scan line sweeps the frame as the whole section scrolls past.

use dioxus::prelude::*;
use suture_core::motion::{ScrollOffset, Transform};
use suture_core::MaterialSpec;
use suture_ui::SectionHeading;

use crate::context::{scroll_target, use_catalog, use_scroll_metrics, use_scroll_progress, use_transform};

pub const MATERIALS_TARGET: &str = "materials";

/// Active entry after a scroll: the centred one, or the previous if none is.
pub fn next_active(previous: usize, centered: Option<usize>) -> usize {
    centered.unwrap_or(previous)
}

/// Fake survey coordinates shown on the specimen frame.
pub fn coordinates(index: usize) -> (String, String) {
    (
        format!("LAT: {}.0024", 35 + index),
        format!("LON: {}.4042", 139_i64 - index as i64),
    )
}

#[component]
pub fn MaterialPanel() -> Element {
    let catalog = use_catalog();
    let metrics = use_scroll_metrics();
    let mut active = use_signal(|| 0usize);

    let targets: Vec<String> = catalog
        .materials
        .iter()
        .map(|m| scroll_target("material", &m.id))
        .collect();

    let progress = use_scroll_progress(ScrollOffset::element(MATERIALS_TARGET));
    let scan = use_transform(progress, Transform::css(vec![0.0, 1.0], &["0%", "400%"]));

    let watched = targets.clone();
    use_effect(move || {
        let centered = metrics.read().centered_index(&watched);
        let previous = *active.peek();
        let next = next_active(previous, centered);
        if next != previous {
            tracing::debug!(material = next, "Active material changed");
            active.set(next);
        }
    });

    let index = active().min(catalog.materials.len().saturating_sub(1));
    let Some(current) = catalog.materials.get(index) else {
        return rsx! {};
    };
    let (lat, lon) = coordinates(index);
    let ref_label = format!("IMG_REF_0{}", index + 1);
    let formula = current.formula_label();

    rsx! {
        section { class: "materials", "data-scroll-target": MATERIALS_TARGET,
            div { class: "materials__grid",
                div { class: "materials__visual",
                    div { class: "materials__frame",
                        // keyed so the entrance animation replays on change
                        div { key: "{current.id}", class: "materials__image",
                            img { src: "{current.image}", alt: "{current.title}" }
                            div { class: "materials__image-shade" }
                        }

                        div { class: "materials__hud",
                            div { class: "materials__hud-row",
                                span { "{ref_label}" }
                                span { "{formula}" }
                            }
                            div { class: "materials__hud-row",
                                div {
                                    "{lat}"
                                    br {}
                                    "{lon}"
                                }
                                div { class: "materials__hud-pulse", "SYS.ANALYSIS" }
                            }
                        }

                        div { class: "materials__scanline", style: "top: {scan};" }
                    }
                }

                div { class: "materials__copy",
                    SectionHeading {
                        number: "03",
                        title: "MATERIAL SCIENCE",
                        subtitle: "Molecular engineering for the post-modern wearer.".to_string(),
                    }
                    div { class: "materials__list",
                        for (i, (material, target)) in catalog.materials.iter().zip(targets.iter()).enumerate() {
                            MaterialEntry {
                                key: "{material.id}",
                                material: material.clone(),
                                index: i,
                                target: target.clone(),
                                active: i == index,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MaterialEntry(material: MaterialSpec, index: usize, target: String, active: bool) -> Element {
    let class = if active { "material-entry active" } else { "material-entry" };
    let number = format!("0{}", index + 1);

    rsx! {
        div { class: "{class}", "data-scroll-target": "{target}",
            div { class: "material-entry__body",
                div { class: "material-entry__index", "{number}" }
                h3 { class: "material-entry__title", "{material.title}" }
                p { class: "material-entry__description", "{material.description}" }
                div { class: "material-entry__properties",
                    for prop in material.properties.iter() {
                        span { key: "{prop}", class: "material-entry__property", "{prop}" }
                    }
                }
            }
        }
    }
}
