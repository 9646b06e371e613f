//! Archive Rail
//!
//! A 300vh section whose sticky inner frame turns vertical scroll into a
//! horizontal slide across the archive cards. Cards unfold their specs on
//! hover; the archive is not shoppable.

use dioxus::prelude::*;
use suture_core::motion::{ScrollOffset, Transform};
use suture_core::ArchiveItem;
use suture_ui::SectionHeading;

use crate::context::{use_catalog, use_scroll_progress, use_transform};

pub const ARCHIVE_TARGET: &str = "archive";

#[component]
pub fn ArchiveRail() -> Element {
    let catalog = use_catalog();
    let progress = use_scroll_progress(ScrollOffset::element(ARCHIVE_TARGET));
    let x = use_transform(progress, Transform::css(vec![0.0, 1.0], &["0%", "-75%"]));

    rsx! {
        section { class: "archive", "data-scroll-target": ARCHIVE_TARGET,
            div { class: "archive__sticky",
                div { class: "archive__heading",
                    SectionHeading {
                        number: "02",
                        title: "THE ARCHIVE",
                        subtitle: "Historical artifacts from the SUTURE program.".to_string(),
                        light: true,
                    }
                }

                div { class: "archive__track", style: "transform: translateX({x});",
                    for item in catalog.archive.iter() {
                        PrismCard { key: "{item.id}", item: item.clone() }
                    }
                    div { class: "archive__end", "End of Line" }
                }
            }
        }
    }
}

/// Glass card for one archive piece.
#[component]
fn PrismCard(item: ArchiveItem) -> Element {
    rsx! {
        div { class: "prism-card",
            div { class: "prism-card__image",
                img { src: "{item.image}", alt: "{item.name}" }
                div { class: "prism-card__shade" }
            }
            div { class: "prism-card__content",
                div { class: "prism-card__header",
                    div { class: "prism-card__meta",
                        span { "{item.code}" }
                        span { "// {item.year}" }
                    }
                    h3 { class: "prism-card__name", "{item.name}" }
                }
                div { class: "prism-card__specs",
                    div { class: "prism-card__spec-grid",
                        div {
                            span { class: "prism-card__spec-label", "WEIGHT" }
                            "{item.specs.weight}"
                        }
                        div {
                            span { class: "prism-card__spec-label", "ORIGIN" }
                            "{item.specs.origin}"
                        }
                        div { class: "prism-card__spec-wide",
                            span { class: "prism-card__spec-label", "COMPOSITION" }
                            "{item.specs.composition}"
                        }
                    }
                }
            }
        }
    }
}
