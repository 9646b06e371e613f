//! Cart Drawer Component
//!
//! Slides in from the right on a spring while open. Lists every entry in
//! insertion order with a per-row remove button and the formatted total.
//! The checkout button is inert.

use dioxus::prelude::*;
use suture_core::motion::Spring;
use suture_core::{format_price, CartEntry, EntrySeq};
use suture_ui::{use_spring, ButtonVariant, CloseButton, IconButton, MagneticButton};

/// Drawer offset in percent of its width when fully hidden.
const HIDDEN: f64 = 100.0;

/// Header label, e.g. `SYSTEM STORAGE // (2)`.
pub fn storage_label(count: usize) -> String {
    format!("SYSTEM STORAGE // ({count})")
}

#[derive(Props, Clone, PartialEq)]
pub struct CartDrawerProps {
    pub open: ReadOnlySignal<bool>,
    pub entries: Vec<CartEntry>,
    /// Sum of entry prices, already parsed
    pub total: u64,
    pub on_close: EventHandler<()>,
    /// Remove the clicked row
    pub on_remove: EventHandler<EntrySeq>,
}

#[component]
pub fn CartDrawer(props: CartDrawerProps) -> Element {
    let open = props.open;
    let mut slide = use_spring(Spring::DRAWER, HIDDEN);

    use_effect(move || {
        slide.set(if open() { 0.0 } else { HIDDEN });
    });

    // stay mounted until the exit slide finishes
    let offset = slide.get();
    if !open() && offset >= HIDDEN {
        return rsx! {};
    }

    let on_close = props.on_close;
    let on_remove = props.on_remove;
    let label = storage_label(props.entries.len());
    let total = format_price(props.total);

    rsx! {
        if open() {
            div {
                class: "drawer-backdrop",
                onclick: move |_| on_close.call(()),
            }
        }

        aside {
            class: "drawer",
            style: "transform: translateX({offset}%);",

            div { class: "drawer__header",
                div { class: "drawer__count", "{label}" }
                CloseButton { onclick: move |_| on_close.call(()) }
            }

            div { class: "drawer__items",
                if props.entries.is_empty() {
                    div { class: "drawer__empty",
                        p { "STORAGE EMPTY" }
                        p { "INITIATE ACQUISITION" }
                    }
                } else {
                    for entry in props.entries.iter() {
                        DrawerRow {
                            key: "{entry.seq}",
                            entry: entry.clone(),
                            on_remove: on_remove,
                        }
                    }
                }
            }

            div { class: "drawer__footer",
                div { class: "drawer__total",
                    span { class: "drawer__total-label", "TOTAL ESTIMATE" }
                    span { class: "drawer__total-value", "{total}" }
                }
                MagneticButton { class: format!("{} drawer__checkout", ButtonVariant::Solid.class()),
                    "Proceed to Checkout"
                    span { "\u{2192}" }
                }
            }
        }
    }
}

#[component]
fn DrawerRow(entry: CartEntry, on_remove: EventHandler<EntrySeq>) -> Element {
    let product = entry.product.clone();
    let seq = entry.seq;

    rsx! {
        div { class: "drawer-row",
            div { class: "drawer-row__thumb",
                img { src: "{product.image}", alt: "{product.name}" }
            }
            div { class: "drawer-row__body",
                div {
                    div { class: "drawer-row__top",
                        h4 { class: "drawer-row__name", "{product.name}" }
                        IconButton {
                            onclick: move |_| on_remove.call(seq),
                            aria_label: format!("Remove {}", product.name),
                            class: "remove-btn".to_string(),
                            "REMOVE"
                        }
                    }
                    p { class: "drawer-row__collection", "{product.collection}" }
                }
                div { class: "drawer-row__price", "{product.price}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_label_counts_entries() {
        assert_eq!(storage_label(0), "SYSTEM STORAGE // (0)");
        assert_eq!(storage_label(2), "SYSTEM STORAGE // (2)");
    }
}
