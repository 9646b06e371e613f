//! Core Collection grid.
//!
//! The shoppable products on an invisible 12-column grid; odd items drop
//! into the right-hand columns and sit lower, giving the stagger.

use std::sync::Arc;

use dioxus::prelude::*;
use suture_core::Product;

use crate::context::use_catalog;

/// Grid cell classes for the product at `index`.
pub fn cell_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "core-grid__cell"
    } else {
        "core-grid__cell offset"
    }
}

#[component]
pub fn CoreGrid(on_select: EventHandler<Arc<Product>>) -> Element {
    let catalog = use_catalog();

    rsx! {
        section { class: "core-grid",
            div { class: "core-grid__intro",
                h2 { class: "core-grid__headline", "Architectural silhouettes." }
                div { class: "core-grid__system",
                    p { "SYSTEM 01" }
                    p { "CORE ITEMS" }
                }
            }

            div { class: "core-grid__items",
                for (index, product) in catalog.products.iter().enumerate() {
                    div { key: "{product.id}", class: cell_class(index),
                        ProductCard { product: product.clone(), on_select }
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: Arc<Product>, on_select: EventHandler<Arc<Product>>) -> Element {
    let chosen = product.clone();

    rsx! {
        div {
            class: "product-card",
            onclick: move |_| on_select.call(chosen.clone()),
            div { class: "product-card__frame",
                img { src: "{product.image}", alt: "{product.name}" }
                div { class: "product-card__tint" }
                div { class: "product-card__tag", "VIEW ASSET" }
            }
            div { class: "product-card__caption",
                div {
                    h3 { class: "product-card__name", "{product.name}" }
                    p { class: "product-card__collection", "{product.collection}" }
                }
                span { class: "product-card__price", "{product.price}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_cells_are_offset() {
        assert_eq!(cell_class(0), "core-grid__cell");
        assert_eq!(cell_class(1), "core-grid__cell offset");
        assert_eq!(cell_class(2), "core-grid__cell");
    }
}
