//! Product Overlay Component
//!
//! Full-screen detail view for the selected product. Clicking the dimmed
//! backdrop or the close button closes it; "Add to Cart" hands the product
//! back to the page, which adds it, closes the overlay and opens the drawer.

use std::sync::Arc;

use dioxus::prelude::*;
use suture_core::Product;
use suture_ui::{ButtonVariant, CloseButton, MagneticButton};

#[derive(Props, Clone, PartialEq)]
pub struct ProductOverlayProps {
    /// The open product, `None` renders nothing
    pub product: Option<Arc<Product>>,
    pub on_close: EventHandler<()>,
    pub on_add_to_cart: EventHandler<Arc<Product>>,
}

#[component]
pub fn ProductOverlay(props: ProductOverlayProps) -> Element {
    let Some(product) = props.product.clone() else {
        return rsx! {};
    };
    let on_close = props.on_close;
    let on_add = props.on_add_to_cart;
    let chosen = product.clone();

    rsx! {
        div {
            class: "overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "overlay__panel",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "overlay__close",
                    CloseButton { onclick: move |_| on_close.call(()) }
                }

                div { class: "overlay__media",
                    img { src: "{product.image}", alt: "{product.name}" }
                    div { class: "overlay__media-shade" }
                }

                div { class: "overlay__info",
                    div { class: "overlay__body",
                        div { class: "overlay__meta",
                            span { class: "overlay__collection", "{product.collection}" }
                            span { class: "overlay__price", "{product.price}" }
                        }
                        h2 { class: "overlay__name", "{product.name}" }
                        p { class: "overlay__description", "{product.description}" }
                        div { class: "overlay__details",
                            for detail in product.details.iter() {
                                div { key: "{detail}", class: "overlay__detail",
                                    div { class: "overlay__bullet" }
                                    "{detail}"
                                }
                            }
                        }
                        MagneticButton {
                            class: ButtonVariant::Outline.class().to_string(),
                            onclick: move |_| on_add.call(chosen.clone()),
                            "Add to Cart"
                            span { "\u{2192}" }
                        }
                    }
                }
            }
        }
    }
}
