//! Storefront page - the single scrolling page and sole owner of state.
//!
//! The cart and the selection live in one [`StorefrontState`] signal.
//! Panels, the overlay and the drawer emit [`StoreAction`]s through the
//! handlers below; nothing else writes to it.

use std::sync::Arc;

use dioxus::prelude::*;
use suture_core::{Product, StoreAction, Storefront as StorefrontState};

use crate::components::panels::{
    ArchiveRail, CoreGrid, Footer, Hero, Lookbook, MaterialPanel, SaleBanner,
};
use crate::components::{CartDrawer, Navigation, ParallaxBackground, ProductOverlay};

/// `overflow` value for the document body.
pub fn body_overflow(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        ""
    }
}

/// Storefront page component.
///
/// Section order: hero, archive, sale, core grid, materials, lookbook,
/// footer. Navigation, watermark, drawer and overlay float above.
#[component]
pub fn Storefront() -> Element {
    let mut state = use_signal(StorefrontState::new);

    let mut dispatch = move |action: StoreAction| {
        let events = state.write().dispatch(action);
        if !events.is_empty() {
            tracing::debug!(?events, "Storefront updated");
        }
    };

    // Suspend page scroll while the overlay is open
    let locked = use_memo(move || state.read().scroll_locked());
    use_effect(move || {
        let overflow = body_overflow(locked());
        let _ = document::eval(&format!("document.body.style.overflow = '{overflow}';"));
    });

    let current = state.read();
    let cart = current.cart();
    let entries = cart.entries().to_vec();
    let total = cart.total();
    let cart_count = cart.len();
    let drawer_open = cart.is_drawer_open();
    let selected = current.selection().current().cloned();
    drop(current);

    let select = move |product: Arc<Product>| dispatch(StoreAction::Select(product));

    rsx! {
        div { class: "storefront",
            Navigation {
                cart_count,
                on_open_cart: move |_| dispatch(StoreAction::OpenCart),
            }

            ParallaxBackground {}

            CartDrawer {
                open: drawer_open,
                entries,
                total,
                on_close: move |_| dispatch(StoreAction::CloseCart),
                on_remove: move |seq| dispatch(StoreAction::RemoveEntry(seq)),
            }

            main {
                Hero {}
                ArchiveRail {}
                SaleBanner {}
                CoreGrid { on_select: select }
                MaterialPanel {}
                Lookbook { on_select: select }
                Footer {}
            }

            ProductOverlay {
                product: selected,
                on_close: move |_| dispatch(StoreAction::CloseSelection),
                on_add_to_cart: move |product| dispatch(StoreAction::AddToCart(product)),
            }
        }
    }
}
