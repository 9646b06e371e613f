use dioxus::prelude::*;

use crate::context::get_catalog;
use crate::pages::Storefront;
use crate::scroll::use_scroll_bridge;
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - The single-page storefront
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Storefront {},
}

/// Root application component.
///
/// Provides global styles, the catalog, live scroll metrics and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_catalog);

    // One bridge feeds every scroll-linked panel
    let metrics = use_scroll_bridge();
    use_context_provider(|| metrics);

    let palette = palette_css();

    rsx! {
        style { {palette} }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
