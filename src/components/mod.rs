//! Storefront components.
//!
//! Every component here is stateless with respect to the cart and the
//! selection: it renders props and reports user intent through handlers.
//! Only the storefront page owns and mutates state.

mod cart_drawer;
mod nav_header;
pub mod panels;
mod parallax_background;
mod product_overlay;

pub use cart_drawer::CartDrawer;
pub use nav_header::Navigation;
pub use parallax_background::ParallaxBackground;
pub use product_overlay::ProductOverlay;
