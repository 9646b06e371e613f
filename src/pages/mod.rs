//! Page components for the Neon-Suture storefront.

mod storefront;

pub use storefront::Storefront;
