//! Neon-Suture Storefront Core Library
//!
//! Everything behind the scrollytelling storefront that is not pixels.
//!
//! ## Overview
//!
//! - [`catalog`]: the read-only product, lookbook, archive and material
//!   collections, built in or loaded from JSON
//! - [`motion`]: scroll-progress geometry, breakpoint transforms, easing,
//!   springs and staggered reveals
//! - [`store`]: the cart and the detail-overlay selection, mutated only
//!   through [`Storefront::dispatch`]
//!
//! ## Quick Start
//!
//! ```
//! use suture_core::{Catalog, StoreAction, Storefront};
//!
//! let catalog = Catalog::builtin();
//! let mut store = Storefront::new();
//!
//! let trench = catalog.products[0].clone();
//! store.dispatch(StoreAction::Select(trench.clone()));
//! store.dispatch(StoreAction::AddToCart(trench));
//!
//! assert!(!store.selection().is_open());
//! assert!(store.cart().is_drawer_open());
//! assert_eq!(store.cart().total(), 8499);
//! ```

pub mod catalog;
pub mod error;
pub mod motion;
pub mod price;
pub mod store;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use error::{SutureError, SutureResult};
pub use motion::{Ease, ScrollMetrics, ScrollOffset, StyleValue, Transform};
pub use price::{format_price, parse_price};
pub use store::{Cart, CartEntry, EntrySeq, Selection, StoreAction, StoreEvent, Storefront};
pub use types::*;
