//! Cart and selection state.

mod cart;
mod selection;
mod storefront;

pub use cart::{Cart, CartEntry, EntrySeq};
pub use selection::Selection;
pub use storefront::{StoreAction, StoreEvent, Storefront};
