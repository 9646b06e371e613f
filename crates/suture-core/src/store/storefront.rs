//! Root storefront state and its action dispatcher.
//!
//! The layout owns one [`Storefront`] and routes every user intent through
//! [`Storefront::dispatch`]. Panels and overlays only emit actions.

use std::sync::Arc;

use crate::types::{Product, ProductId};

use super::cart::{Cart, EntrySeq};
use super::selection::Selection;

/// A user intent that changes storefront state.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Open the detail overlay for a product
    Select(Arc<Product>),
    /// Close the detail overlay
    CloseSelection,
    /// Add to cart, close the overlay, then show the drawer
    AddToCart(Arc<Product>),
    /// Remove the latest entry for a product
    Remove(ProductId),
    /// Remove one specific cart row
    RemoveEntry(EntrySeq),
    OpenCart,
    CloseCart,
    ClearCart,
}

/// An observable effect of a dispatched action, in the order applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Selected(ProductId),
    SelectionClosed,
    EntryAdded(EntrySeq),
    EntryRemoved,
    CartCleared,
    DrawerOpened,
    DrawerClosed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storefront {
    cart: Cart,
    selection: Selection,
}

impl Storefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Background scrolling is suspended while the overlay is open.
    pub fn scroll_locked(&self) -> bool {
        self.selection.is_open()
    }

    /// Apply `action` and report its effects in order.
    ///
    /// No-op actions (closing a closed overlay, removing an absent entry)
    /// succeed and report nothing.
    pub fn dispatch(&mut self, action: StoreAction) -> Vec<StoreEvent> {
        let mut events = Vec::new();
        match action {
            StoreAction::Select(product) => {
                events.push(StoreEvent::Selected(product.id.clone()));
                self.selection.select(product);
            }
            StoreAction::CloseSelection => {
                if self.selection.close() {
                    events.push(StoreEvent::SelectionClosed);
                }
            }
            StoreAction::AddToCart(product) => {
                events.push(StoreEvent::EntryAdded(self.cart.append(product)));
                if self.selection.close() {
                    events.push(StoreEvent::SelectionClosed);
                }
                self.open_drawer(&mut events);
            }
            StoreAction::Remove(id) => {
                if self.cart.remove(&id) {
                    events.push(StoreEvent::EntryRemoved);
                }
            }
            StoreAction::RemoveEntry(seq) => {
                if self.cart.remove_entry(seq) {
                    events.push(StoreEvent::EntryRemoved);
                }
            }
            StoreAction::OpenCart => self.open_drawer(&mut events),
            StoreAction::CloseCart => {
                if self.cart.is_drawer_open() {
                    self.cart.set_drawer_visible(false);
                    events.push(StoreEvent::DrawerClosed);
                }
            }
            StoreAction::ClearCart => {
                if !self.cart.is_empty() {
                    self.cart.clear();
                    events.push(StoreEvent::CartCleared);
                }
            }
        }

        tracing::debug!(
            ?events,
            entries = self.cart.len(),
            total = self.cart.total(),
            overlay_open = self.selection.is_open(),
            "Storefront action applied"
        );
        events
    }

    fn open_drawer(&mut self, events: &mut Vec<StoreEvent>) {
        if !self.cart.is_drawer_open() {
            self.cart.set_drawer_visible(true);
            events.push(StoreEvent::DrawerOpened);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: &str) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::new(id),
            name: format!("ITEM {id}"),
            collection: "TEST".to_string(),
            price: price.to_string(),
            image: String::new(),
            description: String::new(),
            details: vec![],
        })
    }

    #[test]
    fn add_to_cart_orders_effects() {
        let mut store = Storefront::new();
        let p = product("01", "Rs. 8,499");
        store.dispatch(StoreAction::Select(p.clone()));
        let events = store.dispatch(StoreAction::AddToCart(p));
        assert_eq!(
            events,
            vec![
                StoreEvent::EntryAdded(EntrySeq(0)),
                StoreEvent::SelectionClosed,
                StoreEvent::DrawerOpened,
            ]
        );
    }

    #[test]
    fn add_to_cart_without_selection_still_opens_drawer() {
        let mut store = Storefront::new();
        let events = store.dispatch(StoreAction::AddToCart(product("01", "Rs. 1")));
        assert_eq!(
            events,
            vec![StoreEvent::EntryAdded(EntrySeq(0)), StoreEvent::DrawerOpened]
        );
        assert!(store.cart().is_drawer_open());
    }

    #[test]
    fn scroll_lock_follows_selection() {
        let mut store = Storefront::new();
        assert!(!store.scroll_locked());
        store.dispatch(StoreAction::Select(product("01", "Rs. 1")));
        assert!(store.scroll_locked());
        store.dispatch(StoreAction::CloseSelection);
        assert!(!store.scroll_locked());
    }

    #[test]
    fn noops_report_nothing() {
        let mut store = Storefront::new();
        assert!(store.dispatch(StoreAction::CloseSelection).is_empty());
        assert!(store.dispatch(StoreAction::CloseCart).is_empty());
        assert!(store
            .dispatch(StoreAction::Remove(ProductId::new("01")))
            .is_empty());
        assert!(store.dispatch(StoreAction::ClearCart).is_empty());
        assert_eq!(store, Storefront::new());
    }

    #[test]
    fn drawer_toggles() {
        let mut store = Storefront::new();
        assert_eq!(
            store.dispatch(StoreAction::OpenCart),
            vec![StoreEvent::DrawerOpened]
        );
        assert!(store.dispatch(StoreAction::OpenCart).is_empty());
        assert_eq!(
            store.dispatch(StoreAction::CloseCart),
            vec![StoreEvent::DrawerClosed]
        );
    }
}
