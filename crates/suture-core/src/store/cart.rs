//! The shopping cart.
//!
//! An ordered list of entries plus an independent drawer-visibility flag.
//! Adding the same product twice yields two entries; there is no quantity.

use std::fmt;
use std::sync::Arc;

use crate::types::{Product, ProductId};

/// Identity of one cart row, unique for the lifetime of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntrySeq(pub u64);

impl fmt::Display for EntrySeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry_{}", self.0)
    }
}

/// One added product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub seq: EntrySeq,
    pub product: Arc<Product>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    next_seq: u64,
    drawer_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `product` and open the drawer.
    pub fn add(&mut self, product: Arc<Product>) -> EntrySeq {
        let seq = self.append(product);
        self.set_drawer_visible(true);
        seq
    }

    /// Append `product` without touching the drawer.
    pub(crate) fn append(&mut self, product: Arc<Product>) -> EntrySeq {
        let seq = EntrySeq(self.next_seq);
        self.next_seq += 1;
        tracing::debug!(product_id = %product.id, %seq, "Cart entry added");
        self.entries.push(CartEntry { seq, product });
        seq
    }

    /// Remove the most recently added entry for `id`.
    ///
    /// Returns whether an entry was removed; a missing id is a no-op.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        match self.entries.iter().rposition(|e| &e.product.id == id) {
            Some(index) => {
                let entry = self.entries.remove(index);
                tracing::debug!(product_id = %id, seq = %entry.seq, "Cart entry removed");
                true
            }
            None => false,
        }
    }

    /// Remove exactly the row `seq`.
    pub fn remove_entry(&mut self, seq: EntrySeq) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.seq != seq);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(%seq, "Cart row removed");
        }
        removed
    }

    /// Remove every entry for `id`, returning how many went.
    pub fn remove_all(&mut self, id: &ProductId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| &e.product.id != id);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of entry prices in whole rupees, recomputed on every call.
    ///
    /// An entry whose price has no digits contributes 0.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| {
                entry.product.numeric_price().unwrap_or_else(|| {
                    tracing::warn!(
                        product_id = %entry.product.id,
                        price = %entry.product.price,
                        "Unparseable price counted as zero"
                    );
                    0
                })
            })
            .fold(0u64, u64::saturating_add)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn set_drawer_visible(&mut self, visible: bool) {
        self.drawer_open = visible;
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
    fn test_add_opens_drawer_and_totals() {
        let mut cart = Cart::new();
        assert!(!cart.is_drawer_open());
        cart.add(product("01", "Rs. 8,499"));
        assert!(cart.is_drawer_open());
        assert_eq!(cart.total(), 8499);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_duplicates_are_separate_rows() {
        let mut cart = Cart::new();
        let p = product("02", "Rs. 6,999");
        let a = cart.add(p.clone());
        let b = cart.add(p);
        assert_ne!(a, b);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 13998);
    }

    #[test]
    fn test_remove_takes_latest_match_only() {
        let mut cart = Cart::new();
        let first = cart.add(product("01", "Rs. 1"));
        cart.add(product("02", "Rs. 2"));
        cart.add(product("01", "Rs. 1"));

        assert!(cart.remove(&ProductId::new("01")));
        let seqs: Vec<_> = cart.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![first, EntrySeq(1)]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(product("01", "Rs. 1"));
        assert!(!cart.remove(&ProductId::new("nope")));
        assert!(!cart.remove_entry(EntrySeq(42)));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_entry_and_remove_all() {
        let mut cart = Cart::new();
        let a = cart.add(product("01", "Rs. 1"));
        cart.add(product("01", "Rs. 1"));
        cart.add(product("03", "Rs. 3"));

        assert!(cart.remove_entry(a));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.remove_all(&ProductId::new("01")), 1);
        assert_eq!(cart.total(), 3);
    }

    #[test]
    fn test_unparseable_price_counts_zero() {
        let mut cart = Cart::new();
        cart.add(product("01", "price on request"));
        cart.add(product("02", "Rs. 4,200"));
        assert_eq!(cart.total(), 4200);
    }

    #[test]
    fn test_drawer_flag_is_independent() {
        let mut cart = Cart::new();
        cart.add(product("01", "Rs. 1"));
        cart.set_drawer_visible(false);
        assert_eq!(cart.len(), 1);
        cart.clear();
        assert!(cart.is_empty());
        assert!(!cart.is_drawer_open());
        assert_eq!(cart.total(), 0);
    }
}
