//! The detail-overlay selection.

use std::sync::Arc;

use crate::types::Product;

/// Which product, if any, is open in the detail overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Closed,
    Open(Arc<Product>),
}

impl Selection {
    /// Open `product`, replacing any current selection.
    pub fn select(&mut self, product: Arc<Product>) {
        *self = Selection::Open(product);
    }

    /// Close the overlay. Returns whether anything was open.
    pub fn close(&mut self) -> bool {
        matches!(std::mem::take(self), Selection::Open(_))
    }

    pub fn current(&self) -> Option<&Arc<Product>> {
        match self {
            Selection::Open(product) => Some(product),
            Selection::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}
