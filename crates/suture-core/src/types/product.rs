//! Shoppable products.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::price::parse_price;

/// Identifier of a product, unique within its catalog collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A product that can be opened in the detail overlay and added to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub collection: String,
    /// Display price, e.g. `"Rs. 8,499"`
    pub price: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl Product {
    /// Whole-rupee price, or `None` if the display price has no digits.
    pub fn numeric_price(&self) -> Option<u64> {
        parse_price(&self.price)
    }
}

/// A product as placed in the lookbook's masonry grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbookItem {
    #[serde(flatten)]
    pub product: Arc<Product>,
    /// Extra top offset in quarter-rem steps, giving the grid its stagger
    #[serde(default)]
    pub offset: u16,
}

impl LookbookItem {
    /// Top offset as a CSS length.
    pub fn offset_css(&self) -> String {
        if self.offset == 0 {
            "0".to_string()
        } else {
            format!("{}rem", f64::from(self.offset) / 4.0)
        }
    }
}
