//! Catalog record types.
//!
//! All records are immutable display data. They are defined at startup,
//! either from the built-in catalog or a JSON override, and never change.

mod archive;
mod material;
mod product;

pub use archive::{ArchiveItem, ArchiveSpecs};
pub use material::MaterialSpec;
pub use product::{LookbookItem, Product, ProductId};
