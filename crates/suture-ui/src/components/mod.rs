//! Reusable UI components for the storefront
//!
//! All components share the editorial-glass look:
//! - Serif display type for names and headings
//! - Monospace uppercase for labels, prices and codes
//! - Hairline white borders at low alpha

mod button;
mod magnetic_button;
mod section_heading;

pub use button::*;
pub use magnetic_button::*;
pub use section_heading::*;
