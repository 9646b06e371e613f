//! The storefront's vertical sections, top to bottom.
//!
//! Panels read the catalog and scroll progress from context and keep any
//! hover or active-item state to themselves. Panels that show shoppable
//! products report a click through `on_select`.

mod archive_rail;
mod core_grid;
mod footer;
mod hero;
mod lookbook;
mod material_panel;
mod sale_banner;

pub use archive_rail::ArchiveRail;
pub use core_grid::CoreGrid;
pub use footer::Footer;
pub use hero::Hero;
pub use lookbook::Lookbook;
pub use material_panel::MaterialPanel;
pub use sale_banner::SaleBanner;
