//! Visual theme: palette constants and the global stylesheet.

mod colors;
mod styles;

pub use colors::palette_css;
pub use styles::GLOBAL_STYLES;
