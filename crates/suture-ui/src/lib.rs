//! Neon-Suture UI Components
//!
//! Reusable Dioxus components for the storefront's editorial-glass look.
//! Nothing here knows about the cart or the catalog; components take plain
//! props and report clicks through event handlers.
//!
//! ## Design Language
//!
//! - **Onyx (#0a0a0a)**: page background
//! - **Gainsboro (#dcdcdc)**: body text
//! - **White at low alpha**: glass borders and hover glows
//! - **Alert red (#dc2626)**: clearance and destructive actions
//!
//! Motion is heavy and decelerating: springs for pointer follow, the
//! `cubic-bezier(0.22, 1, 0.36, 1)` curve for entrances.

pub mod components;
pub mod hooks;

pub use components::*;
pub use hooks::*;
