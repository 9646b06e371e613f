//! Motion math for scroll-linked and time-based effects.
//!
//! Everything here is a pure function of its inputs: scroll geometry in,
//! progress out; progress in, style value out; elapsed time in, position
//! out. The view layer only samples these.

mod ease;
mod reveal;
mod scroll;
mod spring;
mod transform;
mod value;

pub use ease::Ease;
pub use reveal::{Reveal, SlicedReveal};
pub use scroll::{Edge, ElementBox, Intersection, ScrollMetrics, ScrollOffset};
pub use spring::{Spring, SpringState, REST_DELTA, REST_SPEED};
pub use transform::{map, Transform};
pub use value::{format_number, Lerp, StyleValue};
