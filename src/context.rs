//! Shared context for the storefront views.
//!
//! The catalog and the live scroll metrics are provided once by `App`.
//! Everything else is derived from them with memos, so a panel only
//! recomputes when the geometry it depends on changes.
//!
//! ## Usage
//!
//! ```ignore
//! let progress = use_scroll_progress(ScrollOffset::passing("sale"));
//! let opacity = use_transform(progress, Transform::new(vec![0.0, 1.0], vec![1.0, 0.0]));
//! rsx! { div { style: "opacity: {opacity};" } }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use suture_core::motion::{Lerp, ScrollMetrics, ScrollOffset, Transform};
use suture_core::Catalog;

/// Get the catalog chosen at startup.
pub fn get_catalog() -> Arc<Catalog> {
    crate::get_catalog()
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> Arc<Catalog> {
    use_context::<Arc<Catalog>>()
}

/// Hook to access the raw scroll metrics.
///
/// Updated by the scroll bridge on every scroll and resize.
pub fn use_scroll_metrics() -> Signal<ScrollMetrics> {
    use_context::<Signal<ScrollMetrics>>()
}

/// Progress of `offset` in `[0, 1]`, recomputed only when metrics change.
pub fn use_scroll_progress(offset: ScrollOffset) -> Memo<f64> {
    let metrics = use_scroll_metrics();
    use_memo(move || offset.progress(&metrics.read()))
}

/// Raw vertical scroll position in CSS pixels.
pub fn use_scroll_y() -> Memo<f64> {
    let metrics = use_scroll_metrics();
    use_memo(move || metrics.read().scroll_y)
}

/// Map a progress memo through `transform`.
pub fn use_transform<T>(progress: Memo<f64>, transform: Transform<T>) -> Memo<T>
where
    T: Lerp + Clone + PartialEq + 'static,
{
    use_memo(move || transform.map(progress()))
}

/// Name under which the scroll bridge reports an element's box.
pub fn scroll_target(section: &str, id: &str) -> String {
    format!("{section}-{id}")
}
