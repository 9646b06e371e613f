//! Scroll metrics bridge.
//!
//! A small script in the webview listens for scroll and resize, measures
//! every element tagged `data-scroll-target`, and sends one
//! [`ScrollMetrics`] per animation frame. Rust keeps the latest value in a
//! signal that the rest of the app derives progress from.

use dioxus::prelude::*;
use suture_core::motion::ScrollMetrics;

const SCROLL_BRIDGE: &str = r#"
const measure = () => {
  const elements = {};
  document.querySelectorAll('[data-scroll-target]').forEach((el) => {
    const rect = el.getBoundingClientRect();
    elements[el.dataset.scrollTarget] = { top: rect.top + window.scrollY, height: rect.height };
  });
  return elements;
};
let queued = false;
const report = () => {
  queued = false;
  dioxus.send({
    scrollY: window.scrollY,
    viewportHeight: window.innerHeight,
    documentHeight: document.documentElement.scrollHeight,
    elements: measure(),
  });
};
const schedule = () => {
  if (!queued) {
    queued = true;
    requestAnimationFrame(report);
  }
};
window.addEventListener('scroll', schedule, { passive: true });
window.addEventListener('resize', schedule);
new ResizeObserver(schedule).observe(document.body);
schedule();
await new Promise(() => {});
"#;

/// Start the bridge and return the signal it feeds.
///
/// Until the first report arrives the metrics are all zero, so every
/// progress value reads 0.
pub fn use_scroll_bridge() -> Signal<ScrollMetrics> {
    let mut metrics = use_signal(ScrollMetrics::default);

    use_hook(move || {
        spawn(async move {
            let mut bridge = document::eval(SCROLL_BRIDGE);
            tracing::debug!("Scroll bridge started");
            loop {
                match bridge.recv::<ScrollMetrics>().await {
                    Ok(next) => {
                        // skip identical frames so memos stay quiet
                        if *metrics.peek() != next {
                            metrics.set(next);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Scroll bridge stopped: {:?}", e);
                        break;
                    }
                }
            }
        })
    });

    metrics
}
