//! Scroll-progress geometry.
//!
//! The renderer reports [`ScrollMetrics`] on every scroll and resize. A
//! [`ScrollOffset`] turns those metrics into a normalised progress value,
//! either for the whole document or for one tracked element.
//!
//! Element offsets use edge pairs written `"<element edge> <viewport edge>"`.
//! `"start end"` means "the element's top meets the viewport's bottom".

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SutureError, SutureResult};

/// Document-relative box of a tracked element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }
}

/// Layout geometry read from the rendering surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    /// Boxes of tracked elements keyed by their scroll-target name
    #[serde(default)]
    pub elements: HashMap<String, ElementBox>,
}

impl ScrollMetrics {
    /// Page progress: 0 at the top, 1 when the bottom edge is reached.
    pub fn document_progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / range).clamp(0.0, 1.0)
    }

    pub fn element(&self, target: &str) -> Option<&ElementBox> {
        self.elements.get(target)
    }

    /// Index of the first target whose box crosses the viewport's centre.
    pub fn centered_index<S: AsRef<str>>(&self, targets: &[S]) -> Option<usize> {
        let center = self.scroll_y + self.viewport_height / 2.0;
        targets.iter().position(|target| {
            self.element(target.as_ref())
                .is_some_and(|bx| bx.contains(center))
        })
    }
}

/// One edge of an element or the viewport, as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = SutureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Edge::Start),
            "center" => Ok(Edge::Center),
            "end" => Ok(Edge::End),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|f| (0.0..=1.0).contains(f))
                .map(Edge::Fraction)
                .ok_or_else(|| SutureError::InvalidOffset(other.to_string())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => f.write_str("start"),
            Edge::Center => f.write_str("center"),
            Edge::End => f.write_str("end"),
            Edge::Fraction(x) => write!(f, "{x}"),
        }
    }
}

/// Where an element edge meets a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub element: Edge,
    pub viewport: Edge,
}

impl Intersection {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Scroll position at which the two edges line up.
    fn scroll_position(&self, bx: &ElementBox, viewport_height: f64) -> f64 {
        bx.top + self.element.fraction() * bx.height - self.viewport.fraction() * viewport_height
    }
}

impl FromStr for Intersection {
    type Err = SutureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(SutureError::InvalidOffset(s.to_string())),
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

/// Which region a progress signal follows.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollOffset {
    /// 0 at the page top, 1 at the page bottom
    Document,
    /// 0 at the `enter` intersection, 1 at the `exit` intersection
    Element {
        target: String,
        enter: Intersection,
        exit: Intersection,
    },
}

impl ScrollOffset {
    /// Progress across an element while it is pinned: `["start start", "end end"]`.
    pub fn element(target: impl Into<String>) -> Self {
        Self::Element {
            target: target.into(),
            enter: Intersection::new(Edge::Start, Edge::Start),
            exit: Intersection::new(Edge::End, Edge::End),
        }
    }

    /// Progress over the element's full pass through the viewport:
    /// `["start end", "end start"]`.
    pub fn passing(target: impl Into<String>) -> Self {
        Self::Element {
            target: target.into(),
            enter: Intersection::new(Edge::Start, Edge::End),
            exit: Intersection::new(Edge::End, Edge::Start),
        }
    }

    /// Parse an element offset from two edge-pair strings.
    pub fn parse(target: impl Into<String>, edges: [&str; 2]) -> SutureResult<Self> {
        Ok(Self::Element {
            target: target.into(),
            enter: edges[0].parse()?,
            exit: edges[1].parse()?,
        })
    }

    /// Current progress in `[0, 1]`.
    ///
    /// An element that has not been laid out yet reports 0.
    pub fn progress(&self, metrics: &ScrollMetrics) -> f64 {
        match self {
            ScrollOffset::Document => metrics.document_progress(),
            ScrollOffset::Element {
                target,
                enter,
                exit,
            } => {
                let Some(bx) = metrics.element(target) else {
                    return 0.0;
                };
                let start = enter.scroll_position(bx, metrics.viewport_height);
                let end = exit.scroll_position(bx, metrics.viewport_height);
                if end <= start {
                    return if metrics.scroll_y >= end { 1.0 } else { 0.0 };
                }
                ((metrics.scroll_y - start) / (end - start)).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        let mut elements = HashMap::new();
        elements.insert(
            "sale".to_string(),
            ElementBox {
                top: 2000.0,
                height: 800.0,
            },
        );
        ScrollMetrics {
            scroll_y,
            viewport_height: 1000.0,
            document_height: 6000.0,
            elements,
        }
    }

    #[test]
    fn document_progress_spans_scroll_range() {
        assert_eq!(metrics(0.0).document_progress(), 0.0);
        assert_eq!(metrics(2500.0).document_progress(), 0.5);
        assert_eq!(metrics(5000.0).document_progress(), 1.0);
        assert_eq!(metrics(9000.0).document_progress(), 1.0);
    }

    #[test]
    fn short_document_has_no_progress() {
        let m = ScrollMetrics {
            scroll_y: 0.0,
            viewport_height: 900.0,
            document_height: 600.0,
            elements: HashMap::new(),
        };
        assert_eq!(m.document_progress(), 0.0);
    }

    #[test]
    fn passing_offset() {
        let offset = ScrollOffset::passing("sale");
        // top meets viewport bottom at 1000, bottom meets viewport top at 2800
        assert_eq!(offset.progress(&metrics(500.0)), 0.0);
        assert_eq!(offset.progress(&metrics(1000.0)), 0.0);
        assert_eq!(offset.progress(&metrics(1900.0)), 0.5);
        assert_eq!(offset.progress(&metrics(2800.0)), 1.0);
        assert_eq!(offset.progress(&metrics(4000.0)), 1.0);
    }

    #[test]
    fn pinned_offset_for_tall_section() {
        let mut m = metrics(0.0);
        m.elements.insert(
            "archive".to_string(),
            ElementBox {
                top: 1000.0,
                height: 3000.0,
            },
        );
        let offset = ScrollOffset::element("archive");
        m.scroll_y = 1000.0;
        assert_eq!(offset.progress(&m), 0.0);
        m.scroll_y = 2000.0;
        assert_eq!(offset.progress(&m), 0.5);
        m.scroll_y = 3000.0;
        assert_eq!(offset.progress(&m), 1.0);
    }

    #[test]
    fn detached_target_reports_zero() {
        let offset = ScrollOffset::element("missing");
        assert_eq!(offset.progress(&metrics(1500.0)), 0.0);
    }

    #[test]
    fn degenerate_range_steps() {
        // element shorter than the viewport with "start start" / "end end"
        let offset = ScrollOffset::element("sale");
        assert_eq!(offset.progress(&metrics(1700.0)), 0.0);
        assert_eq!(offset.progress(&metrics(1800.0)), 1.0);
    }

    #[test]
    fn parse_edge_pairs() {
        let offset = ScrollOffset::parse("sale", ["start end", "end start"]).unwrap();
        assert_eq!(offset, ScrollOffset::passing("sale"));

        let custom = ScrollOffset::parse("sale", ["0.25 center", "end 0.1"]).unwrap();
        match custom {
            ScrollOffset::Element { enter, exit, .. } => {
                assert_eq!(enter.element, Edge::Fraction(0.25));
                assert_eq!(enter.viewport, Edge::Center);
                assert_eq!(exit.to_string(), "end 0.1");
            }
            ScrollOffset::Document => panic!("expected element offset"),
        }
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(ScrollOffset::parse("x", ["top bottom", "end start"]).is_err());
        assert!(ScrollOffset::parse("x", ["start", "end start"]).is_err());
        assert!(ScrollOffset::parse("x", ["start end extra", "end start"]).is_err());
        assert!(ScrollOffset::parse("x", ["1.5 end", "end start"]).is_err());
    }

    #[test]
    fn centered_index_tracks_viewport_middle() {
        let mut m = metrics(0.0);
        for (i, name) in ["m1", "m2", "m3"].iter().enumerate() {
            m.elements.insert(
                name.to_string(),
                ElementBox {
                    top: 1000.0 + i as f64 * 800.0,
                    height: 800.0,
                },
            );
        }
        let targets = ["m1", "m2", "m3"];
        m.scroll_y = 0.0;
        assert_eq!(m.centered_index(&targets), None);
        m.scroll_y = 600.0;
        assert_eq!(m.centered_index(&targets), Some(0));
        m.scroll_y = 1500.0;
        assert_eq!(m.centered_index(&targets), Some(1));
        m.scroll_y = 2200.0;
        assert_eq!(m.centered_index(&targets), Some(2));
    }

    #[test]
    fn metrics_decode_from_bridge_json() {
        let json = r#"{
            "scrollY": 120.5, "viewportHeight": 900, "documentHeight": 8000,
            "elements": { "archive": { "top": 900, "height": 2700 } }
        }"#;
        let m: ScrollMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(m.scroll_y, 120.5);
        assert_eq!(m.element("archive").map(|b| b.bottom()), Some(3600.0));
    }
}
