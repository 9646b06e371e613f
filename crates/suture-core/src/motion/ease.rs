//! Easing curves applied to normalised progress.

use serde::{Deserialize, Serialize};

/// Timing curve applied to a normalised progress value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub enum Ease {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

impl Ease {
    /// The storefront's house curve: a long, heavy deceleration.
    pub const SIGNATURE: Ease = Ease::CubicBezier(0.22, 1.0, 0.36, 1.0);

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => solve_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => solve_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => solve_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => solve_bezier(x1, y1, x2, y2, t),
        }
    }

    /// CSS `transition-timing-function` for the same curve.
    pub fn css(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::EaseIn => "ease-in".to_string(),
            Self::EaseOut => "ease-out".to_string(),
            Self::EaseInOut => "ease-in-out".to_string(),
            Self::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

fn bezier(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`, then return its y.
///
/// Newton steps first, bisection when the slope gets too flat.
fn solve_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut t = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, t) - x;
        if err.abs() < 1e-7 {
            return bezier(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..64 {
        let err = bezier(x1, x2, t) - x;
        if err.abs() < 1e-7 {
            break;
        }
        if err > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        t = (lo + hi) / 2.0;
    }
    bezier(y1, y2, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::SIGNATURE,
    ];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{ease:?}");
            assert!(b < c, "{ease:?}");
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Ease::EaseOut.apply(0.3) > 0.3);
        assert!(Ease::SIGNATURE.apply(0.3) > Ease::EaseOut.apply(0.3));
        assert!(Ease::EaseIn.apply(0.3) < 0.3);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let ease = Ease::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for x in [0.1, 0.37, 0.5, 0.9] {
            assert!((ease.apply(x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn css_names() {
        assert_eq!(Ease::EaseOut.css(), "ease-out");
        assert_eq!(Ease::SIGNATURE.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
    }
}
