//! Piecewise-linear mapping from progress to a visual property.

use crate::error::{SutureError, SutureResult};

use super::ease::Ease;
use super::value::{Lerp, StyleValue};

/// Maps a progress value through a breakpoint table.
///
/// Progress below the first breakpoint yields the first output, above the
/// last breakpoint the last output. Between two breakpoints the outputs are
/// blended, optionally through an [`Ease`] applied within the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform<T> {
    inputs: Vec<f64>,
    outputs: Vec<T>,
    ease: Ease,
}

impl<T: Lerp + Clone> Transform<T> {
    /// Build a transform, rejecting malformed tables.
    ///
    /// Fails when the tables are empty or of different lengths, when a
    /// breakpoint is not finite or smaller than its predecessor, or when two
    /// neighbouring outputs cannot be blended.
    pub fn try_new(inputs: impl Into<Vec<f64>>, outputs: impl Into<Vec<T>>) -> SutureResult<Self> {
        let inputs = inputs.into();
        let outputs = outputs.into();

        if inputs.is_empty() {
            return Err(SutureError::EmptyBreakpoints);
        }
        if inputs.len() != outputs.len() {
            return Err(SutureError::LengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        for (index, value) in inputs.iter().enumerate() {
            if !value.is_finite() {
                return Err(SutureError::NonFiniteBreakpoint { index });
            }
        }
        for (index, pair) in inputs.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(SutureError::NonMonotonicBreakpoints {
                    index: index + 1,
                    previous: pair[0],
                    next: pair[1],
                });
            }
        }
        for pair in outputs.windows(2) {
            T::check_compatible(&pair[0], &pair[1])?;
        }

        Ok(Self {
            inputs,
            outputs,
            ease: Ease::Linear,
        })
    }

    /// Build a transform from literal tables.
    ///
    /// # Panics
    ///
    /// Panics on any table [`Transform::try_new`] would reject. Use it for
    /// tables written into view code, where a bad table is a programming
    /// mistake that should surface on first render.
    pub fn new(inputs: impl Into<Vec<f64>>, outputs: impl Into<Vec<T>>) -> Self {
        match Self::try_new(inputs, outputs) {
            Ok(transform) => transform,
            Err(err) => panic!("invalid transform table: {err}"),
        }
    }

    /// Apply `ease` inside every segment.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    /// Map `progress` to an output value. Never extrapolates.
    pub fn map(&self, progress: f64) -> T {
        let last = self.inputs.len() - 1;
        if progress.is_nan() || progress <= self.inputs[0] {
            return self.outputs[0].clone();
        }
        if progress >= self.inputs[last] {
            return self.outputs[last].clone();
        }

        // inputs[0] < progress < inputs[last], so a segment exists
        let segment = self
            .inputs
            .windows(2)
            .position(|pair| pair[0] <= progress && progress < pair[1])
            .unwrap_or(last - 1);
        let (lo, hi) = (self.inputs[segment], self.inputs[segment + 1]);
        let t = self.ease.apply((progress - lo) / (hi - lo));
        T::lerp(&self.outputs[segment], &self.outputs[segment + 1], t)
    }
}

impl Transform<StyleValue> {
    /// Build a transform over CSS strings such as `"0%"` and `"-75%"`.
    pub fn try_css(inputs: impl Into<Vec<f64>>, outputs: &[&str]) -> SutureResult<Self> {
        let outputs = outputs
            .iter()
            .map(|s| s.parse::<StyleValue>())
            .collect::<SutureResult<Vec<_>>>()?;
        Self::try_new(inputs, outputs)
    }

    /// Literal-table form of [`Transform::try_css`].
    ///
    /// # Panics
    ///
    /// Panics when a string has no number or the tables are malformed.
    pub fn css(inputs: impl Into<Vec<f64>>, outputs: &[&str]) -> Self {
        match Self::try_css(inputs, outputs) {
            Ok(transform) => transform,
            Err(err) => panic!("invalid transform table: {err}"),
        }
    }
}

/// One-shot form of [`Transform::try_new`] followed by [`Transform::map`].
pub fn map<T: Lerp + Clone>(progress: f64, inputs: &[f64], outputs: &[T]) -> SutureResult<T> {
    Ok(Transform::try_new(inputs.to_vec(), outputs.to_vec())?.map(progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_between_breakpoints() {
        let t = Transform::new(vec![0.0, 500.0], vec![0.0, 100.0]);
        assert_eq!(t.map(250.0), 50.0);
        assert_eq!(t.map(0.0), 0.0);
        assert_eq!(t.map(500.0), 100.0);
    }

    #[test]
    fn test_clamps_outside_domain() {
        let t = Transform::new(vec![0.0, 0.2], vec![0.1, 0.0]);
        assert_eq!(t.map(-3.0), 0.1);
        assert_eq!(t.map(0.9), 0.0);
        assert_eq!(t.map(f64::NAN), 0.1);
    }

    #[test]
    fn test_multi_segment_fade() {
        let t = Transform::new(vec![0.0, 0.2, 0.8, 1.0], vec![0.0, 1.0, 1.0, 0.0]);
        assert!((t.map(0.1) - 0.5).abs() < 1e-9);
        assert_eq!(t.map(0.5), 1.0);
        assert!((t.map(0.9) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_breakpoint_jumps() {
        let t = Transform::new(vec![0.0, 0.5, 0.5, 1.0], vec![0.0, 1.0, 10.0, 20.0]);
        assert_eq!(t.map(0.5), 10.0);
        assert!((t.map(0.25) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_breakpoint_is_constant() {
        let t = Transform::new(vec![0.3], vec![7.0]);
        assert_eq!(t.map(0.0), 7.0);
        assert_eq!(t.map(1.0), 7.0);
    }

    #[test]
    fn test_css_percent_track() {
        let t = Transform::css(vec![0.0, 1.0], &["0%", "-75%"]);
        assert_eq!(t.map(0.5).to_string(), "-37.5%");
        assert_eq!(t.map(2.0).to_string(), "-75%");
    }

    #[test]
    fn test_css_filter() {
        let t = Transform::css(
            vec![0.0, 500.0],
            &["brightness(1) blur(0px)", "brightness(0.6) blur(10px)"],
        );
        assert_eq!(t.map(250.0).to_string(), "brightness(0.8) blur(5px)");
    }

    #[test]
    fn test_css_hex_color_endpoints() {
        let t = Transform::css(vec![0.0, 1.0], &["#000000", "#001100"]);
        assert_eq!(t.map(0.0), "#000000".parse::<StyleValue>().unwrap());
        assert_eq!(t.map(0.0).to_string(), "rgba(0, 0, 0, 1)");
        assert_eq!(t.map(1.0).to_string(), "rgba(0, 17, 0, 1)");
    }

    #[test]
    fn test_eased_segment() {
        let t = Transform::new(vec![0.0, 1.0], vec![0.0, 1.0]).with_ease(Ease::EaseOut);
        assert!(t.map(0.5) > 0.5);
        assert_eq!(t.map(1.0), 1.0);
    }

    #[test]
    fn test_rejects_non_monotonic() {
        let err = Transform::try_new(vec![0.0, 0.6, 0.4], vec![0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            SutureError::NonMonotonicBreakpoints { index: 2, .. }
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert!(matches!(
            Transform::try_new(vec![0.0, 1.0], vec![0.0]),
            Err(SutureError::LengthMismatch { inputs: 2, outputs: 1 })
        ));
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        assert!(matches!(
            Transform::<f64>::try_new(Vec::new(), Vec::new()),
            Err(SutureError::EmptyBreakpoints)
        ));
        assert!(matches!(
            Transform::try_new(vec![0.0, f64::INFINITY], vec![0.0, 1.0]),
            Err(SutureError::NonFiniteBreakpoint { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_mixed_units() {
        assert!(matches!(
            Transform::try_css(vec![0.0, 1.0], &["0%", "10px"]),
            Err(SutureError::IncompatibleValues { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "invalid transform table")]
    fn test_new_panics_on_bad_table() {
        let _ = Transform::new(vec![1.0, 0.0], vec![0.0, 1.0]);
    }

    #[test]
    fn test_one_shot_map() {
        assert_eq!(map(0.5, &[0.0, 1.0], &[10.0, 20.0]).unwrap(), 15.0);
        assert!(map(0.5, &[1.0, 0.0], &[10.0, 20.0]).is_err());
    }
}
