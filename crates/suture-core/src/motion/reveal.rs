//! Time-based entrance animations.
//!
//! Each reveal is a pure function of seconds elapsed since mount, so a
//! view can sample it from any frame clock and tests need no real clock.

use super::ease::Ease;

/// A single delayed, eased 0 → 1 ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Reveal {
    pub fn new(delay: f64, duration: f64) -> Self {
        Self {
            delay,
            duration,
            ease: Ease::Linear,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Eased progress in `[0, 1]` at `elapsed` seconds.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        self.ease.apply((elapsed - self.delay) / self.duration)
    }

    /// Seconds until the ramp reaches 1.
    pub fn end(&self) -> f64 {
        self.delay + self.duration.max(0.0)
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.end()
    }
}

/// Vertical slices that slide into place one after another.
///
/// Even slices enter from above (`-100%`), odd slices from below (`100%`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlicedReveal {
    pub slices: usize,
    pub stagger: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl SlicedReveal {
    /// Hero background: six slices, 0.1 s apart, 1.2 s each.
    pub const HERO: SlicedReveal = SlicedReveal {
        slices: 6,
        stagger: 0.1,
        duration: 1.2,
        ease: Ease::SIGNATURE,
    };

    pub fn slice(&self, index: usize) -> Reveal {
        Reveal::new(index as f64 * self.stagger, self.duration).with_ease(self.ease)
    }

    /// Vertical offset of slice `index` in percent of its height.
    pub fn offset_percent(&self, index: usize, elapsed: f64) -> f64 {
        let start = if index % 2 == 0 { -100.0 } else { 100.0 };
        start * (1.0 - self.slice(index).progress(elapsed))
    }

    /// Horizontal shift of slice `index` so the slices tile one image.
    pub fn image_shift_vw(&self, index: usize) -> f64 {
        -(index as f64) * (100.0 / self.slices.max(1) as f64)
    }

    /// Seconds until the last slice lands.
    pub fn total_duration(&self) -> f64 {
        self.slice(self.slices.saturating_sub(1)).end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_waits_for_delay() {
        let r = Reveal::new(0.5, 1.0);
        assert_eq!(r.progress(0.0), 0.0);
        assert_eq!(r.progress(0.5), 0.0);
        assert_eq!(r.progress(1.0), 0.5);
        assert_eq!(r.progress(3.0), 1.0);
        assert!(r.is_complete(1.5));
        assert!(!r.is_complete(1.49));
    }

    #[test]
    fn zero_duration_is_a_step() {
        let r = Reveal::new(2.0, 0.0);
        assert_eq!(r.progress(1.9), 0.0);
        assert_eq!(r.progress(2.0), 1.0);
    }

    #[test]
    fn slices_alternate_direction() {
        let hero = SlicedReveal::HERO;
        assert_eq!(hero.offset_percent(0, 0.0), -100.0);
        assert_eq!(hero.offset_percent(1, 0.0), 100.0);
        assert_eq!(hero.offset_percent(4, 10.0), 0.0);
        assert_eq!(hero.offset_percent(5, 10.0), 0.0);
    }

    #[test]
    fn slices_are_staggered() {
        let hero = SlicedReveal::HERO;
        // first slice is moving while the last is still parked
        assert!(hero.offset_percent(0, 0.3).abs() < 100.0);
        assert_eq!(hero.offset_percent(5, 0.3), 100.0);
        assert!((hero.total_duration() - 1.7).abs() < 1e-9);
    }

    #[test]
    fn slices_tile_the_image() {
        let hero = SlicedReveal::HERO;
        assert_eq!(hero.image_shift_vw(0), 0.0);
        assert!((hero.image_shift_vw(3) + 50.0).abs() < 1e-9);
    }
}
