//! Frame-clock hooks.
//!
//! Both hooks sample pure motion functions from `suture_core::motion` on a
//! ~60 fps tokio timer and stop ticking once the animation is done.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use suture_core::motion::Spring;

/// Delay between animation frames.
pub const FRAME: Duration = Duration::from_millis(16);

/// Seconds since the calling component mounted, capped at `until`.
///
/// Ticks every frame until `until` is reached, then stays put.
pub fn use_elapsed(until: f64) -> Signal<f64> {
    let mut elapsed = use_signal(|| 0.0);

    use_hook(move || {
        spawn(async move {
            let start = Instant::now();
            loop {
                tokio::time::sleep(FRAME).await;
                let secs = start.elapsed().as_secs_f64();
                elapsed.set(secs.min(until));
                if secs >= until {
                    break;
                }
            }
        })
    });

    elapsed
}

/// A value that follows its target on a spring.
#[derive(Clone, Copy, PartialEq)]
pub struct SpringValue {
    spring: Spring,
    position: Signal<f64>,
    velocity: Signal<f64>,
    target: Signal<f64>,
    generation: Signal<u64>,
}

impl SpringValue {
    /// Current position. Subscribes the caller to changes.
    pub fn get(&self) -> f64 {
        (self.position)()
    }

    pub fn target(&self) -> f64 {
        *self.target.peek()
    }

    /// Retarget the spring, starting from the current position and velocity.
    pub fn set(&mut self, target: f64) {
        if *self.target.peek() == target {
            return;
        }
        self.target.set(target);

        let spring = self.spring;
        let from = *self.position.peek();
        let velocity_at_start = *self.velocity.peek();
        let generation_now = *self.generation.peek() + 1;
        self.generation.set(generation_now);

        let mut position = self.position;
        let mut velocity = self.velocity;
        let generation = self.generation;

        spawn(async move {
            let start = Instant::now();
            loop {
                tokio::time::sleep(FRAME).await;
                // a newer retarget owns the value now
                if *generation.peek() != generation_now {
                    break;
                }
                let state =
                    spring.sample(from, target, velocity_at_start, start.elapsed().as_secs_f64());
                if Spring::is_settled(state, target) {
                    position.set(target);
                    velocity.set(0.0);
                    break;
                }
                position.set(state.position);
                velocity.set(state.velocity);
            }
        });
    }

    /// Jump to `value` without animating.
    pub fn snap(&mut self, value: f64) {
        let next = *self.generation.peek() + 1;
        self.generation.set(next);
        self.target.set(value);
        self.position.set(value);
        self.velocity.set(0.0);
    }
}

/// Create a spring-driven value resting at `initial`.
pub fn use_spring(spring: Spring, initial: f64) -> SpringValue {
    let position = use_signal(|| initial);
    let velocity = use_signal(|| 0.0);
    let target = use_signal(|| initial);
    let generation = use_signal(|| 0u64);

    SpringValue {
        spring,
        position,
        velocity,
        target,
        generation,
    }
}
