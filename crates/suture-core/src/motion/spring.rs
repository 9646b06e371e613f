//! Damped spring follow, as a pure function of elapsed time.
//!
//! Animations built on this restart from `(position, velocity)` whenever
//! their target changes, so they never need a stateful timer.

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

/// Position and velocity sampled from a spring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpringState {
    pub position: f64,
    pub velocity: f64,
}

/// Distance from the target below which a spring counts as at rest.
pub const REST_DELTA: f64 = 0.01;
/// Speed below which a spring counts as at rest.
pub const REST_SPEED: f64 = 0.01;

impl Spring {
    /// Light, quick pull used by magnetic buttons.
    pub const MAGNETIC: Spring = Spring {
        stiffness: 150.0,
        damping: 15.0,
        mass: 0.1,
    };

    /// Slightly bouncy slide used by the cart drawer.
    pub const DRAWER: Spring = Spring {
        stiffness: 200.0,
        damping: 25.0,
        mass: 1.0,
    };

    /// Damping ratio: below 1 oscillates, 1 is critical, above 1 creeps.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// State `t` seconds after leaving `from` with `velocity` towards `to`.
    pub fn sample(&self, from: f64, to: f64, velocity: f64, t: f64) -> SpringState {
        let t = t.max(0.0);
        let x0 = from - to;
        let v0 = velocity;
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        let (x, v) = if (zeta - 1.0).abs() < 1e-6 {
            let c = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let x = (x0 + c * t) * decay;
            (x, decay * (c - omega * (x0 + c * t)))
        } else if zeta < 1.0 {
            let alpha = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + alpha * x0) / omega_d;
            let decay = (-alpha * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay * ((b * omega_d - alpha * a) * cos - (alpha * b + a * omega_d) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        SpringState {
            position: to + x,
            velocity: v,
        }
    }

    /// Whether `state` is close enough to `to` to stop animating.
    pub fn is_settled(state: SpringState, to: f64) -> bool {
        (state.position - to).abs() < REST_DELTA && state.velocity.abs() < REST_SPEED
    }
}
