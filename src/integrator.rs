//! Damped-spring integration of every joint toward its rest height.

use crate::float::Float;
use crate::joint::Joint;

/// How the damping coefficient removes velocity each step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DampingMode {
    /// `velocity *= 1 - damping` once per update. Damping is a per-step
    /// fraction in [0, 1], so the decay rate depends on how often the host
    /// steps.
    #[default]
    PerStep,
    /// `velocity *= exp(-damping * dt)`. Damping is a rate in 1/s and the
    /// decay is independent of the step size.
    Exponential,
}

/// Semi-implicit Euler integrator for the per-joint restoring spring.
///
/// Each joint is independent: `a = -tension * offset`, velocity gains `a * dt`,
/// loses energy to damping, then moves the offset by `velocity * dt`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringIntegrator<F: Float> {
    pub tension: F,
    pub damping: F,
    pub mode: DampingMode,
}

impl<F: Float> SpringIntegrator<F> {
    pub fn new(tension: F, damping: F, mode: DampingMode) -> Self {
        SpringIntegrator { tension, damping, mode }
    }

    /// Velocity multiplier applied after the spring acceleration.
    pub fn decay(&self, dt: F) -> F {
        match self.mode {
            DampingMode::PerStep => F::one() - self.damping,
            DampingMode::Exponential => (-self.damping * dt).exp(),
        }
    }

    pub fn integrate(&self, joints: &mut [Joint<F>], dt: F) {
        let decay = self.decay(dt);
        for j in joints.iter_mut() {
            let acceleration = -self.tension * j.offset;
            j.velocity += acceleration * dt;
            j.velocity *= decay;
            j.offset += j.velocity * dt;
        }
    }
}
