//! Tunables for the water simulation.

use crate::float::Float;
use crate::integrator::DampingMode;
use crate::splash::SplashMode;

/// Baseline spring stiffness, in 1/s². About a 0.66 s bob at rest.
pub const DEFAULT_TENSION: f32 = 90.0;
/// Baseline per-step velocity loss.
pub const DEFAULT_DAMPING: f32 = 0.05;
/// Baseline neighbor coupling. Well inside the stable range.
pub const DEFAULT_SPREAD: f32 = 0.25;

/// Configuration for the water surface.
///
/// Every field is public and may be changed between any two calls; there is
/// no cached state derived from them.
///
/// # Builder Pattern
/// ```
/// use splashy::config::SimulationConfig;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new(120.0)
///     .with_tension(60.0)
///     .with_damping(0.08)
///     .with_spread(0.3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Spring stiffness pulling each joint back to rest. Higher = faster,
    /// stiffer bobbing. Default: 90.
    pub tension: F,
    /// Velocity decay. With `DampingMode::PerStep` a fraction in [0, 1];
    /// with `DampingMode::Exponential` a rate in 1/s. Default: 0.05.
    pub damping: F,
    /// How `damping` is applied. Default: `PerStep`.
    pub damping_mode: DampingMode,
    /// Fraction of the neighbor height difference transferred per step.
    /// 0 disables travelling waves; keep it below about 0.5, close to 1 the
    /// strip diverges.
    /// Default: 0.25.
    pub spread: F,
    /// Rest height the joints oscillate around. Moving it shifts the whole
    /// strip without touching velocities.
    pub surface_height: F,
    /// How splashes combine with existing velocity. Default: `Additive`.
    pub splash_mode: SplashMode,
    /// When set, debug builds report any update that leaves a joint further
    /// than this from rest. Default: `None`.
    pub divergence_threshold: Option<F>,
}

impl<F: Float> SimulationConfig<F> {
    /// Baseline tunables around the given rest height.
    pub fn new(surface_height: F) -> Self {
        SimulationConfig {
            tension: F::from_f32(DEFAULT_TENSION),
            damping: F::from_f32(DEFAULT_DAMPING),
            damping_mode: DampingMode::PerStep,
            spread: F::from_f32(DEFAULT_SPREAD),
            surface_height,
            splash_mode: SplashMode::Additive,
            divergence_threshold: None,
        }
    }

    /// Set the spring tension.
    pub fn with_tension(mut self, tension: F) -> Self {
        self.tension = tension;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set how damping is applied.
    pub fn with_damping_mode(mut self, mode: DampingMode) -> Self {
        self.damping_mode = mode;
        self
    }

    /// Set the neighbor spread fraction.
    pub fn with_spread(mut self, spread: F) -> Self {
        self.spread = spread;
        self
    }

    /// Set the rest height.
    pub fn with_surface_height(mut self, surface_height: F) -> Self {
        self.surface_height = surface_height;
        self
    }

    /// Set how splashes combine with existing velocity.
    pub fn with_splash_mode(mut self, mode: SplashMode) -> Self {
        self.splash_mode = mode;
        self
    }

    /// Report (in debug builds) any update leaving a joint further than `threshold` from rest.
    pub fn with_divergence_threshold(mut self, threshold: F) -> Self {
        self.divergence_threshold = Some(threshold);
        self
    }

    /// Put tension, damping and spread back to the baseline constants.
    ///
    /// Surface height and the mode selections are left alone.
    pub fn restore_defaults(&mut self) {
        self.tension = F::from_f32(DEFAULT_TENSION);
        self.damping = F::from_f32(DEFAULT_DAMPING);
        self.spread = F::from_f32(DEFAULT_SPREAD);
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new(F::zero())
    }
}
