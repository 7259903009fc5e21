//! The water surface: owns the joints and sequences each update.

use crate::config::SimulationConfig;
use crate::error::WaterError;
use crate::float::Float;
use crate::integrator::SpringIntegrator;
use crate::joint::{Joint, JointArray};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::splash::SplashInjector;
use crate::spread::SpreadPropagator;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use core::ops::RangeInclusive;

/// A one-dimensional water strip of spring-coupled joints.
///
/// `A` is the fill appearance (a colour, material handle, ...). The engine
/// never looks at it; it is carried so a renderer can read it next to the
/// snapshot.
///
/// There is no internal synchronization. Hosts that splash from another
/// thread wrap the simulator in their own lock.
#[derive(Clone, Debug)]
pub struct Simulator<F: Float, A = ()> {
    /// Live tunables. Changes take effect on the next call.
    pub config: SimulationConfig<F>,
    joints: JointArray<F>,
    spread: SpreadPropagator<F>,
    fill: A,
}

impl<F: Float, A> Simulator<F, A> {
    /// Flat, still water `width` wide with `num_joints` samples.
    pub fn new(width: F, num_joints: usize, surface_height: F, fill: A) -> Result<Self, WaterError> {
        Self::with_config(width, num_joints, SimulationConfig::new(surface_height), fill)
    }

    /// Like [`Simulator::new`] with caller-chosen tunables.
    pub fn with_config(
        width: F,
        num_joints: usize,
        config: SimulationConfig<F>,
        fill: A,
    ) -> Result<Self, WaterError> {
        if num_joints < 2 {
            return Err(WaterError::TooFewJoints { count: num_joints });
        }
        if !(width > F::zero()) || !width.is_finite() {
            return Err(WaterError::InvalidWidth);
        }

        log::debug!(
            "water surface: {} joints across {:?} at height {:?}",
            num_joints,
            width,
            config.surface_height
        );

        Ok(Simulator {
            config,
            joints: JointArray::new(width, num_joints),
            spread: SpreadPropagator::new(num_joints),
            fill,
        })
    }

    /// Baseline tension, damping and spread, and flat still water.
    ///
    /// Recovers from a runaway configuration without rebuilding.
    pub fn reset_to_defaults(&mut self) {
        self.config.restore_defaults();
        self.joints.reset();
        log::debug!("water surface reset to defaults");
    }

    /// Flat still water, keeping the current tunables.
    pub fn reset(&mut self) {
        self.joints.reset();
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Zero, negative and NaN steps do nothing.
    pub fn update(&mut self, dt: F) {
        self.step(dt, &mut NoOpStepObserver);
    }

    /// [`Simulator::update`] with an observer.
    pub fn step<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        if !(dt > F::zero()) {
            return;
        }

        let integrator =
            SpringIntegrator::new(self.config.tension, self.config.damping, self.config.damping_mode);
        integrator.integrate(self.joints.as_mut_slice(), dt);
        observer.on_integrate();

        self.spread
            .propagate(self.joints.as_mut_slice(), self.config.spread, dt);
        observer.on_spread();

        #[cfg(debug_assertions)]
        self.check_divergence(observer);

        observer.on_step_complete();
    }

    #[cfg(debug_assertions)]
    fn check_divergence<O: StepObserver>(&self, observer: &mut O) {
        let Some(limit) = self.config.divergence_threshold else {
            return;
        };
        let max = self.joints.max_amplitude();
        if !(max <= limit) {
            log::warn!(
                "water surface diverging: max offset {:?} exceeds {:?} (tension {:?}, damping {:?}, spread {:?})",
                max,
                limit,
                self.config.tension,
                self.config.damping,
                self.config.spread
            );
            observer.on_divergence(max.to_f64());
        }
    }

    /// Splash the single joint nearest `x`.
    pub fn splash(&mut self, x: F, force: F) -> RangeInclusive<usize> {
        self.splash_with_width(x, force, F::zero())
    }

    /// Splash every joint within `width / 2` of `x`.
    ///
    /// Coordinates outside the strip clamp to the nearest edge. Returns the
    /// indices that were hit.
    pub fn splash_with_width(&mut self, x: F, force: F, width: F) -> RangeInclusive<usize> {
        self.splash_observed(x, force, width, &mut NoOpStepObserver)
    }

    pub fn splash_observed<O: StepObserver>(
        &mut self,
        x: F,
        force: F,
        width: F,
        observer: &mut O,
    ) -> RangeInclusive<usize> {
        let injector = SplashInjector::new(self.config.splash_mode);
        let range = injector.inject(&mut self.joints, x, force, width);
        observer.on_splash(*range.start(), *range.end());
        range
    }

    /// Current surface as `(x, surface_height + offset)` pairs, left to right.
    pub fn snapshot(&self) -> AllocVec<Vec2<F>> {
        self.points().collect()
    }

    /// [`Simulator::snapshot`] into a reused buffer.
    pub fn snapshot_into(&self, out: &mut AllocVec<Vec2<F>>) {
        out.clear();
        out.extend(self.points());
    }

    /// Allocation-free view of the current surface.
    pub fn points(&self) -> impl Iterator<Item = Vec2<F>> + '_ {
        self.joints.points(self.config.surface_height)
    }

    pub fn surface_height(&self) -> F {
        self.config.surface_height
    }

    pub fn set_surface_height(&mut self, surface_height: F) {
        self.config.surface_height = surface_height;
    }

    pub fn fill(&self) -> &A {
        &self.fill
    }

    pub fn set_fill(&mut self, fill: A) {
        self.fill = fill;
    }

    pub fn joints(&self) -> &[Joint<F>] {
        self.joints.as_slice()
    }

    pub fn joint(&self, index: usize) -> &Joint<F> {
        self.joints.joint(index)
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn width(&self) -> F {
        self.joints.width()
    }

    pub fn spacing(&self) -> F {
        self.joints.spacing()
    }

    /// Largest distance of any joint from rest.
    pub fn max_amplitude(&self) -> F {
        self.joints.max_amplitude()
    }

    pub fn is_settled(&self, eps_offset: F, eps_velocity: F) -> bool {
        self.joints.is_settled(eps_offset, eps_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_few_joints() {
        let err = Simulator::<f32>::new(10.0, 1, 0.0, ()).unwrap_err();
        assert_eq!(err, WaterError::TooFewJoints { count: 1 });
        assert!(Simulator::<f32>::new(10.0, 0, 0.0, ()).is_err());
    }

    #[test]
    fn rejects_bad_width() {
        for width in [0.0f64, -3.0, f64::NAN, f64::INFINITY] {
            let err = Simulator::new(width, 8, 0.0, ()).unwrap_err();
            assert_eq!(err, WaterError::InvalidWidth);
        }
    }

    #[test]
    fn degenerate_dt_is_a_no_op() {
        let mut sim: Simulator<f64> = Simulator::new(10.0, 5, 0.0, ()).unwrap();
        sim.splash(5.0, 3.0);
        let before = sim.joints().to_vec();
        sim.update(0.0);
        sim.update(-1.0 / 60.0);
        sim.update(f64::NAN);
        assert_eq!(sim.joints(), &before[..]);
    }

    #[test]
    fn surface_height_shifts_without_touching_velocity() {
        let mut sim: Simulator<f32> = Simulator::new(10.0, 3, 1.0, ()).unwrap();
        sim.splash(0.0, 2.0);
        sim.set_surface_height(4.0);
        assert!(sim.points().all(|p| p.y == 4.0));
        assert_eq!(sim.joint(0).velocity, 2.0);
    }

    #[test]
    fn fill_is_carried_untouched() {
        let mut sim = Simulator::new(1.0f32, 2, 0.0, [0u8, 64, 255, 200]).unwrap();
        assert_eq!(sim.fill(), &[0, 64, 255, 200]);
        sim.set_fill([1, 2, 3, 4]);
        assert_eq!(*sim.fill(), [1, 2, 3, 4]);
    }

    #[derive(Default)]
    struct Counter {
        integrated: usize,
        spread: usize,
        completed: usize,
        splashes: usize,
    }

    impl StepObserver for Counter {
        fn on_integrate(&mut self) { self.integrated += 1; }
        fn on_spread(&mut self) { self.spread += 1; }
        fn on_splash(&mut self, _first: usize, _last: usize) { self.splashes += 1; }
        fn on_step_complete(&mut self) { self.completed += 1; }
    }

    #[test]
    fn observer_sees_each_phase_once_per_update() {
        let mut sim: Simulator<f32> = Simulator::new(10.0, 4, 0.0, ()).unwrap();
        let mut counter = Counter::default();
        sim.splash_observed(5.0, 1.0, 0.0, &mut counter);
        for _ in 0..3 {
            sim.step(1.0 / 60.0, &mut counter);
        }
        sim.step(0.0, &mut counter);
        assert_eq!(counter.splashes, 1);
        assert_eq!(counter.integrated, 3);
        assert_eq!(counter.spread, 3);
        assert_eq!(counter.completed, 3);
    }
}
