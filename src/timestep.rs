//! Fixed-timestep driver: turns variable frame times into whole updates.

use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::simulator::Simulator;

/// Accumulates frame time and runs the simulator in fixed `step`s.
///
/// Rendering reads the snapshot once per frame no matter how many updates ran.
/// At most `max_steps` updates run per frame; any backlog beyond that is
/// dropped so a long stall cannot snowball.
///
/// ```
/// use splashy::{FixedTimestep, Simulator};
///
/// let mut water: Simulator<f32> = Simulator::new(320.0, 40, 100.0, ()).unwrap();
/// let mut clock = FixedTimestep::new(1.0 / 120.0);
/// water.splash(160.0, -80.0);
/// let ran = clock.advance(&mut water, 1.0 / 60.0);
/// assert_eq!(ran, 2);
/// let points = water.snapshot();
/// assert_eq!(points.len(), 40);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedTimestep<F: Float> {
    step: F,
    accumulator: F,
    max_steps: usize,
}

impl<F: Float> FixedTimestep<F> {
    /// A driver stepping `step` seconds at a time, up to 8 steps per frame.
    pub fn new(step: F) -> Self {
        FixedTimestep { step, accumulator: F::zero(), max_steps: 8 }
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn step(&self) -> F {
        self.step
    }

    /// Unconsumed time carried into the next frame.
    pub fn accumulated(&self) -> F {
        self.accumulator
    }

    /// Fraction of a step left over, for blending between snapshots.
    pub fn alpha(&self) -> F {
        if self.step > F::zero() {
            self.accumulator / self.step
        } else {
            F::zero()
        }
    }

    /// Add `frame_dt` and run as many whole steps as fit. Returns the count.
    pub fn advance<A>(&mut self, sim: &mut Simulator<F, A>, frame_dt: F) -> usize {
        self.advance_observed(sim, frame_dt, &mut NoOpStepObserver)
    }

    pub fn advance_observed<A, O: StepObserver>(
        &mut self,
        sim: &mut Simulator<F, A>,
        frame_dt: F,
        observer: &mut O,
    ) -> usize {
        if !(self.step > F::zero()) || !(frame_dt > F::zero()) {
            return 0;
        }
        self.accumulator += frame_dt;

        let mut ran = 0;
        while self.accumulator >= self.step && ran < self.max_steps {
            sim.step(self.step, observer);
            self.accumulator = self.accumulator - self.step;
            ran += 1;
        }

        if ran == self.max_steps && self.accumulator >= self.step {
            log::debug!(
                "fixed timestep dropping {:?}s of backlog after {} steps",
                self.accumulator,
                ran
            );
            self.accumulator = F::zero();
        }
        ran
    }

    pub fn reset(&mut self) {
        self.accumulator = F::zero();
    }
}
