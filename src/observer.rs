//! Step observer trait for monitoring water simulation progress.

/// Trait for observing water simulation steps.
///
/// Implement this trait to monitor the engine (e.g., for debugging,
/// spawning spray particles, or performance profiling). All methods have
/// default no-op implementations.
pub trait StepObserver {
    /// Called after every joint has been integrated toward rest.
    fn on_integrate(&mut self) {}

    /// Called after the neighbor spread deltas have been applied.
    fn on_spread(&mut self) {}

    /// Called when a splash hits joints `first..=last`.
    fn on_splash(&mut self, _first: usize, _last: usize) {}

    /// Called in debug builds when the largest joint offset exceeds the
    /// configured divergence threshold.
    fn on_divergence(&mut self, _max_amplitude: f64) {}

    /// Called when an update is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
