//! Spring-coupled water surfaces for 2D games.
//!
//! `splashy` simulates a horizontal strip of water as a row of joints, each
//! bobbing on a damped spring around a rest height and tugging on its
//! neighbors, so a splash ripples outward and dies away. The engine knows
//! nothing about rendering: each frame it hands out a snapshot of surface
//! points for the host to fill down to the bottom of the strip.
//!
//! # Features
//!
//! - **Damped springs**: per-step or frame-rate independent exponential damping
//! - **Travelling waves**: two-pass, order-independent neighbor spread
//! - **Splashes**: point or ranged velocity impulses, clamped to the strip
//! - **Fixed timestep**: `FixedTimestep` sub-steps a variable frame clock
//! - **Observable**: Monitor updates via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use splashy::Simulator;
//!
//! let mut water: Simulator<f32> = Simulator::new(400.0, 41, 120.0, ()).unwrap();
//! water.splash_with_width(200.0, -300.0, 20.0);
//! for _ in 0..4 {
//!     water.update(1.0 / 60.0);
//! }
//! let surface = water.snapshot();
//! assert_eq!(surface.len(), 41);
//! assert!(surface[20].y < 120.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod joint;
pub mod integrator;
pub mod spread;
pub mod splash;
pub mod simulator;
pub mod timestep;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use joint::{Joint, JointArray};
pub use integrator::{DampingMode, SpringIntegrator};
pub use spread::SpreadPropagator;
pub use splash::{SplashInjector, SplashMode};
pub use simulator::Simulator;
pub use timestep::FixedTimestep;
pub use config::{SimulationConfig, DEFAULT_DAMPING, DEFAULT_SPREAD, DEFAULT_TENSION};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::WaterError;
