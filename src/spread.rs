//! Neighbor coupling: lets a disturbance travel along the strip.

use crate::float::Float;
use crate::joint::Joint;
use alloc::vec::Vec as AllocVec;

/// Two-pass neighbor spread with buffered deltas.
///
/// The left pass pulls each joint toward its left neighbor, the right pass
/// toward its right neighbor. Deltas from both passes are collected first and
/// applied together, so the result does not depend on sweep order. End joints
/// only see their single interior neighbor and are otherwise free.
///
/// `spread` is the fraction of the height difference a joint closes per step;
/// the delta is applied as a velocity, divided by `dt`, so the integrator
/// moves the joint by that fraction on the next step. Keep it below about
/// 0.5; close to 1 the strip diverges. This is not clamped here.
///
/// Because the coupling is per step, waves cover the same number of joints
/// per update whatever `dt` is: sub-stepping a frame into more, shorter
/// updates makes waves travel proportionally faster in real time.
#[derive(Clone, Debug)]
pub struct SpreadPropagator<F: Float> {
    left_deltas: AllocVec<F>,
    right_deltas: AllocVec<F>,
}

impl<F: Float> SpreadPropagator<F> {
    /// Allocate delta buffers for `count` joints.
    pub fn new(count: usize) -> Self {
        let mut left_deltas = AllocVec::with_capacity(count);
        left_deltas.resize(count, F::zero());
        let mut right_deltas = AllocVec::with_capacity(count);
        right_deltas.resize(count, F::zero());
        SpreadPropagator { left_deltas, right_deltas }
    }

    pub fn len(&self) -> usize {
        self.left_deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left_deltas.is_empty()
    }

    /// Run both passes and apply the buffered velocity deltas.
    ///
    /// `joints` must have the length this propagator was built for. `dt` must
    /// be positive; the simulator filters degenerate steps before calling.
    pub fn propagate(&mut self, joints: &mut [Joint<F>], spread: F, dt: F) {
        let n = joints.len();
        debug_assert_eq!(n, self.left_deltas.len(), "propagator sized for a different strip");
        if n < 2 {
            return;
        }

        self.left_deltas[0] = F::zero();
        for i in 1..n {
            self.left_deltas[i] = spread * (joints[i - 1].offset - joints[i].offset);
        }

        self.right_deltas[n - 1] = F::zero();
        for i in (0..n - 1).rev() {
            self.right_deltas[i] = spread * (joints[i + 1].offset - joints[i].offset);
        }

        let inv_dt = F::one() / dt;
        for (j, (l, r)) in joints
            .iter_mut()
            .zip(self.left_deltas.iter().zip(self.right_deltas.iter()))
        {
            j.velocity += (*l + *r) * inv_dt;
        }
    }
}
