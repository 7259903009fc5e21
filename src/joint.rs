//! Joints: the discrete vertical samples of the water strip.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One sample point of the strip, displaced vertically from the rest height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Joint<F: Float> {
    /// Vertical displacement from the surface height. Signed.
    pub offset: F,
    /// Vertical velocity.
    pub velocity: F,
}

impl<F: Float> Joint<F> {
    /// A joint at rest: zero offset, zero velocity.
    pub fn at_rest() -> Self {
        Joint { offset: F::zero(), velocity: F::zero() }
    }

    pub fn reset(&mut self) {
        self.offset = F::zero();
        self.velocity = F::zero();
    }

    pub fn is_settled(&self, eps_offset: F, eps_velocity: F) -> bool {
        self.offset.is_near_zero(eps_offset) && self.velocity.is_near_zero(eps_velocity)
    }
}

/// Fixed-length, ordered run of joints spread evenly across `width`.
///
/// The length never changes after construction. Joint `i` sits at
/// `x = i * spacing` where `spacing = width / (len - 1)`.
#[derive(Clone, Debug)]
pub struct JointArray<F: Float> {
    joints: AllocVec<Joint<F>>,
    width: F,
    spacing: F,
}

impl<F: Float> JointArray<F> {
    /// Build `count` joints at rest across `width`.
    ///
    /// Callers validate `count >= 2` and `width > 0`; the simulator does this
    /// before constructing the array.
    pub(crate) fn new(width: F, count: usize) -> Self {
        debug_assert!(count >= 2, "joint array needs at least 2 joints");
        let mut joints = AllocVec::with_capacity(count);
        joints.resize(count, Joint::at_rest());
        let spacing = width / F::from_usize(count - 1);
        JointArray { joints, width, spacing }
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    pub fn width(&self) -> F {
        self.width
    }

    pub fn spacing(&self) -> F {
        self.spacing
    }

    /// Horizontal position of joint `index`.
    pub fn x_at(&self, index: usize) -> F {
        F::from_usize(index) * self.spacing
    }

    pub fn joint(&self, index: usize) -> &Joint<F> {
        &self.joints[index]
    }

    pub fn as_slice(&self) -> &[Joint<F>] {
        &self.joints
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Joint<F>] {
        &mut self.joints
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Joint<F>> {
        self.joints.iter()
    }

    /// Flat, still water.
    pub fn reset(&mut self) {
        for j in self.joints.iter_mut() {
            j.reset();
        }
    }

    /// Largest absolute offset across the strip.
    pub fn max_amplitude(&self) -> F {
        self.joints
            .iter()
            .fold(F::zero(), |acc, j| acc.max(j.offset.abs()))
    }

    pub fn is_settled(&self, eps_offset: F, eps_velocity: F) -> bool {
        self.joints.iter().all(|j| j.is_settled(eps_offset, eps_velocity))
    }

    /// Surface points with `surface_height` added to every offset.
    pub fn points(&self, surface_height: F) -> impl Iterator<Item = Vec2<F>> + '_ {
        self.joints
            .iter()
            .enumerate()
            .map(move |(i, j)| Vec2::new(self.x_at(i), surface_height + j.offset))
    }
}
