//! Splash impulses: direct velocity kicks on a range of joints.

use crate::float::Float;
use crate::joint::JointArray;
use core::ops::RangeInclusive;

/// How a splash combines with the velocity already at a joint.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum SplashMode {
    /// `velocity += force`. Overlapping splashes accumulate.
    #[default]
    Additive,
    /// `velocity = force`. The latest splash wins.
    Replace,
}

/// Maps a splash request onto joint indices and applies the impulse.
///
/// Requests outside the strip are clamped to the nearest edge joint, so every
/// splash affects at least one joint and never indexes out of bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SplashInjector {
    pub mode: SplashMode,
}

impl SplashInjector {
    pub fn new(mode: SplashMode) -> Self {
        SplashInjector { mode }
    }

    /// Joint indices hit by a splash at `x` with total `width`.
    ///
    /// Covers every joint whose x lies in `[x - width/2, x + width/2]`; the
    /// window is clipped to the strip, never shifted onto it. A non-positive
    /// width, or a window that contains no joint (between two joints, or
    /// wholly off the strip), hits only the joint nearest to `x`.
    pub fn affected_range<F: Float>(
        joints: &JointArray<F>,
        x: F,
        width: F,
    ) -> RangeInclusive<usize> {
        let last = joints.len() - 1;
        let spacing = joints.spacing();

        let nearest = clamp_index((x.clamp(F::zero(), joints.width()) / spacing).round(), last);
        if !(width > F::zero()) {
            return nearest..=nearest;
        }

        let half = width * F::half();
        let first = ((x - half) / spacing).ceil().to_isize().max(0);
        let end = ((x + half) / spacing).floor().to_isize().min(last as isize);
        if first > end {
            nearest..=nearest
        } else {
            first as usize..=end as usize
        }
    }

    /// Apply `force` to every joint in the affected range and return it.
    pub fn inject<F: Float>(
        &self,
        joints: &mut JointArray<F>,
        x: F,
        force: F,
        width: F,
    ) -> RangeInclusive<usize> {
        let range = Self::affected_range(joints, x, width);
        let slice = joints.as_mut_slice();
        for j in slice[range.clone()].iter_mut() {
            match self.mode {
                SplashMode::Additive => j.velocity += force,
                SplashMode::Replace => j.velocity = force,
            }
        }
        range
    }
}

fn clamp_index<F: Float>(position: F, last: usize) -> usize {
    let i = position.to_isize();
    if i <= 0 {
        0
    } else if i as usize >= last {
        last
    } else {
        i as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> JointArray<f32> {
        // 11 joints, one every 10 units.
        JointArray::new(100.0, 11)
    }

    #[test]
    fn zero_width_hits_nearest_joint() {
        let joints = strip();
        assert_eq!(SplashInjector::affected_range(&joints, 34.0, 0.0), 3..=3);
        assert_eq!(SplashInjector::affected_range(&joints, 35.0, 0.0), 4..=4);
    }

    #[test]
    fn width_covers_joints_inside_window() {
        let joints = strip();
        assert_eq!(SplashInjector::affected_range(&joints, 50.0, 25.0), 4..=6);
        assert_eq!(SplashInjector::affected_range(&joints, 52.0, 8.0), 5..=5);
    }

    #[test]
    fn narrow_window_between_joints_falls_back_to_nearest() {
        let joints = strip();
        assert_eq!(SplashInjector::affected_range(&joints, 43.0, 2.0), 4..=4);
    }

    #[test]
    fn out_of_range_clamps_to_edges() {
        let joints = strip();
        assert_eq!(SplashInjector::affected_range(&joints, 1000.0, 0.0), 10..=10);
        assert_eq!(SplashInjector::affected_range(&joints, -50.0, 0.0), 0..=0);
        assert_eq!(SplashInjector::affected_range(&joints, 100.0, 45.0), 8..=10);
        assert_eq!(SplashInjector::affected_range(&joints, 0.0, 1.0e6), 0..=10);
    }

    #[test]
    fn off_strip_window_is_clipped_not_shifted() {
        let joints = strip();
        assert_eq!(SplashInjector::affected_range(&joints, -5.0, 20.0), 0..=0);
        assert_eq!(SplashInjector::affected_range(&joints, 1000.0, 45.0), 10..=10);
        assert_eq!(SplashInjector::affected_range(&joints, -30.0, 10.0), 0..=0);
        assert_eq!(SplashInjector::affected_range(&joints, 105.0, 30.0), 9..=10);
    }

    #[test]
    fn replace_overwrites_existing_velocity() {
        let mut joints = strip();
        let add = SplashInjector::new(SplashMode::Additive);
        let replace = SplashInjector::new(SplashMode::Replace);
        add.inject(&mut joints, 50.0, 3.0, 0.0);
        add.inject(&mut joints, 50.0, 3.0, 0.0);
        assert_eq!(joints.joint(5).velocity, 6.0);
        replace.inject(&mut joints, 50.0, -1.0, 0.0);
        assert_eq!(joints.joint(5).velocity, -1.0);
    }
}
