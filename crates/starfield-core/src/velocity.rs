use crate::constants::{DEPTH_DRIFT, TARGET_DECAY, VELOCITY_EASE};
use glam::DVec2;

/// Field velocity: the smoothed 2D drift, the input target it eases toward,
/// and a constant forward (depth) drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity {
    pub current: DVec2,
    pub target: DVec2,
    pub z: f64,
}

impl Default for Velocity {
    fn default() -> Self {
        Self {
            current: DVec2::ZERO,
            target: DVec2::ZERO,
            z: DEPTH_DRIFT,
        }
    }
}

impl Velocity {
    #[inline]
    pub fn push(&mut self, impulse: DVec2) {
        self.target += impulse;
    }

    /// One frame of integration: decay the target, then ease toward it.
    #[inline]
    pub fn integrate(&mut self) {
        self.target *= TARGET_DECAY;
        self.current += (self.target - self.current) * VELOCITY_EASE;
    }
}
