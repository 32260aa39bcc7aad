//! Re-entry of stars that drifted out of the field.

use crate::constants::{FAR_DEPTH, IDLE_VELOCITY, OVERFLOW_THRESHOLD};
use crate::star::{spawn_depth, Dimensions, Star};
use glam::DVec2;
use rand::Rng;

/// Where a recycled star re-enters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecycleDirection {
    /// Idle field: reborn far away, anywhere on the canvas.
    Depth,
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Pick the re-entry side for the current field velocity.
///
/// The axis is a weighted draw on the relative speed of each axis, so the
/// slower axis still wins now and then. The side is the one the field is
/// moving away from, so new stars stream in against the motion.
pub fn choose_direction<R: Rng + ?Sized>(velocity: DVec2, rng: &mut R) -> RecycleDirection {
    let vx = velocity.x.abs();
    let vy = velocity.y.abs();
    if vx <= IDLE_VELOCITY && vy <= IDLE_VELOCITY {
        return RecycleDirection::Depth;
    }

    let roll = rng.gen::<f64>();
    let axis = if vx > vy {
        if roll < vx / (vx + vy) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    } else if roll < vy / (vx + vy) {
        Axis::Vertical
    } else {
        Axis::Horizontal
    };

    match axis {
        Axis::Horizontal if velocity.x > 0.0 => RecycleDirection::Left,
        Axis::Horizontal => RecycleDirection::Right,
        Axis::Vertical if velocity.y > 0.0 => RecycleDirection::Top,
        Axis::Vertical => RecycleDirection::Bottom,
    }
}

/// Reset an out-of-bounds star so it re-enters the field.
pub fn recycle<R: Rng + ?Sized>(
    star: &mut Star,
    velocity: DVec2,
    dims: &Dimensions,
    rng: &mut R,
) -> RecycleDirection {
    let direction = choose_direction(velocity, rng);
    star.z = spawn_depth(rng);

    match direction {
        RecycleDirection::Depth => {
            star.z = FAR_DEPTH;
            star.x = rng.gen::<f64>() * dims.width;
            star.y = rng.gen::<f64>() * dims.height;
        }
        RecycleDirection::Left => {
            star.x = -OVERFLOW_THRESHOLD;
            star.y = dims.height * rng.gen::<f64>();
        }
        RecycleDirection::Right => {
            star.x = dims.width + OVERFLOW_THRESHOLD;
            star.y = dims.height * rng.gen::<f64>();
        }
        RecycleDirection::Top => {
            star.x = dims.width * rng.gen::<f64>();
            star.y = -OVERFLOW_THRESHOLD;
        }
        RecycleDirection::Bottom => {
            star.x = dims.width * rng.gen::<f64>();
            star.y = dims.height + OVERFLOW_THRESHOLD;
        }
    }
    direction
}
