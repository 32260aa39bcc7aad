//! Stars, canvas dimensions and population of the field.

use crate::constants::{ALPHA_MIN, STAR_MIN_SCALE};
use rand::Rng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Depth. Larger is nearer: faster and drawn bigger.
    pub z: f64,
    pub alpha: f64,
}

impl Star {
    /// A star at the origin with freshly drawn depth and alpha.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let z = spawn_depth(rng);
        let alpha = ALPHA_MIN + (1.0 - ALPHA_MIN) * rng.gen::<f64>();
        Self {
            x: 0.0,
            y: 0.0,
            z,
            alpha,
        }
    }
}

/// Depth in `[STAR_MIN_SCALE, 1.0)`.
#[inline]
pub fn spawn_depth<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    STAR_MIN_SCALE + rng.gen::<f64>() * (1.0 - STAR_MIN_SCALE)
}

/// Host viewport in CSS pixels plus the device pixel ratio it reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }

    /// Number of stars for this viewport: `floor((width + height) / divisor)`.
    pub fn star_count(&self, divisor: f64) -> usize {
        let count = ((self.width + self.height) / divisor).floor();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }
}

/// Canvas backing-store size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            scale: 1.0,
        }
    }
}

impl Dimensions {
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let dpr = viewport.device_pixel_ratio;
        let scale = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self {
            width: viewport.width * scale,
            height: viewport.height * scale,
            scale,
        }
    }

    /// Whether a point lies within the field grown by `margin` on every side.
    #[inline]
    pub fn contains(&self, x: f64, y: f64, margin: f64) -> bool {
        x >= -margin && x <= self.width + margin && y >= -margin && y <= self.height + margin
    }
}

/// Discard `stars` and refill it with `count` fresh stars scattered over `dims`.
///
/// Depth and alpha are drawn for every star first, positions in a second pass.
pub fn populate<R: Rng + ?Sized>(
    stars: &mut Vec<Star>,
    count: usize,
    dims: &Dimensions,
    rng: &mut R,
) {
    stars.clear();
    stars.reserve(count);
    for _ in 0..count {
        stars.push(Star::spawn(rng));
    }
    for star in stars.iter_mut() {
        star.x = rng.gen::<f64>() * dims.width;
        star.y = rng.gen::<f64>() * dims.height;
    }
}
