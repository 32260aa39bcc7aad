use crate::constants::{ALPHA_MIN, BASE_SIZE, STAR_COLOR};
use crate::star::{Dimensions, Star};
use rand::Rng;

/// Drawing surface the renderer paints onto, sized in device pixels.
pub trait Surface {
    /// Resize the backing store to `width` x `height` device pixels.
    fn set_size(&mut self, width: f64, height: f64);
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64);
}

/// Which alpha a star is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlphaMode {
    /// A fresh random alpha per star per frame; the stored alpha is ignored.
    #[default]
    Twinkle,
    /// The alpha stored on the star at spawn.
    Stored,
}

/// On-screen radius: nearer stars are bigger.
#[inline]
pub fn star_radius(z: f64, scale: f64) -> f64 {
    BASE_SIZE * z * scale / 2.0
}

pub fn render<S, R>(surface: &mut S, stars: &[Star], dims: &Dimensions, mode: AlphaMode, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    surface.clear(dims.width, dims.height);
    for star in stars {
        let alpha = match mode {
            AlphaMode::Twinkle => ALPHA_MIN + (1.0 - ALPHA_MIN) * rng.gen::<f64>(),
            AlphaMode::Stored => star.alpha,
        };
        surface.fill_circle(
            star.x,
            star.y,
            star_radius(star.z, dims.scale),
            STAR_COLOR,
            alpha,
        );
    }
}
