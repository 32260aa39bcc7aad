//! The owned simulation context for one mounted background.
//!
//! Host adapters feed [`InputEvent`]s in between frames; the frame driver
//! calls [`Simulation::step`] and [`Simulation::render`] once per frame. Every
//! random draw (population, recycling, twinkle) goes through the injected RNG,
//! so a seeded RNG gives a fully reproducible run.

use crate::config::StarfieldConfig;
use crate::constants::OVERFLOW_THRESHOLD;
use crate::pointer::{InputKind, PointerTracker};
use crate::recycle::recycle;
use crate::render::{self, Surface};
use crate::star::{populate, Dimensions, Star, Viewport};
use crate::velocity::Velocity;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::Rng;

/// Host input, already reduced to what the simulation needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f64, y: f64, kind: InputKind },
    PointerLeave,
    Resize(Viewport),
}

pub struct Simulation<R = StdRng> {
    config: StarfieldConfig,
    rng: R,
    stars: Vec<Star>,
    velocity: Velocity,
    pointer: PointerTracker,
    dims: Dimensions,
}

impl<R: Rng> Simulation<R> {
    /// An empty field. Nothing is visible until the first [`resize`](Self::resize).
    pub fn new(config: StarfieldConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            stars: Vec::new(),
            velocity: Velocity::default(),
            pointer: PointerTracker::default(),
            dims: Dimensions::default(),
        }
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    pub fn velocity(&self) -> &Velocity {
        &self.velocity
    }

    pub fn velocity_mut(&mut self) -> &mut Velocity {
        &mut self.velocity
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y, kind } => self.pointer_move(x, y, kind),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::Resize(viewport) => {
                self.resize(viewport);
            }
        }
    }

    /// Recompute dimensions and rebuild the whole star set.
    pub fn resize(&mut self, viewport: Viewport) -> Dimensions {
        self.dims = Dimensions::from_viewport(&viewport);
        let count = viewport.star_count(self.config.star_count);
        populate(&mut self.stars, count, &self.dims, &mut self.rng);
        log::debug!(
            "[starfield] resize {:.0}x{:.0} @{} -> {} stars",
            self.dims.width,
            self.dims.height,
            self.dims.scale,
            count
        );
        self.dims
    }

    pub fn pointer_move(&mut self, x: f64, y: f64, kind: InputKind) {
        let impulse = self.pointer.track(
            DVec2::new(x, y),
            kind,
            self.config.resistance,
            self.dims.scale,
        );
        self.velocity.push(impulse);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    /// Advance one frame: integrate velocity, move every star and recycle the
    /// ones that left the field. Returns how many were recycled.
    pub fn step(&mut self) -> usize {
        self.velocity.integrate();

        let velocity = self.velocity;
        let dims = self.dims;
        let mut recycled = 0;
        for star in self.stars.iter_mut() {
            if !advance_star(star, &velocity, &dims) {
                recycle(star, velocity.current, &dims, &mut self.rng);
                recycled += 1;
            }
        }
        recycled
    }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        render::render(
            surface,
            &self.stars,
            &self.dims,
            self.config.alpha_mode,
            &mut self.rng,
        );
    }
}

/// Move one star by a frame of velocity. Returns `false` once it is out of
/// bounds and needs recycling.
pub fn advance_star(star: &mut Star, velocity: &Velocity, dims: &Dimensions) -> bool {
    // parallax
    star.x += velocity.current.x * star.z;
    star.y += velocity.current.y * star.z;

    // zoom out from the centre
    star.x += (star.x - dims.width / 2.0) * velocity.z * star.z;
    star.y += (star.y - dims.height / 2.0) * velocity.z * star.z;
    star.z += velocity.z;

    dims.contains(star.x, star.y, OVERFLOW_THRESHOLD)
}
