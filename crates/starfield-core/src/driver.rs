//! Frame driver: one integrate, update, recycle, render pass per host frame.

use crate::render::Surface;
use crate::simulation::{InputEvent, Simulation};
use rand::rngs::StdRng;
use rand::Rng;

/// Host frame scheduler, e.g. `requestAnimationFrame`.
///
/// `request_tick` asks for exactly one future call to [`FrameDriver::tick`];
/// `cancel_tick` withdraws a pending request if there is one.
pub trait TickSource {
    fn request_tick(&mut self);
    fn cancel_tick(&mut self);
}

pub struct FrameDriver<S, T, R = StdRng> {
    sim: Simulation<R>,
    surface: S,
    ticks: T,
    running: bool,
}

impl<S, T, R> FrameDriver<S, T, R>
where
    S: Surface,
    T: TickSource,
    R: Rng,
{
    pub fn new(sim: Simulation<R>, surface: S, ticks: T) -> Self {
        Self {
            sim,
            surface,
            ticks,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation<R> {
        &mut self.sim
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn ticks(&self) -> &T {
        &self.ticks
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.ticks.request_tick();
    }

    /// Run one frame and schedule the next. A tick delivered after
    /// [`stop`](Self::stop) does nothing.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.sim.step();
        self.sim.render(&mut self.surface);
        self.ticks.request_tick();
        true
    }

    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.ticks.cancel_tick();
    }

    /// Apply host input. A resize also resizes the drawing surface.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resize(viewport) => {
                let dims = self.sim.resize(viewport);
                self.surface.set_size(dims.width, dims.height);
            }
            other => self.sim.handle(other),
        }
    }
}
