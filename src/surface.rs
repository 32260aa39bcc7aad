use starfield_core::Surface;
use std::f64::consts::TAU;
use web_sys as web;

/// Canvas 2D implementation of the simulation's drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Surface for CanvasSurface {
    fn set_size(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(color);
        self.ctx.set_global_alpha(alpha);
        _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
