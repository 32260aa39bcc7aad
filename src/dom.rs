use anyhow::anyhow;
use starfield_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

// Styling of a canvas we create ourselves: a fixed, full-window layer that
// never swallows clicks.
const FULLSCREEN_STYLE: [(&str, &str); 6] = [
    ("position", "fixed"),
    ("inset", "0"),
    ("z-index", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
];

#[inline]
pub fn viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

/// The canvas' 2D context, or `None` when the browser will not hand one out.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

pub fn create_fullscreen_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;

    let style = canvas.style();
    for (name, value) in FULLSCREEN_STYLE {
        style
            .set_property(name, value)
            .map_err(|e| anyhow!("set {}: {:?}", name, e))?;
    }

    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    body.append_child(&canvas)
        .map_err(|e| anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}
