#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::{AlphaMode, FrameDriver, InputEvent, Simulation, StarfieldConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web loaded");
    Ok(())
}

fn js_error(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Tuning handed in by the page. Fixed for the life of one mount.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct StarOptions {
    pub resistance: f64,
    pub star_count: f64,
    /// Draw each star with its stored alpha instead of twinkling.
    pub stored_alpha: bool,
}

impl Default for StarOptions {
    fn default() -> Self {
        Self::from_config(&StarfieldConfig::default())
    }
}

#[wasm_bindgen]
impl StarOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> StarOptions {
        Self::default()
    }

    pub fn home() -> StarOptions {
        Self::from_config(&StarfieldConfig::home())
    }

    pub fn about() -> StarOptions {
        Self::from_config(&StarfieldConfig::about())
    }
}

impl StarOptions {
    fn from_config(config: &StarfieldConfig) -> Self {
        Self {
            resistance: config.resistance,
            star_count: config.star_count,
            stored_alpha: config.alpha_mode == AlphaMode::Stored,
        }
    }

    fn to_config(self) -> anyhow::Result<StarfieldConfig> {
        let alpha_mode = if self.stored_alpha {
            AlphaMode::Stored
        } else {
            AlphaMode::Twinkle
        };
        Ok(StarfieldConfig::new(self.resistance, self.star_count)?.with_alpha_mode(alpha_mode))
    }
}

struct Mounted {
    driver: Rc<RefCell<frame::WebDriver>>,
    listeners: Vec<events::Listener>,
}

/// One starfield bound to one canvas.
///
/// If the canvas cannot give a 2D context the handle stays inert: no loop, no
/// listeners and no error, since the background is purely decorative.
#[wasm_bindgen]
pub struct StarBackground {
    canvas: web::HtmlCanvasElement,
    owns_canvas: bool,
    config: StarfieldConfig,
    mounted: Option<Mounted>,
    detached: bool,
}

#[wasm_bindgen]
impl StarBackground {
    /// Start a starfield on an existing canvas.
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        options: &StarOptions,
    ) -> Result<StarBackground, JsValue> {
        let config = options.to_config().map_err(js_error)?;
        Self::attach(canvas, false, config).map_err(js_error)
    }

    /// Create a fixed full-window canvas behind the page and start a starfield
    /// on it. The canvas is removed again on unmount.
    pub fn mount_fullscreen(options: &StarOptions) -> Result<StarBackground, JsValue> {
        let config = options.to_config().map_err(js_error)?;
        let document = web::window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_error(anyhow!("no document")))?;
        let canvas = dom::create_fullscreen_canvas(&document).map_err(js_error)?;
        Self::attach(canvas, true, config).map_err(js_error)
    }

    /// Stop the frame loop and remove every listener. Safe to call twice.
    pub fn unmount(&mut self) {
        self.stop();
        if self.owns_canvas && !self.detached {
            self.canvas.remove();
        }
        if !self.detached {
            log::info!("[starfield] unmounted");
        }
        self.detached = true;
    }

    /// Tear the running field down and start over with new tuning.
    pub fn reconfigure(&mut self, options: &StarOptions) -> Result<(), JsValue> {
        let config = options.to_config().map_err(js_error)?;
        self.stop();
        self.config = config;
        if self.detached {
            return Ok(());
        }
        self.run().map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .map(|m| m.driver.borrow().is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter)]
    pub fn star_total(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.driver.borrow().simulation().stars().len())
            .unwrap_or(0)
    }
}

impl StarBackground {
    fn attach(
        canvas: web::HtmlCanvasElement,
        owns_canvas: bool,
        config: StarfieldConfig,
    ) -> anyhow::Result<Self> {
        let mut bg = Self {
            canvas,
            owns_canvas,
            config,
            mounted: None,
            detached: false,
        };
        bg.run()?;
        Ok(bg)
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;

        let Some(ctx) = dom::context_2d(&self.canvas) else {
            log::debug!("[starfield] no 2d context; background disabled");
            return Ok(());
        };

        let sim = Simulation::new(self.config, StdRng::from_entropy());
        let surface = surface::CanvasSurface::new(self.canvas.clone(), ctx);
        let ticks = frame::RafTicks::new(window.clone());
        let driver = Rc::new(RefCell::new(FrameDriver::new(sim, surface, ticks)));
        driver
            .borrow_mut()
            .handle(InputEvent::Resize(dom::viewport(&window)));

        // listeners first: a failure here leaves nothing running
        let listeners = events::wire_input_handlers(&window, &document, &driver)?;
        frame::install(&driver);
        driver.borrow_mut().start();

        log::info!(
            "[starfield] mounted: resistance={} star_count={} stars={}",
            self.config.resistance,
            self.config.star_count,
            driver.borrow().simulation().stars().len()
        );
        self.mounted = Some(Mounted { driver, listeners });
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(Mounted { driver, listeners }) = self.mounted.take() {
            drop(listeners);
            driver.borrow_mut().stop();
        }
    }
}

impl Drop for StarBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}
