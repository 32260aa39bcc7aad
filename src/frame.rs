use crate::surface::CanvasSurface;
use rand::rngs::StdRng;
use starfield_core::{FrameDriver, TickSource};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebDriver = FrameDriver<CanvasSurface, RafTicks, StdRng>;

type CallbackSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` tick source.
///
/// The frame callback lives in a shared slot filled by [`install`]. Dropping
/// the source cancels any pending frame and frees the callback.
pub struct RafTicks {
    window: web::Window,
    callback: CallbackSlot,
    pending: Option<i32>,
}

impl RafTicks {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
            pending: None,
        }
    }
}

impl TickSource for RafTicks {
    fn request_tick(&mut self) {
        let slot = self.callback.borrow();
        if let Some(cb) = slot.as_ref() {
            self.pending = self
                .window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .ok();
        }
    }

    fn cancel_tick(&mut self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}

impl Drop for RafTicks {
    fn drop(&mut self) {
        self.cancel_tick();
        self.callback.borrow_mut().take();
    }
}

/// Put the per-frame callback in place. The callback holds the driver weakly,
/// so dropping the driver ends the loop.
pub fn install(driver: &Rc<RefCell<WebDriver>>) {
    let weak = Rc::downgrade(driver);
    let closure = Closure::wrap(Box::new(move || {
        if let Some(d) = weak.upgrade() {
            d.borrow_mut().tick();
        }
    }) as Box<dyn FnMut()>);
    let slot = driver.borrow().ticks().callback.clone();
    *slot.borrow_mut() = Some(closure);
}
