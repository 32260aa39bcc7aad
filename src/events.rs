use crate::dom;
use crate::frame::WebDriver;
use anyhow::anyhow;
use starfield_core::{InputEvent, InputKind};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener. Dropping it removes the listener.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("[events] failed to remove {} listener", self.kind);
        }
    }
}

#[inline]
pub fn mouse_input(ev: &web::Event) -> Option<InputEvent> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(InputEvent::PointerMove {
        x: ev.client_x() as f64,
        y: ev.client_y() as f64,
        kind: InputKind::Mouse,
    })
}

/// Only the first finger drives the field.
#[inline]
pub fn touch_input(ev: &web::Event) -> Option<InputEvent> {
    let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some(InputEvent::PointerMove {
        x: touch.client_x() as f64,
        y: touch.client_y() as f64,
        kind: InputKind::Touch,
    })
}

fn forward(driver: &Weak<RefCell<WebDriver>>, event: InputEvent) {
    if let Some(d) = driver.upgrade() {
        d.borrow_mut().handle(event);
    }
}

/// Wire resize, mouse-move, touch-move and mouse-leave into the driver.
///
/// Touch-move is left passive (no `preventDefault`) so the page still scrolls.
pub fn wire_input_handlers(
    window: &web::Window,
    document: &web::Document,
    driver: &Rc<RefCell<WebDriver>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(4);

    let d = Rc::downgrade(driver);
    let wnd = window.clone();
    listeners.push(Listener::new(window, "resize", move |_| {
        forward(&d, InputEvent::Resize(dom::viewport(&wnd)));
    })?);

    let d = Rc::downgrade(driver);
    listeners.push(Listener::new(window, "mousemove", move |ev| {
        if let Some(input) = mouse_input(&ev) {
            forward(&d, input);
        }
    })?);

    let d = Rc::downgrade(driver);
    listeners.push(Listener::new(window, "touchmove", move |ev| {
        if let Some(input) = touch_input(&ev) {
            forward(&d, input);
        }
    })?);

    let d = Rc::downgrade(driver);
    listeners.push(Listener::new(document, "mouseleave", move |_| {
        forward(&d, InputEvent::PointerLeave);
    })?);

    Ok(listeners)
}
