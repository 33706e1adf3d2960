//! Start/pause/reset glue. The transport owns the emission interval timer
//! and re-arms or clears it on every phase change, so neither scheduled task
//! outlives a `Running` exit.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{Bounds, Phase, SimEngine};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Transport {
    engine: Rc<RefCell<SimEngine>>,
    canvas: web::HtmlCanvasElement,
    timer_handle: RefCell<Option<i32>>,
}

impl Transport {
    pub fn new(engine: Rc<RefCell<SimEngine>>, canvas: web::HtmlCanvasElement) -> Self {
        Self {
            engine,
            canvas,
            timer_handle: RefCell::new(None),
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn start(&self) {
        {
            let mut eng = self.engine.borrow_mut();
            if eng.phase() != Phase::Stopped {
                return;
            }
            eng.start(self.bounds());
            // first ring leaves at t=0; the timer takes over from here
            eng.emit_wavefront();
        }
        self.arm_timer();
    }

    pub fn toggle_pause(&self) {
        let phase = self.engine.borrow().phase();
        match phase {
            Phase::Running => {
                self.engine.borrow_mut().pause();
                self.clear_timer();
            }
            Phase::Paused => {
                self.engine.borrow_mut().resume();
                self.arm_timer();
            }
            // the pause control doubles as start before the first run
            Phase::Stopped => self.start(),
        }
    }

    pub fn reset(&self) {
        self.engine.borrow_mut().reset(self.bounds());
        self.clear_timer();
    }

    /// Live emission-interval changes re-arm the running timer in place.
    pub fn refresh_timer(&self) {
        if self.engine.borrow().is_running() {
            self.arm_timer();
        }
    }

    fn arm_timer(&self) {
        self.clear_timer();
        let Some(window) = web::window() else { return };
        let interval_ms = self.engine.borrow().config().emission_interval_ms();
        let engine = self.engine.clone();
        // leaked per arm, like the listener closures
        let closure = Closure::wrap(Box::new(move || {
            engine.borrow_mut().emit_wavefront();
        }) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(handle) => {
                *self.timer_handle.borrow_mut() = Some(handle);
                closure.forget();
            }
            Err(e) => log::error!("failed to arm emission timer: {:?}", e),
        }
    }

    fn clear_timer(&self) {
        if let Some(handle) = self.timer_handle.borrow_mut().take() {
            if let Some(window) = web::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }
}
