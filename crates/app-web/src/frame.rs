//! The render-cadence loop: one `requestAnimationFrame` callback advancing
//! the engine with measured wall time, painting the scene, and refreshing
//! the debug line.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{Bounds, SimEngine, TickReport};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::render::CanvasPainter;

pub struct FrameContext {
    pub engine: Rc<RefCell<SimEngine>>,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub last_instant: Instant,
    pub last_report: TickReport,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // the engine reads the backing size fresh, so resizes apply this tick
        let bounds = Bounds::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let running = self.engine.borrow().is_running();
        let report = self.engine.borrow_mut().advance(dt, bounds);
        if running {
            self.last_report = report;
        }

        let eng = self.engine.borrow();
        self.painter.paint(&eng, bounds);
        let stats = format!(
            "wavefronts {} (-{})  ghosts {} (-{})  t {:.1}s",
            eng.wavefronts().len(),
            self.last_report.wavefronts_removed,
            eng.ghosts().len(),
            self.last_report.ghosts_removed,
            eng.clock_ms() / 1000.0,
        );
        drop(eng);
        dom::set_text(&self.document, "stats", &stats);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
