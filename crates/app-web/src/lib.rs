#![cfg(target_arch = "wasm32")]
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod transport;

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{SimConfig, SimEngine, TickReport};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input::StickTarget;
use crate::transport::Transport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("sim-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #sim-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let seed = js_sys::Date::now() as u64;
    let engine = Rc::new(RefCell::new(SimEngine::new(SimConfig::default(), seed)));
    let transport = Rc::new(Transport::new(engine.clone(), canvas.clone()));

    events::wire_transport_buttons(&document, transport.clone());
    events::wire_global_keydown(transport.clone());
    events::wire_sliders(&document, engine.clone(), transport);
    input::wire_stick(&document, "stick-source", engine.clone(), StickTarget::Source);
    input::wire_stick(
        &document,
        "stick-observer",
        engine.clone(),
        StickTarget::Observer,
    );

    let painter = render::CanvasPainter::new(&canvas)?;
    let frame_ctx = frame::FrameContext {
        engine,
        painter,
        canvas,
        document,
        last_instant: Instant::now(),
        last_report: TickReport::default(),
    };
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));

    Ok(())
}
