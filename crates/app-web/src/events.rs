//! Control wiring: transport buttons, keyboard shortcuts, and the parameter
//! sliders with their live value displays.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::SimEngine;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::transport::Transport;

pub fn wire_transport_buttons(document: &web::Document, transport: Rc<Transport>) {
    {
        let transport = transport.clone();
        dom::add_click_listener(document, "btn-start", move || transport.start());
    }
    {
        let transport = transport.clone();
        dom::add_click_listener(document, "btn-pause", move || transport.toggle_pause());
    }
    dom::add_click_listener(document, "btn-reset", move || transport.reset());
}

pub fn wire_global_keydown(transport: Rc<Transport>) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            match ev.key().as_str() {
                " " => {
                    transport.toggle_pause();
                    ev.prevent_default();
                }
                "s" | "S" => transport.start(),
                "r" | "R" => transport.reset(),
                _ => {}
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_sliders(
    document: &web::Document,
    engine: Rc<RefCell<SimEngine>>,
    transport: Rc<Transport>,
) {
    // Each slider writes through the clamping setter and then echoes the
    // value the engine actually adopted.
    {
        let engine = engine.clone();
        let doc = document.clone();
        let transport = transport.clone();
        dom::add_slider_listener(document, "slider-interval", move |v| {
            engine.borrow_mut().config_mut().set_emission_interval_ms(v);
            let adopted = engine.borrow().config().emission_interval_ms();
            dom::set_text(&doc, "value-interval", &format!("{adopted:.0} ms"));
            transport.refresh_timer();
        });
    }
    {
        let engine = engine.clone();
        let doc = document.clone();
        dom::add_slider_listener(document, "slider-growth", move |v| {
            engine.borrow_mut().config_mut().set_growth_speed(v as f32);
            let adopted = engine.borrow().config().growth_speed();
            dom::set_text(&doc, "value-growth", &format!("{adopted:.2} px/ms"));
        });
    }
    {
        let engine = engine.clone();
        let doc = document.clone();
        dom::add_slider_listener(document, "slider-source", move |v| {
            engine.borrow_mut().config_mut().set_source_speed(v as f32);
            let adopted = engine.borrow().config().source_speed();
            dom::set_text(&doc, "value-source", &format!("{adopted:.1}"));
        });
    }
    {
        let engine = engine.clone();
        let doc = document.clone();
        dom::add_slider_listener(document, "slider-observer", move |v| {
            engine.borrow_mut().config_mut().set_observer_speed(v as f32);
            let adopted = engine.borrow().config().observer_speed();
            dom::set_text(&doc, "value-observer", &format!("{adopted:.1}"));
        });
    }
    {
        let engine = engine.clone();
        let doc = document.clone();
        dom::add_slider_listener(document, "slider-fade", move |v| {
            engine.borrow_mut().config_mut().set_fade_duration_ms(v);
            let adopted = engine.borrow().config().fade_duration_ms();
            dom::set_text(&doc, "value-fade", &format!("{:.1} s", adopted / 1000.0));
        });
    }
    {
        let doc = document.clone();
        dom::add_slider_listener(document, "slider-hue", move |v| {
            engine.borrow_mut().config_mut().set_hue_cycle_speed(v as f32);
            let adopted = engine.borrow().config().hue_cycle_speed();
            dom::set_text(&doc, "value-hue", &format!("{adopted:.3} deg/ms"));
        });
    }
}
