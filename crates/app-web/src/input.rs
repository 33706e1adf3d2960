//! Virtual-stick pointer capture. Each stick is a DOM pad; the drag vector
//! is the pointer's offset from the pad centre, handed to the engine's
//! control mapping on every move. Releasing the stick leaves the last
//! velocity in place by design.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::SimEngine;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StickTarget {
    Source,
    Observer,
}

/// Offset of a pointer event from an element's centre, in CSS px.
#[inline]
pub fn pointer_offset_from_center(ev: &web::PointerEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    let cx = rect.left() + rect.width() / 2.0;
    let cy = rect.top() + rect.height() / 2.0;
    Vec2::new(
        (ev.client_x() as f64 - cx) as f32,
        (ev.client_y() as f64 - cy) as f32,
    )
}

fn apply(engine: &Rc<RefCell<SimEngine>>, target: StickTarget, offset: Vec2) {
    let mut eng = engine.borrow_mut();
    match target {
        StickTarget::Source => eng.drag_source(offset),
        StickTarget::Observer => eng.drag_observer(offset),
    }
}

pub fn wire_stick(
    document: &web::Document,
    element_id: &str,
    engine: Rc<RefCell<SimEngine>>,
    target: StickTarget,
) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::debug!("[input] no #{element_id} pad in this layout");
        return;
    };
    let active = Rc::new(RefCell::new(false));

    // pointerdown: capture the pointer and take the first sample
    {
        let el_down = el.clone();
        let active = active.clone();
        let engine = engine.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            *active.borrow_mut() = true;
            let _ = el_down.set_pointer_capture(ev.pointer_id());
            apply(&engine, target, pointer_offset_from_center(&ev, &el_down));
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove while held
    {
        let el_move = el.clone();
        let active = active.clone();
        let engine = engine.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if !*active.borrow() {
                return;
            }
            apply(&engine, target, pointer_offset_from_center(&ev, &el_move));
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup: release; the velocity persists until the next drag
    {
        let active = active.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            *active.borrow_mut() = false;
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
