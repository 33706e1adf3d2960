use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire an `input` listener on a range slider, passing the parsed value.
/// Missing or non-numeric controls are silently tolerated.
pub fn add_slider_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(f64) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
            let input_for_read = input.clone();
            let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
                if let Ok(v) = input_for_read.value().parse::<f64>() {
                    handler(v);
                }
            }) as Box<dyn FnMut()>);
            let _ =
                input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
