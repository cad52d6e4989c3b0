use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &web::EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("listen {} failed: {:?}", event, e);
    }
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => listen(&el, "click", move |_: web::Event| handler()),
        None => log::warn!("no #{} to attach click handler", element_id),
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        ms,
    ) {
        log::error!("setTimeout failed: {:?}", e);
    }
    closure.forget();
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// CSS size of `el` and the current device pixel ratio.
pub fn css_size_and_ratio(el: &web::Element) -> (f64, f64, f64) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = el.get_bounding_client_rect();
    (rect.width(), rect.height(), dpr)
}
