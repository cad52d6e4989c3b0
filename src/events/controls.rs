use crate::constants::*;
use crate::core::NavCommand;
use crate::dom;
use crate::overlay;
use crate::session::Session;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn input_target(ev: &web::Event) -> Option<web::HtmlInputElement> {
    ev.target()?.dyn_into::<web::HtmlInputElement>().ok()
}

pub fn wire_controls(session: &Rc<Session>) {
    let doc = &session.document;

    // Slide navigation buttons
    let s = session.clone();
    dom::add_click_listener(doc, NAV_PREV_ID, move || s.navigate(NavCommand::Prev));
    let s = session.clone();
    dom::add_click_listener(doc, NAV_NEXT_ID, move || s.navigate(NavCommand::Next));

    // Music panel
    let d = doc.clone();
    dom::add_click_listener(doc, MUSIC_BUTTON_ID, move || overlay::toggle(&d, MUSIC_PANEL_ID));
    if let Some(panel) = doc.get_element_by_id(MUSIC_PANEL_ID) {
        // dragging the volume slider must not read as a slide swipe
        for event in ["touchstart", "touchend"] {
            dom::listen(&panel, event, |ev: web::Event| ev.stop_propagation());
        }
    }
    if let Some(el) = doc.get_element_by_id(MUSIC_SWITCH_ID) {
        let s = session.clone();
        dom::listen(&el, "change", move |ev: web::Event| {
            if let Some(input) = input_target(&ev) {
                s.set_music_enabled(input.checked());
            }
        });
    }
    if let Some(el) = doc.get_element_by_id(SFX_SWITCH_ID) {
        let s = session.clone();
        dom::listen(&el, "change", move |ev: web::Event| {
            if let Some(input) = input_target(&ev) {
                s.set_sfx_enabled(input.checked());
            }
        });
    }
    if let Some(el) = doc.get_element_by_id(VOLUME_SLIDER_ID) {
        let s = session.clone();
        dom::listen(&el, "input", move |ev: web::Event| {
            let Some(input) = input_target(&ev) else {
                return;
            };
            match input.value().parse::<f32>() {
                Ok(v) => s.set_volume(v),
                Err(e) => log::warn!("[settings] bad slider value {:?}: {}", input.value(), e),
            }
        });
    }

    // Heart game
    if let Some(el) = doc.get_element_by_id(GAME_RESET_ID) {
        let s = session.clone();
        dom::listen(&el, "click", move |ev: web::Event| {
            // the button sits inside the tap surface
            ev.stop_propagation();
            s.reset_game();
        });
    }

    // Drawing + name form
    let s = session.clone();
    dom::add_click_listener(doc, DRAW_CLEAR_ID, move || s.with_surface(|surface| surface.clear()));
    let s = session.clone();
    dom::add_click_listener(doc, NAME_RESET_ID, move || s.reset_model_slide());
    if let Some(form) = doc.get_element_by_id(NAME_FORM_ID) {
        let s = session.clone();
        dom::listen(&form, "submit", move |ev: web::Event| {
            ev.prevent_default();
            let value = dom::element_by_id::<web::HtmlInputElement>(&s.document, NAME_INPUT_ID)
                .map(|input| input.value())
                .unwrap_or_default();
            s.submit_name(&value);
        });
    }

    // Viewport changes rescale (and clear) the drawing surface
    if let Some(window) = web::window() {
        let s = session.clone();
        dom::listen(&window, "resize", move |_: web::Event| s.resize_surface());
    }
}
