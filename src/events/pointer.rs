use crate::constants::{DRAW_CANVAS_ID, GAME_SURFACE_ID, SLIDE_ROOT_ID};
use crate::dom;
use crate::input;
use crate::session::Session;
use std::rc::Rc;
use web_sys as web;

pub fn wire_drawing(session: &Rc<Session>) {
    let Some(canvas) = session.document.get_element_by_id(DRAW_CANVAS_ID) else {
        return;
    };

    {
        let s = session.clone();
        let el = canvas.clone();
        dom::listen(&canvas, "mousedown", move |ev: web::MouseEvent| {
            s.draw_engage(input::mouse_surface_point(&ev, &el));
        });
    }
    {
        let s = session.clone();
        let el = canvas.clone();
        dom::listen(&canvas, "mousemove", move |ev: web::MouseEvent| {
            s.draw_move(input::mouse_surface_point(&ev, &el));
        });
    }
    for event in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
        let s = session.clone();
        dom::listen(&canvas, event, move |_: web::Event| s.draw_release());
    }
    {
        let s = session.clone();
        let el = canvas.clone();
        dom::listen(&canvas, "touchstart", move |ev: web::TouchEvent| {
            // keep the page from scrolling or swiping while drawing
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(p) = input::touch_surface_point(&ev, &el) {
                s.draw_engage(p);
            }
        });
    }
    {
        let s = session.clone();
        let el = canvas.clone();
        dom::listen(&canvas, "touchmove", move |ev: web::TouchEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            if let Some(p) = input::touch_surface_point(&ev, &el) {
                s.draw_move(p);
            }
        });
    }
}

pub fn wire_heart_game(session: &Rc<Session>) {
    let Some(surface) = session.document.get_element_by_id(GAME_SURFACE_ID) else {
        return;
    };
    {
        let s = session.clone();
        let el = surface.clone();
        dom::listen(&surface, "click", move |ev: web::MouseEvent| {
            let p = input::mouse_surface_point(&ev, &el);
            s.heart_tap(p.x, p.y);
        });
    }
    {
        let s = session.clone();
        let el = surface.clone();
        dom::listen(&surface, "touchstart", move |ev: web::TouchEvent| {
            if let Some(p) = input::touch_surface_point(&ev, &el) {
                // suppress the synthetic click that would count the tap twice
                ev.prevent_default();
                s.heart_tap(p.x, p.y);
            }
        });
    }
}

/// Swipe navigation on the slideshow root plus the page-wide gesture hook
/// used to retry blocked music playback.
pub fn wire_gestures(session: &Rc<Session>) {
    if let Some(root) = session.document.get_element_by_id(SLIDE_ROOT_ID) {
        let s = session.clone();
        dom::listen(&root, "touchstart", move |ev: web::TouchEvent| {
            if let Some(x) = input::changed_touch_screen_x(&ev) {
                s.swipe_start(x);
            }
        });
        let s = session.clone();
        dom::listen(&root, "touchend", move |ev: web::TouchEvent| {
            if let Some(x) = input::changed_touch_screen_x(&ev) {
                s.swipe_end(x);
            }
        });
    }

    if let Some(window) = web::window() {
        for event in ["click", "touchstart"] {
            let s = session.clone();
            dom::listen(&window, event, move |_: web::Event| s.on_gesture());
        }
    }
}
