use crate::core::nav_for_key;
use crate::dom;
use crate::session::Session;
use std::rc::Rc;
use web_sys as web;

pub fn wire_global_keydown(session: &Rc<Session>) {
    let Some(window) = web::window() else {
        return;
    };
    let s = session.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &s);
    });
}

fn handle_global_keydown(ev: &web::KeyboardEvent, session: &Session) {
    // typing a name must not flip slides
    let typing = session
        .document
        .active_element()
        .map(|el| el.tag_name().eq_ignore_ascii_case("input"))
        .unwrap_or(false);
    if typing {
        return;
    }
    if let Some(cmd) = nav_for_key(&ev.key()) {
        session.navigate(cmd);
        ev.prevent_default();
    }
}
