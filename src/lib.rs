#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod input;
mod overlay;
mod render;
mod session;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shayari-slides starting");

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
    document
        .get_element_by_id(constants::SLIDE_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::SLIDE_ROOT_ID))?;

    let session = session::Session::new(document);

    events::wire_global_keydown(&session);
    events::wire_gestures(&session);
    events::wire_drawing(&session);
    events::wire_heart_game(&session);
    events::wire_controls(&session);

    log::info!(
        "[slides] {} slides ready",
        session.deck.borrow().total()
    );
    Ok(())
}
