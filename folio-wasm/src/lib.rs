use folio_core::StartupParams;
use wasm_bindgen::prelude::*;

mod constants;
mod contact;
mod dom;
mod flipbook;
mod state;
mod theme;
mod utils;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    utils::init_logging();
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = utils::load_config(&window);

    // ?page=<n>&view=scroll
    let params = window
        .location()
        .search()
        .map(|s| StartupParams::from_search(&s))
        .unwrap_or_default();

    theme::init(&window, &document, &config.storage_key)?;
    contact::init(&window, &document, &config.contact_endpoint)?;
    flipbook::init(window, document, config, params)?;
    log::info!("folio ready");
    Ok(())
}
