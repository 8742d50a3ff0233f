use folio_core::FolioConfig;
use folio_core::config::join_base_url;
use log::{Level, LevelFilter, Metadata, Record};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Headers, Request, RequestInit, Response, Window};

use crate::constants::{BASE_URL_GLOBAL, CONFIG_GLOBAL};

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // A second start() in the same page keeps the first logger.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn read_global(window: &Window, name: &str) -> Option<JsValue> {
    let v = js_sys::Reflect::get(window, &JsValue::from_str(name)).ok()?;
    if v.is_undefined() || v.is_null() {
        None
    } else {
        Some(v)
    }
}

/// Defaults overlaid with `window.__FOLIO_CONFIG`, if the host page set one.
pub fn load_config(window: &Window) -> FolioConfig {
    let Some(raw) = read_global(window, CONFIG_GLOBAL) else {
        return FolioConfig::default();
    };
    let text = match js_sys::JSON::stringify(&raw) {
        Ok(s) => String::from(s),
        Err(e) => {
            log::warn!("{CONFIG_GLOBAL} is not serializable: {e:?}");
            return FolioConfig::default();
        }
    };
    match FolioConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring {CONFIG_GLOBAL}: {e}");
            FolioConfig::default()
        }
    }
}

/// Build an absolute URL for an endpoint, taking into account the optional
/// `window.__BASE_URL` which is set by the host page.
pub fn asset_url(window: &Window, path: &str) -> String {
    let base = read_global(window, BASE_URL_GLOBAL).and_then(|v| v.as_string());
    join_base_url(base.as_deref(), path)
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

pub fn set_disabled(el: &Element, disabled: bool) {
    if let Err(e) = el.toggle_attribute_with_force("disabled", disabled) {
        log::warn!("failed to toggle disabled on #{}: {e:?}", el.id());
    }
}

/// POST a JSON body and return the response text.
pub async fn post_json(window: &Window, url: &str, body: &str) -> Result<String, JsValue> {
    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &init)?;

    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}
