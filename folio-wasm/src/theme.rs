use folio_core::Theme;
use folio_core::theme::{DARK_MEDIA_QUERY, THEME_ATTR};
use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, Storage, Window};

use crate::constants::DARKMODE_TOGGLE_ID;

/// Dark-mode toggle backed by local storage.
#[derive(Clone)]
struct ThemeToggle {
    window: Window,
    root: Element,
    toggle: Element,
    storage_key: String,
}

impl ThemeToggle {
    fn storage(&self) -> Option<Storage> {
        // Private browsing may deny access entirely.
        self.window.local_storage().ok().flatten()
    }

    fn stored(&self) -> Option<String> {
        self.storage()?.get_item(&self.storage_key).ok().flatten()
    }

    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(DARK_MEDIA_QUERY)
            .ok()
            .flatten()
            .is_some_and(|m| m.matches())
    }

    fn current(&self) -> Theme {
        Theme::from_attribute(self.root.get_attribute(THEME_ATTR).as_deref())
    }

    fn apply(&self, theme: Theme) -> Result<(), JsValue> {
        match theme.attribute_value() {
            Some(v) => self.root.set_attribute(THEME_ATTR, v)?,
            None => self.root.remove_attribute(THEME_ATTR)?,
        }
        self.toggle.set_text_content(Some(theme.toggle_icon()));
        self.toggle.set_attribute("title", theme.toggle_title())?;

        let saved = self
            .storage()
            .map(|s| s.set_item(&self.storage_key, theme.storage_value()));
        if !matches!(saved, Some(Ok(()))) {
            debug!("theme: preference not persisted");
        }
        Ok(())
    }
}

/// Apply the saved (or system) theme and wire the toggle button. Pages
/// without a toggle are left untouched.
pub fn init(window: &Window, document: &Document, storage_key: &str) -> Result<(), JsValue> {
    let Some(toggle) = document.get_element_by_id(DARKMODE_TOGGLE_ID) else {
        return Ok(());
    };
    let root = document.document_element().ok_or("no root element")?;
    let tt = ThemeToggle {
        window: window.clone(),
        root,
        toggle: toggle.clone(),
        storage_key: storage_key.to_string(),
    };

    let initial = Theme::resolve(tt.stored().as_deref(), tt.prefers_dark());
    debug!("theme: initial {initial:?}");
    tt.apply(initial)?;

    let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        if let Err(e) = tt.apply(tt.current().toggled()) {
            log::error!("theme toggle failed: {e:?}");
        }
    }));
    toggle.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}
