use folio_core::contact::{SUBMITTING_TEXT, feedback_class};
use folio_core::{ContactPayload, Feedback, FeedbackKind};
use log::{debug, error};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window,
};

use crate::constants::{CONTACT_FORM_ID, FEEDBACK_ID, SUBMIT_BUTTON_SELECTOR};
use crate::utils::{asset_url, post_json, set_disabled};

fn show_feedback(el: &Element, fb: &Feedback) {
    el.set_text_content(Some(&fb.message));
    el.set_class_name(&fb.class_name());
}

fn clear_feedback(el: &Element) {
    el.set_text_content(Some(""));
    el.set_class_name(&feedback_class(None));
}

/// Value of the named input or textarea inside the form; empty if missing.
fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("[name=\"{name}\"]")) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Wire client-side validation and async submission of the contact form.
pub fn init(window: &Window, document: &Document, endpoint: &str) -> Result<(), JsValue> {
    let (Some(form), Some(feedback)) = (
        document.get_element_by_id(CONTACT_FORM_ID),
        document.get_element_by_id(FEEDBACK_ID),
    ) else {
        return Ok(());
    };
    let form: HtmlFormElement = form.dyn_into()?;
    let url = asset_url(window, endpoint);
    debug!("contact: posting to {url}");

    let win = window.clone();
    let form_for_closure = form.clone();
    let onsubmit = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        clear_feedback(&feedback);

        let form = form_for_closure.clone();
        let payload = match ContactPayload::validate(
            &field_value(&form, "name"),
            &field_value(&form, "email"),
            &field_value(&form, "message"),
        ) {
            Ok(p) => p,
            Err(err) => {
                show_feedback(&feedback, &Feedback::from_validation(&err));
                return;
            }
        };
        let body = match payload.to_json() {
            Ok(b) => b,
            Err(err) => {
                error!("contact: cannot encode payload: {err}");
                show_feedback(&feedback, &Feedback::network_error());
                return;
            }
        };

        let button = form.query_selector(SUBMIT_BUTTON_SELECTOR).ok().flatten();
        let original_text = button.as_ref().and_then(|b| b.text_content());
        if let Some(b) = &button {
            b.set_text_content(Some(SUBMITTING_TEXT));
            set_disabled(b, true);
        }

        let win = win.clone();
        let url = url.clone();
        let feedback = feedback.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let fb = match post_json(&win, &url, &body).await {
                Ok(text) => Feedback::from_body(&text).unwrap_or_else(|err| {
                    error!("contact: unreadable response: {err}");
                    Feedback::network_error()
                }),
                Err(err) => {
                    error!("contact: request failed: {err:?}");
                    Feedback::network_error()
                }
            };
            show_feedback(&feedback, &fb);
            if fb.kind == FeedbackKind::Success {
                form.reset();
            }
            if let Some(b) = &button {
                b.set_text_content(original_text.as_deref());
                set_disabled(b, false);
            }
        });
    }));
    form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())?;
    onsubmit.forget();
    Ok(())
}
