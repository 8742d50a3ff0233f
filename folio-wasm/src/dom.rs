use folio_core::{NavControls, PageSurface};
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{FLIPPED_CLASS, INDICATOR_ID, NEXT_BUTTON_ID, PREV_BUTTON_ID};
use crate::utils::set_disabled;

/// A `.page` element; the flipped flag is its `flipped` class.
#[derive(Clone)]
pub struct DomPage {
    pub el: HtmlElement,
}

impl PageSurface for DomPage {
    fn set_flipped(&self, flipped: bool) {
        if let Err(e) = self
            .el
            .class_list()
            .toggle_with_force(FLIPPED_CLASS, flipped)
        {
            log::warn!("failed to toggle {FLIPPED_CLASS}: {e:?}");
        }
    }
}

/// Navigation controls; each one is optional in the host page.
#[derive(Clone)]
pub struct DomControls {
    pub prev: Option<Element>,
    pub next: Option<Element>,
    pub indicator: Option<Element>,
}

impl DomControls {
    pub fn from_document(doc: &Document) -> Self {
        DomControls {
            prev: doc.get_element_by_id(PREV_BUTTON_ID),
            next: doc.get_element_by_id(NEXT_BUTTON_ID),
            indicator: doc.get_element_by_id(INDICATOR_ID),
        }
    }
}

impl NavControls for DomControls {
    fn set_prev_disabled(&self, disabled: bool) {
        if let Some(el) = &self.prev {
            set_disabled(el, disabled);
        }
    }

    fn set_next_disabled(&self, disabled: bool) {
        if let Some(el) = &self.next {
            set_disabled(el, disabled);
        }
    }

    fn set_label(&self, text: &str) {
        if let Some(el) = &self.indicator {
            el.set_text_content(Some(text));
        }
    }
}
