use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FolioConfig, PageNavigator, SectionNav, SwipeTracker, ViewMode};
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{DomControls, DomPage};

pub type Navigator = PageNavigator<DomPage, DomControls>;

/// Flip-book runtime state, shared by the event callbacks through
/// `Rc<RefCell<_>>`.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub config: FolioConfig,
    pub nav: Navigator,
    pub swipe: SwipeTracker,
    pub view: ViewMode,
    pub sections: SectionNav,
    pub nav_items: Vec<HtmlElement>,
}

pub type SharedState = Rc<RefCell<State>>;

impl State {
    pub fn is_narrow(&self) -> bool {
        self.config
            .is_narrow(crate::utils::viewport_width(&self.window))
    }
}
