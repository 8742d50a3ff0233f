use std::cell::RefCell;
use std::rc::Rc;

use folio_core::input::{INTERACTIVE_SELECTOR, click_command, key_command};
use folio_core::view::SCROLLING_BODY_CLASS;
use folio_core::{
    FolioConfig, NavCommand, PageClick, PageLabels, PageNavigator, SectionNav, StartupParams,
    SwipeTracker, ViewMode,
};
use js_sys::Array;
use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, TouchEvent, Window,
};

use crate::constants::{
    ACTIVE_CLASS, MOBILE_NAV_SELECTOR, NEXT_BUTTON_ID, PAGE_FRONT_SELECTOR, PAGE_INDEX_ATTR,
    PAGE_SELECTOR, PREV_BUTTON_ID, SECTION_ATTR, SECTION_VISIBLE_THRESHOLD, VIEW_TOGGLE_ID,
};
use crate::dom::{DomControls, DomPage};
use crate::state::{SharedState, State};
use crate::utils::{query_all, viewport_width};

/// Build the navigator over the document's `.page` elements and wire every
/// input source to it.
pub fn init(
    window: Window,
    document: Document,
    config: FolioConfig,
    params: StartupParams,
) -> Result<(), JsValue> {
    let pages: Vec<DomPage> = query_all(&document, PAGE_SELECTOR)?
        .into_iter()
        .map(|el| DomPage { el })
        .collect();
    let controls = DomControls::from_document(&document);
    let labels = PageLabels::from_config(&config);
    let nav = PageNavigator::new(pages, controls, labels);
    let nav_items = query_all(&document, MOBILE_NAV_SELECTOR)?;
    info!(
        "flipbook: {} pages, {} nav items",
        nav.page_count(),
        nav_items.len()
    );

    let state = Rc::new(RefCell::new(State {
        window,
        document,
        sections: SectionNav::new(config.sections.clone()),
        config,
        nav,
        swipe: SwipeTracker::new(),
        view: ViewMode::FlipBook,
        nav_items,
    }));

    attach_buttons(state.clone())?;
    attach_page_clicks(state.clone())?;
    attach_keyboard(state.clone())?;
    attach_touch(state.clone())?;
    attach_view_toggle(state.clone())?;
    attach_section_nav(state.clone())?;
    observe_sections(state.clone())?;

    if let Some(page) = params.page
        && !state.borrow_mut().nav.jump_to(page)
    {
        debug!("flipbook: start page {page} out of range");
    }
    if params.view == Some(ViewMode::Scrolling) {
        toggle_view(&state)?;
    }
    Ok(())
}

fn run(state: &SharedState, cmd: NavCommand) {
    cmd.apply(&mut state.borrow_mut().nav);
}

fn event_element(e: &Event) -> Option<Element> {
    e.target().and_then(|t| t.dyn_into::<Element>().ok())
}

fn attach_buttons(state: SharedState) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    for (id, cmd) in [
        (PREV_BUTTON_ID, NavCommand::Previous),
        (NEXT_BUTTON_ID, NavCommand::Next),
    ] {
        let Some(btn) = doc.get_element_by_id(id) else {
            continue;
        };
        let st = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
            run(&st, cmd);
        }));
        btn.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

fn attach_page_clicks(state: SharedState) -> Result<(), JsValue> {
    let page_els: Vec<HtmlElement> = state
        .borrow()
        .nav
        .pages()
        .iter()
        .map(|p| p.el.clone())
        .collect();
    for page_el in page_els {
        let st = state.clone();
        let el = page_el.clone();
        let onclick = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let on_interactive = event_element(&e)
                .and_then(|t| t.closest(INTERACTIVE_SELECTOR).ok().flatten())
                .is_some();
            let rect = el.get_bounding_client_rect();
            let mut s = st.borrow_mut();
            let click = PageClick {
                offset_x: e.client_x() as f64 - rect.left(),
                page_width: rect.width(),
                on_interactive,
                viewport_width: viewport_width(&s.window),
            };
            if let Some(cmd) = click_command(&click, &s.config) {
                cmd.apply(&mut s.nav);
            }
        }));
        page_el.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

fn attach_keyboard(state: SharedState) -> Result<(), JsValue> {
    let st = state.clone();
    let keydown = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
        let tag = event_element(&e).map(|el| el.tag_name());
        if let Some(cmd) = key_command(&e.key(), tag.as_deref()) {
            e.prevent_default();
            run(&st, cmd);
        }
    }));
    state
        .borrow()
        .document
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();
    Ok(())
}

fn attach_touch(state: SharedState) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);

    let st = state.clone();
    let touchstart = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
        if let Some(t) = e.touches().item(0) {
            st.borrow_mut()
                .swipe
                .touch_start(t.client_x() as f64, t.client_y() as f64);
        }
    }));
    doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        touchstart.as_ref().unchecked_ref(),
        &opts,
    )?;
    touchstart.forget();

    let st = state.clone();
    let touchend = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
        let Some(t) = e.changed_touches().item(0) else {
            return;
        };
        let mut guard = st.borrow_mut();
        let s = &mut *guard;
        let width = viewport_width(&s.window);
        if let Some(cmd) =
            s.swipe
                .touch_end(t.client_x() as f64, t.client_y() as f64, width, &s.config)
        {
            cmd.apply(&mut s.nav);
        }
    }));
    doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        touchend.as_ref().unchecked_ref(),
        &opts,
    )?;
    touchend.forget();
    Ok(())
}

/// Switch between the flip-book and the scrolling layout. Coming back to the
/// book re-applies the current page.
fn toggle_view(state: &SharedState) -> Result<(), JsValue> {
    let mut s = state.borrow_mut();
    s.view = s.view.toggled();
    let scrolling = s.view == ViewMode::Scrolling;
    let body = s.document.body().ok_or("no body")?;
    body.class_list()
        .toggle_with_force(SCROLLING_BODY_CLASS, scrolling)?;
    if let Some(btn) = s.document.get_element_by_id(VIEW_TOGGLE_ID) {
        btn.set_text_content(Some(s.view.toggle_icon()));
        btn.set_attribute("title", s.view.toggle_title())?;
    }
    if !scrolling {
        s.nav.reapply();
    }
    debug!("flipbook: view {:?}", s.view);
    Ok(())
}

fn attach_view_toggle(state: SharedState) -> Result<(), JsValue> {
    let Some(btn) = state.borrow().document.get_element_by_id(VIEW_TOGGLE_ID) else {
        return Ok(());
    };
    let st = state.clone();
    let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        if let Err(e) = toggle_view(&st) {
            log::error!("view toggle failed: {e:?}");
        }
    }));
    btn.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

fn set_active(items: &[HtmlElement], active: &HtmlElement) {
    for item in items {
        let _ = item.class_list().remove_1(ACTIVE_CLASS);
    }
    let _ = active.class_list().add_1(ACTIVE_CLASS);
}

fn attach_section_nav(state: SharedState) -> Result<(), JsValue> {
    let items = state.borrow().nav_items.clone();
    for item in items {
        let st = state.clone();
        let clicked = item.clone();
        let onclick = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let Some(section) = clicked.get_attribute(SECTION_ATTR) else {
                return;
            };
            let mut guard = st.borrow_mut();
            let s = &mut *guard;
            let Some(idx) = s.sections.select(&section, s.nav.page_count()) else {
                return;
            };
            if let Some(page) = s.nav.pages().get(idx) {
                let target: Element = page
                    .el
                    .query_selector(PAGE_FRONT_SELECTOR)
                    .ok()
                    .flatten()
                    .unwrap_or_else(|| page.el.clone().into());
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            set_active(&s.nav_items, &clicked);
        }));
        item.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(())
}

/// On narrow screens, light up the nav item of whichever page scrolls into view.
fn observe_sections(state: SharedState) -> Result<(), JsValue> {
    if !state.borrow().is_narrow() || state.borrow().nav_items.is_empty() {
        return Ok(());
    }
    let st = state.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let mut guard = st.borrow_mut();
            let s = &mut *guard;
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let attr = entry.target().get_attribute(PAGE_INDEX_ATTR);
                if let Some(idx) = s.sections.observe(attr.as_deref(), s.nav_items.len()) {
                    set_active(&s.nav_items, &s.nav_items[idx]);
                }
            }
        },
    ));
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(SECTION_VISIBLE_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for page in state.borrow().nav.pages() {
        observer.observe(&page.el);
    }
    callback.forget();
    Ok(())
}
