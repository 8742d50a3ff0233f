//! Maps raw pointer, touch and keyboard input onto navigation commands.

use log::trace;

use crate::config::FolioConfig;
use crate::navigator::{NavControls, PageNavigator, PageSurface};

/// Clicks landing inside any of these never turn the page.
pub const INTERACTIVE_SELECTOR: &str = "a, form, input, textarea, button, .project-card";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
}

impl NavCommand {
    pub fn apply<P: PageSurface, C: NavControls>(self, nav: &mut PageNavigator<P, C>) -> bool {
        match self {
            NavCommand::Next => nav.next(),
            NavCommand::Previous => nav.previous(),
        }
    }
}

/// Everything the page-click handler knows about a click.
#[derive(Clone, Copy, Debug)]
pub struct PageClick {
    /// Horizontal offset of the pointer from the page's left edge.
    pub offset_x: f64,
    pub page_width: f64,
    pub on_interactive: bool,
    pub viewport_width: f64,
}

pub fn click_command(click: &PageClick, cfg: &FolioConfig) -> Option<NavCommand> {
    if click.on_interactive || cfg.is_narrow(click.viewport_width) {
        return None;
    }
    if click.offset_x > click.page_width * cfg.click_split {
        Some(NavCommand::Next)
    } else {
        Some(NavCommand::Previous)
    }
}

/// Arrow keys turn pages unless the user is typing.
pub fn key_command(key: &str, target_tag: Option<&str>) -> Option<NavCommand> {
    if target_tag.is_some_and(is_text_entry_tag) {
        return None;
    }
    match key {
        "ArrowRight" | "ArrowDown" => Some(NavCommand::Next),
        "ArrowLeft" | "ArrowUp" => Some(NavCommand::Previous),
        _ => None,
    }
}

pub fn is_text_entry_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
}

/// Tracks one touch gesture from start to end.
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Finish the gesture. A swipe to the left (finger moving towards
    /// smaller x) turns forward.
    pub fn touch_end(
        &mut self,
        x: f64,
        y: f64,
        viewport_width: f64,
        cfg: &FolioConfig,
    ) -> Option<NavCommand> {
        let (sx, sy) = self.start.take()?;
        let dx = sx - x;
        let dy = sy - y;
        if dx.abs() <= cfg.swipe_threshold_px || dx.abs() <= dy.abs() {
            trace!("swipe: ignored dx={dx} dy={dy}");
            return None;
        }
        if cfg.is_narrow(viewport_width) {
            return None;
        }
        if dx > 0.0 {
            Some(NavCommand::Next)
        } else {
            Some(NavCommand::Previous)
        }
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}
