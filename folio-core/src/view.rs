/// Body class present while the scrolling layout is active.
pub const SCROLLING_BODY_CLASS: &str = "view-scrolling";

/// Layout of the book: pages stacked as a flip-book, or laid out vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    FlipBook,
    Scrolling,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::FlipBook => ViewMode::Scrolling,
            ViewMode::Scrolling => ViewMode::FlipBook,
        }
    }

    /// Icon shown on the toggle button; it names the mode the button switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ViewMode::FlipBook => "📱",
            ViewMode::Scrolling => "📖",
        }
    }

    pub fn toggle_title(self) -> &'static str {
        match self {
            ViewMode::FlipBook => "Switch to scrolling view",
            ViewMode::Scrolling => "Back to book view",
        }
    }

    pub fn from_param(v: &str) -> Option<Self> {
        match v.trim().to_ascii_lowercase().as_str() {
            "scroll" | "scrolling" => Some(ViewMode::Scrolling),
            "book" | "flipbook" => Some(ViewMode::FlipBook),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip_and_texts() {
        let m = ViewMode::default();
        assert_eq!(m, ViewMode::FlipBook);
        let s = m.toggled();
        assert_eq!(s, ViewMode::Scrolling);
        assert_eq!(s.toggle_icon(), "📖");
        assert_eq!(s.toggled(), ViewMode::FlipBook);
        assert_eq!(m.toggle_title(), "Switch to scrolling view");
    }

    #[test]
    fn params() {
        assert_eq!(ViewMode::from_param("Scroll"), Some(ViewMode::Scrolling));
        assert_eq!(ViewMode::from_param("book"), Some(ViewMode::FlipBook));
        assert_eq!(ViewMode::from_param("grid"), None);
    }
}
