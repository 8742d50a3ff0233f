//! Flip-book page navigation.
//!
//! The navigator owns a zero-based page index over a fixed sequence of pages.
//! Index `N` (one past the last page) is the back cover: every page is turned.
//! Out-of-range requests are ignored rather than reported.

use log::{debug, trace};

use crate::config::FolioConfig;

/// One page of the book. Implementations render the "flipped" flag.
pub trait PageSurface {
    fn set_flipped(&self, flipped: bool);
}

/// The previous/next controls and the page label.
pub trait NavControls {
    fn set_prev_disabled(&self, disabled: bool);
    fn set_next_disabled(&self, disabled: bool);
    fn set_label(&self, text: &str);
}

/// Human readable names for each page index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLabels {
    labels: Vec<String>,
    back_cover: String,
    fallback_prefix: String,
}

impl PageLabels {
    pub fn new(labels: Vec<String>, back_cover: String, fallback_prefix: String) -> Self {
        PageLabels {
            labels,
            back_cover,
            fallback_prefix,
        }
    }

    pub fn from_config(cfg: &FolioConfig) -> Self {
        PageLabels::new(
            cfg.page_labels.clone(),
            cfg.back_cover_label.clone(),
            cfg.fallback_label_prefix.clone(),
        )
    }

    /// Label for `page` in a book of `total` pages.
    pub fn label_for(&self, page: usize, total: usize) -> String {
        if page >= total {
            return self.back_cover.clone();
        }
        match self.labels.get(page) {
            Some(l) if !l.is_empty() => l.clone(),
            _ => format!("{} {}", self.fallback_prefix, page),
        }
    }
}

impl Default for PageLabels {
    fn default() -> Self {
        PageLabels::from_config(&FolioConfig::default())
    }
}

pub struct PageNavigator<P, C> {
    pages: Vec<P>,
    controls: C,
    labels: PageLabels,
    current: usize,
}

impl<P: PageSurface, C: NavControls> PageNavigator<P, C> {
    /// Build a navigator parked on the cover and sync the controls to it.
    pub fn new(pages: Vec<P>, controls: C, labels: PageLabels) -> Self {
        let nav = PageNavigator {
            pages,
            controls,
            labels,
            current: 0,
        };
        nav.refresh_controls();
        nav
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_back_cover(&self) -> bool {
        self.current >= self.pages.len()
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn controls(&self) -> &C {
        &self.controls
    }

    pub fn current_label(&self) -> String {
        self.labels.label_for(self.current, self.pages.len())
    }

    /// Turn to `target`. Targets outside `[0, N)` are ignored; returns whether
    /// the request was applied.
    pub fn jump_to(&mut self, target: i64) -> bool {
        let Ok(target) = usize::try_from(target) else {
            trace!("nav: ignore jump to {target}");
            return false;
        };
        if target >= self.pages.len() {
            trace!("nav: ignore jump to {target} of {}", self.pages.len());
            return false;
        }
        self.settle(target);
        true
    }

    pub fn next(&mut self) -> bool {
        let total = self.pages.len();
        if self.current >= total {
            return false;
        }
        let target = self.current + 1;
        if target == total {
            // Last real page turned: park on the back cover.
            self.settle(total);
            return true;
        }
        self.jump_to(target as i64)
    }

    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.jump_to(self.current as i64 - 1)
    }

    /// Re-render flags and controls for the current page, e.g. after the
    /// layout was switched back to the book view.
    pub fn reapply(&mut self) {
        self.settle(self.current);
    }

    fn settle(&mut self, page: usize) {
        self.current = page;
        for (idx, p) in self.pages.iter().enumerate() {
            p.set_flipped(idx < page);
        }
        debug!("nav: page {}/{}", page, self.pages.len());
        self.refresh_controls();
    }

    fn refresh_controls(&self) {
        let total = self.pages.len();
        self.controls.set_prev_disabled(self.current == 0);
        self.controls.set_next_disabled(self.current >= total);
        self.controls
            .set_label(&self.labels.label_for(self.current, total));
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::cell::{Cell, RefCell};

    use super::{NavControls, PageSurface};

    #[derive(Default)]
    pub struct FakePage {
        pub flipped: Cell<bool>,
        pub writes: Cell<usize>,
    }

    impl PageSurface for FakePage {
        fn set_flipped(&self, flipped: bool) {
            self.flipped.set(flipped);
            self.writes.set(self.writes.get() + 1);
        }
    }

    #[derive(Default)]
    pub struct FakeControls {
        pub prev_disabled: Cell<bool>,
        pub next_disabled: Cell<bool>,
        pub label: RefCell<String>,
    }

    impl NavControls for FakeControls {
        fn set_prev_disabled(&self, disabled: bool) {
            self.prev_disabled.set(disabled);
        }
        fn set_next_disabled(&self, disabled: bool) {
            self.next_disabled.set(disabled);
        }
        fn set_label(&self, text: &str) {
            *self.label.borrow_mut() = text.to_string();
        }
    }

    pub fn pages(n: usize) -> Vec<FakePage> {
        (0..n).map(|_| FakePage::default()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fakes::{FakeControls, FakePage, pages};
    use super::*;

    fn book(n: usize) -> PageNavigator<FakePage, FakeControls> {
        PageNavigator::new(pages(n), FakeControls::default(), PageLabels::default())
    }

    fn flipped(nav: &PageNavigator<FakePage, FakeControls>) -> Vec<bool> {
        nav.pages().iter().map(|p| p.flipped.get()).collect()
    }

    fn assert_flags_match(nav: &PageNavigator<FakePage, FakeControls>) {
        for (idx, p) in nav.pages().iter().enumerate() {
            assert_eq!(p.flipped.get(), idx < nav.current_page(), "page {idx}");
        }
        assert_eq!(nav.controls().prev_disabled.get(), nav.current_page() == 0);
        assert_eq!(
            nav.controls().next_disabled.get(),
            nav.current_page() == nav.page_count()
        );
    }

    #[test]
    fn starts_on_cover_with_controls_synced() {
        let nav = book(6);
        assert_eq!(nav.current_page(), 0);
        assert!(nav.controls().prev_disabled.get());
        assert!(!nav.controls().next_disabled.get());
        assert_eq!(*nav.controls().label.borrow(), "Cover");
    }

    #[test]
    fn three_steps_forward() {
        let mut nav = book(6);
        for _ in 0..3 {
            assert!(nav.next());
        }
        assert_eq!(nav.current_page(), 3);
        assert_eq!(flipped(&nav), [true, true, true, false, false, false]);
        assert_eq!(*nav.controls().label.borrow(), "Projects");
        assert_flags_match(&nav);
    }

    #[test]
    fn previous_on_cover_is_noop() {
        let mut nav = book(6);
        assert!(!nav.previous());
        assert_eq!(nav.current_page(), 0);
        assert!(nav.controls().prev_disabled.get());
        // No page was touched by the rejected call.
        assert!(nav.pages().iter().all(|p| p.writes.get() == 0));
    }

    #[test]
    fn next_from_last_page_reaches_back_cover() {
        let mut nav = book(6);
        assert!(nav.jump_to(5));
        assert!(nav.next());
        assert_eq!(nav.current_page(), 6);
        assert!(nav.is_back_cover());
        assert_eq!(*nav.controls().label.borrow(), "Back Cover");
        assert!(nav.controls().next_disabled.get());
        assert!(!nav.controls().prev_disabled.get());
        assert!(flipped(&nav).iter().all(|f| *f));

        assert!(!nav.next());
        assert_eq!(nav.current_page(), 6);

        assert!(nav.previous());
        assert_eq!(nav.current_page(), 5);
        assert_flags_match(&nav);
    }

    #[test]
    fn out_of_range_jumps_leave_state_alone() {
        let mut nav = book(6);
        nav.jump_to(2);
        for t in [-1, 6, 7, i64::MIN, i64::MAX] {
            assert!(!nav.jump_to(t));
            assert_eq!(nav.current_page(), 2);
            assert_flags_match(&nav);
        }
    }

    #[test]
    fn random_walk_stays_in_bounds() {
        let mut nav = book(6);
        // Deterministic pseudo-random walk over next/previous/jump.
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 3 {
                0 => {
                    nav.next();
                }
                1 => {
                    nav.previous();
                }
                _ => {
                    nav.jump_to((seed % 11) as i64 - 2);
                }
            }
            assert!(nav.current_page() <= nav.page_count());
            assert_flags_match(&nav);
        }
    }

    #[test]
    fn labels_fall_back_when_missing() {
        let labels = PageLabels::new(
            vec!["Cover".into(), String::new()],
            "The End".into(),
            "Page".into(),
        );
        let mut nav = PageNavigator::new(pages(4), FakeControls::default(), labels);
        nav.next();
        assert_eq!(*nav.controls().label.borrow(), "Page 1");
        nav.next();
        assert_eq!(*nav.controls().label.borrow(), "Page 2");
        nav.jump_to(3);
        nav.next();
        assert_eq!(*nav.controls().label.borrow(), "The End");
    }

    #[test]
    fn empty_book_is_back_cover() {
        let mut nav = book(0);
        assert!(nav.is_back_cover());
        assert!(nav.controls().prev_disabled.get());
        assert!(nav.controls().next_disabled.get());
        assert_eq!(*nav.controls().label.borrow(), "Back Cover");
        assert!(!nav.next());
        assert!(!nav.previous());
        assert!(!nav.jump_to(0));
    }

    #[test]
    fn reapply_restores_back_cover_flags() {
        let mut nav = book(3);
        nav.jump_to(2);
        nav.next();
        for p in nav.pages() {
            p.flipped.set(false);
        }
        nav.reapply();
        assert_eq!(nav.current_page(), 3);
        assert!(flipped(&nav).iter().all(|f| *f));
    }
}
