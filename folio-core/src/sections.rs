//! Section links used by the narrow-screen navigation bar.

use log::trace;

#[derive(Clone, Debug, Default)]
pub struct SectionNav {
    sections: Vec<String>,
    active: Option<usize>,
}

impl SectionNav {
    pub fn new(sections: Vec<String>) -> Self {
        SectionNav {
            sections,
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Resolve a `data-section` value to a page index, if that page exists.
    pub fn resolve(&self, section: &str, page_count: usize) -> Option<usize> {
        let idx = self.sections.iter().position(|s| s == section)?;
        (idx < page_count).then_some(idx)
    }

    /// Handle a click on the nav item for `section`. Returns the page to
    /// scroll to, and marks it active.
    pub fn select(&mut self, section: &str, page_count: usize) -> Option<usize> {
        match self.resolve(section, page_count) {
            Some(idx) => {
                self.active = Some(idx);
                Some(idx)
            }
            None => {
                trace!("sections: no page for section {section:?}");
                None
            }
        }
    }

    /// A page scrolled into view; `data_page` is its raw attribute value.
    pub fn observe(&mut self, data_page: Option<&str>, item_count: usize) -> Option<usize> {
        let idx = data_page?.trim().parse::<usize>().ok()?;
        if idx >= item_count {
            return None;
        }
        self.active = Some(idx);
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;

    fn nav() -> SectionNav {
        SectionNav::new(FolioConfig::default().sections)
    }

    #[test]
    fn select_known_sections() {
        let mut n = nav();
        assert_eq!(n.select("projects", 6), Some(3));
        assert_eq!(n.active(), Some(3));
        assert_eq!(n.select("nowhere", 6), None);
        assert_eq!(n.active(), Some(3));
    }

    #[test]
    fn select_beyond_page_count() {
        let mut n = nav();
        assert_eq!(n.select("contact", 4), None);
        assert_eq!(n.active(), None);
    }

    #[test]
    fn observe_parses_data_page() {
        let mut n = nav();
        assert_eq!(n.observe(Some("2"), 6), Some(2));
        assert_eq!(n.observe(Some("x"), 6), None);
        assert_eq!(n.observe(Some("9"), 6), None);
        assert_eq!(n.observe(None, 6), None);
        assert_eq!(n.active(), Some(2));
    }
}
