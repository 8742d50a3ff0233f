//! Ids and selectors of the host page elements this crate drives.

pub const PAGE_SELECTOR: &str = ".page";
pub const PAGE_FRONT_SELECTOR: &str = ".page-front";
pub const FLIPPED_CLASS: &str = "flipped";
pub const PREV_BUTTON_ID: &str = "prev-page";
pub const NEXT_BUTTON_ID: &str = "next-page";
pub const INDICATOR_ID: &str = "page-indicator";
pub const VIEW_TOGGLE_ID: &str = "view-toggle";

pub const MOBILE_NAV_SELECTOR: &str = ".mobile-nav-item";
pub const SECTION_ATTR: &str = "data-section";
pub const PAGE_INDEX_ATTR: &str = "data-page";
pub const ACTIVE_CLASS: &str = "active";
/// Fraction of a page that must be visible before its nav item lights up.
pub const SECTION_VISIBLE_THRESHOLD: f64 = 0.3;

pub const DARKMODE_TOGGLE_ID: &str = "darkmode-toggle";

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FEEDBACK_ID: &str = "form-feedback";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-btn";

/// Optional globals a host page may set before loading the module.
pub const CONFIG_GLOBAL: &str = "__FOLIO_CONFIG";
pub const BASE_URL_GLOBAL: &str = "__BASE_URL";
