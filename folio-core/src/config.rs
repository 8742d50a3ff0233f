use serde::Deserialize;
use thiserror::Error;

use crate::view::ViewMode;

/// Viewports narrower than this (CSS px) use the scrolling layout and ignore
/// click/swipe flipping.
pub const DEFAULT_NARROW_VIEWPORT_PX: f64 = 768.0;
/// Minimum horizontal travel (CSS px) for a touch gesture to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
/// Fraction of the page width separating "previous" clicks from "next" clicks.
pub const DEFAULT_CLICK_SPLIT: f64 = 0.5;
pub const DEFAULT_STORAGE_KEY: &str = "portfolio-darkmode";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("swipe threshold must be a non-negative number, got {0}")]
    SwipeThreshold(f64),
    #[error("narrow viewport width must be a non-negative number, got {0}")]
    NarrowViewport(f64),
    #[error("click split must lie strictly between 0 and 1, got {0}")]
    ClickSplit(f64),
}

/// Site-level settings. Every field has a default so a host page only needs
/// to provide the keys it wants to change.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub narrow_viewport_px: f64,
    pub swipe_threshold_px: f64,
    pub click_split: f64,
    pub page_labels: Vec<String>,
    pub back_cover_label: String,
    pub fallback_label_prefix: String,
    /// Section ids in page order, used by the mobile navigation bar.
    pub sections: Vec<String>,
    pub storage_key: String,
    pub contact_endpoint: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        FolioConfig {
            narrow_viewport_px: DEFAULT_NARROW_VIEWPORT_PX,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            click_split: DEFAULT_CLICK_SPLIT,
            page_labels: [
                "Cover",
                "About Me",
                "Experience",
                "Projects",
                "Tech Stack",
                "Contact",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            back_cover_label: "Back Cover".to_string(),
            fallback_label_prefix: "Page".to_string(),
            sections: [
                "cover",
                "about",
                "experience",
                "projects",
                "techstack",
                "contact",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse a (possibly partial) JSON object and check the numeric fields.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: FolioConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.swipe_threshold_px.is_nan() || self.swipe_threshold_px < 0.0 {
            return Err(ConfigError::SwipeThreshold(self.swipe_threshold_px));
        }
        if self.narrow_viewport_px.is_nan() || self.narrow_viewport_px < 0.0 {
            return Err(ConfigError::NarrowViewport(self.narrow_viewport_px));
        }
        if !(self.click_split > 0.0 && self.click_split < 1.0) {
            return Err(ConfigError::ClickSplit(self.click_split));
        }
        Ok(())
    }

    pub fn is_narrow(&self, viewport_width: f64) -> bool {
        viewport_width < self.narrow_viewport_px
    }
}

/// Initial state requested through the page URL, e.g. `?page=3&view=scroll`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartupParams {
    pub page: Option<i64>,
    pub view: Option<ViewMode>,
}

impl StartupParams {
    pub fn from_search(search: &str) -> Self {
        let page = get_query_param(search, "page").and_then(|v| v.trim().parse::<i64>().ok());
        let view = get_query_param(search, "view").and_then(|v| ViewMode::from_param(&v));
        StartupParams { page, view }
    }
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    // Form encoding uses '+' for spaces.
    let s = s.replace('+', " ");
    let decoded = percent_encoding::percent_decode_str(&s)
        .decode_utf8()
        .map(|v| v.into_owned());
    decoded.unwrap_or(s)
}

/// Join a relative path onto a base URL, leaving absolute URLs untouched.
pub fn join_base_url(base: Option<&str>, path: &str) -> String {
    let p = path.trim();
    if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
        return p.to_string();
    }
    let base = base.unwrap_or("/");
    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    format!("{}{}", base, p.trim_start_matches('/'))
}
