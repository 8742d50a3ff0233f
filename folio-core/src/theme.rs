/// Attribute set on the root element while the dark theme is active.
pub const THEME_ATTR: &str = "data-theme";
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a value previously written to local storage. Anything other than
    /// `"dark"` or `"light"` means the visitor never chose.
    pub fn from_stored(v: Option<&str>) -> Option<Theme> {
        match v? {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Stored choice first, then the system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        Theme::from_stored(stored).unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// Read the theme back from the root element's `data-theme` attribute.
    pub fn from_attribute(v: Option<&str>) -> Theme {
        if v == Some("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Value for `data-theme`, or `None` when the attribute should be removed.
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn toggle_title(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_beats_system() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_or_missing_falls_back_to_system() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(Some("sepia"), false), Theme::Light);
        assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
    }

    #[test]
    fn attribute_round_trip() {
        for t in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_attribute(t.attribute_value()), t);
            assert_eq!(Theme::from_stored(Some(t.storage_value())), Some(t));
        }
        assert_eq!(Theme::from_attribute(Some("contrast")), Theme::Light);
    }

    #[test]
    fn toggle_texts() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.toggle_title(), "Dark mode");
    }
}
