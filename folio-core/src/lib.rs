//! Browser-independent behavior of the portfolio front end: flip-book
//! navigation, input mapping, theme and view state, contact form rules.

pub mod config;
pub mod contact;
pub mod input;
pub mod navigator;
pub mod sections;
pub mod theme;
pub mod view;

pub use config::{ConfigError, FolioConfig, StartupParams};
pub use contact::{ContactError, ContactPayload, ContactResponse, Feedback, FeedbackKind};
pub use input::{NavCommand, PageClick, SwipeTracker};
pub use navigator::{NavControls, PageLabels, PageNavigator, PageSurface};
pub use sections::SectionNav;
pub use theme::Theme;
pub use view::ViewMode;
