//! Contact form validation and the JSON exchanged with the backend.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 2000;

pub const SUBMITTING_TEXT: &str = "Sending...";
pub const DEFAULT_SUCCESS_TEXT: &str = "Message sent!";
pub const DEFAULT_FAILURE_TEXT: &str = "Failed to send message.";
pub const NETWORK_ERROR_TEXT: &str = "Network error. Please try again later.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Name is too long (max 100 characters).")]
    NameTooLong,
    #[error("Email address is not valid.")]
    InvalidEmail,
    #[error("Message must be at least 10 characters. Tell me a bit more!")]
    MessageTooShort,
    #[error("Message is too long (max 2000 characters).")]
    MessageTooLong,
}

/// Validated form contents, serialized as the request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactPayload {
    /// Trim and check the raw field values. The first failing rule wins.
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        let name_len = name.chars().count();
        if name_len < NAME_MIN_CHARS {
            return Err(ContactError::NameTooShort);
        }
        if name_len > NAME_MAX_CHARS {
            return Err(ContactError::NameTooLong);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        let msg_len = message.chars().count();
        if msg_len < MESSAGE_MIN_CHARS {
            return Err(ContactError::MessageTooShort);
        }
        if msg_len > MESSAGE_MAX_CHARS {
            return Err(ContactError::MessageTooLong);
        }
        Ok(ContactPayload {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Backend reply: `{"success": bool, "message": string}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

pub const FEEDBACK_BASE_CLASS: &str = "form-feedback";

/// Class attribute for the feedback element; `None` is the cleared state.
pub fn feedback_class(kind: Option<FeedbackKind>) -> String {
    match kind {
        Some(k) => format!("{} {}", FEEDBACK_BASE_CLASS, k.as_str()),
        None => FEEDBACK_BASE_CLASS.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn error(message: impl Into<String>) -> Self {
        Feedback {
            kind: FeedbackKind::Error,
            message: message.into(),
        }
    }

    pub fn from_validation(err: &ContactError) -> Self {
        Feedback::error(err.to_string())
    }

    pub fn from_response(resp: &ContactResponse) -> Self {
        let server_text = resp.message.as_deref().filter(|m| !m.is_empty());
        if resp.success {
            Feedback {
                kind: FeedbackKind::Success,
                message: server_text.unwrap_or(DEFAULT_SUCCESS_TEXT).to_string(),
            }
        } else {
            Feedback::error(server_text.unwrap_or(DEFAULT_FAILURE_TEXT))
        }
    }

    /// Interpret a raw response body. Unparseable bodies count as a network
    /// failure, like a dropped connection.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        let resp: ContactResponse = serde_json::from_str(body)?;
        Ok(Feedback::from_response(&resp))
    }

    pub fn network_error() -> Self {
        Feedback::error(NETWORK_ERROR_TEXT)
    }

    pub fn class_name(&self) -> String {
        feedback_class(Some(self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSG: &str = "Hello there, nice site!";

    #[test]
    fn accepts_and_trims() {
        let p = ContactPayload::validate("  Ana ", " ana@example.com ", MSG).unwrap();
        assert_eq!(p.name, "Ana");
        assert_eq!(p.email, "ana@example.com");
        let json = p.to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["name"], "Ana");
        assert_eq!(v["message"], MSG);
    }

    #[test]
    fn first_failure_wins() {
        assert_eq!(
            ContactPayload::validate("A", "bad", "short"),
            Err(ContactError::NameTooShort)
        );
        assert_eq!(
            ContactPayload::validate("Ana", "bad", "short"),
            Err(ContactError::InvalidEmail)
        );
        assert_eq!(
            ContactPayload::validate("Ana", "a@b.co", "short"),
            Err(ContactError::MessageTooShort)
        );
    }

    #[test]
    fn length_limits_count_chars() {
        let long_name = "é".repeat(NAME_MAX_CHARS + 1);
        assert_eq!(
            ContactPayload::validate(&long_name, "a@b.co", MSG),
            Err(ContactError::NameTooLong)
        );
        let ok_msg = "ü".repeat(MESSAGE_MAX_CHARS);
        assert!(ContactPayload::validate("Ana", "a@b.co", &ok_msg).is_ok());
        let long_msg = "x".repeat(MESSAGE_MAX_CHARS + 1);
        assert_eq!(
            ContactPayload::validate("Ana", "a@b.co", &long_msg),
            Err(ContactError::MessageTooLong)
        );
        // Whitespace padding does not count.
        assert_eq!(
            ContactPayload::validate("Ana", "a@b.co", "   123456789   "),
            Err(ContactError::MessageTooShort)
        );
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last@sub.example.org"] {
            assert!(EMAIL_RE.is_match(ok), "{ok}");
        }
        for bad in ["a@b", "a b@c.d", "@b.co", "a@@b.co", "a@b.", ""] {
            assert!(!EMAIL_RE.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn feedback_from_server() {
        let fb = Feedback::from_body(r#"{"success":true,"message":"Thanks!"}"#).unwrap();
        assert_eq!(fb.kind, FeedbackKind::Success);
        assert_eq!(fb.message, "Thanks!");
        assert_eq!(fb.class_name(), "form-feedback success");

        let fb = Feedback::from_body(r#"{"success":true}"#).unwrap();
        assert_eq!(fb.message, DEFAULT_SUCCESS_TEXT);

        let fb = Feedback::from_body(r#"{"success":false,"message":"","error":"x"}"#).unwrap();
        assert_eq!(fb.kind, FeedbackKind::Error);
        assert_eq!(fb.message, DEFAULT_FAILURE_TEXT);

        assert!(Feedback::from_body("<html>502</html>").is_err());
    }

    #[test]
    fn validation_feedback_and_cleared_class() {
        let fb = Feedback::from_validation(&ContactError::InvalidEmail);
        assert_eq!(fb.message, "Email address is not valid.");
        assert_eq!(fb.class_name(), "form-feedback error");
        assert_eq!(feedback_class(None), "form-feedback");
        assert_eq!(Feedback::network_error().message, NETWORK_ERROR_TEXT);
    }
}
