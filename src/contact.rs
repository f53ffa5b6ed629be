use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use url::form_urlencoded::byte_serialize;

use crate::content::ContactFormText;

pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is empty")]
    EmptyName,
    #[error("email address is invalid")]
    InvalidEmail,
    #[error("message is shorter than {} characters", MIN_MESSAGE_CHARS)]
    MessageTooShort,
}

impl ContactError {
    pub fn message<'a>(&self, text: &'a ContactFormText) -> &'a str {
        match self {
            ContactError::EmptyName => &text.errors.name,
            ContactError::InvalidEmail => &text.errors.email,
            ContactError::MessageTooShort => &text.errors.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// All problems with the form, in field order.
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactError::EmptyName);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(ContactError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            errors.push(ContactError::MessageTooShort);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// `mailto:` link that opens the visitor's mail client with the message.
    pub fn mailto_href(&self, to: &str) -> String {
        let subject = format!("Portfolio contact from {}", self.name.trim());
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        format!(
            "mailto:{to}?subject={}&body={}",
            encode(&subject),
            encode(&body)
        )
    }
}

// form encoding writes spaces as '+', which mail clients show literally
fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Lan Pham".to_string(),
            email: "lan@example.com".to_string(),
            message: "Let's talk about a Rust role.".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(vec![
                ContactError::EmptyName,
                ContactError::InvalidEmail,
                ContactError::MessageTooShort,
            ])
        );
    }

    #[test]
    fn test_email_rules() {
        for bad in ["lan", "lan@", "lan@example", "lan @example.com", "@example.com"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(vec![ContactError::InvalidEmail]), "{bad}");
        }
        let form = ContactForm {
            email: "  lan.pham+jobs@mail.example.vn ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_message_length_counts_characters() {
        let form = ContactForm {
            message: "Xin chào!".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(vec![ContactError::MessageTooShort]));

        let form = ContactForm {
            message: "Xin chào bạn".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_mailto_is_percent_encoded() {
        let href = filled().mailto_href("contact@tainguyen.dev");
        assert!(href.starts_with("mailto:contact@tainguyen.dev?subject="));
        assert!(href.contains("Portfolio%20contact%20from%20Lan%20Pham"));
        assert!(href.contains("%0A%0ALan%20Pham%20%3Clan%40example.com%3E"));
        assert!(!href.contains(' '));
        assert!(!href.contains('+'));
    }

    #[test]
    fn test_plus_sign_survives_encoding() {
        assert_eq!(encode("a+b c"), "a%2Bb%20c");
    }
}
