use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_MESSAGE_CHARS: usize = 2000;

/// How long the "Message Sent!" panel stays up before the form comes back.
pub const CONFIRMATION_MS: u64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("Please write a message")]
    MissingMessage,
    #[error("Messages are limited to 2000 characters")]
    MessageTooLong,
}

impl ContactForm {
    /// Checks fields in display order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        let message = self.message.trim();
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(ContactError::MessageTooLong);
        }
        Ok(())
    }
}

// local@domain.tld, nothing fancier; the browser's type="email" does the rest
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's talk about a project".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields() {
        let form = ContactForm {
            name: "  ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingName));

        let form = ContactForm {
            email: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingEmail));

        let form = ContactForm {
            message: "\n".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingMessage));

        // first problem wins
        assert_eq!(
            ContactForm::default().validate(),
            Err(ContactError::MissingName)
        );
    }

    #[test]
    fn test_email_shapes() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a@b@c.com", "ada @x.io", "ada@.com"] {
            let form = ContactForm {
                email: bad.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        for good in ["a@b.co", "first.last+tag@mail.example.org"] {
            let form = ContactForm {
                email: good.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Ok(()), "{good}");
        }
    }

    #[test]
    fn test_message_length() {
        let form = ContactForm {
            message: "x".repeat(MAX_MESSAGE_CHARS),
            ..filled()
        };
        assert_eq!(form.validate(), Ok(()));
        let form = ContactForm {
            message: "x".repeat(MAX_MESSAGE_CHARS + 1),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MessageTooLong));
    }
}
