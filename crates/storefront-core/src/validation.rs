//! Form Validation
//!
//! Submit-time rules for the login and registration forms, plus the live
//! per-field status the registration page shows while typing.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Credentials;
use crate::error::ValidationError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s\-]{10,}$").expect("phone pattern is valid"));

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PASSWORD_CHARS: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

// ========================
// Login
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Trim both fields, then require them filled and the email well formed
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let email = self.email.trim();
        let password = self.password.trim();

        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

// ========================
// Registration
// ========================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Rules run in order: name, email, phone, password, confirmation.
    /// The first failure is returned.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let password = self.password.trim();
        let confirm = self.confirm_password.trim();

        if char_len(name) < MIN_NAME_CHARS {
            return Err(ValidationError::NameTooShort);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if char_len(password) < MIN_PASSWORD_CHARS {
            return Err(ValidationError::PasswordTooShort);
        }
        if password != confirm {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// Live status of one field
    ///
    /// Only the confirmation field is ever marked invalid while typing;
    /// the others go back to neutral until they pass.
    pub fn field_status(&self, field: RegistrationField) -> FieldStatus {
        let passes = match field {
            RegistrationField::Name => char_len(self.name.trim()) >= MIN_NAME_CHARS,
            RegistrationField::Email => is_valid_email(self.email.trim()),
            RegistrationField::Phone => is_valid_phone(self.phone.trim()),
            RegistrationField::Password => char_len(&self.password) >= MIN_PASSWORD_CHARS,
            RegistrationField::ConfirmPassword => {
                if self.confirm_password.is_empty() {
                    return FieldStatus::Neutral;
                }
                let matches = self.confirm_password == self.password
                    && char_len(&self.confirm_password) >= MIN_PASSWORD_CHARS;
                return if matches { FieldStatus::Valid } else { FieldStatus::Invalid };
            }
        };

        if passes {
            FieldStatus::Valid
        } else {
            FieldStatus::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

/// Visual validity of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl FieldStatus {
    /// Class added to the input element
    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Neutral => "",
            FieldStatus::Valid => "success",
            FieldStatus::Invalid => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegistrationForm {
        RegistrationForm {
            name: "Sara".into(),
            email: "sara@example.com".into(),
            phone: "+20 100-123-4567".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
    }

    #[test]
    fn test_phone_shape() {
        assert!(is_valid_phone("0123456789"));
        assert!(is_valid_phone("+20 100 123 4567"));
        assert!(is_valid_phone("010-1234-5678"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("++201001234567"));
        assert!(!is_valid_phone("0100abc4567"));
    }

    #[test]
    fn test_login_requires_both_fields() {
        let err = LoginForm::new("user@example.com", "   ").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingCredentials);

        let err = LoginForm::new("", "secret").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingCredentials);
    }

    #[test]
    fn test_login_email_checked_after_presence() {
        let err = LoginForm::new("not-an-email", "secret").validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
    }

    #[test]
    fn test_login_trims() {
        let creds = LoginForm::new("  user@example.com ", " secret ").validate().unwrap();
        assert_eq!(creds.email, "user@example.com");
        assert_eq!(creds.password, "secret");
    }

    #[test]
    fn test_registration_valid() {
        let creds = valid_registration().validate().unwrap();
        assert_eq!(creds.email, "sara@example.com");
        assert_eq!(creds.password, "secret1");
    }

    #[test]
    fn test_registration_first_failing_rule_wins() {
        // Everything wrong: name is reported
        let form = RegistrationForm {
            name: "S".into(),
            email: "bad".into(),
            phone: "1".into(),
            password: "123".into(),
            confirm_password: "456".into(),
        };
        assert_eq!(form.validate().unwrap_err(), ValidationError::NameTooShort);

        let form = RegistrationForm { name: "Sara".into(), ..form };
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidEmail);

        let form = RegistrationForm { email: "sara@example.com".into(), ..form };
        assert_eq!(form.validate().unwrap_err(), ValidationError::InvalidPhone);

        let form = RegistrationForm { phone: "0123456789".into(), ..form };
        assert_eq!(form.validate().unwrap_err(), ValidationError::PasswordTooShort);

        let form = RegistrationForm { password: "secret1".into(), ..form };
        assert_eq!(form.validate().unwrap_err(), ValidationError::PasswordMismatch);
    }

    #[test]
    fn test_name_length_counts_characters() {
        let form = RegistrationForm { name: "سا".into(), ..valid_registration() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_field_status_neutral_until_valid() {
        let mut form = RegistrationForm::default();
        assert_eq!(form.field_status(RegistrationField::Name), FieldStatus::Neutral);
        assert_eq!(form.field_status(RegistrationField::Email), FieldStatus::Neutral);

        form.name = "Sa".into();
        form.email = "sara@example.com".into();
        form.phone = "123".into();
        assert_eq!(form.field_status(RegistrationField::Name), FieldStatus::Valid);
        assert_eq!(form.field_status(RegistrationField::Email), FieldStatus::Valid);
        assert_eq!(form.field_status(RegistrationField::Phone), FieldStatus::Neutral);
    }

    #[test]
    fn test_confirm_status() {
        let mut form = RegistrationForm { password: "secret1".into(), ..Default::default() };
        assert_eq!(form.field_status(RegistrationField::ConfirmPassword), FieldStatus::Neutral);

        form.confirm_password = "secret".into();
        assert_eq!(form.field_status(RegistrationField::ConfirmPassword), FieldStatus::Invalid);

        form.confirm_password = "secret1".into();
        assert_eq!(form.field_status(RegistrationField::ConfirmPassword), FieldStatus::Valid);

        form.password = "abc".into();
        form.confirm_password = "abc".into();
        assert_eq!(form.field_status(RegistrationField::ConfirmPassword), FieldStatus::Invalid);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(FieldStatus::Valid.css_class(), "success");
        assert_eq!(FieldStatus::Invalid.css_class(), "error");
        assert_eq!(FieldStatus::Neutral.css_class(), "");
    }
}
