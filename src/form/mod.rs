//! Form state for the login, signup and forgot-password pages. Each page owns
//! one [`AuthForm`]; values and error messages live only in memory and are
//! dropped with the page.
//!
//! Flow Overview: every input event calls [`AuthForm::set_field`], which
//! stores the raw value and recomputes that field's error synchronously. The
//! submit button reads [`AuthForm::is_valid`], and [`AuthForm::submit`] hands
//! the payload to a [`Submitter`] only when the whole form is valid.

mod controller;
mod error;
mod submit;

pub use controller::AuthForm;
pub use error::FormError;
pub use submit::{LogSubmitter, SubmissionPayload, Submitter};

use std::fmt;
use std::str::FromStr;

pub const EMAIL_PROMPT: &str = "Please provide your email.";
pub const PASSWORD_PROMPT: &str = "At least 8 characters with a number & symbol.";
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";
pub const PASSWORD_ERROR: &str =
    "Password must be at least 8 characters long, with a number and a symbol.";
pub const CONFIRM_PASSWORD_ERROR: &str = "Passwords do not match.";

/// Input fields known to the auth forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Name used for the input id and the submission payload key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Helper text shown while the field is empty.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Field::Email => EMAIL_PROMPT,
            Field::Password | Field::ConfirmPassword => PASSWORD_PROMPT,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "confirmPassword" => Ok(Field::ConfirmPassword),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// The three forms served by the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
    Forgot,
}

impl FormKind {
    /// Fields owned by this form, in display order.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            FormKind::Login => &[Field::Email, Field::Password],
            FormKind::Signup => &[Field::Email, Field::Password, Field::ConfirmPassword],
            FormKind::Forgot => &[Field::Email],
        }
    }

    #[must_use]
    pub fn owns(self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormKind::Login => "login",
            FormKind::Signup => "signup",
            FormKind::Forgot => "forgot",
        };
        formatter.write_str(name)
    }
}

/// Per-field progress: `Empty -> Invalid -> Valid`, driven only by input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Empty,
    Invalid,
    Valid,
}

/// Text rendered under a field. A field shows either its prompt or its error,
/// never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldHint {
    Prompt(&'static str),
    Error(String),
}

impl FieldHint {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, FieldHint::Error(_))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            FieldHint::Prompt(message) => message,
            FieldHint::Error(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in [Field::Email, Field::Password, Field::ConfirmPassword] {
            assert_eq!(field.name().parse::<Field>().ok(), Some(field));
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "confirm_password".parse::<Field>().unwrap_err();
        assert_eq!(err, FormError::UnknownField("confirm_password".to_string()));
    }

    #[test]
    fn form_kinds_own_expected_fields() {
        assert!(FormKind::Forgot.owns(Field::Email));
        assert!(!FormKind::Forgot.owns(Field::Password));
        assert!(FormKind::Login.owns(Field::Password));
        assert!(!FormKind::Login.owns(Field::ConfirmPassword));
        assert_eq!(FormKind::Signup.fields().len(), 3);
    }

    #[test]
    fn hint_message_exposes_text() {
        let hint = FieldHint::Error(EMAIL_ERROR.to_string());
        assert!(hint.is_error());
        assert_eq!(hint.message(), EMAIL_ERROR);
        assert!(!FieldHint::Prompt(EMAIL_PROMPT).is_error());
    }
}
