use super::{Field, FormKind};
use std::fmt;

/// Misuse of the form API. Invalid user input is never reported here; it ends
/// up in the form's error messages instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    UnknownField(String),
    FieldNotInForm { form: FormKind, field: Field },
}

impl fmt::Display for FormError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownField(name) => write!(formatter, "Unknown field: {name}"),
            FormError::FieldNotInForm { form, field } => {
                write!(formatter, "Field {field} is not part of the {form} form")
            }
        }
    }
}

impl std::error::Error for FormError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_form_and_field() {
        let err = FormError::FieldNotInForm {
            form: FormKind::Forgot,
            field: Field::Password,
        };
        assert_eq!(err.to_string(), "Field password is not part of the forgot form");
        assert_eq!(
            FormError::UnknownField("name".to_string()).to_string(),
            "Unknown field: name"
        );
    }
}
