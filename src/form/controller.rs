use super::{
    Field, FieldHint, FieldStatus, FormError, FormKind, SubmissionPayload, Submitter,
    CONFIRM_PASSWORD_ERROR, EMAIL_ERROR, PASSWORD_ERROR,
};
use crate::validation::{validate_email, validate_password};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Values and derived error messages for one form instance.
///
/// Invariant: an error message is present only for a non-empty value that
/// fails its check. Errors are written exclusively by [`AuthForm::set_field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthForm {
    kind: FormKind,
    values: BTreeMap<Field, String>,
    errors: BTreeMap<Field, String>,
}

impl AuthForm {
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        let values = kind
            .fields()
            .iter()
            .map(|field| (*field, String::new()))
            .collect();
        Self {
            kind,
            values,
            errors: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Stores `value` and recomputes the affected error messages.
    ///
    /// # Errors
    /// Returns [`FormError::FieldNotInForm`] when this form has no such field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if !self.kind.owns(field) {
            return Err(FormError::FieldNotInForm {
                form: self.kind,
                field,
            });
        }

        self.values.insert(field, value.into());
        self.refresh_error(field);

        // Editing the password can fix or break an existing confirmation.
        if self.kind == FormKind::Signup && field == Field::Password {
            self.refresh_error(Field::ConfirmPassword);
        }

        trace!(form = %self.kind, %field, status = ?self.status(field), "field updated");
        Ok(())
    }

    /// Same as [`AuthForm::set_field`] but takes the input name, e.g. `confirmPassword`.
    ///
    /// # Errors
    /// Returns [`FormError::UnknownField`] for names that are not a [`Field`].
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value)
    }

    /// Current raw value, empty for fields not owned by this form.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Current error message, empty when the field has none.
    #[must_use]
    pub fn error(&self, field: Field) -> &str {
        self.errors.get(&field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn has_error(&self, field: Field) -> bool {
        !self.error(field).is_empty()
    }

    #[must_use]
    pub fn status(&self, field: Field) -> FieldStatus {
        if self.value(field).is_empty() {
            FieldStatus::Empty
        } else if self.accepts(field) {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    /// Prompt for an untouched field, otherwise its error if one exists.
    #[must_use]
    pub fn hint(&self, field: Field) -> Option<FieldHint> {
        if self.value(field).is_empty() {
            return Some(FieldHint::Prompt(field.prompt()));
        }
        let error = self.error(field);
        (!error.is_empty()).then(|| FieldHint::Error(error.to_string()))
    }

    /// True when every field passes its check, including the signup
    /// confirmation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.kind.fields().iter().all(|field| self.accepts(*field))
    }

    /// Snapshot of the values for a valid form.
    #[must_use]
    pub fn payload(&self) -> Option<SubmissionPayload> {
        if !self.is_valid() {
            return None;
        }

        let email = self.value(Field::Email).to_string();
        let payload = match self.kind {
            FormKind::Login => SubmissionPayload::Login {
                email,
                password: self.value(Field::Password).to_string(),
            },
            FormKind::Signup => SubmissionPayload::Signup {
                email,
                password: self.value(Field::Password).to_string(),
                confirm_password: self.value(Field::ConfirmPassword).to_string(),
            },
            FormKind::Forgot => SubmissionPayload::Forgot { email },
        };
        Some(payload)
    }

    /// Hands the payload to `submitter` when the form is valid. Returns whether
    /// anything was submitted; the form itself is left untouched.
    pub fn submit<S: Submitter + ?Sized>(&self, submitter: &S) -> bool {
        match self.payload() {
            Some(payload) => {
                submitter.submit(&payload);
                true
            }
            None => {
                debug!(form = %self.kind, "submit ignored, form is invalid");
                false
            }
        }
    }

    fn accepts(&self, field: Field) -> bool {
        let value = self.value(field);
        match field {
            Field::Email => validate_email(value),
            Field::Password => validate_password(value),
            Field::ConfirmPassword => value == self.value(Field::Password),
        }
    }

    fn refresh_error(&mut self, field: Field) {
        let message = match field {
            Field::Email => EMAIL_ERROR,
            Field::Password => PASSWORD_ERROR,
            Field::ConfirmPassword => CONFIRM_PASSWORD_ERROR,
        };

        if self.value(field).is_empty() || self.accepts(field) {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, message.to_string());
        }
    }
}
