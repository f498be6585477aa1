//! Submission payloads and the collaborator that receives them. Payloads carry
//! raw passwords, so their `Debug` output redacts them and they must never be
//! logged through `Serialize`.

use super::FormKind;
use serde::Serialize;
use std::fmt;
use tracing::info;

const REDACTED: &str = "[redacted]";

/// Values handed over by a valid form.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubmissionPayload {
    Login {
        email: String,
        password: String,
    },
    Signup {
        email: String,
        password: String,
        #[serde(rename = "confirmPassword")]
        confirm_password: String,
    },
    Forgot {
        email: String,
    },
}

impl SubmissionPayload {
    #[must_use]
    pub fn kind(&self) -> FormKind {
        match self {
            SubmissionPayload::Login { .. } => FormKind::Login,
            SubmissionPayload::Signup { .. } => FormKind::Signup,
            SubmissionPayload::Forgot { .. } => FormKind::Forgot,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            SubmissionPayload::Login { email, .. }
            | SubmissionPayload::Signup { email, .. }
            | SubmissionPayload::Forgot { email } => email,
        }
    }
}

impl fmt::Debug for SubmissionPayload {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionPayload::Login { email, .. } => formatter
                .debug_struct("Login")
                .field("email", email)
                .field("password", &REDACTED)
                .finish(),
            SubmissionPayload::Signup { email, .. } => formatter
                .debug_struct("Signup")
                .field("email", email)
                .field("password", &REDACTED)
                .field("confirm_password", &REDACTED)
                .finish(),
            SubmissionPayload::Forgot { email } => formatter
                .debug_struct("Forgot")
                .field("email", email)
                .finish(),
        }
    }
}

/// Receives the payload of a form that passed validation.
pub trait Submitter {
    fn submit(&self, payload: &SubmissionPayload);
}

/// Default submitter: records the submission and sends nothing anywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, payload: &SubmissionPayload) {
        info!(form = %payload.kind(), email = payload.email(), ?payload, "form submitted");
    }
}
