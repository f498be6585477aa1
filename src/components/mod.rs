//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod theme;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, AuthCard, Button, PasswordField, TextField};
