mod alert;
mod button;
mod card;
mod field;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use card::AuthCard;
pub(crate) use field::{PasswordField, TextField};
