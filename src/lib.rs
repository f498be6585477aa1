//! Client-side login, signup and forgot-password forms.
//!
//! The crate splits into a platform-independent core and a Leptos frontend
//! that is only compiled for `wasm32`:
//!
//! - [`validation`]: email and password predicates shared by every form.
//! - [`form`]: per-page form state, error messages and submission.
//! - [`nav`]: route paths and the route-aware header link.
//! - [`config`], [`logging`], [`build_info`]: ambient setup for the app.
//!
//! Nothing here talks to a server. A valid submission is handed to a
//! [`form::Submitter`]; the default one only logs it with passwords redacted.

pub mod build_info;
pub mod config;
pub mod form;
pub mod logging;
pub mod nav;
pub mod validation;
