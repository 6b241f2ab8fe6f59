//! # Form State
//!
//! Immutable snapshots for the cookie-preference panel and the registration
//! form. Every field has one named transition that returns a new snapshot;
//! nothing here performs submission.

pub mod cookies;
pub mod registration;

pub use cookies::{CookieCategory, CookiePreferences};
pub use registration::{Field, FieldError, RegistrationForm, ValidRegistration};
