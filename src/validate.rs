//! Form validation predicates for the visitor prompt.
//!
//! Both predicates are total: they trim their input, return a plain `bool`,
//! and never panic. The email check is a lightweight syntactic shape test,
//! not full address-spec validation. Its permissiveness is a deliberate
//! product choice; do not tighten it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shape: non-space-non-@ local part, '@', domain containing a '.'.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex"));

/// Inline error shown when the name field fails validation.
pub const NAME_ERROR: &str = "Please enter your full name.";

/// Inline error shown when the email field fails validation.
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";

/// A name is valid when its trimmed length is at least 2 characters.
pub fn is_valid_name(value: &str) -> bool {
    value.trim().chars().count() >= 2
}

/// An email is valid when its trimmed form matches the lightweight
/// `local@domain.tld` shape (no whitespace, no extra '@').
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}
