//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// Validation is basic: at least one digit, and only common formatting
/// characters. The stored form preserves formatting; `sms_normalized`
/// produces the form that goes into an `sms:` deep link.
///
/// # Example
///
/// ```
/// use contact_card::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (312) 953-7098").unwrap();
/// assert_eq!(phone.sms_normalized(), "+13129537098");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain at least one digit
    /// - Can contain: digits, spaces, hyphens, parentheses, plus sign, periods
    /// - Must not be empty
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        if phone.is_empty() {
            return false;
        }

        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }

        phone.chars().all(|c| {
            c.is_ascii_digit()
                || c == ' '
                || c == '-'
                || c == '('
                || c == ')'
                || c == '+'
                || c == '.'
        })
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Digits-and-leading-plus form used inside `sms:` URIs.
    ///
    /// Everything except digits is stripped; a leading '+' survives when
    /// the stored number starts with one.
    pub fn sms_normalized(&self) -> String {
        let digits = self.digits_only();
        if self.0.trim_start().starts_with('+') {
            format!("+{}", digits)
        } else {
            digits
        }
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
