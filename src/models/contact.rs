//! Owner contact model — the person whose card the page presents.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// The card owner's contact record.
///
/// Immutable once constructed: the record is defined at startup (from
/// configuration or a literal) and never mutated for the life of the
/// session. The visitor is a different person entirely and lives in
/// [`crate::models::VisitorInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerContact {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Mobile number in E.164-ish form (validated wrapper)
    pub phone: PhoneNumber,

    /// Primary email address (validated wrapper)
    pub email: EmailAddress,
}

impl OwnerContact {
    /// Build an owner record, validating phone and email.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the phone or email is malformed.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
        })
    }

    /// Formatted name: "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Suggested filename for the exported card, e.g. "Dan_Donahue.vcf".
    pub fn vcf_filename(&self) -> String {
        format!("{}_{}.vcf", self.first_name, self.last_name)
    }
}
