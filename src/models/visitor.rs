//! Visitor input model and its derived validation state.

use crate::validate;
use serde::{Deserialize, Serialize};

/// The two free-text fields the visitor fills in before sending a text.
///
/// Created empty, updated on every keystroke, and optionally restored
/// from the host key-value cache across sessions. Mutation happens only
/// on the single UI thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorInput {
    /// The visitor's full name, as typed (untrimmed).
    pub name: String,

    /// The visitor's email address, as typed (untrimmed).
    pub email: String,
}

impl VisitorInput {
    /// Create an empty input record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the derived validation state; nothing is stored.
    pub fn validation(&self) -> ValidationState {
        ValidationState {
            name_valid: validate::is_valid_name(&self.name),
            email_valid: validate::is_valid_email(&self.email),
        }
    }
}

/// Derived per-field validity, computed on demand from [`VisitorInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationState {
    /// Trimmed name is at least 2 characters.
    pub name_valid: bool,

    /// Trimmed email matches the lightweight syntactic shape.
    pub email_valid: bool,
}

impl ValidationState {
    /// Both fields pass; submission may proceed.
    pub fn all_valid(&self) -> bool {
        self.name_valid && self.email_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_invalid() {
        let input = VisitorInput::new();
        let state = input.validation();
        assert!(!state.name_valid);
        assert!(!state.email_valid);
        assert!(!state.all_valid());
    }

    #[test]
    fn test_valid_input() {
        let input = VisitorInput {
            name: "Jane Smith".to_string(),
            email: "jane@x.com".to_string(),
        };
        assert!(input.validation().all_valid());
    }

    #[test]
    fn test_partial_input() {
        let input = VisitorInput {
            name: "Jane Smith".to_string(),
            email: "jane@x".to_string(),
        };
        let state = input.validation();
        assert!(state.name_valid);
        assert!(!state.email_valid);
        assert!(!state.all_valid());
    }
}
