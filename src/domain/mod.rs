//! Domain value objects and types.
//!
//! Type-safe wrappers for the card owner's email address and phone number.
//! These value objects validate at construction time so an invalid owner
//! record cannot be represented in the system.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
