//! Data models for the card owner and the visitor.

pub mod contact;
pub mod visitor;

pub use contact::OwnerContact;
pub use visitor::{ValidationState, VisitorInput};
