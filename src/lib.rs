//! Contact Card - the export and message-composition core of a single-page
//! contact card.
//!
//! The crate builds a vCard document for a fixed card owner, hands it to a
//! host save-file capability, then collects and validates the visitor's
//! name and email and composes an `sms:` deep link announcing the saved
//! contact. There is no backend and no network; hosts drive the flow
//! through injected capability traits.
//!
//! # Architecture
//!
//! - **models**: Data structures for the card owner and the visitor
//! - **domain**: Validated phone/email value objects
//! - **vcard**: vCard 3.0 document construction
//! - **validate**: Form validation predicates
//! - **compose**: Notification text and `sms:` deep-link composition
//! - **platform**: Host platform-family detection (URI shape only)
//! - **cache**: Visitor-field persistence over a host key-value capability
//! - **host**: Save-file and open-URI capability traits
//! - **scheduler**: Deferred-callback capability for UI sequencing
//! - **session**: The export → prompt → send flow state machine
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types

pub mod cache;
pub mod compose;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod models;
pub mod platform;
pub mod scheduler;
pub mod session;
pub mod validate;
pub mod vcard;

pub use cache::{KeyValueStore, MemoryStore, VisitorCache};
pub use config::Config;
pub use error::{ConfigError, ConfigResult};
pub use host::{FileSaver, UriDispatcher};
pub use models::{OwnerContact, ValidationState, VisitorInput};
pub use platform::{FixedProbe, PlatformFamily, PlatformProbe, UserAgentProbe};
pub use scheduler::{InlineScheduler, Scheduler, TokioScheduler};
pub use session::{CardSession, FieldErrors, FlowState};
