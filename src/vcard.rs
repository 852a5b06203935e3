//! vCard 3.0 document construction.
//!
//! Line-oriented serialization of the owner record: BEGIN/END markers,
//! a structured name, a formatted name, a typed telephone, and an email,
//! each line terminated with CRLF per the format's convention. The input
//! is fixed at startup, so building never fails.

use crate::models::OwnerContact;

/// MIME type handed to the host save-file capability alongside the bytes.
pub const MIME_TYPE: &str = "text/vcard;charset=utf-8";

/// Serialize the owner record to a vCard 3.0 document.
///
/// Deterministic: the same record always yields byte-identical output.
/// There is no trailing CRLF after `END:VCARD`.
pub fn build(contact: &OwnerContact) -> String {
    let lines = [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{};{};;;", contact.last_name, contact.first_name),
        format!("FN:{}", contact.full_name()),
        format!("TEL;TYPE=CELL:{}", contact.phone.as_str()),
        format!("EMAIL:{}", contact.email.as_str()),
        "END:VCARD".to_string(),
    ];
    lines.join("\r\n")
}
