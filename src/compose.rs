//! Notification text and `sms:` deep-link composition.

use crate::domain::PhoneNumber;
use crate::platform::PlatformFamily;

/// Fallback used when the visitor left both fields empty.
const ANONYMOUS_WHO: &str = "A new contact";

/// Build the notification sentence announcing the saved contact.
///
/// `<who>` is the trimmed visitor name followed by the trimmed email in
/// parentheses when present; when both are empty the literal
/// "A new contact" stands in. The submit path requires both fields valid,
/// so the name-absent-email-present case only arises when calling this
/// directly; it follows the same join rule (the parenthesized email alone).
pub fn notification_text(owner_first_name: &str, visitor_name: &str, visitor_email: &str) -> String {
    let name = visitor_name.trim();
    let email = visitor_email.trim();

    let mut parts: Vec<String> = Vec::new();
    if !name.is_empty() {
        parts.push(name.to_string());
    }
    if !email.is_empty() {
        parts.push(format!("({})", email));
    }

    let who = if parts.is_empty() {
        ANONYMOUS_WHO.to_string()
    } else {
        parts.join(" ")
    };

    format!(
        "Hi {}, {} just saved your contact and has been added to your network.",
        owner_first_name, who
    )
}

/// Build the messaging-app deep link for the given platform family.
///
/// The iOS family joins the body with `&`; everything else, including the
/// desktop fallback, uses `?`. The body is percent-encoded and the phone
/// number reduced to its digits-and-leading-plus form.
pub fn sms_uri(phone: &PhoneNumber, message: &str, family: PlatformFamily) -> String {
    let separator = match family {
        PlatformFamily::Ios => '&',
        PlatformFamily::Other => '?',
    };
    format!(
        "sms:{}{}body={}",
        phone.sms_normalized(),
        separator,
        urlencoding::encode(message)
    )
}
