use contact_card::domain::PhoneNumber;
use contact_card::platform::{PlatformFamily, PlatformProbe, UserAgentProbe};
use contact_card::{compose, Config};

const IPAD_DESKTOP_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                               AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";

#[test]
fn test_notification_uses_configured_owner() {
    let config = Config::default();
    let text = compose::notification_text(&config.owner.first_name, "Jane Smith", "jane@x.com");
    assert_eq!(
        text,
        "Hi Dan, Jane Smith (jane@x.com) just saved your contact and has been added to your network."
    );
}

#[test]
fn test_anonymous_notification() {
    let text = compose::notification_text("Dan", "   ", "");
    assert_eq!(
        text,
        "Hi Dan, A new contact just saved your contact and has been added to your network."
    );
}

#[test]
fn test_deep_link_shape_follows_probe() {
    let phone = PhoneNumber::new("+1 (312) 953-7098").unwrap();

    let desktop = UserAgentProbe::new(IPAD_DESKTOP_UA, "MacIntel", 0);
    assert_eq!(
        compose::sms_uri(&phone, "hi", desktop.family()),
        "sms:+13129537098?body=hi"
    );

    // Same identity string, but touch-first: the iPadOS heuristic kicks in.
    let tablet = UserAgentProbe::new(IPAD_DESKTOP_UA, "MacIntel", 5);
    assert_eq!(tablet.family(), PlatformFamily::Ios);
    assert_eq!(
        compose::sms_uri(&phone, "hi", tablet.family()),
        "sms:+13129537098&body=hi"
    );
}

#[test]
fn test_deep_link_body_is_percent_encoded() {
    let phone = PhoneNumber::new("+13129537098").unwrap();
    let text = compose::notification_text("Dan", "Jane Smith", "jane@x.com");
    let uri = compose::sms_uri(&phone, &text, PlatformFamily::Other);

    assert!(uri.starts_with("sms:+13129537098?body="));
    let body = &uri["sms:+13129537098?body=".len()..];
    assert!(!body.contains(' '));
    assert!(!body.contains('@'));
    assert_eq!(
        urlencoding::decode(body).unwrap().into_owned(),
        text
    );
}
