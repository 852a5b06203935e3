//! Host platform family detection.
//!
//! The only platform-specific behavior in the system is the separator in
//! the `sms:` deep link: the iOS family wants `&body=`, everyone else
//! (Android, desktop fallback) wants `?body=`. Detection sniffs the host's
//! reported identity string plus a touch heuristic for iPads that report a
//! desktop identity. It is best-effort by design: when inconclusive, the
//! answer is `Other` and the `?body=` shape is used.

use once_cell::sync::Lazy;
use regex::Regex;

static IOS_DEVICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"iPad|iPhone|iPod").expect("Failed to compile device regex"));

/// The two platform families the deep-link composer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    /// iPhone/iPad/iPod family; uses the `&body=` URI shape.
    Ios,

    /// Everything else, including the desktop fallback; uses `?body=`.
    Other,
}

/// Injectable capability query for the host's platform family.
///
/// The message composer only ever asks this one question, so tests can
/// substitute a [`FixedProbe`] and never touch a real host environment.
pub trait PlatformProbe: Send + Sync {
    /// Report which family the host belongs to.
    fn family(&self) -> PlatformFamily;
}

/// Probe over the host environment's reported identity.
///
/// `platform_name` and `max_touch_points` cover iPadOS tablets that
/// report a desktop-like identity ("MacIntel") while being touch-first.
#[derive(Debug, Clone)]
pub struct UserAgentProbe {
    user_agent: String,
    platform_name: String,
    max_touch_points: u32,
}

impl UserAgentProbe {
    /// Create a probe from the host's identity signals.
    pub fn new(
        user_agent: impl Into<String>,
        platform_name: impl Into<String>,
        max_touch_points: u32,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            platform_name: platform_name.into(),
            max_touch_points,
        }
    }

    fn detect(&self) -> PlatformFamily {
        if IOS_DEVICE.is_match(&self.user_agent) {
            return PlatformFamily::Ios;
        }

        // iPadOS reports a Mac identity but is touch-first.
        if self.platform_name == "MacIntel" && self.max_touch_points > 1 {
            return PlatformFamily::Ios;
        }

        PlatformFamily::Other
    }
}

impl PlatformProbe for UserAgentProbe {
    fn family(&self) -> PlatformFamily {
        self.detect()
    }
}

/// A probe that always reports the same family. Test helper.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub PlatformFamily);

impl PlatformProbe for FixedProbe {
    fn family(&self) -> PlatformFamily {
        self.0
    }
}
