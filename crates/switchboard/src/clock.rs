//! Timestamp source for the generated banner.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::error::GeneratorError;

/// Supplies the moment a pass ran.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Always returns the same instant. Keeps generated text stable in tests and
/// reproducible builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    /// Pins the clock to `instant`.
    #[must_use]
    pub const fn new(instant: OffsetDateTime) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Formats `instant` in UTC as an RFC 1123 date, for example
/// `Mon, 19 Oct 2026 12:00:00 GMT`.
///
/// # Errors
///
/// Returns [`GeneratorError::Timestamp`] when the instant cannot be
/// formatted.
pub fn rfc1123(instant: OffsetDateTime) -> Result<String, GeneratorError> {
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    Ok(instant.to_offset(UtcOffset::UTC).format(format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    #[rstest]
    #[case(datetime!(2026-10-19 12:00:00 UTC), "Mon, 19 Oct 2026 12:00:00 GMT")]
    #[case(datetime!(2026-10-19 14:30:05 +02:00), "Mon, 19 Oct 2026 12:30:05 GMT")]
    #[case(datetime!(2024-02-29 00:00:00 UTC), "Thu, 29 Feb 2024 00:00:00 GMT")]
    fn formats_as_rfc1123_in_utc(#[case] instant: OffsetDateTime, #[case] expected: &str) {
        let text = rfc1123(instant).unwrap_or_else(|err| panic!("format failed: {err}"));
        assert_eq!(text, expected);
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock::new(datetime!(2026-10-19 12:00:00 UTC));
        assert_eq!(clock.now(), clock.now());
    }
}
