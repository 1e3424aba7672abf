use std::sync::LazyLock;

use regex::Regex;

use crate::errors::DurationError;

static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<hours>[0-9]+)h)?(?:(?P<minutes>[0-9]+)m)?(?:(?P<seconds>[0-9]+)s)?$")
        .expect("duration pattern is valid")
});

/// Component breakdown of a compact duration such as `1h30m`.
///
/// Absent components are zero, so `""` is the zero-length duration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ParsedDuration {
    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// The part of the duration left after whole days, which is all that
    /// moves a time of day.
    pub fn within_day(&self) -> time::Duration {
        time::Duration::seconds((self.total_seconds() % 86_400) as i64)
    }
}

/// Parses `[<int>h][<int>m][<int>s]`, components in that order and without
/// separators.
pub fn parse_duration(input: &str) -> Result<ParsedDuration, DurationError> {
    let captures = DURATION_PATTERN
        .captures(input)
        .ok_or_else(|| DurationError::InvalidFormat(input.to_string()))?;

    let component = |name: &str| -> Result<u64, DurationError> {
        captures
            .name(name)
            .map(|value| value.as_str().parse::<u64>())
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|_| DurationError::Overflow(input.to_string()))
    };

    let duration = ParsedDuration {
        hours: component("hours")?,
        minutes: component("minutes")?,
        seconds: component("seconds")?,
    };

    // i64 seconds is the range time::Duration arithmetic accepts
    duration
        .hours
        .checked_mul(3600)
        .and_then(|total| total.checked_add(duration.minutes.checked_mul(60)?))
        .and_then(|total| total.checked_add(duration.seconds))
        .filter(|total| *total <= i64::MAX as u64)
        .ok_or_else(|| DurationError::Overflow(input.to_string()))?;

    Ok(duration)
}
