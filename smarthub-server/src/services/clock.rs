use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, Time, UtcOffset};

use crate::configs::Clock;

const OFFSET_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

pub const TIME_OF_DAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// Parses a strict `HH:MM:SS` time of day.
pub fn parse_time_of_day(input: &str) -> Option<Time> {
    Time::parse(input, TIME_OF_DAY_FORMAT).ok()
}

pub fn format_time_of_day(time: Time) -> Result<String, time::error::Format> {
    time.format(TIME_OF_DAY_FORMAT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OffsetSource {
    Fixed(UtcOffset),
    /// Follows the system time zone, including daylight saving changes.
    System,
}

/// Wall clock of the hub's location.
#[derive(Debug, Clone, Copy)]
pub struct LocalClock {
    source: OffsetSource,
}

impl LocalClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self {
            source: OffsetSource::Fixed(offset),
        }
    }

    pub fn system() -> Self {
        Self {
            source: OffsetSource::System,
        }
    }

    pub fn from_config(clock: &Clock) -> Result<Self, time::error::Parse> {
        match &clock.utc_offset {
            Some(offset) => Ok(Self::new(UtcOffset::parse(offset, OFFSET_FORMAT)?)),
            None => Ok(Self::system()),
        }
    }

    /// Offset in effect at `instant`.
    pub fn offset_at(&self, instant: OffsetDateTime) -> UtcOffset {
        match self.source {
            OffsetSource::Fixed(offset) => offset,
            OffsetSource::System => UtcOffset::local_offset_at(instant).unwrap_or_else(|e| {
                tracing::warn!("cannot determine local offset ({}), falling back to UTC", e);
                UtcOffset::UTC
            }),
        }
    }

    pub fn now(&self) -> OffsetDateTime {
        self.to_local(OffsetDateTime::now_utc())
    }

    pub fn to_local(&self, instant: OffsetDateTime) -> OffsetDateTime {
        instant.to_offset(self.offset_at(instant))
    }
}
