//! Time sources for "today".
//!
//! Every countdown is relative to the current local date. Reading the wall
//! clock is isolated behind [`Clock`] so callers can pin "today" to a known
//! value instead of sampling the system clock. Record timestamps come from
//! the same source.

use jiff::{Timestamp, Zoned, civil::Date, tz::TimeZone};

/// Source of the current local calendar date and instant.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Today's date in the local calendar, truncated to midnight.
    fn today(&self) -> Date;

    /// Time zone used to localize full timestamps.
    fn time_zone(&self) -> TimeZone;

    /// The instant stamped on created, updated and exported records.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the host's wall clock and system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }

    fn time_zone(&self) -> TimeZone {
        TimeZone::system()
    }

    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock frozen on a single date.
///
/// The time of day still follows the wall clock, so records created in one
/// run keep their order while landing on the pinned date.
///
/// # Examples
///
/// ```rust
/// use daycount_core::dates::{Clock, FixedClock};
/// use jiff::civil::date;
///
/// let clock = FixedClock::new(date(2025, 1, 1));
/// assert_eq!(clock.today(), date(2025, 1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Date,
    time_zone: TimeZone,
}

impl FixedClock {
    /// Pin today to `today`, localizing timestamps in UTC.
    pub fn new(today: Date) -> Self {
        Self {
            today,
            time_zone: TimeZone::UTC,
        }
    }

    /// Pin today to `today`, localizing timestamps in the system time zone.
    ///
    /// Only the date is pinned; labels derived from timestamps match what
    /// [`SystemClock`] would show.
    pub fn local(today: Date) -> Self {
        Self::new(today).with_time_zone(TimeZone::system())
    }

    /// Use `time_zone` when localizing timestamps.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.today
    }

    fn time_zone(&self) -> TimeZone {
        self.time_zone.clone()
    }

    fn now(&self) -> Timestamp {
        let wall = Zoned::now().with_time_zone(self.time_zone.clone());
        self.today
            .to_datetime(wall.time())
            .to_zoned(self.time_zone.clone())
            .map_or_else(|_| wall.timestamp(), |pinned| pinned.timestamp())
    }
}
