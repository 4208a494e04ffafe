//! Timestamp display utilities.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// A `Timestamp` rendered in a particular time zone as
/// `YYYY-MM-DD HH:MM TZ`.
///
/// # Examples
///
/// ```rust
/// use daycount_core::display::LocalDateTime;
/// use jiff::{Timestamp, tz::TimeZone};
///
/// let ts = Timestamp::from_second(1735689600).unwrap();
/// let shown = LocalDateTime::in_zone(&ts, TimeZone::UTC).to_string();
/// assert_eq!(shown, "2025-01-01 00:00 UTC");
/// ```
pub struct LocalDateTime<'a> {
    timestamp: &'a Timestamp,
    time_zone: TimeZone,
}

impl<'a> LocalDateTime<'a> {
    /// Render in the host's system time zone.
    pub fn system(timestamp: &'a Timestamp) -> Self {
        Self::in_zone(timestamp, TimeZone::system())
    }

    pub fn in_zone(timestamp: &'a Timestamp, time_zone: TimeZone) -> Self {
        Self {
            timestamp,
            time_zone,
        }
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp
                .to_zoned(self.time_zone.clone())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}
