//! Calendar arithmetic for countdowns.
//!
//! Everything in this module is a pure function of its inputs and the
//! reading of an injected [`Clock`]. Dates are civil (local) calendar dates
//! with no time of day; the difference between two of them is an exact
//! number of days, so daylight-saving shifts in the host time zone never
//! move a count by one.
//!
//! # Sign convention
//!
//! | `days` | meaning            | label   |
//! |--------|--------------------|---------|
//! | `> 0`  | target in future   | `D-N`   |
//! | `0`    | target is today    | `D-Day` |
//! | `< 0`  | target in the past | `D+N`   |
//!
//! # Examples
//!
//! ```rust
//! use daycount_core::dates::{FixedClock, calculate_dday, format_dday};
//! use jiff::civil::date;
//!
//! let clock = FixedClock::new(date(2025, 1, 1));
//! let days = calculate_dday("2025-04-11", &clock)?;
//! assert_eq!(days, 100);
//! assert_eq!(format_dday(days), "D-100");
//! # Ok::<(), daycount_core::TrackerError>(())
//! ```

pub mod clock;
pub mod format;
pub mod milestone;

use jiff::civil::Date;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{DateFormatPolicy, English, Korean, Locale, format_date, format_date_short};
pub use milestone::{MILESTONE_OFFSETS, get_milestones, milestone_label, milestones_for};

use crate::error::{Result, TrackerError};

/// Parses a strict `YYYY-MM-DD` string into a calendar date.
///
/// The string must be exactly ten ASCII characters with zero-padded month
/// and day. Values that do not name a real day (month 13, February 30) are
/// rejected rather than rolled over into the following month.
pub fn parse_local_date(input: &str) -> Result<Date> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(TrackerError::invalid_date(input, "expected format YYYY-MM-DD"));
    }

    let year: i16 = input[0..4]
        .parse()
        .map_err(|_| TrackerError::invalid_date(input, "invalid year"))?;
    let month: i8 = input[5..7]
        .parse()
        .map_err(|_| TrackerError::invalid_date(input, "invalid month"))?;
    let day: i8 = input[8..10]
        .parse()
        .map_err(|_| TrackerError::invalid_date(input, "invalid day"))?;

    if !(1..=12).contains(&month) {
        return Err(TrackerError::invalid_date(input, "month must be 01-12"));
    }

    Date::new(year, month, day).map_err(|e| TrackerError::invalid_date(input, e.to_string()))
}

/// Formats a date as `YYYY-MM-DD`.
pub fn to_date_string(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Serde adapter that reads and writes dates through [`parse_local_date`]
/// and [`to_date_string`], for use with `#[serde(with = "...")]`.
pub mod ymd {
    use jiff::civil::Date;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_date_string(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_local_date(&raw).map_err(D::Error::custom)
    }
}

/// Number of days from `today` until `target`; negative when `target` has
/// already passed.
pub fn days_until(today: Date, target: Date) -> Result<i32> {
    Ok(today.until(target)?.get_days())
}

/// Days remaining until the date in `target` as seen from `clock`'s today.
pub fn calculate_dday(target: &str, clock: &dyn Clock) -> Result<i32> {
    let target = parse_local_date(target)?;
    days_until(clock.today(), target)
}

/// Renders a day offset as `D-N`, `D-Day` or `D+N`.
pub fn format_dday(days: i32) -> String {
    match days {
        0 => "D-Day".to_string(),
        d if d > 0 => format!("D-{d}"),
        d => format!("D+{}", d.unsigned_abs()),
    }
}

/// True when the target lies after today.
pub fn is_future(target: &str, clock: &dyn Clock) -> Result<bool> {
    Ok(calculate_dday(target, clock)? > 0)
}

/// True when the target is today.
pub fn is_today(target: &str, clock: &dyn Clock) -> Result<bool> {
    Ok(calculate_dday(target, clock)? == 0)
}

/// True when the target lies before today.
pub fn is_past(target: &str, clock: &dyn Clock) -> Result<bool> {
    Ok(calculate_dday(target, clock)? < 0)
}
