//! Locale-specific rendering of calendar dates.
//!
//! Arithmetic never depends on these tables; a [`DateFormatPolicy`] only
//! decides how a finished date is spelled out for display.

use std::{fmt, str::FromStr};

use jiff::{Timestamp, civil::Date, civil::DateTime, tz::TimeZone};
use serde::{Deserialize, Serialize};

use super::parse_local_date;
use crate::error::{Result, TrackerError};

/// Strategy for turning a date into display text.
pub trait DateFormatPolicy: Send + Sync {
    /// Day-of-week labels, indexed with Sunday at 0.
    fn weekday_labels(&self) -> [&'static str; 7];

    /// Year, month and day without the day of the week.
    fn short_date(&self, date: Date) -> String;

    /// Year, month and day followed by the day of the week.
    fn long_date(&self, date: Date) -> String {
        let index = date.weekday().to_sunday_zero_offset() as usize;
        format!("{} ({})", self.short_date(date), self.weekday_labels()[index])
    }
}

/// Korean calendar notation: `2026년 3월 1일 (일)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Korean;

impl DateFormatPolicy for Korean {
    fn weekday_labels(&self) -> [&'static str; 7] {
        ["일", "월", "화", "수", "목", "금", "토"]
    }

    fn short_date(&self, date: Date) -> String {
        format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
    }
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English notation: `Sun, March 1, 2026`.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl DateFormatPolicy for English {
    fn weekday_labels(&self) -> [&'static str; 7] {
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
    }

    fn short_date(&self, date: Date) -> String {
        let month = ENGLISH_MONTHS[(date.month() - 1) as usize];
        format!("{} {}, {}", month, date.day(), date.year())
    }

    fn long_date(&self, date: Date) -> String {
        let index = date.weekday().to_sunday_zero_offset() as usize;
        format!("{}, {}", self.weekday_labels()[index], self.short_date(date))
    }
}

/// Selectable display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Korean labels
    #[default]
    Ko,
    /// English labels
    En,
}

impl Locale {
    /// The formatting policy for this locale.
    pub fn policy(self) -> &'static dyn DateFormatPolicy {
        match self {
            Locale::Ko => &Korean,
            Locale::En => &English,
        }
    }

    /// Short tag used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" | "korean" => Ok(Locale::Ko),
            "en" | "english" => Ok(Locale::En),
            _ => Err(format!("Invalid locale: {s}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Long-form date with weekday for a `YYYY-MM-DD` string.
pub fn format_date(date: &str, policy: &dyn DateFormatPolicy) -> Result<String> {
    Ok(policy.long_date(parse_local_date(date)?))
}

/// Short-form date for a full ISO 8601 date-time.
///
/// Instants carrying an offset (`2026-03-01T09:30:00Z`,
/// `2026-03-01T09:30:00+09:00`) are converted into `time_zone` first, so the
/// rendered day is the local day. Offset-less date-times are taken to
/// already be local.
pub fn format_date_short(
    iso: &str,
    time_zone: &TimeZone,
    policy: &dyn DateFormatPolicy,
) -> Result<String> {
    let local = if let Ok(instant) = iso.parse::<Timestamp>() {
        instant.to_zoned(time_zone.clone()).date()
    } else if let Ok(civil) = iso.parse::<DateTime>() {
        civil.date()
    } else {
        return Err(TrackerError::invalid_date(
            iso,
            "expected an ISO 8601 date-time",
        ));
    };
    Ok(policy.short_date(local))
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::Offset};

    use super::*;

    #[test]
    fn test_korean_long_date() {
        // 2026-03-01 is a Sunday.
        assert_eq!(Korean.long_date(date(2026, 3, 1)), "2026년 3월 1일 (일)");
        assert_eq!(Korean.long_date(date(2025, 6, 14)), "2025년 6월 14일 (토)");
    }

    #[test]
    fn test_english_long_date() {
        assert_eq!(English.long_date(date(2026, 3, 1)), "Sun, March 1, 2026");
        assert_eq!(English.short_date(date(2025, 12, 25)), "December 25, 2025");
    }

    #[test]
    fn test_weekday_table_covers_full_week() {
        let start = date(2025, 6, 15); // Sunday
        let labels: Vec<String> = (0..7)
            .map(|i| {
                let day = start.checked_add(jiff::Span::new().days(i)).unwrap();
                Korean.long_date(day)
            })
            .collect();
        for (label, expected) in labels.iter().zip(Korean.weekday_labels()) {
            assert!(label.ends_with(&format!("({expected})")), "{label}");
        }
    }

    #[test]
    fn test_format_date_from_string() {
        assert_eq!(
            format_date("2026-03-01", &Korean).unwrap(),
            "2026년 3월 1일 (일)"
        );
        assert!(format_date("2026-3-1", &Korean).is_err());
    }

    #[test]
    fn test_format_date_short_converts_to_local_day() {
        let seoul = TimeZone::fixed(Offset::constant(9));
        // 20:00 UTC is already the next morning in UTC+9.
        assert_eq!(
            format_date_short("2026-02-28T20:00:00Z", &seoul, &Korean).unwrap(),
            "2026년 3월 1일"
        );
        assert_eq!(
            format_date_short("2026-02-28T20:00:00Z", &TimeZone::UTC, &Korean).unwrap(),
            "2026년 2월 28일"
        );
    }

    #[test]
    fn test_format_date_short_accepts_civil_datetime() {
        assert_eq!(
            format_date_short("2026-03-01T10:15:00", &TimeZone::UTC, &English).unwrap(),
            "March 1, 2026"
        );
    }

    #[test]
    fn test_format_date_short_rejects_garbage() {
        assert!(format_date_short("yesterday", &TimeZone::UTC, &Korean).is_err());
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("ko".parse::<Locale>().unwrap(), Locale::Ko);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Ko);
    }
}
