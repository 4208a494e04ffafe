//! Milestone checkpoint record.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One checkpoint on the countdown timeline of a target date.
///
/// Milestones are computed on demand and never stored. Exactly one of
/// `is_passed` and `is_current` can hold: `is_current` iff
/// `days_from_today == 0`, `is_passed` iff `days_from_today < 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Display tag such as `D-100` or `D-Day`
    pub label: String,

    /// Days before the target this milestone sits at
    pub offset: i32,

    /// Calendar date of the milestone
    #[serde(with = "crate::dates::ymd")]
    pub date: Date,

    /// Signed day offset of `date` from today
    pub days_from_today: i32,

    /// The milestone date is before today
    pub is_passed: bool,

    /// The milestone date is today
    pub is_current: bool,
}
