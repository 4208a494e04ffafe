//! D-Day summary and detail views computed against a clock.

use jiff::{civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

use super::{DDay, Milestone};
use crate::{
    dates::{Locale, days_until, format_dday, milestones_for},
    error::Result,
};

/// A D-Day together with its countdown as of a particular day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DDaySummary {
    /// The stored record
    #[serde(flatten)]
    pub dday: DDay,
    /// Signed days until the target; negative once it has passed
    pub days: i32,
    /// Countdown tag such as `D-30`, `D-Day` or `D+5`
    pub dday_label: String,
    /// Localized long form of the target date
    pub date_label: String,
    /// Localized category name
    pub category_label: String,
}

impl DDaySummary {
    /// Computes the countdown of `dday` as seen from `today`.
    pub fn new(dday: DDay, today: Date, locale: Locale) -> Result<Self> {
        let days = days_until(today, dday.target_date)?;
        let date_label = locale.policy().long_date(dday.target_date);
        let category_label = dday.category.label_for(locale).to_string();
        Ok(Self {
            dday,
            days,
            dday_label: format_dday(days),
            date_label,
            category_label,
        })
    }

    pub fn is_future(&self) -> bool {
        self.days > 0
    }

    pub fn is_today(&self) -> bool {
        self.days == 0
    }

    pub fn is_past(&self) -> bool {
        self.days < 0
    }
}

/// Everything shown on the detail page of a single D-Day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DDayDetail {
    #[serde(flatten)]
    pub summary: DDaySummary,
    /// Localized creation date, without time of day
    pub created_label: String,
    /// The eight milestone checkpoints, furthest first
    pub milestones: Vec<Milestone>,
}

impl DDayDetail {
    /// Builds the detail view of `dday` as seen from `today`.
    ///
    /// The creation timestamp is converted into `time_zone` before its date
    /// is taken.
    pub fn new(
        dday: DDay,
        today: Date,
        time_zone: &TimeZone,
        locale: Locale,
    ) -> Result<Self> {
        let created = dday.created_at.to_zoned(time_zone.clone()).date();
        let created_label = locale.policy().short_date(created);
        let milestones = milestones_for(dday.target_date, today)?;
        Ok(Self {
            summary: DDaySummary::new(dday, today, locale)?,
            created_label,
            milestones,
        })
    }
}

/// Picks the entry to feature above a listing.
///
/// Upcoming entries (including today) win over past ones; among them the
/// smallest `days` is chosen. With nothing upcoming, the most recently
/// passed entry is chosen. Ties go to the entry that comes first in
/// `summaries`.
pub fn pick_hero(summaries: &[DDaySummary]) -> Option<&DDaySummary> {
    let upcoming = summaries
        .iter()
        .filter(|s| s.days >= 0)
        .reduce(|best, cur| if cur.days < best.days { cur } else { best });

    upcoming.or_else(|| {
        summaries.iter().reduce(|best, cur| {
            if cur.days.unsigned_abs() < best.days.unsigned_abs() {
                cur
            } else {
                best
            }
        })
    })
}
