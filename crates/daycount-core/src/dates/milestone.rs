//! Fixed milestone checkpoints leading up to a target date.

use jiff::{ToSpan, civil::Date};

use super::{Clock, days_until, parse_local_date};
use crate::{error::Result, models::Milestone};

/// Offsets, in days before the target, at which milestones fall. The order
/// is the display order of the timeline.
pub const MILESTONE_OFFSETS: [i32; 8] = [100, 50, 30, 10, 7, 3, 1, 0];

/// Display tag for a milestone `offset` days before the target.
pub fn milestone_label(offset: i32) -> String {
    if offset == 0 {
        "D-Day".to_string()
    } else {
        format!("D-{offset}")
    }
}

/// Builds the milestone timeline for `target` as seen from `today`.
///
/// Always returns one entry per [`MILESTONE_OFFSETS`] element, in that
/// order, whether or not the milestone has passed.
pub fn milestones_for(target: Date, today: Date) -> Result<Vec<Milestone>> {
    MILESTONE_OFFSETS
        .iter()
        .map(|&offset| -> Result<Milestone> {
            let date = target.checked_sub(offset.days())?;
            let days_from_today = days_until(today, date)?;
            Ok(Milestone {
                label: milestone_label(offset),
                offset,
                date,
                days_from_today,
                is_passed: days_from_today < 0,
                is_current: days_from_today == 0,
            })
        })
        .collect()
}

/// Milestone timeline for a `YYYY-MM-DD` target string.
pub fn get_milestones(target: &str, clock: &dyn Clock) -> Result<Vec<Milestone>> {
    milestones_for(parse_local_date(target)?, clock.today())
}
