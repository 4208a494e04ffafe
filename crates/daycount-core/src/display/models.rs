//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it with termimad and the MCP
//! server can hand it to a client unchanged.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    dates::{format_dday, to_date_string},
    models::{Category, DDay, DDayDetail, DDaySummary, Milestone},
};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} {}", self.emoji, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Target date: {}", to_date_string(self.target_date))?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Created: {}", LocalDateTime::system(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime::system(&self.updated_at))
    }
}

impl fmt::Display for DDaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} {} `{}`",
            self.dday.emoji, self.dday.title, self.dday_label
        )?;
        writeln!(f)?;
        writeln!(f, "- **Date**: {}", self.date_label)?;
        writeln!(f, "- **Category**: {}", self.category_label)?;
        writeln!(f, "- **ID**: {}", self.dday.id)?;
        writeln!(f)
    }
}

impl Milestone {
    /// Marker for the timeline: passed, current or still ahead.
    pub fn icon(&self) -> &'static str {
        if self.is_current {
            "➤"
        } else if self.is_passed {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let when = if self.is_current {
            "today".to_string()
        } else {
            format_dday(self.days_from_today)
        };
        writeln!(
            f,
            "- {} **{}** {} ({when})",
            self.icon(),
            self.label,
            to_date_string(self.date)
        )
    }
}

impl fmt::Display for DDayDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;
        writeln!(f, "# {} {}", summary.dday.emoji, summary.dday.title)?;
        writeln!(f)?;
        writeln!(f, "**{}** {}", summary.dday_label, summary.date_label)?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", summary.category_label)?;
        writeln!(f, "- Created: {}", self.created_label)?;
        writeln!(f, "- ID: {}", summary.dday.id)?;

        writeln!(f, "\n## Milestones")?;
        writeln!(f)?;
        for milestone in &self.milestones {
            write!(f, "{milestone}")?;
        }
        Ok(())
    }
}
