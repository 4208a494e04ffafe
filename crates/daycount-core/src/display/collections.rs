//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::{
    dates::Locale,
    models::{Category, DDayFilter, DDaySummary, Milestone, SortOrder},
};

/// Newtype wrapper for displaying collections of D-Day summaries.
///
/// # Examples
///
/// ```rust
/// use daycount_core::{
///     dates::Locale,
///     display::DDaySummaries,
///     models::{Category, DDay, DDaySummary},
/// };
/// use jiff::{Timestamp, civil::date};
///
/// let dday = DDay {
///     id: "1".to_string(),
///     title: "Trip to Jeju".to_string(),
///     target_date: date(2025, 8, 1),
///     category: Category::Travel,
///     emoji: "✈️".to_string(),
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
/// let summary = DDaySummary::new(dday, date(2025, 7, 1), Locale::En)?;
///
/// let summaries = DDaySummaries(vec![summary]);
/// let output = format!("{}", summaries);
/// assert!(output.contains("Trip to Jeju `D-31`"));
/// # Ok::<(), daycount_core::TrackerError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct DDaySummaries(pub Vec<DDaySummary>);

impl DDaySummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DDaySummary> {
        self.0.iter()
    }
}

impl Index<usize> for DDaySummaries {
    type Output = DDaySummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for DDaySummaries {
    type Item = DDaySummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DDaySummaries {
    type Item = &'a DDaySummary;
    type IntoIter = std::slice::Iter<'a, DDaySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DDaySummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No D-Days found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// The milestone checkpoints of one D-Day.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneTimeline {
    pub title: String,
    pub milestones: Vec<Milestone>,
}

impl fmt::Display for MilestoneTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Milestones for {}", self.title)?;
        writeln!(f)?;
        for milestone in &self.milestones {
            write!(f, "{milestone}")?;
        }
        Ok(())
    }
}

/// Home view: the featured entry above the filtered, sorted list.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub hero: Option<DDaySummary>,
    pub entries: DDaySummaries,
    pub filter: DDayFilter,
    pub sort: SortOrder,
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(hero) = &self.hero else {
            return writeln!(f, "No D-Days yet. Add one with `dday add`.");
        };

        writeln!(f, "> {} **{}**", hero.dday.emoji, hero.dday.title)?;
        writeln!(f, ">")?;
        writeln!(f, "> # {}", hero.dday_label)?;
        writeln!(f, ">")?;
        writeln!(f, "> {}", hero.date_label)?;
        writeln!(f)?;

        let scope = match self.filter.category {
            Some(category) => format!(" in {category}"),
            None => String::new(),
        };
        let noun = if self.entries.len() == 1 { "D-Day" } else { "D-Days" };
        writeln!(
            f,
            "{} {noun}{scope}, sorted by {}",
            self.entries.len(),
            self.sort
        )?;
        writeln!(f)?;

        if self.entries.is_empty() {
            writeln!(f, "No D-Days in this category.")
        } else {
            write!(f, "{}", self.entries)
        }
    }
}

/// Every category with its labels and suggested emoji.
#[derive(Debug, Clone, Copy)]
pub struct CategoryList {
    locale: Locale,
}

impl CategoryList {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl fmt::Display for CategoryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| Category | Label | Default | Suggestions |")?;
        writeln!(f, "|---|---|---|---|")?;
        for category in Category::ALL {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                category.as_str(),
                category.label_for(self.locale),
                category.default_emoji(),
                category.suggested_emojis().join(" ")
            )?;
        }
        Ok(())
    }
}
