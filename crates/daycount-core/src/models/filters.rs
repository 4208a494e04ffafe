//! Filter and ordering options for listing D-Days.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Category, DDaySummary};

/// Filter options for querying D-Days.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DDayFilter {
    /// Only entries tagged with this category; `None` means all categories
    pub category: Option<Category>,
}

impl DDayFilter {
    /// Filter matching a single category.
    pub fn for_category(category: Category) -> Self {
        Self {
            category: Some(category),
        }
    }
}

/// Ordering applied to a listing of D-Day summaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Closest to today first, counting past and future alike
    #[default]
    Nearest,
    /// Furthest from today first
    Farthest,
    /// Alphabetical by title, case-insensitive
    Name,
    /// Most recently created first
    Created,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Nearest => "nearest",
            SortOrder::Farthest => "farthest",
            SortOrder::Name => "name",
            SortOrder::Created => "created",
        }
    }

    /// Sorts `summaries` in place. The sort is stable, so entries that
    /// compare equal keep their storage order.
    pub fn sort(&self, summaries: &mut [DDaySummary]) {
        match self {
            SortOrder::Nearest => summaries.sort_by_key(|s| s.days.unsigned_abs()),
            SortOrder::Farthest => {
                summaries.sort_by_key(|s| std::cmp::Reverse(s.days.unsigned_abs()))
            }
            SortOrder::Name => summaries.sort_by_cached_key(|s| s.dday.title.to_lowercase()),
            SortOrder::Created => {
                summaries.sort_by_key(|s| std::cmp::Reverse(s.dday.created_at))
            }
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" | "date-asc" => Ok(SortOrder::Nearest),
            "farthest" | "date-desc" => Ok(SortOrder::Farthest),
            "name" => Ok(SortOrder::Name),
            "created" => Ok(SortOrder::Created),
            _ => Err(format!("Invalid sort order: {s}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
