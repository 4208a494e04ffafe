//! Validated request types for creating and updating D-Days.

use jiff::civil::Date;

use super::{Category, DDay};

/// A validated D-Day ready to be stored.
///
/// Produced by [`crate::params::CreateDDay::validate`]; the id and
/// timestamps are assigned when the record is inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDDay {
    pub title: String,
    pub target_date: Date,
    pub category: Category,
    pub emoji: String,
}

/// Partial update of a D-Day. `None` fields are left untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateDDayRequest {
    pub title: Option<String>,
    pub target_date: Option<Date>,
    pub category: Option<Category>,
    /// New emoji; an empty string resets it to the category default
    pub emoji: Option<String>,
}

impl UpdateDDayRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.target_date.is_none()
            && self.category.is_none()
            && self.emoji.is_none()
    }

    /// Applies the request to `dday` and returns the names of the fields
    /// whose value actually changed.
    pub fn apply_to(&self, dday: &mut DDay) -> Vec<String> {
        let mut changes = Vec::new();

        if let Some(title) = self.title.as_ref().filter(|t| **t != dday.title) {
            dday.title = title.clone();
            changes.push("title".to_string());
        }
        if let Some(target_date) = self.target_date.filter(|d| *d != dday.target_date) {
            dday.target_date = target_date;
            changes.push("target date".to_string());
        }
        if let Some(category) = self.category.filter(|c| *c != dday.category) {
            dday.category = category;
            changes.push("category".to_string());
        }
        if let Some(emoji) = &self.emoji {
            let emoji = if emoji.is_empty() {
                dday.category.default_emoji().to_string()
            } else {
                emoji.clone()
            };
            if emoji != dday.emoji {
                dday.emoji = emoji;
                changes.push("emoji".to_string());
            }
        }

        changes
    }
}

impl TryFrom<crate::params::UpdateDDay> for UpdateDDayRequest {
    type Error = crate::TrackerError;

    /// Validates the supplied fields of an [`crate::params::UpdateDDay`].
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - no field supplied, bad title or
    ///   unknown category
    /// * `TrackerError::InvalidDate` - target date is not `YYYY-MM-DD`
    fn try_from(params: crate::params::UpdateDDay) -> Result<Self, Self::Error> {
        params.validate()
    }
}
