//! Parameter structures for daycount operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde and an optional JSON schema.
//! Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation lives here as well, so every surface enforces the same
//! request rules: a title of 1 to 30 characters after trimming, a strict
//! `YYYY-MM-DD` target date, and one of the five category tags.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    dates::parse_local_date,
    error::{Result, TrackerError},
    models::{Category, DDayFilter, NewDDay, SortOrder, UpdateDDayRequest},
};

/// Maximum title length, counted in characters.
pub const TITLE_MAX_CHARS: usize = 30;

/// Trims `title` and checks its length.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid_input("title").with_reason("Title is required"));
    }
    let len = trimmed.chars().count();
    if len > TITLE_MAX_CHARS {
        return Err(TrackerError::invalid_input("title").with_reason(format!(
            "Title must be at most {TITLE_MAX_CHARS} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Parses a category tag.
pub fn validate_category(category: &str) -> Result<Category> {
    category.parse().map_err(|_| {
        TrackerError::invalid_input("category").with_reason(format!(
            "Invalid category: {category}. Must be one of anniversary, exam, travel, birthday, custom"
        ))
    })
}

/// Guards destructive operations.
pub fn require_confirmation(confirmed: bool, action: &str) -> Result<()> {
    if confirmed {
        Ok(())
    } else {
        Err(TrackerError::invalid_input("confirmed")
            .with_reason(format!("Refusing to {action} without confirmation")))
    }
}

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_dday and milestones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The UUID of the D-Day to operate on
    pub id: String,
}

/// Parameters for creating a new D-Day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateDDay {
    /// Title of the D-Day (1 to 30 characters)
    pub title: String,
    /// Target date in YYYY-MM-DD format
    pub target_date: String,
    /// One of: anniversary, exam, travel, birthday, custom
    pub category: String,
    /// Optional emoji icon; defaults to the category emoji
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl CreateDDay {
    /// Validate the request and produce a [`NewDDay`].
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - empty or over-long title, unknown
    ///   category
    /// * `TrackerError::InvalidDate` - target date is not a real
    ///   `YYYY-MM-DD` date
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daycount_core::params::CreateDDay;
    ///
    /// let params = CreateDDay {
    ///     title: "  Summer trip  ".to_string(),
    ///     target_date: "2025-08-01".to_string(),
    ///     category: "travel".to_string(),
    ///     emoji: None,
    /// };
    /// let new_dday = params.validate()?;
    /// assert_eq!(new_dday.title, "Summer trip");
    /// assert_eq!(new_dday.emoji, "✈️");
    /// # Ok::<(), daycount_core::TrackerError>(())
    /// ```
    pub fn validate(&self) -> Result<NewDDay> {
        let title = validate_title(&self.title)?;
        let target_date = parse_local_date(&self.target_date)?;
        let category = validate_category(&self.category)?;
        let emoji = match self.emoji.as_deref().map(str::trim) {
            Some(emoji) if !emoji.is_empty() => emoji.to_string(),
            _ => category.default_emoji().to_string(),
        };

        Ok(NewDDay {
            title,
            target_date,
            category,
            emoji,
        })
    }
}

/// Parameters for updating an existing D-Day.
///
/// Only supplied fields are validated and changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateDDay {
    /// The UUID of the D-Day to update
    pub id: String,
    /// New title (1 to 30 characters)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New target date in YYYY-MM-DD format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    /// New category tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New emoji; an empty string resets to the category default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl UpdateDDay {
    /// Validate the supplied fields and build an [`UpdateDDayRequest`].
    pub fn validate(&self) -> Result<UpdateDDayRequest> {
        let request = UpdateDDayRequest {
            title: self.title.as_deref().map(validate_title).transpose()?,
            target_date: self
                .target_date
                .as_deref()
                .map(parse_local_date)
                .transpose()?,
            category: self
                .category
                .as_deref()
                .map(validate_category)
                .transpose()?,
            emoji: self.emoji.as_deref().map(|e| e.trim().to_string()),
        };

        if request.is_empty() {
            return Err(TrackerError::invalid_input("update").with_reason(
                "At least one of title, target_date, category or emoji must be provided",
            ));
        }

        Ok(request)
    }
}

/// Parameters for listing D-Days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListDDays {
    /// Category tag to filter by, or "all"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Sort order: nearest (default), farthest, name, created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListDDays {
    /// Resolve the filter and sort order.
    pub fn validate(&self) -> Result<(DDayFilter, SortOrder)> {
        let filter = match self.category.as_deref() {
            None => DDayFilter::default(),
            Some(c) if c.eq_ignore_ascii_case("all") => DDayFilter::default(),
            Some(c) => DDayFilter::for_category(validate_category(c)?),
        };

        let sort = match self.sort.as_deref() {
            None => SortOrder::default(),
            Some(s) => s.parse().map_err(|_| {
                TrackerError::invalid_input("sort").with_reason(format!(
                    "Invalid sort: {s}. Must be one of nearest, farthest, name, created"
                ))
            })?,
        };

        Ok((filter, sort))
    }
}

/// Parameters for deleting a single D-Day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteDDay {
    /// The UUID of the D-Day to delete
    pub id: String,
    /// Must be true to confirm the deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for deleting every D-Day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteAll {
    /// Must be true to confirm the deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for importing D-Days from a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ImportDDays {
    /// An export envelope `{"version", "exportedAt", "data"}` or a bare
    /// array of D-Days. Replaces all existing entries.
    pub json: String,
}

/// Parameters for exporting every D-Day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExportDDays {}
