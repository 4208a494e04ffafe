//! D-Day record definition.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

use super::Category;

/// A named target date tracked by the user.
///
/// The JSON form uses camelCase keys so exported files stay compatible with
/// the browser edition of the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DDay {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Title of the entry (1 to 30 characters)
    pub title: String,

    /// The date being counted towards or from
    #[serde(with = "crate::dates::ymd")]
    pub target_date: Date,

    /// Category tag
    pub category: Category,

    /// Emoji icon shown next to the title
    pub emoji: String,

    /// Timestamp when the entry was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the entry was last modified (UTC)
    pub updated_at: Timestamp,
}
