//! Category tags for D-Day entries.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dates::Locale;

/// Type-safe enumeration of D-Day categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Relationship anniversaries and other recurring celebrations
    Anniversary,
    /// Exams and deadlines
    Exam,
    /// Trips and departures
    Travel,
    /// Birthdays
    Birthday,
    /// Anything else
    #[default]
    Custom,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 5] = [
        Category::Anniversary,
        Category::Exam,
        Category::Travel,
        Category::Birthday,
        Category::Custom,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Anniversary => "anniversary",
            Category::Exam => "exam",
            Category::Travel => "travel",
            Category::Birthday => "birthday",
            Category::Custom => "custom",
        }
    }

    /// Emoji used when an entry does not pick its own.
    pub fn default_emoji(&self) -> &'static str {
        match self {
            Category::Anniversary => "❤️",
            Category::Exam => "📚",
            Category::Travel => "✈️",
            Category::Birthday => "🎂",
            Category::Custom => "📅",
        }
    }

    /// Suggested emoji for the picker, default first.
    pub fn suggested_emojis(&self) -> &'static [&'static str] {
        match self {
            Category::Anniversary => &["❤️", "💕", "💞", "🎁", "💍", "💐", "✨", "🌟", "🎀", "💌"],
            Category::Exam => &["📚", "✏️", "🎓", "📝", "🏆", "💪", "🎯", "💡", "🧠", "💯"],
            Category::Travel => &["✈️", "🌏", "🧳", "🌴", "🌄", "📷", "🧭", "🗺️", "🏖️", "🚀"],
            Category::Birthday => &["🎂", "🎉", "🎈", "🎊", "🎁", "🥳", "🍰", "👑", "⭐", "🎇"],
            Category::Custom => &["📅", "📌", "🔔", "⏰", "⌛", "⚡", "🔥", "🌈", "🍀", "💎"],
        }
    }

    /// Korean display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Anniversary => "기념일",
            Category::Exam => "시험",
            Category::Travel => "여행",
            Category::Birthday => "생일",
            Category::Custom => "커스텀",
        }
    }

    /// English display label.
    pub fn english_label(&self) -> &'static str {
        match self {
            Category::Anniversary => "Anniversary",
            Category::Exam => "Exam",
            Category::Travel => "Travel",
            Category::Birthday => "Birthday",
            Category::Custom => "Custom",
        }
    }

    /// Display label in the given locale.
    pub fn label_for(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.label(),
            Locale::En => self.english_label(),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anniversary" => Ok(Category::Anniversary),
            "exam" => Ok(Category::Exam),
            "travel" => Ok(Category::Travel),
            "birthday" => Ok(Category::Birthday),
            "custom" => Ok(Category::Custom),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}
