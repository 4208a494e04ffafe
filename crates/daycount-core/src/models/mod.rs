//! Data models for D-Day entries.
//!
//! The stored record is [`DDay`]. Everything derived from "today"
//! ([`DDaySummary`], [`DDayDetail`], [`Milestone`]) is computed on demand
//! and never persisted. Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use daycount_core::{
//!     dates::Locale,
//!     models::{Category, DDay, DDaySummary},
//! };
//! use jiff::{Timestamp, civil::date};
//!
//! let dday = DDay {
//!     id: "7d3c0c1e-4f7a-4a52-9d0e-2f1a0c4b9e11".to_string(),
//!     title: "Final exam".to_string(),
//!     target_date: date(2025, 6, 20),
//!     category: Category::Exam,
//!     emoji: Category::Exam.default_emoji().to_string(),
//!     created_at: Timestamp::UNIX_EPOCH,
//!     updated_at: Timestamp::UNIX_EPOCH,
//! };
//!
//! let summary = DDaySummary::new(dday, date(2025, 6, 15), Locale::Ko)?;
//! assert_eq!(summary.days, 5);
//! assert_eq!(summary.dday_label, "D-5");
//! # Ok::<(), daycount_core::TrackerError>(())
//! ```

pub mod category;
pub mod dday;
pub mod filters;
pub mod milestone;
pub mod requests;
pub mod summary;


pub use category::Category;
pub use dday::DDay;
pub use filters::{DDayFilter, SortOrder};
pub use milestone::Milestone;
pub use requests::{NewDDay, UpdateDDayRequest};
pub use summary::{DDayDetail, DDaySummary, pick_hero};
