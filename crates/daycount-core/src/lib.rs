//! Core library for the daycount D-Day tracker.
//!
//! The heart of the crate is [`dates`]: pure calendar arithmetic that turns
//! a `YYYY-MM-DD` target into a signed day count, a `D-N` / `D-Day` / `D+N`
//! label, localized date strings and a fixed milestone timeline. Around it
//! sit the domain [`models`], request validation in [`params`], SQLite
//! persistence in [`db`], JSON [`transfer`], and the async [`Tracker`]
//! facade used by the command-line and MCP front ends.
//!
//! "Today" always comes from an injected [`dates::Clock`], so every count
//! is reproducible once the clock is pinned.
//!
//! # Quick Start
//!
//! ```rust
//! use daycount_core::{TrackerBuilder, dates::FixedClock, params::{CreateDDay, ListDDays}};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("daycount.db"))
//!     .with_clock(FixedClock::new(date(2025, 6, 15)))
//!     .build()
//!     .await?;
//!
//! tracker
//!     .create_dday(&CreateDDay {
//!         title: "Anniversary".to_string(),
//!         target_date: "2025-06-15".to_string(),
//!         category: "anniversary".to_string(),
//!         emoji: None,
//!     })
//!     .await?;
//!
//! let summaries = tracker.list_summaries(&ListDDays::default()).await?;
//! assert_eq!(summaries[0].dday_label, "D-Day");
//! println!("{summaries}");
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;
pub mod transfer;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CategoryList, CreateResult, DDaySummaries, Dashboard, DeleteResult, LocalDateTime,
    MilestoneTimeline, OperationStatus, UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    Category, DDay, DDayDetail, DDayFilter, DDaySummary, Milestone, NewDDay, SortOrder,
    UpdateDDayRequest,
};
pub use params::{
    CreateDDay, DeleteAll, DeleteDDay, ExportDDays, Id, ImportDDays, ListDDays, UpdateDDay,
};
pub use tracker::{Tracker, TrackerBuilder};
pub use transfer::ImportSummary;
