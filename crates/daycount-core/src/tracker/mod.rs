//! High-level tracker API for managing D-Days.
//!
//! [`Tracker`] is the single entry point used by the CLI and the MCP server.
//! It owns the database location, the [`Clock`] that decides what "today"
//! is, and the display [`Locale`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (handlers.rs)  │───▶│    (ops.rs)     │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  Summaries & views      Validation & I/O       Data Persistence
//! ```
//!
//! Every database call runs inside [`tokio::task::spawn_blocking`] on a
//! short-lived connection, so a `Tracker` is cheap to clone and share.
//!
//! # Examples
//!
//! ```rust
//! use daycount_core::{TrackerBuilder, dates::FixedClock, params::CreateDDay};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some(dir.path().join("daycount.db")))
//!     .with_clock(FixedClock::new(date(2025, 1, 1)))
//!     .build()
//!     .await?;
//!
//! let dday = tracker
//!     .create_dday(&CreateDDay {
//!         title: "Finals".to_string(),
//!         target_date: "2025-04-11".to_string(),
//!         category: "exam".to_string(),
//!         emoji: None,
//!     })
//!     .await?;
//!
//! let summary = tracker.summarize(dday)?;
//! assert_eq!(summary.dday_label, "D-100");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use jiff::civil::Date;

use crate::dates::{Clock, Locale};

pub mod builder;
pub mod handlers;
pub mod ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing D-Days.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) locale: Locale,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, clock: Arc<dyn Clock>, locale: Locale) -> Self {
        Self {
            db_path,
            clock,
            locale,
        }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Today's date according to the tracker's clock.
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}
