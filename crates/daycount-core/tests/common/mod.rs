use daycount_core::{Tracker, TrackerBuilder, dates::FixedClock, params::CreateDDay};
use jiff::civil::Date;
use tempfile::TempDir;

/// Helper function to create a test tracker pinned to `today`
pub async fn create_test_tracker(today: Date) -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(FixedClock::new(today))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

#[allow(dead_code)]
pub fn new_dday(title: &str, target_date: &str, category: &str) -> CreateDDay {
    CreateDDay {
        title: title.to_string(),
        target_date: target_date.to_string(),
        category: category.to_string(),
        emoji: None,
    }
}
