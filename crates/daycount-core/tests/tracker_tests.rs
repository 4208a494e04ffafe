mod common;

use common::{create_test_tracker, new_dday};
use daycount_core::{
    Category, TrackerError,
    params::{DeleteDDay, Id, ImportDDays, ListDDays, UpdateDDay},
};
use jiff::civil::date;

#[tokio::test]
async fn test_complete_dday_workflow() {
    let (_temp_dir, tracker) = create_test_tracker(date(2025, 1, 1)).await;

    let exam = tracker
        .create_dday(&new_dday("Final exam", "2025-04-11", "exam"))
        .await
        .expect("Failed to create D-Day");
    let trip = tracker
        .create_dday(&new_dday("Summer trip", "2025-01-08", "travel"))
        .await
        .expect("Failed to create D-Day");
    tracker
        .create_dday(&new_dday("New year", "2024-12-25", "anniversary"))
        .await
        .expect("Failed to create D-Day");

    // Dashboard features the nearest upcoming entry.
    let dashboard = tracker
        .dashboard(&ListDDays::default())
        .await
        .expect("Failed to build dashboard");
    let hero = dashboard.hero.as_ref().expect("Hero should exist");
    assert_eq!(hero.dday.id, trip.id);
    assert_eq!(hero.dday_label, "D-7");
    assert_eq!(dashboard.entries.len(), 3);

    let rendered = dashboard.to_string();
    assert!(rendered.contains("D-7"));
    assert!(rendered.contains("D+7"));
    assert!(rendered.contains("D-100"));

    // Milestones of an entry exactly 100 days away.
    let timeline = tracker
        .milestones(&Id {
            id: exam.id.clone(),
        })
        .await
        .expect("Failed to load milestones");
    assert_eq!(timeline.milestones[0].label, "D-100");
    assert_eq!(timeline.milestones[0].date, date(2025, 1, 1));
    assert!(timeline.milestones[0].is_current);
    assert!(timeline.milestones[1..].iter().all(|m| !m.is_passed));

    // Moving the target changes the countdown.
    let updated = tracker
        .update_dday_result(&UpdateDDay {
            id: exam.id.clone(),
            target_date: Some("2025-01-31".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update D-Day");
    assert_eq!(updated.resource.dday_label, "D-30");
    assert_eq!(updated.changes, ["target date"]);

    // Category filter leaves other entries out.
    let travel = tracker
        .list_summaries(&ListDDays {
            category: Some("travel".to_string()),
            sort: None,
        })
        .await
        .expect("Failed to list");
    assert_eq!(travel.len(), 1);
    assert_eq!(travel[0].dday.category, Category::Travel);

    // Export, wipe by import of an empty array, then restore.
    let exported = tracker.export_data().await.expect("Failed to export");
    let emptied = tracker
        .import_data(&ImportDDays {
            json: "[]".to_string(),
        })
        .await
        .expect("Failed to import");
    assert_eq!(emptied.imported, 0);
    assert!(tracker.list_ddays(None).await.unwrap().is_empty());

    let restored = tracker
        .import_data(&ImportDDays { json: exported })
        .await
        .expect("Failed to import");
    assert_eq!(restored.imported, 3);

    let restored_exam = tracker
        .get_dday(&Id {
            id: exam.id.clone(),
        })
        .await
        .unwrap()
        .expect("Restored entry should keep its id");
    assert_eq!(restored_exam.target_date, date(2025, 1, 31));

    // Deletion needs confirmation.
    let err = tracker
        .delete_dday(&DeleteDDay {
            id: exam.id.clone(),
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(err.is_user_error());

    tracker
        .delete_dday(&DeleteDDay {
            id: exam.id.clone(),
            confirmed: true,
        })
        .await
        .expect("Failed to delete");
    let err = tracker.show_dday(&Id { id: exam.id }).await.unwrap_err();
    assert!(matches!(err, TrackerError::DDayNotFound { .. }));
}

#[tokio::test]
async fn test_data_persists_across_trackers() {
    let (temp_dir, tracker) = create_test_tracker(date(2025, 6, 15)).await;
    let created = tracker
        .create_dday(&new_dday("Persisted", "2025-06-20", "birthday"))
        .await
        .unwrap();
    let db_path = tracker.database_path().to_path_buf();
    drop(tracker);

    let reopened = daycount_core::TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .with_clock(daycount_core::dates::FixedClock::new(date(2025, 6, 20)))
        .build()
        .await
        .unwrap();
    let summary = reopened
        .show_dday(&Id { id: created.id })
        .await
        .unwrap();
    assert_eq!(summary.summary.dday_label, "D-Day");
    drop(temp_dir);
}

#[tokio::test]
async fn test_import_skips_invalid_entries() {
    let (_temp_dir, tracker) = create_test_tracker(date(2025, 6, 15)).await;

    let payload = r#"{
        "version": "1.0",
        "exportedAt": "2025-06-15T00:00:00Z",
        "data": [
            {
                "id": "ok",
                "title": "Valid",
                "targetDate": "2025-07-01",
                "category": "exam",
                "emoji": "📚",
                "createdAt": "2025-06-01T00:00:00Z",
                "updatedAt": "2025-06-01T00:00:00Z"
            },
            {
                "id": "bad-date",
                "title": "Invalid date",
                "targetDate": "2025-02-30",
                "category": "exam",
                "emoji": "📚",
                "createdAt": "2025-06-01T00:00:00Z",
                "updatedAt": "2025-06-01T00:00:00Z"
            },
            { "id": "missing-fields" }
        ]
    }"#;

    let summary = tracker
        .import_data(&ImportDDays {
            json: payload.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(summary.skipped, 2);

    let all = tracker.list_ddays(None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "ok");
}
