use daycount_core::{
    Category, DDay, DDayFilter, Database, NewDDay, UpdateDDayRequest,
};
use jiff::{Timestamp, civil::date};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn now() -> Timestamp {
    "2025-06-15T09:00:00Z".parse().unwrap()
}

fn new_dday(title: &str, category: Category) -> NewDDay {
    NewDDay {
        title: title.to_string(),
        target_date: date(2025, 7, 1),
        category,
        emoji: category.default_emoji().to_string(),
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();
    assert!(temp_file.path().exists());
    assert_eq!(db.count_ddays().expect("Failed to count"), 0);
}

#[test]
fn test_insert_and_get_dday() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .insert_dday(&new_dday("Exam", Category::Exam), now())
        .expect("Failed to insert D-Day");
    assert_eq!(created.title, "Exam");
    assert_eq!(created.emoji, "📚");
    assert_eq!(created.created_at, now());
    assert_eq!(created.updated_at, now());

    let fetched = db
        .get_dday(&created.id)
        .expect("Failed to get D-Day")
        .expect("D-Day should exist");
    assert_eq!(fetched, created);

    assert!(db.get_dday("no-such-id").expect("Query failed").is_none());
}

#[test]
fn test_ids_are_unique() {
    let (_temp_file, mut db) = create_test_db();
    let a = db.insert_dday(&new_dday("a", Category::Custom), now()).unwrap();
    let b = db.insert_dday(&new_dday("b", Category::Custom), now()).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_list_keeps_insertion_order_and_filters() {
    let (_temp_file, mut db) = create_test_db();

    db.insert_dday(&new_dday("first", Category::Travel), now()).unwrap();
    db.insert_dday(&new_dday("second", Category::Exam), now()).unwrap();
    db.insert_dday(&new_dday("third", Category::Travel), now()).unwrap();

    let all = db.list_ddays(None).expect("Failed to list");
    let titles: Vec<&str> = all.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);

    let travel = db
        .list_ddays(Some(&DDayFilter::for_category(Category::Travel)))
        .expect("Failed to list");
    assert_eq!(travel.len(), 2);
    assert!(travel.iter().all(|d| d.category == Category::Travel));

    let unfiltered = db
        .list_ddays(Some(&DDayFilter::default()))
        .expect("Failed to list");
    assert_eq!(unfiltered.len(), 3);
}

#[test]
fn test_update_dday() {
    let (_temp_file, mut db) = create_test_db();
    let created = db.insert_dday(&new_dday("Trip", Category::Travel), now()).unwrap();

    let request = UpdateDDayRequest {
        target_date: Some(date(2025, 8, 15)),
        ..Default::default()
    };
    let later: Timestamp = "2025-06-20T18:30:00Z".parse().unwrap();
    let (updated, changes) = db
        .update_dday(&created.id, &request, later)
        .expect("Failed to update")
        .expect("D-Day should exist");

    assert_eq!(changes, ["target date"]);
    assert_eq!(updated.created_at, now());
    assert_eq!(updated.updated_at, later);
    assert_eq!(updated.target_date, date(2025, 8, 15));
    assert_eq!(updated.title, "Trip");

    let stored = db.get_dday(&created.id).unwrap().unwrap();
    assert_eq!(stored, updated);

    assert!(db
        .update_dday("missing", &request, later)
        .unwrap()
        .is_none());
}

#[test]
fn test_delete_dday() {
    let (_temp_file, mut db) = create_test_db();
    let keep = db.insert_dday(&new_dday("keep", Category::Custom), now()).unwrap();
    let doomed = db.insert_dday(&new_dday("drop", Category::Custom), now()).unwrap();

    let removed = db
        .delete_dday(&doomed.id)
        .expect("Failed to delete")
        .expect("D-Day should exist");
    assert_eq!(removed.id, doomed.id);

    let remaining = db.list_ddays(None).unwrap();
    assert_eq!(remaining, vec![keep]);

    assert!(db.delete_dday(&doomed.id).unwrap().is_none());
}

#[test]
fn test_delete_all_ddays() {
    let (_temp_file, mut db) = create_test_db();
    for title in ["a", "b", "c"] {
        db.insert_dday(&new_dday(title, Category::Birthday), now()).unwrap();
    }
    assert_eq!(db.delete_all_ddays().unwrap(), 3);
    assert_eq!(db.count_ddays().unwrap(), 0);
    assert_eq!(db.delete_all_ddays().unwrap(), 0);
}

#[test]
fn test_replace_all_keeps_ids_and_timestamps() {
    let (_temp_file, mut db) = create_test_db();
    db.insert_dday(&new_dday("old", Category::Custom), now()).unwrap();

    let imported = vec![
        DDay {
            id: "imported-1".to_string(),
            title: "Imported".to_string(),
            target_date: date(2024, 2, 29),
            category: Category::Anniversary,
            emoji: "💍".to_string(),
            created_at: Timestamp::from_second(1_700_000_000).unwrap(),
            updated_at: Timestamp::from_second(1_700_000_500).unwrap(),
        },
        DDay {
            id: "imported-2".to_string(),
            title: "Second".to_string(),
            target_date: date(2026, 1, 1),
            category: Category::Custom,
            emoji: "📅".to_string(),
            created_at: Timestamp::from_second(1_700_001_000).unwrap(),
            updated_at: Timestamp::from_second(1_700_001_000).unwrap(),
        },
    ];

    assert_eq!(db.replace_all_ddays(&imported).unwrap(), 2);
    assert_eq!(db.list_ddays(None).unwrap(), imported);
}

#[test]
fn test_replace_all_rolls_back_on_duplicate_ids() {
    let (_temp_file, mut db) = create_test_db();
    let existing = db.insert_dday(&new_dday("existing", Category::Custom), now()).unwrap();

    let duplicate = DDay {
        id: "dup".to_string(),
        title: "dup".to_string(),
        target_date: date(2025, 1, 1),
        category: Category::Custom,
        emoji: "📅".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    };

    assert!(
        db.replace_all_ddays(&[duplicate.clone(), duplicate])
            .is_err()
    );
    assert_eq!(db.list_ddays(None).unwrap(), vec![existing]);
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().expect("Failed to open in-memory database");
    db.insert_dday(&new_dday("memo", Category::Exam), now()).unwrap();
    assert_eq!(db.count_ddays().unwrap(), 1);
}
