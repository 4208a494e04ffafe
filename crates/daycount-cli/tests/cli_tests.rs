use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with plain output, a temporary database and today pinned to
/// 2025-06-15
fn dday_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("dday").expect("Failed to find dday binary");
    cmd.arg("--no-color")
        .arg("--today")
        .arg("2025-06-15")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Pulls the UUID out of "Created D-Day with ID: <id>"
fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.strip_prefix("Created D-Day with ID: "))
        .map(|id| id.trim().to_string())
        .unwrap_or_else(|| panic!("Could not extract ID from output: {output}"))
}

fn add(temp_dir: &TempDir, args: &[&str]) -> String {
    let output = dday_cmd(temp_dir)
        .arg("add")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    extract_id_from_output(&String::from_utf8(output).expect("Invalid UTF-8"))
}

#[test]
fn test_cli_empty_dashboard() {
    let temp_dir = create_cli_test_environment();

    dday_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No D-Days yet"));
}

#[test]
fn test_cli_add_shows_countdown() {
    let temp_dir = create_cli_test_environment();

    dday_cmd(&temp_dir)
        .args(["add", "Final exam", "2025-06-25", "--category", "exam"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created D-Day with ID:"))
        .stdout(predicate::str::contains("📚 Final exam"))
        .stdout(predicate::str::contains("D-10"))
        .stdout(predicate::str::contains("2025년 6월 25일 (수)"));
}

#[test]
fn test_cli_add_rejects_invalid_input() {
    let temp_dir = create_cli_test_environment();

    dday_cmd(&temp_dir)
        .args(["add", "", "2025-06-25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title"));

    dday_cmd(&temp_dir)
        .args(["add", "Leap", "2025-02-29"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    dday_cmd(&temp_dir)
        .args(["add", "Holiday", "2025-07-01", "--category", "holiday"])
        .assert()
        .failure();
}

#[test]
fn test_cli_dashboard_features_nearest_upcoming() {
    let temp_dir = create_cli_test_environment();
    add(&temp_dir, &["Last week", "2025-06-08"]);
    add(&temp_dir, &["Trip", "2025-07-15", "-c", "travel"]);
    add(&temp_dir, &["Tomorrow", "2025-06-16"]);

    dday_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("> # D-1"))
        .stdout(predicate::str::contains("3 D-Days"))
        .stdout(predicate::str::contains("D+7"))
        .stdout(predicate::str::contains("D-30"));
}

#[test]
fn test_cli_list_filters_by_category() {
    let temp_dir = create_cli_test_environment();
    add(&temp_dir, &["Exam", "2025-06-20", "-c", "exam"]);
    add(&temp_dir, &["Trip", "2025-07-15", "-c", "travel"]);

    dday_cmd(&temp_dir)
        .args(["list", "--category", "travel", "--sort", "name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## ✈️ Trip"))
        .stdout(predicate::str::contains("## 📚 Exam").not());
}

#[test]
fn test_cli_show_lists_milestones() {
    let temp_dir = create_cli_test_environment();
    let id = add(&temp_dir, &["Exam", "2025-06-25", "-c", "exam"]);

    dday_cmd(&temp_dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Milestones"))
        .stdout(predicate::str::contains("D-100"))
        .stdout(predicate::str::contains("➤ **D-10** 2025-06-15 (today)"))
        .stdout(predicate::str::contains("✓ **D-30**"));
}

#[test]
fn test_cli_show_unknown_id() {
    let temp_dir = create_cli_test_environment();

    dday_cmd(&temp_dir)
        .args(["show", "no-such-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_edit_reports_changes() {
    let temp_dir = create_cli_test_environment();
    let id = add(&temp_dir, &["Trip", "2025-07-15", "-c", "travel"]);

    dday_cmd(&temp_dir)
        .args(["edit", &id, "--title", "Jeju trip", "--date", "2025-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("- title"))
        .stdout(predicate::str::contains("- target date"))
        .stdout(predicate::str::contains("D-Day"));

    dday_cmd(&temp_dir)
        .args(["edit", &id])
        .assert()
        .failure();
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let id = add(&temp_dir, &["Keep", "2025-07-01"]);

    dday_cmd(&temp_dir)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    dday_cmd(&temp_dir)
        .args(["delete", &id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted D-Day 'Keep'"));

    dday_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No D-Days yet"));
}

#[test]
fn test_cli_clear() {
    let temp_dir = create_cli_test_environment();
    add(&temp_dir, &["One", "2025-07-01"]);
    add(&temp_dir, &["Two", "2025-07-02"]);

    dday_cmd(&temp_dir).arg("clear").assert().failure();

    dday_cmd(&temp_dir)
        .args(["clear", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 D-Days"));
}

#[test]
fn test_cli_export_import_round_trip() {
    let temp_dir = create_cli_test_environment();
    let export_path = temp_dir.path().join("backup").join("ddays.json");
    add(&temp_dir, &["Anniversary", "2025-09-01", "-c", "anniversary"]);

    dday_cmd(&temp_dir)
        .args(["export", "--output", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported D-Days to"));

    let exported = std::fs::read_to_string(&export_path).expect("Export file missing");
    let json: serde_json::Value = serde_json::from_str(&exported).expect("Invalid JSON");
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["data"][0]["targetDate"], "2025-09-01");
    assert_eq!(json["data"][0]["category"], "anniversary");

    let other_dir = create_cli_test_environment();
    dday_cmd(&other_dir)
        .args(["import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 D-Days"));

    dday_cmd(&other_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("❤️ Anniversary"));
}

#[test]
fn test_cli_export_to_stdout() {
    let temp_dir = create_cli_test_environment();

    dday_cmd(&temp_dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"1.0\""))
        .stdout(predicate::str::contains("\"data\": []"));
}

#[test]
fn test_cli_import_rejects_garbage() {
    let temp_dir = create_cli_test_environment();
    let bad_file = temp_dir.path().join("bad.json");
    std::fs::write(&bad_file, "not json").unwrap();
    add(&temp_dir, &["Keep", "2025-07-01"]);

    dday_cmd(&temp_dir)
        .args(["import", bad_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import failed"));

    dday_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep"));
}

#[test]
fn test_cli_categories_in_english() {
    let temp_dir = create_cli_test_environment();

    dday_cmd(&temp_dir)
        .args(["--locale", "en", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Category | Label | Default | Suggestions |"))
        .stdout(predicate::str::contains("Anniversary"))
        .stdout(predicate::str::contains("🎂"));
}

#[test]
fn test_cli_english_dates() {
    let temp_dir = create_cli_test_environment();

    dday_cmd(&temp_dir)
        .args(["--locale", "en", "add", "Party", "2025-06-20", "-c", "birthday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fri, June 20, 2025"));
}

#[test]
fn test_cli_rejects_invalid_today() {
    let temp_dir = create_cli_test_environment();

    Command::cargo_bin("dday")
        .unwrap()
        .args([
            "--database-file",
            temp_dir.path().join("x.db").to_str().unwrap(),
            "--today",
            "2025-13-01",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_pinned_today_keeps_local_time_zone() {
    let temp_dir = create_cli_test_environment();
    let import_file = temp_dir.path().join("late.json");
    std::fs::write(
        &import_file,
        r#"[{"id": "late", "title": "Late night", "targetDate": "2025-06-20",
            "category": "custom", "emoji": "📅",
            "createdAt": "2025-06-14T20:00:00Z", "updatedAt": "2025-06-14T20:00:00Z"}]"#,
    )
    .unwrap();

    dday_cmd(&temp_dir)
        .args(["import", import_file.to_str().unwrap()])
        .assert()
        .success();

    // UTC+9 in POSIX notation
    dday_cmd(&temp_dir)
        .env("TZ", "KST-9")
        .args(["show", "late"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: 2025년 6월 15일"));

    dday_cmd(&temp_dir)
        .env("TZ", "UTC0")
        .args(["show", "late"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: 2025년 6월 14일"));
}
