use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_test_db, kv_value, ms, stdout_of};

#[test]
fn test_first_swipe_seeds_eighty_meals() {
    let db_path = init_test_db("meal_seed");

    ms().args(["--db", &db_path, "eat"])
        .assert()
        .success()
        .stdout(contains("79 meals left"));

    assert_eq!(kv_value(&db_path, "numMeals").as_deref(), Some("79"));
}

#[test]
fn test_history_groups_by_day_newest_first() {
    let db_path = init_test_db("meal_history_example");

    ms().args(["--db", &db_path, "--tz", "utc", "eat", "--at", "2024-01-01T06:00:00Z"])
        .assert()
        .success()
        .stdout(contains("Breakfast"));

    ms().args(["--db", &db_path, "--tz", "utc", "eat", "--at", "2024-01-01T12:30:00Z"])
        .assert()
        .success()
        .stdout(contains("Lunch"));

    let stdout = stdout_of(&db_path, &["history", "meals"]);

    assert_eq!(stdout.matches("Jan 1st 24").count(), 1, "one section expected");

    let lunch = stdout.find("12:30 PM").expect("missing 12:30 entry");
    let breakfast = stdout.find("6:00 AM").expect("missing 06:00 entry");
    assert!(lunch < breakfast, "newest entry must come first:\n{stdout}");
    assert!(stdout.contains("78 left"));
    assert!(stdout.contains("79 left"));
}

#[test]
fn test_history_sections_ordered_across_days() {
    let db_path = init_test_db("meal_history_days");

    // inserted out of chronological order on purpose
    for at in [
        "2024-03-02T18:00:00Z",
        "2024-03-01T08:00:00Z",
        "2024-03-03T23:30:00Z",
    ] {
        ms().args(["--db", &db_path, "eat", "--at", at])
            .assert()
            .success();
    }

    let stdout = stdout_of(&db_path, &["history"]);

    let d3 = stdout.find("Mar 3rd 24").expect("missing Mar 3rd");
    let d2 = stdout.find("Mar 2nd 24").expect("missing Mar 2nd");
    let d1 = stdout.find("Mar 1st 24").expect("missing Mar 1st");
    assert!(d3 < d2 && d2 < d1, "sections must be newest first:\n{stdout}");
    assert!(stdout.contains("Midnight Snack"));
    assert!(stdout.contains("Dinner"));
    assert!(stdout.contains("Breakfast"));
}

#[test]
fn test_delete_swipe_gives_meal_back() {
    let db_path = init_test_db("meal_delete");

    ms().args(["--db", &db_path, "eat", "--at", "2024-01-01T06:00:00Z"])
        .assert()
        .success();
    ms().args(["--db", &db_path, "eat", "--at", "2024-01-01T12:30:00Z"])
        .assert()
        .success();

    ms().args(["--db", &db_path, "del", "meals", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("79 meals left"));

    let stdout = stdout_of(&db_path, &["history", "meals"]);
    assert!(!stdout.contains("12:30 PM"));
    assert!(stdout.contains("6:00 AM"));
    assert!(stdout.contains("79 left"));
}

#[test]
fn test_delete_asks_for_confirmation() {
    let db_path = init_test_db("meal_delete_cancel");

    ms().args(["--db", &db_path, "eat"]).assert().success();

    ms().args(["--db", &db_path, "del", "meal", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    assert_eq!(kv_value(&db_path, "numMeals").as_deref(), Some("79"));
}

#[test]
fn test_delete_unknown_row_fails() {
    let db_path = init_test_db("meal_delete_unknown");

    ms().args(["--db", &db_path, "del", "meals", "42", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No meal row with id 42"));
}

#[test]
fn test_cannot_swipe_with_zero_meals() {
    let db_path = init_test_db("meal_zero");

    ms().args(["--db", &db_path, "meal", "set", "0"])
        .assert()
        .success();

    ms().args(["--db", &db_path, "eat"])
        .assert()
        .failure()
        .stderr(contains("No meals left"));

    let stdout = stdout_of(&db_path, &["history", "meals"]);
    assert!(stdout.contains("No meal swipes recorded yet."));
}

#[test]
fn test_meal_add_and_set_do_not_touch_history() {
    let db_path = init_test_db("meal_add_set");

    ms().args(["--db", &db_path, "meal", "set", "10"])
        .assert()
        .success()
        .stdout(contains("set to 10"));

    ms().args(["--db", &db_path, "meal", "add"])
        .assert()
        .success()
        .stdout(contains("11 meals left"));

    ms().args(["--db", &db_path, "meal", "add", "4"])
        .assert()
        .success()
        .stdout(contains("15 meals left"));

    ms().args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("Meals left").and(contains("15")));

    let stdout = stdout_of(&db_path, &["history", "meals"]);
    assert!(stdout.contains("No meal swipes recorded yet."));
}

#[test]
fn test_meal_add_overflow_is_rejected() {
    let db_path = init_test_db("meal_add_overflow");
    stdout_of(&db_path, &["status"]);

    ms().args(["--db", &db_path, "meal", "add", "9223372036854775807"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    assert_eq!(kv_value(&db_path, "numMeals").as_deref(), Some("80"));
}

#[test]
fn test_invalid_timestamp_is_rejected() {
    let db_path = init_test_db("meal_bad_ts");

    ms().args(["--db", &db_path, "eat", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));

    assert_eq!(kv_value(&db_path, "numMeals"), None);
}

#[test]
fn test_history_json_output() {
    let db_path = init_test_db("meal_history_json");

    ms().args(["--db", &db_path, "eat", "--at", "2024-01-01T06:00:00Z"])
        .assert()
        .success();
    ms().args(["--db", &db_path, "eat", "--at", "2024-01-01T12:30:00Z"])
        .assert()
        .success();

    let stdout = stdout_of(&db_path, &["history", "meals", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    let sections = json.as_array().expect("array of sections");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["title"], "Jan 1st 24");
    assert_eq!(sections[0]["date"], "2024-01-01");

    let entries = sections[0]["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["label"], "Lunch");
    assert_eq!(entries[0]["meals_left"], 78);
    assert_eq!(entries[1]["label"], "Breakfast");
    assert_eq!(entries[1]["time"], "6:00 AM");
}
