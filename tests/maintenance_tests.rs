mod common;
use common::{init_test_db, ms, stdout_of, test_home};
use predicates::str::contains;

#[test]
fn test_db_check_and_info() {
    let db_path = init_test_db("maint_db");
    stdout_of(&db_path, &["eat", "--at", "2024-03-04T08:00:00Z"]);

    ms().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Cached counters agree with history"));

    ms().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Meal swipes"))
        .stdout(contains("2024-03-04T08:00:00Z"))
        .stdout(contains("numMeals: 79"));

    ms().args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_log_records_operations() {
    let db_path = init_test_db("maint_log");
    stdout_of(&db_path, &["munch", "deposit", "10"]);
    stdout_of(&db_path, &["eat"]);

    let stdout = stdout_of(&db_path, &["log", "--print"]);
    assert!(stdout.contains("Internal log"), "stdout: {stdout}");
    assert!(stdout.contains("Database initialized"), "stdout: {stdout}");
    assert!(stdout.contains("balance 10.00"), "stdout: {stdout}");
    assert!(stdout.contains("79 left"), "stdout: {stdout}");
}

#[test]
fn test_config_print_reflects_overrides() {
    let db_path = init_test_db("maint_config");

    ms().args(["--db", &db_path, "--tz", "utc", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("timezone: utc"))
        .stdout(contains(db_path.as_str()));
}

#[test]
fn test_unknown_time_zone_is_rejected() {
    let db_path = init_test_db("maint_tz");

    ms().args(["--db", &db_path, "--tz", "mars", "status"])
        .assert()
        .failure()
        .stderr(contains("Invalid time zone"));
}

#[test]
fn test_db_check_reports_drift() {
    let db_path = init_test_db("maint_drift");
    stdout_of(&db_path, &["eat"]);
    stdout_of(&db_path, &["meal", "set", "40"]);

    ms().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("drifted from history"));
}

#[test]
fn test_config_defaults_come_from_isolated_home() {
    let home = test_home().to_string_lossy().to_string();

    ms().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_meals: 80"))
        .stdout(contains(home.as_str()));
}
