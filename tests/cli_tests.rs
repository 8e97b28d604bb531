mod common;
use common::{rwr, setup_test_db, temp_out, write_dump};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

/// init + import of the sample dump
fn init_with_dump(name: &str) -> String {
    let db_path = setup_test_db(name);

    rwr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let dump = write_dump(name);
    rwr()
        .args(["--db", &db_path, "import", &dump])
        .assert()
        .success()
        .stdout(contains("imported 4 plays"));

    db_path
}

#[test]
fn test_hours_csv() {
    let db_path = init_with_dump("cli_hours_csv");

    rwr()
        .args(["--db", &db_path, "hours", "X", "--year", "2019", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains("month,name,hours"))
        .stdout(contains("3,Mar,1"))
        .stdout(contains("1,Jan,0"));
}

#[test]
fn test_hours_json_to_file() {
    let db_path = init_with_dump("cli_hours_json");
    let out = temp_out("cli_hours_json", "json");

    rwr()
        .args([
            "--db", &db_path, "hours", "Y", "--year", "2019", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read hours json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["granularity"], "month");
    assert_eq!(value["hours"][6], 1.0);
    assert_eq!(value["labels"].as_array().map(|a| a.len()), Some(12));
}

#[test]
fn test_hours_table_by_weekday() {
    let db_path = init_with_dump("cli_hours_weekday");

    rwr()
        .args(["--db", &db_path, "hours", "X", "--by", "weekday"])
        .assert()
        .success()
        .stdout(contains("Fri"))
        .stdout(contains("Total: 1.00 h"));
}

#[test]
fn test_show_text_and_html() {
    let db_path = init_with_dump("cli_show");

    rwr()
        .args([
            "--db",
            &db_path,
            "show",
            "SELECT artistName, msPlayed FROM history ORDER BY endTime",
            "--rows",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("artistName"))
        .stdout(contains("(2 of 4 rows)"));

    let out = temp_out("cli_show", "html");
    rwr()
        .args([
            "--db",
            &db_path,
            "show",
            "SELECT artistName, trackName FROM history ORDER BY endTime",
            "--html",
            &out,
            "--force",
        ])
        .assert()
        .success();

    let html = fs::read_to_string(&out).expect("read html");
    assert!(html.starts_with("<table"));
    assert!(html.contains("<th>artistName</th>"));
    assert_eq!(html.matches("<tr>").count(), 4);
}

#[test]
fn test_show_rejects_statements_without_rows() {
    let db_path = init_with_dump("cli_show_no_rows");

    rwr()
        .args(["--db", &db_path, "show", "DELETE FROM history"])
        .assert()
        .failure()
        .stderr(contains("does not return a result set"));
}

#[test]
fn test_db_info_and_log() {
    let db_path = init_with_dump("cli_db_info");

    rwr()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Plays:").and(contains("Artists:")))
        .stdout(contains("Integrity check passed"));

    rwr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("import"))
        .stdout(contains("Imported 4 plays"));
}

#[test]
fn test_import_rejects_bad_dump() {
    let db_path = setup_test_db("cli_bad_dump");
    let dump = temp_out("cli_bad_dump", "json");
    fs::write(
        &dump,
        r#"[{"endTime": "yesterday", "artistName": "X", "trackName": "A", "msPlayed": 1}]"#,
    )
    .unwrap();

    rwr()
        .args(["--db", &db_path, "import", &dump])
        .assert()
        .failure()
        .stderr(contains("invalid endTime"));
}

#[test]
fn test_import_is_all_or_nothing() {
    let db_path = setup_test_db("cli_import_atomic");

    rwr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let good = write_dump("cli_import_atomic_good");
    let bad = temp_out("cli_import_atomic_bad", "json");
    fs::write(
        &bad,
        r#"[{"endTime": "bogus", "artistName": "X", "trackName": "A", "msPlayed": 1}]"#,
    )
    .unwrap();

    rwr()
        .args(["--db", &db_path, "import", &good, &bad])
        .assert()
        .failure()
        .stderr(contains("invalid endTime"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}
