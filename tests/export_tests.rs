mod common;
use common::{memory_db, seed_history, temp_out};
use rwrapped::errors::AppError;
use rwrapped::export::{confirm_overwrite, write_hours_csv, write_hours_json};
use rwrapped::stats::{HoursQuery, hours_by};
use std::fs;
use std::io::Cursor;
use std::path::Path;

#[test]
fn test_overwrite_gate() {
    let out = temp_out("overwrite_gate", "html");
    let path = Path::new(&out);

    // missing file: nothing is asked
    confirm_overwrite(path, false, &mut Cursor::new("")).unwrap();

    fs::write(path, "<table></table>").unwrap();

    confirm_overwrite(path, true, &mut Cursor::new("")).unwrap();
    confirm_overwrite(path, false, &mut Cursor::new("YES\n")).unwrap();

    let err = confirm_overwrite(path, false, &mut Cursor::new("\n")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
    let err = confirm_overwrite(path, false, &mut Cursor::new("nope\n")).unwrap_err();
    assert!(err.to_string().contains("left untouched"));
}

#[test]
fn test_hours_writers() {
    let conn = memory_db();
    seed_history(&conn, &[("2019-03-15 12:00", "X", 5_400_000)]);
    let table = hours_by(&conn, "X", &HoursQuery::monthly(2019).unwrap()).unwrap();

    let mut csv_out = Vec::new();
    write_hours_csv(&mut csv_out, &table).unwrap();
    let csv_text = String::from_utf8(csv_out).unwrap();
    assert!(csv_text.starts_with("month,name,hours"));
    assert!(csv_text.contains("3,Mar,1.5"));
    assert_eq!(csv_text.lines().count(), 13);

    let mut json_out = Vec::new();
    write_hours_json(&mut json_out, &table).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json_out).unwrap();
    assert_eq!(value["artist"], "X");
    assert_eq!(value["hours"][2], 1.5);
}
