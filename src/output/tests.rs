//! Tests for the CSV sink

use super::*;
use crate::flatten::FlatRow;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn row(id: &str, retailers: &str, num_items: usize) -> FlatRow {
    FlatRow {
        id: id.to_string(),
        status: "delivered".to_string(),
        total: "$12.34".to_string(),
        created_at: "2023-04-01".to_string(),
        retailers: retailers.to_string(),
        num_items,
    }
}

#[test]
fn test_export_filename_format() {
    let now = NaiveDate::from_ymd_opt(2024, 5, 3)
        .unwrap()
        .and_hms_opt(7, 8, 9)
        .unwrap();
    assert_eq!(export_filename(now), "instacart_orders_05-03-2024_07-08-09.csv");
}

#[test]
fn test_export_filename_uses_24_hour_clock() {
    let now = NaiveDate::from_ymd_opt(2024, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 1)
        .unwrap();
    assert_eq!(export_filename(now), "instacart_orders_12-31-2024_23-59-01.csv");
}

#[test]
fn test_write_rows_exact_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");

    let report = write_rows(&path, &[row("o1", "A|B", 3), row("o2", "", 0)]).unwrap();
    assert_eq!(report.rows_written, 2);
    assert_eq!(report.path, path);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "id,status,total,createdAt,retailers,numItems\n\
         o1,delivered,$12.34,2023-04-01,A|B,3\n\
         o2,delivered,$12.34,2023-04-01,,0\n"
    );
}

#[test]
fn test_write_rows_quotes_embedded_delimiters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");

    let mut tricky = row("o1", "Bob's \"Market\"|Deli, Downtown", 1);
    tricky.total = "$1,234.00".to_string();
    write_rows(&path, &[tricky]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let data_line = content.lines().nth(1).unwrap();
    assert_eq!(
        data_line,
        "o1,delivered,\"$1,234.00\",2023-04-01,\"Bob's \"\"Market\"\"|Deli, Downtown\",1"
    );

    // read back through the csv parser to confirm the quoting is reversible
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[2], "$1,234.00");
    assert_eq!(&record[4], "Bob's \"Market\"|Deli, Downtown");
}

#[test]
fn test_write_rows_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("nested").join("orders.csv");

    write_rows(&path, &[row("o1", "A", 1)]).unwrap();
    assert!(path.exists());
}

#[test]
fn test_write_rows_empty_input_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orders.csv");

    let report = write_rows(&path, &[]).unwrap();
    assert_eq!(report.rows_written, 0);

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "id,status,total,createdAt,retailers,numItems\n");
}

#[test]
fn test_write_export_timestamped_name() {
    let dir = tempfile::tempdir().unwrap();

    let report = write_export(dir.path(), &[row("o1", "A", 1)]).unwrap();
    let name = report.path.file_name().unwrap().to_str().unwrap();

    assert!(name.starts_with("instacart_orders_"), "got {name}");
    assert!(name.ends_with(".csv"), "got {name}");
    assert!(report.path.exists());
}

#[test]
fn test_write_rows_unwritable_destination_fails() {
    let dir = tempfile::tempdir().unwrap();
    // a path whose parent is a file, so directory creation must fail
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let path = blocker.join("orders.csv");

    let err = write_rows(&path, &[row("o1", "A", 1)]).unwrap_err();
    assert!(matches!(err, crate::error::Error::Output { .. }), "got {err}");
}
