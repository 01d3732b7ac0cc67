use perfctr_report::parser::{scan_reader, scan_records, Identifier, Record, TableTitle};
use perfctr_report::utils::error::ScanError;
use pretty_assertions::assert_eq;

fn records(lines: &[&str]) -> Vec<Record> {
    lines
        .iter()
        .map(|line| line.split(',').map(str::to_owned).collect())
        .collect()
}

#[test]
fn test_n_rows_are_tagged() {
    let data: Vec<String> = (0..25).map(|i| format!("metric {},{}", i, i * 2)).collect();
    let mut lines = vec!["TABLE,Region Info,L3", "Region Info,HWThread 0"];
    lines.extend(data.iter().map(String::as_str));

    let tables = scan_records(records(&lines), Identifier::new("kji")).unwrap();
    let table = tables.get(&TableTitle::new("L3", "Region Info")).unwrap();

    assert_eq!(table.rows.len(), 25);
    assert!(table.rows.iter().all(|row| row[0] == "kji"));
    assert_eq!(table.title(), "L3 - Region Info");
}

#[test]
fn test_struct_after_table_excludes_its_rows() {
    let lines = [
        "TABLE,Region Info,L3",
        "Region Info,HWThread 0",
        "call count,1",
        "STRUCT,Info,3",
        "CPU name:,Intel",
        "CPU type:,Coffeelake",
        "TABLE,Data,L2",
        "Metric,HWThread 0",
        "loads,7",
    ];
    let tables = scan_records(records(&lines), Identifier::default()).unwrap();

    assert_eq!(tables.total_rows(), 2);
    for table in &tables {
        assert!(table.rows.iter().all(|row| !row[1].starts_with("CPU")));
    }
}

#[test]
fn test_final_table_marker_fails() {
    let err = scan_records(records(&["TABLE,Region Info,L3"]), Identifier::default()).unwrap_err();
    assert!(matches!(err, ScanError::MissingHeader { record: 1 }));
}

#[test]
fn test_marker_only_report_from_reader_fails() {
    let err = scan_reader("STRUCT,Info\nTABLE,T,G\n".as_bytes(), Identifier::default())
        .unwrap_err();
    assert!(matches!(err, ScanError::MissingHeader { record: 2 }));
}

#[test]
fn test_invalid_utf8_is_csv_error() {
    let bytes: &[u8] = b"TABLE,T,G\nh\n\xff\xfe,1\n";
    let err = scan_reader(bytes, Identifier::default()).unwrap_err();
    assert!(matches!(err, ScanError::Csv(_)));
}

#[test]
fn test_table_with_header_only() {
    let tables = scan_records(records(&["TABLE,T,G", "h1,h2"]), Identifier::default()).unwrap();
    let table = tables.get(&TableTitle::new("G", "T")).unwrap();

    assert_eq!(table.headers, vec!["Executable", "h1", "h2"]);
    assert!(table.rows.is_empty());
}

#[test]
fn test_tables_with_same_rendered_title_are_merged() {
    let lines = [
        "TABLE,c,a - b",
        "h",
        "r1",
        "TABLE,b - c,a",
        "other",
        "r2",
    ];
    let tables = scan_records(records(&lines), Identifier::new("x")).unwrap();

    assert_eq!(tables.len(), 1);
    let table = tables.get(&TableTitle::new("a", "b - c")).unwrap();
    assert_eq!(table.group(), "a - b");
    assert_eq!(table.headers, vec!["Executable", "h"]);
    assert_eq!(table.rows, vec![vec!["x", "r1"], vec!["x", "r2"]]);
}
