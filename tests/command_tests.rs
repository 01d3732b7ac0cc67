use perfctr_report::commands::{execute_combine, validate_args, CombineArgs, OutputFormat};
use perfctr_report::output::read_tables_json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_validate_args_requires_reports() {
    assert!(validate_args(&CombineArgs::default()).is_err());
}

#[test]
fn test_combine_from_list_file() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("output_files.txt");
    fs::write(
        &list,
        format!(
            "{}\n\n{}\n",
            fixture("ijk.csv").display(),
            fixture("ikj_bco_64.csv").display()
        ),
    )
    .unwrap();
    let output = dir.path().join("combined.csv");

    let args = CombineArgs {
        report_list: Some(list),
        output: output.clone(),
        ..Default::default()
    };
    validate_args(&args).unwrap();
    execute_combine(args).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let ijk = content.find("ijk,RDTSC Runtime [s]").unwrap();
    let ikj = content.find("ikj_bco_64,RDTSC Runtime [s]").unwrap();
    assert!(ijk < ikj);
}

#[test]
fn test_combine_json_with_label() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("combined.json");

    let args = CombineArgs {
        reports: vec![fixture("ijk.csv")],
        output: output.clone(),
        format: OutputFormat::Json,
        label: "Loop".to_string(),
        ..Default::default()
    };
    execute_combine(args).unwrap();

    let export = read_tables_json(&output).unwrap();
    assert_eq!(export.sources, vec!["ijk"]);
    assert_eq!(export.tables[0].headers[0], "Loop");
}

#[test]
fn test_combine_fails_on_malformed_report() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("combined.csv");

    let args = CombineArgs {
        reports: vec![fixture("ijk.csv"), fixture("truncated.csv")],
        output: output.clone(),
        ..Default::default()
    };

    assert!(execute_combine(args).is_err());
    assert!(!output.exists());
}
