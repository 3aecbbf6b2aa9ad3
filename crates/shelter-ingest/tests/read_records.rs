use std::io::Write;

use shelter_ingest::{IngestError, read_records, read_records_from_reader};

const HEADER: &str = "index,age_upon_outcome,animal_id,animal_type,name,breed,color1,color2,date_of_birth,outcome_subtype,outcome_type,outcome_month,outcome_year";

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn reads_rows_by_header_name() {
    let contents = format!(
        "{HEADER}\n\
         0,2 weeks,A006100,Dog,Scamp,Spinone Italiano Mix,Yellow,White,2007-07-09T00:00:00,,Return to Owner,12,2017\n\
         1,1 year,A047759,Cat,,Domestic Shorthair Mix,Brown ,,2004-04-02T00:00:00,Partner,Transfer,4,2014\n"
    );
    let file = write_csv(&contents);
    let records = read_records(file.path()).expect("read records");

    assert_eq!(records.len(), 2);
    let first = &records[0];
    assert_eq!(first.line, 2);
    assert_eq!(first.animal_id, "A006100");
    assert_eq!(first.animal_type, "Dog");
    assert_eq!(first.color2, "White");
    assert_eq!(first.outcome_subtype, "");
    assert_eq!(first.outcome_type, "Return to Owner");
    assert_eq!(first.age_upon_outcome, "2 weeks");

    let second = &records[1];
    assert_eq!(second.line, 3);
    assert_eq!(second.name, "");
    assert_eq!(second.color1, "Brown ", "cells are not trimmed at ingest");
    assert_eq!(second.outcome_subtype, "Partner");
}

#[test]
fn skips_blank_rows_and_pads_short_rows() {
    let contents = format!("{HEADER}\n,,,,,,,,,,,,\n7,3 years,A1,Dog,Rex,Lab,Black\n");
    let records = read_records_from_reader(contents.as_bytes()).expect("read records");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].index, "7");
    assert_eq!(records[0].color2, "");
    assert_eq!(records[0].outcome_year, "");
}

#[test]
fn header_matching_ignores_case_and_bom() {
    let header = HEADER.to_ascii_uppercase();
    let contents = format!("\u{feff}{header}\n0,1 year,A1,Cat,Tom,DSH,White,,,,,5,2015\n");
    let records = read_records_from_reader(contents.as_bytes()).expect("read records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].breed, "DSH");
}

#[test]
fn missing_column_is_reported() {
    let header = HEADER.replace(",color2", "");
    let contents = format!("{header}\n");
    let error = read_records_from_reader(contents.as_bytes()).expect_err("missing column");
    assert!(matches!(
        error,
        IngestError::MissingColumn { column: "color2" }
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let error = read_records(&path).expect_err("missing file");
    assert!(matches!(error, IngestError::Io { .. }));
    assert!(error.to_string().contains("absent.csv"));
}

#[test]
fn empty_input_is_rejected() {
    let error = read_records_from_reader("".as_bytes()).expect_err("empty input");
    assert!(matches!(error, IngestError::EmptyInput));
}
