//! Reads the shelter export into [`RawRecord`]s.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use shelter_model::{RawRecord, columns};

use crate::error::IngestError;

/// Input location used when none is configured.
pub const DEFAULT_INPUT_PATH: &str = "./origin_db/main_animals.csv";

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized.to_ascii_lowercase()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Position of every required column within a header row.
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    positions: BTreeMap<&'static str, usize>,
}

impl HeaderIndex {
    /// Resolve required columns, failing on the first one that is absent.
    ///
    /// Matching ignores case and surrounding whitespace. Extra columns are
    /// allowed and ignored.
    pub fn resolve(headers: &StringRecord) -> Result<Self, IngestError> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let mut positions = BTreeMap::new();
        for column in columns::REQUIRED {
            let idx = normalized
                .iter()
                .position(|header| header == column)
                .ok_or(IngestError::MissingColumn { column })?;
            positions.insert(column, idx);
        }
        Ok(Self { positions })
    }

    fn cell(&self, record: &StringRecord, column: &'static str) -> String {
        self.positions
            .get(column)
            .and_then(|idx| record.get(*idx))
            .map(normalize_cell)
            .unwrap_or_default()
    }

    fn to_record(&self, record: &StringRecord, line: u64) -> RawRecord {
        RawRecord {
            line,
            index: self.cell(record, columns::INDEX),
            animal_id: self.cell(record, columns::ANIMAL_ID),
            animal_type: self.cell(record, columns::ANIMAL_TYPE),
            name: self.cell(record, columns::NAME),
            breed: self.cell(record, columns::BREED),
            color1: self.cell(record, columns::COLOR1),
            color2: self.cell(record, columns::COLOR2),
            date_of_birth: self.cell(record, columns::DATE_OF_BIRTH),
            outcome_subtype: self.cell(record, columns::OUTCOME_SUBTYPE),
            outcome_month: self.cell(record, columns::OUTCOME_MONTH),
            outcome_year: self.cell(record, columns::OUTCOME_YEAR),
            outcome_type: self.cell(record, columns::OUTCOME_TYPE),
            age_upon_outcome: self.cell(record, columns::AGE_UPON_OUTCOME),
        }
    }
}

/// Read every data row of the file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>, IngestError> {
    let start = Instant::now();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records_from_reader(file)?;
    info!(
        path = %path.display(),
        record_count = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "read input"
    );
    Ok(records)
}

/// Read every data row from any CSV source with a header row.
///
/// Rows with every cell blank are skipped; short rows are padded with
/// empty values.
pub fn read_records_from_reader<R: Read>(source: R) -> Result<Vec<RawRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers().map_err(|e| IngestError::csv(&e))?.clone();
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(IngestError::EmptyInput);
    }
    let index = HeaderIndex::resolve(&headers)?;
    debug!(column_count = headers.len(), "resolved header");

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::csv(&e))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let line = record.position().map(csv::Position::line).unwrap_or(0);
        records.push(index.to_record(&record, line));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_strips_bom_and_case() {
        assert_eq!(normalize_header("\u{feff}Animal_ID "), "animal_id");
        assert_eq!(normalize_header("  color1"), "color1");
    }

    #[test]
    fn cells_keep_inner_whitespace() {
        assert_eq!(normalize_cell(" Tabby "), " Tabby ");
        assert_eq!(normalize_cell("\u{feff}Dog"), "Dog");
    }
}
