//! Rewrites categorical strings as lookup keys.

use thiserror::Error;

use shelter_model::{Category, EscapeMode, NormalizedRecord, RawRecord, SurrogateKey};

use crate::dictionary::DictionarySet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// A required value has no dictionary entry.
    ///
    /// Only reachable when the dictionaries were built from other records.
    #[error("line {line}: {category} value {value:?} is not in its lookup table")]
    MissingKey {
        category: Category,
        value: String,
        line: u64,
    },
    #[error("line {line}: required {category} value is empty")]
    EmptyRequired { category: Category, line: u64 },
}

/// Double every single quote in `name`.
pub fn escape_name(name: &str) -> String {
    name.replace('\'', "''")
}

fn required_key(
    dictionaries: &DictionarySet,
    category: Category,
    value: &str,
    line: u64,
) -> Result<SurrogateKey, NormalizeError> {
    if value.trim().is_empty() {
        return Err(NormalizeError::EmptyRequired { category, line });
    }
    dictionaries
        .get(category)
        .key_of(value)
        .ok_or_else(|| NormalizeError::MissingKey {
            category,
            value: value.trim().to_string(),
            line,
        })
}

fn optional_key(
    dictionaries: &DictionarySet,
    category: Category,
    value: &str,
    line: u64,
) -> Result<Option<SurrogateKey>, NormalizeError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    required_key(dictionaries, category, value, line).map(Some)
}

/// Produce the normalized form of one record.
///
/// `animal_type`, `breed` and `color1` must resolve; `color2`,
/// `outcome_subtype` and `outcome_type` become `None` when empty.
pub fn normalize_record(
    record: &RawRecord,
    dictionaries: &DictionarySet,
    escape: EscapeMode,
) -> Result<NormalizedRecord, NormalizeError> {
    let line = record.line;
    let name = match escape {
        EscapeMode::DoubleQuotes => escape_name(&record.name),
        EscapeMode::Verbatim => record.name.clone(),
    };
    Ok(NormalizedRecord {
        line,
        index: record.index.clone(),
        animal_id: record.animal_id.clone(),
        type_key: required_key(dictionaries, Category::Type, &record.animal_type, line)?,
        name,
        breed_key: required_key(dictionaries, Category::Breed, &record.breed, line)?,
        color1_key: required_key(dictionaries, Category::Color, &record.color1, line)?,
        color2_key: optional_key(dictionaries, Category::Color, &record.color2, line)?,
        date_of_birth: record.date_of_birth.clone(),
        outcome_subtype_key: optional_key(
            dictionaries,
            Category::OutcomeSubtype,
            &record.outcome_subtype,
            line,
        )?,
        outcome_month: record.outcome_month.clone(),
        outcome_year: record.outcome_year.clone(),
        outcome_type_key: optional_key(
            dictionaries,
            Category::OutcomeType,
            &record.outcome_type,
            line,
        )?,
        age_upon_outcome: record.age_upon_outcome.clone(),
    })
}

/// Normalize every record, stopping at the first failure.
pub fn normalize_records(
    records: &[RawRecord],
    dictionaries: &DictionarySet,
    escape: EscapeMode,
) -> Result<Vec<NormalizedRecord>, NormalizeError> {
    records
        .iter()
        .map(|record| normalize_record(record, dictionaries, escape))
        .collect()
}
