//! Normalization stages run in order over one record set.
//!
//! 1. **Dictionaries**: collect distinct categorical values
//! 2. **Normalize**: rewrite every record with lookup keys
//! 3. **Split**: project records onto `Animals` and `Shelter`
//!
//! Splitting starts only after every record has been normalized.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span};

use shelter_model::{Category, LookupTable, NormalizeOptions, RawRecord};

use crate::dictionary::DictionarySet;
use crate::key_format::lookup_tables;
use crate::normalize::{NormalizeError, normalize_records};
use crate::split::{EntitySet, split_entities};

/// Everything the load stage needs.
#[derive(Debug, Clone)]
pub struct NormalizeOutput {
    pub dictionaries: DictionarySet,
    pub lookups: Vec<LookupTable>,
    pub entities: EntitySet,
    pub summary: NormalizeSummary,
}

/// Row counts produced by a normalization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeSummary {
    pub records: usize,
    pub dictionaries: BTreeMap<Category, usize>,
    pub animals: usize,
    pub shelter: usize,
    pub conflicting_animals: usize,
}

pub fn run_normalization(
    records: &[RawRecord],
    options: NormalizeOptions,
) -> Result<NormalizeOutput, NormalizeError> {
    let start = Instant::now();

    let dictionaries = info_span!("dictionaries").in_scope(|| {
        let dictionaries = DictionarySet::build(records);
        for dictionary in dictionaries.iter() {
            debug!(
                category = %dictionary.category(),
                value_count = dictionary.len(),
                "built dictionary"
            );
        }
        dictionaries
    });

    let normalized = info_span!("normalize")
        .in_scope(|| normalize_records(records, &dictionaries, options.escape))?;

    let entities =
        info_span!("split").in_scope(|| split_entities(&normalized, options.animal_dedupe));

    let lookups = lookup_tables(&dictionaries);
    let summary = NormalizeSummary {
        records: records.len(),
        dictionaries: dictionaries
            .iter()
            .map(|dictionary| (dictionary.category(), dictionary.len()))
            .collect(),
        animals: entities.animals.len(),
        shelter: entities.shelter.len(),
        conflicting_animals: entities.conflicting_animals,
    };
    info!(
        record_count = summary.records,
        animal_count = summary.animals,
        shelter_count = summary.shelter,
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );

    Ok(NormalizeOutput {
        dictionaries,
        lookups,
        entities,
        summary,
    })
}
