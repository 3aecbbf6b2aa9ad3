//! Target entity shapes, one per destination table.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::key::SurrogateKey;
use crate::record::NormalizedRecord;

/// Row of the `Animals` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimalEntity {
    pub id: String,
    pub type_key: SurrogateKey,
    pub name: String,
    pub breed_key: SurrogateKey,
    pub color1_key: SurrogateKey,
    pub color2_key: Option<SurrogateKey>,
    pub date_of_birth: String,
}

/// Row of the `Shelter` table: one outcome event for an animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelterEntity {
    pub index: String,
    pub animal_id: String,
    pub outcome_subtype_key: Option<SurrogateKey>,
    pub outcome_month: String,
    pub outcome_year: String,
    pub outcome_type_key: Option<SurrogateKey>,
    pub age_upon_outcome: String,
}

impl From<&NormalizedRecord> for AnimalEntity {
    fn from(record: &NormalizedRecord) -> Self {
        Self {
            id: record.animal_id.clone(),
            type_key: record.type_key,
            name: record.name.clone(),
            breed_key: record.breed_key,
            color1_key: record.color1_key,
            color2_key: record.color2_key,
            date_of_birth: record.date_of_birth.clone(),
        }
    }
}

impl From<&NormalizedRecord> for ShelterEntity {
    fn from(record: &NormalizedRecord) -> Self {
        Self {
            index: record.index.clone(),
            animal_id: record.animal_id.clone(),
            outcome_subtype_key: record.outcome_subtype_key,
            outcome_month: record.outcome_month.clone(),
            outcome_year: record.outcome_year.clone(),
            outcome_type_key: record.outcome_type_key,
            age_upon_outcome: record.age_upon_outcome.clone(),
        }
    }
}

/// One `(key, value)` row bound for a lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRow {
    pub key: SurrogateKey,
    pub value: String,
}

/// All rows of one lookup table, ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTable {
    pub category: Category,
    pub rows: Vec<LookupRow>,
}
