//! Source rows and their normalized form.

use serde::{Deserialize, Serialize};

use crate::key::SurrogateKey;

/// Column names expected in the source file header.
pub mod columns {
    pub const INDEX: &str = "index";
    pub const ANIMAL_ID: &str = "animal_id";
    pub const ANIMAL_TYPE: &str = "animal_type";
    pub const NAME: &str = "name";
    pub const BREED: &str = "breed";
    pub const COLOR1: &str = "color1";
    pub const COLOR2: &str = "color2";
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    pub const OUTCOME_SUBTYPE: &str = "outcome_subtype";
    pub const OUTCOME_MONTH: &str = "outcome_month";
    pub const OUTCOME_YEAR: &str = "outcome_year";
    pub const OUTCOME_TYPE: &str = "outcome_type";
    pub const AGE_UPON_OUTCOME: &str = "age_upon_outcome";

    /// Every column a source file must carry, optional values included.
    pub const REQUIRED: [&str; 13] = [
        INDEX,
        ANIMAL_ID,
        ANIMAL_TYPE,
        NAME,
        BREED,
        COLOR1,
        COLOR2,
        DATE_OF_BIRTH,
        OUTCOME_SUBTYPE,
        OUTCOME_MONTH,
        OUTCOME_YEAR,
        OUTCOME_TYPE,
        AGE_UPON_OUTCOME,
    ];
}

/// One source row, values kept exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// 1-based line number in the source file (header is line 1).
    pub line: u64,
    pub index: String,
    pub animal_id: String,
    pub animal_type: String,
    pub name: String,
    pub breed: String,
    pub color1: String,
    pub color2: String,
    pub date_of_birth: String,
    pub outcome_subtype: String,
    pub outcome_month: String,
    pub outcome_year: String,
    pub outcome_type: String,
    pub age_upon_outcome: String,
}

/// A source row with categorical values replaced by lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub line: u64,
    pub index: String,
    pub animal_id: String,
    pub type_key: SurrogateKey,
    pub name: String,
    pub breed_key: SurrogateKey,
    pub color1_key: SurrogateKey,
    pub color2_key: Option<SurrogateKey>,
    pub date_of_birth: String,
    pub outcome_subtype_key: Option<SurrogateKey>,
    pub outcome_month: String,
    pub outcome_year: String,
    pub outcome_type_key: Option<SurrogateKey>,
    pub age_upon_outcome: String,
}
