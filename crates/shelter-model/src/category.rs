//! Categorical columns that are lifted into lookup tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A categorical value family with its own lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Type,
    Breed,
    Color,
    OutcomeType,
    OutcomeSubtype,
}

impl Category {
    /// All categories in lookup-table load order.
    pub const ALL: [Category; 5] = [
        Category::Color,
        Category::Type,
        Category::Breed,
        Category::OutcomeSubtype,
        Category::OutcomeType,
    ];

    /// Name of the lookup table holding this category.
    pub const fn table_name(self) -> &'static str {
        match self {
            Category::Type => "Type_Dict",
            Category::Breed => "Breed_Dict",
            Category::Color => "Color_Dict",
            Category::OutcomeType => "Outcome_types",
            Category::OutcomeSubtype => "Outcome_subtypes",
        }
    }

    /// Name of the value column inside the lookup table.
    pub const fn value_column(self) -> &'static str {
        match self {
            Category::Type => "type",
            Category::Breed => "breed",
            Category::Color => "color",
            Category::OutcomeType => "outcome_type",
            Category::OutcomeSubtype => "outcome_subtype",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Type => "type",
            Category::Breed => "breed",
            Category::Color => "color",
            Category::OutcomeType => "outcome type",
            Category::OutcomeSubtype => "outcome subtype",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
