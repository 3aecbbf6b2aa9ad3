use serde::{Deserialize, Serialize};

/// How rows of the `Animals` table are deduplicated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimalDedupe {
    /// Keep the first row per animal id.
    #[default]
    ById,
    /// Collapse rows only when every animal attribute matches.
    ///
    /// Two rows sharing an id but differing elsewhere both survive and
    /// will collide on the `Animals.id` unique constraint at load time.
    ByValue,
}

/// Treatment of single quotes in animal names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscapeMode {
    /// Double every `'` so the stored text matches the legacy loader.
    #[default]
    DoubleQuotes,
    /// Store names unchanged.
    Verbatim,
}

/// Options controlling normalization and entity splitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub animal_dedupe: AnimalDedupe,
    pub escape: EscapeMode,
}

impl NormalizeOptions {
    /// Options that reproduce the legacy loader exactly.
    pub fn legacy() -> Self {
        Self {
            animal_dedupe: AnimalDedupe::ByValue,
            escape: EscapeMode::DoubleQuotes,
        }
    }

    #[must_use]
    pub fn with_animal_dedupe(mut self, dedupe: AnimalDedupe) -> Self {
        self.animal_dedupe = dedupe;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }
}
