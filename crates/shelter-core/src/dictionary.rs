//! Deduplicated value collections, one per [`Category`].

use std::collections::HashMap;

use shelter_model::{Category, RawRecord, SurrogateKey};

/// Distinct values of one category in first-seen order.
///
/// A value's position is its surrogate key (1-based) for the rest of the
/// run. Values are trimmed on insert and empty values are never stored.
#[derive(Debug, Clone)]
pub struct Dictionary {
    category: Category,
    values: Vec<String>,
    keys: HashMap<String, SurrogateKey>,
}

impl Dictionary {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            values: Vec::new(),
            keys: HashMap::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Add `value` if it is non-empty after trimming and not yet present.
    ///
    /// Returns the key assigned to the value, or `None` for empty input.
    pub fn insert(&mut self, value: &str) -> Option<SurrogateKey> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(key) = self.keys.get(trimmed) {
            return Some(*key);
        }
        // Positions beyond u32 cannot be keyed; such inputs do not fit in memory anyway.
        let key = SurrogateKey::from_position(self.values.len()).ok()?;
        self.values.push(trimmed.to_string());
        self.keys.insert(trimmed.to_string(), key);
        Some(key)
    }

    /// Key of `value`, matched after trimming.
    pub fn key_of(&self, value: &str) -> Option<SurrogateKey> {
        self.keys.get(value.trim()).copied()
    }

    pub fn value_of(&self, key: SurrogateKey) -> Option<&str> {
        self.values.get(key.position()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (SurrogateKey, &str)> {
        self.values.iter().enumerate().filter_map(|(idx, value)| {
            SurrogateKey::from_position(idx)
                .ok()
                .map(|key| (key, value.as_str()))
        })
    }

    pub fn contains(&self, value: &str) -> bool {
        self.key_of(value).is_some()
    }
}

/// The five lookup dictionaries built from one record set.
///
/// Built once by [`DictionarySet::build`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DictionarySet {
    types: Dictionary,
    breeds: Dictionary,
    colors: Dictionary,
    outcome_types: Dictionary,
    outcome_subtypes: Dictionary,
}

impl DictionarySet {
    pub fn build(records: &[RawRecord]) -> Self {
        let mut set = Self {
            types: Dictionary::new(Category::Type),
            breeds: Dictionary::new(Category::Breed),
            colors: Dictionary::new(Category::Color),
            outcome_types: Dictionary::new(Category::OutcomeType),
            outcome_subtypes: Dictionary::new(Category::OutcomeSubtype),
        };
        for record in records {
            set.colors.insert(&record.color1);
            set.colors.insert(&record.color2);
            set.breeds.insert(&record.breed);
            set.types.insert(&record.animal_type);
            set.outcome_types.insert(&record.outcome_type);
            set.outcome_subtypes.insert(&record.outcome_subtype);
        }
        set
    }

    pub fn get(&self, category: Category) -> &Dictionary {
        match category {
            Category::Type => &self.types,
            Category::Breed => &self.breeds,
            Category::Color => &self.colors,
            Category::OutcomeType => &self.outcome_types,
            Category::OutcomeSubtype => &self.outcome_subtypes,
        }
    }

    /// Dictionaries in lookup-table load order.
    pub fn iter(&self) -> impl Iterator<Item = &Dictionary> {
        Category::ALL.into_iter().map(|category| self.get(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_trims_and_skips_empty() {
        let mut dict = Dictionary::new(Category::Color);
        assert_eq!(dict.insert("  "), None);
        let black = dict.insert(" Black ").expect("black key");
        assert_eq!(dict.insert("Black"), Some(black));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.value_of(black), Some("Black"));
    }

    #[test]
    fn keys_follow_first_seen_order() {
        let mut dict = Dictionary::new(Category::Breed);
        dict.insert("Lab");
        dict.insert("DSH");
        dict.insert("Lab");
        let entries: Vec<(u32, &str)> = dict.iter().map(|(k, v)| (k.get(), v)).collect();
        assert_eq!(entries, vec![(1, "Lab"), (2, "DSH")]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut dict = Dictionary::new(Category::Type);
        dict.insert("Dog");
        assert!(dict.contains("Dog"));
        assert!(!dict.contains("dog"));
    }

    #[test]
    fn colors_draw_from_both_columns() {
        let records = vec![
            RawRecord {
                color1: "Black".to_string(),
                color2: "Tan".to_string(),
                ..RawRecord::default()
            },
            RawRecord {
                color1: "Tan".to_string(),
                ..RawRecord::default()
            },
        ];
        let set = DictionarySet::build(&records);
        assert_eq!(set.get(Category::Color).len(), 2);
        assert!(set.get(Category::Type).is_empty());
    }
}
