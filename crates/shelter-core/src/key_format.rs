//! Turns dictionaries into lookup-table rows.

use shelter_model::{LookupRow, LookupTable};

use crate::dictionary::{Dictionary, DictionarySet};

/// `(key, value)` rows of one dictionary, ordered by key.
pub fn lookup_rows(dictionary: &Dictionary) -> Vec<LookupRow> {
    dictionary
        .iter()
        .map(|(key, value)| LookupRow {
            key,
            value: value.to_string(),
        })
        .collect()
}

/// Rows for all five lookup tables in load order.
pub fn lookup_tables(dictionaries: &DictionarySet) -> Vec<LookupTable> {
    dictionaries
        .iter()
        .map(|dictionary| LookupTable {
            category: dictionary.category(),
            rows: lookup_rows(dictionary),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelter_model::Category;

    #[test]
    fn rows_are_numbered_from_one() {
        let mut dict = Dictionary::new(Category::OutcomeType);
        dict.insert("Adoption");
        dict.insert("Transfer");
        let rows = lookup_rows(&dict);
        let pairs: Vec<(u32, &str)> = rows.iter().map(|r| (r.key.get(), r.value.as_str())).collect();
        assert_eq!(pairs, vec![(1, "Adoption"), (2, "Transfer")]);
    }

    #[test]
    fn empty_dictionary_yields_no_rows() {
        let dict = Dictionary::new(Category::OutcomeSubtype);
        assert!(lookup_rows(&dict).is_empty());
    }

    #[test]
    fn tables_cover_every_category() {
        let set = DictionarySet::build(&[]);
        let categories: Vec<Category> = lookup_tables(&set).iter().map(|t| t.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }
}
