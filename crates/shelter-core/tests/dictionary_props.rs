//! Property tests for dictionary building and key assignment.

use std::collections::BTreeSet;

use proptest::prelude::*;

use shelter_core::{DictionarySet, normalize_records};
use shelter_model::{Category, EscapeMode, RawRecord};

fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just(" ".to_string()),
        "[A-Za-z' ]{1,8}",
    ]
}

fn required_value() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,6}( [A-Za-z]{1,4})?"
}

prop_compose! {
    fn raw_record()(
        animal_type in required_value(),
        breed in required_value(),
        color1 in required_value(),
        color2 in value(),
        outcome_type in value(),
        outcome_subtype in value(),
        name in value(),
    ) -> RawRecord {
        RawRecord {
            animal_id: "A1".to_string(),
            animal_type,
            breed,
            color1,
            color2,
            outcome_type,
            outcome_subtype,
            name,
            ..RawRecord::default()
        }
    }
}

fn expected_values(records: &[RawRecord], category: Category) -> BTreeSet<String> {
    let mut values = BTreeSet::new();
    for record in records {
        let cells: Vec<&str> = match category {
            Category::Type => vec![record.animal_type.as_str()],
            Category::Breed => vec![record.breed.as_str()],
            Category::Color => vec![record.color1.as_str(), record.color2.as_str()],
            Category::OutcomeType => vec![record.outcome_type.as_str()],
            Category::OutcomeSubtype => vec![record.outcome_subtype.as_str()],
        };
        for cell in cells {
            let trimmed = cell.trim();
            if !trimmed.is_empty() {
                values.insert(trimmed.to_string());
            }
        }
    }
    values
}

proptest! {
    #[test]
    fn every_distinct_value_appears_once(records in prop::collection::vec(raw_record(), 0..40)) {
        let set = DictionarySet::build(&records);
        for category in Category::ALL {
            let dictionary = set.get(category);
            let stored: Vec<&str> = dictionary.iter().map(|(_, value)| value).collect();
            let unique: BTreeSet<String> = stored.iter().map(|v| (*v).to_string()).collect();
            prop_assert_eq!(stored.len(), unique.len());
            prop_assert_eq!(unique, expected_values(&records, category));
        }
    }

    #[test]
    fn keys_invert_to_values(records in prop::collection::vec(raw_record(), 1..40)) {
        let set = DictionarySet::build(&records);
        for dictionary in set.iter() {
            for (key, value) in dictionary.iter() {
                prop_assert!(key.get() >= 1);
                prop_assert_eq!(dictionary.value_of(key), Some(value));
                prop_assert_eq!(dictionary.key_of(value), Some(key));
            }
        }
    }

    #[test]
    fn normalized_fields_are_keys_or_null(records in prop::collection::vec(raw_record(), 1..40)) {
        let set = DictionarySet::build(&records);
        let normalized = normalize_records(&records, &set, EscapeMode::DoubleQuotes)
            .expect("dictionaries cover their own records");
        for (raw, record) in records.iter().zip(&normalized) {
            prop_assert_eq!(
                set.get(Category::Type).value_of(record.type_key),
                Some(raw.animal_type.trim())
            );
            prop_assert_eq!(record.color2_key.is_none(), raw.color2.trim().is_empty());
            prop_assert_eq!(record.outcome_type_key.is_none(), raw.outcome_type.trim().is_empty());
            prop_assert_eq!(
                record.outcome_subtype_key.is_none(),
                raw.outcome_subtype.trim().is_empty()
            );
            prop_assert_eq!(record.name.matches('\'').count(), raw.name.matches('\'').count() * 2);
        }
    }
}
