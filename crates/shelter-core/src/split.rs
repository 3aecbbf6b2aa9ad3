//! Projects normalized records onto the `Animals` and `Shelter` tables.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use shelter_model::{AnimalDedupe, AnimalEntity, NormalizedRecord, ShelterEntity};

/// Entities ready for loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySet {
    /// Deduplicated animals in order of first appearance.
    pub animals: Vec<AnimalEntity>,
    /// One outcome row per input record, in input order.
    pub shelter: Vec<ShelterEntity>,
    /// Rows dropped because their animal id was already present with
    /// different attributes. Always zero for [`AnimalDedupe::ByValue`].
    pub conflicting_animals: usize,
}

pub fn split_entities(records: &[NormalizedRecord], dedupe: AnimalDedupe) -> EntitySet {
    let mut set = EntitySet {
        shelter: records.iter().map(ShelterEntity::from).collect(),
        ..EntitySet::default()
    };
    match dedupe {
        AnimalDedupe::ByValue => {
            let mut seen: HashSet<AnimalEntity> = HashSet::new();
            for record in records {
                let animal = AnimalEntity::from(record);
                if seen.insert(animal.clone()) {
                    set.animals.push(animal);
                }
            }
        }
        AnimalDedupe::ById => {
            let mut by_id: HashMap<String, usize> = HashMap::new();
            for record in records {
                let animal = AnimalEntity::from(record);
                if let Some(&existing) = by_id.get(&animal.id) {
                    if set.animals[existing] != animal {
                        set.conflicting_animals += 1;
                        warn!(
                            animal_id = %animal.id,
                            line = record.line,
                            "animal attributes differ from an earlier row; keeping the first"
                        );
                    }
                    continue;
                }
                by_id.insert(animal.id.clone(), set.animals.len());
                set.animals.push(animal);
            }
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelter_model::SurrogateKey;

    fn key(value: u32) -> SurrogateKey {
        SurrogateKey::new(value).expect("non-zero key")
    }

    fn normalized(index: &str, animal_id: &str, name: &str) -> NormalizedRecord {
        NormalizedRecord {
            line: 2,
            index: index.to_string(),
            animal_id: animal_id.to_string(),
            type_key: key(1),
            name: name.to_string(),
            breed_key: key(1),
            color1_key: key(1),
            color2_key: None,
            date_of_birth: "2015-01-01T00:00:00".to_string(),
            outcome_subtype_key: None,
            outcome_month: "3".to_string(),
            outcome_year: "2016".to_string(),
            outcome_type_key: Some(key(2)),
            age_upon_outcome: "1 year".to_string(),
        }
    }

    #[test]
    fn identical_rows_collapse_in_both_modes() {
        let records = vec![normalized("0", "A1", "Rex"), normalized("1", "A1", "Rex")];
        for mode in [AnimalDedupe::ById, AnimalDedupe::ByValue] {
            let set = split_entities(&records, mode);
            assert_eq!(set.animals.len(), 1);
            assert_eq!(set.shelter.len(), 2);
            assert_eq!(set.conflicting_animals, 0);
        }
    }

    #[test]
    fn by_id_keeps_first_of_conflicting_rows() {
        let records = vec![normalized("0", "A1", "Rex"), normalized("1", "A1", "Max")];
        let set = split_entities(&records, AnimalDedupe::ById);
        assert_eq!(set.animals.len(), 1);
        assert_eq!(set.animals[0].name, "Rex");
        assert_eq!(set.conflicting_animals, 1);
    }

    #[test]
    fn by_value_keeps_conflicting_rows() {
        let records = vec![normalized("0", "A1", "Rex"), normalized("1", "A1", "Max")];
        let set = split_entities(&records, AnimalDedupe::ByValue);
        assert_eq!(set.animals.len(), 2);
    }

    #[test]
    fn shelter_rows_follow_input_order() {
        let records = vec![
            normalized("5", "A2", "Kit"),
            normalized("3", "A1", "Rex"),
            normalized("9", "A2", "Kit"),
        ];
        let set = split_entities(&records, AnimalDedupe::ById);
        let indexes: Vec<&str> = set.shelter.iter().map(|s| s.index.as_str()).collect();
        assert_eq!(indexes, vec!["5", "3", "9"]);
        let ids: Vec<&str> = set.animals.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A2", "A1"]);
    }
}
