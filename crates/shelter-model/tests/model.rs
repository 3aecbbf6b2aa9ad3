//! Tests for shelter-model types.

use shelter_model::{
    AnimalDedupe, Category, EscapeMode, ModelError, NormalizeOptions, SurrogateKey,
};

#[test]
fn surrogate_key_rejects_zero_and_negative() {
    assert_eq!(SurrogateKey::new(0), Err(ModelError::NonPositiveKey(0)));
    assert_eq!(
        SurrogateKey::try_from(-4_i64),
        Err(ModelError::NonPositiveKey(-4))
    );
    assert_eq!(
        SurrogateKey::try_from(i64::MAX),
        Err(ModelError::KeyOutOfRange(i64::MAX))
    );
}

#[test]
fn surrogate_key_position_is_one_based() {
    let key = SurrogateKey::from_position(0).expect("first position");
    assert_eq!(key.get(), 1);
    assert_eq!(key.position(), 0);

    let key = SurrogateKey::from_position(41).expect("position 41");
    assert_eq!(key.get(), 42);
    assert_eq!(i64::from(key), 42);
}

#[test]
fn surrogate_key_deserialize_rejects_zero() {
    let parsed: Result<SurrogateKey, _> = serde_json::from_str("0");
    assert!(parsed.is_err());
    let parsed: SurrogateKey = serde_json::from_str("7").expect("deserialize key");
    assert_eq!(parsed.get(), 7);
}

#[test]
fn category_table_names_match_legacy_schema() {
    assert_eq!(Category::Type.table_name(), "Type_Dict");
    assert_eq!(Category::Breed.table_name(), "Breed_Dict");
    assert_eq!(Category::Color.table_name(), "Color_Dict");
    assert_eq!(Category::OutcomeType.table_name(), "Outcome_types");
    assert_eq!(Category::OutcomeSubtype.table_name(), "Outcome_subtypes");
    assert_eq!(Category::OutcomeSubtype.value_column(), "outcome_subtype");
}

#[test]
fn options_default_to_dedupe_by_id() {
    let options = NormalizeOptions::default();
    assert_eq!(options.animal_dedupe, AnimalDedupe::ById);
    assert_eq!(options.escape, EscapeMode::DoubleQuotes);
    assert_eq!(NormalizeOptions::legacy().animal_dedupe, AnimalDedupe::ByValue);
}

#[test]
fn options_parse_from_toml() {
    let options: NormalizeOptions =
        toml::from_str("animal_dedupe = \"by-value\"\nescape = \"verbatim\"\n")
            .expect("parse options");
    assert_eq!(options.animal_dedupe, AnimalDedupe::ByValue);
    assert_eq!(options.escape, EscapeMode::Verbatim);

    let partial: NormalizeOptions = toml::from_str("").expect("parse empty options");
    assert_eq!(partial, NormalizeOptions::default());
}
