//! Persistence boundary integration tests.
//!
//! Covers the dehydrate/hydrate contract the database session layer
//! relies on: per-type `to_db`/`from_db` conversion, persisted-key
//! mapping, and the round-trip law.

use grom_tests::prelude::*;

#[test]
fn test_dehydrate_hydrate_round_trip() {
    // GIVEN: an instance with every field populated
    let model = person_model();
    let mut instance = Instance::new();
    model.set(&mut instance, "name", "Alice").unwrap();
    model.set(&mut instance, "age", 30i64).unwrap();
    model.set(&mut instance, "score", 98.5).unwrap();
    model.set(&mut instance, "active", true).unwrap();

    // WHEN: the instance is persisted and rebuilt
    let persisted = model.dehydrate(&instance);
    let hydrated = model.hydrate(persisted).unwrap();

    // THEN: every field reads back equal
    for name in ["name", "age", "score", "active"] {
        assert_eq!(
            model.get(&hydrated, name).unwrap(),
            model.get(&instance, name).unwrap(),
            "field {} did not survive the round trip",
            name
        );
    }
}

#[test]
fn test_dehydrate_keys_by_persisted_name() {
    let model = person_model();
    let mut instance = Instance::new();
    model.set(&mut instance, "active", true).unwrap();

    let persisted = model.dehydrate(&instance);

    // "active" is declared with a differing persisted key.
    assert_eq!(persisted.get("is_active"), Some(&Value::Bool(true)));
    assert!(!persisted.contains_key("active"));
}

#[test]
fn test_absent_fields_are_omitted_from_persisted_form() {
    let model = person_model();
    let instance = Instance::new();

    let persisted = model.dehydrate(&instance);

    // name and active have no default and were never set; age and score
    // default and therefore persist.
    assert!(!persisted.contains_key("name"));
    assert!(!persisted.contains_key("is_active"));
    assert_eq!(persisted.get("age"), Some(&Value::Int(0)));
    assert_eq!(persisted.get("score"), Some(&Value::Float(0.0)));
}

#[test]
fn test_hydrate_rejects_unmapped_keys() {
    let model = person_model();

    let err = model.hydrate(values! { "height" => 180i64 }).unwrap_err();

    assert!(matches!(err, ModelError::UnknownDbKey { ref key, .. } if key == "height"));
}

#[test]
fn test_persisted_form_serializes_to_json() {
    // The session layer serializes persisted maps; Value is serde-ready.
    let model = person_model();
    let mut instance = Instance::new();
    model.set(&mut instance, "name", "Alice").unwrap();
    model.delete(&mut instance, "age").unwrap();

    let json = serde_json::to_string(&model.dehydrate(&instance)).unwrap();

    assert!(json.contains(r#""name":{"String":"Alice"}"#));
    assert!(json.contains(r#""age":{"Int":0}"#));
}
