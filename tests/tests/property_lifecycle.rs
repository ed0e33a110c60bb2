//! Field lifecycle integration tests.
//!
//! Exercises the full read/write/delete contract of a typed field as the
//! entity machinery would drive it: default before first write, coercion
//! on write, fail-fast on bad input, revert to default on delete.

use grom_tests::prelude::*;

mod integer_field {
    use super::*;

    #[test]
    fn test_integer_field_lifecycle() {
        // GIVEN: a model with an Int field defaulting to 0 and a fresh instance
        let model = person_model();
        let mut instance = Instance::new();

        // THEN: a read before any write observes the default
        assert_eq!(model.get(&instance, "age").unwrap(), Some(Value::Int(0)));

        // WHEN: a string that coerces to an integer is written
        model.set(&mut instance, "age", "42").unwrap();

        // THEN: the read returns the coerced integer, not the raw string
        assert_eq!(model.get(&instance, "age").unwrap(), Some(Value::Int(42)));

        // WHEN: a non-numeric string is written
        let err = model.set(&mut instance, "age", "abc").unwrap_err();

        // THEN: the write fails naming the offending value and nothing changes
        match err {
            ModelError::Validation(inner) => {
                assert_eq!(inner.value, Value::from("abc"));
                assert_eq!(inner.expected, "Int");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(model.get(&instance, "age").unwrap(), Some(Value::Int(42)));

        // WHEN: the field is deleted
        model.delete(&mut instance, "age").unwrap();

        // THEN: reads observe the default again
        assert_eq!(model.get(&instance, "age").unwrap(), Some(Value::Int(0)));
    }
}

mod string_field {
    use super::*;

    #[test]
    fn test_string_field_without_default_reads_absent() {
        // GIVEN: a String field with no default
        let model = person_model();
        let instance = Instance::new();

        // THEN: a read before any write observes the absent marker
        assert_eq!(model.get(&instance, "name").unwrap(), None);
    }

    #[test]
    fn test_already_coerced_value_survives_unchanged() {
        let model = person_model();
        let mut instance = Instance::new();

        model.set(&mut instance, "name", "x").unwrap();
        assert_eq!(model.get(&instance, "name").unwrap(), Some(Value::from("x")));
    }
}

mod delete_semantics {
    use super::*;

    #[test]
    fn test_delete_on_unset_field_is_noop() {
        // GIVEN: an instance that never had the field set
        let model = person_model();
        let mut instance = Instance::new();

        // WHEN/THEN: delete does not fail and the default still reads
        assert_eq!(model.delete(&mut instance, "age").unwrap(), None);
        assert_eq!(model.get(&instance, "age").unwrap(), Some(Value::Int(0)));
    }

    #[test]
    fn test_delete_only_clears_the_targeted_field() {
        let model = person_model();
        let mut instance = Instance::new();
        model.set(&mut instance, "name", "Alice").unwrap();
        model.set(&mut instance, "active", true).unwrap();

        model.delete(&mut instance, "active").unwrap();

        assert_eq!(model.get(&instance, "name").unwrap(), Some(Value::from("Alice")));
        assert_eq!(model.get(&instance, "active").unwrap(), None);
    }
}

mod coercion {
    use super::*;

    #[test]
    fn test_float_and_bool_fields_coerce_like_the_others() {
        let model = person_model();
        let mut instance = Instance::new();

        model.set(&mut instance, "score", "2.5").unwrap();
        assert_eq!(model.get(&instance, "score").unwrap(), Some(Value::Float(2.5)));

        model.set(&mut instance, "active", "true").unwrap();
        assert_eq!(model.get(&instance, "active").unwrap(), Some(Value::Bool(true)));

        assert!(model.set(&mut instance, "active", "maybe").is_err());
        assert!(model.set(&mut instance, "score", "fast").is_err());
    }

    #[test]
    fn test_validation_is_idempotent_through_the_descriptor() {
        // Setting a field to the value it already holds is a no-op coercion.
        let model = person_model();
        let mut instance = Instance::new();

        model.set(&mut instance, "age", "42").unwrap();
        let stored = model.get(&instance, "age").unwrap().unwrap();

        model.set(&mut instance, "age", stored.clone()).unwrap();
        assert_eq!(model.get(&instance, "age").unwrap(), Some(stored));
    }
}
