//! Property-based tests for the mapping engine
//!
//! These tests verify invariants that should hold for every source object
//! the engine is handed.


use automap_core::naming::{translate, CaseConvention};
use automap_core::{AutoMapper, Object, Operation, Value};
use proptest::prelude::*;
use test_support::blog_mapper;

/// Strategy for generating a camelCase property name
fn camel_name_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{2,6}", 1..4).prop_map(|tokens| {
        tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if i == 0 {
                    token.clone()
                } else {
                    let mut chars = token.chars();
                    chars
                        .next()
                        .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
                        .unwrap_or_default()
                }
            })
            .collect()
    })
}

/// Strategy for generating a flat source object with string properties
fn flat_object_strategy() -> impl Strategy<Value = Object> {
    proptest::collection::btree_map(camel_name_strategy(), "[a-zA-Z0-9]{0,12}", 0..8).prop_map(
        |properties| {
            properties
                .into_iter()
                .fold(Object::new("Source"), |object, (name, value)| object.with(name, value))
        },
    )
}

proptest! {
    #[test]
    fn prop_mapping_is_idempotent(id in 0i64..1000, comments in 0usize..5) {
        let mapper = blog_mapper();
        let source = test_support::post(id, "Title", comments);

        let first = mapper.map(&source, "PostDto").unwrap();
        let second = mapper.map(&source, "PostDto").unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_map_multiple_preserves_order(ids in proptest::collection::vec(0i64..1000, 0..10)) {
        let mapper = blog_mapper();
        let posts: Vec<Object> = ids.iter().map(|&id| test_support::post(id, "T", 0)).collect();

        let dtos = mapper.map_multiple(&posts, "PostDto").unwrap();
        let mapped: Vec<i64> = dtos
            .iter()
            .filter_map(|dto| dto.get("id").and_then(Value::as_i64))
            .collect();
        prop_assert_eq!(mapped, ids);
    }

    #[test]
    fn prop_array_destination_keeps_property_order(source in flat_object_strategy()) {
        let mapper = AutoMapper::initialize(|config| {
            config.register_mapping("Source", Object::ARRAY);
        });

        let row = mapper.map(&source, Object::ARRAY).unwrap();
        let expected: Vec<&str> = source.property_names().collect();
        let actual: Vec<&str> = row.property_names().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_conventions_translate_every_property(source in flat_object_strategy()) {
        let mapper = AutoMapper::initialize(|config| {
            config
                .register_mapping("Source", Object::ARRAY)
                .with_naming_conventions(CaseConvention::CamelCase, CaseConvention::SnakeCase);
        });

        let row = mapper.map(&source, Object::ARRAY).unwrap();
        prop_assert_eq!(row.len(), source.len());
        for (name, value) in source.properties() {
            let snake = translate(name, &CaseConvention::CamelCase, &CaseConvention::SnakeCase);
            prop_assert_eq!(row.get(&snake), Some(value));
        }
    }

    #[test]
    fn prop_ignored_properties_never_appear(
        source in flat_object_strategy(),
        name in camel_name_strategy(),
    ) {
        let source = source.with(name.clone(), "secret");
        let mapper = AutoMapper::initialize(|config| {
            config
                .register_mapping("Source", Object::ARRAY)
                .for_member(name.clone(), Operation::ignore());
        });

        let row = mapper.map(&source, Object::ARRAY).unwrap();
        prop_assert!(!row.has(&name));
        prop_assert_eq!(row.len(), source.len() - 1);
    }
}
