//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! but valid names, values and objects for property testing.

#![cfg(test)]

use crate::naming::CaseConvention;
use crate::{Object, Value};
use proptest::collection::vec;
use proptest::prelude::*;

/// Strategy for generating built-in naming conventions
pub fn case_convention_strategy() -> impl Strategy<Value = CaseConvention> {
    prop_oneof![
        Just(CaseConvention::Identity),
        Just(CaseConvention::CamelCase),
        Just(CaseConvention::PascalCase),
        Just(CaseConvention::SnakeCase),
        Just(CaseConvention::KebabCase),
        Just(CaseConvention::ScreamingSnakeCase),
    ]
}

/// Strategy for generating the lowercase tokens of a property name
pub fn identifier_tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    vec("[a-z]{2,8}", 1..4)
}

/// Strategy for generating scalar values
pub fn scalar_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::I64),
        (-1.0e6f64..1.0e6).prop_map(Value::F64),
        "[a-zA-Z0-9 ]{0,24}".prop_map(Value::String),
    ]
}

/// Strategy for generating a `Person` source object
pub fn person_strategy() -> impl Strategy<Value = Object> {
    ("[A-Z][a-z]{1,10}", "[A-Z][a-z]{1,12}", 0i64..120).prop_map(|(first, last, age)| {
        Object::new("Person")
            .with("firstName", first)
            .with("lastName", last)
            .with("age", age)
    })
}
