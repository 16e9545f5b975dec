//! Runtime values and objects handled by the mapping engine
//!
//! Source and destination instances are represented as [`Object`]s: a class
//! name plus an ordered set of named property values. Property values are
//! [`Value`]s, which may themselves be nested objects or lists.
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Result};
use indexmap::IndexMap;
use serde_json::Number;
use std::fmt;

/// A property value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    List(Vec<Value>),
    Object(Object),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::F64(v) => Some(*v),
            Value::I64(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_object(self) -> Option<Object> {
        match self {
            Value::Object(v) => Some(v),
            _ => None,
        }
    }

    /// Short name of the value's kind, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I64(_) => "int",
            Value::F64(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Object(_) => "object",
        }
    }

    /// Convert into a JSON value. Object class names are not preserved.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(*v),
            Value::I64(v) => serde_json::Value::Number((*v).into()),
            Value::F64(v) => Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(v) => serde_json::Value::String(v.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(object) => object.to_json(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(v) => f.write_str(v),
            Value::Object(object) => write!(f, "{}{}", object.class(), object.to_json()),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I64(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::I64(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(v) => Value::Bool(v),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::I64(i),
                None => Value::F64(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(v) => Value::String(v),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut object = Object::array();
                for (name, value) in map {
                    object.set(name, value);
                }
                Value::Object(object)
            }
        }
    }
}

/// A runtime instance: a class name and its property values
///
/// Property order is insertion order. Objects whose class is
/// [`Object::ARRAY`] behave like associative arrays: they have no declared
/// schema and accept any property.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    class: String,
    properties: IndexMap<String, Value>,
}

impl Object {
    /// Class name of associative arrays
    pub const ARRAY: &'static str = "array";

    /// Create an empty instance of `class`
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            properties: IndexMap::new(),
        }
    }

    /// Create an empty associative array
    pub fn array() -> Self {
        Self::new(Self::ARRAY)
    }

    /// Build a JSON object into an instance of `class`
    pub fn from_json(class: impl Into<String>, json: serde_json::Value) -> Result<Self> {
        let class = class.into();
        match Value::from(json) {
            Value::Object(object) => Ok(object.with_class(class)),
            other => Err(Error::invalid_argument(
                format!("expected a JSON object for {}, found {}", class, other.type_name()),
                Some("json"),
            )),
        }
    }

    /// Builder-style property setter
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    fn with_class(mut self, class: String) -> Self {
        self.class = class;
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn is_array(&self) -> bool {
        self.class == Self::ARRAY
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Set a property, returning the previous value if there was one
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }

    /// Property names in insertion order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn into_properties(self) -> impl Iterator<Item = (String, Value)> {
        self.properties.into_iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.properties
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_builder_keeps_order() {
        let object = Object::new("Person")
            .with("lastName", "Lovelace")
            .with("firstName", "Ada");

        let names: Vec<_> = object.property_names().collect();
        assert_eq!(names, vec!["lastName", "firstName"]);
        assert_eq!(object.class(), "Person");
    }

    #[test]
    fn test_from_json_nested() {
        let object = Object::from_json(
            "Order",
            json!({"id": 7, "total": 9.5, "lines": [{"sku": "a"}], "note": null}),
        )
        .unwrap();

        assert_eq!(object.get("id"), Some(&Value::I64(7)));
        assert_eq!(object.get("total"), Some(&Value::F64(9.5)));
        assert_eq!(object.get("note"), Some(&Value::Null));

        let lines = object.get("lines").and_then(Value::as_list).unwrap();
        let line = lines[0].as_object().unwrap();
        assert!(line.is_array());
        assert_eq!(line.get("sku").and_then(Value::as_str), Some("a"));
    }

    #[test]
    fn test_from_json_rejects_scalars() {
        let err = Object::from_json("Order", json!(42)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_to_json() {
        let object = Object::new("Person")
            .with("name", "Ada")
            .with("tags", vec!["math", "poetry"])
            .with("age", Option::<i64>::None);

        assert_eq!(
            object.to_json(),
            json!({"name": "Ada", "tags": ["math", "poetry"], "age": null})
        );
    }

    #[test]
    fn test_numeric_views() {
        assert_eq!(Value::I64(3).as_f64(), Some(3.0));
        assert_eq!(Value::F64(3.5).as_i64(), None);
        assert_eq!(Value::from("x").type_name(), "string");
    }
}
