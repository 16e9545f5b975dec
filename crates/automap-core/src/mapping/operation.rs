//! Mapping operations: how a single destination property gets its value
//!
//! An operation reads from the source object (and, through the context,
//! from the engine) and either yields a value to write or `None` to leave
//! the destination property at its constructed value.
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use crate::engine::MappingContext;
use crate::{Error, Object, Result, Value};
use std::fmt;
use std::sync::Arc;

/// A function computing a destination value from the source object
pub type MapFromFn = Arc<dyn Fn(&Object, &MappingContext<'_>) -> Result<Value> + Send + Sync>;

/// Extension point for operations not covered by [`Operation`]
pub trait MappingOperation: Send + Sync {
    /// Compute the destination value, or `None` to skip the property
    fn apply(&self, cx: &MappingContext<'_>) -> Result<Option<Value>>;
}

/// Operation applied to a destination property
#[derive(Clone)]
pub enum Operation {
    /// Copy the source property found by the name resolver. Object values
    /// are mapped recursively when the destination property declares an
    /// object class with a resolvable mapping.
    Direct,
    /// Copy a differently named source property, optionally mapping it
    /// into `map_to`
    FromProperty {
        name: String,
        map_to: Option<String>,
    },
    /// Use the callback's return value verbatim
    MapFrom(MapFromFn),
    /// Never write the property
    Ignore,
    /// Write a constant
    SetTo(Value),
    /// Map the resolved source value (an object or a list of objects) into
    /// `class`
    MapTo { class: String },
    /// Map a list of objects into a list of `class` instances; null becomes
    /// an empty list
    MapCollectionTo { class: String },
    /// User-defined operation
    Custom {
        name: String,
        operation: Arc<dyn MappingOperation>,
    },
}

impl Operation {
    pub fn ignore() -> Self {
        Operation::Ignore
    }

    pub fn from_property(name: impl Into<String>) -> Self {
        Operation::FromProperty {
            name: name.into(),
            map_to: None,
        }
    }

    /// Read `name` from the source and map it into `class`
    pub fn from_property_to(name: impl Into<String>, class: impl Into<String>) -> Self {
        Operation::FromProperty {
            name: name.into(),
            map_to: Some(class.into()),
        }
    }

    pub fn map_from<F>(callback: F) -> Self
    where
        F: Fn(&Object, &MappingContext<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        Operation::MapFrom(Arc::new(callback))
    }

    pub fn set_to(value: impl Into<Value>) -> Self {
        Operation::SetTo(value.into())
    }

    pub fn map_to(class: impl Into<String>) -> Self {
        Operation::MapTo { class: class.into() }
    }

    pub fn map_collection_to(class: impl Into<String>) -> Self {
        Operation::MapCollectionTo { class: class.into() }
    }

    pub fn custom(name: impl Into<String>, operation: impl MappingOperation + 'static) -> Self {
        Operation::Custom {
            name: name.into(),
            operation: Arc::new(operation),
        }
    }

    /// Apply this operation for the property described by `cx`
    pub fn apply(&self, cx: &MappingContext<'_>) -> Result<Option<Value>> {
        match self {
            Operation::Direct => match cx.source_value() {
                Some(value) => cx.map_declared_nested(value).map(Some),
                None => Ok(None),
            },
            Operation::FromProperty { name, map_to } => match (cx.source().get(name), map_to) {
                (None, _) => Ok(None),
                (Some(value), Some(class)) => cx.map_nested(value, class).map(Some),
                (Some(value), None) => Ok(Some(value.clone())),
            },
            Operation::MapFrom(callback) => callback(cx.source(), cx).map(Some),
            Operation::Ignore => Ok(None),
            Operation::SetTo(value) => Ok(Some(value.clone())),
            Operation::MapTo { class } => match cx.source_value() {
                Some(value) => cx.map_nested(value, class).map(Some),
                None => Ok(None),
            },
            Operation::MapCollectionTo { class } => match cx.source_value() {
                None => Ok(None),
                Some(Value::Null) => Ok(Some(Value::List(Vec::new()))),
                Some(value @ Value::List(_)) => cx.map_nested(value, class).map(Some),
                Some(other) => Err(Error::invalid_argument(
                    format!(
                        "Property '{}' must be a list to map into {}, found {}",
                        cx.source_property(),
                        class,
                        other.type_name()
                    ),
                    Some(cx.property()),
                )),
            },
            Operation::Custom { operation, .. } => operation.apply(cx),
        }
    }

    /// Short description used in logs
    pub fn kind(&self) -> &str {
        match self {
            Operation::Direct => "direct",
            Operation::FromProperty { .. } => "from_property",
            Operation::MapFrom(_) => "map_from",
            Operation::Ignore => "ignore",
            Operation::SetTo(_) => "set_to",
            Operation::MapTo { .. } => "map_to",
            Operation::MapCollectionTo { .. } => "map_collection_to",
            Operation::Custom { name, .. } => name,
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Direct => write!(f, "Direct"),
            Operation::FromProperty { name, map_to } => f
                .debug_struct("FromProperty")
                .field("name", name)
                .field("map_to", map_to)
                .finish(),
            Operation::MapFrom(_) => write!(f, "MapFrom(<fn>)"),
            Operation::Ignore => write!(f, "Ignore"),
            Operation::SetTo(value) => f.debug_tuple("SetTo").field(value).finish(),
            Operation::MapTo { class } => f.debug_struct("MapTo").field("class", class).finish(),
            Operation::MapCollectionTo { class } => {
                f.debug_struct("MapCollectionTo").field("class", class).finish()
            }
            Operation::Custom { name, .. } => f.debug_struct("Custom").field("name", name).finish(),
        }
    }
}
