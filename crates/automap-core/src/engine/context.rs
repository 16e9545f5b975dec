//! Context handed to mapping operations
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use super::{AutoMapper, Params};
use crate::class::PropertyDescriptor;
use crate::mapping::{Mapping, Options};
use crate::{Object, Result, Value};

/// Everything an operation may consult while filling one destination property
///
/// The context gives access to the engine, so operations can map nested
/// values recursively. There is no cycle detection: a source graph that
/// loops back into the same class pairs recurses until the stack runs out.
pub struct MappingContext<'a> {
    mapper: &'a AutoMapper,
    mapping: &'a Mapping,
    source: &'a Object,
    destination_class: &'a str,
    property: &'a str,
    declared: Option<&'a PropertyDescriptor>,
    params: &'a Params,
    depth: usize,
}

impl<'a> MappingContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        mapper: &'a AutoMapper,
        mapping: &'a Mapping,
        source: &'a Object,
        destination_class: &'a str,
        property: &'a str,
        declared: Option<&'a PropertyDescriptor>,
        params: &'a Params,
        depth: usize,
    ) -> Self {
        Self {
            mapper,
            mapping,
            source,
            destination_class,
            property,
            declared,
            params,
            depth,
        }
    }

    pub fn mapper(&self) -> &'a AutoMapper {
        self.mapper
    }

    pub fn mapping(&self) -> &'a Mapping {
        self.mapping
    }

    pub fn options(&self) -> &'a Options {
        self.mapping.options()
    }

    pub fn source(&self) -> &'a Object {
        self.source
    }

    /// Class of the destination being populated
    pub fn destination_class(&self) -> &'a str {
        self.destination_class
    }

    /// Destination property being filled
    pub fn property(&self) -> &'a str {
        self.property
    }

    /// Declaration of the destination property, when the destination class
    /// is declared
    pub fn declared_property(&self) -> Option<&'a PropertyDescriptor> {
        self.declared
    }

    /// Parameters passed by the caller of the mapping
    pub fn params(&self) -> &'a Params {
        self.params
    }

    pub fn param(&self, name: &str) -> Option<&'a Value> {
        self.params.get(name)
    }

    /// Nesting level: 0 for the object passed by the caller
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Source property name resolved for the destination property
    pub fn source_property(&self) -> String {
        let options = self.options();
        options.name_resolver().resolve(self.property, options)
    }

    /// Value of the resolved source property, if the source has it
    pub fn source_value(&self) -> Option<&'a Value> {
        self.source.get(&self.source_property())
    }

    /// Map a nested value (object, list of objects, or null) into `class`
    ///
    /// Errors from the nested mapping are returned unchanged.
    pub fn map_nested(&self, value: &Value, class: &str) -> Result<Value> {
        self.mapper
            .map_value_at_depth(value, class, self.params, self.depth + 1)
    }

    /// Map an object value into the class declared for the destination
    /// property, when it is not already an instance of it and a mapping
    /// resolves
    ///
    /// Other values are returned unchanged; writing an object of an
    /// unrelated class then fails with [`Error::UnableToMap`](crate::Error::UnableToMap).
    pub(crate) fn map_declared_nested(&self, value: &Value) -> Result<Value> {
        let (Value::Object(object), Some(class)) =
            (value, self.declared.and_then(|p| p.ty.object_class()))
        else {
            return Ok(value.clone());
        };

        let config = self.mapper.configuration();
        if config.classes().is_a(object.class(), class)
            || config.get_mapping_for_runtime(object, class).is_err()
        {
            return Ok(value.clone());
        }
        self.map_nested(value, class)
    }
}
