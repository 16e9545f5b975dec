//! The mapping engine
//!
//! [`AutoMapper`] is the runtime entry point. Given a source object and a
//! destination class it resolves the applicable [`Mapping`], builds the
//! destination (or delegates to the mapping's custom mapper), and fills each
//! destination property through its [`Operation`](crate::Operation).
//!
//! Mapping calls take `&self` and only read the configuration, so a single
//! engine can be shared between threads.
//!
//! # Example
//!
//! ```
//! use automap_core::{AutoMapper, ClassDescriptor, Object, PropertyType, Value};
//!
//! let mapper = AutoMapper::initialize(|config| {
//!     config.register_class(
//!         ClassDescriptor::new("PersonDto")
//!             .property("firstName", PropertyType::String)
//!             .property("lastName", PropertyType::String)
//!             .property("fullName", PropertyType::String),
//!     );
//!     config
//!         .register_mapping("Person", "PersonDto")
//!         .map_from("fullName", |person, _| {
//!             let first = person.get("firstName").cloned().unwrap_or_default();
//!             let last = person.get("lastName").cloned().unwrap_or_default();
//!             Ok(Value::from(format!("{} {}", first, last)))
//!         });
//! });
//!
//! let person = Object::new("Person")
//!     .with("firstName", "Ada")
//!     .with("lastName", "Lovelace");
//!
//! let dto = mapper.map(&person, "PersonDto").unwrap();
//! assert_eq!(dto.get("fullName"), Some(&Value::from("Ada Lovelace")));
//! ```
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

mod context;
mod custom;


pub use context::MappingContext;
pub use custom::{mapper_fn, CustomMapper, FnMapper};

use crate::class::{ClassCatalog, PropertyDescriptor};
use crate::mapping::{ClassPair, Mapping};
use crate::naming::translate;
use crate::{Configuration, Error, Object, Result, Value};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::HashMap;

/// Caller-supplied parameters visible to every operation of a mapping call
pub type Params = HashMap<String, Value>;

/// Maps objects according to a [`Configuration`]
#[derive(Debug, Clone)]
pub struct AutoMapper {
    config: Configuration,
}

impl AutoMapper {
    pub fn new(config: Configuration) -> Self {
        Self { config }
    }

    /// Build the configuration in a closure and create the engine from it
    pub fn initialize<F>(configurator: F) -> Self
    where
        F: FnOnce(&mut Configuration),
    {
        let mut config = Configuration::new();
        configurator(&mut config);
        Self::new(config)
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Map `source` into a new instance of `destination`
    ///
    /// # Errors
    ///
    /// - [`Error::UnregisteredMapping`] when no mapping resolves for the
    ///   source's runtime class and the destination
    /// - [`Error::InvalidArgument`] when the destination class is not
    ///   declared or cannot be instantiated
    /// - [`Error::UnableToMap`] when a value does not fit its destination
    ///   property
    pub fn map(&self, source: &Object, destination: &str) -> Result<Object> {
        self.map_with_context(source, destination, &Params::new())
    }

    /// Like [`map`](Self::map), making `params` available to operations
    pub fn map_with_context(
        &self,
        source: &Object,
        destination: &str,
        params: &Params,
    ) -> Result<Object> {
        self.map_at_depth(source, destination, params, 0)
    }

    /// Map every source into `destination`, preserving order
    ///
    /// The first failure aborts the call; no partial result is returned.
    pub fn map_multiple<'s, I>(&self, sources: I, destination: &str) -> Result<Vec<Object>>
    where
        I: IntoIterator<Item = &'s Object>,
    {
        sources
            .into_iter()
            .map(|source| self.map(source, destination))
            .collect()
    }

    /// Populate an existing destination instance from `source`
    pub fn map_onto(&self, source: &Object, destination: &mut Object) -> Result<()> {
        self.map_onto_with_context(source, destination, &Params::new())
    }

    pub fn map_onto_with_context(
        &self,
        source: &Object,
        destination: &mut Object,
        params: &Params,
    ) -> Result<()> {
        let mapping = self.resolve_mapping(source, destination.class())?;
        if let Some(custom) = mapping.custom_mapper() {
            log::debug!("{}: delegating to custom mapper", mapping.class_pair());
            return custom.map_onto(source, destination, self);
        }
        self.populate(source, destination, &mapping, params, 0)
    }

    /// Map a value that may be null, an object or a list of objects
    ///
    /// Null maps to null and lists map element-wise. Any other value is an
    /// invalid argument.
    pub fn map_value(&self, value: &Value, destination: &str) -> Result<Value> {
        self.map_value_at_depth(value, destination, &Params::new(), 0)
    }

    pub(crate) fn map_value_at_depth(
        &self,
        value: &Value,
        destination: &str,
        params: &Params,
        depth: usize,
    ) -> Result<Value> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Object(object) => self
                .map_at_depth(object, destination, params, depth)
                .map(Value::Object),
            Value::List(items) => items
                .iter()
                .map(|item| self.map_value_at_depth(item, destination, params, depth))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            other => Err(Error::invalid_argument(
                format!("Cannot map a {} value into {}", other.type_name(), destination),
                Some("source"),
            )),
        }
    }

    fn map_at_depth(
        &self,
        source: &Object,
        destination: &str,
        params: &Params,
        depth: usize,
    ) -> Result<Object> {
        let mapping = self.resolve_mapping(source, destination)?;
        log::debug!(
            "Mapping {} -> {} using {} (depth {})",
            source.class(),
            destination,
            mapping.class_pair(),
            depth
        );

        if let Some(custom) = mapping.custom_mapper() {
            return custom.map(source, destination, self);
        }

        let mut instance = if destination == Object::ARRAY {
            Object::array()
        } else {
            self.config
                .classes()
                .instantiate(destination, mapping.options().should_skip_constructor())?
        };
        self.populate(source, &mut instance, &mapping, params, depth)?;
        Ok(instance)
    }

    fn resolve_mapping(&self, source: &Object, destination: &str) -> Result<Cow<'_, Mapping>> {
        match self.config.get_mapping_for_runtime(source, destination) {
            Ok(mapping) => Ok(Cow::Borrowed(mapping)),
            Err(err)
                if err.is_unregistered_mapping()
                    && self.config.options().should_create_unregistered_mappings() =>
            {
                log::debug!(
                    "Using default mapping for unregistered {} -> {}",
                    source.class(),
                    destination
                );
                Ok(Cow::Owned(Mapping::new(
                    ClassPair::new(source.class(), destination),
                    self.config.options().clone(),
                )))
            }
            Err(err) => Err(err),
        }
    }

    fn populate(
        &self,
        source: &Object,
        destination: &mut Object,
        mapping: &Mapping,
        params: &Params,
        depth: usize,
    ) -> Result<()> {
        let destination_class = destination.class().to_string();
        let targets = self.target_properties(source, destination, mapping);

        for (property, declared) in targets {
            let cx = MappingContext::new(
                self,
                mapping,
                source,
                &destination_class,
                &property,
                declared,
                params,
                depth,
            );

            match mapping.operation_for(&property).apply(&cx)? {
                None => log::trace!("{}: skipping {}", mapping.class_pair(), property),
                Some(Value::Null) if mapping.options().should_ignore_null_properties() => {
                    log::trace!("{}: ignoring null for {}", mapping.class_pair(), property)
                }
                Some(value) => {
                    write_property(self.config.classes(), destination, &property, declared, value)?
                }
            }
        }
        Ok(())
    }

    /// Destination properties to fill, with their declarations
    ///
    /// Declared classes use their declared properties. Associative arrays
    /// take the source's properties, translated into the destination naming
    /// convention, and undeclared destinations the properties they already
    /// hold. Properties with an explicit operation are always filled, after
    /// the others.
    fn target_properties<'c>(
        &'c self,
        source: &Object,
        destination: &Object,
        mapping: &Mapping,
    ) -> Vec<(String, Option<&'c PropertyDescriptor>)> {
        let mut targets: IndexMap<String, Option<&'c PropertyDescriptor>> =
            match self.config.classes().properties_of(destination.class()) {
                Some(properties) => properties
                    .into_iter()
                    .map(|property| (property.name.clone(), Some(property)))
                    .collect(),
                None => destination
                    .property_names()
                    .map(|name| (name.to_string(), None))
                    .collect(),
            };

        if destination.is_array() {
            let options = mapping.options();
            for name in source.property_names() {
                let name = translate(
                    name,
                    options.source_naming_convention().as_ref(),
                    options.destination_naming_convention().as_ref(),
                );
                targets.entry(name).or_insert(None);
            }
        }

        let mut configured: Vec<&str> = mapping.configured_properties().collect();
        configured.sort_unstable();
        for name in configured {
            targets.entry(name.to_string()).or_insert(None);
        }

        targets.into_iter().collect()
    }
}

fn write_property(
    classes: &ClassCatalog,
    destination: &mut Object,
    property: &str,
    declared: Option<&PropertyDescriptor>,
    value: Value,
) -> Result<()> {
    let value = match declared {
        Some(descriptor) => {
            if let (Some(class), Value::Object(object)) = (descriptor.ty.object_class(), &value) {
                if !classes.is_a(object.class(), class) {
                    return Err(Error::unable_to_map(
                        destination.class(),
                        property,
                        format!("expected {}, found {}", class, object.class()),
                    ));
                }
            }

            let found = value.type_name();
            descriptor
                .ty
                .coerce(value, descriptor.nullable)
                .ok_or_else(|| {
                    Error::unable_to_map(
                        destination.class(),
                        property,
                        format!("expected {}, found {}", descriptor.ty, found),
                    )
                })?
        }
        None => value,
    };
    destination.set(property, value);
    Ok(())
}
