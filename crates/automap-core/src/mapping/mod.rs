//! Mappings: the configuration binding one source class to one destination class
//!
//! A [`Mapping`] owns its [`Options`] and the explicit per-property
//! [`Operation`]s. Properties without an explicit operation fall back to the
//! options' default operation.
//!
//! # Module Organization
//!
//! - [`options`] - Per-mapping configuration and its serializable form
//! - [`operation`] - Operations computing a single destination property
//!
//! # Examples
//!
//! ```
//! use automap_core::{Configuration, Operation, Value};
//! use automap_core::naming::CaseConvention;
//!
//! let mut config = Configuration::new();
//! config
//!     .register_mapping("UserEntity", "UserDto")
//!     .with_naming_conventions(CaseConvention::SnakeCase, CaseConvention::CamelCase)
//!     .for_member("password", Operation::ignore())
//!     .map_from("displayName", |source, _| {
//!         Ok(Value::from(format!("@{}", source.get("user_name").cloned().unwrap_or_default())))
//!     });
//!
//! assert!(config.has_mapping_for("UserEntity", "UserDto"));
//! ```
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

pub mod operation;
pub mod options;


pub use operation::{MapFromFn, MappingOperation, Operation};
pub use options::{Options, OptionsSpec};

use crate::engine::{CustomMapper, MappingContext};
use crate::naming::NamingConvention;
use crate::resolver::NameResolver;
use crate::{Object, Result, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identity key of a mapping
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassPair {
    source: String,
    destination: String,
}

impl ClassPair {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The pair with source and destination swapped
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }

    pub(crate) fn matches(&self, source: &str, destination: &str) -> bool {
        self.source == source && self.destination == destination
    }
}

impl fmt::Display for ClassPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Configuration for mapping one source class to one destination class
///
/// All configuration methods return `&mut Self` so calls can be chained
/// straight off [`Configuration::register_mapping`](crate::Configuration::register_mapping).
#[derive(Clone)]
pub struct Mapping {
    pair: ClassPair,
    options: Options,
    operations: HashMap<String, Operation>,
    reverse: Option<Box<Mapping>>,
}

impl Mapping {
    pub fn new(pair: ClassPair, options: Options) -> Self {
        Self {
            pair,
            options,
            operations: HashMap::new(),
            reverse: None,
        }
    }

    pub fn class_pair(&self) -> &ClassPair {
        &self.pair
    }

    pub fn source_class(&self) -> &str {
        self.pair.source()
    }

    pub fn destination_class(&self) -> &str {
        self.pair.destination()
    }

    /// Register the operation for a destination property, replacing any
    /// operation registered earlier for it
    pub fn for_member(&mut self, property: impl Into<String>, operation: Operation) -> &mut Self {
        let property = property.into();
        log::debug!("{}: {} uses {}", self.pair, property, operation.kind());
        self.operations.insert(property, operation);
        self
    }

    /// Shorthand for `for_member(property, Operation::map_from(callback))`
    pub fn map_from<F>(&mut self, property: impl Into<String>, callback: F) -> &mut Self
    where
        F: Fn(&Object, &MappingContext<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        self.for_member(property, Operation::map_from(callback))
    }

    /// The operation for a destination property: the registered one, or
    /// the default operation
    pub fn operation_for(&self, property: &str) -> &Operation {
        self.operations
            .get(property)
            .unwrap_or_else(|| self.options.default_operation())
    }

    pub fn has_operation_for(&self, property: &str) -> bool {
        self.operations.contains_key(property)
    }

    /// Destination properties with an explicit operation
    pub fn configured_properties(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    /// Copy every explicit operation of `other` onto this mapping
    pub fn copy_from(&mut self, other: &Mapping) -> &mut Self {
        for (property, operation) in &other.operations {
            self.operations.insert(property.clone(), operation.clone());
        }
        self
    }

    /// The mapping for the swapped class pair, created on first use
    ///
    /// The reverse mapping starts from these options with the naming
    /// conventions swapped and the default name resolver. Explicit
    /// per-property operations, a custom name resolver and a custom mapper
    /// are not inverted: configure them on the returned mapping.
    pub fn reverse_map(&mut self) -> &mut Mapping {
        let pair = &self.pair;
        let options = &self.options;
        self.reverse.get_or_insert_with(|| {
            log::debug!("{}: creating reverse mapping", pair);
            Box::new(Mapping::new(pair.reversed(), options.reversed()))
        })
    }

    /// The cached reverse mapping, if [`reverse_map`](Self::reverse_map) was called
    pub fn reverse(&self) -> Option<&Mapping> {
        self.reverse.as_deref()
    }

    /// Find the mapping for a pair among this mapping's cached reverses
    pub(crate) fn find_reverse(&self, source: &str, destination: &str) -> Option<&Mapping> {
        let reverse = self.reverse.as_deref()?;
        if reverse.pair.matches(source, destination) {
            Some(reverse)
        } else {
            reverse.find_reverse(source, destination)
        }
    }

    pub(crate) fn find_reverse_mut(
        &mut self,
        source: &str,
        destination: &str,
    ) -> Option<&mut Mapping> {
        let reverse = self.reverse.as_deref_mut()?;
        if reverse.pair.matches(source, destination) {
            Some(reverse)
        } else {
            reverse.find_reverse_mut(source, destination)
        }
    }

    /// Run `configurator` against the live options
    pub fn set_defaults<F>(&mut self, configurator: F) -> &mut Self
    where
        F: FnOnce(&mut Options),
    {
        configurator(&mut self.options);
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub fn skip_constructor(&mut self) -> &mut Self {
        self.options.skip_constructor();
        self
    }

    pub fn dont_skip_constructor(&mut self) -> &mut Self {
        self.options.dont_skip_constructor();
        self
    }

    pub fn with_naming_conventions(
        &mut self,
        source: impl NamingConvention + 'static,
        destination: impl NamingConvention + 'static,
    ) -> &mut Self {
        self.options.set_source_naming_convention(source);
        self.options.set_destination_naming_convention(destination);
        self
    }

    pub fn with_default_operation(&mut self, operation: Operation) -> &mut Self {
        self.options.set_default_operation(operation);
        self
    }

    pub fn with_name_resolver(&mut self, resolver: impl NameResolver + 'static) -> &mut Self {
        self.options.set_name_resolver(resolver);
        self
    }

    /// Delegate construction of the whole destination to `mapper`
    pub fn use_custom_mapper(&mut self, mapper: impl CustomMapper + 'static) -> &mut Self {
        self.options.set_custom_mapper(Arc::new(mapper));
        self
    }

    pub fn provides_custom_mapper(&self) -> bool {
        self.options.provides_custom_mapper()
    }

    pub fn custom_mapper(&self) -> Option<&Arc<dyn CustomMapper>> {
        self.options.custom_mapper()
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field("pair", &self.pair)
            .field("options", &self.options)
            .field("operations", &self.operations)
            .field("reverse", &self.reverse.as_ref().map(|r| &r.pair))
            .finish()
    }
}
