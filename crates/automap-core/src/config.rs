//! Mapping registry and class catalog
//!
//! The [`Configuration`] is populated during application setup and then
//! handed to an [`AutoMapper`](crate::AutoMapper), which only reads it.
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use crate::class::{ClassCatalog, ClassDescriptor};
use crate::mapping::{ClassPair, Mapping, Options, OptionsSpec};
use crate::{Error, Object, Result};
use indexmap::IndexMap;

/// All registered mappings, the declared classes and the default options
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    mappings: IndexMap<ClassPair, Mapping>,
    classes: ClassCatalog,
    defaults: Options,
}

impl Configuration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration whose default options are adjusted by
    /// `configurator`
    pub fn with_defaults<F>(configurator: F) -> Self
    where
        F: FnOnce(&mut Options),
    {
        let mut config = Self::new();
        configurator(&mut config.defaults);
        config
    }

    /// Create a configuration whose default options come from a spec
    pub fn from_spec(spec: &OptionsSpec) -> Self {
        Self {
            defaults: Options::from(spec),
            ..Self::default()
        }
    }

    /// Options every new mapping starts from
    pub fn options(&self) -> &Options {
        &self.defaults
    }

    /// Adjust the default options. Already registered mappings are not
    /// affected.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.defaults
    }

    /// Declare a class taking part in mapping
    pub fn register_class(&mut self, descriptor: ClassDescriptor) -> &mut Self {
        self.classes.register(descriptor);
        self
    }

    pub fn classes(&self) -> &ClassCatalog {
        &self.classes
    }

    /// Register a mapping for the class pair and return it for configuration
    ///
    /// Registering a pair that already has a mapping replaces it: the
    /// earlier mapping and everything configured on it is discarded.
    pub fn register_mapping(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> &mut Mapping {
        let pair = ClassPair::new(source, destination);
        if self.mappings.contains_key(&pair) {
            log::warn!("Replacing existing mapping {}", pair);
        } else {
            log::debug!("Registering mapping {}", pair);
        }

        let mapping = Mapping::new(pair.clone(), self.defaults.clone());
        self.mappings.insert(pair.clone(), mapping);
        &mut self.mappings[&pair]
    }

    pub fn has_mapping_for(&self, source: &str, destination: &str) -> bool {
        self.find(source, destination).is_some()
    }

    /// Exact lookup of the mapping for a class pair
    ///
    /// Reverse mappings created through [`Mapping::reverse_map`] are found
    /// as well; a directly registered mapping takes precedence over them.
    pub fn get_mapping_for(&self, source: &str, destination: &str) -> Result<&Mapping> {
        self.find(source, destination)
            .ok_or_else(|| Error::unregistered(source, destination))
    }

    pub fn get_mapping_for_mut(&mut self, source: &str, destination: &str) -> Result<&mut Mapping> {
        let pair = ClassPair::new(source, destination);
        if self.mappings.contains_key(&pair) {
            return Ok(&mut self.mappings[&pair]);
        }
        self.mappings
            .values_mut()
            .find_map(|m| m.find_reverse_mut(source, destination))
            .ok_or_else(|| Error::unregistered(source, destination))
    }

    /// Resolve the mapping for a runtime source object
    ///
    /// Walks the destination class and its ancestors, most specific first,
    /// and for each of them the source object's class and its ancestors.
    /// The first registered pair wins, so an exact destination match is
    /// preferred over a more specific source match.
    pub fn get_mapping_for_runtime(&self, source: &Object, destination: &str) -> Result<&Mapping> {
        let source_lineage = self.classes.lineage(source.class());
        for destination_class in self.classes.lineage(destination) {
            for source_class in &source_lineage {
                if let Some(mapping) = self.find(source_class, &destination_class) {
                    log::debug!(
                        "Resolved {} -> {} to mapping {}",
                        source.class(),
                        destination,
                        mapping.class_pair()
                    );
                    return Ok(mapping);
                }
            }
        }
        Err(Error::unregistered(source.class(), destination))
    }

    /// Registered mappings in registration order, excluding reverse mappings
    pub fn mappings(&self) -> impl Iterator<Item = &Mapping> {
        self.mappings.values()
    }

    fn find(&self, source: &str, destination: &str) -> Option<&Mapping> {
        self.mappings
            .get(&ClassPair::new(source, destination))
            .or_else(|| {
                self.mappings
                    .values()
                    .find_map(|m| m.find_reverse(source, destination))
            })
    }
}
