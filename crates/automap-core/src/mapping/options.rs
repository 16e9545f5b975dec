//! Per-mapping configuration
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use super::operation::Operation;
use crate::engine::CustomMapper;
use crate::naming::{CaseConvention, NamingConvention};
use crate::resolver::{ConventionNameResolver, NameResolver};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Configuration bag owned by a [`Mapping`](super::Mapping)
///
/// New mappings start from a clone of the configuration's default options.
#[derive(Clone)]
pub struct Options {
    skip_constructor: bool,
    source_naming_convention: Arc<dyn NamingConvention>,
    destination_naming_convention: Arc<dyn NamingConvention>,
    default_operation: Operation,
    name_resolver: Arc<dyn NameResolver>,
    custom_mapper: Option<Arc<dyn CustomMapper>>,
    ignore_null_properties: bool,
    create_unregistered_mappings: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            skip_constructor: false,
            source_naming_convention: Arc::new(CaseConvention::Identity),
            destination_naming_convention: Arc::new(CaseConvention::Identity),
            default_operation: Operation::Direct,
            name_resolver: Arc::new(ConventionNameResolver),
            custom_mapper: None,
            ignore_null_properties: false,
            create_unregistered_mappings: false,
        }
    }
}

impl Options {
    pub fn should_skip_constructor(&self) -> bool {
        self.skip_constructor
    }

    /// Instantiate destinations without running their constructor
    pub fn skip_constructor(&mut self) {
        self.skip_constructor = true;
    }

    pub fn dont_skip_constructor(&mut self) {
        self.skip_constructor = false;
    }

    pub fn source_naming_convention(&self) -> &Arc<dyn NamingConvention> {
        &self.source_naming_convention
    }

    pub fn destination_naming_convention(&self) -> &Arc<dyn NamingConvention> {
        &self.destination_naming_convention
    }

    pub fn set_source_naming_convention(&mut self, convention: impl NamingConvention + 'static) {
        self.source_naming_convention = Arc::new(convention);
    }

    pub fn set_destination_naming_convention(
        &mut self,
        convention: impl NamingConvention + 'static,
    ) {
        self.destination_naming_convention = Arc::new(convention);
    }

    /// Operation used for destination properties without an explicit one
    pub fn default_operation(&self) -> &Operation {
        &self.default_operation
    }

    pub fn set_default_operation(&mut self, operation: Operation) {
        self.default_operation = operation;
    }

    pub fn name_resolver(&self) -> &Arc<dyn NameResolver> {
        &self.name_resolver
    }

    pub fn set_name_resolver(&mut self, resolver: impl NameResolver + 'static) {
        self.name_resolver = Arc::new(resolver);
    }

    pub fn custom_mapper(&self) -> Option<&Arc<dyn CustomMapper>> {
        self.custom_mapper.as_ref()
    }

    pub fn set_custom_mapper(&mut self, mapper: Arc<dyn CustomMapper>) {
        self.custom_mapper = Some(mapper);
    }

    pub fn provides_custom_mapper(&self) -> bool {
        self.custom_mapper.is_some()
    }

    pub fn should_ignore_null_properties(&self) -> bool {
        self.ignore_null_properties
    }

    /// Leave destination properties untouched when an operation yields null
    pub fn ignore_null_properties(&mut self) {
        self.ignore_null_properties = true;
    }

    pub fn dont_ignore_null_properties(&mut self) {
        self.ignore_null_properties = false;
    }

    pub fn should_create_unregistered_mappings(&self) -> bool {
        self.create_unregistered_mappings
    }

    /// Fall back to a transient default mapping when no mapping resolves
    pub fn create_unregistered_mappings(&mut self) {
        self.create_unregistered_mappings = true;
    }

    pub fn dont_create_unregistered_mappings(&mut self) {
        self.create_unregistered_mappings = false;
    }

    /// Apply a declarative spec on top of these options
    pub fn apply_spec(&mut self, spec: &OptionsSpec) {
        self.skip_constructor = spec.skip_constructor;
        self.set_source_naming_convention(spec.source_naming_convention);
        self.set_destination_naming_convention(spec.destination_naming_convention);
        self.ignore_null_properties = spec.ignore_null_properties;
        self.create_unregistered_mappings = spec.create_unregistered_mappings;
    }

    /// Options for the reverse direction
    ///
    /// Naming conventions swap sides and names resolve through the default
    /// convention resolver. A custom resolver or custom mapper only knows the
    /// forward direction, so neither is carried over; configure them on the
    /// reverse mapping when needed.
    pub(crate) fn reversed(&self) -> Self {
        let mut reversed = self.clone();
        reversed.source_naming_convention = self.destination_naming_convention.clone();
        reversed.destination_naming_convention = self.source_naming_convention.clone();
        reversed.name_resolver = Arc::new(ConventionNameResolver);
        reversed.custom_mapper = None;
        reversed
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("skip_constructor", &self.skip_constructor)
            .field("source_naming_convention", &self.source_naming_convention.name())
            .field("destination_naming_convention", &self.destination_naming_convention.name())
            .field("default_operation", &self.default_operation)
            .field("name_resolver", &self.name_resolver)
            .field("custom_mapper", &self.custom_mapper.is_some())
            .field("ignore_null_properties", &self.ignore_null_properties)
            .field("create_unregistered_mappings", &self.create_unregistered_mappings)
            .finish()
    }
}

/// Serializable form of the default options
///
/// ```
/// use automap_core::mapping::OptionsSpec;
///
/// let spec = OptionsSpec::from_json(r#"{
///     "source_naming_convention": "snake_case",
///     "destination_naming_convention": "camel_case"
/// }"#).unwrap();
/// assert!(!spec.skip_constructor);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsSpec {
    pub skip_constructor: bool,
    pub source_naming_convention: CaseConvention,
    pub destination_naming_convention: CaseConvention,
    pub ignore_null_properties: bool,
    pub create_unregistered_mappings: bool,
}

impl OptionsSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Json {
            message: format!("Invalid options: {}", e),
            source: e,
        })
    }
}

impl From<&OptionsSpec> for Options {
    fn from(spec: &OptionsSpec) -> Self {
        let mut options = Options::default();
        options.apply_spec(spec);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(!options.should_skip_constructor());
        assert!(!options.provides_custom_mapper());
        assert!(!options.should_ignore_null_properties());
        assert!(!options.should_create_unregistered_mappings());
        assert_eq!(options.source_naming_convention().name(), "identity");
        assert!(matches!(options.default_operation(), Operation::Direct));
    }

    #[test]
    fn test_reversed_swaps_conventions() {
        let mut options = Options::default();
        options.set_source_naming_convention(CaseConvention::SnakeCase);
        options.set_destination_naming_convention(CaseConvention::CamelCase);
        options.skip_constructor();

        let reversed = options.reversed();
        assert_eq!(reversed.source_naming_convention().name(), "camel_case");
        assert_eq!(reversed.destination_naming_convention().name(), "snake_case");
        assert!(reversed.should_skip_constructor());
    }

    #[test]
    fn test_spec_from_json() {
        let spec = OptionsSpec::from_json(
            r#"{"skip_constructor": true, "destination_naming_convention": "pascal_case"}"#,
        )
        .unwrap();
        let options = Options::from(&spec);

        assert!(options.should_skip_constructor());
        assert_eq!(options.source_naming_convention().name(), "identity");
        assert_eq!(options.destination_naming_convention().name(), "pascal_case");
    }

    #[test]
    fn test_spec_rejects_unknown_fields() {
        let err = OptionsSpec::from_json(r#"{"skip_constructors": true}"#).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}
