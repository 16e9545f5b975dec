//! Name resolvers: which source property supplies a destination property
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use crate::mapping::Options;
use crate::naming::translate;
use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Determines the source property name for a destination property
pub trait NameResolver: Send + Sync + fmt::Debug {
    fn resolve(&self, target_property: &str, options: &Options) -> String;
}

/// Default resolver: translates the destination name from the destination
/// naming convention back into the source naming convention
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionNameResolver;

impl NameResolver for ConventionNameResolver {
    fn resolve(&self, target_property: &str, options: &Options) -> String {
        translate(
            target_property,
            options.destination_naming_convention().as_ref(),
            options.source_naming_convention().as_ref(),
        )
    }
}

/// Resolver backed by a closure
#[derive(Clone)]
pub struct CallbackNameResolver {
    callback: Arc<dyn Fn(&str, &Options) -> String + Send + Sync>,
}

impl CallbackNameResolver {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&str, &Options) -> String + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }
}

impl NameResolver for CallbackNameResolver {
    fn resolve(&self, target_property: &str, options: &Options) -> String {
        (self.callback)(target_property, options)
    }
}

impl fmt::Debug for CallbackNameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackNameResolver").finish_non_exhaustive()
    }
}

/// Applies the naming-convention translation, then rewrites the result with
/// a regex replacement
///
/// ```
/// use automap_core::resolver::{NameResolver, PatternNameResolver};
/// use automap_core::mapping::Options;
///
/// // Destination `name` reads source `m_name`
/// let resolver = PatternNameResolver::new("^(.*)$", "m_$1").unwrap();
/// assert_eq!(resolver.resolve("name", &Options::default()), "m_name");
/// ```
#[derive(Debug, Clone)]
pub struct PatternNameResolver {
    pattern: Regex,
    replacement: String,
}

impl PatternNameResolver {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| Error::Configuration {
            message: format!("Invalid name pattern '{}': {}", pattern, e),
            source: Some(e.into()),
        })?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }
}

impl NameResolver for PatternNameResolver {
    fn resolve(&self, target_property: &str, options: &Options) -> String {
        let translated = ConventionNameResolver.resolve(target_property, options);
        self.pattern
            .replace(&translated, self.replacement.as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::CaseConvention;

    fn snake_to_camel() -> Options {
        let mut options = Options::default();
        options.set_source_naming_convention(CaseConvention::SnakeCase);
        options.set_destination_naming_convention(CaseConvention::CamelCase);
        options
    }

    #[test]
    fn test_convention_resolver_identity() {
        assert_eq!(ConventionNameResolver.resolve("firstName", &Options::default()), "firstName");
    }

    #[test]
    fn test_convention_resolver_translates_back_to_source() {
        assert_eq!(ConventionNameResolver.resolve("firstName", &snake_to_camel()), "first_name");
    }

    #[test]
    fn test_callback_resolver() {
        let resolver = CallbackNameResolver::new(|name, _| format!("get_{}", name));
        assert_eq!(resolver.resolve("id", &Options::default()), "get_id");
    }

    #[test]
    fn test_pattern_resolver_strips_prefix_after_translation() {
        let resolver = PatternNameResolver::new("^dto_", "").unwrap();
        assert_eq!(resolver.resolve("dtoUserName", &snake_to_camel()), "user_name");
    }

    #[test]
    fn test_pattern_resolver_invalid_pattern() {
        let err = PatternNameResolver::new("(", "").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
