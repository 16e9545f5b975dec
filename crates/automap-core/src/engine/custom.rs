//! Custom mappers: user code building a whole destination object
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use super::AutoMapper;
use crate::{Object, Result};

/// Builds destination objects without per-property resolution
///
/// Installed with [`Mapping::use_custom_mapper`](crate::Mapping::use_custom_mapper).
/// The engine hands the whole source object over and returns whatever the
/// mapper builds.
pub trait CustomMapper: Send + Sync {
    /// Build a new `destination_class` instance from `source`
    fn map(&self, source: &Object, destination_class: &str, mapper: &AutoMapper) -> Result<Object>;

    /// Populate an existing destination
    ///
    /// The default builds a fresh instance with [`map`](Self::map) and copies
    /// its properties over.
    fn map_onto(
        &self,
        source: &Object,
        destination: &mut Object,
        mapper: &AutoMapper,
    ) -> Result<()> {
        let built = self.map(source, destination.class(), mapper)?;
        for (name, value) in built.into_properties() {
            destination.set(name, value);
        }
        Ok(())
    }
}

/// A [`CustomMapper`] backed by a closure, see [`mapper_fn`]
pub struct FnMapper<F> {
    callback: F,
}

/// Wrap a closure as a custom mapper
///
/// ```
/// use automap_core::{mapper_fn, Object};
///
/// let mapper = mapper_fn(|source: &Object, class: &str, _mapper| {
///     Ok(Object::new(class).with("summary", format!("{} object", source.class())))
/// });
/// # let _ = mapper;
/// ```
pub fn mapper_fn<F>(callback: F) -> FnMapper<F>
where
    F: Fn(&Object, &str, &AutoMapper) -> Result<Object> + Send + Sync,
{
    FnMapper { callback }
}

impl<F> CustomMapper for FnMapper<F>
where
    F: Fn(&Object, &str, &AutoMapper) -> Result<Object> + Send + Sync,
{
    fn map(&self, source: &Object, destination_class: &str, mapper: &AutoMapper) -> Result<Object> {
        (self.callback)(source, destination_class, mapper)
    }
}
