//! Automap Core - Configurable object-to-object mapping
//!
//! This crate maps objects of one class into objects of another: entities
//! into DTOs, API payloads into domain objects, and back. Properties are
//! copied by name by default, and each mapping can override how any
//! destination property is computed.
//!
//! # Main Components
//!
//! - **Object Model**: Dynamic [`Object`]s and [`Value`]s, with classes
//!   declared through [`ClassDescriptor`]
//! - **Configuration**: A registry of [`Mapping`]s keyed by class pair,
//!   plus default [`Options`]
//! - **Operations**: How a single destination property is computed
//! - **Naming**: Conventions and resolvers translating property names
//!   between source and destination
//! - **Engine**: [`AutoMapper`], resolving mappings along class hierarchies
//!   and populating destinations
//!
//! # Example
//!
//! ```
//! use automap_core::{AutoMapper, ClassDescriptor, Object, Operation, PropertyType, Value};
//! use automap_core::naming::CaseConvention;
//!
//! let mapper = AutoMapper::initialize(|config| {
//!     config.register_class(
//!         ClassDescriptor::new("UserDto")
//!             .property("userName", PropertyType::String)
//!             .property("email", PropertyType::String)
//!             .property("role", PropertyType::String),
//!     );
//!     config
//!         .register_mapping("User", "UserDto")
//!         .with_naming_conventions(CaseConvention::SnakeCase, CaseConvention::CamelCase)
//!         .for_member("role", Operation::set_to("member"));
//! });
//!
//! let user = Object::new("User")
//!     .with("user_name", "ada")
//!     .with("email", "ada@example.com")
//!     .with("password_hash", "x");
//!
//! let dto = mapper.map(&user, "UserDto").unwrap();
//! assert_eq!(dto.get("userName"), Some(&Value::from("ada")));
//! assert_eq!(dto.get("role"), Some(&Value::from("member")));
//! assert!(!dto.has("password_hash"));
//! ```

pub mod class;
pub mod config;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod naming;
pub mod resolver;
pub mod typed;
pub mod value;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use class::{ClassCatalog, ClassDescriptor, ClassKind, PropertyDescriptor, PropertyType};
pub use config::Configuration;
pub use engine::{mapper_fn, AutoMapper, CustomMapper, MappingContext, Params};
pub use error::{Error, Result};
pub use mapping::{ClassPair, Mapping, MappingOperation, Operation, Options, OptionsSpec};
pub use naming::{CaseConvention, NamingConvention};
pub use typed::MappedType;
pub use value::{Object, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
