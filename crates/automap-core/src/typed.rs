//! Mapping between plain Rust types
//!
//! Types implementing [`MappedType`] and serde's traits can be mapped
//! directly: they are converted into [`Object`]s of their declared class,
//! mapped, and deserialized back.
//!
//! ```
//! use automap_core::typed::MappedType;
//! use automap_core::{AutoMapper, ClassDescriptor, Configuration, PropertyType};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! struct User { user_name: String, password: String }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct UserView { user_name: String }
//!
//! impl MappedType for User {
//!     const NAME: &'static str = "User";
//!     fn descriptor() -> ClassDescriptor {
//!         ClassDescriptor::new(Self::NAME)
//!             .property("user_name", PropertyType::String)
//!             .property("password", PropertyType::String)
//!     }
//! }
//!
//! impl MappedType for UserView {
//!     const NAME: &'static str = "UserView";
//!     fn descriptor() -> ClassDescriptor {
//!         ClassDescriptor::new(Self::NAME).property("user_name", PropertyType::String)
//!     }
//! }
//!
//! let mut config = Configuration::new();
//! config.register_type::<User>().register_type::<UserView>();
//! config.register_mapping(User::NAME, UserView::NAME);
//! let mapper = AutoMapper::new(config);
//!
//! let user = User { user_name: "ada".into(), password: "secret".into() };
//! let view: UserView = mapper.map_into(&user).unwrap();
//! assert_eq!(view, UserView { user_name: "ada".into() });
//! ```
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use crate::{AutoMapper, ClassDescriptor, Configuration, Error, Object, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A Rust type with a declared class
pub trait MappedType {
    /// Class name used in mappings
    const NAME: &'static str;

    /// Declared schema of the class. Property names must match the
    /// serialized field names.
    fn descriptor() -> ClassDescriptor;
}

/// Convert a value into an object of its declared class
pub fn to_object<T>(value: &T) -> Result<Object>
where
    T: MappedType + Serialize,
{
    let json = serde_json::to_value(value).map_err(|e| Error::Json {
        message: format!("Failed to serialize {}: {}", T::NAME, e),
        source: e,
    })?;
    Object::from_json(T::NAME, json)
}

/// Deserialize an object into `T`
pub fn from_object<T>(object: &Object) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(object.to_json()).map_err(|e| Error::Json {
        message: format!("Failed to build a value from {}: {}", object.class(), e),
        source: e,
    })
}

impl Configuration {
    /// Declare the class of a Rust type
    pub fn register_type<T: MappedType>(&mut self) -> &mut Self {
        self.register_class(T::descriptor())
    }
}

impl AutoMapper {
    /// Map a Rust value into another Rust type
    pub fn map_into<S, D>(&self, source: &S) -> Result<D>
    where
        S: MappedType + Serialize,
        D: MappedType + DeserializeOwned,
    {
        let object = to_object(source)?;
        let mapped = self.map(&object, D::NAME)?;
        from_object(&mapped)
    }

    /// Map a slice of Rust values, failing on the first error
    pub fn map_many_into<S, D>(&self, sources: &[S]) -> Result<Vec<D>>
    where
        S: MappedType + Serialize,
        D: MappedType + DeserializeOwned,
    {
        sources.iter().map(|source| self.map_into(source)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Operation, PropertyType, Value};
    use serde::Deserialize;

    #[derive(Debug, Serialize)]
    struct Order {
        id: i64,
        customer_name: String,
        total_cents: i64,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct OrderSummary {
        id: i64,
        customer: String,
        total: f64,
    }

    impl MappedType for Order {
        const NAME: &'static str = "Order";

        fn descriptor() -> ClassDescriptor {
            ClassDescriptor::new(Self::NAME)
                .property("id", PropertyType::Int)
                .property("customer_name", PropertyType::String)
                .property("total_cents", PropertyType::Int)
        }
    }

    impl MappedType for OrderSummary {
        const NAME: &'static str = "OrderSummary";

        fn descriptor() -> ClassDescriptor {
            ClassDescriptor::new(Self::NAME)
                .property("id", PropertyType::Int)
                .property("customer", PropertyType::String)
                .property("total", PropertyType::Float)
        }
    }

    fn mapper() -> AutoMapper {
        let mut config = Configuration::new();
        config.register_type::<Order>().register_type::<OrderSummary>();
        config
            .register_mapping(Order::NAME, OrderSummary::NAME)
            .for_member("customer", Operation::from_property("customer_name"))
            .map_from("total", |order, _| {
                let cents = order.get("total_cents").and_then(Value::as_i64).unwrap_or(0);
                Ok(Value::F64(cents as f64 / 100.0))
            });
        AutoMapper::new(config)
    }

    #[test]
    fn test_map_into() {
        let order = Order {
            id: 3,
            customer_name: "Ada".to_string(),
            total_cents: 1250,
        };

        let summary: OrderSummary = mapper().map_into(&order).unwrap();
        assert_eq!(
            summary,
            OrderSummary {
                id: 3,
                customer: "Ada".to_string(),
                total: 12.5,
            }
        );
    }

    #[test]
    fn test_map_many_into_keeps_order() {
        let orders: Vec<Order> = (1..=3)
            .map(|id| Order {
                id,
                customer_name: format!("c{}", id),
                total_cents: id * 100,
            })
            .collect();

        let summaries: Vec<OrderSummary> = mapper().map_many_into(&orders).unwrap();
        let ids: Vec<i64> = summaries.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_to_object_uses_declared_class() {
        let order = Order {
            id: 1,
            customer_name: "Ada".to_string(),
            total_cents: 0,
        };
        let object = to_object(&order).unwrap();
        assert_eq!(object.class(), "Order");
        assert_eq!(object.get("customer_name"), Some(&Value::from("Ada")));
    }

    #[test]
    fn test_from_object_reports_missing_fields() {
        let object = Object::new("OrderSummary").with("id", 1i64);
        let err = from_object::<OrderSummary>(&object).unwrap_err();
        assert!(matches!(err, Error::Json { .. }));
    }
}
