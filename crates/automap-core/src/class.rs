//! Declared class schemas and the class catalog
//!
//! Destination property enumeration and runtime-type lookups never inspect
//! objects reflectively. Instead every class that takes part in mapping is
//! described once, at configuration time, by a [`ClassDescriptor`]: its
//! place in the class hierarchy, its properties with their types and
//! defaults, and its constructor side effects.
//!
//! Copyright (c) 2025 Automap Team
//! Licensed under the Apache-2.0 license

use crate::{Error, Object, Result, Value};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

/// Constructor body run when a destination is instantiated normally
pub type Constructor = Arc<dyn Fn(&mut Object) -> Result<()> + Send + Sync>;

/// Declared type of a property
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    /// Untyped, accepts any value
    Any,
    Bool,
    Int,
    /// Accepts floats and widens integers
    Float,
    String,
    List,
    /// An object, optionally of a known class
    Object(Option<String>),
}

impl PropertyType {
    /// Check `value` against this type, returning the value to store
    ///
    /// Integers written into `Float` properties are widened; any other
    /// mismatch yields `None`. The class of an object value is not checked
    /// here since that needs the class hierarchy, see [`ClassCatalog::is_a`].
    pub fn coerce(&self, value: Value, nullable: bool) -> Option<Value> {
        match (self, value) {
            (_, Value::Null) => nullable.then_some(Value::Null),
            (PropertyType::Any, value) => Some(value),
            (PropertyType::Bool, value @ Value::Bool(_)) => Some(value),
            (PropertyType::Int, value @ Value::I64(_)) => Some(value),
            (PropertyType::Float, value @ Value::F64(_)) => Some(value),
            (PropertyType::Float, Value::I64(v)) => Some(Value::F64(v as f64)),
            (PropertyType::String, value @ Value::String(_)) => Some(value),
            (PropertyType::List, value @ Value::List(_)) => Some(value),
            (PropertyType::Object(_), value @ Value::Object(_)) => Some(value),
            _ => None,
        }
    }

    /// Class named by an `Object(Some(..))` type
    pub fn object_class(&self) -> Option<&str> {
        match self {
            PropertyType::Object(Some(class)) => Some(class),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Any => write!(f, "any"),
            PropertyType::Bool => write!(f, "bool"),
            PropertyType::Int => write!(f, "int"),
            PropertyType::Float => write!(f, "float"),
            PropertyType::String => write!(f, "string"),
            PropertyType::List => write!(f, "list"),
            PropertyType::Object(None) => write!(f, "object"),
            PropertyType::Object(Some(class)) => write!(f, "{}", class),
        }
    }
}

/// A declared, settable property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub ty: PropertyType,
    pub nullable: bool,
    /// Value the property holds right after instantiation
    pub default: Value,
}

impl PropertyDescriptor {
    /// A nullable property defaulting to null
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
            default: Value::Null,
        }
    }

    /// Reject null writes
    pub fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }
}

/// Whether a class can be instantiated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Concrete,
    Abstract,
    Interface,
}

/// Declared schema of a class
#[derive(Clone)]
pub struct ClassDescriptor {
    name: String,
    parent: Option<String>,
    interfaces: Vec<String>,
    kind: ClassKind,
    properties: Vec<PropertyDescriptor>,
    constructor: Option<Constructor>,
}

impl ClassDescriptor {
    /// Describe a concrete class
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            interfaces: Vec::new(),
            kind: ClassKind::Concrete,
            properties: Vec::new(),
            constructor: None,
        }
    }

    /// Describe an interface. Interfaces listed through
    /// [`implements`](Self::implements) are the interfaces it extends.
    pub fn interface(name: impl Into<String>) -> Self {
        let mut descriptor = Self::new(name);
        descriptor.kind = ClassKind::Interface;
        descriptor
    }

    pub fn abstract_class(mut self) -> Self {
        self.kind = ClassKind::Abstract;
        self
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a nullable property defaulting to null
    pub fn property(self, name: impl Into<String>, ty: PropertyType) -> Self {
        self.property_descriptor(PropertyDescriptor::new(name, ty))
    }

    pub fn property_descriptor(mut self, property: PropertyDescriptor) -> Self {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
        self
    }

    /// Constructor side effects, skipped when a mapping skips constructors
    pub fn constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn(&mut Object) -> Result<()> + Send + Sync + 'static,
    {
        self.constructor = Some(Arc::new(constructor));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// Properties declared directly on this class
    pub fn own_properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn is_instantiable(&self) -> bool {
        self.kind == ClassKind::Concrete
    }
}

impl fmt::Debug for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("interfaces", &self.interfaces)
            .field("kind", &self.kind)
            .field("properties", &self.properties)
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

/// Registry of class descriptors
#[derive(Debug, Clone, Default)]
pub struct ClassCatalog {
    classes: HashMap<String, ClassDescriptor>,
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class, replacing any previous descriptor with the same name
    pub fn register(&mut self, descriptor: ClassDescriptor) {
        log::debug!("Registering class {}", descriptor.name);
        self.classes.insert(descriptor.name.clone(), descriptor);
    }

    pub fn get(&self, name: &str) -> Option<&ClassDescriptor> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The class followed by its ancestors, most specific first
    ///
    /// The parent chain comes first, then the interfaces of every class in
    /// the chain, breadth-first in declaration order. Unknown names end the
    /// walk without error, and each name is listed once.
    pub fn lineage(&self, name: &str) -> Vec<String> {
        let mut lineage = vec![name.to_string()];
        let mut seen: HashSet<String> = HashSet::from([name.to_string()]);
        let mut interfaces = VecDeque::new();

        let mut current = self.classes.get(name);
        while let Some(descriptor) = current {
            interfaces.extend(descriptor.interfaces.iter().cloned());
            current = match &descriptor.parent {
                Some(parent) if seen.insert(parent.clone()) => {
                    lineage.push(parent.clone());
                    self.classes.get(parent)
                }
                _ => None,
            };
        }

        while let Some(interface) = interfaces.pop_front() {
            if !seen.insert(interface.clone()) {
                continue;
            }
            if let Some(descriptor) = self.classes.get(&interface) {
                interfaces.extend(descriptor.interfaces.iter().cloned());
            }
            lineage.push(interface);
        }

        lineage
    }

    /// Whether `class` is `ancestor` or derives from / implements it
    pub fn is_a(&self, class: &str, ancestor: &str) -> bool {
        class == ancestor || self.lineage(class).iter().any(|c| c == ancestor)
    }

    /// All properties of a class, inherited ones first
    ///
    /// A property redeclared by a subclass keeps its inherited position but
    /// takes the subclass declaration.
    pub fn properties_of(&self, name: &str) -> Option<Vec<&PropertyDescriptor>> {
        self.classes.get(name)?;

        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.classes.get(name);
        while let Some(descriptor) = current {
            if !seen.insert(descriptor.name.as_str()) {
                break;
            }
            chain.push(descriptor);
            current = descriptor.parent.as_deref().and_then(|p| self.classes.get(p));
        }

        let mut properties: IndexMap<&str, &PropertyDescriptor> = IndexMap::new();
        for descriptor in chain.into_iter().rev() {
            for property in &descriptor.properties {
                properties.insert(property.name.as_str(), property);
            }
        }
        Some(properties.into_values().collect())
    }

    /// Look up a property of a class, including inherited properties
    pub fn property(&self, class: &str, property: &str) -> Option<&PropertyDescriptor> {
        self.properties_of(class)?
            .into_iter()
            .find(|p| p.name == property)
    }

    /// Create a new instance of `name`
    ///
    /// Every declared property starts at its default. Unless
    /// `skip_constructor` is set, the nearest constructor along the parent
    /// chain then runs against the instance.
    pub fn instantiate(&self, name: &str, skip_constructor: bool) -> Result<Object> {
        let descriptor = self.classes.get(name).ok_or_else(|| {
            Error::invalid_argument(
                format!("Class '{}' is not declared", name),
                Some("destination"),
            )
        })?;

        if !descriptor.is_instantiable() {
            return Err(Error::invalid_argument(
                format!("Class '{}' is {:?} and cannot be instantiated", name, descriptor.kind),
                Some("destination"),
            ));
        }

        let mut object = Object::new(name);
        for property in self.properties_of(name).unwrap_or_default() {
            object.set(property.name.clone(), property.default.clone());
        }

        if !skip_constructor {
            if let Some(constructor) = self.constructor_for(descriptor) {
                constructor(&mut object)?;
            }
        }

        Ok(object)
    }

    fn constructor_for<'a>(&'a self, descriptor: &'a ClassDescriptor) -> Option<&'a Constructor> {
        let mut seen = HashSet::new();
        let mut current = Some(descriptor);
        while let Some(d) = current {
            if !seen.insert(d.name.as_str()) {
                return None;
            }
            if let Some(constructor) = &d.constructor {
                return Some(constructor);
            }
            current = d.parent.as_deref().and_then(|p| self.classes.get(p));
        }
        None
    }
}
