//! The type descriptor abstraction consumed by the introspection engine
//!
//! Descriptors are the engine's read-only input: one [`TypeDescriptor`] per
//! type *declaration*, keyed by [`TypeName`] in a [`DescriptorRegistry`]. A
//! concrete use of a type (with bound arguments and use-site nullability) is a
//! [`TypeRef`]. The registry is shared behind `Arc` and never mutated during
//! traversal.

mod property;
mod type_name;
mod type_ref;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use property::{ConstraintSet, PropertyDescriptor, PropertyOrigin};
pub use type_name::TypeName;
pub use type_ref::{TypeId, TypeRef};

/// Built-in container marker for a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    /// An array of an unboxed primitive element type (e.g., `IntArray`)
    PrimitiveArray,
    /// An array with a generic element type argument
    TypedArray,
    /// A generic collection or iterable (list, set)
    Collection,
    /// A keyed dictionary
    Map,
}

/// One type declaration: the structural facts the resolvers need
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// The canonical name of the declared type
    pub name: TypeName,
    /// Declared generic parameter names, in declaration order
    pub type_parameters: Vec<String>,
    /// Built-in container marker, if this declaration is a container
    pub container: Option<ContainerKind>,
    /// Enum constant names, if this declaration is an enum
    pub enum_values: Option<Vec<String>>,
    /// Declared members, in declaration order within each origin group
    pub properties: Vec<PropertyDescriptor>,
    /// Class-level serialized-name rename annotation, if present
    pub serialized_name: Option<String>,
    /// Class-level description, if annotated
    pub description: Option<String>,
    /// Class-level default value, if annotated
    pub default_value: Option<Value>,
    /// Class-level examples, if annotated
    pub examples: Option<Value>,
}

impl TypeDescriptor {
    /// Create a plain object declaration with no members
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            container: None,
            enum_values: None,
            properties: Vec::new(),
            serialized_name: None,
            description: None,
            default_value: None,
            examples: None,
        }
    }

    /// Create a container declaration with the given parameter names
    pub fn container(
        name: impl Into<TypeName>,
        kind: ContainerKind,
        type_parameters: &[&str],
    ) -> Self {
        Self {
            type_parameters: type_parameters.iter().map(ToString::to_string).collect(),
            container: Some(kind),
            ..Self::new(name)
        }
    }

    /// Create an enum declaration from its constant names
    pub fn enumeration(name: impl Into<TypeName>, values: &[&str]) -> Self {
        Self {
            enum_values: Some(values.iter().map(ToString::to_string).collect()),
            ..Self::new(name)
        }
    }

    /// Declare generic parameter names
    #[must_use]
    pub fn with_type_parameters(mut self, parameters: &[&str]) -> Self {
        self.type_parameters = parameters.iter().map(ToString::to_string).collect();
        self
    }

    /// Append a declared member
    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Attach a class-level serialized-name rename
    #[must_use]
    pub fn with_serialized_name(mut self, name: impl Into<String>) -> Self {
        self.serialized_name = Some(name.into());
        self
    }

    /// Attach a class-level description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a class-level default value
    #[must_use]
    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Attach class-level examples
    #[must_use]
    pub fn with_examples(mut self, examples: Value) -> Self {
        self.examples = Some(examples);
        self
    }
}

/// Read-only lookup from type name to declaration
///
/// The engine's sole structural input. Shared behind `Arc` into the
/// dispatcher; registration happens before any traversal starts.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    types: HashMap<TypeName, TypeDescriptor>,
}

impl DescriptorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-seeded with the standard container declarations
    ///
    /// Covers the generic collection, set, map and typed-array containers plus
    /// the unboxed primitive-array types, so callers only register their own
    /// domain types.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(TypeDescriptor::container(
            "collections::List",
            ContainerKind::Collection,
            &["E"],
        ));
        registry.register(TypeDescriptor::container(
            "collections::Set",
            ContainerKind::Collection,
            &["E"],
        ));
        registry.register(TypeDescriptor::container(
            "collections::Collection",
            ContainerKind::Collection,
            &["E"],
        ));
        registry.register(TypeDescriptor::container(
            "collections::Map",
            ContainerKind::Map,
            &["K", "V"],
        ));
        registry.register(TypeDescriptor::container(
            "collections::Array",
            ContainerKind::TypedArray,
            &["E"],
        ));
        for primitive_array in [
            "collections::IntArray",
            "collections::LongArray",
            "collections::ShortArray",
            "collections::FloatArray",
            "collections::DoubleArray",
            "collections::BooleanArray",
            "collections::CharArray",
            "collections::ByteArray",
        ] {
            registry.register(TypeDescriptor::container(
                primitive_array,
                ContainerKind::PrimitiveArray,
                &[],
            ));
        }
        registry
    }

    /// Register one declaration, replacing any previous declaration under the
    /// same name
    pub fn register(&mut self, descriptor: TypeDescriptor) {
        self.types.insert(descriptor.name.clone(), descriptor);
    }

    /// Look up a declaration by name
    pub fn get(&self, name: &TypeName) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Number of registered declarations
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry holds no declarations
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
