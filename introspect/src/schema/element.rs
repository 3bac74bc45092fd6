//! The schema IR node: a closed sum type over every schema shape
//!
//! [`ElementSchema`] is the normalized, language-agnostic intermediate form
//! the resolvers produce. It serializes into the OpenAPI-flavoured JSON shape
//! (`$ref`, camelCase keys, empties skipped) for downstream composition and
//! for tests; final document emission is a downstream concern.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value, json};

use super::api_type::{ApiFormat, ApiType};
use super::field::SchemaField;
use super::{SchemaName, SchemaProperty};
use crate::descriptor::{ConstraintSet, TypeId};

/// Prefix for by-name schema references in the emitted document
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// A scalar schema with its optional format refinement and constraints
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSchema {
    /// The JSON schema type
    pub api_type: ApiType,
    /// Format refinement, if any
    pub format: Option<ApiFormat>,
    /// Minimum string length
    pub min_length: Option<u64>,
    /// Maximum string length
    pub max_length: Option<u64>,
    /// Regex pattern for string values
    pub pattern: Option<String>,
    /// Inclusive lower bound
    pub minimum: Option<f64>,
    /// Inclusive upper bound
    pub maximum: Option<f64>,
    /// Exclusive lower bound
    pub exclusive_minimum: Option<f64>,
    /// Exclusive upper bound
    pub exclusive_maximum: Option<f64>,
    /// Multiple-of factor
    pub multiple_of: Option<f64>,
    /// Content encoding for string values
    pub content_encoding: Option<String>,
    /// Content media type for string values
    pub content_media_type: Option<String>,
}

impl PrimitiveSchema {
    /// Create an unconstrained primitive schema
    pub const fn new(api_type: ApiType) -> Self {
        Self {
            api_type,
            format: None,
            min_length: None,
            max_length: None,
            pattern: None,
            minimum: None,
            maximum: None,
            exclusive_minimum: None,
            exclusive_maximum: None,
            multiple_of: None,
            content_encoding: None,
            content_media_type: None,
        }
    }

    /// Create a primitive schema with a format refinement
    pub const fn with_format(api_type: ApiType, format: ApiFormat) -> Self {
        let mut schema = Self::new(api_type);
        schema.format = Some(format);
        schema
    }

    /// Merge annotated constraints in, keeping any already-set value
    pub fn absorb_constraints(&mut self, constraints: &ConstraintSet) {
        self.min_length = self.min_length.or(constraints.min_length);
        self.max_length = self.max_length.or(constraints.max_length);
        self.pattern = self.pattern.take().or_else(|| constraints.pattern.clone());
        self.minimum = self.minimum.or(constraints.minimum);
        self.maximum = self.maximum.or(constraints.maximum);
        self.exclusive_minimum = self.exclusive_minimum.or(constraints.exclusive_minimum);
        self.exclusive_maximum = self.exclusive_maximum.or(constraints.exclusive_maximum);
        self.multiple_of = self.multiple_of.or(constraints.multiple_of);
        self.content_encoding = self
            .content_encoding
            .take()
            .or_else(|| constraints.content_encoding.clone());
        self.content_media_type = self
            .content_media_type
            .take()
            .or_else(|| constraints.content_media_type.clone());
    }
}

/// Mutable working form of an object schema
///
/// Inserted into the cache as an empty placeholder before property recursion
/// starts, then populated in place. A downstream composer transforms it into
/// its immutable emitted form.
#[derive(Debug, Clone, Default)]
pub struct ObjectDescriptor {
    /// Resolved properties, keyed by serialized name, in declaration order
    pub properties: IndexMap<String, SchemaProperty>,
    /// Class-level description
    pub description: Option<String>,
    /// Class-level default value
    pub default_value: Option<Value>,
    /// Class-level examples
    pub examples: Option<Value>,
}

impl ObjectDescriptor {
    /// Names of non-transient required properties, in declaration order
    pub fn required_names(&self) -> Vec<&str> {
        self.properties
            .iter()
            .filter(|(_, property)| property.is_required && !property.is_transient)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// The schema IR node
#[derive(Debug, Clone)]
pub enum ElementSchema {
    /// An object schema under construction
    Object(ObjectDescriptor),
    /// An array schema wrapping its element schema
    Array {
        /// Schema of the array elements
        items: Box<ElementSchema>,
        /// Minimum number of items
        min_items: Option<u64>,
        /// Maximum number of items
        max_items: Option<u64>,
        /// Whether items must be unique
        unique_items: Option<bool>,
    },
    /// A map schema wrapping its value schema
    AdditionalProperties {
        /// Schema of the map values
        value: Box<ElementSchema>,
    },
    /// An enum schema listing its constant names
    Enum {
        /// The constant names
        values: Vec<String>,
    },
    /// A scalar schema
    Primitive(PrimitiveSchema),
    /// A by-name pointer to a cached schema; never owns the referenced schema
    Reference {
        /// Emitted name of the referenced schema
        schema_name: SchemaName,
        /// Canonical identity of the referenced type
        referenced_type: TypeId,
    },
}

impl ElementSchema {
    /// Create an array schema around an element schema
    pub fn array(items: Self) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: None,
            max_items: None,
            unique_items: None,
        }
    }

    /// Create a by-name reference
    pub fn reference(schema_name: SchemaName, referenced_type: TypeId) -> Self {
        Self::Reference {
            schema_name,
            referenced_type,
        }
    }

    /// The `$ref` location of a reference node, if this is one
    pub fn reference_location(&self) -> Option<String> {
        match self {
            Self::Reference { schema_name, .. } => Some(format!("{SCHEMA_REF_PREFIX}{schema_name}")),
            _ => None,
        }
    }

    /// Whether this node is a by-name reference
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }

    /// Apply annotated constraints onto this node, if it is locally mutable
    ///
    /// Returns `false` when the constraints could not be absorbed (references
    /// point at shared cache entries and must not be mutated through a single
    /// use site).
    pub fn apply_constraints(&mut self, constraints: &ConstraintSet) -> bool {
        match self {
            Self::Primitive(primitive) => {
                primitive.absorb_constraints(constraints);
                true
            }
            Self::Array {
                min_items,
                max_items,
                unique_items,
                ..
            } => {
                *min_items = min_items.or(constraints.min_items);
                *max_items = max_items.or(constraints.max_items);
                *unique_items = unique_items.or(constraints.unique_items);
                true
            }
            _ => false,
        }
    }

    /// Render this node into its OpenAPI-flavoured JSON shape
    pub fn to_value(&self) -> Value {
        match self {
            Self::Object(descriptor) => object_to_value(descriptor),
            Self::Array {
                items,
                min_items,
                max_items,
                unique_items,
            } => {
                let mut map = Map::new();
                set(&mut map, SchemaField::Type, ApiType::Array.into());
                set(&mut map, SchemaField::Items, items.to_value());
                set_opt(&mut map, SchemaField::MinItems, min_items.map(u64_value));
                set_opt(&mut map, SchemaField::MaxItems, max_items.map(Value::from));
                set_opt(
                    &mut map,
                    SchemaField::UniqueItems,
                    unique_items.map(Value::from),
                );
                Value::Object(map)
            }
            Self::AdditionalProperties { value } => {
                let mut map = Map::new();
                set(&mut map, SchemaField::Type, ApiType::Object.into());
                set(&mut map, SchemaField::AdditionalProperties, value.to_value());
                Value::Object(map)
            }
            Self::Enum { values } => {
                let mut map = Map::new();
                set(&mut map, SchemaField::Type, ApiType::String.into());
                set(&mut map, SchemaField::Enum, json!(values));
                Value::Object(map)
            }
            Self::Primitive(primitive) => primitive_to_value(primitive),
            Self::Reference { .. } => {
                let mut map = Map::new();
                if let Some(location) = self.reference_location() {
                    set(&mut map, SchemaField::Ref, Value::String(location));
                }
                Value::Object(map)
            }
        }
    }
}

impl Serialize for ElementSchema {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

fn object_to_value(descriptor: &ObjectDescriptor) -> Value {
    let mut map = Map::new();
    set(&mut map, SchemaField::Type, ApiType::Object.into());
    let properties: Map<String, Value> = descriptor
        .properties
        .iter()
        .map(|(name, property)| (name.clone(), property.to_value()))
        .collect();
    set(&mut map, SchemaField::Properties, Value::Object(properties));
    let required = descriptor.required_names();
    if !required.is_empty() {
        set(&mut map, SchemaField::Required, json!(required));
    }
    set_opt(
        &mut map,
        SchemaField::Description,
        descriptor.description.clone().map(Value::String),
    );
    set_opt(
        &mut map,
        SchemaField::Default,
        descriptor.default_value.clone(),
    );
    set_opt(&mut map, SchemaField::Examples, descriptor.examples.clone());
    Value::Object(map)
}

fn primitive_to_value(primitive: &PrimitiveSchema) -> Value {
    let mut map = Map::new();
    set(&mut map, SchemaField::Type, primitive.api_type.into());
    set_opt(
        &mut map,
        SchemaField::Format,
        primitive.format.map(Value::from),
    );
    set_opt(
        &mut map,
        SchemaField::MinLength,
        primitive.min_length.map(u64_value),
    );
    set_opt(
        &mut map,
        SchemaField::MaxLength,
        primitive.max_length.map(u64_value),
    );
    set_opt(
        &mut map,
        SchemaField::Pattern,
        primitive.pattern.clone().map(Value::String),
    );
    set_opt(&mut map, SchemaField::Minimum, primitive.minimum.map(json_f64));
    set_opt(&mut map, SchemaField::Maximum, primitive.maximum.map(json_f64));
    set_opt(
        &mut map,
        SchemaField::ExclusiveMinimum,
        primitive.exclusive_minimum.map(json_f64),
    );
    set_opt(
        &mut map,
        SchemaField::ExclusiveMaximum,
        primitive.exclusive_maximum.map(json_f64),
    );
    set_opt(
        &mut map,
        SchemaField::MultipleOf,
        primitive.multiple_of.map(json_f64),
    );
    set_opt(
        &mut map,
        SchemaField::ContentEncoding,
        primitive.content_encoding.clone().map(Value::String),
    );
    set_opt(
        &mut map,
        SchemaField::ContentMediaType,
        primitive.content_media_type.clone().map(Value::String),
    );
    Value::Object(map)
}

fn set(map: &mut Map<String, Value>, field: SchemaField, value: Value) {
    map.insert(field.as_ref().to_string(), value);
}

fn set_opt(map: &mut Map<String, Value>, field: SchemaField, value: Option<Value>) {
    if let Some(value) = value {
        set(map, field, value);
    }
}

fn u64_value(value: u64) -> Value {
    Value::from(value)
}

fn json_f64(value: f64) -> Value {
    json!(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_to_value() {
        let schema =
            ElementSchema::Primitive(PrimitiveSchema::with_format(ApiType::Integer, ApiFormat::Int32));
        assert_eq!(
            schema.to_value(),
            json!({"type": "integer", "format": "int32"})
        );
    }

    #[test]
    fn test_reference_location_and_value() {
        let schema = ElementSchema::reference(
            SchemaName::from("Box"),
            TypeId::from("catalog::Box"),
        );
        assert_eq!(
            schema.reference_location().as_deref(),
            Some("#/components/schemas/Box")
        );
        assert_eq!(
            schema.to_value(),
            json!({"$ref": "#/components/schemas/Box"})
        );
    }

    #[test]
    fn test_constraints_absorbed_by_primitive_not_reference() {
        let constraints = ConstraintSet {
            min_length: Some(2),
            ..ConstraintSet::default()
        };
        let mut primitive = ElementSchema::Primitive(PrimitiveSchema::new(ApiType::String));
        assert!(primitive.apply_constraints(&constraints));
        assert_eq!(
            primitive.to_value(),
            json!({"type": "string", "minLength": 2})
        );

        let mut reference = ElementSchema::reference(
            SchemaName::from("Box"),
            TypeId::from("catalog::Box"),
        );
        assert!(!reference.apply_constraints(&constraints));
    }

    #[test]
    fn test_array_constraints() {
        let constraints = ConstraintSet {
            min_items: Some(1),
            unique_items: Some(true),
            ..ConstraintSet::default()
        };
        let mut array = ElementSchema::array(ElementSchema::Primitive(PrimitiveSchema::new(
            ApiType::String,
        )));
        assert!(array.apply_constraints(&constraints));
        assert_eq!(
            array.to_value(),
            json!({
                "type": "array",
                "items": {"type": "string"},
                "minItems": 1,
                "uniqueItems": true,
            })
        );
    }

    #[test]
    fn test_enum_to_value() {
        let schema = ElementSchema::Enum {
            values: vec!["RED".to_string(), "GREEN".to_string()],
        };
        assert_eq!(
            schema.to_value(),
            json!({"type": "string", "enum": ["RED", "GREEN"]})
        );
    }
}
