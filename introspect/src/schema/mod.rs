//! The schema IR: traversal results, properties, names, conflicts
//!
//! Everything the introspection engine produces lives here: the
//! [`ElementSchema`] sum type, the per-type [`TypeSchema`] traversal result,
//! the per-member [`SchemaProperty`], and the [`NameConflict`] report entry.

mod api_type;
mod element;
mod field;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use api_type::{ApiFormat, ApiType};
pub use element::{ElementSchema, ObjectDescriptor, PrimitiveSchema, SCHEMA_REF_PREFIX};
pub use field::SchemaField;

use crate::descriptor::TypeId;

/// The emitted name of a schema in the components document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct SchemaName(String);

impl SchemaName {
    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SchemaName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SchemaName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for SchemaName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The traversal result for one type reference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSchema {
    /// Emitted schema name
    pub name: SchemaName,
    /// Canonical, runtime-stable identity of the source type; the cache key
    pub native_type_id: TypeId,
    /// The schema IR node
    pub schema: ElementSchema,
    /// The declared name this schema was renamed from, if a serialized-name
    /// annotation applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed_from: Option<String>,
}

impl TypeSchema {
    /// Create a traversal result with no rename history
    pub const fn new(name: SchemaName, native_type_id: TypeId, schema: ElementSchema) -> Self {
        Self {
            name,
            native_type_id,
            schema,
            renamed_from: None,
        }
    }
}

/// One member inside an [`ObjectDescriptor`]
#[derive(Debug, Clone)]
pub struct SchemaProperty {
    /// The member's resolved schema
    pub schema: ElementSchema,
    /// Whether the member's use site admits null
    pub is_nullable: bool,
    /// Whether the member belongs to the object's required set
    pub is_required: bool,
    /// Whether the member is transient (stripped by the downstream composer)
    pub is_transient: bool,
    /// The declared name this member was renamed from, if any
    pub renamed_from: Option<String>,
}

impl SchemaProperty {
    /// Render this member into its OpenAPI-flavoured JSON shape
    ///
    /// Required-set membership is rendered at the owning object level, not
    /// here; nullability is rendered inline.
    pub fn to_value(&self) -> Value {
        let mut value = self.schema.to_value();
        if self.is_nullable
            && let Value::Object(map) = &mut value
        {
            map.insert(SchemaField::Nullable.as_ref().to_string(), Value::Bool(true));
        }
        value
    }
}

impl Serialize for SchemaProperty {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

/// Two or more distinct type identities sharing one emitted schema name
///
/// Informational only; the engine never renames or deduplicates. Callers
/// resolve conflicts manually, for example by embedding origin info in the
/// schema description.
#[derive(Debug, Clone, Serialize)]
pub struct NameConflict {
    /// The contested schema name
    pub name: SchemaName,
    /// The distinct type identities claiming it
    pub contenders: Vec<TypeId>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_property_value_carries_nullability_inline() {
        let property = SchemaProperty {
            schema: ElementSchema::Primitive(PrimitiveSchema::new(ApiType::String)),
            is_nullable: true,
            is_required: false,
            is_transient: false,
            renamed_from: None,
        };
        assert_eq!(
            property.to_value(),
            json!({"type": "string", "nullable": true})
        );
    }

    #[test]
    fn test_object_required_excludes_transient_members() {
        let mut descriptor = ObjectDescriptor::default();
        descriptor.properties.insert(
            "kept".to_string(),
            SchemaProperty {
                schema: ElementSchema::Primitive(PrimitiveSchema::new(ApiType::String)),
                is_nullable: false,
                is_required: true,
                is_transient: false,
                renamed_from: None,
            },
        );
        descriptor.properties.insert(
            "skipped".to_string(),
            SchemaProperty {
                schema: ElementSchema::Primitive(PrimitiveSchema::new(ApiType::String)),
                is_nullable: false,
                is_required: true,
                is_transient: true,
                renamed_from: None,
            },
        );
        assert_eq!(descriptor.required_names(), vec!["kept"]);
    }
}
