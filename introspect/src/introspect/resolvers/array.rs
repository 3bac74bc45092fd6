//! Resolves primitive arrays without recursion
//!
//! A primitive array's element type is baked into the array type itself, so
//! resolution is a straight table lookup: no type arguments, no traversal.
//! Typed arrays (generic element) never reach this module: the dispatcher
//! routes them through the collection resolver, since a typed array and a
//! generic collection share element-resolution semantics.

use super::super::primitives::PRIMITIVE_ARRAYS;
use crate::descriptor::TypeRef;
use crate::schema::{ElementSchema, SchemaName, TypeSchema};

/// Resolve a primitive-array type from the built-in table
pub(crate) fn resolve_primitive(type_ref: &TypeRef) -> TypeSchema {
    let Some(mapping) = PRIMITIVE_ARRAYS.get(type_ref.name.as_str()) else {
        return super::unknown_fallback(type_ref);
    };
    let element = ElementSchema::Primitive(mapping.element.to_schema());
    let schema = if mapping.scalar {
        // byte arrays collapse to a single base64 string schema
        element
    } else {
        ElementSchema::array(element)
    };
    TypeSchema::new(
        SchemaName::from(type_ref.name.short_name()),
        type_ref.canonical_id(),
        schema,
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use std::sync::Arc;

    use serde_json::json;

    use super::super::super::bindings::TypeBindings;
    use super::super::super::introspector::TypeIntrospector;
    use super::*;
    use crate::descriptor::DescriptorRegistry;

    #[test]
    fn test_int_array_needs_no_recursion() {
        let mut introspector =
            TypeIntrospector::new(Arc::new(DescriptorRegistry::with_builtins()));
        let result = introspector
            .traverse(&TypeRef::new("collections::IntArray"), &TypeBindings::new())
            .unwrap();
        assert_eq!(
            result.schema.to_value(),
            json!({
                "type": "array",
                "items": {"type": "integer", "format": "int32"},
            })
        );
        assert!(introspector.session().cache.is_empty());
    }

    #[test]
    fn test_byte_array_is_a_base64_string() {
        let mut introspector =
            TypeIntrospector::new(Arc::new(DescriptorRegistry::with_builtins()));
        let result = introspector
            .traverse(&TypeRef::new("collections::ByteArray"), &TypeBindings::new())
            .unwrap();
        assert_eq!(
            result.schema.to_value(),
            json!({"type": "string", "format": "byte"})
        );
    }

    #[test]
    fn test_typed_array_delegates_to_collection_semantics() {
        let mut introspector =
            TypeIntrospector::new(Arc::new(DescriptorRegistry::with_builtins()));
        let array = TypeRef::with_args("collections::Array", vec![TypeRef::new("core::String")]);
        let result = introspector.traverse(&array, &TypeBindings::new()).unwrap();
        assert_eq!(result.name.as_str(), "ArrayOfString");
        assert_eq!(
            result.schema.to_value(),
            json!({"type": "array", "items": {"type": "string"}})
        );
    }
}
