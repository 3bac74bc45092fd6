//! Resolves collections and typed arrays into inline array schemas
//!
//! Collections are never addressable by reference: only their element types
//! are. The wrapper result carries a debug-only `CollectionOf…`/`ArrayOf…`
//! name that is never cached and never emitted.

use super::super::bindings::TypeBindings;
use super::super::introspector::TypeIntrospector;
use crate::descriptor::TypeRef;
use crate::error::{Error, Result};
use crate::schema::{ElementSchema, SchemaName, TypeSchema};

/// Resolve the single element type argument and wrap it as an array schema
pub(crate) fn resolve(
    introspector: &mut TypeIntrospector,
    type_ref: &TypeRef,
    bindings: &TypeBindings,
    name_prefix: &str,
) -> Result<TypeSchema> {
    let Some(element) = type_ref.args.first() else {
        return Err(Error::MissingTypeArgument {
            type_name: type_ref.name.clone(),
        }
        .into());
    };
    let element = bindings.resolve(element);
    let element_schema = introspector.traverse(&element, bindings)?;

    // debug-only intermediate name; arrays themselves never become
    // referenceable schemas
    let name = SchemaName::from(format!("{name_prefix}{}", element_schema.name));
    Ok(TypeSchema::new(
        name,
        type_ref.canonical_id(),
        ElementSchema::array(element_schema.schema),
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::descriptor::{DescriptorRegistry, PropertyDescriptor, TypeDescriptor, TypeId};

    fn registry_with_box() -> DescriptorRegistry {
        let mut registry = DescriptorRegistry::with_builtins();
        registry.register(
            TypeDescriptor::new("catalog::Box")
                .with_property(PropertyDescriptor::new("color", TypeRef::new("core::String"))),
        );
        registry
    }

    #[test]
    fn test_list_of_objects_wraps_a_reference() {
        let mut introspector = TypeIntrospector::new(Arc::new(registry_with_box()));
        let list = TypeRef::with_args("collections::List", vec![TypeRef::new("catalog::Box")]);
        let result = introspector.traverse(&list, &TypeBindings::new()).unwrap();

        assert_eq!(result.name.as_str(), "CollectionOfBox");
        assert_eq!(
            result.schema.to_value(),
            json!({
                "type": "array",
                "items": {"$ref": "#/components/schemas/Box"},
            })
        );
        // only the element is cached; the wrapper never is
        assert_eq!(introspector.session().cache.len(), 1);
        assert!(introspector.session().cache.is_cached(&TypeId::from("catalog::Box")));
    }

    #[test]
    fn test_list_of_primitives_inlines_items() {
        let mut introspector = TypeIntrospector::new(Arc::new(registry_with_box()));
        let list = TypeRef::with_args("collections::List", vec![TypeRef::new("core::Int")]);
        let result = introspector.traverse(&list, &TypeBindings::new()).unwrap();

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
    fn test_nested_lists() {
        let mut introspector = TypeIntrospector::new(Arc::new(registry_with_box()));
        let nested = TypeRef::with_args(
            "collections::List",
            vec![TypeRef::with_args(
                "collections::List",
                vec![TypeRef::new("core::String")],
            )],
        );
        let result = introspector.traverse(&nested, &TypeBindings::new()).unwrap();
        assert_eq!(
            result.schema.to_value(),
            json!({
                "type": "array",
                "items": {"type": "array", "items": {"type": "string"}},
            })
        );
    }

    #[test]
    fn test_missing_element_argument_is_structural() {
        let mut introspector = TypeIntrospector::new(Arc::new(registry_with_box()));
        let bare = TypeRef::new("collections::List");
        let result = introspector.traverse(&bare, &TypeBindings::new());
        assert!(result.is_err());
    }
}
