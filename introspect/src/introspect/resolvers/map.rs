//! Resolves map types into inline `additionalProperties` schemas
//!
//! OpenAPI object schemas only permit string keys, so a non-string key type
//! is a structural contract violation that aborts the session rather than
//! being silently coerced.

use super::super::bindings::TypeBindings;
use super::super::introspector::TypeIntrospector;
use crate::descriptor::TypeRef;
use crate::error::{Error, Result};
use crate::schema::{ElementSchema, SchemaName, TypeSchema};

/// Validate the key type and wrap the resolved value schema
pub(crate) fn resolve(
    introspector: &mut TypeIntrospector,
    type_ref: &TypeRef,
    bindings: &TypeBindings,
) -> Result<TypeSchema> {
    let [key, value] = type_ref.args.as_slice() else {
        return Err(Error::TypeArgumentMismatch {
            type_name: type_ref.name.clone(),
            declared: 2,
            supplied: type_ref.args.len(),
        }
        .into());
    };

    let key = bindings.resolve(key);
    if !introspector.maps_to_string(&key) {
        return Err(Error::NonStringMapKey {
            map_type: type_ref.name.clone(),
            key_type: key.name.clone(),
        }
        .into());
    }

    let value = bindings.resolve(value);
    let value_schema = introspector.traverse(&value, bindings)?;
    Ok(TypeSchema::new(
        SchemaName::from(type_ref.name.short_name()),
        type_ref.canonical_id(),
        ElementSchema::AdditionalProperties {
            value: Box::new(value_schema.schema),
        },
    ))
}
