//! Resolves enums into a single cached constant-list schema
//!
//! Enums carry no nested traversal: one cache entry per enum type, and every
//! call after the first returns a `Reference` to it.

use super::super::introspector::TypeIntrospector;
use crate::descriptor::{TypeDescriptor, TypeRef};
use crate::error::Result;
use crate::schema::{ElementSchema, TypeSchema};

/// Resolve an enum declaration's constants into an `Enum` schema
pub(crate) fn resolve(
    introspector: &mut TypeIntrospector,
    type_ref: &TypeRef,
    descriptor: &TypeDescriptor,
) -> Result<TypeSchema> {
    let type_id = type_ref.canonical_id();
    if let Some(cached) = introspector.session().cache.find(&type_id) {
        return Ok(super::reference_to(cached));
    }

    let (name, renamed_from) = super::emitted_name(descriptor, &type_ref.name);
    let values = descriptor.enum_values.clone().unwrap_or_default();
    let entry = TypeSchema {
        name: name.clone(),
        native_type_id: type_id.clone(),
        schema: ElementSchema::Enum { values },
        renamed_from,
    };
    introspector.session_mut().cache.add(entry);

    let cached = introspector
        .session()
        .cache
        .find(&type_id)
        .map(super::reference_to);
    Ok(cached.unwrap_or_else(|| super::unknown_fallback(type_ref)))
}
