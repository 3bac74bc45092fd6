//! Per-category schema resolvers and their shared helpers
//!
//! One resolver module per structural category. Each resolver is a stateless
//! function: the dispatcher is passed in explicitly and all cache access goes
//! through it. Resolvers recurse by calling back into
//! [`TypeIntrospector::traverse`](super::introspector::TypeIntrospector::traverse).

pub(crate) mod array;
pub(crate) mod collection;
pub(crate) mod enumeration;
pub(crate) mod generic;
pub(crate) mod map;
pub(crate) mod object;
pub(crate) mod property;

use tracing::warn;

use crate::descriptor::{TypeDescriptor, TypeName, TypeRef};
use crate::schema::{ElementSchema, ObjectDescriptor, SchemaName, TypeSchema};

/// Best-effort fallback for types nothing is known about
///
/// Classification failure is non-fatal: the overall document still builds
/// around an empty object schema.
pub(crate) fn unknown_fallback(type_ref: &TypeRef) -> TypeSchema {
    warn!(type_id = %type_ref.canonical_id(), "unknown object: type could not be classified");
    TypeSchema::new(
        SchemaName::from(type_ref.name.short_name()),
        type_ref.canonical_id(),
        ElementSchema::Object(ObjectDescriptor::default()),
    )
}

/// Build the traversal result that points at a cached entry by name
pub(crate) fn reference_to(cached: &TypeSchema) -> TypeSchema {
    TypeSchema {
        name: cached.name.clone(),
        native_type_id: cached.native_type_id.clone(),
        schema: ElementSchema::reference(cached.name.clone(), cached.native_type_id.clone()),
        renamed_from: cached.renamed_from.clone(),
    }
}

/// The emitted name for a declaration, honoring a class-level rename
///
/// Returns the name plus the declared short name it was renamed from, when a
/// serialized-name annotation applies.
pub(crate) fn emitted_name(
    descriptor: &TypeDescriptor,
    declared: &TypeName,
) -> (SchemaName, Option<String>) {
    let short = declared.short_name();
    match &descriptor.serialized_name {
        Some(serialized) => (SchemaName::from(serialized.as_str()), Some(short)),
        None => (SchemaName::from(short), None),
    }
}

/// An object shell carrying class-level metadata and no properties yet
pub(crate) fn object_shell(descriptor: &TypeDescriptor) -> ObjectDescriptor {
    ObjectDescriptor {
        properties: indexmap::IndexMap::new(),
        description: descriptor.description.clone(),
        default_value: descriptor.default_value.clone(),
        examples: descriptor.examples.clone(),
    }
}
