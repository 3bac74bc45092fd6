//! Resolves concrete structural types into cached object schemas
//!
//! The placeholder-then-populate discipline lives here: an empty
//! `ObjectDescriptor` is cached under the type's identity *before* property
//! recursion starts, so a self-referencing property immediately resolves to a
//! `Reference` instead of recursing forever. Scalar leaf types (built-in
//! primitives and user overrides) bypass the object machinery entirely.

use indexmap::IndexMap;

use super::super::bindings::TypeBindings;
use super::super::introspector::TypeIntrospector;
use super::property;
use crate::descriptor::{PropertyDescriptor, PropertyOrigin, TypeDescriptor, TypeRef};
use crate::error::Result;
use crate::schema::{ElementSchema, SchemaName, TypeSchema};

/// Declared members in enumeration order: primary-constructor members first,
/// then body-declared members, with inherited members appended last
pub(crate) fn ordered_properties(
    descriptor: &TypeDescriptor,
) -> impl Iterator<Item = &PropertyDescriptor> {
    const ORDER: [PropertyOrigin; 3] = [
        PropertyOrigin::Constructor,
        PropertyOrigin::Body,
        PropertyOrigin::Inherited,
    ];
    ORDER.into_iter().flat_map(|origin| {
        descriptor
            .properties
            .iter()
            .filter(move |property| property.origin == origin)
    })
}

/// Resolve a concrete non-generic structural type
pub(crate) fn resolve(
    introspector: &mut TypeIntrospector,
    type_ref: &TypeRef,
    descriptor: Option<&TypeDescriptor>,
    bindings: &TypeBindings,
) -> Result<TypeSchema> {
    // zero-property leaf types map straight to a primitive schema, overrides
    // taking priority over built-ins; never cached
    if let Some(primitive) = introspector.scalar_mapping(type_ref) {
        return Ok(TypeSchema::new(
            SchemaName::from(type_ref.name.short_name()),
            type_ref.canonical_id(),
            ElementSchema::Primitive(primitive),
        ));
    }
    let Some(descriptor) = descriptor else {
        return Ok(super::unknown_fallback(type_ref));
    };

    let type_id = type_ref.canonical_id();
    if let Some(cached) = introspector.session().cache.find(&type_id) {
        return Ok(super::reference_to(cached));
    }

    let (name, renamed_from) = super::emitted_name(descriptor, &type_ref.name);

    // placeholder before recursion, so self-references resolve to this entry
    introspector.session_mut().cache.add(TypeSchema {
        name: name.clone(),
        native_type_id: type_id.clone(),
        schema: ElementSchema::Object(super::object_shell(descriptor)),
        renamed_from: renamed_from.clone(),
    });

    let mut properties = IndexMap::new();
    for member in ordered_properties(descriptor) {
        let (member_name, schema_property) = property::resolve(introspector, member, bindings)?;
        properties.insert(member_name, schema_property);
    }

    let mut populated = super::object_shell(descriptor);
    populated.properties = properties;
    let completed = TypeSchema {
        name: name.clone(),
        native_type_id: type_id.clone(),
        schema: ElementSchema::Object(populated),
        renamed_from,
    };
    introspector.session_mut().cache.add(completed);

    // the cache owns the populated schema; hand back a by-name pointer
    let cached = introspector
        .session()
        .cache
        .find(&type_id)
        .map(super::reference_to);
    Ok(cached.unwrap_or_else(|| super::unknown_fallback(type_ref)))
}
