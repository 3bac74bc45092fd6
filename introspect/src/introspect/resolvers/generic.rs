//! Resolves generic instantiations via type-parameter substitution
//!
//! Each instantiation gets a deterministic composite name (`Page<Employee>`
//! becomes `PageOfEmployee`) and its own cache entry, keyed by canonical
//! identity so sibling instantiations never collide. The merged bindings map
//! built here is local to this call frame and its descendants: it flows
//! downward into property resolution and never back up to the caller, which
//! is what keeps `Page<Employee>` and `Page<Department>` isolated within one
//! session.

use heck::ToUpperCamelCase;
use indexmap::IndexMap;

use super::super::bindings::TypeBindings;
use super::super::introspector::TypeIntrospector;
use super::{object, property};
use crate::descriptor::{TypeDescriptor, TypeRef};
use crate::error::{Error, Result};
use crate::schema::{ElementSchema, SchemaName, TypeSchema};

/// The deterministic composite name for a generic instantiation
///
/// Base short name plus `Of` plus each argument's composite name, recursively:
/// `Page<Employee>` → `PageOfEmployee`, `Pair<A, B>` → `PairOfAOfB`,
/// `Page<List<Employee>>` → `PageOfListOfEmployee`.
pub(crate) fn composite_name(type_ref: &TypeRef) -> SchemaName {
    SchemaName::from(render(type_ref))
}

fn render(type_ref: &TypeRef) -> String {
    let base = type_ref.name.short_name().to_upper_camel_case();
    type_ref
        .args
        .iter()
        .fold(base, |acc, arg| format!("{acc}Of{}", render(arg)))
}

/// Resolve one generic instantiation into a cached object schema
pub(crate) fn resolve(
    introspector: &mut TypeIntrospector,
    type_ref: &TypeRef,
    descriptor: Option<&TypeDescriptor>,
    inherited: &TypeBindings,
) -> Result<TypeSchema> {
    let type_id = type_ref.canonical_id();
    if let Some(cached) = introspector.session().cache.find(&type_id) {
        return Ok(super::reference_to(cached));
    }
    let Some(descriptor) = descriptor else {
        return Ok(super::unknown_fallback(type_ref));
    };
    if descriptor.type_parameters.len() != type_ref.args.len() {
        return Err(Error::TypeArgumentMismatch {
            type_name: type_ref.name.clone(),
            declared: descriptor.type_parameters.len(),
            supplied: type_ref.args.len(),
        }
        .into());
    }

    let name = composite_name(type_ref);

    // placeholder before recursion: a property typed as the enclosing
    // instantiation resolves to a Reference instead of recursing
    introspector.session_mut().cache.add(TypeSchema::new(
        name.clone(),
        type_id.clone(),
        ElementSchema::Object(super::object_shell(descriptor)),
    ));

    // local bindings zip declared parameters against this call site's
    // arguments; the merged map exists only for this frame and below
    let local = TypeBindings::from_pairs(&descriptor.type_parameters, &type_ref.args);
    let merged = inherited.merge(&local);

    let mut properties = IndexMap::new();
    for member in object::ordered_properties(descriptor) {
        let (member_name, schema_property) = property::resolve(introspector, member, &merged)?;
        properties.insert(member_name, schema_property);
    }

    let mut populated = super::object_shell(descriptor);
    populated.properties = properties;
    introspector.session_mut().cache.add(TypeSchema::new(
        name.clone(),
        type_id.clone(),
        ElementSchema::Object(populated),
    ));

    let cached = introspector
        .session()
        .cache
        .find(&type_id)
        .map(super::reference_to);
    Ok(cached.unwrap_or_else(|| super::unknown_fallback(type_ref)))
}
