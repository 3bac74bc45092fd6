//! Resolves one declared member into its serialized name and schema property
//!
//! Required-ness resolution is an ordered chain of probes, each returning
//! `Option<bool>`; the first hit wins and the terminal fallback is "required".
//! The chain must never error: inability to resolve required-ness degrades to
//! the safe default instead of propagating.

use tracing::debug;

use super::super::bindings::TypeBindings;
use super::super::introspector::TypeIntrospector;
use crate::descriptor::PropertyDescriptor;
use crate::error::Result;
use crate::schema::{ElementSchema, SchemaProperty};

/// The ordered required-ness probes
///
/// 1. explicit required annotation;
/// 2. serializer-optionality hint, inverted;
/// 3. constructor-default presence (absence of a default means required);
///
/// then the terminal fallback resolves to required. Body-declared members
/// without constructor backing abstain at tier 3 and land on the fallback.
const REQUIRED_PROBES: [fn(&PropertyDescriptor) -> Option<bool>; 3] = [
    |property| property.required,
    |property| property.serializer_optional.map(|optional| !optional),
    |property| property.has_default.map(|has_default| !has_default),
];

fn resolve_required(property: &PropertyDescriptor) -> bool {
    REQUIRED_PROBES
        .iter()
        .find_map(|probe| probe(property))
        .unwrap_or(true)
}

/// Resolve one member: serialized name, flags, recursive type resolution
pub(crate) fn resolve(
    introspector: &mut TypeIntrospector,
    property: &PropertyDescriptor,
    bindings: &TypeBindings,
) -> Result<(String, SchemaProperty)> {
    let name = property
        .serialized_name
        .clone()
        .unwrap_or_else(|| property.name.clone());
    let renamed_from = property
        .serialized_name
        .as_ref()
        .map(|_| property.name.clone());

    let substituted = bindings.resolve(&property.type_ref);
    let is_nullable = substituted.nullable;
    let is_transient = property.transient;
    // transient members never participate in the required set
    let is_required = !is_transient && resolve_required(property);

    let resolved = introspector.traverse(&substituted, bindings)?;
    let mut schema = resolved.schema;

    if !property.constraints.is_empty() && !schema.apply_constraints(&property.constraints) {
        debug!(
            property = %name,
            "constraints attached to a by-name reference are dropped"
        );
    }

    // a transient reference is later stripped from the emitted object, so it
    // must not count toward orphan detection
    if is_transient && let ElementSchema::Reference { referenced_type, .. } = &schema {
        introspector.session_mut().counter.decrement(&referenced_type);
    }

    Ok((
        name,
        SchemaProperty {
            schema,
            is_nullable,
            is_required,
            is_transient,
            renamed_from,
        },
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use std::sync::Arc;

    use super::*;
    use crate::descriptor::{
        ConstraintSet, DescriptorRegistry, PropertyOrigin, TypeDescriptor, TypeId, TypeRef,
    };

    fn introspector() -> TypeIntrospector {
        let mut registry = DescriptorRegistry::with_builtins();
        registry.register(TypeDescriptor::new("hr::Employee").with_property(
            PropertyDescriptor::new("name", TypeRef::new("core::String")),
        ));
        TypeIntrospector::new(Arc::new(registry))
    }

    fn resolve_one(property: PropertyDescriptor) -> (String, SchemaProperty) {
        let mut introspector = introspector();
        resolve(&mut introspector, &property, &TypeBindings::new()).unwrap()
    }

    #[test]
    fn test_no_signals_falls_back_to_required() {
        let (_, property) =
            resolve_one(PropertyDescriptor::new("color", TypeRef::new("core::String")));
        assert!(property.is_required);
    }

    #[test]
    fn test_constructor_default_means_optional() {
        let (_, property) = resolve_one(
            PropertyDescriptor::new("color", TypeRef::new("core::String")).with_default(true),
        );
        assert!(!property.is_required);
    }

    #[test]
    fn test_explicit_annotation_overrides_default() {
        let (_, property) = resolve_one(
            PropertyDescriptor::new("color", TypeRef::new("core::String"))
                .with_required(true)
                .with_default(true),
        );
        assert!(property.is_required);
    }

    #[test]
    fn test_serializer_hint_beats_constructor_default() {
        let (_, property) = resolve_one(
            PropertyDescriptor::new("color", TypeRef::new("core::String"))
                .with_serializer_optional(true)
                .with_default(false),
        );
        assert!(!property.is_required);
    }

    #[test]
    fn test_body_declared_without_backing_is_required() {
        let (_, property) = resolve_one(
            PropertyDescriptor::new("note", TypeRef::new("core::String"))
                .with_origin(PropertyOrigin::Body),
        );
        assert!(property.is_required);
    }

    #[test]
    fn test_transient_forced_out_of_required_set() {
        let (_, property) = resolve_one(
            PropertyDescriptor::new("secret", TypeRef::new("core::String"))
                .with_required(true)
                .transient(),
        );
        assert!(property.is_transient);
        assert!(!property.is_required);
    }

    #[test]
    fn test_rename_tracking() {
        let (name, property) = resolve_one(
            PropertyDescriptor::new("employee_name", TypeRef::new("core::String"))
                .with_serialized_name("employeeName"),
        );
        assert_eq!(name, "employeeName");
        assert_eq!(property.renamed_from.as_deref(), Some("employee_name"));
    }

    #[test]
    fn test_nullability_from_declared_type() {
        let (_, property) = resolve_one(PropertyDescriptor::new(
            "nickname",
            TypeRef::new("core::String").nullable(),
        ));
        assert!(property.is_nullable);
    }

    #[test]
    fn test_constraints_applied_to_inline_primitive() {
        let (_, property) = resolve_one(
            PropertyDescriptor::new("color", TypeRef::new("core::String")).with_constraints(
                ConstraintSet {
                    max_length: Some(16),
                    ..ConstraintSet::default()
                },
            ),
        );
        assert_eq!(
            property.schema.to_value(),
            serde_json::json!({"type": "string", "maxLength": 16})
        );
    }

    #[test]
    fn test_constraints_dropped_for_reference() {
        let mut introspector = introspector();
        let property = PropertyDescriptor::new("boss", TypeRef::new("hr::Employee"))
            .with_constraints(ConstraintSet {
                pattern: Some(".*".to_string()),
                ..ConstraintSet::default()
            });
        let (_, resolved) = resolve(&mut introspector, &property, &TypeBindings::new()).unwrap();
        assert!(resolved.schema.is_reference());
        assert_eq!(
            resolved.schema.to_value(),
            serde_json::json!({"$ref": "#/components/schemas/Employee"})
        );
    }

    #[test]
    fn test_transient_reference_decrements_count() {
        let mut introspector = introspector();
        let employee_id = TypeId::from("hr::Employee");
        let property =
            PropertyDescriptor::new("audit", TypeRef::new("hr::Employee")).transient();
        let result = resolve(&mut introspector, &property, &TypeBindings::new());
        assert!(result.is_ok());
        // one increment from the traversal, one decrement for the discarded
        // transient reference
        assert_eq!(introspector.session().counter.count(&employee_id), 0);
    }
}
