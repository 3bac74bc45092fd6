//! Structural category of a type, for routing to the matching resolver
//!
//! Classification is a pure function over the type use, its declaration (if
//! registered) and one caller-supplied fact: whether the canonical identity
//! has a scalar mapping (built-in primitive or user override). The check order
//! is fixed and load-bearing. Categories are not mutually exclusive at the
//! representation level (collections and generics both carry type arguments),
//! so a check moved out of order silently misclassifies maps and collections
//! as generics.

use strum::AsRefStr;
use strum::Display;

use crate::descriptor::{ContainerKind, TypeDescriptor, TypeRef};

/// The structural category a type resolves under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum TypeCategory {
    /// Array of an unboxed primitive element type
    PrimitiveArray,
    /// Array with a generic element type argument
    TypedArray,
    /// Generic collection or iterable
    Collection,
    /// Keyed dictionary
    Map,
    /// Enum with named constants
    Enum,
    /// Type with bound type arguments, resolved via parameter substitution
    Generic,
    /// Plain structural type, or a scalar with a leaf mapping
    Object,
    /// Nothing is known about the type
    Unresolvable,
}

/// Classify one type use
///
/// Checks run in this fixed priority: array-ness (primitive then typed) →
/// collection → map → enum → has bound type arguments (generic) → plain
/// object (declared or leaf-mapped) → unresolvable fallback.
pub fn classify(
    type_ref: &TypeRef,
    descriptor: Option<&TypeDescriptor>,
    leaf_mapped: bool,
) -> TypeCategory {
    if let Some(descriptor) = descriptor {
        match descriptor.container {
            Some(ContainerKind::PrimitiveArray) => return TypeCategory::PrimitiveArray,
            Some(ContainerKind::TypedArray) => return TypeCategory::TypedArray,
            Some(ContainerKind::Collection) => return TypeCategory::Collection,
            Some(ContainerKind::Map) => return TypeCategory::Map,
            None => {}
        }
        if descriptor.enum_values.is_some() {
            return TypeCategory::Enum;
        }
    }
    if !type_ref.args.is_empty() {
        return TypeCategory::Generic;
    }
    if descriptor.is_some() || leaf_mapped {
        return TypeCategory::Object;
    }
    TypeCategory::Unresolvable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PropertyDescriptor;

    #[test]
    fn test_collection_with_arguments_is_not_generic() {
        let descriptor =
            TypeDescriptor::container("collections::List", ContainerKind::Collection, &["E"]);
        let type_ref = TypeRef::with_args("collections::List", vec![TypeRef::new("hr::Employee")]);
        assert_eq!(
            classify(&type_ref, Some(&descriptor), false),
            TypeCategory::Collection
        );
    }

    #[test]
    fn test_map_with_arguments_is_not_generic() {
        let descriptor =
            TypeDescriptor::container("collections::Map", ContainerKind::Map, &["K", "V"]);
        let type_ref = TypeRef::with_args(
            "collections::Map",
            vec![TypeRef::new("core::String"), TypeRef::new("core::Int")],
        );
        assert_eq!(classify(&type_ref, Some(&descriptor), false), TypeCategory::Map);
    }

    #[test]
    fn test_enum_before_generic() {
        let descriptor = TypeDescriptor::enumeration("hr::Role", &["ADMIN", "USER"]);
        let type_ref = TypeRef::new("hr::Role");
        assert_eq!(classify(&type_ref, Some(&descriptor), false), TypeCategory::Enum);
    }

    #[test]
    fn test_bound_arguments_classify_as_generic() {
        let descriptor = TypeDescriptor::new("catalog::Page")
            .with_type_parameters(&["T"])
            .with_property(PropertyDescriptor::new("content", TypeRef::new("T")));
        let type_ref = TypeRef::with_args("catalog::Page", vec![TypeRef::new("hr::Employee")]);
        assert_eq!(
            classify(&type_ref, Some(&descriptor), false),
            TypeCategory::Generic
        );
    }

    #[test]
    fn test_leaf_mapped_type_without_descriptor_is_object() {
        let type_ref = TypeRef::new("core::String");
        assert_eq!(classify(&type_ref, None, true), TypeCategory::Object);
    }

    #[test]
    fn test_unknown_type_is_unresolvable() {
        let type_ref = TypeRef::new("mystery::Thing");
        assert_eq!(classify(&type_ref, None, false), TypeCategory::Unresolvable);
    }

    #[test]
    fn test_primitive_array_before_typed_array() {
        let descriptor = TypeDescriptor::container(
            "collections::IntArray",
            ContainerKind::PrimitiveArray,
            &[],
        );
        let type_ref = TypeRef::new("collections::IntArray");
        assert_eq!(
            classify(&type_ref, Some(&descriptor), false),
            TypeCategory::PrimitiveArray
        );
    }
}
