//! Generic type-argument bindings, scoped per traversal frame
//!
//! A [`TypeBindings`] maps a type-parameter name to the concrete type
//! substituted for it at the current call site. Bindings flow downward only:
//! each nested generic traversal derives a new merged map and passes it to its
//! descendants, and nothing ever writes a merged map back into the caller's
//! frame. This is what keeps sibling instantiations (`Page<Employee>` and
//! `Page<Department>` in one session) from contaminating each other.

use std::collections::HashMap;

use crate::descriptor::TypeRef;

/// Immutable map from type-parameter name to its concrete substitution
#[derive(Debug, Clone, Default)]
pub struct TypeBindings {
    bindings: HashMap<String, TypeRef>,
}

impl TypeBindings {
    /// Create an empty bindings map (the root traversal frame)
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip declared parameter names against call-site arguments
    ///
    /// The caller validates that the two slices have equal length; extra
    /// entries on either side are ignored here.
    pub fn from_pairs(parameters: &[String], arguments: &[TypeRef]) -> Self {
        Self {
            bindings: parameters
                .iter()
                .cloned()
                .zip(arguments.iter().cloned())
                .collect(),
        }
    }

    /// Produce the merged map `self ∪ local`, local entries winning on
    /// key collision
    ///
    /// Returns a new map; neither input is mutated.
    #[must_use]
    pub fn merge(&self, local: &Self) -> Self {
        let mut bindings = self.bindings.clone();
        bindings.extend(local.bindings.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { bindings }
    }

    /// Look up the substitution for a parameter name
    pub fn get(&self, parameter: &str) -> Option<&TypeRef> {
        self.bindings.get(parameter)
    }

    /// Whether no parameter is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Substitute a type use through these bindings
    ///
    /// A bare parameter reference is replaced by its bound concrete type,
    /// OR-combining the nullability of the use site and the substitution.
    /// Argument lists are substituted recursively so that uses like
    /// `List<T>` resolve their inner parameter too.
    pub fn resolve(&self, type_ref: &TypeRef) -> TypeRef {
        if type_ref.args.is_empty()
            && let Some(bound) = self.bindings.get(type_ref.name.as_str())
        {
            let mut substituted = bound.clone();
            substituted.nullable = substituted.nullable || type_ref.nullable;
            return substituted;
        }
        TypeRef {
            name: type_ref.name.clone(),
            args: type_ref.args.iter().map(|arg| self.resolve(arg)).collect(),
            nullable: type_ref.nullable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(parameter: &str, concrete: &str) -> TypeBindings {
        TypeBindings::from_pairs(
            &[parameter.to_string()],
            &[TypeRef::new(concrete)],
        )
    }

    #[test]
    fn test_resolve_substitutes_bare_parameter() {
        let bindings = bind("T", "hr::Employee");
        let resolved = bindings.resolve(&TypeRef::new("T"));
        assert_eq!(resolved.canonical_id().as_str(), "hr::Employee");
    }

    #[test]
    fn test_resolve_recurses_into_arguments() {
        let bindings = bind("T", "hr::Employee");
        let list_of_t = TypeRef::with_args("collections::List", vec![TypeRef::new("T")]);
        let resolved = bindings.resolve(&list_of_t);
        assert_eq!(
            resolved.canonical_id().as_str(),
            "collections::List<hr::Employee>"
        );
    }

    #[test]
    fn test_resolve_or_combines_nullability() {
        let bindings = bind("T", "hr::Employee");
        let resolved = bindings.resolve(&TypeRef::new("T").nullable());
        assert!(resolved.nullable);
    }

    #[test]
    fn test_merge_local_wins_and_leaves_inputs_untouched() {
        let inherited = bind("T", "hr::Employee");
        let local = bind("T", "hr::Department");
        let merged = inherited.merge(&local);
        assert_eq!(
            merged.get("T").map(|r| r.name.as_str()),
            Some("hr::Department")
        );
        // the inherited frame is unchanged
        assert_eq!(
            inherited.get("T").map(|r| r.name.as_str()),
            Some("hr::Employee")
        );
    }

    #[test]
    fn test_unbound_names_pass_through() {
        let bindings = TypeBindings::new();
        let type_ref = TypeRef::new("hr::Employee");
        assert_eq!(bindings.resolve(&type_ref), type_ref);
    }
}
