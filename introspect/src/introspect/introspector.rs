//! The central dispatcher: classification, routing, session ownership
//!
//! `TypeIntrospector::traverse` is the single entry point every resolver
//! recurses back through. It substitutes the incoming type use through the
//! current bindings, records the traversal attempt in the reference counter,
//! classifies the result and routes it to the matching resolver. Unresolvable
//! types degrade to a logged "unknown object" fallback instead of failing the
//! traversal; only structural contract violations escalate.

use std::sync::Arc;

use tracing::debug;

use super::bindings::TypeBindings;
use super::classifier::{TypeCategory, classify};
use super::overrides::TypeOverrideMap;
use super::primitives::{BUILTIN_PRIMITIVES, STRING_TYPE};
use super::resolvers;
use super::session::IntrospectionSession;
use crate::descriptor::{DescriptorRegistry, TypeRef};
use crate::error::Result;
use crate::schema::{ApiType, PrimitiveSchema, TypeSchema};

/// The type introspection dispatcher
///
/// Owns the descriptor registry handle, the override map and the session
/// state (cache plus reference counter) for one traversal session.
#[derive(Debug)]
pub struct TypeIntrospector {
    registry: Arc<DescriptorRegistry>,
    overrides: TypeOverrideMap,
    session: IntrospectionSession,
}

impl TypeIntrospector {
    /// Create a dispatcher over a registry, with no overrides
    pub fn new(registry: Arc<DescriptorRegistry>) -> Self {
        Self {
            registry,
            overrides: TypeOverrideMap::new(),
            session: IntrospectionSession::new(),
        }
    }

    /// Replace the override map
    #[must_use]
    pub fn with_overrides(mut self, overrides: TypeOverrideMap) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve one type use into its traversal result
    ///
    /// Re-visits of an already-cached identity return a `Reference` without
    /// re-traversing the body. Collection, array, map and scalar results are
    /// inline and never cached.
    pub fn traverse(&mut self, type_ref: &TypeRef, bindings: &TypeBindings) -> Result<TypeSchema> {
        let resolved = bindings.resolve(type_ref);
        let type_id = resolved.canonical_id();
        self.session.counter.increment(type_id.clone());

        let registry = Arc::clone(&self.registry);
        let descriptor = registry.get(&resolved.name);
        let category = classify(&resolved, descriptor, self.scalar_mapping(&resolved).is_some());
        debug!(type_id = %type_id, category = %category, "dispatching type");

        match category {
            TypeCategory::PrimitiveArray => Ok(resolvers::array::resolve_primitive(&resolved)),
            TypeCategory::TypedArray => {
                resolvers::collection::resolve(self, &resolved, bindings, "ArrayOf")
            }
            TypeCategory::Collection => {
                resolvers::collection::resolve(self, &resolved, bindings, "CollectionOf")
            }
            TypeCategory::Map => resolvers::map::resolve(self, &resolved, bindings),
            TypeCategory::Enum => match descriptor {
                Some(descriptor) => resolvers::enumeration::resolve(self, &resolved, descriptor),
                None => Ok(resolvers::unknown_fallback(&resolved)),
            },
            TypeCategory::Generic => resolvers::generic::resolve(self, &resolved, descriptor, bindings),
            TypeCategory::Object => resolvers::object::resolve(self, &resolved, descriptor, bindings),
            TypeCategory::Unresolvable => Ok(resolvers::unknown_fallback(&resolved)),
        }
    }

    /// The category one type use would dispatch under, without traversing it
    pub fn category_of(&self, type_ref: &TypeRef) -> TypeCategory {
        classify(
            type_ref,
            self.registry.get(&type_ref.name),
            self.scalar_mapping(type_ref).is_some(),
        )
    }

    /// The scalar rendering of a type identity, override first then built-in
    pub(crate) fn scalar_mapping(&self, type_ref: &TypeRef) -> Option<PrimitiveSchema> {
        let type_id = type_ref.canonical_id();
        if let Some(type_override) = self.overrides.get(&type_id) {
            return Some(type_override.to_schema());
        }
        BUILTIN_PRIMITIVES
            .get(type_id.as_str())
            .map(|mapping| mapping.to_schema())
    }

    /// Whether a type identity serializes as a string (the map-key contract)
    pub(crate) fn maps_to_string(&self, type_ref: &TypeRef) -> bool {
        if type_ref.canonical_id().as_str() == STRING_TYPE {
            return true;
        }
        self.scalar_mapping(type_ref)
            .is_some_and(|schema| schema.api_type == ApiType::String)
    }

    /// Shared session state (cache and counter)
    pub fn session(&self) -> &IntrospectionSession {
        &self.session
    }

    /// Mutable session state, for resolvers
    pub(crate) fn session_mut(&mut self) -> &mut IntrospectionSession {
        &mut self.session
    }

    /// The descriptor registry handle
    pub fn registry(&self) -> &Arc<DescriptorRegistry> {
        &self.registry
    }

    /// Clear session state for unrelated reuse
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
