//! Type-introspection engine producing an OpenAPI-compatible schema IR
//!
//! This crate converts a source type system's structural types (objects,
//! collections, maps, enums, generics, arrays) into a normalized schema
//! intermediate representation suitable for emission as OpenAPI-compatible
//! JSON Schema documents. The engine performs recursive, memoized traversal
//! over a type graph that may contain self-reference, shared references and
//! parametric polymorphism, and produces an acyclic, reference-based output
//! graph.
//!
//! # Usage
//!
//! Declare your types in a [`DescriptorRegistry`], then open an introspection
//! session through a [`SchemaProvider`]:
//!
//! ```
//! use std::sync::Arc;
//!
//! use typescribe::descriptor::{DescriptorRegistry, PropertyDescriptor, TypeDescriptor, TypeRef};
//! use typescribe::SchemaProvider;
//!
//! # fn main() -> typescribe::Result<()> {
//! let mut registry = DescriptorRegistry::with_builtins();
//! registry.register(
//!     TypeDescriptor::new("catalog::Box")
//!         .with_property(PropertyDescriptor::new("color", TypeRef::new("core::String")))
//!         .with_property(PropertyDescriptor::new("weight", TypeRef::new("core::Int"))),
//! );
//!
//! let mut provider = SchemaProvider::new(Arc::new(registry));
//! let root = provider.introspect(&TypeRef::new("catalog::Box"))?;
//! assert_eq!(
//!     root.schema.reference_location().as_deref(),
//!     Some("#/components/schemas/Box"),
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`descriptor`] - the engine's read-only input: type declarations,
//!   member metadata, type uses and canonical identities.
//! - [`schema`] - the output IR: the [`ElementSchema`] sum type, per-type
//!   [`TypeSchema`] results, name-conflict reports.
//! - [`introspect`] - the engine itself: classifier, per-category resolvers,
//!   generic bindings, session cache, reference counter, conflict analysis
//!   and the [`SchemaProvider`] entry point.
//!
//! Traversal is single-threaded and synchronous. One session must run to
//! completion before another begins; reset the provider between unrelated
//! roots.

pub mod descriptor;
pub mod error;
pub mod introspect;
pub mod schema;

pub use descriptor::{
    ConstraintSet, ContainerKind, DescriptorRegistry, PropertyDescriptor, PropertyOrigin,
    TypeDescriptor, TypeId, TypeName, TypeRef,
};
pub use error::{Error, Result};
pub use introspect::{
    IntrospectionReport, IntrospectionSummary, SchemaProvider, TypeBindings, TypeCategory,
    TypeIntrospector, TypeOverride, TypeOverrideMap, classify,
};
pub use schema::{
    ApiFormat, ApiType, ElementSchema, NameConflict, ObjectDescriptor, PrimitiveSchema,
    SCHEMA_REF_PREFIX, SchemaName, SchemaProperty, TypeSchema,
};
