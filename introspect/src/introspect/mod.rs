//! The introspection engine: classification, dispatch, session state
//!
//! Control flow: [`SchemaProvider`] → [`TypeIntrospector::traverse`] on a root
//! type → the classifier picks a resolver → resolvers recursively ask the
//! dispatcher to traverse sub-types → the cache short-circuits repeat visits →
//! results bubble back as inline schemas or named references → the provider
//! runs conflict analysis over the final cache contents.

mod bindings;
mod classifier;
mod conflict;
mod introspector;
mod overrides;
mod primitives;
mod provider;
mod resolvers;
mod session;

pub use bindings::TypeBindings;
pub use classifier::{TypeCategory, classify};
pub use introspector::TypeIntrospector;
pub use overrides::{TypeOverride, TypeOverrideMap};
pub use provider::{IntrospectionReport, IntrospectionSummary, SchemaProvider};
pub use session::{IntrospectionSession, ReferenceCounter, SchemaCache};
