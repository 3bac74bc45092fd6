//! A newtype wrapper for canonical type names used throughout the engine
//!
//! This module provides the `TypeName` type which represents fully-qualified
//! source type names (e.g., "catalog::Page") with utility methods for working
//! with these names. Declarations are keyed by `TypeName`; a concrete *use* of
//! a type (which may carry type arguments) is a
//! [`TypeRef`](super::type_ref::TypeRef).

use serde::{Deserialize, Serialize};

/// A newtype wrapper for fully-qualified type names used as map keys
///
/// Provides documentation and type safety for strings that represent
/// `::`-separated source type paths (e.g., "`catalog::Page`") when used as
/// keys in the descriptor registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Create a `TypeName` representing an unknown type
    ///
    /// Used as a fallback when a type cannot be classified.
    pub fn unknown() -> Self {
        Self("unknown".to_string())
    }

    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the short name (last segment after ::)
    /// For example: `catalog::Page` returns `Page`
    pub fn short_name(&self) -> String {
        self.0.rsplit("::").next().unwrap_or(&self.0).to_string()
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for TypeName {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

impl From<TypeName> for String {
    fn from(type_name: TypeName) -> Self {
        type_name.0
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
