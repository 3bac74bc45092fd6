//! Concrete type uses and their canonical identities
//!
//! A [`TypeRef`] is one *use* of a type at a declaration site: the named type,
//! the type arguments bound at that site, and whether the site admits null.
//! Its [`canonical_id`](TypeRef::canonical_id) renders the runtime-stable
//! identity string that distinguishes generic instantiations
//! (`catalog::Page<hr::Employee>` vs `catalog::Page<hr::Department>`), which
//! is what the schema cache is keyed by.

use serde::{Deserialize, Serialize};

use super::type_name::TypeName;

/// The canonical, runtime-stable identity of one type use
///
/// Rendered from a [`TypeRef`], including any type arguments, so that two
/// instantiations of the same generic base never collide as cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    /// Get the underlying string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TypeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TypeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One use of a type: the named base, bound type arguments, nullability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// The fully-qualified name of the referenced type
    pub name: TypeName,
    /// Type arguments bound at this use site (empty for non-generic uses)
    pub args: Vec<TypeRef>,
    /// Whether this use site admits null
    pub nullable: bool,
}

impl TypeRef {
    /// Create a non-nullable reference to a type with no arguments
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    /// Create a reference with the given type arguments
    pub fn with_args(name: impl Into<TypeName>, args: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            args,
            nullable: false,
        }
    }

    /// Mark this use site as nullable
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Render the canonical identity string for this use
    ///
    /// Nullability is a property of the use site, not of the type, so it is
    /// deliberately absent from the identity.
    pub fn canonical_id(&self) -> TypeId {
        if self.args.is_empty() {
            return TypeId::from(self.name.as_str());
        }
        let args = self
            .args
            .iter()
            .map(|arg| arg.canonical_id().as_str().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        TypeId::from(format!("{}<{args}>", self.name))
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_id())
    }
}
