//! Per-member metadata consumed by the property resolver
//!
//! A [`PropertyDescriptor`] is the already-parsed view of one declared member:
//! its declared and serialized names, where it was declared (controls
//! enumeration order), the annotation-derived flags the required-ness fallback
//! chain consults, and an optional bag of validation constraints.

use serde::{Deserialize, Serialize};

use super::type_ref::TypeRef;

/// Where a member was declared on its owning type
///
/// Enumeration order during object resolution is primary-constructor members
/// first, then body-declared members, then inherited members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyOrigin {
    /// Declared as a primary-constructor parameter
    Constructor,
    /// Declared in the type body, with no constructor backing
    Body,
    /// Inherited from a supertype
    Inherited,
}

/// Optional validation constraints attached to a member
///
/// Applied onto inline `Primitive` and `Array` schemas; constraints attached
/// to a by-name reference are dropped (references are not locally mutable).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Minimum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum string length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Regex pattern the string value must match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Inclusive lower bound for numeric values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Exclusive lower bound for numeric values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    /// Exclusive upper bound for numeric values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    /// Numeric values must be a multiple of this factor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    /// Minimum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Maximum number of array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Whether array items must be unique
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// Content encoding of string values (e.g., "base64")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
    /// Media type of string content (e.g., "application/octet-stream")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_media_type: Option<String>,
}

impl ConstraintSet {
    /// Whether no constraint is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// One declared member of an object or generic type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// The declared member name
    pub name: String,
    /// The declared member type
    pub type_ref: TypeRef,
    /// Where the member was declared
    pub origin: PropertyOrigin,
    /// Serialized-name rename annotation, if present
    pub serialized_name: Option<String>,
    /// Explicit required annotation, if present
    pub required: Option<bool>,
    /// Whether the member is marked transient ("ignore" annotation)
    pub transient: bool,
    /// Serializer-optionality hint from the owning type's serialization
    /// descriptor, if it could be consulted
    pub serializer_optional: Option<bool>,
    /// Whether the backing constructor parameter has a default value;
    /// `None` when the member has no constructor backing
    pub has_default: Option<bool>,
    /// Member description, if annotated
    pub description: Option<String>,
    /// Validation constraints, if annotated
    pub constraints: ConstraintSet,
}

impl PropertyDescriptor {
    /// Create a constructor-declared member with no annotations
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            origin: PropertyOrigin::Constructor,
            serialized_name: None,
            required: None,
            transient: false,
            serializer_optional: None,
            has_default: None,
            description: None,
            constraints: ConstraintSet::default(),
        }
    }

    /// Set the declaration site
    #[must_use]
    pub fn with_origin(mut self, origin: PropertyOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Attach a serialized-name rename annotation
    #[must_use]
    pub fn with_serialized_name(mut self, name: impl Into<String>) -> Self {
        self.serialized_name = Some(name.into());
        self
    }

    /// Attach an explicit required annotation
    #[must_use]
    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Mark the member transient
    #[must_use]
    pub const fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Record the serializer-optionality hint
    #[must_use]
    pub const fn with_serializer_optional(mut self, optional: bool) -> Self {
        self.serializer_optional = Some(optional);
        self
    }

    /// Record whether the backing constructor parameter has a default
    #[must_use]
    pub const fn with_default(mut self, has_default: bool) -> Self {
        self.has_default = Some(has_default);
        self
    }

    /// Attach a member description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach validation constraints
    #[must_use]
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_set_emptiness() {
        assert!(ConstraintSet::default().is_empty());
        let constrained = ConstraintSet {
            min_length: Some(1),
            ..ConstraintSet::default()
        };
        assert!(!constrained.is_empty());
    }
}
