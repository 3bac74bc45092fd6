//! User-registered custom scalar mappings
//!
//! Callers can declare that a canonical type identity should render as a
//! particular primitive schema instead of being introspected structurally.
//! Overrides are consulted before the built-in scalar table, so they also
//! shadow built-ins.

use std::collections::HashMap;

use crate::descriptor::{ConstraintSet, TypeId};
use crate::schema::{ApiFormat, ApiType, PrimitiveSchema};

/// A user-declared scalar rendering for one type identity
#[derive(Debug, Clone)]
pub struct TypeOverride {
    /// The JSON schema type to emit
    pub api_type: ApiType,
    /// Format refinement, if any
    pub format: Option<ApiFormat>,
    /// Constraints baked into every use of the type
    pub constraints: ConstraintSet,
}

impl TypeOverride {
    /// Declare a plain scalar override
    pub fn new(api_type: ApiType) -> Self {
        Self {
            api_type,
            format: None,
            constraints: ConstraintSet::default(),
        }
    }

    /// Attach a format refinement
    #[must_use]
    pub const fn with_format(mut self, format: ApiFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Attach baked-in constraints
    #[must_use]
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Render this override as a primitive schema
    pub fn to_schema(&self) -> PrimitiveSchema {
        let mut schema = PrimitiveSchema::new(self.api_type);
        schema.format = self.format;
        schema.absorb_constraints(&self.constraints);
        schema
    }
}

/// Lookup from canonical type identity to its scalar override
#[derive(Debug, Clone, Default)]
pub struct TypeOverrideMap {
    overrides: HashMap<TypeId, TypeOverride>,
}

impl TypeOverrideMap {
    /// Create an empty override map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an override, replacing any previous one for the identity
    pub fn register(&mut self, type_id: impl Into<TypeId>, type_override: TypeOverride) {
        self.overrides.insert(type_id.into(), type_override);
    }

    /// Look up the override for an identity
    pub fn get(&self, type_id: &TypeId) -> Option<&TypeOverride> {
        self.overrides.get(type_id)
    }

    /// Whether no override is registered
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::ElementSchema;

    #[test]
    fn test_override_renders_with_constraints() {
        let type_override = TypeOverride::new(ApiType::String)
            .with_format(ApiFormat::Uuid)
            .with_constraints(ConstraintSet {
                min_length: Some(36),
                ..ConstraintSet::default()
            });
        let schema = ElementSchema::Primitive(type_override.to_schema());
        assert_eq!(
            schema.to_value(),
            json!({"type": "string", "format": "uuid", "minLength": 36})
        );
    }
}
