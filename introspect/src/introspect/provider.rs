//! The traversal entry point and its aggregate report
//!
//! A [`SchemaProvider`] opens introspection sessions: it drives the
//! dispatcher on root types, refreshes conflict analysis over the completed
//! cache, and exposes the accumulated schema set, conflict report and
//! reference-count snapshot to downstream composers.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::bindings::TypeBindings;
use super::classifier::TypeCategory;
use super::conflict;
use super::introspector::TypeIntrospector;
use super::overrides::TypeOverrideMap;
use crate::descriptor::{DescriptorRegistry, TypeId, TypeRef};
use crate::error::Result;
use crate::schema::{NameConflict, TypeSchema};

/// Summary statistics for one batch introspection
#[derive(Debug, Clone, Serialize)]
pub struct IntrospectionSummary {
    /// Number of root types requested
    pub total_requested: usize,
    /// Number of root types that classified and resolved
    pub resolved: usize,
    /// Number of root types that fell back to the unknown-object schema
    pub failed: usize,
}

/// The serializable result of one batch introspection
#[derive(Debug, Clone, Serialize)]
pub struct IntrospectionReport {
    /// Canonical identities of the requested root types
    pub requested_types: Vec<String>,
    /// Every schema accumulated in the session cache, in resolution order
    pub schemas: Vec<TypeSchema>,
    /// Emitted-name collisions detected over the completed cache
    pub conflicts: Vec<NameConflict>,
    /// Reference counts per canonical identity, for orphan elimination
    pub reference_counts: BTreeMap<TypeId, usize>,
    /// Summary statistics
    pub summary: IntrospectionSummary,
}

/// The introspection entry point
///
/// Owns one dispatcher and therefore one session at a time; call
/// [`reset`](Self::reset) before reusing the provider for unrelated roots.
#[derive(Debug)]
pub struct SchemaProvider {
    introspector: TypeIntrospector,
    conflicts: Vec<NameConflict>,
}

impl SchemaProvider {
    /// Create a provider over a descriptor registry
    pub fn new(registry: Arc<DescriptorRegistry>) -> Self {
        Self {
            introspector: TypeIntrospector::new(registry),
            conflicts: Vec::new(),
        }
    }

    /// Attach user-registered scalar overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: TypeOverrideMap) -> Self {
        let registry = Arc::clone(self.introspector.registry());
        self.introspector = TypeIntrospector::new(registry).with_overrides(overrides);
        self
    }

    /// Traverse one root type and refresh conflict analysis
    pub fn introspect(&mut self, root: &TypeRef) -> Result<TypeSchema> {
        let schema = self.introspector.traverse(root, &TypeBindings::new())?;
        self.conflicts = conflict::analyze(&self.introspector.session().cache);
        Ok(schema)
    }

    /// Traverse every root and assemble the aggregate report
    ///
    /// Structural violations abort the whole batch; roots that merely fail to
    /// classify degrade to fallback schemas and are counted as failed.
    pub fn generate(&mut self, roots: &[TypeRef]) -> Result<IntrospectionReport> {
        let mut resolved = 0;
        let mut failed = 0;
        for root in roots {
            let category = self.introspector.category_of(root);
            self.introspector.traverse(root, &TypeBindings::new())?;
            if category == TypeCategory::Unresolvable {
                failed += 1;
            } else {
                resolved += 1;
            }
        }
        self.conflicts = conflict::analyze(&self.introspector.session().cache);

        Ok(IntrospectionReport {
            requested_types: roots
                .iter()
                .map(|root| root.canonical_id().to_string())
                .collect(),
            schemas: self.schemas().into_iter().cloned().collect(),
            conflicts: self.conflicts.clone(),
            reference_counts: self.reference_counts(),
            summary: IntrospectionSummary {
                total_requested: roots.len(),
                resolved,
                failed,
            },
        })
    }

    /// The accumulated schema set, in resolution order
    pub fn schemas(&self) -> Vec<&TypeSchema> {
        self.introspector.session().cache.schemas().collect()
    }

    /// Conflicts detected by the most recent traversal
    pub fn conflicts(&self) -> &[NameConflict] {
        &self.conflicts
    }

    /// Ordered snapshot of the session's reference counts
    pub fn reference_counts(&self) -> BTreeMap<TypeId, usize> {
        self.introspector.session().counter.snapshot()
    }

    /// Clear all session state before introspecting unrelated roots
    pub fn reset(&mut self) {
        self.introspector.reset();
        self.conflicts.clear();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::descriptor::{PropertyDescriptor, TypeDescriptor};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn registry() -> Arc<DescriptorRegistry> {
        let mut registry = DescriptorRegistry::with_builtins();
        registry.register(
            TypeDescriptor::new("warehouse_a::Box")
                .with_property(PropertyDescriptor::new("color", TypeRef::new("core::String"))),
        );
        registry.register(
            TypeDescriptor::new("warehouse_b::Box")
                .with_property(PropertyDescriptor::new("label", TypeRef::new("core::String"))),
        );
        registry.register(
            TypeDescriptor::new("hr::Employee")
                .with_property(PropertyDescriptor::new("name", TypeRef::new("core::String")))
                .with_property(PropertyDescriptor::new(
                    "manager",
                    TypeRef::new("hr::Employee").nullable(),
                )),
        );
        Arc::new(registry)
    }

    #[test]
    fn test_report_counts_and_conflicts() {
        init_tracing();
        let mut provider = SchemaProvider::new(registry());
        let report = provider
            .generate(&[
                TypeRef::new("warehouse_a::Box"),
                TypeRef::new("warehouse_b::Box"),
                TypeRef::new("mystery::Thing"),
            ])
            .unwrap();

        assert_eq!(report.summary.total_requested, 3);
        assert_eq!(report.summary.resolved, 2);
        assert_eq!(report.summary.failed, 1);
        // two distinct Box identities collide on the emitted name
        assert_eq!(report.conflicts.len(), 1);
        assert_eq!(report.conflicts[0].name.as_str(), "Box");
        assert_eq!(report.schemas.len(), 2);
    }

    #[test]
    fn test_reference_counts_cover_descendants() {
        let mut provider = SchemaProvider::new(registry());
        provider.introspect(&TypeRef::new("hr::Employee")).unwrap();
        let counts = provider.reference_counts();
        // one root traversal plus one self-referencing property visit
        assert_eq!(counts.get(&TypeId::from("hr::Employee")).copied(), Some(2));
        assert_eq!(counts.get(&TypeId::from("core::String")).copied(), Some(1));
    }

    #[test]
    fn test_reset_starts_a_fresh_session() {
        let mut provider = SchemaProvider::new(registry());
        provider.introspect(&TypeRef::new("hr::Employee")).unwrap();
        assert!(!provider.schemas().is_empty());
        provider.reset();
        assert!(provider.schemas().is_empty());
        assert!(provider.reference_counts().is_empty());
        assert!(provider.conflicts().is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let mut provider = SchemaProvider::new(registry());
        let report = provider.generate(&[TypeRef::new("warehouse_a::Box")]).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["summary"]["resolved"], 1);
        assert_eq!(
            value["schemas"][0]["schema"]["properties"]["color"]["type"],
            "string"
        );
    }
}
