//! Session-scoped traversal state: the schema cache and reference counter
//!
//! One [`IntrospectionSession`] lives for one root-type traversal plus all of
//! its recursive descendants. The cache is the sole owner of every produced
//! [`TypeSchema`]; resolvers only read and write through it. Neither structure
//! is safe for concurrent mutation; sessions are single-threaded and must be
//! explicitly reset before unrelated reuse.

use std::collections::BTreeMap;
use std::collections::HashMap;

use indexmap::IndexMap;

use crate::descriptor::TypeId;
use crate::schema::TypeSchema;

/// Insertion-ordered store of resolved and placeholder schemas, keyed by
/// canonical type identity
#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: IndexMap<TypeId, TypeSchema>,
}

impl SchemaCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an entry (placeholder or complete) exists for this identity
    pub fn is_cached(&self, type_id: &TypeId) -> bool {
        self.entries.contains_key(type_id)
    }

    /// Insert a schema under its own identity
    ///
    /// Inserting over an existing identity overwrites in place. This is how a
    /// placeholder `ObjectDescriptor` becomes its fully-populated form without
    /// invalidating references already handed out.
    pub fn add(&mut self, schema: TypeSchema) {
        self.entries.insert(schema.native_type_id.clone(), schema);
    }

    /// Look up the entry for an identity
    pub fn find(&self, type_id: &TypeId) -> Option<&TypeSchema> {
        self.entries.get(type_id)
    }

    /// All entries, in first-insertion order
    pub fn schemas(&self) -> impl Iterator<Item = &TypeSchema> {
        self.entries.values()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Per-session count of traversal attempts per canonical identity
///
/// Consumed by the downstream orphan-elimination composer: a cached schema
/// whose count drops to zero once transient references are discounted is no
/// longer reachable from the emitted document.
#[derive(Debug, Default)]
pub struct ReferenceCounter {
    counts: HashMap<TypeId, usize>,
}

impl ReferenceCounter {
    /// Create an empty counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one traversal attempt of an identity
    pub fn increment(&mut self, type_id: TypeId) {
        *self.counts.entry(type_id).or_insert(0) += 1;
    }

    /// Discount one reference to an identity, saturating at zero
    pub fn decrement(&mut self, type_id: &TypeId) {
        if let Some(count) = self.counts.get_mut(type_id) {
            *count = count.saturating_sub(1);
        }
    }

    /// The count recorded for an identity
    pub fn count(&self, type_id: &TypeId) -> usize {
        self.counts.get(type_id).copied().unwrap_or(0)
    }

    /// Ordered snapshot of all counts
    pub fn snapshot(&self) -> BTreeMap<TypeId, usize> {
        self.counts
            .iter()
            .map(|(id, count)| (id.clone(), *count))
            .collect()
    }

    /// Drop all counts
    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// The mutable state of one introspection session
#[derive(Debug, Default)]
pub struct IntrospectionSession {
    /// Resolved and placeholder schemas
    pub cache: SchemaCache,
    /// Traversal-attempt counts
    pub counter: ReferenceCounter,
}

impl IntrospectionSession {
    /// Create a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both cache and counter for unrelated reuse
    pub fn reset(&mut self) {
        self.cache.clear();
        self.counter.clear();
    }
}
