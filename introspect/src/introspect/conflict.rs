//! Post-pass detection of emitted-name collisions
//!
//! Two distinct type identities that would serialize under the same schema
//! name make the emitted components map ambiguous. The engine surfaces these
//! as [`NameConflict`] entries and deliberately does not rename or deduplicate
//! anything; resolution is a caller decision.

use itertools::Itertools;

use super::session::SchemaCache;
use crate::schema::NameConflict;

/// Group cached schemas by emitted name; every name claimed by more than one
/// distinct type identity yields a conflict
pub(crate) fn analyze(cache: &SchemaCache) -> Vec<NameConflict> {
    cache
        .schemas()
        .map(|schema| (schema.name.clone(), schema.native_type_id.clone()))
        .into_group_map()
        .into_iter()
        .filter(|(_, contenders)| contenders.len() > 1)
        .map(|(name, contenders)| NameConflict { name, contenders })
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect()
}
