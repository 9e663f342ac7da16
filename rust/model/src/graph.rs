// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The entity graph: a read-only batch of entities indexed by id and kind.
//!
//! One graph corresponds to one batch load. The per-kind index preserves
//! insertion order, so scans over a kind see entities in the order the
//! external loader encountered them.

use crate::attr::AttrValue;
use crate::entity::{Entity, EntityKind};
use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

/// Assembles an [`EntityGraph`]. Consumed by [`GraphBuilder::build`];
/// the resulting graph is immutable.
#[derive(Default)]
pub struct GraphBuilder {
    entities: FxHashMap<u32, Entity>,
    by_kind: FxHashMap<EntityKind, Vec<u32>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity. Re-adding an id replaces the earlier entity but keeps
    /// its position in the kind index.
    pub fn add(mut self, entity: Entity) -> Self {
        if !self.entities.contains_key(&entity.id) {
            self.by_kind.entry(entity.kind).or_default().push(entity.id);
        }
        self.entities.insert(entity.id, entity);
        self
    }

    pub fn build(self) -> EntityGraph {
        EntityGraph {
            entities: self.entities,
            by_kind: self.by_kind,
        }
    }
}

/// Read-only entity graph for one batch.
pub struct EntityGraph {
    entities: FxHashMap<u32, Entity>,
    by_kind: FxHashMap<EntityKind, Vec<u32>>,
}

impl EntityGraph {
    /// Look up an entity by id
    pub fn entity(&self, id: u32) -> Result<&Entity> {
        self.entities.get(&id).ok_or(Error::UnknownEntity(id))
    }

    /// Look up an entity by id, `None` if absent
    pub fn get(&self, id: u32) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Resolve an entity reference attribute.
    ///
    /// Returns `Ok(None)` when the attribute is not a reference (null,
    /// literal value); a dangling reference is an error.
    pub fn resolve_ref(&self, attr: &AttrValue) -> Result<Option<&Entity>> {
        match attr.as_entity_ref() {
            Some(id) => Ok(Some(self.entity(id)?)),
            None => Ok(None),
        }
    }

    /// Resolve every entity reference in a list attribute, skipping
    /// non-reference items. A dangling reference is an error.
    pub fn resolve_ref_list(&self, attr: &AttrValue) -> Result<Vec<&Entity>> {
        let list = attr.as_list().unwrap_or_default();
        let mut entities = Vec::with_capacity(list.len());
        for item in list {
            if let Some(id) = item.as_entity_ref() {
                entities.push(self.entity(id)?);
            }
        }
        Ok(entities)
    }

    /// Iterate entities of a kind in encounter order
    pub fn by_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> + '_ {
        self.by_kind
            .get(&kind)
            .map(|ids| ids.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |id| self.entities.get(id))
    }

    /// Number of entities of a kind
    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.by_kind.get(&kind).map(|ids| ids.len()).unwrap_or(0)
    }

    /// Total number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
