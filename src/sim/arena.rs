//! Owning entity container with stable identifiers
//!
//! Slots are never reused, so an `EntityId` stays valid (or becomes `None`)
//! for the whole session. Candidate lists are slices of ids resolved against
//! the arena at update time.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::render::Texture;

/// Stable handle to an entity in an [`Arena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Vector-backed entity storage
#[derive(Debug)]
pub struct Arena<T: Texture> {
    slots: Vec<Option<Entity<T>>>,
}

impl<T: Texture> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Texture> Arena<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Take ownership of an entity and return its id
    pub fn insert(&mut self, entity: Entity<T>) -> EntityId {
        let id = EntityId(self.slots.len() as u32);
        self.slots.push(Some(entity));
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity<T>> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity<T>> {
        self.slots.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    /// Release an entity; its texture is dropped with it unless the caller
    /// keeps the returned value
    pub fn remove(&mut self, id: EntityId) -> Option<Entity<T>> {
        self.slots.get_mut(id.0 as usize).and_then(Option::take)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live entities in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity<T>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|e| (EntityId(i as u32), e)))
    }

    /// Update one entity against the listed candidates
    ///
    /// Unknown ids and the entity itself are skipped. Returns false if `id`
    /// does not name a live entity.
    pub fn update(&mut self, id: EntityId, dt: f32, candidates: &[EntityId]) -> bool {
        let Some(mut entity) = self.remove(id) else {
            return false;
        };

        let others: Vec<&Entity<T>> = candidates
            .iter()
            .filter(|&&c| c != id)
            .filter_map(|&c| self.get(c))
            .collect();
        entity.update(dt, &others);

        self.slots[id.0 as usize] = Some(entity);
        true
    }

    /// Drop every entity
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
