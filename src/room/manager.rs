//! Registry of live room codes.
//!
//! Room codes come from [`crate::util::id`], which never checks for
//! collisions, and callers that do not need uniqueness can use it directly.
//! The manager is an opt-in layer on top: it keeps the set of codes in use and
//! redraws on collision, at most `max_attempts` times (default
//! [`DEFAULT_MAX_ATTEMPTS`]), then fails with [`RoomError::Exhausted`]. That
//! retry policy belongs to this registry, not to the generator.

use std::time::{Duration, SystemTime};

use dashmap::{mapref::entry::Entry, DashMap};
use serde::{Deserialize, Serialize};

use crate::util::id::{generate_room_id_with, RngSource, SymbolSource};

/// Redraws allowed per `create_room` call before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub created_at: SystemTime,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RoomError {
    #[error("room not found")]
    NotFound,
    #[error("no free room code after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

#[derive(Debug)]
pub struct RoomManager {
    rooms: DashMap<String, Room>,
    max_attempts: u32,
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomManager {
    pub fn new() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }

    /// `max_attempts` is raised to 1 if zero.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self { rooms: DashMap::new(), max_attempts: max_attempts.max(1) }
    }

    /// Register a fresh room under a code not currently in use.
    pub fn create_room(&self) -> Result<Room, RoomError> {
        self.create_room_with(&mut RngSource::thread())
    }

    pub fn create_room_with<S: SymbolSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<Room, RoomError> {
        for attempt in 1..=self.max_attempts {
            let id = generate_room_id_with(source);
            match self.rooms.entry(id) {
                Entry::Occupied(taken) => {
                    tracing::trace!(room_id = %taken.key(), attempt, "room code collision");
                }
                Entry::Vacant(slot) => {
                    let room = Room { id: slot.key().clone(), created_at: SystemTime::now() };
                    slot.insert(room.clone());
                    tracing::debug!(room_id = %room.id, attempt, "room created");
                    return Ok(room);
                }
            }
        }
        tracing::warn!(
            attempts = self.max_attempts,
            live = self.rooms.len(),
            "room codes exhausted"
        );
        Err(RoomError::Exhausted { attempts: self.max_attempts })
    }

    pub fn get(&self, id: &str) -> Option<Room> {
        self.rooms.get(id).map(|r| r.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Free a code so it can be handed out again.
    pub fn release(&self, id: &str) -> Result<(), RoomError> {
        self.rooms.remove(id).ok_or(RoomError::NotFound)?;
        tracing::debug!(room_id = %id, "room released");
        Ok(())
    }

    /// Drop rooms older than `max_age`, returning how many were removed.
    pub fn prune_old(&self, max_age: Duration) -> usize {
        let now = SystemTime::now();
        let mut removed = 0;
        self.rooms.retain(|_, r| {
            let keep = now.duration_since(r.created_at).unwrap_or_default() < max_age;
            if !keep {
                removed += 1;
            }
            keep
        });
        if removed > 0 {
            tracing::debug!(removed, "pruned old rooms");
        }
        removed
    }
}
