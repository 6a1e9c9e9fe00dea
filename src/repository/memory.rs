use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use std::collections::{HashMap, hash_map::Entry};

use crate::{
    models::Note,
    repository::{NoteRepository, RepositoryError},
};

/// Process-scoped note store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryRepository {
    notes: Mutex<HashMap<Uuid, Note>>,
}

impl MemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn get(&self, id: Uuid) -> Option<Note> {
        self.notes.lock().await.get(&id).cloned()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.notes.lock().await.len()
    }
}

#[async_trait]
impl NoteRepository for MemoryRepository {
    async fn add(&self, note: Note) -> Result<Note, RepositoryError> {
        match self.notes.lock().await.entry(note.id) {
            Entry::Occupied(_) => Err(RepositoryError::DuplicateId(note.id)),
            Entry::Vacant(slot) => Ok(slot.insert(note).clone()),
        }
    }
}
