use chrono::Utc;
use uuid::Uuid;

use std::sync::Arc;

use crate::{
    models::Note,
    repository::{NoteRepository, RepositoryError},
};

#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    #[must_use]
    pub const fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    /// Creates a note with a fresh id and the current UTC time.
    ///
    /// Input is stored as given; callers are expected to have validated it.
    /// Repository errors are returned unchanged.
    pub async fn create_note(
        &self,
        title: String,
        content: String,
    ) -> Result<Note, RepositoryError> {
        let note = Note {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
        };

        tracing::debug!("storing new note {}", note.id);

        self.repo.add(note).await
    }
}
