mod embedded;
mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PostgresRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Note with id {0} already exists")]
    DuplicateId(Uuid),

    #[error("Database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}

/// Storage for notes. A single write operation: the note is stored as given
/// and the stored representation is handed back. Failures are not retried.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn add(&self, note: Note) -> Result<Note, RepositoryError>;
}
