use async_trait::async_trait;
use tokio_postgres::{Client, NoTls, Row};

use crate::{
    models::Note,
    repository::{NoteRepository, RepositoryError, embedded::migrations},
};

pub struct PostgresRepository {
    client: Client,
}

impl PostgresRepository {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl NoteRepository for PostgresRepository {
    async fn add(&self, note: Note) -> Result<Note, RepositoryError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO notes (id, title, content, created_at) VALUES ($1, $2, $3, $4) \
                 RETURNING id, title, content, created_at",
                &[&note.id, &note.title, &note.content, &note.created_at],
            )
            .await?;

        Ok(note_from_row(&row))
    }
}
