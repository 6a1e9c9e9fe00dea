use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Maximum note title length, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum note content length, in characters.
pub const CONTENT_MAX_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note ID, assigned by the server
    pub id: Uuid,
    /// Note title
    #[schema(example = "Groceries", max_length = 100)]
    pub title: String,
    /// Note content
    #[schema(example = "Milk, eggs, bread", max_length = 5000)]
    pub content: String,
    /// Creation time (UTC)
    pub created_at: DateTime<Utc>,
}
