use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use std::collections::BTreeMap;

/// Both fields are required; they are optional here only so that a missing
/// field is reported per field instead of as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title, at most 100 characters
    #[schema(required = true, example = "Groceries", max_length = 100)]
    pub title: Option<String>,
    /// Note content, at most 5000 characters
    #[schema(required = true, example = "Milk, eggs, bread", max_length = 5000)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Summary of the failure
    pub error: String,
    /// Messages keyed by the offending field name
    pub errors: BTreeMap<String, Vec<String>>,
}

/// Body of a 400 reply: a single message, or per-field messages when
/// required fields are missing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BadRequestResponse {
    Fields(ValidationErrorResponse),
    Message(ErrorResponse),
}
