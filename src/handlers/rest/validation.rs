use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use std::collections::BTreeMap;

use crate::{
    dto::{BadRequestResponse, CreateNoteRequest, ErrorResponse, ValidationErrorResponse},
    models::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS},
};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("One or more validation errors occurred")]
    MissingFields(BTreeMap<String, Vec<String>>),

    #[error("Title cannot be empty or whitespace")]
    BlankTitle,

    #[error("Content cannot be empty or whitespace")]
    BlankContent,

    #[error("Title cannot exceed {} characters", TITLE_MAX_CHARS)]
    TitleTooLong,

    #[error("Content cannot exceed {} characters", CONTENT_MAX_CHARS)]
    ContentTooLong,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        let body = match self {
            Self::MissingFields(errors) => {
                BadRequestResponse::Fields(ValidationErrorResponse { error, errors })
            }
            _ => BadRequestResponse::Message(ErrorResponse::new(error)),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Checks a create request and hands back its title and content untouched.
///
/// Checks run in a fixed order and stop at the first failure: presence of
/// both fields, blank title, blank content, title length, content length.
pub fn validate(request: CreateNoteRequest) -> Result<(String, String), ValidationError> {
    let (title, content) = match (request.title, request.content) {
        (Some(title), Some(content)) => (title, content),
        (title, content) => {
            let mut errors = BTreeMap::new();
            if title.is_none() {
                errors.insert("title".to_string(), vec!["Title is required".to_string()]);
            }
            if content.is_none() {
                errors.insert(
                    "content".to_string(),
                    vec!["Content is required".to_string()],
                );
            }
            return Err(ValidationError::MissingFields(errors));
        }
    };

    if title.trim().is_empty() {
        return Err(ValidationError::BlankTitle);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::BlankContent);
    }

    // Counted in chars, not bytes
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    if content.chars().count() > CONTENT_MAX_CHARS {
        return Err(ValidationError::ContentTooLong);
    }

    Ok((title, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: Option<&str>, content: Option<&str>) -> CreateNoteRequest {
        CreateNoteRequest {
            title: title.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    #[test]
    fn accepts_valid_request_unchanged() {
        let result = validate(request(Some(" Groceries "), Some("Milk, eggs, bread\n")));

        assert_eq!(
            result,
            Ok((" Groceries ".to_string(), "Milk, eggs, bread\n".to_string()))
        );
    }

    #[test]
    fn reports_each_missing_field() {
        let Err(ValidationError::MissingFields(errors)) = validate(request(None, None)) else {
            panic!("expected missing fields");
        };

        assert_eq!(errors["title"], vec!["Title is required"]);
        assert_eq!(errors["content"], vec!["Content is required"]);
    }

    #[test]
    fn reports_only_the_missing_field() {
        let Err(ValidationError::MissingFields(errors)) = validate(request(Some("t"), None))
        else {
            panic!("expected missing fields");
        };

        assert!(!errors.contains_key("title"));
        assert!(errors.contains_key("content"));
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            validate(request(Some(""), Some("x"))),
            Err(ValidationError::BlankTitle)
        );
        assert_eq!(
            validate(request(Some(" \t\n "), Some("x"))),
            Err(ValidationError::BlankTitle)
        );
        assert_eq!(
            validate(request(Some("x"), Some(""))),
            Err(ValidationError::BlankContent)
        );
        assert_eq!(
            validate(request(Some("x"), Some("\u{2003}\r\n"))),
            Err(ValidationError::BlankContent)
        );
    }

    #[test]
    fn enforces_length_limits_at_the_boundary() {
        let title_at_max = "x".repeat(TITLE_MAX_CHARS);
        let title_over = "x".repeat(TITLE_MAX_CHARS + 1);
        let content_at_max = "x".repeat(CONTENT_MAX_CHARS);
        let content_over = "x".repeat(CONTENT_MAX_CHARS + 1);

        assert!(validate(request(Some(&title_at_max), Some(&content_at_max))).is_ok());
        assert_eq!(
            validate(request(Some(&title_over), Some("x"))),
            Err(ValidationError::TitleTooLong)
        );
        assert_eq!(
            validate(request(Some("x"), Some(&content_over))),
            Err(ValidationError::ContentTooLong)
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(title.len() > TITLE_MAX_CHARS);

        assert!(validate(request(Some(&title), Some("x"))).is_ok());
    }

    #[test]
    fn checks_run_in_order() {
        let long_title = "x".repeat(TITLE_MAX_CHARS + 1);
        let long_content = "x".repeat(CONTENT_MAX_CHARS + 1);

        assert!(matches!(
            validate(request(None, Some(""))),
            Err(ValidationError::MissingFields(_))
        ));
        assert_eq!(
            validate(request(Some(""), Some(""))),
            Err(ValidationError::BlankTitle)
        );
        assert_eq!(
            validate(request(Some(&long_title), Some(" "))),
            Err(ValidationError::BlankContent)
        );
        assert_eq!(
            validate(request(Some(&long_title), Some(&long_content))),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn messages_name_the_field_and_limit() {
        assert_eq!(
            ValidationError::TitleTooLong.to_string(),
            "Title cannot exceed 100 characters"
        );
        assert_eq!(
            ValidationError::ContentTooLong.to_string(),
            "Content cannot exceed 5000 characters"
        );
    }
}
