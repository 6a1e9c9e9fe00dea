mod validation;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use axum_macros::debug_handler;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use crate::{
    dto::{BadRequestResponse, CreateNoteRequest, ErrorResponse, ValidationErrorResponse},
    models::Note,
    service::NoteService,
};

use validation::ValidationError;

const CREATE_FAILED_MESSAGE: &str = "An error occurred while creating the note";

/// Largest request body accepted on `/api/notes`, in bytes.
pub const MAX_BODY_BYTES: usize = 30_000_000;

#[derive(OpenApi)]
#[openapi(
    paths(create_note),
    components(schemas(
        Note,
        CreateNoteRequest,
        ErrorResponse,
        ValidationErrorResponse,
        BadRequestResponse
    )),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route(
            "/api/notes",
            post(create_note).layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = Note,
            headers(("Location" = String, description = "Path of the created note"))),
        (status = 400, description = "Invalid note", body = BadRequestResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        // Bodies past the size limit are reported against the content field
        Err(JsonRejection::BytesRejection(rejection))
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
        {
            tracing::debug!("rejected note body: {}", rejection.body_text());
            return ValidationError::ContentTooLong.into_response();
        }
        Err(rejection) => {
            tracing::debug!("rejected note body: {}", rejection.body_text());
            let status = if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                rejection.status()
            } else {
                StatusCode::BAD_REQUEST
            };
            return (status, Json(ErrorResponse::new(rejection.body_text()))).into_response();
        }
    };

    let (title, content) = match validation::validate(payload) {
        Ok(fields) => fields,
        Err(e) => {
            tracing::debug!("rejected note: {}", e);
            return e.into_response();
        }
    };

    match service.create_note(title, content).await {
        Ok(note) => {
            tracing::info!("created note {}", note.id);
            let location = format!("/api/notes/{}", note.id);
            (StatusCode::CREATED, [(header::LOCATION, location)], Json(note)).into_response()
        }
        Err(e) => {
            tracing::error!("failed to create note entry: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(CREATE_FAILED_MESSAGE)),
            )
                .into_response()
        }
    }
}
