use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    catalog::Book,
    error::{ErrorVerbosityProvider, ResourceError},
    state::ApiState,
};

pub mod app;
pub mod check_out_book;
pub mod create_book;
pub mod delete_book;
pub mod error;
pub mod get_book;
pub mod list_books;
pub mod return_book;

use self::error::BookErrorType;

pub type BookError = ResourceError<BookErrorType>;

fn book_error(state: &ApiState, error_type: impl Into<BookErrorType>) -> BookError {
    ResourceError::new(state.error_verbosity(), error_type.into())
}

#[derive(Debug, Deserialize)]
pub struct BookIdPath {
    pub id: String,
}

/// Raw query pairs, so that a missing `id` is reported as a book error rather
/// than as a generic query rejection. A repeated `id` resolves to its first value.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BookIdQuery {
    pub pairs: Vec<(String, String)>,
}

impl BookIdQuery {
    fn require_id(self, state: &ApiState) -> Result<String, BookError> {
        self.pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value))
            .ok_or_else(|| {
                tracing::warn!("Missing query parameter id");

                book_error(state, BookErrorType::MissingQueryParameter { name: "id" })
            })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// A single book, answered with [`StatusCode::OK`].
#[derive(Debug)]
pub struct BookResponse(pub Book);

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}
