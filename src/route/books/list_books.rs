use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{catalog::Book, state::ApiState};

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListBooksResponse {
    pub books: Vec<Book>,
}

impl IntoResponse for ListBooksResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Lists every book in insertion order.
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = [Book]),
    )
)]
#[tracing::instrument(name = "list_books", skip_all)]
pub async fn list_books(State(state): State<ApiState>) -> ListBooksResponse {
    let books = state.catalog().list().await;

    tracing::debug!(count = books.len(), "Listed books");

    ListBooksResponse { books }
}
