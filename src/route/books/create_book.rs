use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{catalog::Book, extractor::json::ApiJson, state::ApiState};

#[derive(Debug)]
pub struct CreateBookResponse {
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.book)).into_response()
    }
}

/// Appends a book to the catalog.
///
/// Ids are taken as given. A book whose id already exists is still appended and
/// stays hidden behind the earlier one for lookups.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = crate::catalog::Book,
    responses(
        (status = 201, description = "The created book", body = crate::catalog::Book),
        (status = 400, description = "The body is not a book", body = super::MessageResponse),
    )
)]
#[tracing::instrument(name = "create_book", skip_all, fields(id = %book.id))]
pub async fn create_book(
    State(state): State<ApiState>,
    ApiJson(book): ApiJson<Book>,
) -> CreateBookResponse {
    let book = state.catalog().insert(book).await;

    tracing::info!("Book created");

    CreateBookResponse { book }
}
