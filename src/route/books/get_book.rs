use axum::extract::State;

use crate::{extractor::path::ApiPath, state::ApiState};

use super::{book_error, BookError, BookIdPath, BookResponse};

/// Returns the first book with the given id.
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = crate::catalog::Book),
        (status = 404, description = "No book has this id", body = super::MessageResponse),
    )
)]
#[tracing::instrument(name = "get_book", skip_all, fields(id = %path.id))]
pub async fn get_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<BookIdPath>,
) -> Result<BookResponse, BookError> {
    state
        .catalog()
        .find(&path.id)
        .await
        .map(BookResponse)
        .map_err(|err| book_error(&state, err))
}
