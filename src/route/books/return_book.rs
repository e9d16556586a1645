use axum::extract::State;

use crate::{extractor::query::ApiQuery, state::ApiState};

use super::{book_error, BookError, BookIdQuery, BookResponse};

/// Takes back one copy of a book.
#[utoipa::path(
    patch,
    path = "/return",
    tag = "books",
    params(("id" = String, Query, description = "Book id")),
    responses(
        (status = 200, description = "The book after the return", body = crate::catalog::Book),
        (status = 400, description = "Missing id", body = super::MessageResponse),
        (status = 404, description = "No book has this id", body = super::MessageResponse),
    )
)]
#[tracing::instrument(name = "return_book", skip_all)]
pub async fn return_book(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
) -> Result<BookResponse, BookError> {
    let id = query.require_id(&state)?;

    let book = state
        .catalog()
        .give_back(&id)
        .await
        .map_err(|err| book_error(&state, err))?;

    tracing::info!(%id, quantity = book.quantity, "Book returned");

    Ok(BookResponse(book))
}
