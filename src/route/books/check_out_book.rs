use axum::extract::State;

use crate::{extractor::query::ApiQuery, state::ApiState};

use super::{book_error, BookError, BookIdQuery, BookResponse};

/// Lends out one copy of a book.
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "books",
    params(("id" = String, Query, description = "Book id")),
    responses(
        (status = 200, description = "The book after checkout", body = crate::catalog::Book),
        (status = 400, description = "Missing id or no copies left", body = super::MessageResponse),
        (status = 404, description = "No book has this id", body = super::MessageResponse),
    )
)]
#[tracing::instrument(name = "check_out_book", skip_all)]
pub async fn check_out_book(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
) -> Result<BookResponse, BookError> {
    let id = query.require_id(&state)?;

    let book = state.catalog().check_out(&id).await.map_err(|err| {
        tracing::warn!(%err, "Checkout refused");

        book_error(&state, err)
    })?;

    tracing::info!(%id, quantity = book.quantity, "Book checked out");

    Ok(BookResponse(book))
}
