use axum::extract::State;

use crate::{extractor::path::ApiPath, state::ApiState};

use super::{book_error, BookError, BookIdPath, MessageResponse};

/// Removes the first book with the given id.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book was deleted", body = MessageResponse),
        (status = 404, description = "No book has this id", body = MessageResponse),
    )
)]
#[tracing::instrument(name = "delete_book", skip_all, fields(id = %path.id))]
pub async fn delete_book(
    State(state): State<ApiState>,
    ApiPath(path): ApiPath<BookIdPath>,
) -> Result<MessageResponse, BookError> {
    state
        .catalog()
        .remove(&path.id)
        .await
        .map_err(|err| book_error(&state, err))?;

    tracing::info!("Book deleted");

    Ok(MessageResponse {
        message: String::from("book deleted"),
    })
}
