use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{catalog::Book, state::ApiState};

use super::books::{self, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        books::list_books::list_books,
        books::get_book::get_book,
        books::create_book::create_book,
        books::check_out_book::check_out_book,
        books::return_book::return_book,
        books::delete_book::delete_book,
    ),
    components(schemas(Book, MessageResponse)),
    tags((name = "books", description = "Book catalog"))
)]
pub struct ApiDoc;

pub fn app() -> Router<ApiState> {
    Router::<ApiState>::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
