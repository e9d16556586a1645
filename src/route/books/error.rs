use axum::http::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::{catalog::CatalogError, error::ResourceErrorProvider};

#[derive(Debug, Serialize)]
#[serde(tag = "error_type")]
pub enum BookErrorType {
    NotFound {
        #[serde(skip)]
        id: String,
    },
    MissingQueryParameter {
        #[serde(skip)]
        name: &'static str,
    },
    NotAvailable {
        #[serde(skip)]
        id: String,
    },
}

impl From<CatalogError> for BookErrorType {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { id } => BookErrorType::NotFound { id },
            CatalogError::NotAvailable { id } => BookErrorType::NotAvailable { id },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookErrorContext {
    pub reason: String,
}

impl ResourceErrorProvider for BookErrorType {
    type Context = BookErrorContext;

    fn headers(&self) -> Option<HeaderMap> {
        None
    }

    fn status_code(&self) -> StatusCode {
        match self {
            BookErrorType::NotFound { .. } => StatusCode::NOT_FOUND,
            BookErrorType::MissingQueryParameter { .. } => StatusCode::BAD_REQUEST,
            BookErrorType::NotAvailable { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            BookErrorType::NotFound { .. } => "book not found",
            BookErrorType::MissingQueryParameter { .. } => "missing query parameter id",
            BookErrorType::NotAvailable { .. } => "book not available",
        }
    }

    fn context(&self) -> Self::Context {
        let reason = match self {
            BookErrorType::NotFound { id } => format!("Book with id {id} not found"),
            BookErrorType::MissingQueryParameter { name } => {
                format!("Query parameter `{name}` is required")
            }
            BookErrorType::NotAvailable { id } => {
                format!("Book with id {id} has no copies left")
            }
        };

        BookErrorContext { reason }
    }
}
