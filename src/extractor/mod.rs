//! Extractors that reject with an [`crate::error::ApiError`] instead of axum's plain-text rejections.

pub mod json;
pub mod path;
pub mod query;

use schemars::{schema_for, JsonSchema};

use crate::error::{ErrorVerbosity, InternalServerError};

/// Renders the expected shape of `T` as YAML, for error bodies.
fn expected_schema<T: JsonSchema>(verbosity: ErrorVerbosity) -> Result<String, InternalServerError> {
    serde_yaml::to_string(&schema_for!(T))
        .map_err(|err| InternalServerError::from_generic_error(verbosity, err))
}
