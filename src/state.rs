use std::{ops::Deref, sync::Arc};

use crate::{
    catalog::Catalog,
    error::{ErrorVerbosity, ErrorVerbosityProvider},
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                catalog,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    catalog: Catalog,
}

impl ApiStateInner {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}
