use std::sync::Arc;

use distserve_core::{CoreError, StaticResolver};

use crate::config::NotFoundStatus;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<StaticResolver>,
    pub not_found_status: NotFoundStatus,
}

impl AppState {
    pub fn new(resolver: StaticResolver, not_found_status: NotFoundStatus) -> Self {
        Self {
            resolver: Arc::new(resolver),
            not_found_status,
        }
    }

    /// Maps a resolver error onto the HTTP error for this server.
    pub fn app_error(&self, err: CoreError) -> AppError {
        match err {
            CoreError::NotFound(path) => {
                tracing::debug!("Not found: {}", path.display());
                AppError::NotFound(self.not_found_status.status_code())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}
