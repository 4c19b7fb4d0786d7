// ==========================================
// Warehouse Daily KPI - API Layer Error Types
// ==========================================
// One coarse user-facing channel: every batch failure surfaces
// as a single localized message with the underlying detail.
// Internally the taxonomy stays distinguishable: a missing stage
// is a precondition (Ok(None), never an error), a missing column
// degrades to zero inside the importer, and only malformed input
// reaches this type.
// ==========================================

use crate::i18n;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl ApiError {
    /// The one generic user-visible message, in the active locale,
    /// with the underlying failure text appended.
    pub fn user_message(&self) -> String {
        i18n::t_with_args("error.batch_failed", &[("detail", &self.to_string())])
    }
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
