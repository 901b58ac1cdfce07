//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Store connectivity
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    // External service errors
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Graph store error: {0}")]
    Graph(#[from] neo4rs::Error),

    // Startup
    #[error("Seed file '{file}' failed: {message}")]
    Seed { file: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Unavailable(_) => "SERVICE_UNAVAILABLE",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Graph(_) => "GRAPH_ERROR",
            AppError::Seed { .. } => "SEED_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_)
            | AppError::Graph(_)
            | AppError::Seed { .. }
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Unavailable(msg) => {
                tracing::warn!("Store unavailable: {}", msg);
                "The data store is currently unavailable".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Graph(e) => {
                tracing::error!("Graph store error: {:?}", e);
                "A graph store error occurred".to_string()
            }
            AppError::Seed { .. } | AppError::Config(_) | AppError::Internal(_) => {
                tracing::error!("Internal error: {}", self);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    /// Classify a database error, treating lost or unobtainable connections
    /// as unavailability rather than query failures.
    pub fn from_db(err: DbErr) -> Self {
        match err {
            DbErr::ConnectionAcquire(e) => AppError::Unavailable(e.to_string()),
            DbErr::Conn(e) => AppError::Unavailable(e.to_string()),
            other => AppError::Database(other),
        }
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        AppError::Unavailable(msg.into())
    }

    pub fn seed(file: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Seed {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnAcquireErr, RuntimeErr};

    #[test]
    fn test_connection_errors_become_unavailable() {
        let acquire = AppError::from_db(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        assert!(matches!(acquire, AppError::Unavailable(_)));
        assert_eq!(acquire.status(), StatusCode::SERVICE_UNAVAILABLE);

        let conn = AppError::from_db(DbErr::Conn(RuntimeErr::Internal("refused".into())));
        assert!(matches!(conn, AppError::Unavailable(_)));
    }

    #[test]
    fn test_query_errors_stay_database_errors() {
        let err = AppError::from_db(DbErr::Custom("syntax error".into()));
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unavailable_response_status() {
        let response = AppError::unavailable("postgres down").into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_seed_error_names_file() {
        let err = AppError::seed("02_data.sql", "relation does not exist");
        assert_eq!(
            err.to_string(),
            "Seed file '02_data.sql' failed: relation does not exist"
        );
    }
}
