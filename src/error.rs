//! Error type shared by the HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::analytics::AnalyticsError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Analytics(AnalyticsError::NotEnoughData { .. }) => (
                StatusCode::BAD_REQUEST,
                "Not enough period data to calculate stats".into(),
            ),
            AppError::Analytics(AnalyticsError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error".into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(e) = &self {
            log_db_error(e);
        }
        let (status, msg) = self.status_and_message();
        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

fn log_db_error(e: &sqlx::Error) {
    if let Some(db_err) = e.as_database_error() {
        tracing::error!("❌ DB query failed: {}", db_err.message());

        if let Some(code) = db_err.code() {
            tracing::info!("ℹ️ SQLSTATE code: {}", code);
        }

        if let Some(constraint) = db_err.constraint() {
            tracing::info!("🔒 Constraint violated: {}", constraint);
        }
    } else {
        tracing::error!("❌ DB error: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_enough_data_is_a_bad_request() {
        let err = AppError::from(AnalyticsError::NotEnoughData { required: 2, found: 1 });
        let (status, msg) = err.status_and_message();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Not enough period data to calculate stats");
    }

    #[test]
    fn validation_keeps_its_message() {
        let err = AppError::from(AnalyticsError::Validation("bad dates".into()));
        assert_eq!(err.status_and_message(), (StatusCode::BAD_REQUEST, "bad dates".to_string()));
    }

    #[test]
    fn not_found_names_the_record() {
        let err = AppError::NotFound("Period");
        assert_eq!(
            err.status_and_message(),
            (StatusCode::NOT_FOUND, "Period not found".to_string())
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_errors_hide_details() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        let (status, msg) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "Server error");
    }
}
