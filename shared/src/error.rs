use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ForbiddenOperation(String),
    #[error("{0}")]
    PaymentRequiredError(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("unauthenticated")]
    UnauthenticatedError,
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("key value store error")]
    KeyValueStoreError(#[from] redis::RedisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ForbiddenOperation(_) => StatusCode::FORBIDDEN,
            AppError::PaymentRequiredError(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            e @ (AppError::ConversionEntityError(_)
            | AppError::SpecificOperationError(_)
            | AppError::TransactionError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_maps_to_status_code() {
        assert_eq!(
            AppError::EntityNotFound("booking not found".into())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::ForbiddenOperation("room is full".into())
                .into_response()
                .status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::PaymentRequiredError("ticket is not paid".into())
                .into_response()
                .status(),
            StatusCode::PAYMENT_REQUIRED
        );
        assert_eq!(
            AppError::UnauthenticatedError.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NoRowsAffectedError("no booking updated".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
