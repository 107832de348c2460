use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required query parameter: search")]
    MissingQuery,

    #[error("Failed to read catalog file: {0}")]
    CatalogIo(#[from] std::io::Error),

    #[error("Malformed catalog file: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingQuery => StatusCode::BAD_REQUEST,
            AppError::CatalogIo { .. } | AppError::CatalogFormat { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
