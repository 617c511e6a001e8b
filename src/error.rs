use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read {name}: {source}")]
    StorageRead {
        name: &'static str,
        source: std::io::Error,
    },

    #[error("Failed to write {name}: {source}")]
    StorageWrite {
        name: &'static str,
        source: std::io::Error,
    },

    #[error("Ledger holds corrupt JSON: {source}")]
    CorruptLedger { source: serde_json::Error },

    #[error("{name} holds corrupt JSON: {source}")]
    CorruptStore {
        name: &'static str,
        source: serde_json::Error,
    },

    #[error("Menu item not found")]
    MenuItemNotFound,

    #[error("No orders found for this user")]
    NoOrdersForUser,

    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::StorageRead { .. }
            | AppError::StorageWrite { .. }
            | AppError::CorruptLedger { .. }
            | AppError::CorruptStore { .. } => {
                error!("{self}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
            AppError::MenuItemNotFound | AppError::NoOrdersForUser => {
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
