use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub const BASIC_AUTH_CHALLENGE: &str = r#"Basic realm="Designs""#;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: &'static str,
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid params - {0}")]
    InvalidParams(String),

    #[error("Payload too large - {0}")]
    PayloadTooLarge(String),

    #[error("Origin not allowed")]
    OriginNotAllowed,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Design not found")]
    DesignNotFound,

    #[error("Could not allocate a unique code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    #[error("Database error - {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Serialization error - {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error - {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error - {0}")]
    Config(String),

    #[error("TryInitError - {0}")]
    TryInitError(#[from] tracing_subscriber::util::TryInitError),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidParams(_) => "INVALID_PARAMS",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::OriginNotAllowed => "ORIGIN_NOT_ALLOWED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::DesignNotFound => "DESIGN_NOT_FOUND",
            Self::CodeSpaceExhausted { .. } => "CODE_SPACE_EXHAUSTED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::SerializationError(_)
            | Self::IoError(_)
            | Self::Config(_)
            | Self::TryInitError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParams(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::OriginNotAllowed => StatusCode::FORBIDDEN,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::DesignNotFound => StatusCode::NOT_FOUND,
            Self::CodeSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn user_safe_format(&self) -> ApiError {
        let message = match self {
            Self::InvalidParams(msg) | Self::PayloadTooLarge(msg) => msg.clone(),
            Self::OriginNotAllowed => "Origin not allowed".to_string(),
            Self::Unauthorized => "Authentication required".to_string(),
            Self::DesignNotFound => "Code not found".to_string(),
            Self::CodeSpaceExhausted { attempts } => {
                tracing::error!(attempts = attempts, "Code space exhausted");

                "Could not allocate a design code. Please try again.".to_string()
            }
            Self::DatabaseError(error) => {
                tracing::error!(error = %error, "Database error");

                "Service temporarily unavailable. Please try again later.".to_string()
            }
            Self::SerializationError(error) => {
                tracing::error!(error = %error, "Serialization error");

                "Internal server error".to_string()
            }
            Self::IoError(error) => {
                tracing::error!(error = %error, "IO error");

                "Internal server error".to_string()
            }
            Self::Config(error) => {
                tracing::error!(error = %error, "Configuration error");

                "Internal server error".to_string()
            }
            Self::TryInitError(error) => {
                tracing::error!(error = %error, "TryInitError");

                "Internal server error".to_string()
            }
        };

        ApiError {
            code: self.code(),
            error: message,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Browsers only show the credential prompt for a plain challenge response.
        if let Self::Unauthorized = self {
            return (
                status,
                [(header::WWW_AUTHENTICATE, BASIC_AUTH_CHALLENGE)],
                "Authentication required",
            )
                .into_response();
        }

        let json_error = self.user_safe_format();
        let body = serde_json::to_string(&json_error).unwrap_or_else(|_| {
            r#"{"code":"INTERNAL_ERROR","error":"Internal server error"}"#.to_string()
        });

        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}
