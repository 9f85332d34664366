//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management, from key vault and database
//! failures to validation problems, and keeps the two data-layer error kinds
//! (`ConnectionError`, `QueryError`) distinct all the way up to the handler.
//!
//! `AppError` implements `actix_web::error::ResponseError` so handler results
//! convert into HTTP responses with a JSON `{"message": ...}` body.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// An unauthorized access attempt (HTTP 401), e.g. a request without a
    /// live session.
    Unauthorized(String),
    /// A client-side error due to a malformed or invalid request (HTTP 400).
    BadRequest(String),
    /// A requested resource was not found (HTTP 404).
    NotFound(String),
    /// An unexpected server-side error (HTTP 500).
    InternalServerError(String),
    /// The database could not be reached, or no pooled connection could be
    /// acquired (HTTP 500).
    ConnectionError(String),
    /// A statement failed to execute against the database (HTTP 500).
    QueryError(String),
    /// Key vault credential setup or secret retrieval failed (HTTP 500).
    /// Replaces the silent null the legacy secret fetch produced.
    SecretError(String),
    /// Request payload validation failed (HTTP 400).
    ValidationError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::ConnectionError(msg) => write!(f, "Connection Error: {}", msg),
            AppError::QueryError(msg) => write!(f, "Query Error: {}", msg),
            AppError::SecretError(msg) => write!(f, "Secret Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

/// Converts `AppError` variants into `HttpResponse` objects.
///
/// Clients only ever see 401, 400, 404, or 500 with a `{"message": ...}`
/// body; the variant distinctions exist for logging and tests.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "message": msg
            })),
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "message": msg
            })),
            AppError::ValidationError(msg) => HttpResponse::BadRequest().json(json!({
                "message": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "message": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "message": msg
            })),
            // Infrastructure failures are all presented as internal errors.
            AppError::ConnectionError(msg) => HttpResponse::InternalServerError().json(json!({
                "message": msg
            })),
            AppError::QueryError(msg) => HttpResponse::InternalServerError().json(json!({
                "message": msg
            })),
            AppError::SecretError(msg) => HttpResponse::InternalServerError().json(json!({
                "message": msg
            })),
        }
    }
}

/// Converts `validator::ValidationErrors` into `AppError::ValidationError`.
impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// Converts `bcrypt::BcryptError` into `AppError::InternalServerError`.
///
/// This handles errors during password hashing or verification.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}
