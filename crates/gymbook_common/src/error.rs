// --- File: crates/gymbook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Gymbook errors.
///
/// Handlers in every feature crate return this type; crates with their own
/// error enums implement `From<TheirError> for GymbookError`.
#[derive(Error, Debug)]
pub enum GymbookError {
    /// The request is malformed or violates a booking rule
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The caller may not touch the resource
    #[error("Forbidden: {0}")]
    ForbiddenError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to a conflict (e.g., slot already taken)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// The feature is switched off in the runtime configuration
    #[error("Service unavailable: {0}")]
    UnavailableError(String),

    /// Reading or writing a data document failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl GymbookError {
    /// The bare message, without the category prefix used by `Display`.
    ///
    /// This is what clients see in the `error` field of a response body.
    pub fn message(&self) -> &str {
        match self {
            GymbookError::ValidationError(m)
            | GymbookError::ForbiddenError(m)
            | GymbookError::NotFoundError(m)
            | GymbookError::ConflictError(m)
            | GymbookError::UnavailableError(m)
            | GymbookError::StorageError(m)
            | GymbookError::ConfigError(m)
            | GymbookError::InternalError(m) => m,
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for GymbookError {
    fn status_code(&self) -> u16 {
        match self {
            GymbookError::ValidationError(_) => 400,
            GymbookError::ForbiddenError(_) => 403,
            GymbookError::NotFoundError(_) => 404,
            GymbookError::ConflictError(_) => 409,
            GymbookError::UnavailableError(_) => 503,
            GymbookError::StorageError(_) => 500,
            GymbookError::ConfigError(_) => 500,
            GymbookError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, GymbookError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, GymbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, GymbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| GymbookError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, GymbookError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| GymbookError::InternalError(format!("{}: {}", f(), error)))
    }
}

impl From<serde_json::Error> for GymbookError {
    fn from(err: serde_json::Error) -> Self {
        GymbookError::StorageError(err.to_string())
    }
}

impl From<std::io::Error> for GymbookError {
    fn from(err: std::io::Error) -> Self {
        GymbookError::StorageError(err.to_string())
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> GymbookError {
    GymbookError::ValidationError(message.to_string())
}

pub fn forbidden<T: fmt::Display>(message: T) -> GymbookError {
    GymbookError::ForbiddenError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> GymbookError {
    GymbookError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> GymbookError {
    GymbookError::ConflictError(message.to_string())
}

pub fn unavailable<T: fmt::Display>(message: T) -> GymbookError {
    GymbookError::UnavailableError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> GymbookError {
    GymbookError::InternalError(message.to_string())
}
