//! Framework-wide error types
//!
//! Provides a unified error type that converts to the framework's JSON error
//! envelope when it reaches the HTTP boundary.

use thiserror::Error;

/// Simple wrapper for creating one-off domain errors
///
/// Use this for inline/ad-hoc errors when you don't want to create a
/// dedicated error type.
///
/// # Example
///
/// ```rust,ignore
/// use brim::{AppError, Request, Response};
///
/// pub async fn show(req: Request) -> Response {
///     let id = req.param("id")?;
///     Err(AppError::not_found(format!("user {} not found", id)).into())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AppError {
    message: String,
    status_code: u16,
}

impl AppError {
    /// Create a new AppError with status 500 (Internal Server Error)
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 500,
        }
    }

    /// Set the HTTP status code
    pub fn status(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    /// Create a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message).status(404)
    }

    /// Create a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message).status(400)
    }

    /// Create a 422 Unprocessable Entity error
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(message).status(422)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl From<AppError> for FrameworkError {
    fn from(e: AppError) -> Self {
        FrameworkError::Domain {
            message: e.message,
            status_code: e.status_code,
        }
    }
}

/// Framework-wide error type
///
/// Implements `From<FrameworkError> for HttpResponse`, so handlers can
/// propagate errors with the `?` operator and have them rendered as the
/// framework's JSON error body.
#[derive(Debug, Error)]
pub enum FrameworkError {
    /// Parameter extraction failed (missing route parameter)
    #[error("Missing required parameter: {param_name}")]
    ParamError {
        /// The name of the parameter that failed extraction
        param_name: String,
    },

    /// Malformed request body (400 Bad Request)
    #[error("Invalid request body: {message}")]
    BadBody {
        /// The parse error message
        message: String,
    },

    /// Generic internal server error
    #[error("Internal server error: {message}")]
    Internal {
        /// The error message
        message: String,
    },

    /// Domain/application error with custom status code
    #[error("{message}")]
    Domain {
        /// The error message
        message: String,
        /// HTTP status code
        status_code: u16,
    },
}

impl FrameworkError {
    /// Create a ParamError for a missing parameter
    pub fn param(name: impl Into<String>) -> Self {
        Self::ParamError {
            param_name: name.into(),
        }
    }

    /// Create a BadBody error for an unparseable request body
    pub fn bad_body(message: impl Into<String>) -> Self {
        Self::BadBody {
            message: message.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a Domain error with custom status code
    pub fn domain(message: impl Into<String>, status_code: u16) -> Self {
        Self::Domain {
            message: message.into(),
            status_code,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ParamError { .. } => 400,
            Self::BadBody { .. } => 400,
            Self::Internal { .. } => 500,
            Self::Domain { status_code, .. } => *status_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_converts_with_status() {
        let err: FrameworkError = AppError::not_found("user 7 not found").into();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "user 7 not found");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(FrameworkError::param("id").status_code(), 400);
        assert_eq!(FrameworkError::bad_body("eof").status_code(), 400);
        assert_eq!(FrameworkError::internal("boom").status_code(), 500);
        assert_eq!(FrameworkError::domain("teapot", 418).status_code(), 418);
    }
}
