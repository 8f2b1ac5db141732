//! Response classification shared by every comparison failure
//!
//! The transport layer owns the actual HTTP response; this module only fixes
//! the `{message, status_code}` pair each failure is converted into.

use serde::Serialize;
use std::fmt;

/// Response category a failure is reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// The payload did not have the expected shape
    BadRequest,
    /// The payload was well-formed but semantically invalid for the data
    UnprocessableEntity,
}

impl StatusClass {
    /// HTTP status code for this class
    pub fn code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::UnprocessableEntity => 422,
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "400 Bad Request"),
            Self::UnprocessableEntity => write!(f, "422 Unprocessable Entity"),
        }
    }
}

/// User-facing error payload handed to the response adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Rendered message, surfaced unchanged to the end user
    pub message: String,
    /// HTTP status code
    pub status_code: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: StatusClass) -> Self {
        Self {
            message: message.into(),
            status_code: status.code(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Failures that know how to present themselves to an API client
///
/// Implementors provide the classification; the message comes from their
/// `Display` implementation, so `render` never needs outside state.
pub trait Renderable: fmt::Display {
    /// Classification used by the response layer
    fn status(&self) -> StatusClass;

    /// Build the `{message, status_code}` payload
    fn render(&self) -> ApiError {
        ApiError::new(self.to_string(), self.status())
    }
}
