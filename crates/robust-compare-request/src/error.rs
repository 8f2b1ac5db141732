//! Error types for robust-compare-request

use robust_compare_core::{Renderable, StatusClass};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The payload does not have the comparison request shape
    #[error("Malformed comparison request: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Renderable for Error {
    fn status(&self) -> StatusClass {
        match self {
            Self::Malformed(_) => StatusClass::BadRequest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_renders_as_bad_request() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(source);

        let api = err.render();
        assert_eq!(api.status_code, 400);
        assert!(api.message.starts_with("Malformed comparison request: "));
    }
}
