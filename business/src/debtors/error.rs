use thiserror::Error;

use crate::http::HttpError;

/// Failure of a debtors backend call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DebtorsError {
    /// HTTP 403.
    #[error("permission denied")]
    Unauthorized,
    #[error("debtor not found")]
    NotFound,
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("no API base URL configured")]
    MissingBaseUrl,
}

impl DebtorsError {
    /// Maps a non-2xx status.
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => Self::Unauthorized,
            404 => Self::NotFound,
            other => Self::Status(other),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<HttpError> for DebtorsError {
    fn from(err: HttpError) -> Self {
        Self::Transport(err.message)
    }
}

impl From<serde_json::Error> for DebtorsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type DebtorsResult<T> = Result<T, DebtorsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(DebtorsError::from_status(403), DebtorsError::Unauthorized);
        assert_eq!(DebtorsError::from_status(404), DebtorsError::NotFound);
        assert_eq!(DebtorsError::from_status(500), DebtorsError::Status(500));
        assert!(DebtorsError::from_status(403).is_unauthorized());
        assert!(!DebtorsError::from_status(401).is_unauthorized());
    }

    #[test]
    fn test_transport_error_keeps_message() {
        let err: DebtorsError = HttpError::new("connection refused").into();
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
