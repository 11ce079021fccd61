//! Error types for the portfolio crates

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Content file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file was not valid JSON
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Content was structurally valid but unusable (e.g. no sections)
    #[error("Invalid content: {0}")]
    Content(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::Content("no sections".to_string());
        assert_eq!(format!("{}", err), "Invalid content: no sections");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }
}
