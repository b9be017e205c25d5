//! Error types for panel classification and nesting.

use thiserror::Error;

/// Errors raised by opt-in input validation.
///
/// The mechanical [`classify`](crate::classify()) and [`nest`](crate::nest())
/// functions never fail; these errors only surface from the validating
/// entry points ([`Classifier`](crate::Classifier),
/// [`SheetNester::solve`](crate::SheetNester::solve)).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A panel or extent triple has a negative or non-finite length.
    #[error("invalid panel: {0}")]
    InvalidPanel(String),

    /// Sheet dimensions are non-finite or not positive.
    #[error("invalid sheet: {0}")]
    InvalidSheet(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPanel("width is NaN".to_string());
        assert_eq!(err.to_string(), "invalid panel: width is NaN");

        let err = Error::InvalidSheet("width must be positive".to_string());
        assert_eq!(err.to_string(), "invalid sheet: width must be positive");
    }
}
