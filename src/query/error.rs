//! Query error types
//!
//! Only caller-supplied date bounds can fail a query. Problems inside stored
//! records (bad dates, bad counts) are absorbed and never surface here.

use thiserror::Error;

/// Errors that can occur while preparing a date-range query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// One or both bounds were not supplied
    #[error("Start date and end date are required")]
    MissingBound,

    /// A bound could not be parsed as a calendar date
    ///
    /// The message stays fixed; the offending bound and value are carried
    /// for logging.
    #[error("Invalid date format")]
    MalformedBound { bound: &'static str, value: String },
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            QueryError::MissingBound.to_string(),
            "Start date and end date are required"
        );

        let err = QueryError::MalformedBound {
            bound: "startDate",
            value: "yesterday".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid date format");
        assert!(format!("{:?}", err).contains("yesterday"));
    }
}
