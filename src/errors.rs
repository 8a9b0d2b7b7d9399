//! # Error Types Module
//!
//! This module defines the error types raised by the discount ledger and the
//! callback router. Neither is fatal to the process: ledger failures are
//! rendered to the user as a generic failure message, routing failures are
//! logged and dropped.

use thiserror::Error;

/// Errors raised while loading or persisting the discount ledger
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger file could not be read or written
    #[error("ledger storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The ledger content could not be encoded or decoded
    #[error("ledger serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The database backend rejected a query
    #[error("ledger database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors raised while resolving a routing key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No handler is registered for the routing key
    #[error("no handler registered for routing key `{0}`")]
    Unroutable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_formatting() {
        let unroutable = RouteError::Unroutable("fr_Ancien".to_string());
        assert_eq!(
            unroutable.to_string(),
            "no handler registered for routing key `fr_Ancien`"
        );

        let io = LedgerError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert_eq!(io.to_string(), "ledger storage I/O error: read-only");
    }
}
