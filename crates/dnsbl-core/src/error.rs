use thiserror::Error;

/// Result type alias for checker operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors that can occur before any work is dispatched.
///
/// Problems with individual lookups are never errors: they are classified
/// into [`crate::Outcome`] variants and tallied, so one bad list cannot
/// abort a run.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The target is not a valid IPv4 address
    #[error("invalid IPv4 address: {0}")]
    InvalidIp(String),

    /// The target is not a valid DNS name
    #[error("invalid domain name: {0}")]
    InvalidDomain(String),

    /// Configuration value out of bounds
    #[error("configuration error: {0}")]
    Config(String),

    /// The list table could not be parsed
    #[error("list table error: {0}")]
    ListTable(String),
}
