//! Shared error type across visits crates.

use thiserror::Error;

/// Stable error codes, used in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Store command or connection failed.
    StoreUnavailable,
    /// Store did not answer before the deadline.
    Timeout,
    /// Malformed configuration.
    BadConfig,
    /// Listener / socket failure.
    Io,
}

impl ClientCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::Timeout => "TIMEOUT",
            ClientCode::BadConfig => "BAD_CONFIG",
            ClientCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VisitsError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum VisitsError {
    #[error("store error: {0}")]
    Store(String),
    #[error("store deadline exceeded")]
    Timeout,
    #[error("invalid config: {0}")]
    Config(String),
    #[error("io: {0}")]
    Io(String),
}

impl VisitsError {
    pub fn client_code(&self) -> ClientCode {
        match self {
            VisitsError::Store(_) => ClientCode::StoreUnavailable,
            VisitsError::Timeout => ClientCode::Timeout,
            VisitsError::Config(_) => ClientCode::BadConfig,
            VisitsError::Io(_) => ClientCode::Io,
        }
    }
}

impl From<std::io::Error> for VisitsError {
    fn from(e: std::io::Error) -> Self {
        VisitsError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(VisitsError::Timeout.client_code().as_str(), "TIMEOUT");
        assert_eq!(
            VisitsError::Store("conn refused".into()).client_code().as_str(),
            "STORE_UNAVAILABLE"
        );
        assert_eq!(VisitsError::Config("x".into()).client_code(), ClientCode::BadConfig);
    }

    #[test]
    fn io_errors_convert() {
        let e: VisitsError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use").into();
        assert_eq!(e.client_code(), ClientCode::Io);
        assert!(e.to_string().contains("in use"));
    }
}
