pub mod sql_state;

use crate::engine::call::{HandleKind, Status};
use odbc_api::handles::Record as OdbcRecord;
use thiserror::Error;

pub use sql_state::ErrorKind;

/// Error category for decision-making (retry, abort, reconnect, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transient error - retry may resolve
    Transient,
    /// Fatal error - should abort operation
    Fatal,
    /// Validation error - malformed input to a decoder or encoder
    Validation,
    /// Connection lost - should reconnect
    ConnectionLost,
}

#[derive(Error, Debug, Clone)]
pub enum OdbcError {
    #[error("ODBC error: {0}")]
    OdbcApi(String),

    #[error("Invalid {0:?} handle")]
    InvalidHandle(HandleKind),

    #[error("{kind:?} [{}]: {message}", String::from_utf8_lossy(sqlstate))]
    Structured {
        kind: ErrorKind,
        sqlstate: [u8; 5],
        native_code: i32,
        message: String,
    },

    #[error("No data")]
    NoData,

    #[error("Operation still executing")]
    StillExecuting,

    #[error("Operation needs data")]
    NeedData,

    #[error("Call failed with {0:?} and no diagnostic record")]
    CallFailed(Status),

    #[error("Value still truncated after {attempts} buffer growths")]
    TruncationLimit { attempts: usize },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<odbc_api::Error> for OdbcError {
    fn from(err: odbc_api::Error) -> Self {
        if let Some(structured) = try_extract_structured(&err) {
            return structured;
        }
        OdbcError::OdbcApi(err.to_string())
    }
}

fn try_extract_structured(err: &odbc_api::Error) -> Option<OdbcError> {
    use odbc_api::Error as OdbcErr;
    let record = match err {
        OdbcErr::Diagnostics { record, .. } => record,
        OdbcErr::UnsupportedOdbcApiVersion(record) => record,
        OdbcErr::InvalidRowArraySize { record, .. } => record,
        OdbcErr::UnableToRepresentNull(record) => record,
        OdbcErr::OracleOdbcDriverDoesNotSupport64Bit(record) => record,
        _ => return None,
    };
    Some(structured_from_odbc_record(record))
}

fn structured_from_odbc_record(record: &OdbcRecord) -> OdbcError {
    OdbcError::structured(record.state.0, record.native_error, record.to_string())
}

impl OdbcError {
    /// Builds a `Structured` error, resolving the state code to its kind.
    pub fn structured(sqlstate: [u8; 5], native_code: i32, message: impl Into<String>) -> Self {
        OdbcError::Structured {
            kind: ErrorKind::from_state_bytes(&sqlstate),
            sqlstate,
            native_code,
            message: message.into(),
        }
    }

    pub fn sqlstate(&self) -> [u8; 5] {
        match self {
            OdbcError::Structured { sqlstate, .. } => *sqlstate,
            _ => [0u8; 5],
        }
    }

    pub fn native_code(&self) -> i32 {
        match self {
            OdbcError::Structured { native_code, .. } => *native_code,
            _ => 0,
        }
    }

    pub fn message(&self) -> String {
        match self {
            OdbcError::Structured { message, .. } => message.clone(),
            _ => self.to_string(),
        }
    }

    /// Resolved kind. Only structured errors carry one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            OdbcError::Structured { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns true if the error is transient and may be retried
    pub fn is_retryable(&self) -> bool {
        match self {
            OdbcError::Structured { kind, .. } => kind.is_transient(),
            OdbcError::StillExecuting => true,
            _ => false,
        }
    }

    /// Returns true if this is a connection-related error
    pub fn is_connection_error(&self) -> bool {
        match self {
            OdbcError::Structured { kind, .. } => kind.is_connection_error(),
            _ => false,
        }
    }

    /// Returns the error category for decision-making
    pub fn error_category(&self) -> ErrorCategory {
        if matches!(
            self,
            OdbcError::ValidationError(_) | OdbcError::ConfigError(_)
        ) {
            return ErrorCategory::Validation;
        }
        if matches!(self, OdbcError::InvalidHandle(_)) {
            return ErrorCategory::Fatal;
        }
        if self.is_connection_error() {
            return ErrorCategory::ConnectionLost;
        }
        if self.is_retryable() {
            return ErrorCategory::Transient;
        }
        ErrorCategory::Fatal
    }
}

pub type Result<T> = std::result::Result<T, OdbcError>;
