//! Diagnostic record retrieval.
//!
//! Records are numbered from 1 on the wire and returned 0-indexed. A record
//! whose message did not fit is re-read with a larger buffer under the same
//! record number. A record that cannot be read ends the walk; records already
//! read are still returned.

use crate::config::MarshalConfig;
use crate::engine::call::{CallInterface, HandleKind, RawHandle, Status};
use crate::engine::retry::{read_with_retry, TruncationSignal};
use crate::error::{ErrorKind, OdbcError, Result};
use crate::observability::StructuredLogger;
use crate::protocol::diag_field::{DiagField, DiagValue};
use crate::protocol::raw::RawValue;
use std::fmt;

const FIXED_FIELD_CAPACITY: usize = std::mem::size_of::<u64>();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub state: [u8; 5],
    pub native_error: i32,
    pub message: String,
}

impl DiagnosticRecord {
    pub fn sqlstate(&self) -> &str {
        std::str::from_utf8(&self.state).unwrap_or("?????")
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_state_bytes(&self.state)
    }

    pub fn into_error(self) -> OdbcError {
        OdbcError::structured(self.state, self.native_error, self.message)
    }
}

impl fmt::Display for DiagnosticRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "State: {}, Native error: {}, Message: {}",
            self.sqlstate(),
            self.native_error,
            self.message
        )
    }
}

/// Reads the diagnostics posted on one handle.
pub struct DiagnosticReader<'a, C: CallInterface + ?Sized> {
    calls: &'a C,
    kind: HandleKind,
    handle: RawHandle,
    config: &'a MarshalConfig,
    logger: StructuredLogger,
}

impl<'a, C: CallInterface + ?Sized> DiagnosticReader<'a, C> {
    pub fn new(calls: &'a C, kind: HandleKind, handle: RawHandle, config: &'a MarshalConfig) -> Self {
        Self {
            calls,
            kind,
            handle,
            config,
            logger: StructuredLogger::new(config.log_diagnostics),
        }
    }

    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    pub(crate) fn config(&self) -> &MarshalConfig {
        self.config
    }

    pub(crate) fn logger(&self) -> StructuredLogger {
        self.logger
    }

    /// Number of records, read from the `SQL_DIAG_NUMBER` header field.
    pub fn count(&self) -> Result<usize> {
        match self.field(0, DiagField::Number) {
            Ok(DiagValue::Number(n)) => Ok(n.max(0) as usize),
            Ok(other) => Err(OdbcError::ValidationError(format!(
                "unexpected diagnostic count value {other:?}"
            ))),
            Err(OdbcError::NoData) => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// One header (`record == 0`) or record field.
    pub fn field(&self, record: i16, field: DiagField) -> Result<DiagValue> {
        let capacity = if field.is_text() {
            self.config.message_capacity
        } else {
            FIXED_FIELD_CAPACITY
        };
        let raw = read_with_retry(
            self,
            TruncationSignal::ReportedLength,
            "diagnostic field",
            capacity,
            |buffer| {
                let mut length = 0i16;
                let ret = self.calls.get_diag_field(
                    self.kind,
                    self.handle,
                    record,
                    field.code(),
                    buffer,
                    &mut length,
                );
                (Status::from(ret), i64::from(length))
            },
        )?;
        field.decode(raw)
    }

    /// All records posted on the handle.
    pub fn fetch(&self) -> Result<Vec<DiagnosticRecord>> {
        let count = self.count()?;
        let mut records = Vec::with_capacity(count);
        let mut capacity = self.config.message_capacity;

        for number in 1..=count {
            let Ok(wire_number) = i16::try_from(number) else {
                break;
            };
            match self.fetch_record(wire_number, &mut capacity)? {
                Some(record) => records.push(record),
                None => break,
            }
        }

        Ok(records)
    }

    /// First record only, without consulting the record count.
    pub fn first(&self) -> Result<Option<DiagnosticRecord>> {
        let mut capacity = self.config.message_capacity;
        self.fetch_record(1, &mut capacity)
    }

    /// Kind of the first record, or [`ErrorKind::NoError`] when none is posted.
    pub fn last_error_kind(&self) -> Result<ErrorKind> {
        Ok(self
            .first()?
            .map_or(ErrorKind::NoError, |record| record.kind()))
    }

    /// Error describing a failed call on this handle.
    pub fn error_for(&self, status: Status) -> OdbcError {
        match self.first() {
            Ok(Some(record)) => record.into_error(),
            Ok(None) => OdbcError::CallFailed(status),
            Err(e) => e,
        }
    }

    fn fetch_record(&self, number: i16, capacity: &mut usize) -> Result<Option<DiagnosticRecord>> {
        let mut growths = 0;
        loop {
            let mut state = [0u8; 6];
            let mut native_error = 0i32;
            let mut text_length = 0i16;
            let mut message = vec![0u8; *capacity];

            let status = Status::from(self.calls.get_diag_rec(
                self.kind,
                self.handle,
                number,
                &mut state,
                &mut native_error,
                &mut message,
                &mut text_length,
            ));
            let reported = text_length.max(0) as usize;

            match status {
                Status::Success | Status::SuccessWithInfo => {
                    let truncated = status == Status::SuccessWithInfo && reported >= *capacity;
                    if truncated && growths < self.config.max_truncation_retries {
                        let grown = reported + 1;
                        self.logger.log_truncation("diagnostic message", *capacity, grown);
                        *capacity = grown;
                        growths += 1;
                        continue;
                    }

                    let length = reported.min(capacity.saturating_sub(1));
                    let mut code = [0u8; 5];
                    code.copy_from_slice(&state[..5]);
                    let record = DiagnosticRecord {
                        state: code,
                        native_error,
                        message: RawValue::new(message, length).into_text(),
                    };
                    self.logger
                        .log_diagnostic(self.kind, number as usize, &record);
                    return Ok(Some(record));
                }
                Status::InvalidHandle => return Err(OdbcError::InvalidHandle(self.kind)),
                _ => return Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = DiagnosticRecord {
            state: *b"08S01",
            native_error: 10054,
            message: "Communication link failure".to_string(),
        };
        assert_eq!(record.sqlstate(), "08S01");
        assert_eq!(record.kind(), ErrorKind::CommunicationLinkFailure);
        assert_eq!(
            record.to_string(),
            "State: 08S01, Native error: 10054, Message: Communication link failure"
        );
    }

    #[test]
    fn test_record_into_error() {
        let record = DiagnosticRecord {
            state: *b"23000",
            native_error: 2627,
            message: "Violation of PRIMARY KEY constraint".to_string(),
        };
        let err = record.into_error();
        assert_eq!(err.kind(), Some(ErrorKind::IntegrityConstraintViolation));
        assert_eq!(err.native_code(), 2627);
    }

    #[test]
    fn test_non_ascii_state_is_placeholder() {
        let record = DiagnosticRecord {
            state: [0xFF, 0, 0, 0, 0],
            native_error: 0,
            message: String::new(),
        };
        assert_eq!(record.sqlstate(), "?????");
        assert_eq!(record.kind(), ErrorKind::GeneralError);
    }
}
