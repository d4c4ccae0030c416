//! Buffer-growth retry for values the driver may truncate.
//!
//! A call is first made with a best-guess buffer. When it returns
//! success-with-info and the cause is string truncation, the buffer is
//! regrown to the reported length plus the terminator and the call repeats.
//! Repeated truncation reports are followed up to
//! `MarshalConfig::max_truncation_retries` growths. Success-with-info for any
//! other reason fails the call with the posted diagnostic.

use crate::engine::call::{CallInterface, Status};
use crate::engine::diagnostics::DiagnosticReader;
use crate::error::{ErrorKind, OdbcError, Result};
use crate::protocol::raw::RawValue;

/// How a truncated result is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncationSignal {
    /// The first posted diagnostic resolves to `StringRightTruncated`.
    Diagnostics,
    /// The reported length does not fit the buffer. Used for diagnostic calls,
    /// which post no diagnostics of their own.
    ReportedLength,
}

/// Runs `call` until it produces an untruncated value.
///
/// `call` fills the buffer and returns the status together with the length
/// the driver reported.
pub fn read_with_retry<C, F>(
    reader: &DiagnosticReader<'_, C>,
    signal: TruncationSignal,
    what: &str,
    capacity: usize,
    mut call: F,
) -> Result<RawValue>
where
    C: CallInterface + ?Sized,
    F: FnMut(&mut [u8]) -> (Status, i64),
{
    let mut buffer = vec![0u8; capacity.max(1)];
    let mut growths = 0;

    loop {
        let (status, reported) = call(&mut buffer);
        let reported = usize::try_from(reported).unwrap_or(0);

        match status {
            Status::Success => return Ok(RawValue::new(buffer, reported)),
            Status::SuccessWithInfo => {
                let truncated = match signal {
                    TruncationSignal::Diagnostics => {
                        reader.last_error_kind()? == ErrorKind::StringRightTruncated
                    }
                    TruncationSignal::ReportedLength => reported >= buffer.len(),
                };

                if !truncated {
                    return match signal {
                        TruncationSignal::Diagnostics => Err(reader.error_for(status)),
                        TruncationSignal::ReportedLength => Ok(RawValue::new(buffer, reported)),
                    };
                }

                if growths >= reader.config().max_truncation_retries {
                    return Err(OdbcError::TruncationLimit { attempts: growths });
                }

                // Drivers that do not report a usable length get a doubled buffer.
                let grown = if reported >= buffer.len() {
                    reported + 1
                } else {
                    buffer.len() * 2
                };
                reader.logger().log_truncation(what, buffer.len(), grown);
                buffer = vec![0u8; grown];
                growths += 1;
            }
            other => return Err(failure(reader, signal, other)),
        }
    }
}

/// Error for a status that produced no value.
pub(crate) fn failure<C: CallInterface + ?Sized>(
    reader: &DiagnosticReader<'_, C>,
    signal: TruncationSignal,
    status: Status,
) -> OdbcError {
    match status {
        Status::NoData => OdbcError::NoData,
        Status::StillExecuting => OdbcError::StillExecuting,
        Status::NeedData => OdbcError::NeedData,
        Status::InvalidHandle => OdbcError::InvalidHandle(reader.kind()),
        _ => match signal {
            TruncationSignal::Diagnostics => reader.error_for(status),
            TruncationSignal::ReportedLength => OdbcError::CallFailed(status),
        },
    }
}
