//! The synchronous C-level call surface this crate marshals against.
//!
//! [`CallInterface`] abstracts the handful of driver-manager entry points the
//! marshaling layer needs. Implementations forward to the platform ODBC
//! library; tests substitute a scripted double.

use odbc_api::sys::{HandleType, SqlReturn};
use std::ffi::c_void;

/// Handle owned by the driver manager. Never dereferenced here.
///
/// Wraps a raw pointer, so it is neither `Send` nor `Sync`: a handle must not
/// be used from several threads without external synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawHandle(pub *mut c_void);

impl RawHandle {
    pub fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Environment,
    Connection,
    Statement,
    Descriptor,
}

impl HandleKind {
    /// `SQL_HANDLE_*` code.
    pub fn code(self) -> i16 {
        match self {
            HandleKind::Environment => 1,
            HandleKind::Connection => 2,
            HandleKind::Statement => 3,
            HandleKind::Descriptor => 4,
        }
    }
}

impl From<HandleKind> for HandleType {
    fn from(kind: HandleKind) -> Self {
        match kind {
            HandleKind::Environment => HandleType::Env,
            HandleKind::Connection => HandleType::Dbc,
            HandleKind::Statement => HandleType::Stmt,
            HandleKind::Descriptor => HandleType::Desc,
        }
    }
}

/// Return code of a driver-manager call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    SuccessWithInfo,
    NoData,
    StillExecuting,
    NeedData,
    Error,
    InvalidHandle,
}

/// What the caller should do after a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    /// Extra information is pending; it may call for a retry.
    Recoverable,
    Fatal,
    NoData,
    WouldBlock,
}

impl Status {
    /// Unknown codes are treated as `Error`.
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => Status::Success,
            1 => Status::SuccessWithInfo,
            100 => Status::NoData,
            2 => Status::StillExecuting,
            99 => Status::NeedData,
            -2 => Status::InvalidHandle,
            _ => Status::Error,
        }
    }

    pub fn code(self) -> i16 {
        match self {
            Status::Success => 0,
            Status::SuccessWithInfo => 1,
            Status::NoData => 100,
            Status::StillExecuting => 2,
            Status::NeedData => 99,
            Status::Error => -1,
            Status::InvalidHandle => -2,
        }
    }

    pub fn outcome(self) -> Outcome {
        match self {
            Status::Success => Outcome::Success,
            Status::SuccessWithInfo => Outcome::Recoverable,
            Status::NoData => Outcome::NoData,
            Status::StillExecuting | Status::NeedData => Outcome::WouldBlock,
            Status::Error | Status::InvalidHandle => Outcome::Fatal,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::Success | Status::SuccessWithInfo)
    }
}

impl From<SqlReturn> for Status {
    fn from(ret: SqlReturn) -> Self {
        Status::from_code(ret.0)
    }
}

impl From<Status> for SqlReturn {
    fn from(status: Status) -> Self {
        SqlReturn(status.code())
    }
}

/// Driver-manager entry points used by the marshaling layer.
///
/// Buffers are caller-owned; the callee writes at most `value.len()` bytes and
/// reports the full length it wanted to write through the out-parameter.
pub trait CallInterface {
    /// `SQLGetDiagRec`. `state` receives five characters and a terminator.
    #[allow(clippy::too_many_arguments)]
    fn get_diag_rec(
        &self,
        kind: HandleKind,
        handle: RawHandle,
        record: i16,
        state: &mut [u8; 6],
        native_error: &mut i32,
        message: &mut [u8],
        text_length: &mut i16,
    ) -> SqlReturn;

    /// `SQLGetDiagField`
    fn get_diag_field(
        &self,
        kind: HandleKind,
        handle: RawHandle,
        record: i16,
        field: i16,
        value: &mut [u8],
        string_length: &mut i16,
    ) -> SqlReturn;

    /// `SQLGetEnvAttr`, `SQLGetConnectAttr` or `SQLGetStmtAttr` depending on `kind`.
    fn get_attr(
        &self,
        kind: HandleKind,
        handle: RawHandle,
        attribute: i32,
        value: &mut [u8],
        string_length: &mut i32,
    ) -> SqlReturn;

    /// `SQLSetEnvAttr`, `SQLSetConnectAttr` or `SQLSetStmtAttr` depending on `kind`.
    fn set_attr(
        &self,
        kind: HandleKind,
        handle: RawHandle,
        attribute: i32,
        value: &[u8],
        string_length: i32,
    ) -> SqlReturn;

    /// `SQLGetInfo` on a connection handle.
    fn get_info(
        &self,
        handle: RawHandle,
        info_type: u16,
        value: &mut [u8],
        string_length: &mut i16,
    ) -> SqlReturn;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_sql_return() {
        assert_eq!(Status::from(SqlReturn::SUCCESS), Status::Success);
        assert_eq!(
            Status::from(SqlReturn::SUCCESS_WITH_INFO),
            Status::SuccessWithInfo
        );
        assert_eq!(Status::from(SqlReturn::NO_DATA), Status::NoData);
        assert_eq!(Status::from(SqlReturn::ERROR), Status::Error);
        assert_eq!(Status::from(SqlReturn::INVALID_HANDLE), Status::InvalidHandle);
        assert_eq!(
            Status::from(SqlReturn::STILL_EXECUTING),
            Status::StillExecuting
        );
        assert_eq!(Status::from(SqlReturn::NEED_DATA), Status::NeedData);
    }

    #[test]
    fn test_unknown_code_is_error() {
        assert_eq!(Status::from_code(42), Status::Error);
        assert_eq!(Status::from_code(-99), Status::Error);
    }

    #[test]
    fn test_status_code_round_trip() {
        for status in [
            Status::Success,
            Status::SuccessWithInfo,
            Status::NoData,
            Status::StillExecuting,
            Status::NeedData,
            Status::Error,
            Status::InvalidHandle,
        ] {
            assert_eq!(Status::from(SqlReturn::from(status)), status);
        }
    }

    #[test]
    fn test_outcomes() {
        assert_eq!(Status::Success.outcome(), Outcome::Success);
        assert_eq!(Status::SuccessWithInfo.outcome(), Outcome::Recoverable);
        assert_eq!(Status::NoData.outcome(), Outcome::NoData);
        assert_eq!(Status::StillExecuting.outcome(), Outcome::WouldBlock);
        assert_eq!(Status::NeedData.outcome(), Outcome::WouldBlock);
        assert_eq!(Status::Error.outcome(), Outcome::Fatal);
        assert_eq!(Status::InvalidHandle.outcome(), Outcome::Fatal);
    }

    #[test]
    fn test_handle_kind_codes() {
        assert_eq!(HandleKind::Environment.code(), 1);
        assert_eq!(HandleKind::Descriptor.code(), 4);
        assert_eq!(
            HandleType::from(HandleKind::Statement) as i16,
            HandleKind::Statement.code()
        );
    }

    #[test]
    fn test_raw_handle_null() {
        assert!(RawHandle::null().is_null());
    }
}
