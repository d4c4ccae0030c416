//! Typed attribute and diagnostic marshaling over the ODBC C interface.
//!
//! Attribute, information-type and diagnostic-field identities live in
//! [`protocol`]; each identity decodes a [`RawValue`] into one case of its
//! value union and encodes that case back. The handle views in [`engine`]
//! drive the calls through a [`CallInterface`], regrow buffers when the
//! driver reports string truncation, and resolve SQLSTATEs into [`ErrorKind`].
//!
//! Everything here is synchronous. ODBC handles are not safe for concurrent
//! use, and [`RawHandle`] is neither `Send` nor `Sync`; share a handle across
//! threads only behind your own synchronization.

pub mod config;
pub mod engine;
mod error;
pub mod observability;
pub mod protocol;

pub use config::MarshalConfig;
pub use engine::{
    CallInterface, ConnectionHandle, DiagnosticReader, DiagnosticRecord, EnvironmentHandle,
    HandleKind, Outcome, RawHandle, StatementHandle, Status,
};
pub use error::{ErrorCategory, ErrorKind, OdbcError, Result};
pub use protocol::{
    ConnectAttribute, ConnectValue, DiagField, DiagValue, EncodedValue, EnvAttribute, EnvValue,
    InfoType, InfoValue, RawValue, StmtAttribute, StmtValue,
};
