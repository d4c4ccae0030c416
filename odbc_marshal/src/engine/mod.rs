pub mod call;
mod context;
pub mod connection;
pub mod diagnostics;
pub mod environment;
pub mod retry;
pub mod statement;

pub use call::{CallInterface, HandleKind, Outcome, RawHandle, Status};
pub use connection::ConnectionHandle;
pub use diagnostics::{DiagnosticReader, DiagnosticRecord};
pub use environment::EnvironmentHandle;
pub use retry::{read_with_retry, TruncationSignal};
pub use statement::StatementHandle;
