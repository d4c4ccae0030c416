use crate::config::MarshalConfig;
use crate::engine::call::{CallInterface, HandleKind, RawHandle, Status};
use crate::engine::context::HandleContext;
use crate::engine::diagnostics::DiagnosticRecord;
use crate::engine::retry::{read_with_retry, TruncationSignal};
use crate::error::{ErrorKind, Result};
use crate::protocol::attribute::{ConnectAttribute, ConnectValue};
use crate::protocol::diag_field::{DiagField, DiagValue};
use crate::protocol::info::{InfoType, InfoValue};

/// Typed view over a connection handle.
///
/// Besides attributes, a connection answers the driver information queries.
pub struct ConnectionHandle<'a, C: CallInterface + ?Sized> {
    ctx: HandleContext<'a, C>,
}

impl<'a, C: CallInterface + ?Sized> ConnectionHandle<'a, C> {
    pub fn new(calls: &'a C, handle: RawHandle) -> Self {
        Self::with_config(calls, handle, MarshalConfig::default())
    }

    pub fn with_config(calls: &'a C, handle: RawHandle, config: MarshalConfig) -> Self {
        Self {
            ctx: HandleContext::new(calls, HandleKind::Connection, handle, config),
        }
    }

    pub fn handle(&self) -> RawHandle {
        self.ctx.handle
    }

    pub fn get_attribute(&self, attribute: ConnectAttribute) -> Result<ConnectValue> {
        let raw = self.ctx.get_attr(attribute.code(), attribute.is_text())?;
        attribute.decode(raw)
    }

    pub fn set_attribute(&self, value: &ConnectValue) -> Result<()> {
        self.ctx.set_attr(value.identity().code(), &value.encode())
    }

    pub fn get_info(&self, info: InfoType) -> Result<InfoValue> {
        let reader = self.ctx.reader();
        let what = format!("information type {}", info.code());
        let raw = read_with_retry(
            &reader,
            TruncationSignal::Diagnostics,
            &what,
            self.ctx.capacity_for(info.is_text()),
            |buffer| {
                let mut length = 0i16;
                let ret = self
                    .ctx
                    .calls
                    .get_info(self.ctx.handle, info.code(), buffer, &mut length);
                (Status::from(ret), i64::from(length))
            },
        )?;
        info.decode(raw)
    }

    pub fn diagnostics(&self) -> Result<Vec<DiagnosticRecord>> {
        self.ctx.diagnostics()
    }

    pub fn last_error_kind(&self) -> Result<ErrorKind> {
        self.ctx.last_error_kind()
    }

    pub fn diag_field(&self, record: i16, field: DiagField) -> Result<DiagValue> {
        self.ctx.diag_field(record, field)
    }
}
