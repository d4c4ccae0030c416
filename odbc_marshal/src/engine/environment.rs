use crate::config::MarshalConfig;
use crate::engine::call::{CallInterface, HandleKind, RawHandle};
use crate::engine::context::HandleContext;
use crate::engine::diagnostics::DiagnosticRecord;
use crate::error::{ErrorKind, Result};
use crate::protocol::attribute::{EnvAttribute, EnvValue};
use crate::protocol::diag_field::{DiagField, DiagValue};

/// Typed view over an environment handle allocated elsewhere.
pub struct EnvironmentHandle<'a, C: CallInterface + ?Sized> {
    ctx: HandleContext<'a, C>,
}

impl<'a, C: CallInterface + ?Sized> EnvironmentHandle<'a, C> {
    pub fn new(calls: &'a C, handle: RawHandle) -> Self {
        Self::with_config(calls, handle, MarshalConfig::default())
    }

    pub fn with_config(calls: &'a C, handle: RawHandle, config: MarshalConfig) -> Self {
        Self {
            ctx: HandleContext::new(calls, HandleKind::Environment, handle, config),
        }
    }

    pub fn handle(&self) -> RawHandle {
        self.ctx.handle
    }

    pub fn get_attribute(&self, attribute: EnvAttribute) -> Result<EnvValue> {
        let raw = self.ctx.get_attr(attribute.code(), attribute.is_text())?;
        attribute.decode(raw)
    }

    pub fn set_attribute(&self, value: &EnvValue) -> Result<()> {
        self.ctx.set_attr(value.identity().code(), &value.encode())
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
