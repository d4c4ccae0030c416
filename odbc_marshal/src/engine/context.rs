//! State shared by the typed handle views.

use crate::config::MarshalConfig;
use crate::engine::call::{CallInterface, HandleKind, RawHandle, Status};
use crate::engine::diagnostics::{DiagnosticReader, DiagnosticRecord};
use crate::engine::retry::{failure, read_with_retry, TruncationSignal};
use crate::error::{ErrorKind, Result};
use crate::protocol::diag_field::{DiagField, DiagValue};
use crate::protocol::raw::{EncodedValue, RawValue};

const FIXED_VALUE_CAPACITY: usize = std::mem::size_of::<u64>();

pub(crate) struct HandleContext<'a, C: CallInterface + ?Sized> {
    pub(crate) calls: &'a C,
    pub(crate) kind: HandleKind,
    pub(crate) handle: RawHandle,
    pub(crate) config: MarshalConfig,
}

impl<'a, C: CallInterface + ?Sized> HandleContext<'a, C> {
    pub(crate) fn new(calls: &'a C, kind: HandleKind, handle: RawHandle, config: MarshalConfig) -> Self {
        Self {
            calls,
            kind,
            handle,
            config,
        }
    }

    pub(crate) fn reader(&self) -> DiagnosticReader<'_, C> {
        DiagnosticReader::new(self.calls, self.kind, self.handle, &self.config)
    }

    /// First buffer offered for a value.
    pub(crate) fn capacity_for(&self, text: bool) -> usize {
        if text {
            self.config.string_capacity
        } else {
            FIXED_VALUE_CAPACITY
        }
    }

    pub(crate) fn get_attr(&self, attribute: i32, text: bool) -> Result<RawValue> {
        let reader = self.reader();
        let what = format!("{:?} attribute {}", self.kind, attribute);
        read_with_retry(
            &reader,
            TruncationSignal::Diagnostics,
            &what,
            self.capacity_for(text),
            |buffer| {
                let mut length = 0i32;
                let ret = self
                    .calls
                    .get_attr(self.kind, self.handle, attribute, buffer, &mut length);
                (Status::from(ret), i64::from(length))
            },
        )
    }

    /// Success-with-info is logged and treated as success.
    pub(crate) fn set_attr(&self, attribute: i32, value: &EncodedValue) -> Result<()> {
        let ret = self.calls.set_attr(
            self.kind,
            self.handle,
            attribute,
            &value.bytes,
            value.string_length,
        );

        match Status::from(ret) {
            Status::Success => Ok(()),
            Status::SuccessWithInfo => {
                let reader = self.reader();
                let records = reader.fetch()?;
                reader
                    .logger()
                    .log_set_warning(self.kind, attribute, records.len());
                Ok(())
            }
            status => Err(failure(&self.reader(), TruncationSignal::Diagnostics, status)),
        }
    }

    pub(crate) fn diagnostics(&self) -> Result<Vec<DiagnosticRecord>> {
        self.reader().fetch()
    }

    pub(crate) fn last_error_kind(&self) -> Result<ErrorKind> {
        self.reader().last_error_kind()
    }

    pub(crate) fn diag_field(&self, record: i16, field: DiagField) -> Result<DiagValue> {
        self.reader().field(record, field)
    }
}
