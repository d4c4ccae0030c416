//! Scripted stand-in for the driver manager.
//!
//! Attribute and information calls pop queued replies in order. Diagnostics
//! are served from a posted list, with optional per-record status overrides.

#![allow(dead_code)]

use odbc_api::sys::SqlReturn;
use odbc_marshal::{CallInterface, HandleKind, RawHandle};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: SqlReturn,
    pub bytes: Vec<u8>,
    pub reported: i64,
    pub text: bool,
}

impl Reply {
    /// Text value; the driver writes what fits and reports the full length.
    pub fn text(status: SqlReturn, value: &str) -> Self {
        Self {
            status,
            bytes: value.as_bytes().to_vec(),
            reported: value.len() as i64,
            text: true,
        }
    }

    pub fn fixed(bytes: Vec<u8>) -> Self {
        let reported = bytes.len() as i64;
        Self {
            status: SqlReturn::SUCCESS,
            bytes,
            reported,
            text: false,
        }
    }

    pub fn status(status: SqlReturn) -> Self {
        Self {
            status,
            bytes: Vec::new(),
            reported: 0,
            text: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostedRecord {
    pub state: [u8; 5],
    pub native_error: i32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetCall {
    pub kind: HandleKind,
    pub attribute: i32,
    pub bytes: Vec<u8>,
    pub string_length: i32,
}

#[derive(Default)]
pub struct ScriptedDriver {
    replies: RefCell<VecDeque<Reply>>,
    posted: RefCell<Vec<PostedRecord>>,
    record_status: RefCell<HashMap<i16, SqlReturn>>,
    set_status: RefCell<Option<SqlReturn>>,
    /// Buffer size offered by each attribute or information call.
    pub offered: RefCell<Vec<usize>>,
    /// `(record, buffer size)` of each diagnostic record request.
    pub record_requests: RefCell<Vec<(i16, usize)>>,
    pub set_calls: RefCell<Vec<SetCall>>,
    pub attribute_requests: RefCell<Vec<(HandleKind, i32)>>,
    pub info_requests: RefCell<Vec<u16>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, reply: Reply) -> &Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    pub fn post(&self, state: &str, native_error: i32, message: &str) -> &Self {
        let mut code = [0u8; 5];
        code.copy_from_slice(&state.as_bytes()[..5]);
        self.posted.borrow_mut().push(PostedRecord {
            state: code,
            native_error,
            message: message.to_string(),
        });
        self
    }

    pub fn clear_diagnostics(&self) {
        self.posted.borrow_mut().clear();
    }

    /// Forces the status returned for one diagnostic record number.
    pub fn fail_record(&self, record: i16, status: SqlReturn) -> &Self {
        self.record_status.borrow_mut().insert(record, status);
        self
    }

    pub fn set_returns(&self, status: SqlReturn) -> &Self {
        *self.set_status.borrow_mut() = Some(status);
        self
    }

    pub fn remaining_replies(&self) -> usize {
        self.replies.borrow().len()
    }

    fn next_reply(&self, value: &mut [u8]) -> (SqlReturn, i64) {
        self.offered.borrow_mut().push(value.len());
        let Some(reply) = self.replies.borrow_mut().pop_front() else {
            return (SqlReturn::ERROR, 0);
        };

        let room = if reply.text {
            value.len().saturating_sub(1)
        } else {
            value.len()
        };
        let n = reply.bytes.len().min(room);
        value[..n].copy_from_slice(&reply.bytes[..n]);
        if reply.text && n < value.len() {
            value[n] = 0;
        }
        (reply.status, reply.reported)
    }

    fn record(&self, record: i16) -> Option<PostedRecord> {
        let index = usize::try_from(record).ok()?.checked_sub(1)?;
        self.posted.borrow().get(index).cloned()
    }
}

fn write_text(value: &mut [u8], text: &[u8]) {
    let n = text.len().min(value.len().saturating_sub(1));
    value[..n].copy_from_slice(&text[..n]);
    if n < value.len() {
        value[n] = 0;
    }
}

impl CallInterface for ScriptedDriver {
    fn get_diag_rec(
        &self,
        _kind: HandleKind,
        _handle: RawHandle,
        record: i16,
        state: &mut [u8; 6],
        native_error: &mut i32,
        message: &mut [u8],
        text_length: &mut i16,
    ) -> SqlReturn {
        self.record_requests
            .borrow_mut()
            .push((record, message.len()));

        if let Some(status) = self.record_status.borrow().get(&record) {
            return *status;
        }
        let Some(posted) = self.record(record) else {
            return SqlReturn::NO_DATA;
        };

        state[..5].copy_from_slice(&posted.state);
        state[5] = 0;
        *native_error = posted.native_error;
        write_text(message, posted.message.as_bytes());
        *text_length = posted.message.len() as i16;

        if posted.message.len() >= message.len() {
            SqlReturn::SUCCESS_WITH_INFO
        } else {
            SqlReturn::SUCCESS
        }
    }

    fn get_diag_field(
        &self,
        _kind: HandleKind,
        _handle: RawHandle,
        record: i16,
        field: i16,
        value: &mut [u8],
        string_length: &mut i16,
    ) -> SqlReturn {
        // SQL_DIAG_NUMBER on the header.
        if record == 0 && field == 2 {
            let count = self.posted.borrow().len() as i32;
            value[..4].copy_from_slice(&count.to_ne_bytes());
            *string_length = 4;
            return SqlReturn::SUCCESS;
        }

        let Some(posted) = self.record(record) else {
            return SqlReturn::NO_DATA;
        };
        let text = match field {
            4 => posted.state.to_vec(),
            6 => posted.message.into_bytes(),
            5 => {
                value[..4].copy_from_slice(&posted.native_error.to_ne_bytes());
                *string_length = 4;
                return SqlReturn::SUCCESS;
            }
            _ => return SqlReturn::NO_DATA,
        };
        write_text(value, &text);
        *string_length = text.len() as i16;
        if text.len() >= value.len() {
            SqlReturn::SUCCESS_WITH_INFO
        } else {
            SqlReturn::SUCCESS
        }
    }

    fn get_attr(
        &self,
        kind: HandleKind,
        _handle: RawHandle,
        attribute: i32,
        value: &mut [u8],
        string_length: &mut i32,
    ) -> SqlReturn {
        self.attribute_requests.borrow_mut().push((kind, attribute));
        let (status, reported) = self.next_reply(value);
        *string_length = reported as i32;
        status
    }

    fn set_attr(
        &self,
        kind: HandleKind,
        _handle: RawHandle,
        attribute: i32,
        value: &[u8],
        string_length: i32,
    ) -> SqlReturn {
        self.set_calls.borrow_mut().push(SetCall {
            kind,
            attribute,
            bytes: value.to_vec(),
            string_length,
        });
        self.set_status.borrow().unwrap_or(SqlReturn::SUCCESS)
    }

    fn get_info(
        &self,
        _handle: RawHandle,
        info_type: u16,
        value: &mut [u8],
        string_length: &mut i16,
    ) -> SqlReturn {
        self.info_requests.borrow_mut().push(info_type);
        let (status, reported) = self.next_reply(value);
        *string_length = reported as i16;
        status
    }
}
