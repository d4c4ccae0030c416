use crate::engine::call::HandleKind;
use crate::engine::diagnostics::DiagnosticRecord;
use log::Level;

#[derive(Debug, Clone, Copy)]
pub struct StructuredLogger {
    enabled: bool,
}

impl StructuredLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Class `01` records are warnings; everything else is an error.
    pub fn level_for(record: &DiagnosticRecord) -> Level {
        if record.state[..2] == *b"01" {
            Level::Warn
        } else {
            Level::Error
        }
    }

    pub fn log_diagnostic(&self, kind: HandleKind, number: usize, record: &DiagnosticRecord) {
        if !self.enabled {
            return;
        }

        log::log!(
            Self::level_for(record),
            "{:?} diagnostic #{}: [{}] native={} {}",
            kind,
            number,
            record.sqlstate(),
            record.native_error,
            record.message
        );
    }

    pub fn log_truncation(&self, what: &str, from: usize, to: usize) {
        if !self.enabled {
            return;
        }

        log::debug!("{} truncated at {} bytes, retrying with {}", what, from, to);
    }

    pub fn log_set_warning(&self, kind: HandleKind, attribute: i32, records: usize) {
        if !self.enabled {
            return;
        }

        log::warn!(
            "Setting {:?} attribute {} succeeded with {} diagnostic record(s)",
            kind,
            attribute,
            records
        );
    }
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self::new(true)
    }
}
