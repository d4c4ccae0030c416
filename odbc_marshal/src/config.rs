use crate::error::{OdbcError, Result};
use serde::{Deserialize, Serialize};

pub const MESSAGE_CAPACITY_ENV: &str = "ODBC_MARSHAL_MESSAGE_CAPACITY";
pub const STRING_CAPACITY_ENV: &str = "ODBC_MARSHAL_STRING_CAPACITY";
pub const MAX_TRUNCATION_RETRIES_ENV: &str = "ODBC_MARSHAL_MAX_TRUNCATION_RETRIES";
pub const LOG_DIAGNOSTICS_ENV: &str = "ODBC_MARSHAL_LOG_DIAGNOSTICS";

const DEFAULT_MESSAGE_CAPACITY: usize = 200;
const DEFAULT_STRING_CAPACITY: usize = 256;
const DEFAULT_MAX_TRUNCATION_RETRIES: usize = 8;

/// Buffer sizing and retry limits for handle views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarshalConfig {
    /// Initial diagnostic message buffer, in bytes.
    pub message_capacity: usize,
    /// Initial buffer for string-valued attributes and information types.
    pub string_capacity: usize,
    /// Buffer growths allowed for a single value before giving up.
    pub max_truncation_retries: usize,
    pub log_diagnostics: bool,
}

impl Default for MarshalConfig {
    fn default() -> Self {
        Self {
            message_capacity: DEFAULT_MESSAGE_CAPACITY,
            string_capacity: DEFAULT_STRING_CAPACITY,
            max_truncation_retries: DEFAULT_MAX_TRUNCATION_RETRIES,
            log_diagnostics: true,
        }
    }
}

impl MarshalConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| OdbcError::ConfigError(format!("invalid JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `ODBC_MARSHAL_*` variables.
    pub fn from_env() -> Result<Self> {
        #[cfg(feature = "test-helpers")]
        {
            let _ = dotenvy::dotenv();
        }

        let mut config = Self::default();
        if let Some(value) = read_usize(MESSAGE_CAPACITY_ENV)? {
            config.message_capacity = value;
        }
        if let Some(value) = read_usize(STRING_CAPACITY_ENV)? {
            config.string_capacity = value;
        }
        if let Some(value) = read_usize(MAX_TRUNCATION_RETRIES_ENV)? {
            config.max_truncation_retries = value;
        }
        if let Ok(raw) = std::env::var(LOG_DIAGNOSTICS_ENV) {
            config.log_diagnostics = parse_bool_flag(&raw).ok_or_else(|| {
                OdbcError::ConfigError(format!("{LOG_DIAGNOSTICS_ENV}: not a boolean: {raw}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.message_capacity == 0 {
            return Err(OdbcError::ConfigError(
                "message_capacity must be non-zero".to_string(),
            ));
        }
        if self.string_capacity == 0 {
            return Err(OdbcError::ConfigError(
                "string_capacity must be non-zero".to_string(),
            ));
        }
        if self.max_truncation_retries == 0 {
            return Err(OdbcError::ConfigError(
                "max_truncation_retries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn read_usize(name: &str) -> Result<Option<usize>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|e| OdbcError::ConfigError(format!("{name}: {e}"))),
        Err(_) => Ok(None),
    }
}

fn parse_bool_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
