pub mod bitmask;
pub mod raw;
pub mod values;
pub mod strategy;
pub mod attribute;
pub mod diag_field;
pub mod info;
pub mod masks;
pub mod types;

pub use attribute::{ConnectAttribute, ConnectValue, EnvAttribute, EnvValue, StmtAttribute, StmtValue};
pub use bitmask::{Bitmask, FlagSet};
pub use diag_field::{DiagField, DiagValue};
pub use info::{InfoType, InfoValue};
pub use raw::{EncodedValue, RawValue, Word};
pub use strategy::OpaqueHandle;
pub use types::{CDataType, HostType, SqlDataType};
pub use values::CodeEnum;
