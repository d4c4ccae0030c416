//! Raw wire buffers exchanged with the call interface.
//!
//! A [`RawValue`] is what a get call produced: the buffer handed to the driver
//! and the length the driver reported. An [`EncodedValue`] is what a set call
//! consumes: owned bytes and the string-length argument that accompanies them.

use crate::error::{OdbcError, Result};
use std::fmt::Debug;
use std::ops::{BitAnd, BitOr};

/// `SQL_IS_POINTER`
pub const IS_POINTER: i32 = -4;
/// `SQL_IS_UINTEGER`
pub const IS_UINTEGER: i32 = -5;
/// `SQL_IS_INTEGER`
pub const IS_INTEGER: i32 = -6;
/// `SQL_IS_USMALLINT`
pub const IS_USMALLINT: i32 = -7;
/// `SQL_IS_SMALLINT`
pub const IS_SMALLINT: i32 = -8;

/// Fixed-width integer that can be reinterpreted from native-endian bytes.
pub trait Word:
    Copy + Default + PartialEq + Debug + BitAnd<Output = Self> + BitOr<Output = Self>
{
    const SIZE: usize;
    /// String-length tag submitted alongside a value of this width.
    const LENGTH_TAG: i32;

    /// Reads the leading `SIZE` bytes. Callers check the length first.
    fn from_ne_slice(bytes: &[u8]) -> Self;
    fn to_ne_vec(self) -> Vec<u8>;
    fn to_i64(self) -> i64;
    fn from_i64(value: i64) -> Self;
}

macro_rules! impl_word {
    ($($ty:ty => $tag:expr),+ $(,)?) => {
        $(
            impl Word for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();
                const LENGTH_TAG: i32 = $tag;

                fn from_ne_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_ne_bytes(buf)
                }

                fn to_ne_vec(self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }

                fn to_i64(self) -> i64 {
                    self as i64
                }

                fn from_i64(value: i64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}

// 64-bit widths have no dedicated tag; drivers read them as SQLULEN/SQLLEN.
impl_word! {
    u16 => IS_USMALLINT,
    i16 => IS_SMALLINT,
    u32 => IS_UINTEGER,
    i32 => IS_INTEGER,
    u64 => IS_UINTEGER,
    i64 => IS_INTEGER,
    usize => IS_UINTEGER,
    isize => IS_INTEGER,
}

/// Buffer produced by a get call together with the driver-reported length.
///
/// The decoder takes ownership. A text payload reuses this allocation, so the
/// caller never releases the buffer separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    bytes: Vec<u8>,
    len: usize,
}

impl RawValue {
    pub fn new(bytes: Vec<u8>, len: usize) -> Self {
        Self { bytes, len }
    }

    /// Whole buffer is meaningful.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self { bytes, len }
    }

    pub fn from_word<W: Word>(value: W) -> Self {
        Self::from_bytes(value.to_ne_vec())
    }

    /// Reported length clamped to the buffer actually held.
    pub fn len(&self) -> usize {
        self.len.min(self.bytes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn reported_len(&self) -> usize {
        self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Reinterprets the leading bytes as `W`.
    pub fn read<W: Word>(&self) -> Result<W> {
        if self.bytes.len() < W::SIZE {
            return Err(OdbcError::ValidationError(format!(
                "buffer of {} bytes cannot hold a {}-byte value",
                self.bytes.len(),
                W::SIZE
            )));
        }
        Ok(W::from_ne_slice(&self.bytes))
    }

    /// Text up to the reported length, without copying when valid UTF-8.
    pub fn into_text(self) -> String {
        let len = self.len();
        let mut bytes = self.bytes;
        bytes.truncate(len);
        match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

/// Owned bytes ready for a set call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedValue {
    pub bytes: Vec<u8>,
    pub string_length: i32,
}

impl EncodedValue {
    pub fn text(text: &str) -> Self {
        let bytes = text.as_bytes().to_vec();
        let string_length = bytes.len() as i32;
        Self {
            bytes,
            string_length,
        }
    }

    pub fn word<W: Word>(value: W) -> Self {
        Self {
            bytes: value.to_ne_vec(),
            string_length: W::LENGTH_TAG,
        }
    }

    pub fn pointer(address: usize) -> Self {
        Self {
            bytes: address.to_ne_vec(),
            string_length: IS_POINTER,
        }
    }

    /// View as a raw value, as if the driver had echoed it back.
    pub fn into_raw(self) -> RawValue {
        match self.string_length {
            len if len >= 0 => RawValue::new(self.bytes, len as usize),
            _ => RawValue::from_bytes(self.bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_native_endian() {
        let raw = RawValue::from_bytes(0x0102_0304u32.to_ne_bytes().to_vec());
        assert_eq!(raw.read::<u32>().unwrap(), 0x0102_0304);
    }

    #[test]
    fn test_read_uses_leading_bytes() {
        let mut bytes = 7u16.to_ne_bytes().to_vec();
        bytes.extend_from_slice(&[0xAA; 6]);
        let raw = RawValue::from_bytes(bytes);
        assert_eq!(raw.read::<u16>().unwrap(), 7);
    }

    #[test]
    fn test_read_short_buffer_is_validation_error() {
        let raw = RawValue::from_bytes(vec![1, 2]);
        match raw.read::<u32>() {
            Err(OdbcError::ValidationError(msg)) => assert!(msg.contains("2 bytes")),
            other => panic!("expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_signed_read() {
        let raw = RawValue::from_word(-1249i16);
        assert_eq!(raw.read::<i16>().unwrap(), -1249);
    }

    #[test]
    fn test_into_text_respects_reported_length() {
        let mut bytes = b"HY000".to_vec();
        bytes.resize(16, 0);
        let raw = RawValue::new(bytes, 5);
        assert_eq!(raw.into_text(), "HY000");
    }

    #[test]
    fn test_into_text_clamps_overlong_length() {
        let raw = RawValue::new(b"abc".to_vec(), 40);
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.reported_len(), 40);
        assert_eq!(raw.into_text(), "abc");
    }

    #[test]
    fn test_into_text_lossy_on_invalid_utf8() {
        let raw = RawValue::from_bytes(vec![b'a', 0xFF, b'b']);
        assert_eq!(raw.into_text(), "a\u{FFFD}b");
    }

    #[test]
    fn test_encoded_text_has_byte_length() {
        let encoded = EncodedValue::text("naïve");
        assert_eq!(encoded.string_length, 6);
        assert_eq!(encoded.bytes, "naïve".as_bytes());
    }

    #[test]
    fn test_encoded_word_tags() {
        assert_eq!(EncodedValue::word(1u16).string_length, IS_USMALLINT);
        assert_eq!(EncodedValue::word(1i16).string_length, IS_SMALLINT);
        assert_eq!(EncodedValue::word(1u32).string_length, IS_UINTEGER);
        assert_eq!(EncodedValue::word(1i32).string_length, IS_INTEGER);
        assert_eq!(EncodedValue::pointer(0).string_length, IS_POINTER);
    }

    #[test]
    fn test_encoded_into_raw() {
        let raw = EncodedValue::word(300u32).into_raw();
        assert_eq!(raw.read::<u32>().unwrap(), 300);
        assert_eq!(EncodedValue::text("abc").into_raw().into_text(), "abc");
    }
}
