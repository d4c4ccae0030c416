//! Decode/encode strategies and the macro that binds them to attribute codes.
//!
//! An attribute family is declared as a table of
//! `Variant = code => Strategy : Payload` rows. The table generates the
//! identity enum, the value union, and both dispatch directions, so the
//! identity → payload mapping is fixed at compile time.

use crate::error::{OdbcError, Result};
use crate::protocol::bitmask::Bitmask;
use crate::protocol::raw::{EncodedValue, RawValue, Word};
use crate::protocol::values::CodeEnum;
use std::marker::PhantomData;

pub trait Strategy<T> {
    /// Whether the driver writes a character string for this strategy.
    const TEXT: bool = false;

    fn decode(raw: RawValue) -> Result<T>;
    fn encode(value: &T) -> EncodedValue;
}

/// Character string up to the reported length.
pub struct Text;

impl Strategy<String> for Text {
    const TEXT: bool = true;

    fn decode(raw: RawValue) -> Result<String> {
        Ok(raw.into_text())
    }

    fn encode(value: &String) -> EncodedValue {
        EncodedValue::text(value)
    }
}

/// `"Y"` / `"N"` character string.
pub struct YesNo;

impl Strategy<bool> for YesNo {
    const TEXT: bool = true;

    fn decode(raw: RawValue) -> Result<bool> {
        Ok(raw.as_bytes().first() == Some(&b'Y'))
    }

    fn encode(value: &bool) -> EncodedValue {
        EncodedValue::text(if *value { "Y" } else { "N" })
    }
}

/// Integer of the payload's own width.
pub struct Fixed;

impl<W: Word> Strategy<W> for Fixed {
    fn decode(raw: RawValue) -> Result<W> {
        raw.read::<W>()
    }

    fn encode(value: &W) -> EncodedValue {
        EncodedValue::word(*value)
    }
}

/// Boolean carried as a `W`; true iff the value equals 1.
pub struct Flag<W>(PhantomData<W>);

impl<W: Word> Strategy<bool> for Flag<W> {
    fn decode(raw: RawValue) -> Result<bool> {
        Ok(raw.read::<W>()?.to_i64() == 1)
    }

    fn encode(value: &bool) -> EncodedValue {
        EncodedValue::word(W::from_i64(i64::from(*value)))
    }
}

/// Closed enumeration carried as a `W`.
pub struct Choice<W>(PhantomData<W>);

impl<W: Word, E: CodeEnum> Strategy<E> for Choice<W> {
    fn decode(raw: RawValue) -> Result<E> {
        let code = raw.read::<W>()?.to_i64();
        E::from_code(code).ok_or_else(|| {
            OdbcError::ValidationError(format!(
                "code {code} is not a declared {}",
                std::any::type_name::<E>()
            ))
        })
    }

    fn encode(value: &E) -> EncodedValue {
        EncodedValue::word(W::from_i64(value.to_code()))
    }
}

/// Flag record over the mask's backing width.
pub struct Mask;

impl<B: Bitmask> Strategy<B> for Mask {
    fn decode(raw: RawValue) -> Result<B> {
        Ok(B::from_bits(raw.read::<B::Raw>()?))
    }

    fn encode(value: &B) -> EncodedValue {
        EncodedValue::word(value.bits())
    }
}

/// Address relayed for interop. Never dereferenced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OpaqueHandle(pub usize);

impl OpaqueHandle {
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

pub struct Pointer;

impl Strategy<OpaqueHandle> for Pointer {
    fn decode(raw: RawValue) -> Result<OpaqueHandle> {
        raw.read::<usize>().map(OpaqueHandle)
    }

    fn encode(value: &OpaqueHandle) -> EncodedValue {
        EncodedValue::pointer(value.0)
    }
}

macro_rules! attribute_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ident:ident => $value:ident: $code_ty:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $code:expr => $strategy:ty : $payload:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $ident {
            $( $(#[$vmeta])* $variant, )+
        }

        #[doc = concat!("Typed value of a [`", stringify!($ident), "`], one case per identity.")]
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $value {
            $( $variant($payload), )+
        }

        impl $ident {
            pub const ALL: &'static [$ident] = &[ $( $ident::$variant, )+ ];

            /// Wire-level identifier.
            pub const fn code(self) -> $code_ty {
                match self {
                    $( $ident::$variant => $code, )+
                }
            }

            pub fn from_code(code: $code_ty) -> Option<Self> {
                Self::ALL.iter().copied().find(|a| a.code() == code)
            }

            /// Whether the driver answers with a character string.
            pub fn is_text(self) -> bool {
                use $crate::protocol::strategy::Strategy;
                match self {
                    $( $ident::$variant => <$strategy as Strategy<$payload>>::TEXT, )+
                }
            }

            pub fn decode(
                self,
                raw: $crate::protocol::raw::RawValue,
            ) -> $crate::error::Result<$value> {
                use $crate::protocol::strategy::Strategy;
                match self {
                    $(
                        $ident::$variant => {
                            <$strategy as Strategy<$payload>>::decode(raw).map($value::$variant)
                        }
                    )+
                }
            }
        }

        impl $value {
            pub fn identity(&self) -> $ident {
                match self {
                    $( $value::$variant(_) => $ident::$variant, )+
                }
            }

            pub fn encode(&self) -> $crate::protocol::raw::EncodedValue {
                use $crate::protocol::strategy::Strategy;
                match self {
                    $( $value::$variant(v) => <$strategy as Strategy<$payload>>::encode(v), )+
                }
            }
        }
    };
}

pub(crate) use attribute_family;
