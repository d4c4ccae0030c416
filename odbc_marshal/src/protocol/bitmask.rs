//! Two-way mapping between an integer bit pattern and named boolean flags.
//!
//! A flag is set iff `(raw & bit) == bit`. This is a containment test, so a
//! flag whose value spans several bits is only reported when all of them are
//! present. Encoding ORs together the bits of every set flag. Tables whose
//! flags share bits do not survive `from_bits(bits(x)) == x`.

use crate::protocol::raw::Word;
use std::fmt::Debug;

/// A fixed record of named booleans over a backing integer.
///
/// Implemented by the [`bitmask!`](crate::bitmask) macro.
pub trait Bitmask: Sized + Copy + Default + PartialEq + Debug {
    type Raw: Word + 'static;

    /// Declared `(name, bits)` pairs in declaration order.
    const FLAGS: &'static [(&'static str, Self::Raw)];

    fn from_bits(raw: Self::Raw) -> Self;
    fn bits(&self) -> Self::Raw;
    fn flags(&self) -> Vec<(&'static str, bool)>;

    /// Names of the flags that are set.
    fn enabled(&self) -> Vec<&'static str> {
        self.flags()
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    fn to_flag_set(&self) -> FlagSet<Self::Raw> {
        FlagSet {
            descriptor: Self::FLAGS,
            values: self.flags().into_iter().map(|(_, set)| set).collect(),
        }
    }
}

/// Declares a flag record and its [`Bitmask`] implementation.
///
/// ```
/// odbc_marshal::bitmask! {
///     pub struct Perms: u32 {
///         read = 0b001,
///         write = 0b010,
///     }
/// }
/// ```
#[macro_export]
macro_rules! bitmask {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $raw:ty {
            $( $(#[$fmeta:meta])* $field:ident = $bit:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name {
            $( $(#[$fmeta])* pub $field: bool, )+
        }

        impl $crate::protocol::bitmask::Bitmask for $name {
            type Raw = $raw;

            const FLAGS: &'static [(&'static str, $raw)] = &[
                $( (stringify!($field), $bit), )+
            ];

            fn from_bits(raw: $raw) -> Self {
                Self {
                    $( $field: (raw & $bit) == $bit, )+
                }
            }

            fn bits(&self) -> $raw {
                let mut raw: $raw = 0;
                $( if self.$field { raw |= $bit; } )+
                raw
            }

            fn flags(&self) -> Vec<(&'static str, bool)> {
                vec![ $( (stringify!($field), self.$field), )+ ]
            }
        }
    };
}

/// Generic named-boolean set driven by a static descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSet<W: Word + 'static> {
    descriptor: &'static [(&'static str, W)],
    values: Vec<bool>,
}

impl<W: Word + 'static> FlagSet<W> {
    pub fn decode(descriptor: &'static [(&'static str, W)], raw: W) -> Self {
        let values = descriptor
            .iter()
            .map(|(_, bit)| (raw & *bit) == *bit)
            .collect();
        Self { descriptor, values }
    }

    pub fn encode(&self) -> W {
        self.descriptor
            .iter()
            .zip(&self.values)
            .filter(|(_, set)| **set)
            .fold(W::default(), |acc, ((_, bit), _)| acc | *bit)
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.position(name).map(|i| self.values[i])
    }

    /// Returns `false` when `name` is not in the descriptor.
    pub fn set(&mut self, name: &str, value: bool) -> bool {
        match self.position(name) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.descriptor
            .iter()
            .zip(&self.values)
            .map(|((name, _), set)| (*name, *set))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.descriptor.iter().position(|(n, _)| *n == name)
    }
}
