//! Closed enumerations carried by enum-typed attributes and information types.
//!
//! Each enumeration is backed by the numeric constant the driver manager
//! exchanges on the wire.

use std::fmt::Debug;

/// Enumeration with a fixed numeric code per variant.
pub trait CodeEnum: Sized + Copy + Debug + 'static {
    fn from_code(code: i64) -> Option<Self>;
    fn to_code(self) -> i64;
}

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $code:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            pub const fn code(self) -> $repr {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            pub fn from_code(code: $repr) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.code() == code)
            }
        }

        impl $crate::protocol::values::CodeEnum for $name {
            fn from_code(code: i64) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.code() as i64 == code)
            }

            fn to_code(self) -> i64 {
                self.code() as i64
            }
        }
    };
}

pub(crate) use code_enum;

code_enum! {
    /// `SQL_ATTR_ODBC_VERSION`
    pub enum OdbcVersion: i32 {
        Odbc2 = 2,
        Odbc3 = 3,
        Odbc3_80 = 380,
    }
}

code_enum! {
    /// `SQL_ATTR_CONNECTION_POOLING`
    pub enum ConnectionPooling: u32 {
        Off = 0,
        OnePerDriver = 1,
        OnePerHenv = 2,
        DriverAware = 3,
    }
}

code_enum! {
    /// `SQL_ATTR_CP_MATCH`
    pub enum CpMatch: u32 {
        StrictMatch = 0,
        RelaxedMatch = 1,
    }
}

code_enum! {
    pub enum AccessMode: u32 {
        ReadWrite = 0,
        ReadOnly = 1,
    }
}

code_enum! {
    /// Shared by the connection and statement async switches.
    pub enum AsyncEnable: u32 {
        Off = 0,
        On = 1,
    }
}

code_enum! {
    pub enum Trace: u32 {
        Off = 0,
        On = 1,
    }
}

code_enum! {
    /// Single isolation level, as set on a connection.
    pub enum TxnIsolation: u32 {
        ReadUncommitted = 1,
        ReadCommitted = 2,
        RepeatableRead = 4,
        Serializable = 8,
    }
}

code_enum! {
    pub enum OdbcCursors: usize {
        UseIfNeeded = 0,
        UseOdbc = 1,
        UseDriver = 2,
    }
}

code_enum! {
    pub enum DisconnectBehavior: u32 {
        ReturnToPool = 0,
        Disconnect = 1,
    }
}

code_enum! {
    pub enum Concurrency: usize {
        ReadOnly = 1,
        Lock = 2,
        RowVer = 3,
        Values = 4,
    }
}

code_enum! {
    pub enum CursorScrollable: usize {
        NonScrollable = 0,
        Scrollable = 1,
    }
}

code_enum! {
    pub enum CursorSensitivity: usize {
        Unspecified = 0,
        Insensitive = 1,
        Sensitive = 2,
    }
}

code_enum! {
    pub enum CursorType: usize {
        ForwardOnly = 0,
        KeysetDriven = 1,
        Dynamic = 2,
        Static = 3,
    }
}

code_enum! {
    pub enum Noscan: usize {
        Off = 0,
        On = 1,
    }
}

code_enum! {
    pub enum RetrieveData: usize {
        Off = 0,
        On = 1,
    }
}

code_enum! {
    pub enum SimulateCursor: usize {
        NonUnique = 0,
        TryUnique = 1,
        Unique = 2,
    }
}

code_enum! {
    pub enum UseBookmarks: usize {
        Off = 0,
        /// Deprecated fixed-length bookmarks.
        Fixed = 1,
        Variable = 2,
    }
}

code_enum! {
    /// `SQL_CURSOR_COMMIT_BEHAVIOR` / `SQL_CURSOR_ROLLBACK_BEHAVIOR`
    pub enum CursorBehavior: u16 {
        Delete = 0,
        Close = 1,
        Preserve = 2,
    }
}

code_enum! {
    pub enum TxnCapable: u16 {
        None = 0,
        Dml = 1,
        All = 2,
        DdlCommit = 3,
        DdlIgnore = 4,
    }
}

code_enum! {
    pub enum ConcatNullBehavior: u16 {
        Null = 0,
        NonNull = 1,
    }
}

code_enum! {
    pub enum NullCollation: u16 {
        High = 0,
        Low = 1,
        Start = 2,
        End = 4,
    }
}

code_enum! {
    /// `SQL_IDENTIFIER_CASE` / `SQL_QUOTED_IDENTIFIER_CASE`
    pub enum IdentifierCase: u16 {
        Upper = 1,
        Lower = 2,
        Sensitive = 3,
        Mixed = 4,
    }
}

code_enum! {
    pub enum CorrelationName: u16 {
        None = 0,
        Different = 1,
        Any = 2,
    }
}

code_enum! {
    pub enum FileUsage: u16 {
        NotSupported = 0,
        Table = 1,
        Catalog = 2,
    }
}

code_enum! {
    pub enum GroupBy: u16 {
        NotSupported = 0,
        EqualsSelect = 1,
        ContainsSelect = 2,
        NoRelation = 3,
        Collate = 4,
    }
}

code_enum! {
    pub enum NonNullableColumns: u16 {
        Null = 0,
        NonNull = 1,
    }
}

code_enum! {
    pub enum CatalogLocation: u16 {
        Start = 1,
        End = 2,
    }
}

code_enum! {
    pub enum InterfaceConformance: u32 {
        Core = 1,
        Level1 = 2,
        Level2 = 3,
    }
}

code_enum! {
    /// ODBC 2.x API conformance level (`SQL_OAC_*`).
    pub enum OdbcApiConformance: u16 {
        None = 0,
        Level1 = 1,
        Level2 = 2,
    }
}

code_enum! {
    pub enum SagCliConformance: u16 {
        NotCompliant = 0,
        Compliant = 1,
    }
}

code_enum! {
    /// ODBC 2.x SQL grammar conformance (`SQL_OSC_*`).
    pub enum OdbcSqlConformance: u16 {
        Minimum = 0,
        Core = 1,
        Extended = 2,
    }
}

code_enum! {
    pub enum SqlConformance: u32 {
        Entry = 1,
        FipsTransitional = 2,
        Intermediate = 4,
        Full = 8,
    }
}

code_enum! {
    pub enum AsyncMode: u32 {
        None = 0,
        Connection = 1,
        Statement = 2,
    }
}

code_enum! {
    pub enum ParamArrayRowCounts: u32 {
        Batch = 1,
        NoBatch = 2,
    }
}

code_enum! {
    pub enum ParamArraySelects: u32 {
        Batch = 1,
        NoBatch = 2,
        NoSelect = 3,
    }
}

code_enum! {
    /// Driver capability switch shared by several information types.
    pub enum Capability: u32 {
        NotCapable = 0,
        Capable = 1,
    }
}
