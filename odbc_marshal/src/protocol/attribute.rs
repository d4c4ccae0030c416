//! Environment, connection and statement attribute families.
//!
//! Each row binds an `SQL_ATTR_*` code to the strategy that reads and writes it.
//! Connection attributes are mostly `SQLUINTEGER`, statement attributes
//! `SQLULEN`. The payload width of each row follows its declared C type.

use crate::protocol::strategy::{
    attribute_family, Choice, Fixed, Flag, OpaqueHandle, Pointer, Text,
};
use crate::protocol::values::{
    AccessMode, AsyncEnable, Concurrency, ConnectionPooling, CpMatch, CursorScrollable,
    CursorSensitivity, CursorType, DisconnectBehavior, Noscan, OdbcCursors, OdbcVersion,
    RetrieveData, SimulateCursor, Trace, TxnIsolation, UseBookmarks,
};

attribute_family! {
    /// Attributes of an environment handle.
    pub enum EnvAttribute => EnvValue: i32 {
        OdbcVersion = 200 => Choice<i32> : OdbcVersion,
        ConnectionPooling = 201 => Choice<u32> : ConnectionPooling,
        CpMatch = 202 => Choice<u32> : CpMatch,
        OutputNts = 10001 => Flag<i32> : bool,
    }
}

attribute_family! {
    /// Attributes of a connection handle.
    pub enum ConnectAttribute => ConnectValue: i32 {
        AsyncEnable = 4 => Choice<usize> : AsyncEnable,
        AccessMode = 101 => Choice<u32> : AccessMode,
        Autocommit = 102 => Flag<u32> : bool,
        LoginTimeout = 103 => Fixed : u32,
        Trace = 104 => Choice<u32> : Trace,
        TraceFile = 105 => Text : String,
        TranslateLib = 106 => Text : String,
        TranslateOption = 107 => Fixed : u32,
        TxnIsolation = 108 => Choice<u32> : TxnIsolation,
        CurrentCatalog = 109 => Text : String,
        OdbcCursors = 110 => Choice<usize> : OdbcCursors,
        QuietMode = 111 => Pointer : OpaqueHandle,
        PacketSize = 112 => Fixed : u32,
        ConnectionTimeout = 113 => Fixed : u32,
        DisconnectBehavior = 114 => Choice<u32> : DisconnectBehavior,
        AnsiApp = 115 => Flag<u32> : bool,
        ResetConnection = 116 => Fixed : u32,
        AsyncDbcFunctionsEnable = 117 => Choice<u32> : AsyncEnable,
        DbcInfoToken = 118 => Pointer : OpaqueHandle,
        AsyncDbcEvent = 119 => Pointer : OpaqueHandle,
        AsyncDbcPcallback = 120 => Pointer : OpaqueHandle,
        AsyncDbcPcontext = 121 => Pointer : OpaqueHandle,
        EnlistInDtc = 1207 => Pointer : OpaqueHandle,
        EnlistInXa = 1208 => Pointer : OpaqueHandle,
        ConnectionDead = 1209 => Flag<u32> : bool,
        AutoIpd = 10001 => Flag<u32> : bool,
        MetadataId = 10014 => Flag<u32> : bool,
    }
}

attribute_family! {
    /// Attributes of a statement handle.
    pub enum StmtAttribute => StmtValue: i32 {
        AppRowDesc = 10010 => Pointer : OpaqueHandle,
        AppParamDesc = 10011 => Pointer : OpaqueHandle,
        ImpRowDesc = 10012 => Pointer : OpaqueHandle,
        ImpParamDesc = 10013 => Pointer : OpaqueHandle,
        AsyncEnable = 4 => Choice<usize> : AsyncEnable,
        Concurrency = 7 => Choice<usize> : Concurrency,
        CursorScrollable = -1 => Choice<usize> : CursorScrollable,
        CursorSensitivity = -2 => Choice<usize> : CursorSensitivity,
        CursorType = 6 => Choice<usize> : CursorType,
        EnableAutoIpd = 15 => Flag<usize> : bool,
        FetchBookmarkPtr = 16 => Pointer : OpaqueHandle,
        KeysetSize = 8 => Fixed : usize,
        MaxLength = 3 => Fixed : usize,
        MaxRows = 1 => Fixed : usize,
        MetadataId = 10014 => Flag<usize> : bool,
        Noscan = 2 => Choice<usize> : Noscan,
        ParamBindOffsetPtr = 17 => Pointer : OpaqueHandle,
        ParamBindType = 18 => Fixed : usize,
        ParamOperationPtr = 19 => Pointer : OpaqueHandle,
        ParamStatusPtr = 20 => Pointer : OpaqueHandle,
        ParamsProcessedPtr = 21 => Pointer : OpaqueHandle,
        ParamsetSize = 22 => Fixed : usize,
        QueryTimeout = 0 => Fixed : usize,
        RetrieveData = 11 => Choice<usize> : RetrieveData,
        RowArraySize = 27 => Fixed : usize,
        AsyncStmtEvent = 29 => Pointer : OpaqueHandle,
        AsyncStmtPcallback = 30 => Pointer : OpaqueHandle,
        AsyncStmtPcontext = 31 => Pointer : OpaqueHandle,
        RowBindOffsetPtr = 23 => Pointer : OpaqueHandle,
        RowBindType = 5 => Fixed : usize,
        RowNumber = 14 => Fixed : usize,
        RowsetSize = 9 => Fixed : usize,
        RowOperationPtr = 24 => Pointer : OpaqueHandle,
        RowStatusPtr = 25 => Pointer : OpaqueHandle,
        RowsFetchedPtr = 26 => Pointer : OpaqueHandle,
        SimulateCursor = 10 => Choice<usize> : SimulateCursor,
        UseBookmarks = 12 => Choice<usize> : UseBookmarks,
    }
}
