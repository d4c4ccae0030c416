//! Information types answered by a connection's driver (`SQLGetInfo`).

use crate::protocol::masks::{
    AggregateFunctions, AlterDomain, AlterTable, BatchRowCount, BatchSupport, BookmarkPersistence,
    CliConformance, Conversions, ConvertFunctions, CreateAssertion, CreateCharacterSet,
    CreateDomain, CreateSchema, CreateTable, CreateView, CursorAttributes1, CursorAttributes2,
    DatetimeLiterals, DdlIndex, DropBehavior, DtcTransitionCost, FetchDirection, ForeignKeyRules,
    GetDataExtensions, IndexKeywords, InfoSchemaViews, InsertStatement, LockTypes,
    NumericFunctions, ObjectUsage, OuterJoinCapabilities, PosOperations, PositionedStatements,
    ScrollConcurrency, ScrollOptions, Sql92DatetimeFunctions, Sql92Grant, Sql92JoinOperators,
    Sql92NumericValueFunctions, Sql92Predicates, Sql92Revoke, Sql92RowValueConstructor,
    Sql92StringFunctions, Sql92ValueExpressions, StatementSupport, StaticSensitivity,
    StringFunctions, Subqueries, SystemFunctions, TimedateFunctions, TimedateIntervals,
    TxnIsolationMask, UnionSupport,
};
use crate::protocol::strategy::{
    attribute_family, Choice, Fixed, Mask, OpaqueHandle, Pointer, Text, YesNo,
};
use crate::protocol::values::{
    AsyncMode, Capability, CatalogLocation, ConcatNullBehavior, CorrelationName, CursorBehavior,
    CursorSensitivity, FileUsage, GroupBy, IdentifierCase, InterfaceConformance,
    NonNullableColumns, NullCollation, OdbcApiConformance, OdbcSqlConformance,
    ParamArrayRowCounts, ParamArraySelects, SagCliConformance, SqlConformance, TxnCapable,
};

attribute_family! {
    /// `SQLGetInfo` information type.
    pub enum InfoType => InfoValue: u16 {
        MaxDriverConnections = 0 => Fixed : u16,
        MaxConcurrentActivities = 1 => Fixed : u16,
        DataSourceName = 2 => Text : String,
        DriverHdbc = 3 => Pointer : OpaqueHandle,
        DriverHenv = 4 => Pointer : OpaqueHandle,
        DriverHstmt = 5 => Pointer : OpaqueHandle,
        DriverName = 6 => Text : String,
        DriverVer = 7 => Text : String,
        FetchDirection = 8 => Mask : FetchDirection,
        OdbcApiConformance = 9 => Choice<u16> : OdbcApiConformance,
        OdbcVer = 10 => Text : String,
        RowUpdates = 11 => YesNo : bool,
        OdbcSagCliConformance = 12 => Choice<u16> : SagCliConformance,
        ServerName = 13 => Text : String,
        SearchPatternEscape = 14 => Text : String,
        OdbcSqlConformance = 15 => Choice<u16> : OdbcSqlConformance,
        DatabaseName = 16 => Text : String,
        DbmsName = 17 => Text : String,
        DbmsVer = 18 => Text : String,
        AccessibleTables = 19 => YesNo : bool,
        AccessibleProcedures = 20 => YesNo : bool,
        Procedures = 21 => YesNo : bool,
        ConcatNullBehavior = 22 => Choice<u16> : ConcatNullBehavior,
        CursorCommitBehavior = 23 => Choice<u16> : CursorBehavior,
        CursorRollbackBehavior = 24 => Choice<u16> : CursorBehavior,
        DataSourceReadOnly = 25 => YesNo : bool,
        DefaultTxnIsolation = 26 => Mask : TxnIsolationMask,
        ExpressionsInOrderby = 27 => YesNo : bool,
        IdentifierCase = 28 => Choice<u16> : IdentifierCase,
        IdentifierQuoteChar = 29 => Text : String,
        MaxColumnNameLen = 30 => Fixed : u16,
        MaxCursorNameLen = 31 => Fixed : u16,
        MaxSchemaNameLen = 32 => Fixed : u16,
        MaxProcedureNameLen = 33 => Fixed : u16,
        MaxCatalogNameLen = 34 => Fixed : u16,
        MaxTableNameLen = 35 => Fixed : u16,
        MultResultSets = 36 => YesNo : bool,
        MultipleActiveTxn = 37 => YesNo : bool,
        OuterJoins = 38 => YesNo : bool,
        SchemaTerm = 39 => Text : String,
        ProcedureTerm = 40 => Text : String,
        CatalogNameSeparator = 41 => Text : String,
        CatalogTerm = 42 => Text : String,
        ScrollConcurrency = 43 => Mask : ScrollConcurrency,
        ScrollOptions = 44 => Mask : ScrollOptions,
        TableTerm = 45 => Text : String,
        TxnCapable = 46 => Choice<u16> : TxnCapable,
        UserName = 47 => Text : String,
        ConvertFunctions = 48 => Mask : ConvertFunctions,
        NumericFunctions = 49 => Mask : NumericFunctions,
        StringFunctions = 50 => Mask : StringFunctions,
        SystemFunctions = 51 => Mask : SystemFunctions,
        TimedateFunctions = 52 => Mask : TimedateFunctions,
        ConvertBigint = 53 => Mask : Conversions,
        ConvertBinary = 54 => Mask : Conversions,
        ConvertBit = 55 => Mask : Conversions,
        ConvertChar = 56 => Mask : Conversions,
        ConvertDate = 57 => Mask : Conversions,
        ConvertDecimal = 58 => Mask : Conversions,
        ConvertDouble = 59 => Mask : Conversions,
        ConvertFloat = 60 => Mask : Conversions,
        ConvertInteger = 61 => Mask : Conversions,
        ConvertLongvarchar = 62 => Mask : Conversions,
        ConvertNumeric = 63 => Mask : Conversions,
        ConvertReal = 64 => Mask : Conversions,
        ConvertSmallint = 65 => Mask : Conversions,
        ConvertTime = 66 => Mask : Conversions,
        ConvertTimestamp = 67 => Mask : Conversions,
        ConvertTinyint = 68 => Mask : Conversions,
        ConvertVarbinary = 69 => Mask : Conversions,
        ConvertVarchar = 70 => Mask : Conversions,
        ConvertLongvarbinary = 71 => Mask : Conversions,
        TxnIsolationOption = 72 => Mask : TxnIsolationMask,
        Integrity = 73 => YesNo : bool,
        CorrelationName = 74 => Choice<u16> : CorrelationName,
        NonNullableColumns = 75 => Choice<u16> : NonNullableColumns,
        DriverHlib = 76 => Pointer : OpaqueHandle,
        DriverOdbcVer = 77 => Text : String,
        LockTypes = 78 => Mask : LockTypes,
        PosOperations = 79 => Mask : PosOperations,
        PositionedStatements = 80 => Mask : PositionedStatements,
        GetDataExtensions = 81 => Mask : GetDataExtensions,
        BookmarkPersistence = 82 => Mask : BookmarkPersistence,
        StaticSensitivity = 83 => Mask : StaticSensitivity,
        FileUsage = 84 => Choice<u16> : FileUsage,
        NullCollation = 85 => Choice<u16> : NullCollation,
        AlterTable = 86 => Mask : AlterTable,
        ColumnAlias = 87 => YesNo : bool,
        GroupBy = 88 => Choice<u16> : GroupBy,
        Keywords = 89 => Text : String,
        OrderByColumnsInSelect = 90 => YesNo : bool,
        SchemaUsage = 91 => Mask : ObjectUsage,
        CatalogUsage = 92 => Mask : ObjectUsage,
        QuotedIdentifierCase = 93 => Choice<u16> : IdentifierCase,
        SpecialCharacters = 94 => Text : String,
        Subqueries = 95 => Mask : Subqueries,
        Union = 96 => Mask : UnionSupport,
        MaxColumnsInGroupBy = 97 => Fixed : u16,
        MaxColumnsInIndex = 98 => Fixed : u16,
        MaxColumnsInOrderBy = 99 => Fixed : u16,
        MaxColumnsInSelect = 100 => Fixed : u16,
        MaxColumnsInTable = 101 => Fixed : u16,
        MaxIndexSize = 102 => Fixed : u32,
        MaxRowSizeIncludesLong = 103 => YesNo : bool,
        MaxRowSize = 104 => Fixed : u32,
        MaxStatementLen = 105 => Fixed : u32,
        MaxTablesInSelect = 106 => Fixed : u16,
        MaxUserNameLen = 107 => Fixed : u16,
        MaxCharLiteralLen = 108 => Fixed : u32,
        TimedateAddIntervals = 109 => Mask : TimedateIntervals,
        TimedateDiffIntervals = 110 => Mask : TimedateIntervals,
        NeedLongDataLen = 111 => YesNo : bool,
        MaxBinaryLiteralLen = 112 => Fixed : u32,
        LikeEscapeClause = 113 => YesNo : bool,
        CatalogLocation = 114 => Choice<u16> : CatalogLocation,
        OjCapabilities = 115 => Mask : OuterJoinCapabilities,
        ActiveEnvironments = 116 => Fixed : u16,
        AlterDomain = 117 => Mask : AlterDomain,
        SqlConformance = 118 => Choice<u32> : SqlConformance,
        DatetimeLiterals = 119 => Mask : DatetimeLiterals,
        BatchRowCount = 120 => Mask : BatchRowCount,
        BatchSupport = 121 => Mask : BatchSupport,
        ConvertWchar = 122 => Mask : Conversions,
        ConvertIntervalDayTime = 123 => Mask : Conversions,
        ConvertIntervalYearMonth = 124 => Mask : Conversions,
        ConvertWlongvarchar = 125 => Mask : Conversions,
        ConvertWvarchar = 126 => Mask : Conversions,
        CreateAssertion = 127 => Mask : CreateAssertion,
        CreateCharacterSet = 128 => Mask : CreateCharacterSet,
        CreateCollation = 129 => Mask : StatementSupport,
        CreateDomain = 130 => Mask : CreateDomain,
        CreateSchema = 131 => Mask : CreateSchema,
        CreateTable = 132 => Mask : CreateTable,
        CreateTranslation = 133 => Mask : StatementSupport,
        CreateView = 134 => Mask : CreateView,
        DriverHdesc = 135 => Pointer : OpaqueHandle,
        DropAssertion = 136 => Mask : StatementSupport,
        DropCharacterSet = 137 => Mask : StatementSupport,
        DropCollation = 138 => Mask : StatementSupport,
        DropDomain = 139 => Mask : DropBehavior,
        DropSchema = 140 => Mask : DropBehavior,
        DropTable = 141 => Mask : DropBehavior,
        DropTranslation = 142 => Mask : StatementSupport,
        DropView = 143 => Mask : DropBehavior,
        DynamicCursorAttributes1 = 144 => Mask : CursorAttributes1,
        DynamicCursorAttributes2 = 145 => Mask : CursorAttributes2,
        ForwardOnlyCursorAttributes1 = 146 => Mask : CursorAttributes1,
        ForwardOnlyCursorAttributes2 = 147 => Mask : CursorAttributes2,
        IndexKeywords = 148 => Mask : IndexKeywords,
        InfoSchemaViews = 149 => Mask : InfoSchemaViews,
        KeysetCursorAttributes1 = 150 => Mask : CursorAttributes1,
        KeysetCursorAttributes2 = 151 => Mask : CursorAttributes2,
        OdbcInterfaceConformance = 152 => Choice<u32> : InterfaceConformance,
        ParamArrayRowCounts = 153 => Choice<u32> : ParamArrayRowCounts,
        ParamArraySelects = 154 => Choice<u32> : ParamArraySelects,
        Sql92DatetimeFunctions = 155 => Mask : Sql92DatetimeFunctions,
        Sql92ForeignKeyDeleteRule = 156 => Mask : ForeignKeyRules,
        Sql92ForeignKeyUpdateRule = 157 => Mask : ForeignKeyRules,
        Sql92Grant = 158 => Mask : Sql92Grant,
        Sql92NumericValueFunctions = 159 => Mask : Sql92NumericValueFunctions,
        Sql92Predicates = 160 => Mask : Sql92Predicates,
        Sql92RelationalJoinOperators = 161 => Mask : Sql92JoinOperators,
        Sql92Revoke = 162 => Mask : Sql92Revoke,
        Sql92RowValueConstructor = 163 => Mask : Sql92RowValueConstructor,
        Sql92StringFunctions = 164 => Mask : Sql92StringFunctions,
        Sql92ValueExpressions = 165 => Mask : Sql92ValueExpressions,
        StandardCliConformance = 166 => Mask : CliConformance,
        StaticCursorAttributes1 = 167 => Mask : CursorAttributes1,
        StaticCursorAttributes2 = 168 => Mask : CursorAttributes2,
        AggregateFunctions = 169 => Mask : AggregateFunctions,
        DdlIndex = 170 => Mask : DdlIndex,
        DmVer = 171 => Text : String,
        InsertStatement = 172 => Mask : InsertStatement,
        ConvertGuid = 173 => Mask : Conversions,
        DtcTransitionCost = 1750 => Mask : DtcTransitionCost,
        XopenCliYear = 10000 => Text : String,
        CursorSensitivity = 10001 => Choice<u32> : CursorSensitivity,
        DescribeParameter = 10002 => YesNo : bool,
        CatalogName = 10003 => YesNo : bool,
        CollationSeq = 10004 => Text : String,
        MaxIdentifierLen = 10005 => Fixed : u16,
        AsyncMode = 10021 => Choice<u32> : AsyncMode,
        MaxAsyncConcurrentStatements = 10022 => Fixed : u32,
        AsyncDbcFunctions = 10023 => Choice<u32> : Capability,
        DriverAwarePoolingSupported = 10024 => Choice<u32> : Capability,
        AsyncNotification = 10025 => Choice<u32> : Capability,
    }
}
