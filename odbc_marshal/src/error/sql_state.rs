//! SQLSTATE → [`ErrorKind`] resolution.
//!
//! Every five-character state code a driver can report resolves to exactly one
//! kind. Codes missing from the table resolve to [`ErrorKind::GeneralError`];
//! there is no separate "unknown code" outcome.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

macro_rules! error_kinds {
    ($( $kind:ident [$first:literal $(, $alias:literal)*] => $desc:literal ),+ $(,)?) => {
        /// Semantic error kind resolved from a SQLSTATE code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorKind {
            $(
                #[doc = $desc]
                $kind,
            )+
            /// The handle carries no diagnostic records at all.
            NoError,
        }

        /// Static code table. A kind may be listed under several codes.
        pub const SQL_STATE_TABLE: &[(&str, ErrorKind)] = &[
            $(
                ($first, ErrorKind::$kind),
                $( ($alias, ErrorKind::$kind), )*
            )+
        ];

        impl ErrorKind {
            /// First tabulated SQLSTATE for this kind. `None` for [`ErrorKind::NoError`].
            pub fn sqlstate(self) -> Option<&'static str> {
                match self {
                    $( ErrorKind::$kind => Some($first), )+
                    ErrorKind::NoError => None,
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $( ErrorKind::$kind => $desc, )+
                    ErrorKind::NoError => "No diagnostic records",
                }
            }
        }
    };
}

error_kinds! {
    Success ["00000"] => "Success",
    GeneralWarning ["01000"] => "General warning",
    CursorOperationConflict ["01001"] => "Cursor operation conflict",
    DisconnectError ["01002"] => "Disconnect error",
    NullValueEliminatedInSetFunction ["01003"] => "NULL value eliminated in set function",
    StringRightTruncated ["01004", "22001"] => "String data, right truncated",
    PrivilegeNotRevoked ["01006"] => "Privilege not revoked",
    PrivilegeNotGranted ["01007"] => "Privilege not granted",
    InvalidConnectionStringAttribute ["01S00"] => "Invalid connection string attribute",
    ErrorInRow ["01S01"] => "Error in row",
    OptionValueChanged ["01S02"] => "Option value changed",
    NoRowsUpdatedOrDeleted ["01S03"] => "No rows updated or deleted",
    MoreThanOneRowUpdatedOrDeleted ["01S04"] => "More than one row updated or deleted",
    CancelTreatedAsClose ["01S05"] => "Cancel treated as FreeStmt/Close",
    FetchBeforeFirstRowset ["01S06"] => "Attempt to fetch before the result set returned the first rowset",
    FractionalTruncation ["01S07"] => "Fractional truncation",
    ErrorSavingFileDsn ["01S08"] => "Error saving File DSN",
    InvalidKeyword ["01S09"] => "Invalid keyword",
    NoDataFound ["02000"] => "No data found",
    WrongNumberOfParameters ["07001"] => "Wrong number of parameters",
    CountFieldIncorrect ["07002"] => "COUNT field incorrect",
    PreparedStatementNotCursorSpecification ["07005"] => "Prepared statement not a cursor-specification",
    RestrictedDataTypeAttributeViolation ["07006"] => "Restricted data type attribute violation",
    RestrictedParameterValueViolation ["07007"] => "Restricted parameter value violation",
    InvalidDescriptorIndex ["07009"] => "Invalid descriptor index",
    InvalidUseOfDefaultParameter ["07S01"] => "Invalid use of default parameter",
    ClientUnableToEstablishConnection ["08001"] => "Client unable to establish connection",
    ConnectionNameInUse ["08002"] => "Connection name in use",
    ConnectionDoesNotExist ["08003"] => "Connection does not exist",
    ServerRejectedConnection ["08004"] => "Server rejected the connection",
    ConnectionFailureDuringTransaction ["08007"] => "Connection failure during transaction",
    CommunicationLinkFailure ["08S01"] => "Communication link failure",
    TriggeredActionException ["09000"] => "Triggered action exception",
    FeatureNotSupported ["0A000"] => "Feature not supported",
    CardinalityViolation ["21000"] => "Cardinality violation",
    InsertValueListMismatch ["21S01"] => "Insert value list does not match column list",
    DerivedTableDegreeMismatch ["21S02"] => "Degree of derived table does not match column list",
    DataException ["22000"] => "Data exception",
    IndicatorVariableRequired ["22002"] => "Indicator variable required but not supplied",
    NumericValueOutOfRange ["22003"] => "Numeric value out of range",
    InvalidDatetimeFormat ["22007"] => "Invalid datetime format",
    DatetimeFieldOverflow ["22008"] => "Datetime field overflow",
    DivisionByZero ["22012"] => "Division by zero",
    IntervalFieldOverflow ["22015"] => "Interval field overflow",
    InvalidCharacterValueForCast ["22018"] => "Invalid character value for cast specification",
    InvalidEscapeCharacter ["22019"] => "Invalid escape character",
    InvalidEscapeSequence ["22025"] => "Invalid escape sequence",
    StringDataLengthMismatch ["22026"] => "String data, length mismatch",
    IntegrityConstraintViolation ["23000"] => "Integrity constraint violation",
    InvalidCursorState ["24000"] => "Invalid cursor state",
    InvalidTransactionState ["25000"] => "Invalid transaction state",
    TransactionStateUnknown ["25S01"] => "Transaction state unknown",
    TransactionStillActive ["25S02"] => "Transaction is still active",
    TransactionRolledBack ["25S03"] => "Transaction is rolled back",
    InvalidSqlStatementName ["26000"] => "Invalid SQL statement name",
    TriggeredDataChangeViolation ["27000"] => "Triggered data change violation",
    InvalidAuthorizationSpecification ["28000"] => "Invalid authorization specification",
    DirectSqlSyntaxErrorOrAccessRuleViolation ["2A000"] => "Direct SQL syntax error or access rule violation",
    DependentPrivilegeDescriptorsStillExist ["2B000"] => "Dependent privilege descriptors still exist",
    InvalidCharacterSetName ["2C000"] => "Invalid character set name",
    InvalidTransactionTermination ["2D000"] => "Invalid transaction termination",
    InvalidConnectionName ["2E000"] => "Invalid connection name",
    SqlRoutineException ["2F000"] => "SQL routine exception",
    ModifyingSqlDataNotPermitted ["2F002"] => "Modifying SQL data not permitted",
    ProhibitedSqlStatementAttempted ["2F003"] => "Prohibited SQL statement attempted",
    ReadingSqlDataNotPermitted ["2F004"] => "Reading SQL data not permitted",
    FunctionExecutedNoReturnStatement ["2F005"] => "Function executed no return statement",
    InvalidCollationName ["2H000"] => "Invalid collation name",
    InvalidCursorName ["34000"] => "Invalid cursor name",
    DuplicateCursorName ["3C000"] => "Duplicate cursor name",
    InvalidCatalogName ["3D000"] => "Invalid catalog name",
    InvalidSchemaName ["3F000"] => "Invalid schema name",
    SerializationFailure ["40001"] => "Serialization failure",
    TransactionIntegrityConstraintViolation ["40002"] => "Integrity constraint violation during commit",
    StatementCompletionUnknown ["40003"] => "Statement completion unknown",
    SyntaxErrorOrAccessRuleViolation ["42000"] => "Syntax error or access rule violation",
    BaseTableOrViewAlreadyExists ["42S01"] => "Base table or view already exists",
    BaseTableOrViewNotFound ["42S02"] => "Base table or view not found",
    IndexAlreadyExists ["42S11"] => "Index already exists",
    IndexNotFound ["42S12"] => "Index not found",
    ColumnAlreadyExists ["42S21"] => "Column already exists",
    ColumnNotFound ["42S22"] => "Column not found",
    WithCheckOptionViolation ["44000"] => "WITH CHECK OPTION violation",
    GeneralError ["HY000"] => "General error",
    MemoryAllocationError ["HY001"] => "Memory allocation error",
    InvalidApplicationBufferType ["HY003"] => "Invalid application buffer type",
    InvalidSqlDataType ["HY004"] => "Invalid SQL data type",
    AssociatedStatementNotPrepared ["HY007"] => "Associated statement is not prepared",
    OperationCanceled ["HY008"] => "Operation canceled",
    InvalidUseOfNullPointer ["HY009"] => "Invalid use of null pointer",
    FunctionSequenceError ["HY010"] => "Function sequence error",
    AttributeCannotBeSetNow ["HY011"] => "Attribute cannot be set now",
    InvalidTransactionOperationCode ["HY012"] => "Invalid transaction operation code",
    MemoryManagementError ["HY013"] => "Memory management error",
    HandleLimitExceeded ["HY014"] => "Limit on the number of handles exceeded",
    NoCursorNameAvailable ["HY015"] => "No cursor name available",
    CannotModifyImplementationRowDescriptor ["HY016"] => "Cannot modify an implementation row descriptor",
    InvalidUseOfAutomaticDescriptorHandle ["HY017"] => "Invalid use of an automatically allocated descriptor handle",
    ServerDeclinedCancelRequest ["HY018"] => "Server declined cancel request",
    NonCharacterDataSentInPieces ["HY019"] => "Non-character and non-binary data sent in pieces",
    AttemptToConcatenateNull ["HY020"] => "Attempt to concatenate a null value",
    InconsistentDescriptorInformation ["HY021"] => "Inconsistent descriptor information",
    InvalidAttributeValue ["HY024"] => "Invalid attribute value",
    InvalidStringOrBufferLength ["HY090"] => "Invalid string or buffer length",
    InvalidDescriptorFieldIdentifier ["HY091"] => "Invalid descriptor field identifier",
    InvalidAttributeIdentifier ["HY092"] => "Invalid attribute/option identifier",
    FunctionTypeOutOfRange ["HY095"] => "Function type out of range",
    InvalidInformationType ["HY096"] => "Invalid information type",
    ColumnTypeOutOfRange ["HY097"] => "Column type out of range",
    ScopeTypeOutOfRange ["HY098"] => "Scope type out of range",
    NullableTypeOutOfRange ["HY099"] => "Nullable type out of range",
    UniquenessOptionTypeOutOfRange ["HY100"] => "Uniqueness option type out of range",
    AccuracyOptionTypeOutOfRange ["HY101"] => "Accuracy option type out of range",
    InvalidRetrievalCode ["HY103"] => "Invalid retrieval code",
    InvalidPrecisionOrScale ["HY104"] => "Invalid precision or scale value",
    InvalidParameterType ["HY105"] => "Invalid parameter type",
    FetchTypeOutOfRange ["HY106"] => "Fetch type out of range",
    RowValueOutOfRange ["HY107"] => "Row value out of range",
    ConcurrencyOptionOutOfRange ["HY108"] => "Concurrency option out of range",
    InvalidCursorPosition ["HY109"] => "Invalid cursor position",
    InvalidDriverCompletion ["HY110"] => "Invalid driver completion",
    InvalidBookmarkValue ["HY111"] => "Invalid bookmark value",
    AsyncDbcFunctionsNotSupported ["HY114"] => "Driver does not support connection-level asynchronous function execution",
    ConnectionSuspended ["HY117"] => "Connection is suspended due to unknown transaction state",
    CursorLibraryWithPooling ["HY121"] => "Cursor Library and Driver-Aware Pooling cannot be enabled at the same time",
    OptionalFeatureNotImplemented ["HYC00"] => "Optional feature not implemented",
    TimeoutExpired ["HYT00"] => "Timeout expired",
    ConnectionTimeoutExpired ["HYT01"] => "Connection timeout expired",
    DriverDoesNotSupportFunction ["IM001"] => "Driver does not support this function",
    DataSourceNotFound ["IM002"] => "Data source name not found and no default driver specified",
    DriverCouldNotBeLoaded ["IM003"] => "Specified driver could not be loaded",
    DriverEnvAllocFailed ["IM004"] => "Driver's SQLAllocHandle on SQL_HANDLE_ENV failed",
    DriverDbcAllocFailed ["IM005"] => "Driver's SQLAllocHandle on SQL_HANDLE_DBC failed",
    DriverSetConnectAttrFailed ["IM006"] => "Driver's SQLSetConnectAttr failed",
    DialogProhibited ["IM007"] => "No data source or driver specified; dialog prohibited",
    DialogFailed ["IM008"] => "Dialog failed",
    TranslationLibraryLoadFailed ["IM009"] => "Unable to load translation DLL",
    DataSourceNameTooLong ["IM010"] => "Data source name too long",
    DriverNameTooLong ["IM011"] => "Driver name too long",
    DriverKeywordSyntaxError ["IM012"] => "DRIVER keyword syntax error",
    TraceFileError ["IM013"] => "Trace file error",
    InvalidFileDsnName ["IM014"] => "Invalid name of File DSN",
    CorruptFileDataSource ["IM015"] => "Corrupt file data source",
    PollingDisabled ["IM017"] => "Polling is disabled in asynchronous notification mode",
    CompleteAsyncNotCalled ["IM018"] => "SQLCompleteAsync has not been called to complete the previous asynchronous operation",
}

lazy_static! {
    static ref SQL_STATE_INDEX: HashMap<&'static str, ErrorKind> =
        SQL_STATE_TABLE.iter().copied().collect();
}

impl ErrorKind {
    /// Exact, case-sensitive lookup. Unlisted codes resolve to
    /// [`ErrorKind::GeneralError`].
    pub fn from_sqlstate(code: &str) -> Self {
        SQL_STATE_INDEX
            .get(code)
            .copied()
            .unwrap_or(ErrorKind::GeneralError)
    }

    /// Lookup from the fixed-width wire form.
    pub fn from_state_bytes(state: &[u8; 5]) -> Self {
        match std::str::from_utf8(state) {
            Ok(code) => Self::from_sqlstate(code),
            Err(_) => ErrorKind::GeneralError,
        }
    }

    /// Class `01` codes are warnings attached to a successful call.
    pub fn is_warning(self) -> bool {
        self.sqlstate().is_some_and(|s| s.starts_with("01"))
    }

    pub fn is_connection_error(self) -> bool {
        self.sqlstate().is_some_and(|s| s.starts_with("08"))
    }

    /// Conditions where repeating the operation may succeed.
    pub fn is_transient(self) -> bool {
        self.is_connection_error()
            || matches!(
                self,
                ErrorKind::TimeoutExpired
                    | ErrorKind::ConnectionTimeoutExpired
                    | ErrorKind::SerializationFailure
                    | ErrorKind::ConnectionSuspended
            )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sqlstate() {
            Some(code) => write!(f, "{} ({})", self.description(), code),
            None => f.write_str(self.description()),
        }
    }
}
