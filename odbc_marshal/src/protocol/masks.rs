//! Bitmask records returned by capability information types.
//!
//! Bit values follow `sqlext.h`. Two tables alias a bit under two names
//! (`ScrollConcurrency::opt_timestamp` and `opt_rowver`,
//! `FetchDirection::prev` and `prior`) and two declare composite groups
//! (`CursorAttributes2::max_rows_affects_all`, `IndexKeywords::all`). Those
//! records do not round-trip through `bits()` for every combination.

use crate::bitmask;

bitmask! {
    /// `SQL_GETDATA_EXTENSIONS`
    pub struct GetDataExtensions: u32 {
        any_column = 0x0000_0001,
        any_order = 0x0000_0002,
        block = 0x0000_0004,
        bound = 0x0000_0008,
        output_params = 0x0000_0010,
    }
}

bitmask! {
    /// `SQL_TXN_ISOLATION_OPTION`, `SQL_DEFAULT_TXN_ISOLATION`
    pub struct TxnIsolationMask: u32 {
        read_uncommitted = 0x0000_0001,
        read_committed = 0x0000_0002,
        repeatable_read = 0x0000_0004,
        serializable = 0x0000_0008,
    }
}

bitmask! {
    /// `SQL_STRING_FUNCTIONS`
    pub struct StringFunctions: u32 {
        concat = 0x0000_0001,
        insert = 0x0000_0002,
        left = 0x0000_0004,
        ltrim = 0x0000_0008,
        length = 0x0000_0010,
        locate = 0x0000_0020,
        lcase = 0x0000_0040,
        repeat = 0x0000_0080,
        replace = 0x0000_0100,
        right = 0x0000_0200,
        rtrim = 0x0000_0400,
        substring = 0x0000_0800,
        ucase = 0x0000_1000,
        ascii = 0x0000_2000,
        char = 0x0000_4000,
        difference = 0x0000_8000,
        locate_2 = 0x0001_0000,
        soundex = 0x0002_0000,
        space = 0x0004_0000,
        bit_length = 0x0008_0000,
        char_length = 0x0010_0000,
        character_length = 0x0020_0000,
        octet_length = 0x0040_0000,
        position = 0x0080_0000,
    }
}

bitmask! {
    /// `SQL_NUMERIC_FUNCTIONS`
    pub struct NumericFunctions: u32 {
        abs = 0x0000_0001,
        acos = 0x0000_0002,
        asin = 0x0000_0004,
        atan = 0x0000_0008,
        atan2 = 0x0000_0010,
        ceiling = 0x0000_0020,
        cos = 0x0000_0040,
        cot = 0x0000_0080,
        exp = 0x0000_0100,
        floor = 0x0000_0200,
        log = 0x0000_0400,
        modulo = 0x0000_0800,
        sign = 0x0000_1000,
        sin = 0x0000_2000,
        sqrt = 0x0000_4000,
        tan = 0x0000_8000,
        pi = 0x0001_0000,
        rand = 0x0002_0000,
        degrees = 0x0004_0000,
        log10 = 0x0008_0000,
        power = 0x0010_0000,
        radians = 0x0020_0000,
        round = 0x0040_0000,
        truncate = 0x0080_0000,
    }
}

bitmask! {
    /// `SQL_SYSTEM_FUNCTIONS`
    pub struct SystemFunctions: u32 {
        username = 0x0000_0001,
        dbname = 0x0000_0002,
        ifnull = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_TIMEDATE_FUNCTIONS`
    pub struct TimedateFunctions: u32 {
        now = 0x0000_0001,
        curdate = 0x0000_0002,
        dayofmonth = 0x0000_0004,
        dayofweek = 0x0000_0008,
        dayofyear = 0x0000_0010,
        month = 0x0000_0020,
        quarter = 0x0000_0040,
        week = 0x0000_0080,
        year = 0x0000_0100,
        curtime = 0x0000_0200,
        hour = 0x0000_0400,
        minute = 0x0000_0800,
        second = 0x0000_1000,
        timestampadd = 0x0000_2000,
        timestampdiff = 0x0000_4000,
        dayname = 0x0000_8000,
        monthname = 0x0001_0000,
        current_date = 0x0002_0000,
        current_time = 0x0004_0000,
        current_timestamp = 0x0008_0000,
        extract = 0x0010_0000,
    }
}

bitmask! {
    /// `SQL_TIMEDATE_ADD_INTERVALS`, `SQL_TIMEDATE_DIFF_INTERVALS`
    pub struct TimedateIntervals: u32 {
        frac_second = 0x0000_0001,
        second = 0x0000_0002,
        minute = 0x0000_0004,
        hour = 0x0000_0008,
        day = 0x0000_0010,
        week = 0x0000_0020,
        month = 0x0000_0040,
        quarter = 0x0000_0080,
        year = 0x0000_0100,
    }
}

bitmask! {
    /// `SQL_CONVERT_*` target types.
    pub struct Conversions: u32 {
        char = 0x0000_0001,
        numeric = 0x0000_0002,
        decimal = 0x0000_0004,
        integer = 0x0000_0008,
        smallint = 0x0000_0010,
        float = 0x0000_0020,
        real = 0x0000_0040,
        double = 0x0000_0080,
        varchar = 0x0000_0100,
        longvarchar = 0x0000_0200,
        binary = 0x0000_0400,
        varbinary = 0x0000_0800,
        bit = 0x0000_1000,
        tinyint = 0x0000_2000,
        bigint = 0x0000_4000,
        date = 0x0000_8000,
        time = 0x0001_0000,
        timestamp = 0x0002_0000,
        longvarbinary = 0x0004_0000,
        interval_year_month = 0x0008_0000,
        interval_day_time = 0x0010_0000,
        wchar = 0x0020_0000,
        wlongvarchar = 0x0040_0000,
        wvarchar = 0x0080_0000,
        guid = 0x0100_0000,
    }
}

bitmask! {
    /// `SQL_CONVERT_FUNCTIONS`
    pub struct ConvertFunctions: u32 {
        convert = 0x0000_0001,
        cast = 0x0000_0002,
    }
}

bitmask! {
    /// `SQL_SCROLL_CONCURRENCY`
    pub struct ScrollConcurrency: u32 {
        read_only = 0x0000_0001,
        lock = 0x0000_0002,
        opt_rowver = 0x0000_0004,
        opt_values = 0x0000_0008,
        /// Same bit as `opt_rowver`.
        opt_timestamp = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_FETCH_DIRECTION`
    pub struct FetchDirection: u32 {
        next = 0x0000_0001,
        first = 0x0000_0002,
        last = 0x0000_0004,
        prior = 0x0000_0008,
        absolute = 0x0000_0010,
        relative = 0x0000_0020,
        resume = 0x0000_0040,
        bookmark = 0x0000_0080,
        /// Same bit as `prior`.
        prev = 0x0000_0008,
    }
}

bitmask! {
    /// `SQL_SCROLL_OPTIONS`
    pub struct ScrollOptions: u32 {
        forward_only = 0x0000_0001,
        keyset_driven = 0x0000_0002,
        dynamic = 0x0000_0004,
        mixed = 0x0000_0008,
        static_cursor = 0x0000_0010,
    }
}

bitmask! {
    /// `SQL_*_CURSOR_ATTRIBUTES1`
    pub struct CursorAttributes1: u32 {
        next = 0x0000_0001,
        absolute = 0x0000_0002,
        relative = 0x0000_0004,
        bookmark = 0x0000_0008,
        lock_no_change = 0x0000_0040,
        lock_exclusive = 0x0000_0080,
        lock_unlock = 0x0000_0100,
        pos_position = 0x0000_0200,
        pos_update = 0x0000_0400,
        pos_delete = 0x0000_0800,
        pos_refresh = 0x0000_1000,
        positioned_update = 0x0000_2000,
        positioned_delete = 0x0000_4000,
        select_for_update = 0x0000_8000,
        bulk_add = 0x0001_0000,
        bulk_update_by_bookmark = 0x0002_0000,
        bulk_delete_by_bookmark = 0x0004_0000,
        bulk_fetch_by_bookmark = 0x0008_0000,
    }
}

bitmask! {
    /// `SQL_*_CURSOR_ATTRIBUTES2`
    pub struct CursorAttributes2: u32 {
        read_only_concurrency = 0x0000_0001,
        lock_concurrency = 0x0000_0002,
        opt_rowver_concurrency = 0x0000_0004,
        opt_values_concurrency = 0x0000_0008,
        sensitivity_additions = 0x0000_0010,
        sensitivity_deletions = 0x0000_0020,
        sensitivity_updates = 0x0000_0040,
        max_rows_select = 0x0000_0080,
        max_rows_insert = 0x0000_0100,
        max_rows_delete = 0x0000_0200,
        max_rows_update = 0x0000_0400,
        max_rows_catalog = 0x0000_0800,
        /// All five `max_rows_*` bits.
        max_rows_affects_all = 0x0000_0F80,
        crc_exact = 0x0000_1000,
        crc_approximate = 0x0000_2000,
        simulate_non_unique = 0x0000_4000,
        simulate_try_unique = 0x0000_8000,
        simulate_unique = 0x0001_0000,
    }
}

bitmask! {
    /// `SQL_INDEX_KEYWORDS`
    pub struct IndexKeywords: u32 {
        asc = 0x0000_0001,
        desc = 0x0000_0002,
        /// `asc | desc`
        all = 0x0000_0003,
    }
}

bitmask! {
    /// `SQL_SQL92_PREDICATES`
    pub struct Sql92Predicates: u32 {
        exists = 0x0000_0001,
        is_not_null = 0x0000_0002,
        is_null = 0x0000_0004,
        match_full = 0x0000_0008,
        match_partial = 0x0000_0010,
        match_unique_full = 0x0000_0020,
        match_unique_partial = 0x0000_0040,
        overlaps = 0x0000_0080,
        unique = 0x0000_0100,
        like = 0x0000_0200,
        in_list = 0x0000_0400,
        between = 0x0000_0800,
        comparison = 0x0000_1000,
        quantified_comparison = 0x0000_2000,
    }
}

bitmask! {
    /// `SQL_SQL92_RELATIONAL_JOIN_OPERATORS`
    pub struct Sql92JoinOperators: u32 {
        corresponding_clause = 0x0000_0001,
        cross_join = 0x0000_0002,
        except_join = 0x0000_0004,
        full_outer_join = 0x0000_0008,
        inner_join = 0x0000_0010,
        intersect_join = 0x0000_0020,
        left_outer_join = 0x0000_0040,
        natural_join = 0x0000_0080,
        right_outer_join = 0x0000_0100,
        union_join = 0x0000_0200,
    }
}

bitmask! {
    /// `SQL_SQL92_DATETIME_FUNCTIONS`
    pub struct Sql92DatetimeFunctions: u32 {
        current_date = 0x0000_0001,
        current_time = 0x0000_0002,
        current_timestamp = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_SQL92_FOREIGN_KEY_DELETE_RULE`, `SQL_SQL92_FOREIGN_KEY_UPDATE_RULE`
    pub struct ForeignKeyRules: u32 {
        cascade = 0x0000_0001,
        no_action = 0x0000_0002,
        set_default = 0x0000_0004,
        set_null = 0x0000_0008,
    }
}

bitmask! {
    /// `SQL_SQL92_GRANT`
    pub struct Sql92Grant: u32 {
        usage_on_domain = 0x0000_0001,
        usage_on_character_set = 0x0000_0002,
        usage_on_collation = 0x0000_0004,
        usage_on_translation = 0x0000_0008,
        with_grant_option = 0x0000_0010,
        delete_table = 0x0000_0020,
        insert_table = 0x0000_0040,
        insert_column = 0x0000_0080,
        references_table = 0x0000_0100,
        references_column = 0x0000_0200,
        select_table = 0x0000_0400,
        update_table = 0x0000_0800,
        update_column = 0x0000_1000,
    }
}

bitmask! {
    /// `SQL_SQL92_REVOKE`
    pub struct Sql92Revoke: u32 {
        usage_on_domain = 0x0000_0001,
        usage_on_character_set = 0x0000_0002,
        usage_on_collation = 0x0000_0004,
        usage_on_translation = 0x0000_0008,
        grant_option_for = 0x0000_0010,
        cascade = 0x0000_0020,
        restrict = 0x0000_0040,
        delete_table = 0x0000_0080,
        insert_table = 0x0000_0100,
        insert_column = 0x0000_0200,
        references_table = 0x0000_0400,
        references_column = 0x0000_0800,
        select_table = 0x0000_1000,
        update_table = 0x0000_2000,
        update_column = 0x0000_4000,
    }
}

bitmask! {
    /// `SQL_SQL92_NUMERIC_VALUE_FUNCTIONS`
    pub struct Sql92NumericValueFunctions: u32 {
        bit_length = 0x0000_0001,
        char_length = 0x0000_0002,
        character_length = 0x0000_0004,
        extract = 0x0000_0008,
        octet_length = 0x0000_0010,
        position = 0x0000_0020,
    }
}

bitmask! {
    /// `SQL_SQL92_ROW_VALUE_CONSTRUCTOR`
    pub struct Sql92RowValueConstructor: u32 {
        value_expression = 0x0000_0001,
        null = 0x0000_0002,
        default = 0x0000_0004,
        row_subquery = 0x0000_0008,
    }
}

bitmask! {
    /// `SQL_SQL92_STRING_FUNCTIONS`
    pub struct Sql92StringFunctions: u32 {
        convert = 0x0000_0001,
        lower = 0x0000_0002,
        upper = 0x0000_0004,
        substring = 0x0000_0008,
        translate = 0x0000_0010,
        trim_both = 0x0000_0020,
        trim_leading = 0x0000_0040,
        trim_trailing = 0x0000_0080,
    }
}

bitmask! {
    /// `SQL_SQL92_VALUE_EXPRESSIONS`
    pub struct Sql92ValueExpressions: u32 {
        case = 0x0000_0001,
        cast = 0x0000_0002,
        coalesce = 0x0000_0004,
        nullif = 0x0000_0008,
    }
}

bitmask! {
    /// `SQL_AGGREGATE_FUNCTIONS`
    pub struct AggregateFunctions: u32 {
        avg = 0x0000_0001,
        count = 0x0000_0002,
        max = 0x0000_0004,
        min = 0x0000_0008,
        sum = 0x0000_0010,
        distinct = 0x0000_0020,
        all = 0x0000_0040,
    }
}

bitmask! {
    /// `SQL_ALTER_TABLE`
    pub struct AlterTable: u32 {
        add_column = 0x0000_0001,
        drop_column = 0x0000_0002,
        add_constraint = 0x0000_0008,
        add_column_single = 0x0000_0020,
        add_column_default = 0x0000_0040,
        add_column_collation = 0x0000_0080,
        set_column_default = 0x0000_0100,
        drop_column_default = 0x0000_0200,
        drop_column_cascade = 0x0000_0400,
        drop_column_restrict = 0x0000_0800,
        add_table_constraint = 0x0000_1000,
        drop_table_constraint_cascade = 0x0000_2000,
        drop_table_constraint_restrict = 0x0000_4000,
        constraint_name_definition = 0x0000_8000,
        constraint_initially_deferred = 0x0001_0000,
        constraint_initially_immediate = 0x0002_0000,
        constraint_deferrable = 0x0004_0000,
        constraint_non_deferrable = 0x0008_0000,
    }
}

bitmask! {
    /// `SQL_CREATE_TABLE`
    pub struct CreateTable: u32 {
        create_table = 0x0000_0001,
        commit_preserve = 0x0000_0002,
        commit_delete = 0x0000_0004,
        global_temporary = 0x0000_0008,
        local_temporary = 0x0000_0010,
        constraint_initially_deferred = 0x0000_0020,
        constraint_initially_immediate = 0x0000_0040,
        constraint_deferrable = 0x0000_0080,
        constraint_non_deferrable = 0x0000_0100,
        column_constraint = 0x0000_0200,
        column_default = 0x0000_0400,
        column_collation = 0x0000_0800,
        table_constraint = 0x0000_1000,
        constraint_name_definition = 0x0000_2000,
    }
}

bitmask! {
    /// `SQL_CREATE_VIEW`
    pub struct CreateView: u32 {
        create_view = 0x0000_0001,
        check_option = 0x0000_0002,
        cascaded = 0x0000_0004,
        local = 0x0000_0008,
    }
}

bitmask! {
    /// `SQL_DROP_TABLE`, `SQL_DROP_VIEW`, `SQL_DROP_DOMAIN`, `SQL_DROP_SCHEMA`
    pub struct DropBehavior: u32 {
        drop = 0x0000_0001,
        restrict = 0x0000_0002,
        cascade = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_BATCH_ROW_COUNT`
    pub struct BatchRowCount: u32 {
        procedures = 0x0000_0001,
        explicit = 0x0000_0002,
        rolled_up = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_BATCH_SUPPORT`
    pub struct BatchSupport: u32 {
        select_explicit = 0x0000_0001,
        row_count_explicit = 0x0000_0002,
        select_proc = 0x0000_0004,
        row_count_proc = 0x0000_0008,
    }
}

bitmask! {
    /// `SQL_BOOKMARK_PERSISTENCE`
    pub struct BookmarkPersistence: u32 {
        close = 0x0000_0001,
        delete = 0x0000_0002,
        drop = 0x0000_0004,
        transaction = 0x0000_0008,
        update = 0x0000_0010,
        other_hstmt = 0x0000_0020,
        scroll = 0x0000_0040,
    }
}

bitmask! {
    /// `SQL_CATALOG_USAGE`, `SQL_SCHEMA_USAGE`
    pub struct ObjectUsage: u32 {
        dml_statements = 0x0000_0001,
        procedure_invocation = 0x0000_0002,
        table_definition = 0x0000_0004,
        index_definition = 0x0000_0008,
        privilege_definition = 0x0000_0010,
    }
}

bitmask! {
    /// `SQL_DATETIME_LITERALS`
    pub struct DatetimeLiterals: u32 {
        date = 0x0000_0001,
        time = 0x0000_0002,
        timestamp = 0x0000_0004,
        interval_year = 0x0000_0008,
        interval_month = 0x0000_0010,
        interval_day = 0x0000_0020,
        interval_hour = 0x0000_0040,
        interval_minute = 0x0000_0080,
        interval_second = 0x0000_0100,
        interval_year_to_month = 0x0000_0200,
        interval_day_to_hour = 0x0000_0400,
        interval_day_to_minute = 0x0000_0800,
        interval_day_to_second = 0x0000_1000,
        interval_hour_to_minute = 0x0000_2000,
        interval_hour_to_second = 0x0000_4000,
        interval_minute_to_second = 0x0000_8000,
    }
}

bitmask! {
    /// `SQL_OJ_CAPABILITIES`
    pub struct OuterJoinCapabilities: u32 {
        left = 0x0000_0001,
        right = 0x0000_0002,
        full = 0x0000_0004,
        nested = 0x0000_0008,
        not_ordered = 0x0000_0010,
        inner = 0x0000_0020,
        all_comparison_ops = 0x0000_0040,
    }
}

bitmask! {
    /// `SQL_POS_OPERATIONS`
    pub struct PosOperations: u32 {
        position = 0x0000_0001,
        refresh = 0x0000_0002,
        update = 0x0000_0004,
        delete = 0x0000_0008,
        add = 0x0000_0010,
    }
}

bitmask! {
    /// `SQL_LOCK_TYPES`
    pub struct LockTypes: u32 {
        no_change = 0x0000_0001,
        exclusive = 0x0000_0002,
        unlock = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_STATIC_SENSITIVITY`
    pub struct StaticSensitivity: u32 {
        additions = 0x0000_0001,
        deletions = 0x0000_0002,
        updates = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_SUBQUERIES`
    pub struct Subqueries: u32 {
        comparison = 0x0000_0001,
        exists = 0x0000_0002,
        in_subquery = 0x0000_0004,
        quantified = 0x0000_0008,
        correlated_subqueries = 0x0000_0010,
    }
}

bitmask! {
    /// `SQL_UNION`
    pub struct UnionSupport: u32 {
        union = 0x0000_0001,
        union_all = 0x0000_0002,
    }
}

bitmask! {
    /// `SQL_STANDARD_CLI_CONFORMANCE`
    pub struct CliConformance: u32 {
        xopen_cli_version1 = 0x0000_0001,
        iso92_cli = 0x0000_0002,
    }
}

bitmask! {
    /// `SQL_DTC_TRANSITION_COST`
    pub struct DtcTransitionCost: u32 {
        enlist_expensive = 0x0000_0001,
        unenlist_expensive = 0x0000_0002,
    }
}

bitmask! {
    /// Statements answered by a single "supported" bit: `SQL_CREATE_COLLATION`,
    /// `SQL_CREATE_TRANSLATION`, `SQL_DROP_ASSERTION`, `SQL_DROP_CHARACTER_SET`,
    /// `SQL_DROP_COLLATION`, `SQL_DROP_TRANSLATION`.
    pub struct StatementSupport: u32 {
        supported = 0x0000_0001,
    }
}

bitmask! {
    /// `SQL_ALTER_DOMAIN`
    pub struct AlterDomain: u32 {
        constraint_name_definition = 0x0000_0001,
        add_domain_constraint = 0x0000_0002,
        drop_domain_constraint = 0x0000_0004,
        add_domain_default = 0x0000_0008,
        drop_domain_default = 0x0000_0010,
        add_constraint_initially_deferred = 0x0000_0020,
        add_constraint_initially_immediate = 0x0000_0040,
        add_constraint_deferrable = 0x0000_0080,
        add_constraint_non_deferrable = 0x0000_0100,
    }
}

bitmask! {
    /// `SQL_CREATE_ASSERTION`
    pub struct CreateAssertion: u32 {
        create_assertion = 0x0000_0001,
        constraint_initially_deferred = 0x0000_0010,
        constraint_initially_immediate = 0x0000_0020,
        constraint_deferrable = 0x0000_0040,
        constraint_non_deferrable = 0x0000_0080,
    }
}

bitmask! {
    /// `SQL_CREATE_CHARACTER_SET`
    pub struct CreateCharacterSet: u32 {
        create_character_set = 0x0000_0001,
        collate_clause = 0x0000_0002,
        limited_collation = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_CREATE_DOMAIN`
    pub struct CreateDomain: u32 {
        create_domain = 0x0000_0001,
        default = 0x0000_0002,
        constraint = 0x0000_0004,
        collation = 0x0000_0008,
        constraint_name_definition = 0x0000_0010,
        constraint_initially_deferred = 0x0000_0020,
        constraint_initially_immediate = 0x0000_0040,
        constraint_deferrable = 0x0000_0080,
        constraint_non_deferrable = 0x0000_0100,
    }
}

bitmask! {
    /// `SQL_CREATE_SCHEMA`
    pub struct CreateSchema: u32 {
        create_schema = 0x0000_0001,
        authorization = 0x0000_0002,
        default_character_set = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_INFO_SCHEMA_VIEWS`
    pub struct InfoSchemaViews: u32 {
        assertions = 0x0000_0001,
        character_sets = 0x0000_0002,
        check_constraints = 0x0000_0004,
        collations = 0x0000_0008,
        column_domain_usage = 0x0000_0010,
        column_privileges = 0x0000_0020,
        columns = 0x0000_0040,
        constraint_column_usage = 0x0000_0080,
        constraint_table_usage = 0x0000_0100,
        domain_constraints = 0x0000_0200,
        domains = 0x0000_0400,
        key_column_usage = 0x0000_0800,
        referential_constraints = 0x0000_1000,
        schemata = 0x0000_2000,
        sql_languages = 0x0000_4000,
        table_constraints = 0x0000_8000,
        table_privileges = 0x0001_0000,
        tables = 0x0002_0000,
        translations = 0x0004_0000,
        usage_privileges = 0x0008_0000,
        view_column_usage = 0x0010_0000,
        view_table_usage = 0x0020_0000,
        views = 0x0040_0000,
    }
}

bitmask! {
    /// `SQL_DDL_INDEX`
    pub struct DdlIndex: u32 {
        create_index = 0x0000_0001,
        drop_index = 0x0000_0002,
    }
}

bitmask! {
    /// `SQL_INSERT_STATEMENT`
    pub struct InsertStatement: u32 {
        insert_literals = 0x0000_0001,
        insert_searched = 0x0000_0002,
        select_into = 0x0000_0004,
    }
}

bitmask! {
    /// `SQL_POSITIONED_STATEMENTS`
    pub struct PositionedStatements: u32 {
        positioned_delete = 0x0000_0001,
        positioned_update = 0x0000_0002,
        select_for_update = 0x0000_0004,
    }
}
