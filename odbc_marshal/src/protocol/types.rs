use crate::protocol::values::code_enum;

code_enum! {
    /// Application buffer type (`SQL_C_*`).
    pub enum CDataType: i16 {
        Char = 1,
        WChar = -8,
        Long = 4,
        Short = 5,
        Float = 7,
        Double = 8,
        Numeric = 2,
        Default = 99,
        Date = 9,
        Time = 10,
        Timestamp = 11,
        TypeDate = 91,
        TypeTime = 92,
        TypeTimestamp = 93,
        Binary = -2,
        Bit = -7,
        SBigInt = -25,
        UBigInt = -27,
        TinyInt = -6,
        SLong = -16,
        SShort = -15,
        STinyInt = -26,
        ULong = -18,
        UShort = -17,
        UTinyInt = -28,
        Guid = -11,
        IntervalYear = 101,
        IntervalMonth = 102,
        IntervalDay = 103,
        IntervalHour = 104,
        IntervalMinute = 105,
        IntervalSecond = 106,
        IntervalYearToMonth = 107,
        IntervalDayToHour = 108,
        IntervalDayToMinute = 109,
        IntervalDayToSecond = 110,
        IntervalHourToMinute = 111,
        IntervalHourToSecond = 112,
        IntervalMinuteToSecond = 113,
    }
}

code_enum! {
    /// Column-side type (`SQL_*`).
    pub enum SqlDataType: i16 {
        Unknown = 0,
        Char = 1,
        Numeric = 2,
        Decimal = 3,
        Integer = 4,
        SmallInt = 5,
        Float = 6,
        Real = 7,
        Double = 8,
        Datetime = 9,
        Varchar = 12,
        TypeDate = 91,
        TypeTime = 92,
        TypeTimestamp = 93,
        LongVarchar = -1,
        Binary = -2,
        Varbinary = -3,
        LongVarbinary = -4,
        BigInt = -5,
        TinyInt = -6,
        Bit = -7,
        WChar = -8,
        WVarchar = -9,
        WLongVarchar = -10,
        Guid = -11,
        IntervalYear = 101,
        IntervalMonth = 102,
        IntervalDay = 103,
        IntervalHour = 104,
        IntervalMinute = 105,
        IntervalSecond = 106,
        IntervalYearToMonth = 107,
        IntervalDayToHour = 108,
        IntervalDayToMinute = 109,
        IntervalDayToSecond = 110,
        IntervalHourToMinute = 111,
        IntervalHourToSecond = 112,
        IntervalMinuteToSecond = 113,
    }
}

impl CDataType {
    /// Column type a parameter bound with this buffer type is described as.
    pub fn default_sql_type(self) -> SqlDataType {
        match self {
            Self::Char | Self::Default => SqlDataType::Varchar,
            Self::WChar => SqlDataType::WVarchar,
            Self::Long | Self::SLong | Self::ULong => SqlDataType::Integer,
            Self::Short | Self::SShort | Self::UShort => SqlDataType::SmallInt,
            Self::TinyInt | Self::STinyInt | Self::UTinyInt => SqlDataType::TinyInt,
            Self::SBigInt | Self::UBigInt => SqlDataType::BigInt,
            Self::Float => SqlDataType::Real,
            Self::Double => SqlDataType::Double,
            Self::Numeric => SqlDataType::Numeric,
            Self::Bit => SqlDataType::Bit,
            Self::Binary => SqlDataType::Varbinary,
            Self::Date | Self::TypeDate => SqlDataType::TypeDate,
            Self::Time | Self::TypeTime => SqlDataType::TypeTime,
            Self::Timestamp | Self::TypeTimestamp => SqlDataType::TypeTimestamp,
            Self::Guid => SqlDataType::Guid,
            Self::IntervalYear => SqlDataType::IntervalYear,
            Self::IntervalMonth => SqlDataType::IntervalMonth,
            Self::IntervalDay => SqlDataType::IntervalDay,
            Self::IntervalHour => SqlDataType::IntervalHour,
            Self::IntervalMinute => SqlDataType::IntervalMinute,
            Self::IntervalSecond => SqlDataType::IntervalSecond,
            Self::IntervalYearToMonth => SqlDataType::IntervalYearToMonth,
            Self::IntervalDayToHour => SqlDataType::IntervalDayToHour,
            Self::IntervalDayToMinute => SqlDataType::IntervalDayToMinute,
            Self::IntervalDayToSecond => SqlDataType::IntervalDayToSecond,
            Self::IntervalHourToMinute => SqlDataType::IntervalHourToMinute,
            Self::IntervalHourToSecond => SqlDataType::IntervalHourToSecond,
            Self::IntervalMinuteToSecond => SqlDataType::IntervalMinuteToSecond,
        }
    }
}

impl SqlDataType {
    /// Buffer type a column of this type is fetched into by default.
    pub fn default_c_type(self) -> CDataType {
        match self {
            Self::Char
            | Self::Varchar
            | Self::LongVarchar
            | Self::Numeric
            | Self::Decimal
            | Self::Unknown => CDataType::Char,
            Self::WChar | Self::WVarchar | Self::WLongVarchar => CDataType::WChar,
            Self::Integer => CDataType::SLong,
            Self::SmallInt => CDataType::SShort,
            Self::TinyInt => CDataType::STinyInt,
            Self::BigInt => CDataType::SBigInt,
            Self::Real => CDataType::Float,
            Self::Float | Self::Double => CDataType::Double,
            Self::Bit => CDataType::Bit,
            Self::Binary | Self::Varbinary | Self::LongVarbinary => CDataType::Binary,
            Self::Datetime | Self::TypeDate => CDataType::TypeDate,
            Self::TypeTime => CDataType::TypeTime,
            Self::TypeTimestamp => CDataType::TypeTimestamp,
            Self::Guid => CDataType::Guid,
            Self::IntervalYear => CDataType::IntervalYear,
            Self::IntervalMonth => CDataType::IntervalMonth,
            Self::IntervalDay => CDataType::IntervalDay,
            Self::IntervalHour => CDataType::IntervalHour,
            Self::IntervalMinute => CDataType::IntervalMinute,
            Self::IntervalSecond => CDataType::IntervalSecond,
            Self::IntervalYearToMonth => CDataType::IntervalYearToMonth,
            Self::IntervalDayToHour => CDataType::IntervalDayToHour,
            Self::IntervalDayToMinute => CDataType::IntervalDayToMinute,
            Self::IntervalDayToSecond => CDataType::IntervalDayToSecond,
            Self::IntervalHourToMinute => CDataType::IntervalHourToMinute,
            Self::IntervalHourToSecond => CDataType::IntervalHourToSecond,
            Self::IntervalMinuteToSecond => CDataType::IntervalMinuteToSecond,
        }
    }

    pub fn from_data_type(data_type: &odbc_api::DataType) -> Self {
        use odbc_api::DataType;

        match data_type {
            DataType::Char { .. } => Self::Char,
            DataType::WChar { .. } => Self::WChar,
            DataType::Varchar { .. } => Self::Varchar,
            DataType::WVarchar { .. } => Self::WVarchar,
            DataType::LongVarchar { .. } => Self::LongVarchar,
            DataType::Numeric { .. } => Self::Numeric,
            DataType::Decimal { .. } => Self::Decimal,
            DataType::Integer => Self::Integer,
            DataType::SmallInt => Self::SmallInt,
            DataType::TinyInt => Self::TinyInt,
            DataType::BigInt => Self::BigInt,
            DataType::Bit => Self::Bit,
            DataType::Float { .. } => Self::Float,
            DataType::Real => Self::Real,
            DataType::Double => Self::Double,
            DataType::Date => Self::TypeDate,
            DataType::Time { .. } => Self::TypeTime,
            DataType::Timestamp { .. } => Self::TypeTimestamp,
            DataType::Binary { .. } => Self::Binary,
            DataType::Varbinary { .. } => Self::Varbinary,
            DataType::LongVarbinary { .. } => Self::LongVarbinary,
            _ => Self::Unknown,
        }
    }
}

/// Rust type with a natural application buffer type.
pub trait HostType {
    const C_TYPE: CDataType;

    fn default_sql_type() -> SqlDataType {
        Self::C_TYPE.default_sql_type()
    }
}

macro_rules! host_types {
    ($($ty:ty => $c:ident),+ $(,)?) => {
        $(
            impl HostType for $ty {
                const C_TYPE: CDataType = CDataType::$c;
            }
        )+
    };
}

host_types! {
    i8 => STinyInt,
    u8 => UTinyInt,
    i16 => SShort,
    u16 => UShort,
    i32 => SLong,
    u32 => ULong,
    i64 => SBigInt,
    u64 => UBigInt,
    f32 => Float,
    f64 => Double,
    bool => Bit,
    String => Char,
    str => Char,
    &str => Char,
    Vec<u8> => Binary,
    [u8] => Binary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_type_codes() {
        assert_eq!(CDataType::Char.code(), 1);
        assert_eq!(CDataType::SBigInt.code(), -25);
        assert_eq!(CDataType::UTinyInt.code(), -28);
        assert_eq!(CDataType::TypeTimestamp.code(), 93);
        assert_eq!(CDataType::IntervalMinuteToSecond.code(), 113);
    }

    #[test]
    fn test_sql_type_codes() {
        assert_eq!(SqlDataType::Varchar.code(), 12);
        assert_eq!(SqlDataType::WLongVarchar.code(), -10);
        assert_eq!(SqlDataType::Guid.code(), -11);
        assert_eq!(SqlDataType::from_code(-5), Some(SqlDataType::BigInt));
        assert_eq!(SqlDataType::from_code(999), None);
    }

    #[test]
    fn test_host_types() {
        assert_eq!(<i32 as HostType>::C_TYPE, CDataType::SLong);
        assert_eq!(<u64 as HostType>::C_TYPE, CDataType::UBigInt);
        assert_eq!(<f32 as HostType>::C_TYPE, CDataType::Float);
        assert_eq!(<str as HostType>::C_TYPE, CDataType::Char);
        assert_eq!(<[u8] as HostType>::C_TYPE, CDataType::Binary);
    }

    #[test]
    fn test_host_default_sql_types() {
        assert_eq!(<i64 as HostType>::default_sql_type(), SqlDataType::BigInt);
        assert_eq!(<bool as HostType>::default_sql_type(), SqlDataType::Bit);
        assert_eq!(<String as HostType>::default_sql_type(), SqlDataType::Varchar);
        assert_eq!(<Vec<u8> as HostType>::default_sql_type(), SqlDataType::Varbinary);
        assert_eq!(<f64 as HostType>::default_sql_type(), SqlDataType::Double);
    }

    #[test]
    fn test_default_c_type() {
        assert_eq!(SqlDataType::Integer.default_c_type(), CDataType::SLong);
        assert_eq!(SqlDataType::Decimal.default_c_type(), CDataType::Char);
        assert_eq!(SqlDataType::WVarchar.default_c_type(), CDataType::WChar);
        assert_eq!(SqlDataType::LongVarbinary.default_c_type(), CDataType::Binary);
    }

    #[test]
    fn test_interval_types_map_by_code() {
        for c in CDataType::ALL.iter().filter(|c| c.code() > 100) {
            assert_eq!(c.default_sql_type().code(), c.code());
            assert_eq!(c.default_sql_type().default_c_type(), *c);
        }
    }

    #[test]
    fn test_from_data_type_integer_variants() {
        use odbc_api::DataType;

        assert_eq!(SqlDataType::from_data_type(&DataType::Integer), SqlDataType::Integer);
        assert_eq!(SqlDataType::from_data_type(&DataType::SmallInt), SqlDataType::SmallInt);
        assert_eq!(SqlDataType::from_data_type(&DataType::TinyInt), SqlDataType::TinyInt);
        assert_eq!(SqlDataType::from_data_type(&DataType::Bit), SqlDataType::Bit);
        assert_eq!(SqlDataType::from_data_type(&DataType::BigInt), SqlDataType::BigInt);
    }

    #[test]
    fn test_from_data_type_decimal_variants() {
        use odbc_api::DataType;

        assert_eq!(
            SqlDataType::from_data_type(&DataType::Numeric {
                precision: 10,
                scale: 2
            }),
            SqlDataType::Numeric
        );
        assert_eq!(
            SqlDataType::from_data_type(&DataType::Decimal {
                precision: 10,
                scale: 2
            }),
            SqlDataType::Decimal
        );
    }

    #[test]
    fn test_from_data_type_temporal() {
        use odbc_api::DataType;

        assert_eq!(SqlDataType::from_data_type(&DataType::Date), SqlDataType::TypeDate);
        assert_eq!(
            SqlDataType::from_data_type(&DataType::Timestamp { precision: 3 }),
            SqlDataType::TypeTimestamp
        );
    }

    #[test]
    fn test_from_data_type_binary_and_text() {
        use odbc_api::DataType;
        use std::num::NonZero;

        assert_eq!(
            SqlDataType::from_data_type(&DataType::Varbinary {
                length: NonZero::new(100)
            }),
            SqlDataType::Varbinary
        );
        assert_eq!(
            SqlDataType::from_data_type(&DataType::Varchar {
                length: NonZero::new(100)
            }),
            SqlDataType::Varchar
        );
        assert_eq!(
            SqlDataType::from_data_type(&DataType::Char {
                length: NonZero::new(10)
            }),
            SqlDataType::Char
        );
    }

    #[test]
    fn test_from_data_type_unknown() {
        use odbc_api::DataType;

        assert_eq!(SqlDataType::from_data_type(&DataType::Unknown), SqlDataType::Unknown);
    }
}
