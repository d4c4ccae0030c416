//! Header and record fields readable through `SQLGetDiagField`.
//!
//! Header fields are read with record number 0.

use crate::protocol::strategy::{attribute_family, Fixed, Text};

attribute_family! {
    pub enum DiagField => DiagValue: i16 {
        ReturnCode = 1 => Fixed : i16,
        Number = 2 => Fixed : i32,
        RowCount = 3 => Fixed : isize,
        SqlState = 4 => Text : String,
        Native = 5 => Fixed : i32,
        MessageText = 6 => Text : String,
        DynamicFunction = 7 => Text : String,
        ClassOrigin = 8 => Text : String,
        SubclassOrigin = 9 => Text : String,
        ConnectionName = 10 => Text : String,
        ServerName = 11 => Text : String,
        DynamicFunctionCode = 12 => Fixed : i32,
        CursorRowCount = -1249 => Fixed : isize,
        RowNumber = -1248 => Fixed : isize,
        ColumnNumber = -1247 => Fixed : i32,
    }
}

impl DiagField {
    pub fn is_header(self) -> bool {
        matches!(
            self,
            DiagField::ReturnCode
                | DiagField::Number
                | DiagField::RowCount
                | DiagField::DynamicFunction
                | DiagField::DynamicFunctionCode
                | DiagField::CursorRowCount
        )
    }
}
