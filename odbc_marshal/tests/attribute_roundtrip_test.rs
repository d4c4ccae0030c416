mod helpers;

use helpers::{init_logging, Reply, ScriptedDriver, SetCall};
use odbc_api::sys::SqlReturn;
use odbc_marshal::protocol::masks::{GetDataExtensions, TxnIsolationMask};
use odbc_marshal::protocol::values::{CursorType, OdbcVersion, TxnIsolation};
use odbc_marshal::protocol::OpaqueHandle;
use odbc_marshal::{
    ConnectAttribute, ConnectValue, ConnectionHandle, EnvAttribute, EnvValue, EnvironmentHandle,
    ErrorKind, HandleKind, InfoType, InfoValue, OdbcError, RawHandle, StatementHandle,
    StmtAttribute, StmtValue,
};

#[test]
fn test_set_text_attribute_sends_exact_bytes() {
    let driver = ScriptedDriver::new();
    let conn = ConnectionHandle::new(&driver, RawHandle::null());

    conn.set_attribute(&ConnectValue::CurrentCatalog("sales".to_string()))
        .unwrap();

    assert_eq!(
        driver.set_calls.borrow()[0],
        SetCall {
            kind: HandleKind::Connection,
            attribute: 109,
            bytes: b"sales".to_vec(),
            string_length: 5,
        }
    );
}

#[test]
fn test_set_enum_attribute_uses_integer_tag() {
    let driver = ScriptedDriver::new();
    let conn = ConnectionHandle::new(&driver, RawHandle::null());

    conn.set_attribute(&ConnectValue::TxnIsolation(TxnIsolation::Serializable))
        .unwrap();

    let call = driver.set_calls.borrow()[0].clone();
    assert_eq!(call.attribute, 108);
    assert_eq!(call.bytes, 8u32.to_ne_bytes().to_vec());
    assert_eq!(call.string_length, -5);
}

#[test]
fn test_environment_version_round_trip() {
    let driver = ScriptedDriver::new();
    let env = EnvironmentHandle::new(&driver, RawHandle::null());

    env.set_attribute(&EnvValue::OdbcVersion(OdbcVersion::Odbc3))
        .unwrap();
    let sent = driver.set_calls.borrow()[0].bytes.clone();
    driver.reply(Reply::fixed(sent));

    assert_eq!(
        env.get_attribute(EnvAttribute::OdbcVersion).unwrap(),
        EnvValue::OdbcVersion(OdbcVersion::Odbc3)
    );
    assert_eq!(
        *driver.attribute_requests.borrow(),
        vec![(HandleKind::Environment, 200)]
    );
}

#[test]
fn test_flag_attribute_decodes_sentinel() {
    let driver = ScriptedDriver::new();
    driver
        .reply(Reply::fixed(1u32.to_ne_bytes().to_vec()))
        .reply(Reply::fixed(0u32.to_ne_bytes().to_vec()));

    let conn = ConnectionHandle::new(&driver, RawHandle::null());
    assert_eq!(
        conn.get_attribute(ConnectAttribute::Autocommit).unwrap(),
        ConnectValue::Autocommit(true)
    );
    assert_eq!(
        conn.get_attribute(ConnectAttribute::ConnectionDead).unwrap(),
        ConnectValue::ConnectionDead(false)
    );
    assert_eq!(*driver.offered.borrow(), vec![8, 8]);
}

#[test]
fn test_statement_attributes() {
    let driver = ScriptedDriver::new();
    driver
        .reply(Reply::fixed(3usize.to_ne_bytes().to_vec()))
        .reply(Reply::fixed(30usize.to_ne_bytes().to_vec()))
        .reply(Reply::fixed(0xdead_beefusize.to_ne_bytes().to_vec()));

    let stmt = StatementHandle::new(&driver, RawHandle::null());
    assert_eq!(
        stmt.get_attribute(StmtAttribute::CursorType).unwrap(),
        StmtValue::CursorType(CursorType::Static)
    );
    assert_eq!(
        stmt.get_attribute(StmtAttribute::QueryTimeout).unwrap(),
        StmtValue::QueryTimeout(30)
    );
    assert_eq!(
        stmt.get_attribute(StmtAttribute::AppRowDesc).unwrap(),
        StmtValue::AppRowDesc(OpaqueHandle(0xdead_beef))
    );
}

#[test]
fn test_set_pointer_attribute() {
    let driver = ScriptedDriver::new();
    let stmt = StatementHandle::new(&driver, RawHandle::null());

    stmt.set_attribute(&StmtValue::RowStatusPtr(OpaqueHandle(0x1000)))
        .unwrap();

    let call = driver.set_calls.borrow()[0].clone();
    assert_eq!(call.kind, HandleKind::Statement);
    assert_eq!(call.attribute, 25);
    assert_eq!(call.bytes, 0x1000usize.to_ne_bytes().to_vec());
    assert_eq!(call.string_length, -4);
}

#[test]
fn test_undeclared_enum_code_is_rejected() {
    let driver = ScriptedDriver::new();
    driver.reply(Reply::fixed(3u32.to_ne_bytes().to_vec()));

    let conn = ConnectionHandle::new(&driver, RawHandle::null());
    let result = conn.get_attribute(ConnectAttribute::TxnIsolation);

    assert!(matches!(result, Err(OdbcError::ValidationError(_))));
}

#[test]
fn test_set_warning_is_logged_not_returned() {
    init_logging();
    let driver = ScriptedDriver::new();
    driver
        .set_returns(SqlReturn::SUCCESS_WITH_INFO)
        .post("01S02", 0, "Option value changed");

    let stmt = StatementHandle::new(&driver, RawHandle::null());
    stmt.set_attribute(&StmtValue::CursorType(CursorType::Dynamic))
        .unwrap();

    assert_eq!(driver.set_calls.borrow().len(), 1);
    assert_eq!(driver.record_requests.borrow().len(), 1);
}

#[test]
fn test_set_failure_carries_state() {
    let driver = ScriptedDriver::new();
    driver
        .set_returns(SqlReturn::ERROR)
        .post("HY024", 0, "Invalid attribute value");

    let conn = ConnectionHandle::new(&driver, RawHandle::null());
    let err = conn
        .set_attribute(&ConnectValue::PacketSize(0))
        .unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::InvalidAttributeValue));
}

#[test]
fn test_info_bitmask_and_yes_no() {
    let driver = ScriptedDriver::new();
    driver
        .reply(Reply::fixed(0x0000_000Au32.to_ne_bytes().to_vec()))
        .reply(Reply::text(SqlReturn::SUCCESS, "Y"))
        .reply(Reply::fixed(0x0000_0003u32.to_ne_bytes().to_vec()));

    let conn = ConnectionHandle::new(&driver, RawHandle::null());

    match conn.get_info(InfoType::TxnIsolationOption).unwrap() {
        InfoValue::TxnIsolationOption(mask) => assert_eq!(
            mask,
            TxnIsolationMask {
                read_committed: true,
                serializable: true,
                ..TxnIsolationMask::default()
            }
        ),
        other => panic!("unexpected value {other:?}"),
    }
    assert_eq!(
        conn.get_info(InfoType::AccessibleTables).unwrap(),
        InfoValue::AccessibleTables(true)
    );
    match conn.get_info(InfoType::GetDataExtensions).unwrap() {
        InfoValue::GetDataExtensions(ext) => {
            assert!(ext.any_column);
            assert!(ext.any_order);
            assert!(!ext.block);
        }
        other => panic!("unexpected value {other:?}"),
    }
    assert_eq!(*driver.info_requests.borrow(), vec![72, 19, 81]);
    assert_eq!(*driver.offered.borrow(), vec![8, 256, 8]);
}

#[test]
fn test_every_text_attribute_round_trips() {
    let text_attributes = ConnectAttribute::ALL
        .iter()
        .copied()
        .filter(|a| a.is_text());

    for attribute in text_attributes {
        let driver = ScriptedDriver::new();
        let conn = ConnectionHandle::new(&driver, RawHandle::null());
        let original = attribute
            .decode(odbc_marshal::RawValue::from_bytes(b"value".to_vec()))
            .unwrap();

        conn.set_attribute(&original).unwrap();
        let sent = driver.set_calls.borrow()[0].bytes.clone();
        driver.reply(Reply::text(SqlReturn::SUCCESS, std::str::from_utf8(&sent).unwrap()));

        assert_eq!(conn.get_attribute(attribute).unwrap(), original);
    }
}
