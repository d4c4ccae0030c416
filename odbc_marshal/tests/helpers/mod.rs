pub mod driver;

#[allow(unused_imports)]
pub use driver::{PostedRecord, Reply, ScriptedDriver, SetCall};

/// Routes `log` output through the test harness.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
