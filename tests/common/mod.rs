use log::LevelFilter;

/// Routes this crate's log output to the test harness.
///
/// `RUST_LOG` takes precedence over the default `debug` level.
pub fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter(Some(env!("CARGO_PKG_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init();
}
