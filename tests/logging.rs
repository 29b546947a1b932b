//! Checks the log records emitted for rejected operations.
//!
//! This installs its own global logger, so it lives in a separate test binary.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use mathlib::{Vector, VectorError};

struct Capture(Mutex<Vec<(Level, String)>>);

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target().starts_with(env!("CARGO_PKG_NAME"))
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.0.lock().unwrap())
}

#[test]
fn rejected_operations_are_logged() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let err = mathlib::add(&Vector::zeros(2), &Vector::zeros(3)).unwrap_err();
    assert_eq!(err, VectorError::DimensionMismatch { left: 2, right: 3 });
    assert_eq!(
        take_records(),
        [(
            Level::Debug,
            "add: rejecting operands of dimension 2 and 3".to_string()
        )]
    );

    mathlib::cross(&Vector::zeros(2), &Vector::zeros(2)).unwrap_err();
    assert_eq!(
        take_records(),
        [(
            Level::Debug,
            "cross: rejecting operands of dimension 2".to_string()
        )]
    );

    // Successful operations stay quiet.
    mathlib::add(&Vector::zeros(2), &Vector::zeros(2)).unwrap();
    mathlib::cross(&Vector::zeros(3), &Vector::zeros(3)).unwrap();
    assert!(take_records().is_empty());
}
