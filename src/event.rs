//! Log callback system.
//!
//! Widgets in this crate clamp out-of-range input silently; the clamp is
//! still observable through a process-wide log callback so that misbehaving
//! callers (stale coordinates, off-by-one ranges) can be diagnosed.

use std::sync::{Mutex, OnceLock};

use crate::range::CharRange;

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback().lock().expect("log callback lock");
    *guard = Some(Box::new(callback));
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}

/// Report a range mutator input that had to be clamped.
pub(crate) fn log_clamped_range(operation: &str, requested: CharRange, clamped: CharRange) {
    emit_log(
        LogLevel::Debug,
        &format!(
            "{operation}: range {}..{} clamped to {}..{}",
            requested.start, requested.end, clamped.start, clamped.end
        ),
    );
}
