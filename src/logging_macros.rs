#![warn(clippy::all, rust_2018_idioms)]

/// Logging macros that prefix every message with `[file:module:line]`.
///
/// `log_*` write through the `log` facade and through `tracing`;
/// `trace_debug!` writes to `tracing` only.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

/*
Log level guidance:

DEBUG: field edits, preset selections, config lookups
INFO: prompt generated, prompt copied, app start and shutdown
WARN: config file ignored, fallbacks
ERROR: clipboard write failed

Never log from per-frame render paths; only from user actions.
*/
