//! Logging helpers over the `log` facade.
//!
//! Frontends pick the sink: the browser client wires `console_log`,
//! native binaries may leave it unset.

/// Log an info message
pub fn info(msg: &str) {
    ::log::info!("{}", msg);
}

/// Log a warning message
pub fn warn(msg: &str) {
    ::log::warn!("{}", msg);
}

/// Log an error message
pub fn error(msg: &str) {
    ::log::error!("{}", msg);
}

/// Log a debug message with a label
pub fn debug(label: &str, msg: &str) {
    ::log::debug!("[{}] {}", label, msg);
}

/// Log an action being performed
pub fn action(name: &str, details: &str) {
    ::log::debug!("action {}: {}", name, details);
}
