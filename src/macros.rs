//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```no_run
//! use elogger::prelude::*;
//! use elogger::info;
//!
//! let logger = Logger::new("logs/app.log").expect("open log file");
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```no_run
/// # use elogger::prelude::*;
/// # let logger = Logger::new("logs/app.log").unwrap();
/// use elogger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a general-level message.
#[macro_export]
macro_rules! general {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::General, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, LogLevel};
    use tempfile::TempDir;

    fn temp_logger(dir: &TempDir) -> Logger {
        Logger::new(dir.path().join("macros.log")).expect("open log file")
    }

    #[test]
    fn test_log_macro() {
        let dir = TempDir::new().expect("temp dir");
        let logger = temp_logger(&dir);
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Error, "Formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let dir = TempDir::new().expect("temp dir");
        let logger = temp_logger(&dir);
        info!(logger, "Items: {}", 100);
        error!(logger, "Code: {}", 500);
        warning!(logger, "Retry {} of {}", 1, 3);
        debug!(logger, "Count: {}", 5);
        general!(logger, "Phase: {}", "startup");
        critical!(logger, "Failure: {}", "disk full");
        assert_eq!(logger.metrics().lines_appended(), 6);
    }
}
