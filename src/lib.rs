//! # elogger
//!
//! An asynchronous, double-buffered file logger: application threads append
//! formatted lines into fixed-capacity memory buffers without ever blocking
//! on disk I/O, and a single background worker drains filled buffers to an
//! append-only log file.
//!
//! ## How it works
//!
//! - Producers write into the *current* [`FixedBuffer`] under a short mutex
//!   section. When a line does not fit, the buffer moves to a pending list
//!   and the *spare* buffer takes its place, so the swap rarely allocates.
//! - The worker wakes on buffer-full notifications or after the flush
//!   interval, takes the whole pending list in one swap, and writes it to
//!   the file outside the lock.
//! - [`Logger::shutdown`] (or drop) stops the worker only after everything
//!   appended has reached disk and been flushed.
//!
//! ## Example
//!
//! ```no_run
//! use elogger::Logger;
//!
//! let mut logger = Logger::builder()
//!     .path("logs/app.log")
//!     .echo_to_console(true)
//!     .build()
//!     .expect("open log file");
//!
//! logger.info("server started");
//! logger.warning("cache miss rate above 10%");
//! logger.shutdown().expect("clean shutdown");
//! ```

pub mod core;
pub mod macros;
pub mod sink;

pub mod prelude {
    pub use crate::core::{
        AsyncLogging, CountDownLatch, FixedBuffer, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, LogLevel, Result, DEFAULT_BUFFER_CAPACITY, DEFAULT_FLUSH_INTERVAL,
    };
    pub use crate::sink::{ConsoleEcho, LogFile};
}

pub use crate::core::{
    AsyncLogging, CountDownLatch, FixedBuffer, Logger, LoggerBuilder, LoggerError, LoggerMetrics,
    LogLevel, Result, DEFAULT_BUFFER_CAPACITY, DEFAULT_FLUSH_INTERVAL,
};
pub use crate::sink::{ConsoleEcho, LogFile};
