//! Core logger types

pub mod async_logging;
pub mod error;
pub mod fixed_buffer;
pub mod latch;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use async_logging::{AsyncLogging, DEFAULT_BUFFER_CAPACITY, DEFAULT_FLUSH_INTERVAL};
pub use error::{LoggerError, Result};
pub use fixed_buffer::FixedBuffer;
pub use latch::CountDownLatch;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::{format_timestamp, now_formatted};
