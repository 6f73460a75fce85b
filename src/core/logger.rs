//! Logger facade: line formatting over the async queue

use super::{
    async_logging::{AsyncLogging, DEFAULT_BUFFER_CAPACITY, DEFAULT_FLUSH_INTERVAL},
    error::{LoggerError, Result},
    fixed_buffer::FixedBuffer,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    timestamp::now_formatted,
};
use crate::sink::ConsoleEcho;
use std::cell::RefCell;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Duration;

/// Capacity of the per-thread scratch buffer a line is rendered into before
/// it is handed to the queue.
const SCRATCH_CAPACITY: usize = 4096;

thread_local! {
    static SCRATCH: RefCell<FixedBuffer> =
        RefCell::new(FixedBuffer::with_capacity(SCRATCH_CAPACITY));
    static THREAD_TAG: String = thread_tag();
}

/// Cached per-thread tag, e.g. `Thread-12`.
///
/// `ThreadId` exposes no stable numeric accessor, so the digits are lifted
/// from its Debug form (`ThreadId(12)`).
fn thread_tag() -> String {
    let id = format!("{:?}", std::thread::current().id());
    let digits: String = id.chars().filter(char::is_ascii_digit).collect();
    format!("Thread-{}", digits)
}

/// The user-facing logger.
///
/// Formats each message as
/// `[<timestamp>] [Thread-<id>] [<LEVEL>] <message>\n` and forwards the
/// bytes to the [`AsyncLogging`] queue. Construction starts the background
/// worker; [`shutdown`](Self::shutdown) (or drop) stops it and drains
/// everything to disk.
///
/// # Example
///
/// ```no_run
/// use elogger::Logger;
///
/// let mut logger = Logger::new("logs/app.log").expect("open log file");
/// logger.info("server started");
/// logger.error("connection refused");
/// logger.shutdown().expect("clean shutdown");
/// ```
pub struct Logger {
    queue: AsyncLogging,
    echo: Option<ConsoleEcho>,
}

impl Logger {
    /// Create a logger writing to `path` with default settings (2 s flush
    /// interval, no console echo) and start its worker.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::builder().path(path).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use elogger::Logger;
    /// use std::time::Duration;
    ///
    /// let logger = Logger::builder()
    ///     .path("logs/app.log")
    ///     .flush_interval(Duration::from_secs(1))
    ///     .echo_to_console(true)
    ///     .build()
    ///     .expect("open log file");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Format and enqueue one message at the given level.
    ///
    /// Never fails observably: an append rejected by the queue (worker dead,
    /// logger stopped) is counted in the metrics and reported once on
    /// stderr. Worker-side sink errors surface from [`shutdown`](Self::shutdown).
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        let message = message.as_ref();
        let timestamp = now_formatted();

        SCRATCH.with(|cell| {
            let mut scratch = cell.borrow_mut();
            scratch.reset();
            let fits = THREAD_TAG.with(|tag| {
                writeln!(
                    &mut *scratch,
                    "[{}] [{}] [{}] {}",
                    timestamp,
                    tag,
                    level.tag(),
                    message
                )
                .is_ok()
            });
            if fits {
                self.dispatch(scratch.as_bytes());
            } else {
                // Message larger than the scratch buffer: render on the heap.
                let line = THREAD_TAG.with(|tag| {
                    format!("[{}] [{}] [{}] {}\n", timestamp, tag, level.tag(), message)
                });
                self.dispatch(line.as_bytes());
            }
        });
    }

    fn dispatch(&self, line: &[u8]) {
        if let Err(e) = self.queue.append(line) {
            eprintln!("[LOGGER ERROR] dropped a log line: {}", e);
        }
        if let Some(ref echo) = self.echo {
            echo.write(line);
        }
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn general(&self, message: impl AsRef<str>) {
        self.log(LogLevel::General, message);
    }

    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Critical, message);
    }

    /// Stop the worker, draining every line logged so far to disk.
    ///
    /// # Errors
    ///
    /// Propagates a sink failure the worker died on, or
    /// [`LoggerError::Stopped`] on a second call.
    pub fn shutdown(&mut self) -> Result<()> {
        self.queue.stop()
    }

    /// Whether the background worker is accepting lines.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.queue.is_running()
    }

    /// Queue metrics for observability.
    #[must_use]
    pub fn metrics(&self) -> &LoggerMetrics {
        self.queue.metrics()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
pub struct LoggerBuilder {
    path: Option<PathBuf>,
    flush_interval: Duration,
    buffer_capacity: usize,
    echo_to_console: bool,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: None,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            echo_to_console: false,
        }
    }

    /// Set the log file path (required)
    #[must_use = "builder methods return a new value"]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the maximum time the worker waits before flushing (default 2 s)
    #[must_use = "builder methods return a new value"]
    pub fn flush_interval(mut self, interval: Duration) -> Self {
        self.flush_interval = interval;
        self
    }

    /// Set the capacity of each queue buffer (default 1024 bytes)
    #[must_use = "builder methods return a new value"]
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity;
        self
    }

    /// Also mirror every line to stdout, synchronously (default off)
    #[must_use = "builder methods return a new value"]
    pub fn echo_to_console(mut self, echo: bool) -> Self {
        self.echo_to_console = echo;
        self
    }

    /// Build the logger and start its background worker.
    ///
    /// # Errors
    ///
    /// [`LoggerError::InvalidConfiguration`] when no path was given or the
    /// buffer capacity is too small; [`LoggerError::SinkOpen`] when the log
    /// file cannot be opened.
    pub fn build(self) -> Result<Logger> {
        let path = self
            .path
            .ok_or_else(|| LoggerError::config("LoggerBuilder", "log file path is required"))?;
        if self.buffer_capacity < 2 {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "buffer capacity must be at least 2 bytes",
            ));
        }

        let mut queue = AsyncLogging::with_config(path, self.flush_interval, self.buffer_capacity);
        queue.start()?;
        Ok(Logger {
            queue,
            echo: self.echo_to_console.then(ConsoleEcho::new),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builder_requires_path() {
        let result = Logger::builder().build();
        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_tiny_capacity() {
        let dir = TempDir::new().expect("temp dir");
        let result = Logger::builder()
            .path(dir.path().join("tiny.log"))
            .buffer_capacity(1)
            .build();
        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_worker_running_after_construction() {
        let dir = TempDir::new().expect("temp dir");
        let logger = Logger::new(dir.path().join("running.log")).expect("build");
        assert!(logger.is_running());
    }

    #[test]
    fn test_line_shape_for_all_levels() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("shape.log");
        let mut logger = Logger::builder()
            .path(&path)
            .flush_interval(Duration::from_millis(50))
            .build()
            .expect("build");

        logger.info("info message");
        logger.error("error message");
        logger.warning("warning message");
        logger.debug("debug message");
        logger.general("general message");
        logger.critical("critical message");
        logger.shutdown().expect("shutdown");

        let content = fs::read_to_string(&path).expect("read");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6);

        let expected = [
            ("INFO", "info message"),
            ("ERROR", "error message"),
            ("WARNING", "warning message"),
            ("DEBUG", "debug message"),
            ("GENERAL", "general message"),
            ("CRITICAL", "critical message"),
        ];
        for (line, (tag, message)) in lines.iter().zip(expected) {
            // [timestamp] [Thread-id] [LEVEL] message
            let parts: Vec<&str> = line.splitn(4, "] ").collect();
            assert_eq!(parts.len(), 4, "malformed line: {}", line);
            assert!(parts[0].starts_with('['), "bad timestamp field: {}", line);
            assert!(parts[1].starts_with("[Thread-"), "bad thread field: {}", line);
            assert_eq!(parts[2], format!("[{}", tag));
            assert_eq!(parts[3], message);
        }
    }

    #[test]
    fn test_log_after_shutdown_does_not_panic() {
        let dir = TempDir::new().expect("temp dir");
        let mut logger = Logger::new(dir.path().join("late.log")).expect("build");
        logger.info("before shutdown");
        logger.shutdown().expect("shutdown");
        logger.info("after shutdown");
        assert_eq!(logger.metrics().rejected_appends(), 1);
    }

    #[test]
    fn test_oversized_message_falls_back_to_heap() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("huge.log");
        let mut logger = Logger::builder()
            .path(&path)
            .flush_interval(Duration::from_millis(50))
            .build()
            .expect("build");

        let huge = "y".repeat(SCRATCH_CAPACITY * 2);
        logger.info(&huge);
        logger.shutdown().expect("shutdown");

        let content = fs::read_to_string(&path).expect("read");
        assert!(content.contains(&huge));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_thread_tag_shape() {
        let tag = thread_tag();
        assert!(tag.starts_with("Thread-"));
        assert!(tag["Thread-".len()..].chars().all(|c| c.is_ascii_digit()));
    }
}
