//! Logger metrics for observability
//!
//! Counters for monitoring queue health: appended volume, buffer-full
//! promotions, flush cycles, and failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// Shared between producers, the worker thread, and the owner; all counters
/// use relaxed atomics since they are advisory.
///
/// # Example
///
/// ```
/// use elogger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_appended(42);
/// assert_eq!(metrics.lines_appended(), 1);
/// assert_eq!(metrics.bytes_appended(), 42);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines accepted by the queue
    lines_appended: AtomicU64,

    /// Bytes accepted by the queue
    bytes_appended: AtomicU64,

    /// Buffer-full promotions (current buffer retired to the pending list
    /// from the producer side)
    buffers_swapped: AtomicU64,

    /// Completed worker drain cycles (each ends with a sink flush)
    flush_cycles: AtomicU64,

    /// Sink write/flush failures observed by the worker
    write_errors: AtomicU64,

    /// Appends rejected before start, after stop, or after a worker failure
    rejected_appends: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_appended: AtomicU64::new(0),
            bytes_appended: AtomicU64::new(0),
            buffers_swapped: AtomicU64::new(0),
            flush_cycles: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
            rejected_appends: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_appended(&self) -> u64 {
        self.lines_appended.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_appended(&self) -> u64 {
        self.bytes_appended.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn buffers_swapped(&self) -> u64 {
        self.buffers_swapped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn flush_cycles(&self) -> u64 {
        self.flush_cycles.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_errors(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected_appends(&self) -> u64 {
        self.rejected_appends.load(Ordering::Relaxed)
    }

    /// Record one accepted line of `bytes` length
    #[inline]
    pub fn record_appended(&self, bytes: u64) {
        self.lines_appended.fetch_add(1, Ordering::Relaxed);
        self.bytes_appended.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Record a buffer-full promotion
    #[inline]
    pub fn record_buffer_swap(&self) -> u64 {
        self.buffers_swapped.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a completed drain cycle
    #[inline]
    pub fn record_flush_cycle(&self) -> u64 {
        self.flush_cycles.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a sink failure
    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a rejected append
    #[inline]
    pub fn record_rejected(&self) -> u64 {
        self.rejected_appends.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.lines_appended.store(0, Ordering::Relaxed);
        self.bytes_appended.store(0, Ordering::Relaxed);
        self.buffers_swapped.store(0, Ordering::Relaxed);
        self.flush_cycles.store(0, Ordering::Relaxed);
        self.write_errors.store(0, Ordering::Relaxed);
        self.rejected_appends.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_appended: AtomicU64::new(self.lines_appended()),
            bytes_appended: AtomicU64::new(self.bytes_appended()),
            buffers_swapped: AtomicU64::new(self.buffers_swapped()),
            flush_cycles: AtomicU64::new(self.flush_cycles()),
            write_errors: AtomicU64::new(self.write_errors()),
            rejected_appends: AtomicU64::new(self.rejected_appends()),
        }
    }
}
