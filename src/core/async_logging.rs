//! Asynchronous buffer-swap log queue
//!
//! Producers append formatted lines into a current `FixedBuffer` under a
//! short mutex section; a dedicated worker thread periodically retires the
//! current buffer, takes the whole pending list in one swap, and drains it to
//! the file sink outside the lock. Double buffering (current + spare) keeps
//! the common-case swap allocation-free, and the timed wait bounds
//! log-to-disk latency even with no traffic.

use crate::core::error::{LoggerError, Result};
use crate::core::fixed_buffer::FixedBuffer;
use crate::core::latch::CountDownLatch;
use crate::core::metrics::LoggerMetrics;
use crate::sink::LogFile;
use crossbeam_channel::{bounded, Receiver, Sender};
use parking_lot::Mutex;
use std::mem;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default maximum time the worker waits with no new data before flushing.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(2);

/// Default capacity of each queue buffer, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Slots pre-reserved in the pending list; the drain list is shrunk back to
/// this size when a burst leaves it holding more than twice as much.
const PENDING_RESERVE: usize = 20;

/// Buffer slots shared between producers and the worker.
///
/// Each `FixedBuffer` is owned by exactly one slot at any instant; moves
/// between slots happen under the mutex, so no buffer is ever mutated by two
/// threads.
struct BufferState {
    current: FixedBuffer,
    spare: Option<FixedBuffer>,
    pending: Vec<FixedBuffer>,
}

struct Shared {
    state: Mutex<BufferState>,
    running: AtomicBool,
    /// Set by the worker when a sink failure killed it; producers observe
    /// this out of band since worker errors cannot surface through `append`.
    write_failed: AtomicBool,
    latch: CountDownLatch,
    metrics: Arc<LoggerMetrics>,
    wake_tx: Sender<()>,
    buffer_capacity: usize,
}

/// The asynchronous logging queue.
///
/// Explicitly owned, no process-wide singleton: the owner controls the
/// lifecycle through [`start`](Self::start) and [`stop`](Self::stop).
///
/// # Example
///
/// ```no_run
/// use elogger::AsyncLogging;
///
/// let mut log = AsyncLogging::new("logs/app.log");
/// log.start().expect("sink must open");
/// log.append(b"a formatted line\n").expect("queue is running");
/// log.stop().expect("clean shutdown");
/// ```
pub struct AsyncLogging {
    shared: Arc<Shared>,
    started: bool,
    worker: Option<thread::JoinHandle<Result<()>>>,
    wake_rx: Option<Receiver<()>>,
    path: PathBuf,
    flush_interval: Duration,
}

impl AsyncLogging {
    /// Create a queue draining to `path`, with the default flush interval
    /// (2 s) and buffer capacity (1024 bytes).
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_config(path, DEFAULT_FLUSH_INTERVAL, DEFAULT_BUFFER_CAPACITY)
    }

    /// Create a queue with an explicit flush interval and buffer capacity.
    #[must_use]
    pub fn with_config(
        path: impl Into<PathBuf>,
        flush_interval: Duration,
        buffer_capacity: usize,
    ) -> Self {
        // Capacity 1 wakes the worker at most once per cycle; a pending
        // token is as good as many.
        let (wake_tx, wake_rx) = bounded(1);
        let shared = Arc::new(Shared {
            state: Mutex::new(BufferState {
                current: FixedBuffer::with_capacity(buffer_capacity),
                spare: Some(FixedBuffer::with_capacity(buffer_capacity)),
                pending: Vec::with_capacity(PENDING_RESERVE),
            }),
            running: AtomicBool::new(false),
            write_failed: AtomicBool::new(false),
            latch: CountDownLatch::new(1),
            metrics: Arc::new(LoggerMetrics::new()),
            wake_tx,
            buffer_capacity,
        });
        Self {
            shared,
            started: false,
            worker: None,
            wake_rx: Some(wake_rx),
            path: path.into(),
            flush_interval,
        }
    }

    /// Open the sink and launch the background worker.
    ///
    /// The sink is opened before the worker spawns, so a bad path or missing
    /// permission fails here and no thread is left behind. Does not return
    /// until the worker has signalled (through the startup latch) that it is
    /// inside its loop and ready to receive appended data.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(LoggerError::AlreadyStarted);
        }
        let sink = LogFile::new(&self.path)?;
        let Some(wake_rx) = self.wake_rx.take() else {
            return Err(LoggerError::AlreadyStarted);
        };

        self.shared.running.store(true, Ordering::Release);
        let shared = Arc::clone(&self.shared);
        let flush_interval = self.flush_interval;
        let handle = thread::Builder::new()
            .name("elogger-worker".to_string())
            .spawn(move || worker_loop(&shared, &wake_rx, sink, flush_interval))?;
        self.worker = Some(handle);

        self.shared.latch.wait();
        self.started = true;
        Ok(())
    }

    /// Append one formatted line. Callable concurrently from any thread.
    ///
    /// The caller only ever contends on the short buffer-swap critical
    /// section; no I/O happens here. If the line does not fit the current
    /// buffer, the buffer is retired to the pending list, the spare (or a
    /// fresh allocation) becomes current, and the whole line lands in it.
    ///
    /// # Errors
    ///
    /// [`LoggerError::NotStarted`] before `start`, [`LoggerError::Stopped`]
    /// after `stop`, [`LoggerError::WorkerFailed`] once the worker has died
    /// on a sink failure.
    pub fn append(&self, line: &[u8]) -> Result<()> {
        if !self.started {
            self.shared.metrics.record_rejected();
            return Err(LoggerError::NotStarted);
        }
        if self.shared.write_failed.load(Ordering::Acquire) {
            self.shared.metrics.record_rejected();
            return Err(LoggerError::WorkerFailed);
        }

        let mut wake = false;
        {
            let mut state = self.shared.state.lock();
            // Checked under the lock: the worker's final sweep takes this
            // lock after `running` is cleared, so a line accepted here is
            // always drained.
            if !self.shared.running.load(Ordering::Acquire) {
                self.shared.metrics.record_rejected();
                return Err(LoggerError::Stopped);
            }
            if !state.current.append(line) {
                let fresh = state.spare.take().unwrap_or_else(|| {
                    FixedBuffer::with_capacity(self.shared.buffer_capacity)
                });
                let filled = mem::replace(&mut state.current, fresh);
                state.pending.push(filled);
                self.shared.metrics.record_buffer_swap();

                if !state.current.append(line) {
                    // Line longer than a whole buffer: give it a dedicated
                    // oversized buffer so it is never truncated or split.
                    let mut oversized = FixedBuffer::with_capacity(line.len() + 1);
                    let accepted = oversized.append(line);
                    debug_assert!(accepted);
                    state.pending.push(oversized);
                }
                wake = true;
            }
        }

        self.shared.metrics.record_appended(line.len() as u64);
        if wake {
            // Non-blocking: a token already in flight wakes the worker just
            // as well.
            let _ = self.shared.wake_tx.try_send(());
        }
        Ok(())
    }

    /// Stop the worker and block until it has drained every line appended
    /// before this call and flushed the sink.
    ///
    /// # Errors
    ///
    /// Propagates the worker's terminal sink error if it died mid-run;
    /// [`LoggerError::Stopped`] on a second call.
    pub fn stop(&mut self) -> Result<()> {
        if !self.started {
            return Err(LoggerError::NotStarted);
        }
        if !self.shared.running.swap(false, Ordering::AcqRel) {
            return Err(LoggerError::Stopped);
        }
        let _ = self.shared.wake_tx.try_send(());
        match self.worker.take() {
            Some(handle) => match handle.join() {
                Ok(result) => result,
                Err(_) => Err(LoggerError::WorkerPanicked),
            },
            None => Err(LoggerError::Stopped),
        }
    }

    /// Whether the queue is accepting appends.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started && self.shared.running.load(Ordering::Acquire)
    }

    /// Queue metrics.
    #[must_use]
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }

    /// The sink path this queue drains to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for AsyncLogging {
    fn drop(&mut self) {
        if self.worker.is_some() {
            if let Err(e) = self.stop() {
                eprintln!("[LOGGER ERROR] failed to stop logging during drop: {}", e);
            }
        }
    }
}

fn worker_loop(
    shared: &Shared,
    wake_rx: &Receiver<()>,
    mut sink: LogFile,
    flush_interval: Duration,
) -> Result<()> {
    // Release start() before any I/O.
    shared.latch.count_down();

    let result = drain_until_stopped(shared, wake_rx, &mut sink, flush_interval);
    if let Err(ref e) = result {
        shared.metrics.record_write_error();
        shared.write_failed.store(true, Ordering::Release);
        eprintln!("[LOGGER ERROR] background worker terminated: {}", e);
    }
    result
}

fn drain_until_stopped(
    shared: &Shared,
    wake_rx: &Receiver<()>,
    sink: &mut LogFile,
    flush_interval: Duration,
) -> Result<()> {
    let capacity = shared.buffer_capacity;
    // Worker-local replacement pair: refills the current and spare slots each
    // cycle without allocating under the lock.
    let mut replacement = Some(FixedBuffer::with_capacity(capacity));
    let mut spare_refill = Some(FixedBuffer::with_capacity(capacity));
    let mut to_write: Vec<FixedBuffer> = Vec::with_capacity(PENDING_RESERVE);

    while shared.running.load(Ordering::Acquire) {
        if shared.state.lock().pending.is_empty() {
            // Timed wait doubles as the periodic flush trigger.
            let _ = wake_rx.recv_timeout(flush_interval);
        }

        {
            let mut state = shared.state.lock();
            // Retire the current buffer even when empty or partial so a slow
            // trickle of lines still reaches disk every interval.
            let fresh = replacement
                .take()
                .unwrap_or_else(|| FixedBuffer::with_capacity(capacity));
            let filled = mem::replace(&mut state.current, fresh);
            state.pending.push(filled);
            if state.spare.is_none() {
                state.spare = spare_refill.take();
            }
            mem::swap(&mut state.pending, &mut to_write);
        }

        // The only I/O in the loop, outside the lock.
        for buffer in &to_write {
            if !buffer.is_empty() {
                sink.append(buffer.as_bytes())?;
            }
        }
        sink.flush()?;
        shared.metrics.record_flush_cycle();

        while replacement.is_none() || spare_refill.is_none() {
            match to_write.pop() {
                Some(mut buffer) => {
                    buffer.reset();
                    if replacement.is_none() {
                        replacement = Some(buffer);
                    } else {
                        spare_refill = Some(buffer);
                    }
                }
                None => break,
            }
        }
        to_write.clear();
        if to_write.capacity() > 2 * PENDING_RESERVE {
            to_write.shrink_to(PENDING_RESERVE);
        }
    }

    // Stop observed: one last sweep so nothing accepted before stop() is
    // lost, then a final flush.
    {
        let mut state = shared.state.lock();
        let fresh = replacement
            .take()
            .unwrap_or_else(|| FixedBuffer::with_capacity(capacity));
        let filled = mem::replace(&mut state.current, fresh);
        state.pending.push(filled);
        mem::swap(&mut state.pending, &mut to_write);
    }
    for buffer in &to_write {
        if !buffer.is_empty() {
            sink.append(buffer.as_bytes())?;
        }
    }
    sink.flush()?;
    shared.metrics.record_flush_cycle();
    Ok(())
}
