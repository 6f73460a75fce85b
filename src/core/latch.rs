//! One-shot countdown latch used as the worker startup barrier

use parking_lot::{Condvar, Mutex};

/// Countdown latch: `wait` blocks until `count_down` has been called `count`
/// times, then every waiter is released.
///
/// The queue creates one with a count of 1; `start()` waits on it and the
/// worker thread counts it down at the top of its loop, so `start()` never
/// returns before the worker is ready to receive data.
pub struct CountDownLatch {
    count: Mutex<usize>,
    cond: Condvar,
}

impl CountDownLatch {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count: Mutex::new(count),
            cond: Condvar::new(),
        }
    }

    /// Block the calling thread until the count reaches zero.
    pub fn wait(&self) {
        let mut count = self.count.lock();
        while *count > 0 {
            self.cond.wait(&mut count);
        }
    }

    /// Decrement the count, waking all waiters when it reaches zero.
    /// Calls past zero are no-ops.
    pub fn count_down(&self) {
        let mut count = self.count.lock();
        if *count > 0 {
            *count -= 1;
            if *count == 0 {
                self.cond.notify_all();
            }
        }
    }

    /// Current count.
    #[must_use]
    pub fn count(&self) -> usize {
        *self.count.lock()
    }
}
