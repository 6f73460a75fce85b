//! Fixed-capacity append-only byte buffer
//!
//! The queue batches log lines in these buffers before handing them to the
//! background worker. A buffer never grows: its capacity is decided at
//! construction and the backing storage is allocated exactly once.

use std::fmt;

/// Append-only byte buffer with a construction-time fixed capacity.
///
/// `append` refuses a write unless `available()` is *strictly* greater than
/// the incoming length, so a buffer of capacity `c` holds at most `c - 1`
/// bytes. The reserved byte matches the terminator slot of the original
/// fixed-size buffer and keeps the overflow boundary identical.
///
/// A `FixedBuffer` is owned by exactly one slot at a time (current, spare,
/// pending list, or the worker's drain list) and moves between them; it is
/// never shared across threads.
#[derive(Debug)]
pub struct FixedBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl FixedBuffer {
    /// Create an empty buffer that can hold up to `capacity - 1` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Copy `bytes` into the buffer if there is strictly more room than
    /// `bytes.len()`. Returns `false` without modifying the buffer when the
    /// write does not fit; the caller routes the line to a fresh buffer.
    pub fn append(&mut self, bytes: &[u8]) -> bool {
        if self.available() > bytes.len() {
            self.data.extend_from_slice(bytes);
            true
        } else {
            false
        }
    }

    /// Remaining room: capacity minus bytes written so far.
    #[must_use]
    pub fn available(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The fixed capacity this buffer was constructed with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The written prefix.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Move the cursor back to the start. O(1); retains the allocation and
    /// does not zero memory.
    pub fn reset(&mut self) {
        self.data.clear();
    }
}

// Lets the facade render a line straight into a scratch buffer with write!.
// A refused append surfaces as fmt::Error so the caller can fall back.
impl fmt::Write for FixedBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.append(s.as_bytes()) {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}
