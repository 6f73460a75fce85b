//! Synchronous stdout mirror for the console-echo option

use std::io::{self, Write};

/// Writes the exact line bytes to stdout, synchronously, when the facade was
/// built with console echo enabled.
///
/// Echoing is best effort: a console write failure never disturbs logging,
/// so errors are swallowed here.
#[derive(Debug, Default)]
pub struct ConsoleEcho;

impl ConsoleEcho {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Mirror a formatted line to stdout.
    pub fn write(&self, bytes: &[u8]) {
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(bytes);
        let _ = stdout.flush();
    }
}
