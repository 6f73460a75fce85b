//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Sink could not be opened; fatal at start, the worker never spawns
    #[error("failed to open log file '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Sink refused a write; fatal to the worker thread
    #[error("failed to write to log file '{path}': {source}")]
    SinkWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Sink refused a flush; fatal to the worker thread
    #[error("failed to flush log file '{path}': {source}")]
    SinkFlush {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Sink used after `close()`
    #[error("log file '{path}' is closed")]
    SinkClosed { path: String },

    /// Generic IO error (thread spawn and similar)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Append before `start()`
    #[error("logging has not been started")]
    NotStarted,

    /// `start()` called twice
    #[error("logging already started")]
    AlreadyStarted,

    /// Append after `stop()`, or `stop()` called twice
    #[error("logging already stopped")]
    Stopped,

    /// The worker terminated after a sink failure; appended data is no
    /// longer being drained
    #[error("background worker terminated after a write failure")]
    WorkerFailed,

    /// The worker thread panicked
    #[error("background worker panicked")]
    WorkerPanicked,

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create a sink open error with path context
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a sink write error with path context
    pub fn sink_write(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a sink flush error with path context
    pub fn sink_flush(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkFlush {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
