//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six supported levels. All levels share identical formatting and
/// routing; they differ only in the literal tag written into the line.
/// There is no level-based filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    #[default]
    Info,
    Error,
    Warning,
    Debug,
    General,
    Critical,
}

impl LogLevel {
    /// The literal tag used in the formatted line, e.g. `[INFO]`.
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Debug => "DEBUG",
            LogLevel::General => "GENERAL",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// All levels, in declaration order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Info,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Debug,
        LogLevel::General,
        LogLevel::Critical,
    ];
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "DEBUG" => Ok(LogLevel::Debug),
            "GENERAL" => Ok(LogLevel::General),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
