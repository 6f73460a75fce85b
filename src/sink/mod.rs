//! Sink implementations the worker and facade write into

pub mod console;
pub mod file;

pub use console::ConsoleEcho;
pub use file::LogFile;
