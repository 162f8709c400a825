//! Logger module
//!
//! Structured logging for the HTTP server:
//! - Ordered severity levels gating emission
//! - One record per line, JSON or text encoded
//! - Fatal logging that terminates the process
//!
//! The logger is an explicit object constructed once at startup and handed
//! to the handlers at registration time; it is never mutated while serving.

mod format;
pub mod writer;

pub use format::LogRecord;
pub use writer::LogTarget;

use std::fmt;

use serde_json::Value;

use crate::config::LoggingConfig;

/// Log severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// Parse a configured level name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "fatal" => Some(Self::Fatal),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured logger with a fixed severity threshold.
pub struct Logger {
    min_level: Level,
    format: String,
    target: LogTarget,
}

impl Logger {
    /// Construct a logger from the startup configuration.
    ///
    /// Unrecognized level names fall back to `warn`.
    #[must_use]
    pub fn new(cfg: &LoggingConfig) -> Self {
        Self {
            min_level: Level::parse(&cfg.level).unwrap_or(Level::Warn),
            format: cfg.format.clone(),
            target: LogTarget::from_name(&cfg.output),
        }
    }

    /// Render one record, or `None` when `level` is below the threshold.
    fn render(&self, level: Level, msg: &str, fields: &[(&str, Value)]) -> Option<String> {
        if level < self.min_level {
            return None;
        }
        Some(LogRecord::new(level, msg, fields).render(&self.format))
    }

    /// Emit one record if `level` clears the configured threshold.
    ///
    /// Writes are best-effort; nothing is surfaced to the caller.
    pub fn log(&self, level: Level, msg: &str) {
        self.log_with_fields(level, msg, &[]);
    }

    /// Emit one record with extra structured fields.
    pub fn log_with_fields(&self, level: Level, msg: &str, fields: &[(&str, Value)]) {
        if let Some(line) = self.render(level, msg, fields) {
            self.target.write_line(&line);
        }
    }

    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    pub fn info_with_fields(&self, msg: &str, fields: &[(&str, Value)]) {
        self.log_with_fields(Level::Info, msg, fields);
    }

    pub fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// Log at fatal severity and terminate the process with a non-zero
    /// status. Used only when the server fails to start.
    pub fn fatal(&self, msg: &str) -> ! {
        self.log(Level::Fatal, msg);
        std::process::exit(1);
    }
}
