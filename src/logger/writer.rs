//! Log writer module
//!
//! Chooses the stream log lines are written to. Writes are best-effort: a
//! failed write to a closed stream is not observed by callers.

/// Log output target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    #[default]
    Stderr,
}

impl LogTarget {
    /// Resolve a configured stream name. Anything other than "stdout" keeps
    /// the stderr default.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "stdout" => Self::Stdout,
            _ => Self::Stderr,
        }
    }

    /// Write one finished line to the target stream.
    pub fn write_line(self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Stderr => eprintln!("{line}"),
        }
    }
}
