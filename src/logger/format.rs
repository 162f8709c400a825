//! Log record format module
//!
//! Renders one log record per line in either of two encodings:
//! - `json` (one JSON object per line, used by the startup configuration)
//! - `text` (key=value pairs, the fallback for any other format name)

use chrono::{DateTime, Local};
use serde_json::{Map, Value};

use super::Level;

/// A single log record, created and rendered at emission time.
#[derive(Debug)]
pub struct LogRecord<'a> {
    time: DateTime<Local>,
    level: Level,
    msg: &'a str,
    fields: &'a [(&'a str, Value)],
}

impl<'a> LogRecord<'a> {
    /// Create a record stamped with the current local time.
    #[must_use]
    pub fn new(level: Level, msg: &'a str, fields: &'a [(&'a str, Value)]) -> Self {
        Self {
            time: Local::now(),
            level,
            msg,
            fields,
        }
    }

    /// Render the record according to the configured format name.
    #[must_use]
    pub fn render(&self, format: &str) -> String {
        match format {
            "json" => self.render_json(),
            _ => self.render_text(),
        }
    }

    fn render_json(&self) -> String {
        let mut map = Map::new();
        map.insert("time".to_string(), Value::String(self.time.to_rfc3339()));
        map.insert(
            "level".to_string(),
            Value::String(self.level.as_str().to_string()),
        );
        map.insert("msg".to_string(), Value::String(self.msg.to_string()));
        for (name, value) in self.fields {
            map.insert((*name).to_string(), value.clone());
        }
        Value::Object(map).to_string()
    }

    fn render_text(&self) -> String {
        let mut line = format!(
            "time=\"{}\" level={} msg={:?}",
            self.time.to_rfc3339(),
            self.level,
            self.msg
        );
        for (name, value) in self.fields {
            line.push_str(&format!(" {name}={value}"));
        }
        line
    }
}
