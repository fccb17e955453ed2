//! Human-readable console output
//!
//! Each event becomes one line:
//!
//! ```text
//! [2026-01-21 14:30:45 +0100] App/api: user created {"id":7}
//! ```
//!
//! Trace, debug and info go to stdout; warnings and errors go to stderr.

use std::io::Write;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone};

use super::{Output, Transport};
use crate::event::LogEvent;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Default transport printing one line per event
#[derive(Debug, Clone)]
pub struct ConsoleTransport {
    output: Output,
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTransport {
    /// Print to stdout and stderr
    pub fn new() -> Self {
        Self {
            output: Output::Std,
        }
    }

    /// Print every line to the given writer
    pub fn with_writer<W>(writer: Arc<Mutex<W>>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            output: Output::single(writer),
        }
    }

    /// Print trace, debug and info to `regular`; warnings and errors to `alert`
    pub fn with_writers<R, A>(regular: Arc<Mutex<R>>, alert: Arc<Mutex<A>>) -> Self
    where
        R: Write + Send + 'static,
        A: Write + Send + 'static,
    {
        Self {
            output: Output::Writers { regular, alert },
        }
    }
}

/// Format an event as a single console line
pub fn format_line<Tz>(event: &LogEvent, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut line = format!(
        "[{}] {}: {}",
        timestamp.format(TIMESTAMP_FORMAT),
        event.namespace.as_deref().unwrap_or_default(),
        event.message.as_deref().unwrap_or_default()
    );

    if let Some(context) = &event.context {
        if let Ok(json) = serde_json::to_string(context) {
            line.push(' ');
            line.push_str(&json);
        }
    }

    if let Some(error) = &event.error {
        line.push_str(" error=");
        line.push_str(&error.to_string());
    }

    line
}

impl Transport for ConsoleTransport {
    fn push(&self, event: LogEvent) {
        let line = format_line(&event, &Local::now());
        self.output.write_line(event.level.is_alert(), &line);
    }
}
