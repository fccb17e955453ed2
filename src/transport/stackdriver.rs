//! Google Cloud Logging (Stackdriver) JSON lines
//!
//! Emits one JSON object per event in the structured format picked up by the
//! Cloud Logging agent. See
//! <https://cloud.google.com/logging/docs/reference/v2/rest/v2/LogEntry>.

use std::io::Write;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::{Output, Transport};
use crate::event::{Context, LogEvent};
use crate::level::LogLevel;

/// Cloud Logging severities
///
/// See <https://cloud.google.com/logging/docs/reference/v2/rest/v2/LogEntry#logseverity>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StackdriverSeverity {
    Default,
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

impl From<LogLevel> for StackdriverSeverity {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => StackdriverSeverity::Default,
            LogLevel::Debug => StackdriverSeverity::Debug,
            LogLevel::Info => StackdriverSeverity::Info,
            LogLevel::Warn => StackdriverSeverity::Warning,
            LogLevel::Error => StackdriverSeverity::Error,
        }
    }
}

#[derive(Serialize)]
struct Labels<'a> {
    namespace: &'a str,
}

#[derive(Serialize)]
struct Entry<'a> {
    severity: StackdriverSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a Context>,
    #[serde(rename = "logging.googleapis.com/labels")]
    labels: Labels<'a>,
}

/// Transport writing Cloud Logging structured JSON lines
#[derive(Debug, Clone)]
pub struct StackdriverTransport {
    output: Output,
}

impl Default for StackdriverTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl StackdriverTransport {
    /// Entries to stdout, serialization failures to stderr
    pub fn new() -> Self {
        Self {
            output: Output::Std,
        }
    }

    /// Write every line, including failure reports, to the given writer
    pub fn with_writer<W>(writer: Arc<Mutex<W>>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            output: Output::single(writer),
        }
    }

    /// Write entries to `regular` and serialization failures to `alert`
    pub fn with_writers<R, A>(regular: Arc<Mutex<R>>, alert: Arc<Mutex<A>>) -> Self
    where
        R: Write + Send + 'static,
        A: Write + Send + 'static,
    {
        Self {
            output: Output::Writers { regular, alert },
        }
    }

    /// Render an event as a JSON line
    ///
    /// Failures are reported as `Err` holding the fallback line.
    pub fn render(event: &LogEvent) -> Result<String, String> {
        let entry = Entry {
            severity: event.level.into(),
            message: event.message.as_deref(),
            context: event.context.as_ref(),
            labels: Labels {
                namespace: event.namespace.as_deref().unwrap_or("default"),
            },
        };
        render_or_fallback(&entry)
    }

    fn write(&self, rendered: Result<String, String>) {
        match rendered {
            Ok(line) => self.output.write_line(false, &line),
            Err(fallback) => self.output.write_line(true, &fallback),
        }
    }
}

fn render_or_fallback<T: Serialize>(entry: &T) -> Result<String, String> {
    serde_json::to_string(entry).map_err(|err| {
        serde_json::json!({
            "severity": StackdriverSeverity::Error,
            "message": "Error serializing log object.",
            "error": err.to_string(),
        })
        .to_string()
    })
}

impl Transport for StackdriverTransport {
    fn push(&self, event: LogEvent) {
        self.write(Self::render(&event));
    }
}
