//! Transports
//!
//! A transport receives events that have passed the root logger's level filter
//! and disposes of them: printing, shipping as JSON, buffering or discarding.
//! Transports never report back to the logger; any failure handling is their
//! own concern.

mod buffer;
mod console;
mod stackdriver;
mod tracing_bridge;

pub use buffer::BufferTransport;
pub use console::{format_line, ConsoleTransport};
pub use stackdriver::{StackdriverSeverity, StackdriverTransport};
pub use tracing_bridge::TracingTransport;

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::event::LogEvent;

/// Sink for finished log events
///
/// Events arrive with their namespace fully composed.
pub trait Transport: Send + Sync {
    fn push(&self, event: LogEvent);
}

impl<F> Transport for F
where
    F: Fn(LogEvent) + Send + Sync,
{
    fn push(&self, event: LogEvent) {
        self(event)
    }
}

/// A transport that drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardTransport;

impl Transport for DiscardTransport {
    #[inline]
    fn push(&self, _event: LogEvent) {}
}

type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Destination for text lines written by the printing transports
#[derive(Clone)]
pub(crate) enum Output {
    /// stdout for regular lines, stderr for alerts
    Std,
    /// Injected writers; both may be the same one
    Writers {
        regular: SharedWriter,
        alert: SharedWriter,
    },
}

impl Output {
    pub(crate) fn single(writer: SharedWriter) -> Self {
        Output::Writers {
            regular: Arc::clone(&writer),
            alert: writer,
        }
    }

    /// Write one line; write errors are ignored
    pub(crate) fn write_line(&self, alert: bool, line: &str) {
        match self {
            Output::Std if alert => {
                let _ = writeln!(io::stderr().lock(), "{}", line);
            }
            Output::Std => {
                let _ = writeln!(io::stdout().lock(), "{}", line);
            }
            Output::Writers { regular, alert: alert_writer } => {
                let target = if alert { alert_writer } else { regular };
                if let Ok(mut writer) = target.lock() {
                    let _ = writeln!(writer, "{}", line);
                    let _ = writer.flush();
                }
            }
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Std => f.write_str("Std"),
            Output::Writers { .. } => f.write_str("Writers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;

    #[test]
    fn test_transports_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiscardTransport>();
        assert_send_sync::<ConsoleTransport>();
        assert_send_sync::<StackdriverTransport>();
        assert_send_sync::<BufferTransport>();
        assert_send_sync::<TracingTransport>();
    }

    #[test]
    fn test_closure_transport() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let transport: Box<dyn Transport> = Box::new(move |event: LogEvent| {
            sink.lock().unwrap().push(event.level);
        });

        transport.push(LogEvent::new(LogLevel::Warn));
        transport.push(LogEvent::new(LogLevel::Info));

        assert_eq!(*seen.lock().unwrap(), vec![LogLevel::Warn, LogLevel::Info]);
    }

    fn contents(writer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(writer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_output_routes_alerts_to_alert_writer() {
        let regular = Arc::new(Mutex::new(Vec::<u8>::new()));
        let alert = Arc::new(Mutex::new(Vec::<u8>::new()));
        let output = Output::Writers {
            regular: regular.clone(),
            alert: alert.clone(),
        };

        output.write_line(false, "plain");
        output.write_line(true, "loud");

        assert_eq!(contents(&regular), "plain\n");
        assert_eq!(contents(&alert), "loud\n");
    }

    #[test]
    fn test_single_output_shares_one_writer() {
        let writer = Arc::new(Mutex::new(Vec::<u8>::new()));
        let output = Output::single(writer.clone());

        output.write_line(false, "a");
        output.write_line(true, "b");

        assert_eq!(contents(&writer), "a\nb\n");
        assert_eq!(format!("{:?}", output), "Writers");
    }

    #[test]
    fn test_discard_transport_as_trait_object() {
        let transport: Box<dyn Transport> = Box::new(DiscardTransport);
        transport.push(LogEvent::new(LogLevel::Error).with_message("dropped"));
    }
}
