//! Forwarding to the `tracing` ecosystem.

use super::Transport;
use crate::event::LogEvent;
use crate::level::LogLevel;

/// Transport that re-emits events through the `tracing` macros.
///
/// Lets an application that already installs a `tracing` subscriber route
/// facade events through the same filters and layers. The composed namespace
/// is recorded as the `namespace` field, structured context as a JSON string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTransport;

impl TracingTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for TracingTransport {
    fn push(&self, event: LogEvent) {
        let namespace = event.namespace.as_deref().unwrap_or_default();
        let message = event.message.as_deref().unwrap_or_default();
        let context = event
            .context
            .as_ref()
            .and_then(|c| serde_json::to_string(c).ok())
            .unwrap_or_default();
        let error = event
            .error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default();

        match event.level {
            LogLevel::Trace => {
                tracing::trace!(namespace, context = %context, error = %error, "{}", message)
            }
            LogLevel::Debug => {
                tracing::debug!(namespace, context = %context, error = %error, "{}", message)
            }
            LogLevel::Info => {
                tracing::info!(namespace, context = %context, error = %error, "{}", message)
            }
            LogLevel::Warn => {
                tracing::warn!(namespace, context = %context, error = %error, "{}", message)
            }
            LogLevel::Error => {
                tracing::error!(namespace, context = %context, error = %error, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted subscriber output in memory
    #[derive(Clone, Default)]
    struct CaptureWriter {
        buf: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if let Ok(mut inner) = self.buf.lock() {
                inner.extend_from_slice(buf);
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_tracing_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingTransport>();
    }

    #[test]
    fn test_events_reach_subscriber_with_namespace_field() {
        let capture = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingTransport::new().push(
                LogEvent::new(LogLevel::Warn)
                    .with_namespace("App/db")
                    .with_message("slow query")
                    .with_field("ms", 1200),
            );
        });

        let output = String::from_utf8(capture.buf.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("slow query"));
        assert!(output.contains("namespace=\"App/db\""));
        assert!(output.contains("1200"));
    }

    #[test]
    fn test_subscriber_level_still_applies() {
        let capture = CaptureWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingTransport::new().push(LogEvent::new(LogLevel::Debug).with_message("hidden"));
        });

        assert!(capture.buf.lock().unwrap().is_empty());
    }
}
