//! Log events
//!
//! A [`LogEvent`] is built once per emit call and handed up the logger chain.
//! Each hop replaces its `namespace` with the composed value; the level never
//! changes after construction.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::level::LogLevel;

/// Structured fields attached to an event
pub type Context = Map<String, Value>;

/// Opaque error carried alongside an event
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// A single log event
#[derive(Clone)]
pub struct LogEvent {
    /// Severity, fixed by the emitting method
    pub level: LogLevel,
    /// Human-readable message
    pub message: Option<String>,
    /// Namespace fragment; fully composed once it reaches a transport
    pub namespace: Option<String>,
    /// Structured key/value fields
    pub context: Option<Context>,
    /// Attached error, never merged into `context`
    pub error: Option<SharedError>,
}

impl LogEvent {
    /// Create an empty event at the given level
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            message: None,
            namespace: None,
            context: None,
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a single structured field, creating the context if needed
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context
            .get_or_insert_with(Context::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_error<E>(mut self, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(error));
        self
    }

    pub fn with_shared_error(mut self, error: SharedError) -> Self {
        self.error = Some(error);
        self
    }
}

impl fmt::Debug for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEvent")
            .field("level", &self.level)
            .field("message", &self.message)
            .field("namespace", &self.namespace)
            .field("context", &self.context)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .finish()
    }
}

/// Optional per-call extras for the `*_with` emit methods
///
/// Lets a call site attach a nested namespace, structured fields or an error
/// without reconfiguring the logger.
#[derive(Clone, Default)]
pub struct EventDetails {
    pub namespace: Option<String>,
    pub context: Option<Context>,
    pub error: Option<SharedError>,
}

impl EventDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context
            .get_or_insert_with(Context::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn error<E>(mut self, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.error = Some(Arc::new(error));
        self
    }

    /// Turn the extras into a full event
    pub fn into_event(self, level: LogLevel, message: impl Into<String>) -> LogEvent {
        LogEvent {
            level,
            message: Some(message.into()),
            namespace: self.namespace,
            context: self.context,
            error: self.error,
        }
    }
}

impl fmt::Debug for EventDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDetails")
            .field("namespace", &self.namespace)
            .field("context", &self.context)
            .field("error", &self.error.as_ref().map(|e| e.to_string()))
            .finish()
    }
}

/// Join a logger's namespace with an incoming fragment
///
/// Empty or absent segments are omitted, so `("App", None)` gives `"App"` and
/// `("App", Some("db"))` gives `"App/db"`.
pub(crate) fn compose_namespace(own: &str, incoming: Option<&str>) -> String {
    match incoming.filter(|ns| !ns.is_empty()) {
        Some(ns) if own.is_empty() => ns.to_string(),
        Some(ns) => format!("{}/{}", own, ns),
        None => own.to_string(),
    }
}
