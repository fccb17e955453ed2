//! Root and child loggers
//!
//! The root [`Logger`] holds the authoritative level, namespace and transport
//! and is the only place events are filtered. A [`ChildLogger`] prefixes its
//! namespace fragment and hands the event to its parent, which is either the
//! root or another child:
//!
//! ```text
//! users.info("created")
//!   └─ ChildLogger "users"  namespace = "users"
//!       └─ ChildLogger "api"  namespace = "api/users"
//!           └─ Logger "App"   level filter, namespace = "App/api/users" → transport
//! ```

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::LoggerOptions;
use crate::event::{compose_namespace, EventDetails, LogEvent};
use crate::level::LogLevel;
use crate::transport::Transport;

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "App";

/// Emitting interface shared by root and child loggers
///
/// Implementors provide [`Log::log`]; the per-level methods build an event
/// and delegate to it, so `logger.debug("m")` behaves exactly like
/// `logger.log(LogEvent::new(LogLevel::Debug).with_message("m"))`.
pub trait Log: Send + Sync {
    /// Hand an event to this logger
    fn log(&self, event: LogEvent);

    /// Build an event from a level, message and per-call extras and log it
    fn emit(&self, level: LogLevel, message: &str, details: EventDetails) {
        self.log(details.into_event(level, message));
    }

    /// Log a message at trace level
    fn trace(&self, message: &str) {
        self.log(LogEvent::new(LogLevel::Trace).with_message(message));
    }

    /// Log a message at debug level
    fn debug(&self, message: &str) {
        self.log(LogEvent::new(LogLevel::Debug).with_message(message));
    }

    /// Log a message at info level
    fn info(&self, message: &str) {
        self.log(LogEvent::new(LogLevel::Info).with_message(message));
    }

    /// Log a message at warn level
    fn warn(&self, message: &str) {
        self.log(LogEvent::new(LogLevel::Warn).with_message(message));
    }

    /// Log a message at error level
    fn error(&self, message: &str) {
        self.log(LogEvent::new(LogLevel::Error).with_message(message));
    }

    /// Log at trace level with a namespace fragment, context or error
    fn trace_with(&self, message: &str, details: EventDetails) {
        self.emit(LogLevel::Trace, message, details);
    }

    /// Log at debug level with per-call extras
    fn debug_with(&self, message: &str, details: EventDetails) {
        self.emit(LogLevel::Debug, message, details);
    }

    /// Log at info level with per-call extras
    fn info_with(&self, message: &str, details: EventDetails) {
        self.emit(LogLevel::Info, message, details);
    }

    /// Log at warn level with per-call extras
    fn warn_with(&self, message: &str, details: EventDetails) {
        self.emit(LogLevel::Warn, message, details);
    }

    /// Log at error level with per-call extras
    fn error_with(&self, message: &str, details: EventDetails) {
        self.emit(LogLevel::Error, message, details);
    }
}

/// Mutable settings of the root logger
struct RootState {
    level: LogLevel,
    namespace: String,
    transport: Arc<dyn Transport>,
    configured: bool,
}

/// The root logger
///
/// Usually created once by a [`LoggerProvider`](crate::LoggerProvider) and
/// shared as `Arc<Logger>`. Settings can be changed later through
/// [`Logger::configure`], which is intended for startup only.
pub struct Logger {
    state: RwLock<RootState>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("Logger")
            .field("level", &state.level)
            .field("namespace", &state.namespace)
            .field("configured", &state.configured)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Create a root logger with explicit settings
    pub fn new(
        level: LogLevel,
        namespace: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            state: RwLock::new(RootState {
                level,
                namespace: namespace.into(),
                transport,
                configured: false,
            }),
        }
    }

    /// Create a root logger, filling unset options with the defaults
    /// (level Debug, namespace `"App"`, console transport)
    pub fn from_options(options: LoggerOptions) -> Self {
        let (level, namespace, transport) = options.resolve();
        Self::new(level, namespace, transport)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, RootState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RootState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply any subset of namespace, transport and level
    ///
    /// Calling this more than once is allowed but logs a warning first, using
    /// the settings in effect before the update. Afterwards a debug event
    /// reports the namespace now in use.
    pub fn configure(&self, options: LoggerOptions) {
        if self.is_configured() {
            self.warn("Attempting to configure root logger that has already been configured.");
        }

        let namespace = {
            let mut state = self.write_state();
            state.configured = true;
            if let Some(level) = options.level {
                state.level = level;
            }
            if let Some(transport) = options.transport {
                state.transport = transport;
            }
            if let Some(namespace) = options.namespace {
                state.namespace = namespace;
            }
            state.namespace.clone()
        };

        self.debug(&format!("Log configured with namespace {}", namespace));
    }

    /// Minimum level that passes the filter
    pub fn level(&self) -> LogLevel {
        self.read_state().level
    }

    /// Namespace given to every event that reaches the transport
    pub fn namespace(&self) -> String {
        self.read_state().namespace.clone()
    }

    /// Whether [`Logger::configure`] has been called
    pub fn is_configured(&self) -> bool {
        self.read_state().configured
    }

    /// Whether an event at `level` would reach the transport
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Create a child logger that prefixes `namespace`
    pub fn create_subnamespace(self: &Arc<Self>, namespace: impl Into<String>) -> ChildLogger {
        let parent: Arc<dyn Log> = Arc::clone(self) as Arc<dyn Log>;
        ChildLogger::new(parent, namespace)
    }
}

impl Log for Logger {
    fn log(&self, mut event: LogEvent) {
        // Release the lock before pushing; transports may log through us.
        let transport = {
            let state = self.read_state();
            if event.level < state.level {
                return;
            }
            event.namespace = Some(compose_namespace(
                &state.namespace,
                event.namespace.as_deref(),
            ));
            Arc::clone(&state.transport)
        };

        transport.push(event);
    }
}

/// A namespace-prefixing view of another logger
///
/// Never filters; every event is forwarded to the parent. Cheap to clone.
#[derive(Clone)]
pub struct ChildLogger {
    parent: Arc<dyn Log>,
    namespace: Arc<str>,
}

impl std::fmt::Debug for ChildLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChildLogger")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl ChildLogger {
    fn new(parent: Arc<dyn Log>, namespace: impl Into<String>) -> Self {
        Self {
            parent,
            namespace: Arc::from(namespace.into()),
        }
    }

    /// This hop's namespace fragment
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Nest a further child below this one
    pub fn create_subnamespace(&self, namespace: impl Into<String>) -> ChildLogger {
        let parent: Arc<dyn Log> = Arc::new(self.clone());
        ChildLogger::new(parent, namespace)
    }
}

impl Log for ChildLogger {
    fn log(&self, mut event: LogEvent) {
        event.namespace = Some(compose_namespace(
            &self.namespace,
            event.namespace.as_deref(),
        ));
        self.parent.log(event);
    }
}

/// Log a formatted message at trace level
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Log as _;
            $logger.trace(&format!($($arg)*))
        }
    };
}

/// Log a formatted message at debug level
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Log as _;
            $logger.debug(&format!($($arg)*))
        }
    };
}

/// Log a formatted message at info level
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Log as _;
            $logger.info(&format!($($arg)*))
        }
    };
}

/// Log a formatted message at warn level
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Log as _;
            $logger.warn(&format!($($arg)*))
        }
    };
}

/// Log a formatted message at error level
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::Log as _;
            $logger.error(&format!($($arg)*))
        }
    };
}
