//! nslog - namespaced structured logging facade
//!
//! Callers emit leveled events through a root [`Logger`] or any
//! [`ChildLogger`] derived from it. The root drops events below its minimum
//! level and forwards the rest, with the namespace composed from every hop, to
//! a pluggable [`Transport`].
//!
//! # Architecture
//!
//! - [`LogLevel`]: `Trace < Debug < Info < Warn < Error`
//! - [`LogEvent`]: level, message, namespace, structured context, error
//! - [`Log`]: emitting interface shared by both logger kinds
//! - [`Logger`]: root logger holding level, namespace and transport
//! - [`ChildLogger`]: prefixes a namespace and forwards to its parent
//! - [`transport`]: console, Cloud Logging JSON, in-memory, `tracing` and discard sinks
//! - [`LoggerProvider`]: composition root handing out the root or children
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use nslog::{log_info, EventDetails, Log, Logger, LogLevel};
//! use nslog::transport::BufferTransport;
//!
//! let buffer = Arc::new(BufferTransport::default());
//! let root = Arc::new(Logger::new(LogLevel::Info, "App", buffer.clone()));
//!
//! let api = root.create_subnamespace("api");
//! let users = api.create_subnamespace("users");
//!
//! users.debug("filtered out by the root");
//! users.info_with("created", EventDetails::new().field("id", 42));
//! log_info!(api, "{} routes mounted", 12);
//!
//! assert_eq!(
//!     buffer.lines(),
//!     vec!["INFO App/api/users: created", "INFO App/api: 12 routes mounted"]
//! );
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod level;
pub mod logger;
pub mod provider;
pub mod transport;

pub use config::LoggerOptions;
pub use error::{ConfigError, ParseLevelError};
pub use event::{Context, EventDetails, LogEvent};
pub use level::LogLevel;
pub use logger::{ChildLogger, Log, Logger};
pub use provider::{provide_logger, LoggerProvider};
pub use transport::Transport;
