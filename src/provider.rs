//! Composition root
//!
//! A [`LoggerProvider`] owns the one root logger of an application. Build it
//! at startup, keep it in whatever context the application threads through
//! its components, and hand out the root or namespaced children with
//! [`LoggerProvider::inject`].
//!
//! ```
//! use std::sync::Arc;
//! use nslog::{Log, LoggerOptions, LoggerProvider, LogLevel};
//! use nslog::transport::BufferTransport;
//!
//! let buffer = Arc::new(BufferTransport::default());
//! let provider = LoggerProvider::new(
//!     LoggerOptions::new()
//!         .namespace("Api")
//!         .level(LogLevel::Info)
//!         .transport(buffer.clone()),
//! );
//!
//! let users = provider.inject(Some("users"));
//! users.info("created");
//!
//! assert_eq!(buffer.lines(), vec!["INFO Api/users: created"]);
//! ```
//!
//! Code without access to a provider can fall back on
//! [`LoggerProvider::global`], a process-wide instance created on first use.

use std::sync::{Arc, OnceLock};

use crate::config::LoggerOptions;
use crate::logger::{Log, Logger};

/// Owner of the application's root logger
#[derive(Debug, Clone)]
pub struct LoggerProvider {
    root: Arc<Logger>,
}

impl Default for LoggerProvider {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl LoggerProvider {
    /// Build a root logger from `options`, filling gaps with the defaults
    pub fn new(options: LoggerOptions) -> Self {
        Self {
            root: Arc::new(Logger::from_options(options)),
        }
    }

    /// Wrap an existing root logger
    pub fn from_logger(root: Arc<Logger>) -> Self {
        Self { root }
    }

    /// The process-wide provider
    ///
    /// Created with level Debug, namespace `"App"` and the console transport
    /// the first time it is requested, and never torn down.
    pub fn global() -> &'static LoggerProvider {
        static GLOBAL: OnceLock<LoggerProvider> = OnceLock::new();
        GLOBAL.get_or_init(LoggerProvider::default)
    }

    /// The shared root logger, for reconfiguration or direct use
    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(&self.root)
    }

    /// The root logger, or a child of it when `namespace` is given
    pub fn inject(&self, namespace: Option<&str>) -> Arc<dyn Log> {
        match namespace {
            Some(namespace) if !namespace.is_empty() => {
                Arc::new(self.root.create_subnamespace(namespace)) as Arc<dyn Log>
            }
            _ => Arc::clone(&self.root) as Arc<dyn Log>,
        }
    }
}

/// Build a provider from `options`
pub fn provide_logger(options: LoggerOptions) -> LoggerProvider {
    LoggerProvider::new(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LogLevel;
    use crate::transport::{BufferTransport, Transport};

    fn provider_with_buffer(options: LoggerOptions) -> (LoggerProvider, Arc<BufferTransport>) {
        let buffer = Arc::new(BufferTransport::default());
        let provider =
            provide_logger(options.transport(Arc::clone(&buffer) as Arc<dyn Transport>));
        (provider, buffer)
    }

    #[test]
    fn test_defaults() {
        let provider = LoggerProvider::default();
        let root = provider.root();

        assert_eq!(root.level(), LogLevel::Debug);
        assert_eq!(root.namespace(), "App");
        assert!(!root.is_configured());
    }

    #[test]
    fn test_inject_root_and_child() {
        let (provider, buffer) = provider_with_buffer(LoggerOptions::new());

        provider.inject(None).info("root");
        provider.inject(Some("db")).info("child");
        provider.inject(Some("")).info("empty");

        assert_eq!(
            buffer.lines(),
            vec!["INFO App: root", "INFO App/db: child", "INFO App: empty"]
        );
    }

    #[test]
    fn test_root_is_shared() {
        let (provider, buffer) = provider_with_buffer(LoggerOptions::new().level(LogLevel::Info));
        let child = provider.inject(Some("jobs"));

        provider
            .root()
            .configure(LoggerOptions::new().level(LogLevel::Error));
        child.warn("hidden");
        child.error("shown");

        assert_eq!(buffer.lines(), vec!["ERROR App/jobs: shown"]);
    }

    #[test]
    fn test_from_logger() {
        let root = Arc::new(Logger::from_options(LoggerOptions::new().namespace("Svc")));
        let provider = LoggerProvider::from_logger(Arc::clone(&root));
        assert!(Arc::ptr_eq(&provider.root(), &root));
    }

    #[test]
    fn test_global_is_single_instance() {
        let a = LoggerProvider::global().root();
        let b = LoggerProvider::global().root();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.namespace(), "App");
    }
}
