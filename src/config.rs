//! Logger options
//!
//! [`LoggerOptions`] is used both to build a root logger and to reconfigure
//! one later. Unset fields mean "use the default" at construction and "leave
//! unchanged" on reconfiguration.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::level::LogLevel;
use crate::logger::DEFAULT_NAMESPACE;
use crate::transport::{ConsoleTransport, Transport};

/// Environment variable holding the minimum level
pub const LEVEL_ENV: &str = "NSLOG_LEVEL";
/// Environment variable holding the root namespace
pub const NAMESPACE_ENV: &str = "NSLOG_NAMESPACE";

/// Settings for a root logger
#[derive(Clone, Default)]
pub struct LoggerOptions {
    /// Root display name (default `"App"`)
    pub namespace: Option<String>,
    /// Event sink (default [`ConsoleTransport`])
    pub transport: Option<Arc<dyn Transport>>,
    /// Minimum level (default Debug)
    pub level: Option<LogLevel>,
}

impl std::fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("namespace", &self.namespace)
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .field("level", &self.level)
            .finish()
    }
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Read `NSLOG_LEVEL` and `NSLOG_NAMESPACE` from the process environment
    ///
    /// Unset or empty variables leave the option unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`LoggerOptions::from_env`] but with a custom variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let level = read(LEVEL_ENV)
            .map(|value| value.parse::<LogLevel>())
            .transpose()
            .map_err(|source| ConfigError::InvalidLevel {
                var: LEVEL_ENV,
                source,
            })?;

        Ok(Self {
            namespace: read(NAMESPACE_ENV),
            transport: None,
            level,
        })
    }

    /// Fill the gaps in `self` from `fallback`
    pub fn or(self, fallback: LoggerOptions) -> Self {
        Self {
            namespace: self.namespace.or(fallback.namespace),
            transport: self.transport.or(fallback.transport),
            level: self.level.or(fallback.level),
        }
    }

    /// Settings with defaults applied
    pub(crate) fn resolve(self) -> (LogLevel, String, Arc<dyn Transport>) {
        (
            self.level.unwrap_or_default(),
            self.namespace.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            self.transport.unwrap_or_else(|| Arc::new(ConsoleTransport::new())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::DiscardTransport;
    use std::collections::HashMap;
    use std::error::Error;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_builder_sets_fields() {
        let options = LoggerOptions::new()
            .namespace("Worker")
            .level(LogLevel::Warn)
            .transport(Arc::new(DiscardTransport));

        assert_eq!(options.namespace.as_deref(), Some("Worker"));
        assert_eq!(options.level, Some(LogLevel::Warn));
        assert!(options.transport.is_some());
    }

    #[test]
    fn test_resolve_defaults() {
        let (level, namespace, _transport) = LoggerOptions::new().resolve();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(namespace, "App");
    }

    #[test]
    fn test_from_lookup_reads_variables() {
        let vars = lookup(&[("NSLOG_LEVEL", "warn"), ("NSLOG_NAMESPACE", "Api")]);
        let options = LoggerOptions::from_lookup(vars).unwrap();

        assert_eq!(options.level, Some(LogLevel::Warn));
        assert_eq!(options.namespace.as_deref(), Some("Api"));
        assert!(options.transport.is_none());
    }

    #[test]
    fn test_from_lookup_ignores_missing_and_empty() {
        let options = LoggerOptions::from_lookup(lookup(&[("NSLOG_LEVEL", "  ")])).unwrap();
        assert!(options.level.is_none());
        assert!(options.namespace.is_none());
    }

    #[test]
    fn test_from_lookup_rejects_bad_level() {
        let err = LoggerOptions::from_lookup(lookup(&[("NSLOG_LEVEL", "verbose")])).unwrap_err();

        assert_eq!(err.to_string(), "invalid value for NSLOG_LEVEL");
        assert_eq!(
            err.source().unwrap().to_string(),
            "unknown log level \"verbose\""
        );
    }

    #[test]
    fn test_or_prefers_self() {
        let merged = LoggerOptions::new()
            .level(LogLevel::Error)
            .or(LoggerOptions::new().level(LogLevel::Info).namespace("Base"));

        assert_eq!(merged.level, Some(LogLevel::Error));
        assert_eq!(merged.namespace.as_deref(), Some("Base"));
    }
}
