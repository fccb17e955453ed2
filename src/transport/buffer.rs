//! In-memory event buffer
//!
//! Keeps the most recent events in a bounded ring buffer. Nothing is written
//! to disk.

use std::collections::VecDeque;
use std::sync::RwLock;

use super::Transport;
use crate::event::LogEvent;

/// Default number of events kept
pub const DEFAULT_MAX_ENTRIES: usize = 10_000;

/// Thread-safe ring buffer transport
#[derive(Debug)]
pub struct BufferTransport {
    /// All events (capped at max_entries)
    entries: RwLock<VecDeque<LogEvent>>,
    max_entries: usize,
}

impl Default for BufferTransport {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

impl BufferTransport {
    /// Create a new buffer keeping at most `max_entries` events
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(max_entries)),
            max_entries,
        }
    }

    /// Get all buffered events, oldest first
    pub fn all_entries(&self) -> Vec<LogEvent> {
        self.entries
            .read()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Namespaces and messages of all buffered events, for quick assertions
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .read()
            .map(|e| {
                e.iter()
                    .map(|event| {
                        format!(
                            "{} {}: {}",
                            event.level,
                            event.namespace.as_deref().unwrap_or_default(),
                            event.message.as_deref().unwrap_or_default()
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every buffered event
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl Transport for BufferTransport {
    fn push(&self, event: LogEvent) {
        if self.max_entries == 0 {
            return;
        }
        if let Ok(mut entries) = self.entries.write() {
            if entries.len() >= self.max_entries {
                entries.pop_front();
            }
            entries.push_back(event);
        }
    }
}
