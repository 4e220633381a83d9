//! # Event Journal
//!
//! In-memory implementation of the core's [`EventSink`] capability.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Event Journal Flow                               │
//! │                                                                         │
//! │  quote_order(...)  ──record──►  ┌──────────────────────────┐            │
//! │  OrderService      ──record──►  │  EventJournal (Mutex)    │            │
//! │                                 │  entries: Vec<Entry>     │            │
//! │                                 │  counters: kind → u64    │            │
//! │                                 └──────────┬───────────────┘            │
//! │                                            │                            │
//! │        recent(n) / by_kind(k) / since(t) / stats() / clear()           │
//! │                                            │                            │
//! │                                  "observability" endpoints              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The journal is a value owned by the application, injected wherever a
//! sink is needed. There is no global instance.
//!
//! ## Poisoning
//! `record` maps a poisoned lock to a `SinkError` instead of panicking, so
//! a wedged journal degrades observability without ever failing a quote.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use conos_core::{Event, EventKind, EventSink, SinkError};

// =============================================================================
// Journal Entry & Stats
// =============================================================================

/// A recorded event plus its arrival timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: EventKind,
    pub detail: String,
    pub payload: serde_json::Value,
}

/// Summary of journal activity.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalStats {
    pub total_entries: usize,
    pub entries_by_kind: HashMap<EventKind, u64>,
    pub last_entry: Option<JournalEntry>,
}

// =============================================================================
// Event Journal
// =============================================================================

#[derive(Debug, Default)]
struct JournalInner {
    entries: Vec<JournalEntry>,
    counters: HashMap<EventKind, u64>,
}

/// Thread-safe in-memory event journal.
#[derive(Debug, Default)]
pub struct EventJournal {
    inner: Mutex<JournalInner>,
}

impl EventJournal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        EventJournal::default()
    }

    /// The most recent `limit` entries, oldest of them first.
    pub fn recent(&self, limit: usize) -> Vec<JournalEntry> {
        self.with_inner(|inner| {
            let start = inner.entries.len().saturating_sub(limit);
            inner.entries[start..].to_vec()
        })
    }

    /// All entries of one kind, in arrival order.
    pub fn by_kind(&self, kind: EventKind) -> Vec<JournalEntry> {
        self.with_inner(|inner| {
            inner
                .entries
                .iter()
                .filter(|entry| entry.kind == kind)
                .cloned()
                .collect()
        })
    }

    /// Entries recorded at or after the cutoff, in arrival order.
    pub fn since(&self, cutoff: DateTime<Utc>) -> Vec<JournalEntry> {
        self.with_inner(|inner| {
            inner
                .entries
                .iter()
                .filter(|entry| entry.timestamp >= cutoff)
                .cloned()
                .collect()
        })
    }

    /// Summary counts plus the latest entry.
    pub fn stats(&self) -> JournalStats {
        self.with_inner(|inner| JournalStats {
            total_entries: inner.entries.len(),
            entries_by_kind: inner.counters.clone(),
            last_entry: inner.entries.last().cloned(),
        })
    }

    /// Discards all entries and counters.
    pub fn clear(&self) {
        self.with_inner(|inner| {
            inner.entries.clear();
            inner.counters.clear();
        });
    }

    fn with_inner<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut JournalInner) -> R,
    {
        let mut inner = self.inner.lock().expect("event journal mutex poisoned");
        f(&mut inner)
    }
}

impl EventSink for EventJournal {
    fn record(&self, event: Event) -> Result<(), SinkError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| SinkError::new("event journal lock poisoned"))?;

        *inner.counters.entry(event.kind).or_insert(0) += 1;
        inner.entries.push(JournalEntry {
            timestamp: Utc::now(),
            kind: event.kind,
            detail: event.detail,
            payload: event.payload,
        });

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
