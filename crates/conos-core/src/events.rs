//! # Event Sink Capability
//!
//! The pricing core reports what it did through an injected sink rather
//! than a process-wide logger. The surrounding application owns the sink's
//! lifecycle and passes it into `quote_order`; the core only ever writes.
//!
//! Sink failures are best-effort territory: `quote_order` swallows them,
//! so a broken sink can never fail a quote computation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// Event Kind
// =============================================================================

/// The closed set of event kinds the system records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A quote was computed for an order request.
    QuoteComputed,
    /// An order record was accepted into the store.
    OrderCreated,
}

impl EventKind {
    /// Stable string form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::QuoteComputed => "quote_computed",
            EventKind::OrderCreated => "order_created",
        }
    }
}

// =============================================================================
// Event
// =============================================================================

/// A structured event: kind, human-readable detail, JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub kind: EventKind,
    pub detail: String,
    pub payload: Value,
}

impl Event {
    /// Creates a new event.
    pub fn new(kind: EventKind, detail: impl Into<String>, payload: Value) -> Self {
        Event {
            kind,
            detail: detail.into(),
            payload,
        }
    }
}

// =============================================================================
// Sink Trait
// =============================================================================

/// Error returned by a sink that could not record an event.
#[derive(Debug, Error)]
#[error("event sink unavailable: {reason}")]
pub struct SinkError {
    reason: String,
}

impl SinkError {
    /// Creates a sink error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        SinkError {
            reason: reason.into(),
        }
    }
}

/// Fire-and-forget event recording capability.
///
/// Implementations must be cheap and must not block the quote pipeline;
/// callers treat a `SinkError` as a degraded-observability condition, not
/// a computation failure.
pub trait EventSink: Send + Sync {
    /// Records one event.
    fn record(&self, event: Event) -> Result<(), SinkError>;
}

/// A sink that discards every event, for callers that do not observe them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: Event) -> Result<(), SinkError> {
        Ok(())
    }
}
