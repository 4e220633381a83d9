//! # Order Service
//!
//! Composes the order store, the event journal, and the pricing pipeline
//! into the operations an API layer maps onto endpoints: accept an order,
//! price it, report statistics.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use conos_core::{quote_order, Event, EventKind, EventSink, Quote};

use crate::error::StoreResult;
use crate::journal::{EventJournal, JournalStats};
use crate::order::{NewOrder, Order};
use crate::store::OrderStore;

// =============================================================================
// Service Stats
// =============================================================================

/// Combined order and journal statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    pub total_orders: usize,
    pub orders_by_variant: HashMap<String, usize>,
    pub orders_by_size: HashMap<String, usize>,
    pub journal: JournalStats,
}

// =============================================================================
// Order Service
// =============================================================================

/// The application-facing order workflow.
#[derive(Debug)]
pub struct OrderService {
    store: OrderStore,
    journal: Arc<EventJournal>,
}

impl OrderService {
    /// Creates a service with a fresh store and journal.
    pub fn new() -> Self {
        OrderService::with_journal(Arc::new(EventJournal::new()))
    }

    /// Creates a service around a shared journal.
    ///
    /// Lets the application hand the same journal to other components and
    /// to its own observability endpoints.
    pub fn with_journal(journal: Arc<EventJournal>) -> Self {
        OrderService {
            store: OrderStore::new(),
            journal,
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// Read access to the journal.
    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    /// Accepts a new order and records an `order_created` event.
    pub fn create_order(&self, new_order: NewOrder) -> StoreResult<Order> {
        let order = self.store.create(new_order)?;

        let event = Event::new(
            EventKind::OrderCreated,
            format!(
                "order {} for {}: {} {} with {}",
                order.id,
                order.client,
                order.variant,
                order.size,
                order.toppings_display(),
            ),
            json!({
                "orderId": &order.id,
                "client": &order.client,
                "variant": &order.variant,
                "size": &order.size,
                "toppings": &order.toppings,
            }),
        );
        if let Err(err) = self.journal.record(event) {
            debug!("event journal rejected order event: {err}");
        }

        info!(order_id = %order.id, client = %order.client, "order created");
        Ok(order)
    }

    /// Prices a stored order through the pipeline, journaling the quote.
    ///
    /// Stored orders always price cleanly: creation already validated the
    /// variant against the same catalog the pipeline reads.
    pub fn quote(&self, order: &Order) -> StoreResult<Quote> {
        let quote = quote_order(
            &order.variant,
            &order.size,
            &order.toppings,
            self.journal.as_ref(),
        )?;
        Ok(quote)
    }

    /// Looks up an order by id and prices it.
    pub fn quote_by_id(&self, id: &str) -> StoreResult<Quote> {
        let order = self.store.get(id)?;
        self.quote(&order)
    }

    /// Combined statistics for observability endpoints.
    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            total_orders: self.store.count(),
            orders_by_variant: self.store.counts_by_variant(),
            orders_by_size: self.store.counts_by_size(),
            journal: self.journal.stats(),
        }
    }
}

impl Default for OrderService {
    fn default() -> Self {
        OrderService::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
