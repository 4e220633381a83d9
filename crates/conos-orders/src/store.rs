//! # Order Store
//!
//! Thread-safe in-memory repository for accepted orders.
//!
//! ## Thread Safety
//! The order list is wrapped in a `Mutex` because:
//! 1. Multiple request handlers may create/read orders concurrently
//! 2. Only one caller should mutate the list at a time
//! 3. Operations are quick, so a plain Mutex beats a RwLock here
//!
//! ## Validation Policy
//! Strict on every field (see `conos_core::validation`): the lenient
//! normalization the pricing core applies to quotes never applies to
//! durable records.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use conos_core::validation::{
    validate_client, validate_size, validate_toppings, validate_variant,
};
use conos_core::catalog;

use crate::error::{StoreError, StoreResult};
use crate::order::{NewOrder, Order};

// =============================================================================
// Order Filter
// =============================================================================

/// Optional filters for listing orders. All present filters must match.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Exact variant name.
    pub variant: Option<String>,

    /// Exact size name.
    pub size: Option<String>,

    /// Case-insensitive substring of the client name.
    pub client: Option<String>,
}

impl OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        if let Some(variant) = &self.variant {
            if &order.variant != variant {
                return false;
            }
        }

        if let Some(size) = &self.size {
            if &order.size != size {
                return false;
            }
        }

        if let Some(client) = &self.client {
            if !order
                .client
                .to_lowercase()
                .contains(&client.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

// =============================================================================
// Order Store
// =============================================================================

/// In-memory order repository.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Mutex<Vec<Order>>,
}

impl OrderStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        OrderStore {
            orders: Mutex::new(Vec::new()),
        }
    }

    /// Validates and accepts a new order.
    ///
    /// ## Errors
    /// `StoreError::Validation` when the client name is empty or too long,
    /// or when the variant, size, or any topping is outside its catalog.
    pub fn create(&self, new_order: NewOrder) -> StoreResult<Order> {
        validate_client(&new_order.client)?;
        validate_variant(&new_order.variant)?;
        validate_size(&new_order.size)?;
        validate_toppings(&new_order.toppings)?;

        let order = Order {
            id: Uuid::new_v4().to_string(),
            client: new_order.client,
            variant: new_order.variant,
            toppings: new_order.toppings,
            size: new_order.size,
            order_date: Utc::now(),
        };

        debug!(
            order_id = %order.id,
            variant = %order.variant,
            size = %order.size,
            "order accepted"
        );

        self.with_orders_mut(|orders| orders.push(order.clone()));
        Ok(order)
    }

    /// Gets an order by id.
    pub fn get(&self, id: &str) -> StoreResult<Order> {
        self.with_orders(|orders| orders.iter().find(|order| order.id == id).cloned())
            .ok_or_else(|| StoreError::OrderNotFound(id.to_string()))
    }

    /// Lists orders matching the filter, newest first.
    pub fn list(&self, filter: &OrderFilter) -> Vec<Order> {
        let mut matched = self.with_orders(|orders| {
            orders
                .iter()
                .filter(|order| filter.matches(order))
                .cloned()
                .collect::<Vec<_>>()
        });
        matched.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        matched
    }

    /// Total number of stored orders.
    pub fn count(&self) -> usize {
        self.with_orders(|orders| orders.len())
    }

    /// Order counts per catalog variant (zero-count variants included).
    pub fn counts_by_variant(&self) -> HashMap<String, usize> {
        self.counts_for(catalog::variant_names(), |order| &order.variant)
    }

    /// Order counts per catalog size (zero-count sizes included).
    pub fn counts_by_size(&self) -> HashMap<String, usize> {
        self.counts_for(catalog::size_names(), |order| &order.size)
    }

    fn counts_for<F>(&self, keys: Vec<String>, field: F) -> HashMap<String, usize>
    where
        F: Fn(&Order) -> &String,
    {
        self.with_orders(|orders| {
            keys.into_iter()
                .map(|key| {
                    let count = orders.iter().filter(|order| field(order) == &key).count();
                    (key, count)
                })
                .collect()
        })
    }

    /// Executes a function with read access to the order list.
    fn with_orders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Order>) -> R,
    {
        let orders = self.orders.lock().expect("order store mutex poisoned");
        f(&orders)
    }

    /// Executes a function with write access to the order list.
    fn with_orders_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Order>) -> R,
    {
        let mut orders = self.orders.lock().expect("order store mutex poisoned");
        f(&mut orders)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
