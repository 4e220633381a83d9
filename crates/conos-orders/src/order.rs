//! # Order Records
//!
//! What the store persists per accepted order. Prices are never stored:
//! a quote is always recomputed from the catalogs, so an order stays
//! priceable even as presentation needs change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An accepted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Free-form client name.
    pub client: String,

    /// Variant name (validated against the catalog on create).
    pub variant: String,

    /// Requested toppings (each validated against the catalog on create).
    pub toppings: Vec<String>,

    /// Size name (validated against the catalog on create).
    pub size: String,

    /// When the order was accepted.
    pub order_date: DateTime<Utc>,
}

impl Order {
    /// Human-readable topping list for receipts and logs.
    pub fn toppings_display(&self) -> String {
        if self.toppings.is_empty() {
            "no extra toppings".to_string()
        } else {
            self.toppings.join(", ")
        }
    }
}

/// Payload for creating an order. The store assigns id and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub client: String,
    pub variant: String,
    pub toppings: Vec<String>,
    pub size: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(toppings: Vec<String>) -> Order {
        Order {
            id: "test".to_string(),
            client: "Ana".to_string(),
            variant: "Carnívoro".to_string(),
            toppings,
            size: "Mediano".to_string(),
            order_date: Utc::now(),
        }
    }

    #[test]
    fn test_toppings_display() {
        assert_eq!(order(vec![]).toppings_display(), "no extra toppings");
        assert_eq!(
            order(vec!["bacon".to_string(), "guacamole".to_string()]).toppings_display(),
            "bacon, guacamole"
        );
    }

    #[test]
    fn test_order_serializes_camel_case() {
        let value = serde_json::to_value(order(vec![])).unwrap();
        assert!(value.get("orderDate").is_some());
        assert!(value.get("order_date").is_none());
    }
}
