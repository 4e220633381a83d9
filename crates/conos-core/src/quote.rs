//! # Quote
//!
//! The final priced, itemized result of a pricing request, and the
//! `quote_order` entry point that produces it.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::builder::ConeBuilder;
use crate::cone::Cone;
use crate::error::CoreResult;
use crate::events::{Event, EventKind, EventSink};
use crate::money::Money;

// =============================================================================
// Quote
// =============================================================================

/// A priced, itemized cone. Immutable once built.
///
/// ## Invariants
/// - `added_toppings` is de-duplicated and keeps first-added order
/// - every entry in `added_toppings` is a topping catalog key
/// - `final_ingredients` is the cone's full ingredient list, base first
/// - `total_price = base_price + topping_price`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Variant name.
    pub variant: String,

    /// Size name as requested (kept verbatim even when unrecognized).
    pub size: String,

    /// Base ingredients, excluding any string that equals an added topping.
    pub base_ingredients: Vec<String>,

    /// Toppings actually added, in first-added order.
    pub added_toppings: Vec<String>,

    /// Full ingredient list: base ingredients then added toppings.
    pub final_ingredients: Vec<String>,

    /// Variant base price with the size factor already applied.
    pub base_price: Money,

    /// Sum of added topping prices.
    pub topping_price: Money,

    /// Grand total: `base_price + topping_price`.
    pub total_price: Money,
}

// =============================================================================
// Orchestration Entry Point
// =============================================================================

/// Prices one order request: variant + size + requested toppings.
///
/// This is the single operation an API layer calls per order. It composes
/// assembly, topping accumulation, and quote building, then records one
/// `quote_computed` event on the injected sink.
///
/// ## Behavior
/// - Unknown variant: returns `CoreError::UnknownVariant`
/// - Unknown size: prices at ×1.0, no error
/// - Unknown or repeated toppings: silently dropped
/// - Sink failure: swallowed (logged at debug), never fails the quote
///
/// Stateless per call: safe to invoke repeatedly and concurrently.
///
/// ## Example
/// ```rust
/// use conos_core::{quote_order, NoopSink};
///
/// // 16.00 × 1.3 = 20.80, aguacate billed once: +3.00
/// let quote = quote_order("Saludable", "Grande", ["aguacate", "aguacate"], &NoopSink).unwrap();
/// assert_eq!(quote.total_price.cents(), 2380);
/// ```
pub fn quote_order<I, S>(
    variant_name: &str,
    size_name: &str,
    toppings: I,
    sink: &dyn EventSink,
) -> CoreResult<Quote>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let requested: Vec<String> = toppings
        .into_iter()
        .map(|topping| topping.as_ref().to_string())
        .collect();

    let cone = Cone::assemble(variant_name, size_name)?;
    let quote = ConeBuilder::new(cone).toppings(&requested).build();

    let event = Event::new(
        EventKind::QuoteComputed,
        format!(
            "quoted {} {} at {} with {} of {} requested toppings",
            quote.variant,
            quote.size,
            quote.total_price,
            quote.added_toppings.len(),
            requested.len(),
        ),
        json!({
            "variant": &quote.variant,
            "size": &quote.size,
            "requestedToppings": requested,
            "quote": &quote,
        }),
    );
    if let Err(err) = sink.record(event) {
        debug!("event sink rejected quote event: {err}");
    }

    Ok(quote)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::error::CoreError;
    use crate::events::{NoopSink, SinkError};
    use std::sync::Mutex;

    /// Test sink that captures every recorded event.
    #[derive(Default)]
    struct CapturingSink {
        events: Mutex<Vec<Event>>,
    }

    impl EventSink for CapturingSink {
        fn record(&self, event: Event) -> Result<(), SinkError> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    /// Test sink that always fails.
    struct BrokenSink;

    impl EventSink for BrokenSink {
        fn record(&self, _event: Event) -> Result<(), SinkError> {
            Err(SinkError::new("broken on purpose"))
        }
    }

    #[test]
    fn test_no_toppings_prices_base_times_factor() {
        for variant in catalog::variants() {
            for size in catalog::sizes() {
                let quote =
                    quote_order(variant.name, size.name, Vec::<String>::new(), &NoopSink).unwrap();

                assert!(quote.added_toppings.is_empty());
                assert_eq!(quote.topping_price, Money::zero());
                assert_eq!(quote.base_price, variant.base_price.scale(size.factor));
                assert_eq!(quote.total_price, quote.base_price);
            }
        }
    }

    #[test]
    fn test_final_ingredients_are_base_then_dedup_known_toppings() {
        let quote = quote_order(
            "Vegetariano",
            "Mediano",
            ["bacon", "not_real", "bacon", "jalapeños"],
            &NoopSink,
        )
        .unwrap();

        let variant = catalog::variant("Vegetariano").unwrap();
        let mut expected: Vec<String> = variant
            .base_ingredients
            .iter()
            .map(|i| i.to_string())
            .collect();
        expected.push("bacon".to_string());
        expected.push("jalapeños".to_string());

        assert_eq!(quote.final_ingredients, expected);
        assert_eq!(quote.added_toppings, vec!["bacon", "jalapeños"]);
    }

    #[test]
    fn test_unknown_topping_behaves_like_no_topping() {
        let junk = quote_order("Vegetariano", "Mediano", ["not_a_topping"], &NoopSink).unwrap();
        let none = quote_order("Vegetariano", "Mediano", Vec::<String>::new(), &NoopSink).unwrap();

        assert_eq!(junk.total_price, none.total_price);
        assert_eq!(junk.final_ingredients, none.final_ingredients);
        assert_eq!(junk.added_toppings, none.added_toppings);
    }

    #[test]
    fn test_unknown_size_defaults_to_identity_factor() {
        let xl = quote_order("Vegetariano", "XL", Vec::<String>::new(), &NoopSink).unwrap();
        let mediano = quote_order("Vegetariano", "Mediano", Vec::<String>::new(), &NoopSink).unwrap();

        assert_eq!(xl.total_price, mediano.total_price);
        assert_eq!(xl.size, "XL"); // kept verbatim
    }

    #[test]
    fn test_unknown_variant_fails_instead_of_degrading() {
        let err = quote_order("Alien", "Mediano", Vec::<String>::new(), &NoopSink).unwrap_err();
        assert!(matches!(err, CoreError::UnknownVariant { .. }));
    }

    #[test]
    fn test_carnivoro_mediano_scenario() {
        let quote = quote_order(
            "Carnívoro",
            "Mediano",
            ["queso_extra", "bacon"],
            &NoopSink,
        )
        .unwrap();

        assert_eq!(quote.base_price.cents(), 1800);
        assert_eq!(quote.topping_price.cents(), 700);
        assert_eq!(quote.total_price.cents(), 2500);
        assert_eq!(quote.final_ingredients.len(), 8); // 6 base + 2 toppings
    }

    #[test]
    fn test_saludable_grande_scenario() {
        let quote = quote_order(
            "Saludable",
            "Grande",
            ["aguacate", "aguacate"],
            &NoopSink,
        )
        .unwrap();

        assert_eq!(quote.base_price.cents(), 2080); // 16.00 × 1.3
        assert_eq!(quote.topping_price.cents(), 300); // billed once
        assert_eq!(quote.total_price.cents(), 2380);
    }

    #[test]
    fn test_emits_one_event_per_call() {
        let sink = CapturingSink::default();

        quote_order("Carnívoro", "Grande", ["bacon"], &sink).unwrap();

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.kind, EventKind::QuoteComputed);
        assert_eq!(event.payload["variant"], "Carnívoro");
        assert_eq!(event.payload["size"], "Grande");
        assert_eq!(event.payload["requestedToppings"][0], "bacon");
        assert_eq!(event.payload["quote"]["totalPrice"], 2790); // 23.40 + 4.50
    }

    #[test]
    fn test_broken_sink_never_fails_the_quote() {
        let quote = quote_order("Carnívoro", "Mediano", ["bacon"], &BrokenSink).unwrap();
        assert_eq!(quote.total_price.cents(), 2250);
    }

    #[test]
    fn test_no_event_on_unknown_variant() {
        let sink = CapturingSink::default();
        let _ = quote_order("Alien", "Mediano", Vec::<String>::new(), &sink);
        assert!(sink.events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let quote = quote_order("Vegetariano", "Pequeño", ["guacamole"], &NoopSink).unwrap();
        let value = serde_json::to_value(&quote).unwrap();

        assert_eq!(value["variant"], "Vegetariano");
        assert_eq!(value["basePrice"], 1200); // 15.00 × 0.8
        assert_eq!(value["toppingPrice"], 350);
        assert_eq!(value["totalPrice"], 1550);
        assert!(value["finalIngredients"].is_array());
    }
}
