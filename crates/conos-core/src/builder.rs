//! # Cone Builder
//!
//! Topping accumulation and quote construction.
//!
//! ## Accumulation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ConeBuilder::topping(name)                           │
//! │                                                                         │
//! │  name in topping catalog?                                               │
//! │       │                                                                 │
//! │       ├── no  → no-op (clients may send arbitrary strings)             │
//! │       │                                                                 │
//! │       ├── yes, already added → no-op (no double billing)               │
//! │       │                                                                 │
//! │       └── yes, new → append to ingredients + added list,               │
//! │                      add price to running topping total                 │
//! │                                                                         │
//! │  Toppings keep the order they were first successfully added,            │
//! │  not catalog order.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The builder moves by value through the fluent calls and is consumed by
//! [`ConeBuilder::build`], so a finished quote can never be mutated
//! through a leftover builder.

use crate::catalog;
use crate::cone::Cone;
use crate::money::Money;
use crate::quote::Quote;

// =============================================================================
// House Recipes
// =============================================================================

/// Toppings of the house premium recipe.
pub const PREMIUM_RECIPE: [&str; 3] = ["queso_extra", "guacamole", "bacon"];

/// Toppings of the house economy recipe.
pub const ECONOMY_RECIPE: [&str; 2] = ["queso_extra", "jalapeños"];

// =============================================================================
// Cone Builder
// =============================================================================

/// Accumulates toppings onto a base cone and builds the final [`Quote`].
#[derive(Debug, Clone)]
pub struct ConeBuilder {
    cone: Cone,
    added_toppings: Vec<String>,
    topping_price: Money,
}

impl ConeBuilder {
    /// Wraps a freshly assembled cone with no toppings yet.
    pub fn new(cone: Cone) -> Self {
        ConeBuilder {
            cone,
            added_toppings: Vec::new(),
            topping_price: Money::zero(),
        }
    }

    /// Adds a single topping. Safe to call repeatedly.
    ///
    /// Unknown toppings and repeats are silently ignored; see the module
    /// docs for the full rule set.
    ///
    /// ## Example
    /// ```rust
    /// use conos_core::builder::ConeBuilder;
    /// use conos_core::cone::Cone;
    ///
    /// let cone = Cone::assemble("Carnívoro", "Mediano").unwrap();
    /// let builder = ConeBuilder::new(cone)
    ///     .topping("bacon")
    ///     .topping("bacon")        // repeat: ignored
    ///     .topping("moon_dust");   // unknown: ignored
    ///
    /// assert_eq!(builder.added_toppings(), ["bacon"]);
    /// assert_eq!(builder.topping_price().cents(), 450);
    /// ```
    pub fn topping(mut self, name: &str) -> Self {
        let price = match catalog::topping_price(name) {
            Some(price) => price,
            None => return self,
        };

        if self.added_toppings.iter().any(|added| added == name) {
            return self;
        }

        self.added_toppings.push(name.to_string());
        self.cone.ingredients.push(name.to_string());
        self.topping_price += price;
        self
    }

    /// Adds each topping in order, applying the single-topping rules.
    pub fn toppings<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .fold(self, |builder, name| builder.topping(name.as_ref()))
    }

    /// Applies the house premium recipe.
    pub fn premium(self) -> Self {
        self.toppings(PREMIUM_RECIPE)
    }

    /// Applies the house economy recipe.
    pub fn economy(self) -> Self {
        self.toppings(ECONOMY_RECIPE)
    }

    /// Toppings added so far, in first-added order.
    pub fn added_toppings(&self) -> &[String] {
        &self.added_toppings
    }

    /// Running total of added topping prices.
    pub fn topping_price(&self) -> Money {
        self.topping_price
    }

    /// Builds the final immutable quote.
    ///
    /// The quote's `base_price` is already size-scaled, and
    /// `total_price = base_price + topping_price`.
    ///
    /// The base/added split is by membership in the added-toppings list:
    /// an ingredient string equal to an added topping is reported under
    /// `added_toppings` only, even when the variant's base recipe also
    /// contains it.
    pub fn build(self) -> Quote {
        let base_price = self.cone.scaled_base_price();
        let total_price = base_price + self.topping_price;

        let mut base_ingredients = Vec::new();
        for ingredient in &self.cone.ingredients {
            if !self.added_toppings.contains(ingredient) {
                base_ingredients.push(ingredient.clone());
            }
        }

        Quote {
            variant: self.cone.variant,
            size: self.cone.size,
            base_ingredients,
            added_toppings: self.added_toppings,
            final_ingredients: self.cone.ingredients,
            base_price,
            topping_price: self.topping_price,
            total_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(variant: &str, size: &str) -> ConeBuilder {
        ConeBuilder::new(Cone::assemble(variant, size).unwrap())
    }

    #[test]
    fn test_accumulates_known_toppings_in_order() {
        let quote = builder("Carnívoro", "Mediano")
            .topping("bacon")
            .topping("queso_extra")
            .build();

        assert_eq!(quote.added_toppings, vec!["bacon", "queso_extra"]);
        assert_eq!(quote.topping_price.cents(), 700);
        // Appended after the base, first-added order preserved.
        assert_eq!(
            quote.final_ingredients[quote.final_ingredients.len() - 2..],
            ["bacon".to_string(), "queso_extra".to_string()]
        );
    }

    #[test]
    fn test_repeat_topping_is_idempotent() {
        let once = builder("Vegetariano", "Mediano").topping("guacamole").build();
        let twice = builder("Vegetariano", "Mediano")
            .topping("guacamole")
            .topping("guacamole")
            .build();

        assert_eq!(once.added_toppings, twice.added_toppings);
        assert_eq!(once.topping_price, twice.topping_price);
        assert_eq!(once.final_ingredients, twice.final_ingredients);
    }

    #[test]
    fn test_unknown_topping_is_ignored() {
        let plain = builder("Vegetariano", "Mediano").build();
        let with_junk = builder("Vegetariano", "Mediano")
            .topping("not_a_topping")
            .build();

        assert_eq!(with_junk.added_toppings, Vec::<String>::new());
        assert_eq!(with_junk.total_price, plain.total_price);
        assert_eq!(with_junk.final_ingredients, plain.final_ingredients);
    }

    #[test]
    fn test_toppings_bulk_matches_singles() {
        let bulk = builder("Carnívoro", "Grande")
            .toppings(["bacon", "jalapeños"])
            .build();
        let singles = builder("Carnívoro", "Grande")
            .topping("bacon")
            .topping("jalapeños")
            .build();

        assert_eq!(bulk.total_price, singles.total_price);
        assert_eq!(bulk.added_toppings, singles.added_toppings);
    }

    #[test]
    fn test_premium_recipe() {
        let quote = builder("Carnívoro", "Mediano").premium().build();

        assert_eq!(quote.added_toppings, PREMIUM_RECIPE.to_vec());
        // 2.50 + 3.50 + 4.50 = 10.50 on top of the 18.00 base.
        assert_eq!(quote.topping_price.cents(), 1050);
        assert_eq!(quote.total_price.cents(), 2850);
    }

    #[test]
    fn test_economy_recipe_matches_manual_toppings() {
        let preset = builder("Vegetariano", "Pequeño").economy().build();
        let manual = builder("Vegetariano", "Pequeño")
            .toppings(ECONOMY_RECIPE)
            .build();

        assert_eq!(preset.total_price, manual.total_price);
        assert_eq!(preset.added_toppings, manual.added_toppings);
    }

    #[test]
    fn test_base_split_excludes_colliding_base_ingredient() {
        // Saludable's base recipe already contains tomate_cherry, which is
        // also a catalog topping. Adding it as a topping removes the string
        // from the reported base subset entirely while final_ingredients
        // keeps both occurrences.
        let quote = builder("Saludable", "Mediano").topping("tomate_cherry").build();

        assert_eq!(quote.added_toppings, vec!["tomate_cherry"]);
        assert!(!quote.base_ingredients.contains(&"tomate_cherry".to_string()));
        assert_eq!(quote.base_ingredients.len(), 6);
        assert_eq!(
            quote
                .final_ingredients
                .iter()
                .filter(|i| *i == "tomate_cherry")
                .count(),
            2
        );
        // Billed once, like any other topping.
        assert_eq!(quote.topping_price.cents(), 200);
    }
}
