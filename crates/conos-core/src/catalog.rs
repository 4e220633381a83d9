//! # Catalog Module
//!
//! Static menu data: cone variants, sizes, and toppings.
//!
//! ## Catalog Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Static Catalogs                               │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   VariantSpec   │   │    SizeSpec     │   │   ToppingSpec   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Carnívoro      │   │  Pequeño ×0.8   │   │  queso_extra    │       │
//! │  │  Vegetariano    │   │  Mediano ×1.0   │   │  bacon          │       │
//! │  │  Saludable      │   │  Grande  ×1.3   │   │  … (15 total)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Read-only after compile; every quote computation shares these tables. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup policy differs per table: an unknown variant is an error at
//! assembly time, an unknown size silently prices at ×1.0, and an unknown
//! topping is silently dropped by the builder.

use serde::Serialize;

use crate::money::Money;

// =============================================================================
// Size Factor
// =============================================================================

/// Size price factor represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 10000 bps = ×1.0.
/// 13000 bps = ×1.3 (a Grande cone). Integer bps keep the price
/// scaling exact; see [`Money::scale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeFactor(u32);

impl SizeFactor {
    /// Creates a size factor from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        SizeFactor(bps)
    }

    /// Returns the factor in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// The neutral factor (×1.0), used for any unrecognized size.
    #[inline]
    pub const fn identity() -> Self {
        SizeFactor(10000)
    }

    /// Checks if this is the neutral factor.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        self.0 == 10000
    }
}

impl Default for SizeFactor {
    fn default() -> Self {
        SizeFactor::identity()
    }
}

// =============================================================================
// Catalog Entry Types
// =============================================================================

/// A cone variant: a named recipe with fixed base ingredients and price.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VariantSpec {
    /// Menu name, also the lookup key.
    pub name: &'static str,

    /// Price before size scaling, in cents.
    pub base_price: Money,

    /// Base ingredients in preparation order.
    pub base_ingredients: &'static [&'static str],
}

/// A cone size and its price factor.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SizeSpec {
    /// Menu name, also the lookup key.
    pub name: &'static str,

    /// Factor applied to the variant's base price.
    pub factor: SizeFactor,
}

/// An optional add-on with a fixed incremental price.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToppingSpec {
    /// Menu name, also the lookup key.
    pub name: &'static str,

    /// Incremental price in cents.
    pub price: Money,
}

// =============================================================================
// Catalog Data
// =============================================================================

/// The closed set of cone variants.
pub const VARIANTS: [VariantSpec; 3] = [
    VariantSpec {
        name: "Carnívoro",
        base_price: Money::from_cents(1800),
        base_ingredients: &[
            "tortilla_de_maíz",
            "carne_molida",
            "queso_cheddar",
            "lechuga",
            "tomate",
            "salsa_picante",
        ],
    },
    VariantSpec {
        name: "Vegetariano",
        base_price: Money::from_cents(1500),
        base_ingredients: &[
            "tortilla_de_maíz",
            "frijoles_refritos",
            "queso_vegano",
            "lechuga",
            "tomate",
            "aguacate",
            "salsa_verde",
        ],
    },
    VariantSpec {
        name: "Saludable",
        base_price: Money::from_cents(1600),
        base_ingredients: &[
            "tortilla_integral",
            "pollo_a_la_plancha",
            "queso_bajo_en_grasa",
            "espinaca",
            "tomate_cherry",
            "pepino",
            "aderezo_yogurt",
        ],
    },
];

/// The closed set of cone sizes.
pub const SIZES: [SizeSpec; 3] = [
    SizeSpec {
        name: "Pequeño",
        factor: SizeFactor::from_bps(8000),
    },
    SizeSpec {
        name: "Mediano",
        factor: SizeFactor::from_bps(10000),
    },
    SizeSpec {
        name: "Grande",
        factor: SizeFactor::from_bps(13000),
    },
];

/// The closed set of toppings and their incremental prices.
pub const TOPPINGS: [ToppingSpec; 15] = [
    ToppingSpec {
        name: "queso_extra",
        price: Money::from_cents(250),
    },
    ToppingSpec {
        name: "papas_al_hilo",
        price: Money::from_cents(300),
    },
    ToppingSpec {
        name: "salchicha_extra",
        price: Money::from_cents(400),
    },
    ToppingSpec {
        name: "bacon",
        price: Money::from_cents(450),
    },
    ToppingSpec {
        name: "cebolla_caramelizada",
        price: Money::from_cents(200),
    },
    ToppingSpec {
        name: "guacamole",
        price: Money::from_cents(350),
    },
    ToppingSpec {
        name: "jalapeños",
        price: Money::from_cents(150),
    },
    ToppingSpec {
        name: "tomate_cherry",
        price: Money::from_cents(200),
    },
    ToppingSpec {
        name: "aguacate",
        price: Money::from_cents(300),
    },
    ToppingSpec {
        name: "pollo_desmenuzado",
        price: Money::from_cents(400),
    },
    ToppingSpec {
        name: "champiñones",
        price: Money::from_cents(250),
    },
    ToppingSpec {
        name: "pimiento_asado",
        price: Money::from_cents(200),
    },
    ToppingSpec {
        name: "salsa_chipotle",
        price: Money::from_cents(100),
    },
    ToppingSpec {
        name: "salsa_ranch",
        price: Money::from_cents(100),
    },
    ToppingSpec {
        name: "salsa_barbacoa",
        price: Money::from_cents(100),
    },
];

// =============================================================================
// Lookups
// =============================================================================

/// Looks up a variant by name.
///
/// Returns `None` for names outside the closed set; the assembler turns
/// that into an `UnknownVariant` error.
pub fn variant(name: &str) -> Option<&'static VariantSpec> {
    VARIANTS.iter().find(|spec| spec.name == name)
}

/// Returns the price factor for a size name.
///
/// Unrecognized sizes price at ×1.0. This is a documented lenient
/// fallback, not an error.
///
/// ## Example
/// ```rust
/// use conos_core::catalog::size_factor;
///
/// assert_eq!(size_factor("Grande").bps(), 13000);
/// assert_eq!(size_factor("XL").bps(), 10000); // fallback
/// ```
pub fn size_factor(name: &str) -> SizeFactor {
    SIZES
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.factor)
        .unwrap_or_default()
}

/// Looks up a topping's incremental price by name.
pub fn topping_price(name: &str) -> Option<Money> {
    TOPPINGS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.price)
}

/// Checks whether a name is in the topping catalog.
pub fn is_known_topping(name: &str) -> bool {
    topping_price(name).is_some()
}

// =============================================================================
// Introspection
// =============================================================================
// Read-only views for "available options" surfaces.

/// All variants, for menu listings.
pub fn variants() -> &'static [VariantSpec] {
    &VARIANTS
}

/// All sizes, for menu listings.
pub fn sizes() -> &'static [SizeSpec] {
    &SIZES
}

/// All toppings with prices, for menu listings.
pub fn toppings() -> &'static [ToppingSpec] {
    &TOPPINGS
}

/// Variant names as owned strings, for error messages and listings.
pub fn variant_names() -> Vec<String> {
    VARIANTS.iter().map(|spec| spec.name.to_string()).collect()
}

/// Size names as owned strings, for the strict storage boundary.
pub fn size_names() -> Vec<String> {
    SIZES.iter().map(|spec| spec.name.to_string()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_lookup() {
        let spec = variant("Carnívoro").unwrap();
        assert_eq!(spec.base_price.cents(), 1800);
        assert_eq!(spec.base_ingredients.len(), 6);

        assert!(variant("Alien").is_none());
    }

    #[test]
    fn test_every_variant_name_maps_to_one_spec() {
        for spec in variants() {
            let matches = VARIANTS.iter().filter(|s| s.name == spec.name).count();
            assert_eq!(matches, 1, "duplicate variant name {}", spec.name);
        }
    }

    #[test]
    fn test_size_factor_lookup() {
        assert_eq!(size_factor("Pequeño").bps(), 8000);
        assert_eq!(size_factor("Mediano").bps(), 10000);
        assert_eq!(size_factor("Grande").bps(), 13000);
    }

    #[test]
    fn test_unknown_size_falls_back_to_identity() {
        assert!(size_factor("XL").is_identity());
        assert!(size_factor("").is_identity());
    }

    #[test]
    fn test_topping_lookup() {
        assert_eq!(topping_price("queso_extra").unwrap().cents(), 250);
        assert_eq!(topping_price("bacon").unwrap().cents(), 450);
        assert!(topping_price("not_a_topping").is_none());
    }

    #[test]
    fn test_topping_catalog_size() {
        assert_eq!(toppings().len(), 15);
        assert!(is_known_topping("salsa_barbacoa"));
        assert!(!is_known_topping("ketchup"));
    }

    #[test]
    fn test_introspection_listings() {
        assert_eq!(
            variant_names(),
            vec!["Carnívoro", "Vegetariano", "Saludable"]
        );
        assert_eq!(size_names(), vec!["Pequeño", "Mediano", "Grande"]);
    }
}
