//! # Cone Assembly
//!
//! Builds the base cone for a quote: variant lookup plus a private copy
//! of the variant's base ingredients.

use serde::Serialize;

use crate::catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// An in-progress cone, owned by a single pipeline invocation.
///
/// ## Design Notes
/// - `base_ingredients` is a deep copy of the catalog entry, so topping
///   accumulation can never mutate the shared catalog
/// - `ingredients` starts equal to `base_ingredients` and grows as
///   toppings are added
/// - `size` is kept verbatim, even when unrecognized; pricing resolves it
///   through the lenient size table at build time
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cone {
    /// Variant name (catalog key).
    pub variant: String,

    /// Size name as requested by the caller.
    pub size: String,

    /// Copy of the variant's base ingredients, in preparation order.
    pub base_ingredients: Vec<String>,

    /// Current ingredient list: base ingredients plus added toppings.
    pub ingredients: Vec<String>,

    /// Variant base price before size scaling.
    pub base_price: Money,
}

impl Cone {
    /// Assembles a base cone for a variant and size.
    ///
    /// ## Errors
    /// `CoreError::UnknownVariant` when the variant is outside the closed
    /// catalog. The size is unconstrained: unrecognized sizes price at
    /// ×1.0 later in the pipeline.
    ///
    /// ## Example
    /// ```rust
    /// use conos_core::cone::Cone;
    ///
    /// let cone = Cone::assemble("Vegetariano", "Grande").unwrap();
    /// assert_eq!(cone.ingredients, cone.base_ingredients);
    /// assert_eq!(cone.base_price.cents(), 1500);
    ///
    /// assert!(Cone::assemble("Alien", "Grande").is_err());
    /// ```
    pub fn assemble(variant_name: &str, size_name: &str) -> CoreResult<Cone> {
        let spec = catalog::variant(variant_name).ok_or_else(|| CoreError::UnknownVariant {
            name: variant_name.to_string(),
            available: catalog::variant_names(),
        })?;

        let base_ingredients: Vec<String> = spec
            .base_ingredients
            .iter()
            .map(|ingredient| ingredient.to_string())
            .collect();

        Ok(Cone {
            variant: spec.name.to_string(),
            size: size_name.to_string(),
            ingredients: base_ingredients.clone(),
            base_ingredients,
            base_price: spec.base_price,
        })
    }

    /// Base price after applying the size factor.
    pub fn scaled_base_price(&self) -> Money {
        self.base_price.scale(catalog::size_factor(&self.size))
    }
}
