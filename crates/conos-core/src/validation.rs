//! # Validation Module
//!
//! Strict input validation for the order storage boundary.
//!
//! ## Two Policies, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Where Each Policy Applies                           │
//! │                                                                         │
//! │  Pricing core (quote_order)          Order storage (conos-orders)      │
//! │  ──────────────────────────          ───────────────────────────       │
//! │  unknown topping → dropped           unknown topping → REJECTED        │
//! │  unknown size    → ×1.0              unknown size    → REJECTED        │
//! │  unknown variant → UnknownVariant    unknown variant → REJECTED        │
//! │                                                                         │
//! │  A quote is an ephemeral answer; an order is a durable record.          │
//! │  Records only persist values the catalogs can still explain later.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog;
use crate::error::{ValidationError, ValidationResult};
use crate::MAX_CLIENT_NAME_LEN;

/// Validates a client name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
///
/// ## Example
/// ```rust
/// use conos_core::validation::validate_client;
///
/// assert!(validate_client("Ana Martínez").is_ok());
/// assert!(validate_client("  ").is_err());
/// ```
pub fn validate_client(client: &str) -> ValidationResult<()> {
    let client = client.trim();

    if client.is_empty() {
        return Err(ValidationError::Required {
            field: "client".to_string(),
        });
    }

    if client.chars().count() > MAX_CLIENT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "client".to_string(),
            max: MAX_CLIENT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates that a variant name is a catalog member.
pub fn validate_variant(variant: &str) -> ValidationResult<()> {
    if catalog::variant(variant).is_none() {
        return Err(ValidationError::NotAllowed {
            field: "variant".to_string(),
            allowed: catalog::variant_names(),
        });
    }

    Ok(())
}

/// Validates that a size name is a catalog member.
///
/// Stricter than the pricing core, which accepts any size string.
pub fn validate_size(size: &str) -> ValidationResult<()> {
    if !catalog::sizes().iter().any(|spec| spec.name == size) {
        return Err(ValidationError::NotAllowed {
            field: "size".to_string(),
            allowed: catalog::size_names(),
        });
    }

    Ok(())
}

/// Validates that every requested topping is a catalog member.
///
/// Collects every offender so the caller sees the full rejection at once.
///
/// ## Example
/// ```rust
/// use conos_core::validation::validate_toppings;
///
/// let toppings = vec!["bacon".to_string(), "ketchup".to_string()];
/// let err = validate_toppings(&toppings).unwrap_err();
/// assert!(err.to_string().contains("ketchup"));
/// ```
pub fn validate_toppings(toppings: &[String]) -> ValidationResult<()> {
    let rejected: Vec<String> = toppings
        .iter()
        .filter(|topping| !catalog::is_known_topping(topping))
        .cloned()
        .collect();

    if !rejected.is_empty() {
        return Err(ValidationError::EntriesNotAllowed {
            field: "toppings".to_string(),
            rejected,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_client() {
        assert!(validate_client("Ana").is_ok());
        assert!(validate_client("").is_err());
        assert!(validate_client("   ").is_err());
        assert!(validate_client(&"a".repeat(101)).is_err());
        assert!(validate_client(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_variant() {
        assert!(validate_variant("Carnívoro").is_ok());
        assert!(validate_variant("Saludable").is_ok());

        let err = validate_variant("Alien").unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
    }

    #[test]
    fn test_validate_size_is_strict() {
        assert!(validate_size("Pequeño").is_ok());
        assert!(validate_size("Grande").is_ok());

        // The pricing core would accept this; storage does not.
        assert!(validate_size("XL").is_err());
    }

    #[test]
    fn test_validate_toppings_lists_every_offender() {
        let toppings = vec![
            "bacon".to_string(),
            "ketchup".to_string(),
            "mayo".to_string(),
        ];
        let err = validate_toppings(&toppings).unwrap_err();
        match err {
            ValidationError::EntriesNotAllowed { rejected, .. } => {
                assert_eq!(rejected, vec!["ketchup", "mayo"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_toppings_accepts_empty_and_known() {
        assert!(validate_toppings(&[]).is_ok());
        assert!(validate_toppings(&["bacon".to_string(), "guacamole".to_string()]).is_ok());
    }
}
