//! # conos-core: Pure Pricing Logic for Conos
//!
//! This crate is the **heart** of Conos. It turns an order request
//! (variant, size, requested toppings) into a deterministic [`Quote`]:
//! a final price plus an itemized ingredient list.
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Conos Pricing Pipeline                          │
//! │                                                                         │
//! │   (variant, size, toppings[])                                           │
//! │             │                                                           │
//! │             ▼                                                           │
//! │   ┌──────────────────┐     ┌──────────────────┐     ┌───────────────┐  │
//! │   │  Cone::assemble  │────►│   ConeBuilder    │────►│    build()    │  │
//! │   │  variant lookup  │     │  accumulate      │     │  scale base,  │  │
//! │   │  copy base       │     │  toppings        │     │  sum toppings │  │
//! │   │  ingredients     │     │  (dedup, drop    │     │  emit Quote   │  │
//! │   │                  │     │   unknown)       │     │               │  │
//! │   └──────────────────┘     └──────────────────┘     └───────────────┘  │
//! │             │                                               │           │
//! │     UnknownVariant?                                         ▼           │
//! │     (only fallible step)                            one event to the    │
//! │                                                     injected EventSink  │
//! │                                                                         │
//! │   NO I/O • NO SHARED STATE • PURE FUNCTION OF INPUTS + STATIC CATALOGS  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Static variant/size/topping tables and lookups
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cone`] - Cone assembly (variant + size → base cone)
//! - [`builder`] - Topping accumulation and quote building
//! - [`quote`] - The Quote value and the `quote_order` entry point
//! - [`events`] - The injected event-sink capability
//! - [`error`] - Domain error types
//! - [`validation`] - Strict input validation for the storage boundary
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every quote is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Lenient Core**: Unknown toppings are dropped, unknown sizes price at ×1.0;
//!    only an unknown variant is an error
//!
//! ## Example Usage
//!
//! ```rust
//! use conos_core::{quote_order, NoopSink};
//!
//! let quote = quote_order(
//!     "Carnívoro",
//!     "Mediano",
//!     ["queso_extra", "bacon"],
//!     &NoopSink,
//! )
//! .unwrap();
//!
//! // 18.00 base × 1.0 + 2.50 + 4.50 = 25.00
//! assert_eq!(quote.total_price.cents(), 2500);
//! assert_eq!(quote.added_toppings, vec!["queso_extra", "bacon"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod catalog;
pub mod cone;
pub mod error;
pub mod events;
pub mod money;
pub mod quote;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use conos_core::Money` instead of
// `use conos_core::money::Money`

pub use builder::ConeBuilder;
pub use catalog::{SizeFactor, SizeSpec, ToppingSpec, VariantSpec};
pub use cone::Cone;
pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use events::{Event, EventKind, EventSink, NoopSink, SinkError};
pub use money::Money;
pub use quote::{quote_order, Quote};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a client name on an order.
///
/// Orders are keyed by a free-form client name rather than an account, so
/// the storage boundary caps its length.
pub const MAX_CLIENT_NAME_LEN: usize = 100;
