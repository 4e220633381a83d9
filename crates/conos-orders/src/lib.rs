//! # conos-orders: Order Store and Event Journal for Conos
//!
//! The stateful layer around the pure pricing core. An HTTP or desktop
//! front end would call into this crate; nothing here knows about wire
//! formats.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Conos Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              API layer (HTTP, CLI, desktop - out of scope)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ conos-orders (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   store   │  │  journal  │  │  service  │                  │   │
//! │  │   │  Orders   │  │  Events   │  │ compose + │                  │   │
//! │  │   │  (Mutex)  │  │  (Mutex)  │  │   stats   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              conos-core (pure pricing pipeline)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`order`] - Order records
//! - [`store`] - Thread-safe in-memory order repository (strict validation)
//! - [`journal`] - In-memory [`conos_core::EventSink`] with counters
//! - [`service`] - Composes store + journal + pricing pipeline
//! - [`error`] - Store error types

pub mod error;
pub mod journal;
pub mod order;
pub mod service;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use journal::{EventJournal, JournalEntry, JournalStats};
pub use order::{NewOrder, Order};
pub use service::{OrderService, ServiceStats};
pub use store::{OrderFilter, OrderStore};
