//! greeny-core — the Greeny Store cart core.
//!
//! Everything the storefront UI needs that is not pixels: the persistent
//! cart store, the product-detail selection draft, bundle choice catalogs,
//! the checkout gate, registration/contact validation, and a read-only
//! rendering projection. The UI layer (CLI, or a browser shell) only calls
//! operations and reads snapshots; the cart itself is owned here.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums at module boundaries; recoverable
//!   persistence faults are logged and swallowed where the contract says so.
//! - **Logging**: `tracing` macros (`debug!`, `warn!`, `error!`).
//! - **Storage**: everything durable goes through [`storage::KeyValueStore`],
//!   so the core tests run against an in-memory fake.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod draft;
pub mod escape;
pub mod money;
pub mod render;
pub mod storage;
pub mod user;

pub use cart::item::CartLineItem;
pub use cart::store::CartStore;
pub use checkout::{attempt_checkout, CheckoutError, Decision};
pub use draft::{DraftError, ModalState, ProductDetails, SelectionDraft};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
