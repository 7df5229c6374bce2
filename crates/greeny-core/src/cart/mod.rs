//! The persistent shopping cart: line items and the owning store.

pub mod item;
pub mod store;

pub use item::CartLineItem;
pub use store::CartStore;
