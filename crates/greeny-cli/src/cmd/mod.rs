//! Command handlers, one module per storefront action.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod register;
