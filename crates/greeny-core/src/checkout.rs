//! The checkout gate.
//!
//! Checkout here only decides which screen comes next; payment and login
//! are stub boundaries. The gate reads the cart and whether a registered
//! user record exists, nothing else.

use crate::cart::store::CartStore;
use crate::storage::KeyValueStore;

/// Page the storefront navigates to when registration is required.
pub const REGISTRATION_PAGE: &str = "registration.html";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("your cart is empty. Please add items before checking out!")]
    EmptyCart,
}

/// Terminal checkout decisions. Both are hand-offs to screens outside the
/// core's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// A user record exists; hand off to payment and shipping.
    ProceedToPayment,
    /// No user record; send the customer to the registration page first.
    RequireRegistration,
}

/// Gate a checkout attempt: an empty cart is blocked outright; otherwise
/// session presence picks the follow-on screen.
pub fn attempt_checkout<S: KeyValueStore>(
    cart: &CartStore<S>,
    session_present: bool,
) -> Result<Decision, CheckoutError> {
    if cart.item_count() == 0 {
        return Err(CheckoutError::EmptyCart);
    }
    if session_present {
        Ok(Decision::ProceedToPayment)
    } else {
        Ok(Decision::RequireRegistration)
    }
}
