//! Read-only cart projection for the UI layer.
//!
//! The renderer never mutates the cart; it turns the current lines into an
//! HTML fragment plus the small derived labels (badge count, sidebar
//! header, subtotal). Every piece of user-supplied text is HTML-escaped
//! before it lands in markup — the special-request string and product name
//! may carry attacker-influenced text on a shared device.

use std::fmt::Write as _;

use crate::cart::item::CartLineItem;
use crate::cart::store::CartStore;
use crate::escape::{escape_attr, escape_html};
use crate::money::format_amount;
use crate::storage::KeyValueStore;

/// Longest request preview shown on a cart line before truncation.
pub const REQUEST_PREVIEW_LIMIT: usize = 70;

/// The rendered projection of a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// HTML fragment for the cart body: one `cart-item` block per line, or
    /// the empty-cart placeholder.
    pub body_html: String,
    /// Subtotal with currency symbol, e.g. `€14.50`.
    pub subtotal_label: String,
    /// Sidebar header, e.g. `Cart (3 Items)`.
    pub header_label: String,
    /// Badge text: the total item count.
    pub badge: String,
}

/// Truncate a request note for display, marking the cut with `...`.
/// Truncation is by character so multi-byte text never splits mid-scalar.
#[must_use]
pub fn preview_request(request: &str) -> String {
    if request.chars().count() <= REQUEST_PREVIEW_LIMIT {
        return request.to_string();
    }
    let cut: String = request.chars().take(REQUEST_PREVIEW_LIMIT).collect();
    format!("{cut}...")
}

fn render_line(out: &mut String, index: usize, item: &CartLineItem) {
    let request_html = if item.special_request.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"item-request\">{}</p>",
            escape_html(&preview_request(&item.special_request))
        )
    };

    // infallible: fmt::Write on String cannot error
    let _ = write!(
        out,
        concat!(
            "<div class=\"cart-item\" data-index=\"{index}\">",
            "<div class=\"item-image-wrapper\">",
            "<img src=\"{img}\" alt=\"{alt}\">",
            "</div>",
            "<div class=\"item-details\">",
            "<p class=\"item-name\">{name}</p>",
            "{request}",
            "<div class=\"item-qty-controls\">",
            "<button data-action=\"decrease\" aria-label=\"Decrease\">-</button>",
            "<span class=\"item-qty-display\">{qty}</span>",
            "<button data-action=\"increase\" aria-label=\"Increase\">+</button>",
            "</div>",
            "</div>",
            "<div class=\"item-total-and-remove\">",
            "<span class=\"item-total\">{total}</span>",
            "<button class=\"remove-item\" data-action=\"remove\" aria-label=\"Remove item\">x</button>",
            "</div>",
            "</div>"
        ),
        index = index,
        img = escape_attr(&item.image_ref),
        alt = escape_attr(&item.name),
        name = escape_html(&item.name),
        request = request_html,
        qty = item.quantity,
        total = format_amount(item.line_total),
    );
}

/// Header text with the storefront's singular/plural rule: only a count of
/// exactly 1 reads `Item`.
#[must_use]
pub fn header_label(count: u64) -> String {
    if count == 1 {
        "Cart (1 Item)".to_string()
    } else {
        format!("Cart ({count} Items)")
    }
}

/// Project a cart into its rendered view.
#[must_use]
pub fn render_cart<S: KeyValueStore>(cart: &CartStore<S>) -> CartView {
    let count = cart.item_count();
    let body_html = if cart.is_empty() {
        "<p class=\"cart-empty\">Your cart is empty!</p>".to_string()
    } else {
        let mut out = String::new();
        for (index, item) in cart.items().iter().enumerate() {
            render_line(&mut out, index, item);
        }
        out
    };

    CartView {
        body_html,
        subtotal_label: format_amount(cart.subtotal()),
        header_label: header_label(count),
        badge: count.to_string(),
    }
}
