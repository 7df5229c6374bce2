//! Cart line items.

use serde::{Deserialize, Serialize};

/// One distinct purchasable entry in the cart.
///
/// Identity is the `(item_id, special_request)` pair: the same product added
/// twice with textually identical request strings merges into one line, while
/// a differing note (or differing bundle sub-choices, which are folded into
/// the request string before the item reaches the cart) creates a new line.
///
/// Field names serialize in camelCase to match the durable storage layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub item_id: u32,
    pub name: String,
    /// Price of a single unit, non-negative.
    pub unit_price: f64,
    /// Always at least 1 while the line exists in a cart.
    pub quantity: u32,
    pub image_ref: String,
    /// Free-text request, possibly empty. Part of the merge key.
    #[serde(default)]
    pub special_request: String,
    /// Derived: `unit_price * quantity`, recomputed on every mutation.
    pub line_total: f64,
    #[serde(default)]
    pub is_bundle: bool,
}

impl CartLineItem {
    /// The by-value identity used for deduplicated merging.
    #[must_use]
    pub fn merge_key(&self) -> (u32, &str) {
        (self.item_id, self.special_request.as_str())
    }

    /// Recompute `line_total` from the current unit price and quantity.
    pub fn recompute_total(&mut self) {
        self.line_total = self.unit_price * f64::from(self.quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::CartLineItem;

    fn lemonade(request: &str) -> CartLineItem {
        CartLineItem {
            item_id: 42,
            name: "Lemonade".to_string(),
            unit_price: 3.25,
            quantity: 2,
            image_ref: "img/lemonade.jpg".to_string(),
            special_request: request.to_string(),
            line_total: 6.5,
            is_bundle: false,
        }
    }

    #[test]
    fn merge_key_includes_request_text() {
        assert_eq!(lemonade("A").merge_key(), (42, "A"));
        assert_ne!(lemonade("A").merge_key(), lemonade("B").merge_key());
        assert_eq!(lemonade("").merge_key(), lemonade("").merge_key());
    }

    #[test]
    fn recompute_total_tracks_quantity() {
        let mut item = lemonade("");
        item.quantity = 5;
        item.recompute_total();
        assert!((item.line_total - 16.25).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_with_storage_field_names() {
        let json = serde_json::to_value(lemonade("no ice")).unwrap();
        assert_eq!(json["itemId"], 42);
        assert_eq!(json["unitPrice"], 3.25);
        assert_eq!(json["specialRequest"], "no ice");
        assert_eq!(json["lineTotal"], 6.5);
        assert_eq!(json["isBundle"], false);
    }
}
