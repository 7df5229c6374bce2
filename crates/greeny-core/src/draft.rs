//! Selection drafts: the product currently open in the detail view.
//!
//! At most one draft is active at a time. A draft accumulates the chosen
//! quantity, an optional free-text request, and — for bundle deals — three
//! sub-choice selections from the product family's catalog. Committing
//! turns the draft into a [`CartLineItem`]; nothing touches the cart until
//! then, and discarding the draft has no cart effect at all.

use crate::cart::item::CartLineItem;
use crate::catalog::BundleFamily;

/// Number of sub-choices a bundle deal requires.
pub const BUNDLE_CHOICE_SLOTS: usize = 3;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("no item selected to add")]
    NoSelection,

    #[error("please select all 3 choices for \"{name}\"")]
    MissingChoices { name: String },

    #[error("\"{value}\" is not an available choice for this bundle")]
    UnknownChoice { value: String },

    #[error("choice slot {slot} does not exist")]
    BadSlot { slot: usize },

    #[error("this product has no bundle choices")]
    NotABundle,
}

/// The open-request payload handed over by the UI layer.
#[derive(Debug, Clone)]
pub struct ProductDetails {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub unit_price: f64,
    pub image_ref: String,
}

/// Ephemeral, uncommitted selection state for one product.
#[derive(Debug, Clone)]
pub struct SelectionDraft {
    product: ProductDetails,
    family: Option<BundleFamily>,
    choices: [Option<String>; BUNDLE_CHOICE_SLOTS],
    quantity: u32,
    note: String,
}

impl SelectionDraft {
    fn new(product: ProductDetails) -> Self {
        let family = BundleFamily::for_product(product.id);
        Self {
            product,
            family,
            choices: [None, None, None],
            quantity: 1,
            note: String::new(),
        }
    }

    #[must_use]
    pub fn product(&self) -> &ProductDetails {
        &self.product
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub fn is_bundle_deal(&self) -> bool {
        self.family.is_some()
    }

    /// Running total shown on the add button: unit price times quantity.
    #[must_use]
    pub fn display_total(&self) -> f64 {
        self.product.unit_price * f64::from(self.quantity)
    }

    /// The `<ChoiceType>` prefix of a bundle's special-request string,
    /// inferred from the product name.
    fn choice_type(&self) -> &'static str {
        if self.product.name.contains("Smoothie") {
            "Smoothie Choices"
        } else if self.product.name.contains("Juice") {
            "Juice Choices"
        } else {
            "Drink Choices"
        }
    }

    /// Fold quantity, sub-choices, and the free-text note into a cart line.
    fn into_line_item(self) -> Result<CartLineItem, DraftError> {
        let special_request = if self.family.is_some() {
            let mut values = Vec::with_capacity(BUNDLE_CHOICE_SLOTS);
            for slot in &self.choices {
                match slot {
                    Some(v) => values.push(v.as_str()),
                    None => {
                        return Err(DraftError::MissingChoices {
                            name: self.product.name.clone(),
                        });
                    }
                }
            }
            let joined = values.join(", ");
            if self.note.is_empty() {
                format!("{}: {joined}", self.choice_type())
            } else {
                format!("{}: {joined}. Note: {}", self.choice_type(), self.note)
            }
        } else {
            self.note.clone()
        };

        let mut item = CartLineItem {
            item_id: self.product.id,
            name: self.product.name,
            unit_price: self.product.unit_price,
            quantity: self.quantity,
            image_ref: self.product.image_ref,
            special_request,
            line_total: 0.0,
            is_bundle: self.family.is_some(),
        };
        item.recompute_total();
        Ok(item)
    }
}

/// Holder of the at-most-one active [`SelectionDraft`].
#[derive(Debug, Default)]
pub struct ModalState {
    active: Option<SelectionDraft>,
}

impl ModalState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a product in the detail view, replacing any previous draft.
    /// Quantity resets to 1 and all sub-choice slots start empty.
    pub fn open(&mut self, product: ProductDetails) -> &SelectionDraft {
        self.active.insert(SelectionDraft::new(product))
    }

    #[must_use]
    pub fn draft(&self) -> Option<&SelectionDraft> {
        self.active.as_ref()
    }

    /// Adjust the chosen quantity by `delta`, clamped to a minimum of 1.
    pub fn change_quantity(&mut self, delta: i64) -> Result<u32, DraftError> {
        let draft = self.active.as_mut().ok_or(DraftError::NoSelection)?;
        let next = i64::from(draft.quantity) + delta;
        draft.quantity = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
        Ok(draft.quantity)
    }

    /// Fill one of the three bundle sub-choice slots. The value must exist
    /// in the product family's catalog.
    pub fn set_choice(&mut self, slot: usize, value: &str) -> Result<(), DraftError> {
        let draft = self.active.as_mut().ok_or(DraftError::NoSelection)?;
        let family = draft.family.ok_or(DraftError::NotABundle)?;
        if slot >= BUNDLE_CHOICE_SLOTS {
            return Err(DraftError::BadSlot { slot });
        }
        if !family.contains(value) {
            return Err(DraftError::UnknownChoice {
                value: value.to_string(),
            });
        }
        draft.choices[slot] = Some(value.to_string());
        Ok(())
    }

    /// Set the free-text special request. Leading/trailing whitespace is
    /// trimmed, matching the form handling on the storefront page.
    pub fn set_note(&mut self, note: &str) -> Result<(), DraftError> {
        let draft = self.active.as_mut().ok_or(DraftError::NoSelection)?;
        draft.note = note.trim().to_string();
        Ok(())
    }

    /// Consume the draft into a cart line item. Bundle drafts fail unless
    /// all three sub-choices are filled; on failure the draft stays active
    /// so the user can correct it.
    pub fn commit(&mut self) -> Result<CartLineItem, DraftError> {
        let draft = self.active.as_ref().ok_or(DraftError::NoSelection)?;
        let item = draft.clone().into_line_item().inspect_err(|e| {
            tracing::debug!(error = %e, "commit blocked, draft kept active");
        })?;
        self.active = None;
        Ok(item)
    }

    /// Drop the draft without touching the cart.
    pub fn discard(&mut self) {
        self.active = None;
    }
}
