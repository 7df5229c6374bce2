//! Bundle-deal choice catalogs.
//!
//! Three products are "bundle deals": buying one means picking three drinks
//! from that product family's fixed menu. The menus are static data keyed
//! by product id, injected into the selection draft rather than living in
//! any UI layer.

/// One pickable option inside a bundle family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleChoice {
    /// Stable value stored into the cart's special-request string.
    pub value: &'static str,
    /// Display label, including the standalone price of the drink.
    pub label: &'static str,
}

/// The three bundle-deal product families and their fixed product ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleFamily {
    Smoothie,
    FreshJuice,
    DetoxEnergy,
}

/// First product id treated as a bundle deal.
pub const BUNDLE_ID_MIN: u32 = 905;
/// Last product id treated as a bundle deal.
pub const BUNDLE_ID_MAX: u32 = 907;

const SMOOTHIE_CHOICES: &[BundleChoice] = &[
    BundleChoice { value: "Energy Boost", label: "Energy Boost Smoothie (€5.10)" },
    BundleChoice { value: "Green Detox", label: "Green Detox Smoothie (€5.50)" },
    BundleChoice { value: "Mango Delight", label: "Mango Delight Smoothie (€5.35)" },
    BundleChoice { value: "Diabetic-Friendly", label: "Diabetic-Friendly Smoothie (€5.00)" },
];

const FRESH_JUICE_CHOICES: &[BundleChoice] = &[
    BundleChoice { value: "Orange Pure", label: "Orange Pure (€4.50)" },
    BundleChoice { value: "Apple Glow", label: "Apple Glow (€4.30)" },
    BundleChoice { value: "Watermelon Fresh", label: "Watermelon Fresh (€4.70)" },
    BundleChoice { value: "Carrot Delight", label: "Carrot Delight (€4.60)" },
    BundleChoice { value: "Tropical Blast", label: "Tropical Blast (€5.00)" },
];

const DETOX_ENERGY_CHOICES: &[BundleChoice] = &[
    BundleChoice { value: "Ginger Lemon Detox", label: "Ginger Lemon Detox (€4.50)" },
    BundleChoice { value: "Turmeric Shot", label: "Turmeric Shot (€4.80)" },
    BundleChoice { value: "Wheatgrass Pure", label: "Wheatgrass Pure (€5.20)" },
    BundleChoice { value: "Beetroot Revive", label: "Beetroot Revive (€4.90)" },
];

impl BundleFamily {
    /// Map a product id to its bundle family, if it is a bundle deal at all.
    #[must_use]
    pub const fn for_product(product_id: u32) -> Option<Self> {
        match product_id {
            905 => Some(Self::Smoothie),
            906 => Some(Self::FreshJuice),
            907 => Some(Self::DetoxEnergy),
            _ => None,
        }
    }

    /// The fixed menu for this family.
    #[must_use]
    pub const fn choices(self) -> &'static [BundleChoice] {
        match self {
            Self::Smoothie => SMOOTHIE_CHOICES,
            Self::FreshJuice => FRESH_JUICE_CHOICES,
            Self::DetoxEnergy => DETOX_ENERGY_CHOICES,
        }
    }

    /// Whether `value` is a valid selection in this family.
    #[must_use]
    pub fn contains(self, value: &str) -> bool {
        self.choices().iter().any(|c| c.value == value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smoothie => "smoothie",
            Self::FreshJuice => "juice",
            Self::DetoxEnergy => "detox",
        }
    }
}

/// Whether a product id falls in the bundle-deal range.
#[must_use]
pub const fn is_bundle_deal(product_id: u32) -> bool {
    product_id >= BUNDLE_ID_MIN && product_id <= BUNDLE_ID_MAX
}

#[cfg(test)]
mod tests {
    use super::{is_bundle_deal, BundleFamily};

    #[test]
    fn bundle_range_matches_family_lookup() {
        for id in 0..2000 {
            assert_eq!(is_bundle_deal(id), BundleFamily::for_product(id).is_some());
        }
    }

    #[test]
    fn family_menus_are_distinct_and_nonempty() {
        assert_eq!(BundleFamily::Smoothie.choices().len(), 4);
        assert_eq!(BundleFamily::FreshJuice.choices().len(), 5);
        assert_eq!(BundleFamily::DetoxEnergy.choices().len(), 4);
    }

    #[test]
    fn membership_check_is_by_value_not_label() {
        assert!(BundleFamily::Smoothie.contains("Green Detox"));
        assert!(!BundleFamily::Smoothie.contains("Green Detox Smoothie (€5.50)"));
        assert!(!BundleFamily::FreshJuice.contains("Green Detox"));
    }
}
