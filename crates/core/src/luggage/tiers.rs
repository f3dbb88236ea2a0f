use once_cell::sync::Lazy;

use crate::luggage::request::{AgeCategory, TravelClass};

/// Above either ceiling an item cannot be checked at all and must ship as
/// unaccompanied cargo, regardless of travel class.
pub const CARGO_WEIGHT_CEILING_KG: f64 = 32.0;
pub const CARGO_SIZE_CEILING_CM: f64 = 203.0;

/// Cabin limits: per-axis size ceilings and a per-item weight ceiling.
/// `quantity` excludes the one personal item every passenger may add.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarryOnPolicy {
    pub quantity: usize,
    pub weight_limit: f64,
    pub size_limit: [f64; 3],
}

/// Checked limits: `size_limit` bounds the *sum* of the three dimensions,
/// not each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckedPolicy {
    pub allowance: usize,
    pub weight_limit: f64,
    pub size_limit: f64,
}

impl CheckedPolicy {
    /// Applies an age-category add-on: the allowance grows, the weight limit
    /// only ever rises. Carry-on limits are untouched by age categories.
    pub fn with_add_on(mut self, add_on: Option<&AgeAddOn>) -> Self {
        if let Some(add_on) = add_on {
            self.allowance += add_on.allowance;
            self.weight_limit = self.weight_limit.max(add_on.weight_limit);
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierPolicy {
    pub carry_on: CarryOnPolicy,
    pub checked: CheckedPolicy,
}

/// Extra checked allowance for passengers traveling with a child or infant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeAddOn {
    pub allowance: usize,
    pub weight_limit: f64,
}

/// The full read-only tier configuration, resolved once and shared across
/// evaluations. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TierPolicies {
    economy: TierPolicy,
    business: TierPolicy,
    first: TierPolicy,
    child: AgeAddOn,
    infant: AgeAddOn,
}

/// Process-wide standard table; evaluators clone it at construction.
pub static STANDARD_TIERS: Lazy<TierPolicies> = Lazy::new(TierPolicies::standard);

impl TierPolicies {
    /// The published Acme baggage allowances.
    pub fn standard() -> Self {
        let cabin_size = [55.0, 40.0, 23.0];
        Self {
            economy: TierPolicy {
                carry_on: CarryOnPolicy {
                    quantity: 1,
                    weight_limit: 7.0,
                    size_limit: cabin_size,
                },
                checked: CheckedPolicy {
                    allowance: 1,
                    weight_limit: 23.0,
                    size_limit: 158.0,
                },
            },
            business: TierPolicy {
                carry_on: CarryOnPolicy {
                    quantity: 2,
                    weight_limit: 12.0,
                    size_limit: cabin_size,
                },
                checked: CheckedPolicy {
                    allowance: 2,
                    weight_limit: 32.0,
                    size_limit: 158.0,
                },
            },
            first: TierPolicy {
                carry_on: CarryOnPolicy {
                    quantity: 2,
                    weight_limit: 12.0,
                    size_limit: cabin_size,
                },
                checked: CheckedPolicy {
                    allowance: 3,
                    weight_limit: 32.0,
                    size_limit: 158.0,
                },
            },
            child: AgeAddOn {
                allowance: 1,
                weight_limit: 23.0,
            },
            infant: AgeAddOn {
                allowance: 1,
                weight_limit: 10.0,
            },
        }
    }

    pub fn for_class(&self, travel_class: TravelClass) -> &TierPolicy {
        match travel_class {
            TravelClass::Economy => &self.economy,
            TravelClass::Business => &self.business,
            TravelClass::First => &self.first,
        }
    }

    pub fn add_on(&self, age_category: AgeCategory) -> Option<&AgeAddOn> {
        match age_category {
            AgeCategory::Adult => None,
            AgeCategory::Child => Some(&self.child),
            AgeCategory::Infant => Some(&self.infant),
        }
    }
}
