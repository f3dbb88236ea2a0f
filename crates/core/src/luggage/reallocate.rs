use crate::luggage::classify::fits_carry_on;
use crate::luggage::fees::Violation;
use crate::luggage::item::LuggageItem;
use crate::luggage::tiers::{
    AgeAddOn, TierPolicy, CARGO_SIZE_CEILING_CM, CARGO_WEIGHT_CEILING_KG,
};

/// Result of the checked-tier pass. `reclaimed` went back to the cabin,
/// `retained` stays checked, `cargo` exceeded the hard ceilings. Cargo items
/// also appear in `retained`: cargo routing and fee accrual are independent
/// checks on the same item.
#[derive(Debug, Clone, PartialEq)]
pub struct ReallocationOutcome {
    pub reclaimed: Vec<LuggageItem>,
    pub retained: Vec<LuggageItem>,
    pub cargo: Vec<LuggageItem>,
    pub violations: Vec<Violation>,
}

/// Validates the checked candidates (original checked items plus cabin
/// overflow) against the class policy.
///
/// First pass rescues items back into spare cabin capacity, lightest first:
/// the opposite sort direction from the classifier, since here the goal is
/// to move the *easiest* items into the cheaper tier. `carry_on_capacity`
/// may be zero or negative and is checked before every reclaim. The second
/// pass walks the retained items in sorted order, routing hard-ceiling
/// breakers to cargo and accruing overweight/oversize findings against the
/// age-adjusted checked policy, then counts excess pieces.
pub fn reallocate_checked(
    tier: &TierPolicy,
    add_on: Option<&AgeAddOn>,
    mut candidates: Vec<LuggageItem>,
    mut carry_on_capacity: i64,
) -> ReallocationOutcome {
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut reclaimed = Vec::new();
    let mut retained = Vec::new();
    for item in candidates {
        if carry_on_capacity > 0 && fits_carry_on(&tier.carry_on, &item) {
            reclaimed.push(item);
            carry_on_capacity -= 1;
        } else {
            retained.push(item);
        }
    }

    let checked = tier.checked.with_add_on(add_on);

    let mut cargo = Vec::new();
    let mut violations = Vec::new();
    for item in &retained {
        let axes = item.dimensions.as_axes();
        let total_size = item.dimensions.linear_sum();

        if item.weight > CARGO_WEIGHT_CEILING_KG || total_size > CARGO_SIZE_CEILING_CM {
            cargo.push(item.clone());
        }

        if item.weight > checked.weight_limit {
            violations.push(Violation::Overweight {
                axes,
                weight: item.weight,
            });
        }

        if total_size > checked.size_limit && total_size <= CARGO_SIZE_CEILING_CM {
            violations.push(Violation::Oversize { axes, total_size });
        }
    }

    let excess = retained.len().saturating_sub(checked.allowance);
    if excess > 0 {
        violations.push(Violation::ExtraPieces { count: excess });
    }

    ReallocationOutcome {
        reclaimed,
        retained,
        cargo,
        violations,
    }
}
