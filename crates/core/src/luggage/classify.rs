use crate::luggage::item::LuggageItem;
use crate::luggage::tiers::CarryOnPolicy;

/// Partition of the cabin candidates. `kept` items stay in the cabin;
/// `overflow` items need checked-tier handling.
#[derive(Debug, Clone, PartialEq)]
pub struct CarryOnSplit {
    pub kept: Vec<LuggageItem>,
    pub overflow: Vec<LuggageItem>,
}

/// Screens carry-on and personal items against the cabin limits.
///
/// An item is cabin-compliant only if every axis is within the per-axis
/// size limit and its weight is within the per-item weight limit. The
/// aggregate cap is `quantity + 1`: one personal item always rides along
/// with the carry-on allotment. When the compliant set still exceeds the
/// cap, the heaviest excess items are drained into the overflow so the
/// lighter, easier-to-carry bags stay in the cabin. The sort is stable, so
/// equal-weight items keep their input order.
pub fn classify_carry_on(
    policy: &CarryOnPolicy,
    carry_on_items: &[LuggageItem],
    personal_items: &[LuggageItem],
) -> CarryOnSplit {
    let mut kept = Vec::new();
    let mut overflow = Vec::new();

    for item in carry_on_items.iter().chain(personal_items) {
        if fits_carry_on(policy, item) {
            kept.push(item.clone());
        } else {
            overflow.push(item.clone());
        }
    }

    let max_items = policy.quantity + 1;
    if kept.len() > max_items {
        kept.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        let excess = kept.len() - max_items;
        overflow.extend(kept.drain(..excess));
    }

    CarryOnSplit { kept, overflow }
}

pub(crate) fn fits_carry_on(policy: &CarryOnPolicy, item: &LuggageItem) -> bool {
    let within_size = item
        .dimensions
        .as_axes()
        .iter()
        .zip(policy.size_limit.iter())
        .all(|(axis, limit)| axis <= limit);

    within_size && item.weight <= policy.weight_limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::luggage::item::{Dimensions, StorageTier};

    fn cabin_policy() -> CarryOnPolicy {
        CarryOnPolicy {
            quantity: 1,
            weight_limit: 7.0,
            size_limit: [55.0, 40.0, 23.0],
        }
    }

    fn bag(weight: f64, height: f64, width: f64, depth: f64) -> LuggageItem {
        LuggageItem::new(
            StorageTier::CarryOn,
            weight,
            Dimensions::cm(height, width, depth),
        )
    }

    #[test]
    fn any_single_axis_over_limit_overflows() {
        let split = classify_carry_on(&cabin_policy(), &[bag(3.0, 55.0, 41.0, 20.0)], &[]);
        assert!(split.kept.is_empty());
        assert_eq!(split.overflow.len(), 1);
    }

    #[test]
    fn overweight_item_overflows_even_when_small() {
        let split = classify_carry_on(&cabin_policy(), &[bag(7.5, 30.0, 20.0, 10.0)], &[]);
        assert!(split.kept.is_empty());
        assert_eq!(split.overflow.len(), 1);
    }

    #[test]
    fn quantity_cap_moves_the_heaviest_items_out() {
        let carry_on = [bag(5.0, 50.0, 38.0, 20.0), bag(6.0, 50.0, 38.0, 20.0)];
        let personal = [bag(2.0, 30.0, 20.0, 10.0)];

        let split = classify_carry_on(&cabin_policy(), &carry_on, &personal);

        assert_eq!(split.overflow.len(), 1);
        assert_eq!(split.overflow[0].weight, 6.0);
        assert_eq!(split.kept.len(), 2);
    }

    #[test]
    fn equal_weights_break_ties_by_input_order() {
        let first = bag(5.0, 50.0, 38.0, 20.0);
        let mut second = bag(5.0, 50.0, 38.0, 20.0);
        second.dimensions.depth = 19.0;
        let third = bag(5.0, 50.0, 38.0, 18.0);

        let split = classify_carry_on(
            &cabin_policy(),
            &[first.clone(), second.clone(), third],
            &[],
        );

        // Stable descending sort leaves equal weights in input order, so the
        // earliest item is the one drained into overflow.
        assert_eq!(split.overflow, vec![first]);
        assert_eq!(split.kept[0], second);
    }

    #[test]
    fn under_cap_set_is_untouched() {
        let carry_on = [bag(5.0, 50.0, 38.0, 20.0)];
        let personal = [bag(2.0, 30.0, 20.0, 10.0)];

        let split = classify_carry_on(&cabin_policy(), &carry_on, &personal);

        assert_eq!(split.kept.len(), 2);
        assert!(split.overflow.is_empty());
    }
}
