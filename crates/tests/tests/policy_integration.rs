use acme_core::luggage::{classify_carry_on, reallocate_checked, TierPolicies};
use acme_core::{
    AgeCategory, ComplianceRequest, Dimensions, LuggageCompliance, LuggageItem, StorageTier,
    TravelClass,
};

fn bag(storage: StorageTier, weight: f64, h: f64, w: f64, d: f64) -> LuggageItem {
    LuggageItem::new(storage, weight, Dimensions::cm(h, w, d))
}

#[test]
fn business_mixed_bags_pass_without_fees() {
    let request = ComplianceRequest::new(TravelClass::Business, AgeCategory::Adult)
        .with_luggage(bag(StorageTier::CarryOn, 5.0, 50.0, 40.0, 23.0))
        .with_luggage(bag(StorageTier::Checked, 25.0, 40.0, 30.0, 30.0))
        .with_luggage(bag(StorageTier::Personal, 4.0, 20.0, 50.0, 30.0));

    let report = LuggageCompliance::standard().evaluate(&request).unwrap();

    assert!(report.compliant);
    // The wide personal item fails the cabin size check and rides checked.
    assert_eq!(report.moved_to_checked.len(), 1);
    assert!(report.cargo_items.is_empty());
    assert_eq!(report.fees, 0.0);
}

#[test]
fn extra_carry_on_is_moved_to_checked_and_accepted() {
    let request = ComplianceRequest::new(TravelClass::Economy, AgeCategory::Adult)
        .with_luggage(bag(StorageTier::CarryOn, 5.0, 55.0, 40.0, 23.0))
        .with_luggage(bag(StorageTier::CarryOn, 6.0, 55.0, 40.0, 23.0))
        .with_luggage(bag(StorageTier::Personal, 2.0, 30.0, 20.0, 10.0));

    let report = LuggageCompliance::standard().evaluate(&request).unwrap();

    assert!(report.compliant);
    assert_eq!(report.moved_to_checked.len(), 1);
    // Heaviest compliant bag is the one that leaves the cabin.
    assert_eq!(report.moved_to_checked[0].weight, 6.0);
    assert_eq!(report.fees, 0.0);
}

#[test]
fn overweight_carry_on_is_valid_once_checked() {
    let request = ComplianceRequest::new(TravelClass::Economy, AgeCategory::Adult)
        .with_luggage(bag(StorageTier::CarryOn, 10.0, 55.0, 40.0, 23.0))
        .with_luggage(bag(StorageTier::Personal, 2.0, 30.0, 20.0, 10.0));

    let report = LuggageCompliance::standard().evaluate(&request).unwrap();

    assert!(report.compliant);
    assert_eq!(report.moved_to_checked.len(), 1);
    assert_eq!(report.fees, 0.0);
}

#[test]
fn oversize_carry_on_draws_a_fee_in_checked() {
    let request = ComplianceRequest::new(TravelClass::Business, AgeCategory::Adult)
        .with_luggage(bag(StorageTier::CarryOn, 6.0, 159.0, 10.0, 10.0))
        .with_luggage(bag(StorageTier::Personal, 2.0, 30.0, 20.0, 10.0));

    let report = LuggageCompliance::standard().evaluate(&request).unwrap();

    assert!(!report.compliant);
    assert!(report.message.contains("above size limit"));
    assert_eq!(report.moved_to_checked.len(), 1);
    assert!(report.fees > 0.0);
}

#[test]
fn hard_ceiling_item_must_ship_as_cargo() {
    let request = ComplianceRequest::new(TravelClass::Business, AgeCategory::Adult)
        .with_luggage(bag(StorageTier::CarryOn, 35.0, 100.0, 80.0, 50.0));

    let report = LuggageCompliance::standard().evaluate(&request).unwrap();

    assert!(!report.compliant);
    assert!(report.message.contains("must be shipped as cargo"));
    assert_eq!(report.cargo_items.len(), 1);
}

#[test]
fn child_add_on_lifts_the_checked_allowance() {
    let two_checked = ComplianceRequest::new(TravelClass::Economy, AgeCategory::Child)
        .with_luggage(bag(StorageTier::Checked, 10.0, 40.0, 30.0, 20.0))
        .with_luggage(bag(StorageTier::Checked, 12.0, 40.0, 30.0, 20.0));

    let report = LuggageCompliance::standard().evaluate(&two_checked).unwrap();

    // Economy allowance 1 plus the child add-on covers both bags.
    assert!(report.compliant);
    assert_eq!(report.fees, 0.0);
}

#[test]
fn classification_conserves_every_item() {
    let tiers = TierPolicies::standard();
    let tier = tiers.for_class(TravelClass::Economy);

    let carry_on = vec![
        bag(StorageTier::CarryOn, 5.0, 50.0, 38.0, 20.0),
        bag(StorageTier::CarryOn, 9.0, 50.0, 38.0, 20.0),
        bag(StorageTier::CarryOn, 6.5, 50.0, 38.0, 20.0),
    ];
    let personal = vec![bag(StorageTier::Personal, 2.0, 30.0, 20.0, 10.0)];

    let split = classify_carry_on(&tier.carry_on, &carry_on, &personal);
    assert_eq!(
        split.kept.len() + split.overflow.len(),
        carry_on.len() + personal.len()
    );

    let outcome = reallocate_checked(tier, None, split.overflow.clone(), 0);
    assert_eq!(
        outcome.reclaimed.len() + outcome.retained.len(),
        split.overflow.len()
    );
}

#[test]
fn adding_a_bag_never_lowers_the_fees() {
    let policy = LuggageCompliance::standard();

    let base = ComplianceRequest::new(TravelClass::Economy, AgeCategory::Adult)
        .with_luggage(bag(StorageTier::Checked, 10.0, 40.0, 30.0, 20.0))
        .with_luggage(bag(StorageTier::Checked, 12.0, 40.0, 30.0, 20.0));
    let base_fees = policy.evaluate(&base).unwrap().fees;

    let extended = base
        .clone()
        .with_luggage(bag(StorageTier::Checked, 11.0, 40.0, 30.0, 20.0));
    let extended_fees = policy.evaluate(&extended).unwrap().fees;

    assert!(extended_fees >= base_fees);
}

#[test]
fn evaluation_is_deterministic() {
    let request = ComplianceRequest::new(TravelClass::First, AgeCategory::Infant)
        .with_luggage(bag(StorageTier::CarryOn, 5.0, 50.0, 38.0, 20.0))
        .with_luggage(bag(StorageTier::CarryOn, 5.0, 50.0, 38.0, 19.0))
        .with_luggage(bag(StorageTier::CarryOn, 5.0, 50.0, 38.0, 18.0))
        .with_luggage(bag(StorageTier::Checked, 20.0, 60.0, 40.0, 30.0));

    let policy = LuggageCompliance::standard();
    let first = policy.evaluate(&request).unwrap();
    let second = policy.evaluate(&request).unwrap();

    assert_eq!(first, second);
}

#[test]
fn request_round_trips_through_the_flat_wire_shape() {
    let raw = r#"{
        "travel_class": "Economy",
        "age_category": "adult",
        "luggages": [
            {"storage": "carry-on", "weight": 5.0,
             "height": 50.0, "width": 40.0, "depth": 23.0, "unit": "cm"}
        ]
    }"#;

    let request: ComplianceRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.travel_class, TravelClass::Economy);
    assert_eq!(request.luggages.len(), 1);
    assert_eq!(request.luggages[0].dimensions.height, 50.0);

    let report = LuggageCompliance::standard().evaluate(&request).unwrap();
    assert!(report.compliant);
}
