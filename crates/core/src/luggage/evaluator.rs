use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PolicyError;
use crate::luggage::classify::classify_carry_on;
use crate::luggage::fees::{FeeSchedule, Violation};
use crate::luggage::item::{LuggageItem, StorageTier};
use crate::luggage::reallocate::reallocate_checked;
use crate::luggage::request::ComplianceRequest;
use crate::luggage::tiers::{TierPolicies, STANDARD_TIERS};
use crate::policy::Policy;

/// Message prefix when at least one item exceeds the hard checked ceilings.
pub const CARGO_FAILURE_PREFIX: &str =
    "REASON OF FAILURE: Some items must be shipped as cargo due to weight or size. ";

/// The five-field verdict consumed by dataset labelers and harnesses.
/// `moved_to_checked` is the classifier overflow, before any reclaim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub compliant: bool,
    pub message: String,
    pub moved_to_checked: Vec<LuggageItem>,
    pub cargo_items: Vec<LuggageItem>,
    pub fees: f64,
}

/// Top-level luggage checker. Holds only read-only configuration; every
/// evaluation is an independent pure computation over its request.
#[derive(Debug, Clone)]
pub struct LuggageCompliance {
    tiers: TierPolicies,
    fees: FeeSchedule,
}

impl LuggageCompliance {
    pub fn new(tiers: TierPolicies, fees: FeeSchedule) -> Self {
        Self { tiers, fees }
    }

    /// Checker over the published Acme tables.
    pub fn standard() -> Self {
        Self::new(STANDARD_TIERS.clone(), FeeSchedule::standard())
    }

    pub fn tiers(&self) -> &TierPolicies {
        &self.tiers
    }

    pub fn evaluate(&self, request: &ComplianceRequest) -> Result<ComplianceReport, PolicyError> {
        let mut carry_on_items = Vec::new();
        let mut personal_items = Vec::new();
        let mut checked_items = Vec::new();
        for item in &request.luggages {
            match item.storage {
                StorageTier::CarryOn => carry_on_items.push(item.clone()),
                StorageTier::Personal => personal_items.push(item.clone()),
                StorageTier::Checked => checked_items.push(item.clone()),
                other => return Err(PolicyError::UnsupportedStorageTier(other)),
            }
        }

        let tier = self.tiers.for_class(request.travel_class);
        let split = classify_carry_on(&tier.carry_on, &carry_on_items, &personal_items);
        let moved_to_checked = split.overflow.clone();

        // Cabin slots left after the overflow was removed. Kept as the
        // original counting expression; it matches the retained set only
        // while overflow items are disjoint from kept items.
        let carry_on_capacity = tier.carry_on.quantity as i64 + 1
            - (carry_on_items.len() as i64 + personal_items.len() as i64
                - moved_to_checked.len() as i64);

        let mut candidates = checked_items;
        candidates.extend(split.overflow);
        let outcome = reallocate_checked(
            tier,
            self.tiers.add_on(request.age_category),
            candidates,
            carry_on_capacity,
        );

        let fees = self.fees.total(&outcome.violations);
        let mut message: String = outcome.violations.iter().map(Violation::describe).collect();
        let needs_cargo = !outcome.cargo.is_empty();
        if needs_cargo {
            message = format!("{CARGO_FAILURE_PREFIX}{message}");
        }

        debug!(
            travel_class = request.travel_class.as_code(),
            age_category = request.age_category.as_code(),
            moved = moved_to_checked.len(),
            retained = outcome.retained.len(),
            cargo = outcome.cargo.len(),
            fees,
            "luggage evaluation finished"
        );

        Ok(ComplianceReport {
            compliant: !needs_cargo && fees == 0.0,
            message,
            moved_to_checked,
            cargo_items: outcome.cargo,
            fees,
        })
    }
}

impl Default for LuggageCompliance {
    fn default() -> Self {
        Self::standard()
    }
}

impl Policy for LuggageCompliance {
    type Request = ComplianceRequest;
    type Outcome = ComplianceReport;

    fn evaluate(&self, request: &ComplianceRequest) -> Result<ComplianceReport, PolicyError> {
        LuggageCompliance::evaluate(self, request)
    }
}
