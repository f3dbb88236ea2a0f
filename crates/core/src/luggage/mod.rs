//! Luggage compliance engine.
//!
//! Evaluates a traveler's bags against the per-class tier policies: items
//! are first screened for the cabin, rejects overflow into the checked
//! tier, light items are pulled back into spare cabin capacity, and
//! whatever survives in the checked tier is charged for overweight,
//! oversize, and excess-piece violations. Items beyond the hard checked
//! ceilings must travel as unaccompanied cargo.

mod classify;
mod evaluator;
mod fees;
mod item;
mod reallocate;
mod request;
mod tiers;

pub use classify::{classify_carry_on, CarryOnSplit};
pub use evaluator::{ComplianceReport, LuggageCompliance, CARGO_FAILURE_PREFIX};
pub use fees::{FeeSchedule, Violation};
pub use item::{Dimensions, LuggageItem, StorageTier};
pub use reallocate::{reallocate_checked, ReallocationOutcome};
pub use request::{AgeCategory, ComplianceRequest, TravelClass};
pub use tiers::{
    AgeAddOn, CarryOnPolicy, CheckedPolicy, TierPolicies, TierPolicy, CARGO_SIZE_CEILING_CM,
    CARGO_WEIGHT_CEILING_KG,
};
