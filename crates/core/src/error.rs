use thiserror::Error;

use crate::luggage::StorageTier;

/// Failures for structurally invalid input. Business-rule violations are
/// never errors; they come back through the policy outcome types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("storage tier `{0}` is not accepted for passenger evaluation")]
    UnsupportedStorageTier(StorageTier),

    #[error("unknown travel class `{0}`")]
    UnknownTravelClass(String),

    #[error("unknown age category `{0}`")]
    UnknownAgeCategory(String),
}
