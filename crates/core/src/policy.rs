use crate::error::PolicyError;

/// Seam between a deterministic policy checker and the collaborators that
/// consume its verdicts (dataset labelers, comparison harnesses, the CLI).
///
/// A checker is a pure function of its request: no clock access outside the
/// explicitly passed reference dates, no shared mutable state. An `Err` means
/// the request was structurally invalid; a non-compliant verdict is an `Ok`
/// outcome like any other.
pub trait Policy {
    type Request;
    type Outcome;

    fn evaluate(&self, request: &Self::Request) -> Result<Self::Outcome, PolicyError>;
}
