use std::fmt::Write as _;

/// A single chargeable finding from the checked-tier validation. Overweight
/// and oversize carry the offending item's measures for the report message;
/// one `ExtraPieces` finding covers every item past the allowance and is
/// charged per piece.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Overweight { axes: [f64; 3], weight: f64 },
    Oversize { axes: [f64; 3], total_size: f64 },
    ExtraPieces { count: usize },
}

impl Violation {
    /// Report fragment, terminated with "; " so fragments concatenate.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Overweight { axes, weight } => {
                let _ = write!(
                    out,
                    "The item with dimensions: [{}, {}, {}] and weight: {} is above weight limit; ",
                    axes[0], axes[1], axes[2], weight
                );
            }
            Self::Oversize { axes, total_size } => {
                let _ = write!(
                    out,
                    "The item with dimensions: [{}, {}, {}] and total_size: {} is above size limit; ",
                    axes[0], axes[1], axes[2], total_size
                );
            }
            Self::ExtraPieces { count } => {
                let _ = write!(
                    out,
                    "There are {count} excess items beyond the checked allowance; "
                );
            }
        }
        out
    }
}

/// Fixed per-violation charges in currency-agnostic units. Fees are
/// informational; the evaluator decides what a non-zero total means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    pub overweight: f64,
    pub oversize: f64,
    pub extra_piece: f64,
}

impl FeeSchedule {
    pub fn standard() -> Self {
        Self {
            overweight: 75.0,
            oversize: 100.0,
            extra_piece: 150.0,
        }
    }

    pub fn amount(&self, violation: &Violation) -> f64 {
        match violation {
            Violation::Overweight { .. } => self.overweight,
            Violation::Oversize { .. } => self.oversize,
            Violation::ExtraPieces { count } => self.extra_piece * *count as f64,
        }
    }

    pub fn total(&self, violations: &[Violation]) -> f64 {
        violations.iter().map(|v| self.amount(v)).sum()
    }
}
